pub mod command;
pub mod error;
pub mod placement;
pub mod usecases;

pub use command::RingCommand;
pub use error::AppError;
pub use placement::{NodeLoad, Placement};
