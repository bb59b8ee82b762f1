pub mod use_case;

pub use crate::use_case::UseCase;
pub use crate::use_case::UseCaseValidatable;
