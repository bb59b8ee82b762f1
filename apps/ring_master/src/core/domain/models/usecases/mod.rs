pub mod add_node_use_case;
pub mod assign_data_use_case;
pub mod locate_data_use_case;
pub mod remove_node_use_case;

pub use add_node_use_case::{AddNodeUseCaseInput, AddNodeUseCaseOutput};
pub use assign_data_use_case::{AssignDataUseCaseInput, AssignDataUseCaseOutput};
pub use locate_data_use_case::{LocateDataUseCaseInput, LocateDataUseCaseOutput};
pub use remove_node_use_case::{RemoveNodeUseCaseInput, RemoveNodeUseCaseOutput};
