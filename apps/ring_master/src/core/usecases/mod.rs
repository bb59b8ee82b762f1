pub mod add_node_use_case;
pub mod assign_data_use_case;
pub mod locate_data_use_case;
pub mod remove_node_use_case;

pub use add_node_use_case::AddNodeUseCase;
pub use assign_data_use_case::AssignDataUseCase;
pub use locate_data_use_case::LocateDataUseCase;
pub use remove_node_use_case::RemoveNodeUseCase;
