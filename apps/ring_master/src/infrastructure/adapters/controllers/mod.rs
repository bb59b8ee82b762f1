pub mod script_controller;

pub use script_controller::ScriptController;
