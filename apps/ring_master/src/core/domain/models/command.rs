use std::str::FromStr;

use crate::core::domain::models::AppError;

/// One step of a scripted ring scenario, e.g. `JOIN n4` or `PUT user:1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RingCommand {
    Join { node_id: String },
    Leave { node_id: String },
    Put { key: String },
    Locate { key: String },
}

impl FromStr for RingCommand {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();

        let action = parts.next().map(str::to_ascii_uppercase);
        let arg = parts.next().map(str::to_string);

        if parts.next().is_some() {
            return Err(AppError::BadRequest(format!("Too many arguments: {s}")));
        }

        match (action.as_deref(), arg) {
            (Some("JOIN"), Some(node_id)) => Ok(RingCommand::Join { node_id }),
            (Some("LEAVE"), Some(node_id)) => Ok(RingCommand::Leave { node_id }),
            (Some("PUT"), Some(key)) => Ok(RingCommand::Put { key }),
            (Some("LOCATE"), Some(key)) => Ok(RingCommand::Locate { key }),
            (Some(action), None) => Err(AppError::BadRequest(format!(
                "Missing argument for {action}"
            ))),
            (Some(action), Some(_)) => {
                Err(AppError::BadRequest(format!("Unknown action: {action}")))
            }
            (None, _) => Err(AppError::BadRequest("Empty command".to_string())),
        }
    }
}

/// Parses a `;`-separated list of commands, skipping blank entries.
pub fn parse_script(script: &str) -> Result<Vec<RingCommand>, AppError> {
    script
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(RingCommand::from_str)
        .collect()
}
