use app_ring::RingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Ring error: {0}")]
    Ring(#[from] RingError),

    #[error("Task error: {0}")]
    Join(String),
}
