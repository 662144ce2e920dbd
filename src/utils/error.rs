use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid JSON format")]
    InvalidJson,

    #[error("Validation failed or invalid JSON-LD")]
    InvalidDocument { errors: Vec<String> },

    #[error("Validation failed: {reason}")]
    InvalidProject { reason: String },
}

pub type Result<T> = std::result::Result<T, TrackerError>;
