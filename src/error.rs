use thiserror::Error;

pub type Result<T> = std::result::Result<T, GtrackError>;

#[derive(Error, Debug)]
pub enum GtrackError {
    #[error("Git repository error: {0}")]
    GitRepo(String),
    #[error("Git command failed ({status}): {stderr}")]
    GitCommand { status: String, stderr: String },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
