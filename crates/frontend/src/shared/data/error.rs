use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("request for '{key}' failed with HTTP status {status}")]
    Fetch { key: String, status: u16 },
    #[error("request for '{key}' failed: {message}")]
    Network { key: String, message: String },
    #[error("invalid data for '{key}': {message}")]
    Parse { key: String, message: String },
}
