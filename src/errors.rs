#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("Invalid status code: {0}")]
    InvalidStatusCode(String),

    #[error("Invalid header name: {0}")]
    InvalidHeaderName(String),

    #[error("Invalid value for header {name}: {value}")]
    InvalidHeaderValue { name: String, value: String },

    #[error("Unsupported protocol version: {0}")]
    UnsupportedVersion(String),

    #[error("Stream error: {0}")]
    Io(#[from] std::io::Error),
}
