use thiserror::Error;

#[derive(Error, Debug)]
pub enum DsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid argument to {function}: {message}")]
    InvalidArgument { function: String, message: String },

    #[error("Unknown template function: {name}")]
    UnknownFunction { name: String },
}

impl DsError {
    pub fn invalid_argument(function: &str, message: impl Into<String>) -> Self {
        DsError::InvalidArgument {
            function: function.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DsError>;
