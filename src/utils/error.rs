use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForwardError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{method} {url} returned status {status}")]
    StatusError {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Unknown domain '{name}'")]
    UnknownDomain { name: String },

    #[error("Unknown forward '{from}' in domain '{domain}'")]
    UnknownForward { domain: String, from: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ForwardError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 後端或網路問題，通常稍後重試即可
            ForwardError::ApiError(_) | ForwardError::StatusError { .. } => ErrorSeverity::Medium,
            ForwardError::ValidationError { .. }
            | ForwardError::UnknownDomain { .. }
            | ForwardError::UnknownForward { .. } => ErrorSeverity::High,
            ForwardError::ConfigError { .. }
            | ForwardError::ConfigValidationError { .. }
            | ForwardError::InvalidConfigValueError { .. }
            | ForwardError::UrlError(_) => ErrorSeverity::High,
            ForwardError::IoError(_) | ForwardError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ForwardError::ApiError(e) if e.is_timeout() => {
                "The mail backend did not answer in time".to_string()
            }
            ForwardError::ApiError(e) if e.is_connect() => {
                "Could not connect to the mail backend".to_string()
            }
            ForwardError::ApiError(_) => "The request to the mail backend failed".to_string(),
            ForwardError::StatusError { status, .. } => {
                format!("The mail backend rejected the request (HTTP {})", status)
            }
            ForwardError::ValidationError { message } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ForwardError::ApiError(_) => "Check that the backend is running and the endpoint is correct",
            ForwardError::StatusError { status, .. } if *status >= 500 => {
                "Check the backend logs; the forward may already exist"
            }
            ForwardError::StatusError { .. } => "Check the domain and address you entered",
            ForwardError::ValidationError { .. } => {
                "The source address must be new and end with @<domain>"
            }
            ForwardError::UnknownDomain { .. } | ForwardError::UnknownForward { .. } => {
                "Run 'forwards list' to see the current domains and forwards"
            }
            ForwardError::ConfigError { .. }
            | ForwardError::ConfigValidationError { .. }
            | ForwardError::InvalidConfigValueError { .. }
            | ForwardError::UrlError(_) => "Check the command line flags and config.toml",
            ForwardError::IoError(_) | ForwardError::SerializationError(_) => {
                "Re-run with --verbose for details"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ForwardError>;
