use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Malformed response body: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Recommendation service reported failure: {message}")]
    ServiceError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, RecError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RecError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RecError::ServiceError { .. } => ErrorSeverity::Medium,
            RecError::ApiError(_) | RecError::SerializationError(_) => ErrorSeverity::High,
            RecError::InvalidConfigValueError { .. } | RecError::MissingConfigError { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RecError::ServiceError { .. } => {
                "Check that the user id exists and the method is one the service accepts"
            }
            RecError::ApiError(_) => {
                "Check that the recommendation service is running and the base URL is correct"
            }
            RecError::SerializationError(_) => {
                "Check that the endpoint returns the expected JSON body"
            }
            RecError::InvalidConfigValueError { .. } | RecError::MissingConfigError { .. } => {
                "Review the command-line arguments and correct the reported field"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RecError::ServiceError { message } => {
                format!("The recommendation service reported a failure: {}", message)
            }
            RecError::ApiError(e) => {
                format!("Could not reach the recommendation service: {}", e)
            }
            RecError::SerializationError(e) => {
                format!("The service returned an unreadable response: {}", e)
            }
            RecError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            RecError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
        }
    }
}
