use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur during API calls.
///
/// Every variant carries the normalized human-readable message for the
/// caller; `Network` additionally keeps the transport error as source.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid credentials: {message} {location}")]
    InvalidCredentials {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Network failure: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Session expired: {message} {location}")]
    SessionExpired {
        message: String,
        location: ErrorLocation,
    },

    #[error("API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// The normalized message, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidCredentials { message, .. }
            | Self::Validation { message, .. }
            | Self::Network { message, .. }
            | Self::SessionExpired { message, .. }
            | Self::Api { message, .. }
            | Self::Json { message, .. } => message,
        }
    }

    /// Create an InvalidCredentials error with location
    #[track_caller]
    pub fn invalid_credentials(message: String) -> Self {
        ApiError::InvalidCredentials {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a Validation error with location
    #[track_caller]
    pub fn validation(message: String) -> Self {
        ApiError::Validation {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a SessionExpired error with location
    #[track_caller]
    pub fn session_expired(message: String) -> Self {
        ApiError::SessionExpired {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an Api error with location
    #[track_caller]
    pub fn api(status: u16, message: String) -> Self {
        ApiError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ApiError::Network {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ApiError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ApiError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ApiError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
