//! Error type and error stringification
//!
//! The crate's own failures are limited to argument validation; everything
//! else that can go wrong happens inside caller-supplied operations and is
//! propagated untouched. `stringify_error` renders any caught error (and its
//! source chain) as JSON so it can be logged faithfully.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Serializable representation of an error and its source chain
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SerializableError {
    /// User-facing error message
    pub message: String,
    /// Source error if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Box<SerializableError>>,
}

impl SerializableError {
    /// Build the representation by walking the error's source chain
    pub fn from_error(error: &(dyn StdError + 'static)) -> Self {
        Self {
            message: error.to_string(),
            source: error.source().map(|s| Box::new(Self::from_error(s))),
        }
    }
}

/// Render an error and its source chain as a JSON string
pub fn stringify_error(error: &(dyn StdError + 'static)) -> String {
    serde_json::to_string(&SerializableError::from_error(error))
        .unwrap_or_else(|_| error.to_string())
}

/// Render an error and its source chain as pretty-printed JSON
pub fn stringify_error_pretty(error: &(dyn StdError + 'static)) -> String {
    serde_json::to_string_pretty(&SerializableError::from_error(error))
        .unwrap_or_else(|_| error.to_string())
}
