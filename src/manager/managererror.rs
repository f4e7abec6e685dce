use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading rule and reference datasets.
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),

    #[error("{0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("invalid holiday rule '{name}': {reason}")]
    InvalidRule { name: String, reason: String },

    #[error("country '{0}' is defined more than once")]
    DuplicateCountry(String)
}

impl ManagerError {
    pub fn invalid_rule(name: &str, reason: impl Into<String>) -> ManagerError {
        ManagerError::InvalidRule { name: name.to_owned(), reason: reason.into() }
    }
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ManagerError>
    where T: for<'a> Deserialize<'a> {
    Ok(serde_json::from_value(json_value)?)
}
