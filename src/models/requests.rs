//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

use crate::error::{CacheError, Result};

/// Query string for the sequence endpoints (`?order=N`)
///
/// Kept as a raw string so that a bad value produces our own message
/// rather than an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderQuery {
    /// Requested position in the sequence, starting at 1
    #[serde(default)]
    pub order: Option<String>,
}

impl OrderQuery {
    pub fn new(order: impl Into<String>) -> Self {
        Self {
            order: Some(order.into()),
        }
    }

    /// Parses and validates the order.
    ///
    /// Fails when the parameter is missing, not an integer, or below 1.
    pub fn order(&self) -> Result<u64> {
        let raw = match self.order.as_deref() {
            None | Some("") => {
                return Err(CacheError::InvalidRequest(
                    "Missing 'order' query parameter".to_string(),
                ))
            }
            Some(raw) => raw,
        };

        match raw.trim().parse::<u64>() {
            Ok(order) if order >= 1 => Ok(order),
            _ => Err(CacheError::InvalidRequest(format!(
                "Provided order '{}' not a positive integer",
                raw
            ))),
        }
    }
}
