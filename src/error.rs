//! Error types for Actgraph.
//!
//! Mapping, dependency resolution and the form state store are total and never
//! produce an error. `ActgraphError` only surfaces at the edges of the crate:
//! configuration loading and fetching the raw graph.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all Actgraph operations.
#[derive(Deserialize, Serialize, Error, Debug, Clone, PartialEq)]
pub enum ActgraphError {
    /// Configuration loading, parsing or validation errors.
    #[error("{0}")]
    Config(String),

    /// Data conversion errors (JSON, TOML).
    #[error("{0}")]
    Convert(String),

    /// Transport-level failures while fetching a graph.
    #[error("{0}")]
    Fetch(String),

    /// The graph endpoint answered with a non-success status.
    #[error("status: {code}, message: {message}")]
    Status {
        code: u16,
        message: String,
    },
}

impl From<serde_json::Error> for ActgraphError {
    fn from(error: serde_json::Error) -> Self {
        ActgraphError::Convert(error.to_string())
    }
}

impl From<toml::de::Error> for ActgraphError {
    fn from(error: toml::de::Error) -> Self {
        ActgraphError::Config(error.to_string())
    }
}

impl From<reqwest::Error> for ActgraphError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return ActgraphError::Convert(error.to_string());
        }
        match error.status() {
            Some(status) => ActgraphError::Status {
                code: status.as_u16(),
                message: error.to_string(),
            },
            None => ActgraphError::Fetch(error.to_string()),
        }
    }
}
