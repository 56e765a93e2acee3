// SPDX-License-Identifier: MIT

//! Typed error handling for plogic-client
//!
//! Every failed exchange with the evaluation service collapses into a
//! [`ClientError`] that knows which [`Operation`] it came from, so the
//! dispatcher can always produce a human-readable message.

use crate::service::Operation;
use thiserror::Error;

/// Top-level error type for plogic-client
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with a non-2xx status
    #[error("{operation} failed with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status {
        operation: Operation,
        status: u16,
        detail: Option<String>,
    },

    /// The request never produced a response (connection refused, DNS, TLS...)
    #[error("{operation} request could not be sent: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not match the expected payload shape
    #[error("{operation} returned a malformed payload: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    /// Base URL could not be parsed or joined
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Configuration errors (bad env values, config installed twice)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The operation this error belongs to, if it came from a request
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Status { operation, .. }
            | Self::Transport { operation, .. }
            | Self::Decode { operation, .. } => Some(*operation),
            Self::InvalidBaseUrl { .. } | Self::Config(_) => None,
        }
    }

    /// Message to show in place of results.
    ///
    /// A non-empty `detail` string supplied by the service wins verbatim;
    /// everything else falls back to the operation's generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } if !detail.is_empty() => detail.clone(),
            _ => match self.operation() {
                Some(operation) => operation.fallback_message().to_string(),
                None => self.to_string(),
            },
        }
    }
}
