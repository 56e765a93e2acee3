// SPDX-License-Identifier: MIT

//! Service module - the boundary with the remote evaluation service
//!
//! This module defines the request/response shapes exchanged with the
//! backend and the [`EvaluationService`] trait the dispatcher talks to.
//! The reqwest-backed implementation lives in [http].

pub mod http;

use crate::conditions::Conditions;
use crate::error::ClientError;
use async_trait::async_trait;
use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// The three operations the service exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Evaluate,
    Compare,
    Where,
}

impl Operation {
    /// Path relative to the configured base URL
    pub fn path(&self) -> &'static str {
        match self {
            Self::Evaluate => "evaluate",
            Self::Compare => "compare",
            Self::Where => "where",
        }
    }

    /// Message shown when a failure carries no service-supplied detail
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::Evaluate => "Error occurred while evaluating expression.",
            Self::Compare => "Error occurred while comparing expressions.",
            Self::Where => "Error occurred while evaluating where condition.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A request to the evaluation service.
///
/// Serializes to exactly the body the matching endpoint expects.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationRequest {
    Evaluate {
        expression: String,
    },
    Compare {
        first: String,
        second: String,
    },
    Where {
        expression: String,
        conditions: Conditions,
    },
}

impl EvaluationRequest {
    pub fn evaluate(expression: impl Into<String>) -> Self {
        Self::Evaluate {
            expression: expression.into(),
        }
    }

    pub fn compare(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::Compare {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn where_condition(expression: impl Into<String>, conditions: Conditions) -> Self {
        Self::Where {
            expression: expression.into(),
            conditions,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::Evaluate { .. } => Operation::Evaluate,
            Self::Compare { .. } => Operation::Compare,
            Self::Where { .. } => Operation::Where,
        }
    }
}

#[derive(Serialize)]
struct ExpressionBody<'a> {
    expression: &'a str,
}

#[derive(Serialize)]
struct WhereBody<'a> {
    expression: &'a str,
    conditions: &'a Conditions,
}

impl Serialize for EvaluationRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Evaluate { expression } => ExpressionBody { expression }.serialize(serializer),
            Self::Compare { first, second } => {
                let mut pair = serializer.serialize_tuple(2)?;
                pair.serialize_element(first)?;
                pair.serialize_element(second)?;
                pair.end()
            }
            Self::Where {
                expression,
                conditions,
            } => WhereBody {
                expression,
                conditions,
            }
            .serialize(serializer),
        }
    }
}

/// One row of a truth table, in the column order the service sent it
pub type TruthTableRow = Map<String, Value>;

/// Payload returned by the service on success.
///
/// Every field is independently optional; an explicit `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truth_table: Option<Vec<TruthTableRow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub are_equal: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Map<String, Value>>,
}

/// Core trait for anything that can answer evaluation requests
#[async_trait]
pub trait EvaluationService: Send + Sync {
    async fn send(&self, request: &EvaluationRequest) -> Result<EvaluationResponse, ClientError>;
}
