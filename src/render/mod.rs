// SPDX-License-Identifier: MIT

//! Render module - turns an [`EvaluationResponse`] into a [`View`]
//!
//! Rendering is a pure function from response data to a view description.
//! Writing that view out is left to the submodules:
//! - [html] - markup for the result region of the web page
//! - [text] - plain text for the terminal

pub mod html;
pub mod text;

use crate::service::EvaluationResponse;
use serde::Serialize;
use serde_json::Value;

/// A single element of the result region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Heading {
        text: String,
    },
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Paragraph {
        text: String,
    },
    List {
        items: Vec<String>,
    },
}

/// Everything shown in the result region at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct View {
    pub nodes: Vec<Node>,
    pub is_error: bool,
}

impl View {
    /// A view holding only an error message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::Paragraph {
                text: message.into(),
            }],
            is_error: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Build the view for a successful response.
///
/// Nodes always come in the same order: expression heading, truth table,
/// equality sentence, conditions. Each is emitted only when its field is
/// present. An empty truth table renders nothing since it has no header.
/// Condition values go through [`format_cell`] like table cells, so a
/// structured value is listed as JSON rather than its bare string form.
pub fn render(response: &EvaluationResponse) -> View {
    let mut nodes = Vec::new();

    if let Some(expression) = &response.expression {
        nodes.push(Node::Heading {
            text: format!("Expression: {}", expression),
        });
    }

    if let Some(first) = response.truth_table.as_ref().and_then(|t| t.first()) {
        let header = first.keys().cloned().collect();
        let rows = response
            .truth_table
            .iter()
            .flatten()
            .map(|row| row.values().map(format_cell).collect())
            .collect();
        nodes.push(Node::Table { header, rows });
    }

    if let Some(are_equal) = response.are_equal {
        let text = if are_equal {
            "Expressions are equal."
        } else {
            "Expressions are not equal."
        };
        nodes.push(Node::Paragraph {
            text: text.to_string(),
        });
    }

    if let Some(conditions) = &response.conditions {
        nodes.push(Node::Heading {
            text: "Conditions:".to_string(),
        });
        nodes.push(Node::List {
            items: conditions
                .iter()
                .map(|(key, value)| format!("{}: {}", key, format_cell(value)))
                .collect(),
        });
    }

    View {
        nodes,
        is_error: false,
    }
}

/// Display form of a single value.
///
/// Structured values (objects, arrays, null) are shown as JSON; scalars use
/// their plain form, with integral floats printed without a fraction.
pub fn format_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        Value::Null | Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
