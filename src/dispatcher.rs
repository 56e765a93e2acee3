// SPDX-License-Identifier: MIT

//! Request dispatcher - turns user input into service calls and results into views
//!
//! Each operation sends one request, awaits it, and overwrites the shared
//! [`ResultArea`] with either the rendered response or an error message.
//! Concurrent operations are not ordered: whichever finishes last is what
//! the area shows.

use crate::conditions::Conditions;
use crate::error::ClientError;
use crate::render::{self, View};
use crate::service::{EvaluationRequest, EvaluationResponse, EvaluationService};
use std::sync::Arc;
use tokio::sync::RwLock;

/// The display surface results are rendered into
#[derive(Clone, Default)]
pub struct ResultArea {
    view: Arc<RwLock<View>>,
}

impl ResultArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole content of the area
    pub async fn show(&self, view: View) {
        let mut current = self.view.write().await;
        *current = view;
    }

    pub async fn current(&self) -> View {
        self.view.read().await.clone()
    }

    pub async fn is_error(&self) -> bool {
        self.view.read().await.is_error
    }
}

/// Result of one dispatched operation
#[derive(Debug)]
pub struct Outcome {
    pub view: View,
    pub result: Result<EvaluationResponse, ClientError>,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Clone)]
pub struct Dispatcher {
    service: Arc<dyn EvaluationService>,
    area: ResultArea,
}

impl Dispatcher {
    pub fn new(service: Arc<dyn EvaluationService>) -> Self {
        Self::with_area(service, ResultArea::new())
    }

    pub fn with_area(service: Arc<dyn EvaluationService>, area: ResultArea) -> Self {
        Self { service, area }
    }

    pub fn area(&self) -> &ResultArea {
        &self.area
    }

    /// Evaluate a single expression and show its truth table
    pub async fn evaluate(&self, expression: &str) -> Outcome {
        self.dispatch(EvaluationRequest::evaluate(expression)).await
    }

    /// Check two expressions for equivalence
    pub async fn compare(&self, first: &str, second: &str) -> Outcome {
        self.dispatch(EvaluationRequest::compare(first, second))
            .await
    }

    /// Evaluate an expression under conditions typed as `a:1, b:0`
    pub async fn where_condition(&self, expression: &str, conditions: &str) -> Outcome {
        let conditions = Conditions::parse(conditions);
        log::debug!("Parsed conditions: {:?}", conditions);
        self.dispatch(EvaluationRequest::where_condition(expression, conditions))
            .await
    }

    /// Send any request and update the result area
    pub async fn dispatch(&self, request: EvaluationRequest) -> Outcome {
        let operation = request.operation();
        log::info!("Dispatching {} request", operation);

        let result = self.service.send(&request).await;
        let view = match &result {
            Ok(response) => render::render(response),
            Err(e) => {
                log::error!("Error in {}: {}", operation, e);
                View::error(e.user_message())
            }
        };

        self.area.show(view.clone()).await;
        Outcome { view, result }
    }
}
