// SPDX-License-Identifier: MIT

//! Local UI server
//!
//! Serves the input page and runs form submissions through the
//! [`Dispatcher`], answering with the page and the rendered result region.

pub mod page;

use axum::{
    extract::{Form, State},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::dispatcher::Dispatcher;
use crate::render::View;
use page::{render_page, FormValues};

/// Routes of the UI server, usable without binding a socket
pub fn router(dispatcher: Dispatcher) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health_check))
        .route("/ui/evaluate", post(evaluate))
        .route("/ui/compare", post(compare))
        .route("/ui/where", post(where_condition))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(dispatcher)
}

pub async fn serve(port: u16, dispatcher: Dispatcher) -> std::io::Result<()> {
    let app = router(dispatcher);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    log::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn index() -> Html<String> {
    log::info!("Serving index page");
    Html(render_page(&FormValues::default(), &View::default()))
}

#[derive(Deserialize)]
struct EvaluateForm {
    #[serde(default)]
    expression: String,
}

#[derive(Deserialize)]
struct CompareForm {
    #[serde(default)]
    expression1: String,
    #[serde(default)]
    expression2: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WhereForm {
    #[serde(default)]
    where_expression: String,
    #[serde(default)]
    conditions: String,
}

async fn evaluate(
    State(dispatcher): State<Dispatcher>,
    Form(form): Form<EvaluateForm>,
) -> Html<String> {
    let outcome = dispatcher.evaluate(&form.expression).await;
    let values = FormValues {
        expression: form.expression,
        ..Default::default()
    };
    Html(render_page(&values, &outcome.view))
}

async fn compare(
    State(dispatcher): State<Dispatcher>,
    Form(form): Form<CompareForm>,
) -> Html<String> {
    let outcome = dispatcher
        .compare(&form.expression1, &form.expression2)
        .await;
    let values = FormValues {
        expression1: form.expression1,
        expression2: form.expression2,
        ..Default::default()
    };
    Html(render_page(&values, &outcome.view))
}

async fn where_condition(
    State(dispatcher): State<Dispatcher>,
    Form(form): Form<WhereForm>,
) -> Html<String> {
    let outcome = dispatcher
        .where_condition(&form.where_expression, &form.conditions)
        .await;
    let values = FormValues {
        where_expression: form.where_expression,
        conditions: form.conditions,
        ..Default::default()
    };
    Html(render_page(&values, &outcome.view))
}
