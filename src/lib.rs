// SPDX-License-Identifier: MIT

//! Client for a remote boolean-logic evaluation service.
//!
//! Requests go out through a [`dispatcher::Dispatcher`], responses come back
//! as [`service::EvaluationResponse`] and are turned into a
//! [`render::View`] that can be written as HTML or plain text.

pub mod conditions;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod render;
pub mod server;
pub mod service;
