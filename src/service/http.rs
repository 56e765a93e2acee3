// SPDX-License-Identifier: MIT

//! HTTP Service - reqwest implementation of [`EvaluationService`]

use super::{EvaluationRequest, EvaluationResponse, EvaluationService, Operation};
use crate::error::ClientError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// Talks to the evaluation service over HTTP
#[derive(Debug, Clone)]
pub struct HttpService {
    client: Client,
    base_url: Url,
}

impl HttpService {
    /// Create a new HttpService rooted at `base_url`.
    ///
    /// Any path on the base URL is kept; operation paths are appended to it.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url = Url::parse(&normalized).map_err(|source| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL for an operation
    pub fn endpoint(&self, operation: Operation) -> Result<Url, ClientError> {
        self.base_url
            .join(operation.path())
            .map_err(|source| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                source,
            })
    }

    /// Pull the `detail` string out of an error body, if there is one
    fn parse_error_detail(body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        value
            .get("detail")
            .and_then(|d| d.as_str())
            .filter(|d| !d.is_empty())
            .map(str::to_string)
    }
}

#[async_trait]
impl EvaluationService for HttpService {
    async fn send(&self, request: &EvaluationRequest) -> Result<EvaluationResponse, ClientError> {
        let operation = request.operation();
        let url = self.endpoint(operation)?;

        log::debug!(
            "POST {} body: {}",
            url,
            serde_json::to_string(request).unwrap_or_default()
        );

        let resp = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|source| ClientError::Transport { operation, source })?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|source| ClientError::Transport { operation, source })?;

        if !status.is_success() {
            log::warn!("{} returned {}: {}", operation, status, text);
            return Err(ClientError::Status {
                operation,
                status: status.as_u16(),
                detail: Self::parse_error_detail(&text),
            });
        }

        log::info!("{} response: {}", operation, text);

        serde_json::from_str(&text).map_err(|source| ClientError::Decode { operation, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_appends_operation_path() {
        let service = HttpService::new("https://plogic.onrender.com").unwrap();
        assert_eq!(
            service.endpoint(Operation::Evaluate).unwrap().as_str(),
            "https://plogic.onrender.com/evaluate"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let service = HttpService::new("http://127.0.0.1:8000/api").unwrap();
        assert_eq!(
            service.endpoint(Operation::Where).unwrap().as_str(),
            "http://127.0.0.1:8000/api/where"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = HttpService::new("not a url").unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_parse_error_detail() {
        assert_eq!(
            HttpService::parse_error_detail(r#"{"detail": "bad expression"}"#),
            Some("bad expression".to_string())
        );
        assert_eq!(HttpService::parse_error_detail("Internal Server Error"), None);
        assert_eq!(
            HttpService::parse_error_detail(r#"{"detail": [{"msg": "field required"}]}"#),
            None
        );
    }

    #[test]
    fn test_empty_detail_is_ignored() {
        assert_eq!(HttpService::parse_error_detail(r#"{"detail": ""}"#), None);

        let err = ClientError::Status {
            operation: Operation::Evaluate,
            status: 400,
            detail: HttpService::parse_error_detail(r#"{"detail": ""}"#),
        };
        assert_eq!(
            err.user_message(),
            "Error occurred while evaluating expression."
        );
    }
}
