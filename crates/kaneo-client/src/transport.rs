//! The HTTP transport seam.
//!
//! [`KaneoClient`](crate::KaneoClient) depends on the [`Transport`] trait
//! rather than on ureq directly so tests can substitute a scripted
//! transport.

use std::time::Duration;

use kaneo_core::intent::Method;
use serde_json::Value;
use ureq::Agent;

use crate::error::{ClientError, Result};

/// A fully-resolved request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub bearer: String,
    pub body: Option<Value>,
}

/// A response of any status. Non-2xx is not an error at this layer.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `message` (or `error`) field of a JSON error body, if any.
    pub fn server_message(&self) -> Option<String> {
        let value: Value = serde_json::from_str(&self.body).ok()?;
        ["message", "error"]
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_str))
            .map(str::to_owned)
    }
}

/// Sends one request and returns the response, whatever its status.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// Blocking transport backed by a ureq agent.
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build();
        Self {
            agent: Agent::new_with_config(config),
        }
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let auth = format!("Bearer {}", request.bearer);
        let url = request.url.as_str();

        let result = match request.method {
            Method::Get => self
                .agent
                .get(url)
                .header("Authorization", auth.as_str())
                .header("Accept", "application/json")
                .call(),
            Method::Delete => self
                .agent
                .delete(url)
                .header("Authorization", auth.as_str())
                .header("Accept", "application/json")
                .call(),
            Method::Post | Method::Put | Method::Patch => {
                let builder = match request.method {
                    Method::Post => self.agent.post(url),
                    Method::Put => self.agent.put(url),
                    _ => self.agent.patch(url),
                }
                .header("Authorization", auth.as_str())
                .header("Accept", "application/json");
                match &request.body {
                    Some(body) => builder.send_json(body),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            status_text: String::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn success_range() {
        assert!(response(200, "").is_success());
        assert!(response(204, "").is_success());
        assert!(!response(301, "").is_success());
        assert!(!response(404, "").is_success());
    }

    #[test]
    fn server_message_from_json_body() {
        assert_eq!(
            response(400, r#"{"message":"Title is required"}"#).server_message(),
            Some("Title is required".to_string())
        );
        assert_eq!(
            response(500, r#"{"error":"boom"}"#).server_message(),
            Some("boom".to_string())
        );
        assert_eq!(response(502, "<html>Bad gateway</html>").server_message(), None);
        assert_eq!(response(400, r#"{"message":42}"#).server_message(), None);
    }
}
