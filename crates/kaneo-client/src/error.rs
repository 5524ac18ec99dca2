//! Client error types.

/// Errors that can occur while talking to the API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced an HTTP response (DNS, connect, TLS, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server rejected the credentials.
    #[error("unauthorized: {message}")]
    Unauthorized {
        /// Server message or status text.
        message: String,
    },

    /// Any other non-2xx response.
    #[error("server returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server message or status text.
        message: String,
    },

    /// A 2xx response body did not match the expected shape.
    #[error("unexpected response from {path}: {source}")]
    Decode {
        /// API path that was requested.
        path: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the client crate.
pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// Classifies a non-2xx response.
    ///
    /// `server_message` wins over `status_text`; a 401 or a message
    /// mentioning "Unauthorized" becomes [`ClientError::Unauthorized`].
    pub fn from_status(status: u16, status_text: &str, server_message: Option<String>) -> Self {
        let message = server_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                if status_text.is_empty() {
                    format!("HTTP {status}")
                } else {
                    status_text.to_string()
                }
            });

        if status == 401 || message.contains("Unauthorized") {
            Self::Unauthorized { message }
        } else {
            Self::Status { status, message }
        }
    }

    /// Returns `true` if this is a [`ClientError::Unauthorized`].
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// A follow-up suggestion for the user, if one applies.
    ///
    /// Only affects messaging; every error is handled the same way.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Unauthorized { .. } => {
                Some("check your API token with 'kn config set token <token>'")
            }
            Self::Transport(_) => Some("check 'instance-url' and that the server is reachable"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_401_is_unauthorized() {
        let err = ClientError::from_status(401, "Unauthorized", None);
        assert!(err.is_unauthorized());
        assert!(err.hint().is_some());
    }

    #[test]
    fn unauthorized_message_on_other_status() {
        let err = ClientError::from_status(403, "Forbidden", Some("Unauthorized access".into()));
        assert!(err.is_unauthorized());
    }

    #[test]
    fn server_message_wins_over_status_text() {
        let err = ClientError::from_status(404, "Not Found", Some("Task not found".into()));
        match err {
            ClientError::Status { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Task not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn blank_server_message_falls_back_to_status_text() {
        let err = ClientError::from_status(500, "Internal Server Error", Some("  ".into()));
        assert_eq!(err.to_string(), "server returned 500: Internal Server Error");
        let err = ClientError::from_status(599, "", None);
        assert_eq!(err.to_string(), "server returned 599: HTTP 599");
    }
}
