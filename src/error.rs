use std::fmt;

/// Custom error type for GoCD fetch and render operations
#[derive(Debug)]
pub enum GocdError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// JSON or YAML parsing error
    Json(String),
    /// Profile loading or resolution error
    Config(String),
    /// Renderer could not produce output
    Render(String),
    /// Writing generated output failed
    Output(String),
    /// Requested resource does not exist
    NotFound(String),
}

impl fmt::Display for GocdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GocdError::Http(e) => write!(f, "HTTP request failed: {}", e),
            GocdError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            GocdError::Json(msg) => write!(f, "JSON error: {}", msg),
            GocdError::Config(msg) => write!(f, "Configuration error: {}", msg),
            GocdError::Render(msg) => write!(f, "Render error: {}", msg),
            GocdError::Output(msg) => write!(f, "Output error: {}", msg),
            GocdError::NotFound(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GocdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GocdError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GocdError {
    fn from(err: reqwest::Error) -> Self {
        GocdError::Http(err)
    }
}

impl From<serde_json::Error> for GocdError {
    fn from(err: serde_json::Error) -> Self {
        GocdError::Json(err.to_string())
    }
}

impl From<std::io::Error> for GocdError {
    fn from(err: std::io::Error) -> Self {
        GocdError::Output(err.to_string())
    }
}

impl From<fmt::Error> for GocdError {
    fn from(err: fmt::Error) -> Self {
        GocdError::Render(err.to_string())
    }
}

/// Result type alias for GoCD operations
pub type Result<T> = std::result::Result<T, GocdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = GocdError::Api {
            status: 404,
            message: "Not found".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Not found"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GocdError>();
    }

    #[test]
    fn test_config_error_display() {
        let err = GocdError::Config("Could not find configuration profile 'ci'".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("'ci'"));
    }

    #[test]
    fn test_render_error_display() {
        let err = GocdError::Render("pipeline name must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Render error: pipeline name must not be empty"
        );
    }

    #[test]
    fn test_not_found_display_is_bare() {
        let err = GocdError::NotFound("Pipeline 'up42' not found".to_string());
        assert_eq!(err.to_string(), "Pipeline 'up42' not found");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: GocdError = json_err.into();
        match err {
            GocdError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected GocdError::Json"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: GocdError = io_err.into();
        match err {
            GocdError::Output(msg) => assert!(msg.contains("read-only")),
            _ => panic!("Expected GocdError::Output"),
        }
    }

    #[test]
    fn test_from_fmt_error() {
        let err: GocdError = fmt::Error.into();
        assert!(matches!(err, GocdError::Render(_)));
    }

    #[test]
    fn test_error_source_is_none_for_non_http() {
        use std::error::Error;
        let err = GocdError::Api {
            status: 500,
            message: "Server error".to_string(),
        };
        assert!(err.source().is_none());
    }
}
