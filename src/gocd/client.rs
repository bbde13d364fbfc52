//! GoCD HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{GocdError, Result};
use crate::profile::Profile;

/// GoCD API client
pub struct GocdClient {
    client: Client,
    server: String,
    username: Option<String>,
    password: Option<String>,
}

impl GocdClient {
    /// Create a new GoCD client for a resolved profile
    pub fn new(profile: &Profile) -> Self {
        let client = Client::builder()
            .user_agent(concat!("gocd-tf-generate/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(profile.skip_ssl_check)
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            server: profile.server.trim_end_matches('/').to_string(),
            username: profile.username.clone().filter(|u| !u.is_empty()),
            password: profile.password.clone().filter(|p| !p.is_empty()),
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        format!("{}{}", self.server, api::BASE_PATH)
    }

    /// Check if requests carry basic auth
    pub fn has_auth(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str, accept: &str) -> reqwest::RequestBuilder {
        let builder = self.client.get(url).header("Accept", accept);
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => builder.basic_auth(username, Some(password)),
            _ => builder,
        }
    }

    /// Fetch a JSON resource by API path
    ///
    /// # Arguments
    /// * `path` - API path below `/api` (e.g., "admin/templates/build")
    /// * `accept` - versioned media type the endpoint expects
    /// * `resource_label` - Human-readable label for error messages
    pub async fn fetch_json<T>(&self, path: &str, accept: &str, resource_label: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url(), path);
        debug!(
            "Fetching {} from: {} (basic auth: {})",
            resource_label,
            url,
            self.has_auth()
        );

        let response = self.get(&url, accept).send().await?;
        self.parse_api_response(response, resource_label).await
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GocdError::Api {
                status: status.as_u16(),
                message: error_message(error_context, &body),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            GocdError::Json(format!("Failed to parse {}: {}", error_context, e))
        })
    }
}

/// Build an error message, appending GoCD's own `message` when the body has one
fn error_message(error_context: &str, body: &str) -> String {
    let server_message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from));

    match server_message {
        Some(msg) => format!("Failed to fetch {}: {}", error_context, msg),
        None => format!("Failed to fetch {}", error_context),
    }
}

#[cfg(test)]
impl GocdClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(server: &str) -> Self {
        Self::new(&Profile {
            server: server.to_string(),
            username: Some("admin".to_string()),
            password: Some("badger".to_string()),
            skip_ssl_check: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Deserialize, Debug)]
    struct TestItem {
        name: String,
    }

    fn profile(server: &str) -> Profile {
        Profile {
            server: server.to_string(),
            username: None,
            password: None,
            skip_ssl_check: false,
        }
    }

    #[test]
    fn test_base_url() {
        let client = GocdClient::new(&profile("https://ci.example.com/go"));
        assert_eq!(client.base_url(), "https://ci.example.com/go/api");
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let client = GocdClient::new(&profile("https://ci.example.com/go/"));
        assert_eq!(client.base_url(), "https://ci.example.com/go/api");
    }

    #[test]
    fn test_has_auth_requires_both_fields() {
        let mut p = profile("https://ci.example.com/go");
        p.username = Some("admin".to_string());
        assert!(!GocdClient::new(&p).has_auth());

        p.password = Some(String::new());
        assert!(!GocdClient::new(&p).has_auth());

        p.password = Some("badger".to_string());
        assert!(GocdClient::new(&p).has_auth());
    }

    #[test]
    fn test_error_message_with_server_message() {
        let msg = error_message(
            "template 'x'",
            r#"{"message": "Either the resource you requested was not found, or you are not authorized"}"#,
        );
        assert!(msg.starts_with("Failed to fetch template 'x': Either"));
    }

    #[test]
    fn test_error_message_with_plain_body() {
        let msg = error_message("pipeline groups", "<html>oops</html>");
        assert_eq!(msg, "Failed to fetch pipeline groups");
    }

    #[tokio::test]
    async fn test_fetch_json_sends_auth_and_accept() {
        let mock_server = MockServer::start().await;
        let client = GocdClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/test-items/one"))
            .and(header("Accept", api::ACCEPT_V3))
            .and(header_exists("Authorization"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "one"})),
            )
            .mount(&mock_server)
            .await;

        let item: TestItem = client
            .fetch_json("test-items/one", api::ACCEPT_V3, "test item")
            .await
            .unwrap();
        assert_eq!(item.name, "one");
    }

    #[tokio::test]
    async fn test_fetch_json_api_error() {
        let mock_server = MockServer::start().await;
        let client = GocdClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/test-items/missing"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"message": "Not found."})),
            )
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_json::<TestItem>("test-items/missing", api::ACCEPT_JSON, "test item")
            .await;

        match result.unwrap_err() {
            GocdError::Api { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("Not found."));
            }
            other => panic!("Expected GocdError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_json_invalid_body() {
        let mock_server = MockServer::start().await;
        let client = GocdClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/test-items/broken"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_json::<TestItem>("test-items/broken", api::ACCEPT_JSON, "test item")
            .await;

        match result.unwrap_err() {
            GocdError::Json(msg) => assert!(msg.contains("test item")),
            other => panic!("Expected GocdError::Json, got {:?}", other),
        }
    }
}
