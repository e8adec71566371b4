//! Shared HTTP plumbing for the interview service.

use mockprep_core::PrepError;
use mockprep_core::auth::AuthContext;
use mockprep_core::config::ApiSettings;
use mockprep_core::error::Result;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::dto::ErrorBody;

/// JSON client bound to one base URL and, optionally, one signed-in user.
///
/// The auth context is fixed at construction; signing in as someone else
/// means building a new client.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    auth: Option<AuthContext>,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings, auth: Option<AuthContext>) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .map_err(|e| PrepError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth(&self) -> Option<&AuthContext> {
        self.auth.as_ref()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::GET, path)).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::POST, path)).await
    }

    /// Builds a request carrying the client's bearer token, if any.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.auth {
            Some(auth) => builder.header(AUTHORIZATION, auth.bearer()),
            None => builder,
        }
    }

    pub(crate) async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "request failed before a response arrived");
            PrepError::transport(e.to_string())
        })?;

        let status = response.status();
        let url = response.url().path().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| PrepError::transport(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            let err = error_for_status(status, &body, &url);
            warn!(%status, url = %url, error = %err, "request rejected");
            return Err(err);
        }

        debug!(%status, url = %url, bytes = body.len(), "response received");
        Ok(serde_json::from_str(&body)?)
    }
}

/// Maps a non-success response to the error taxonomy, preferring the
/// server's own message.
pub(crate) fn error_for_status(status: StatusCode, body: &str, path: &str) -> PrepError {
    let message = ErrorBody::parse(body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string()
    });
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => PrepError::unauthorized(message),
        StatusCode::NOT_FOUND => PrepError::not_found("resource", path),
        _ => PrepError::api(status.as_u16(), message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ApiClient {
        let settings = ApiSettings {
            base_url: base_url.to_string(),
            ..Default::default()
        };
        ApiClient::new(&settings, None).unwrap()
    }

    #[test]
    fn test_url_joins_without_double_slashes() {
        let c = client("http://localhost:8080/api/");
        assert_eq!(c.base_url(), "http://localhost:8080/api");
        assert_eq!(c.url("/session/3"), "http://localhost:8080/api/session/3");
        assert_eq!(c.url("auth/login"), "http://localhost:8080/api/auth/login");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            error_for_status(StatusCode::UNAUTHORIZED, r#"{"error":"Invalid email or password"}"#, "/auth/login"),
            PrepError::unauthorized("Invalid email or password")
        );
        assert!(error_for_status(StatusCode::FORBIDDEN, "", "/session/1").is_unauthorized());
        assert!(error_for_status(StatusCode::NOT_FOUND, "", "/api/session/9").is_not_found());
        assert_eq!(
            error_for_status(StatusCode::BAD_REQUEST, r#"{"message":"Role is required"}"#, "/session/start"),
            PrepError::api(400, "Role is required")
        );
        assert_eq!(
            error_for_status(StatusCode::BAD_GATEWAY, "<html/>", "/session/1"),
            PrepError::api(502, "Bad Gateway")
        );
    }
}
