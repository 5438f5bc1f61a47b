// survey-client/src/api/client.rs

use crate::api::envelope::Envelope;
use crate::config::ApiConfig;
use crate::error::{ApiErrorBody, ErrorKind, AUTH_REQUIRED_MESSAGE};
use crate::logging;
use crate::notify::{AuthExpiredHandler, LogAuthExpiredHandler};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 認証付きリクエストゲートウェイ
///
/// The single path by which the application issues backend requests. The
/// session credential lives in the HTTP client's cookie store and is attached
/// implicitly; it is never readable from outside this type. Each call is
/// exactly one network round trip: no retry, no deduplication, no caching.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth_expired: Arc<dyn AuthExpiredHandler>,
    // Collapses concurrent 401s into a single navigation side effect.
    auth_expired_fired: AtomicBool,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, String> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "X-Requested-With",
            HeaderValue::from_static("XMLHttpRequest"),
        );

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            auth_expired: Arc::new(LogAuthExpiredHandler),
            auth_expired_fired: AtomicBool::new(false),
        })
    }

    /// ナビゲーション境界を差し替える
    pub fn with_auth_expired_handler(mut self, handler: Arc<dyn AuthExpiredHandler>) -> Self {
        self.auth_expired = handler;
        self
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Envelope<T> {
        self.request(Method::GET, endpoint, None, None).await
    }

    /// GET with request-scoped headers layered over the client defaults.
    pub async fn get_with_headers<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        headers: HeaderMap,
    ) -> Envelope<T> {
        self.request(Method::GET, endpoint, None, Some(headers)).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Envelope<T> {
        match serde_json::to_value(body) {
            Ok(body) => self.request(Method::POST, endpoint, Some(body), None).await,
            Err(e) => Envelope::err(
                ErrorKind::Transport,
                format!("Failed to serialize request body: {}", e),
            ),
        }
    }

    /// POST with request-scoped headers layered over the client defaults.
    pub async fn post_with_headers<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
        headers: HeaderMap,
    ) -> Envelope<T> {
        match serde_json::to_value(body) {
            Ok(body) => {
                self.request(Method::POST, endpoint, Some(body), Some(headers))
                    .await
            }
            Err(e) => Envelope::err(
                ErrorKind::Transport,
                format!("Failed to serialize request body: {}", e),
            ),
        }
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Envelope<T> {
        match serde_json::to_value(body) {
            Ok(body) => self.request(Method::PUT, endpoint, Some(body), None).await,
            Err(e) => Envelope::err(
                ErrorKind::Transport,
                format!("Failed to serialize request body: {}", e),
            ),
        }
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Envelope<T> {
        self.request(Method::DELETE, endpoint, None, None).await
    }

    /// Issue one request and normalize whatever comes back.
    ///
    /// Terminal in one hop: `Pending -> {Success, ClassifiedError, AuthExpired}`.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        headers: Option<HeaderMap>,
    ) -> Envelope<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let start = Instant::now();

        let mut request = self.http.request(method.clone(), &url);
        if let Some(body) = &body {
            request = request.json(body);
        }
        if let Some(headers) = headers {
            request = request.headers(headers);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                logging::log_transport_failure(method.as_str(), endpoint, &e.to_string());
                return Envelope::err(ErrorKind::Transport, e.to_string());
            }
        };

        let status = response.status();
        logging::log_api_call(method.as_str(), endpoint, status.as_u16(), start.elapsed());

        // Auth expiry is classified before everything else and surfaces a
        // fixed message instead of the backend's detail.
        if status == StatusCode::UNAUTHORIZED {
            self.fire_auth_expired();
            return Envelope::err(ErrorKind::AuthExpired, AUTH_REQUIRED_MESSAGE);
        }

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return Envelope::err(ErrorKind::Transport, e.to_string()),
        };

        match Self::classify(status, &text) {
            Envelope {
                ok: true,
                data: Some(data),
                ..
            } => match serde_json::from_value::<T>(data) {
                Ok(data) => Envelope::ok(data),
                Err(e) => Envelope::err(
                    ErrorKind::Transport,
                    format!("Failed to decode response body: {}", e),
                ),
            },
            envelope => Envelope {
                ok: envelope.ok,
                data: None,
                error: envelope.error,
                kind: envelope.kind,
            },
        }
    }

    /// Normalize a raw response body into an envelope.
    ///
    /// Classification priority: structured error, legacy error string, bare
    /// non-2xx status, new-style success envelope, legacy success body.
    fn classify(status: StatusCode, body: &str) -> Envelope<Value> {
        let parsed: Option<Value> = serde_json::from_str(body).ok();

        let reported_failure = !status.is_success()
            || parsed
                .as_ref()
                .and_then(|v| v.get("success"))
                .and_then(Value::as_bool)
                == Some(false);

        if reported_failure {
            if let Some(value) = &parsed {
                // New-style structured error with a machine-readable code
                if let Ok(error_body) = serde_json::from_value::<ApiErrorBody>(value.clone()) {
                    return Envelope::err(error_body.kind(), error_body.surface_message());
                }
                // Legacy shape: plain error string
                if let Some(message) = value.get("error").and_then(Value::as_str) {
                    return Envelope::err(ErrorKind::Domain, message);
                }
                if let Some(message) = value.get("message").and_then(Value::as_str) {
                    return Envelope::err(ErrorKind::Domain, message);
                }
            }
            // Bare status with no parseable body
            return Envelope::err(ErrorKind::Domain, format!("HTTP {}", status.as_u16()));
        }

        match parsed {
            Some(value) => {
                if value.get("success").and_then(Value::as_bool) == Some(true) {
                    // New-style success envelope: unwrap to its data
                    Envelope::ok(value.get("data").cloned().unwrap_or(Value::Null))
                } else {
                    // Legacy success: the whole body is the data
                    Envelope::ok(value)
                }
            }
            // Some endpoints legitimately answer 2xx with an empty body
            None if body.trim().is_empty() => Envelope::ok(Value::Null),
            None => Envelope::err(
                ErrorKind::Transport,
                format!("Invalid JSON in response body (HTTP {})", status.as_u16()),
            ),
        }
    }

    fn fire_auth_expired(&self) {
        if !self.auth_expired_fired.swap(true, Ordering::SeqCst) {
            self.auth_expired.on_auth_expired();
        }
    }

    /// A successful login or logout starts a new expiry episode.
    pub(crate) fn reset_auth_expired(&self) {
        self.auth_expired_fired.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn classify(status: u16, body: &str) -> Envelope<Value> {
        ApiClient::classify(StatusCode::from_u16(status).unwrap(), body)
    }

    #[test]
    fn test_new_style_success_is_unwrapped() {
        let envelope = classify(200, r#"{"success": true, "data": {"id": "x"}}"#);
        assert!(envelope.ok);
        assert_eq!(envelope.data, Some(json!({"id": "x"})));
        assert!(envelope.error.is_none());
    }

    #[test]
    fn test_legacy_success_body_is_data_wholesale() {
        let envelope = classify(200, r#"{"id": "x"}"#);
        assert!(envelope.ok);
        assert_eq!(envelope.data, Some(json!({"id": "x"})));
    }

    #[test]
    fn test_structured_error_surfaces_message_verbatim() {
        let envelope = classify(
            403,
            r#"{"code": "INSUFFICIENT_PERMISSION", "message": "Admin role required"}"#,
        );
        assert!(!envelope.ok);
        assert_eq!(envelope.error.as_deref(), Some("Admin role required"));
        assert_eq!(envelope.kind, Some(ErrorKind::Domain));
    }

    #[test]
    fn test_validation_error_joins_field_messages() {
        let body = json!({
            "code": "VALIDATION_ERROR",
            "message": "invalid",
            "details": {
                "validation_errors": {
                    "errors": [
                        {"field": "email", "message": "required"},
                        {"field": "age", "message": "must be number"}
                    ]
                }
            }
        });
        let envelope = classify(400, &body.to_string());
        assert!(!envelope.ok);
        assert_eq!(
            envelope.error.as_deref(),
            Some("email: required, age: must be number")
        );
        assert_eq!(envelope.kind, Some(ErrorKind::Validation));
    }

    #[test]
    fn test_legacy_error_string() {
        let envelope = classify(400, r#"{"error": "Survey already approved"}"#);
        assert_eq!(envelope.error.as_deref(), Some("Survey already approved"));
        assert_eq!(envelope.kind, Some(ErrorKind::Domain));
    }

    #[test]
    fn test_bare_status_synthesizes_message() {
        let envelope = classify(503, "");
        assert_eq!(envelope.error.as_deref(), Some("HTTP 503"));
    }

    #[test]
    fn test_success_false_with_message() {
        let envelope = classify(200, r#"{"success": false, "message": "Survey is closed"}"#);
        assert!(!envelope.ok);
        assert_eq!(envelope.error.as_deref(), Some("Survey is closed"));
    }

    #[test]
    fn test_empty_success_body() {
        let envelope = classify(204, "");
        assert!(envelope.ok);
        assert_eq!(envelope.data, Some(Value::Null));
    }

    #[test]
    fn test_unparseable_success_body_is_transport_error() {
        let envelope = classify(200, "<html>gateway timeout</html>");
        assert!(!envelope.ok);
        assert_eq!(envelope.kind, Some(ErrorKind::Transport));
    }
}
