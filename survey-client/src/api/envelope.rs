// survey-client/src/api/envelope.rs
use crate::error::{ApiError, ApiResult, ErrorKind};
use serde::{Deserialize, Serialize};

/// 正規化されたレスポンスエンベロープ
///
/// Every gateway call resolves to this shape. Invariant: exactly one of
/// `data` (when `ok`) or `error` (when not `ok`) is populated; the
/// constructors are the only way envelopes are produced.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Envelope<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
            kind: None,
        }
    }

    pub fn err(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(message.into()),
            kind: Some(kind),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Convert into a `Result` for callers that prefer `?` propagation.
    pub fn into_result(self) -> ApiResult<T> {
        match (self.data, self.error) {
            (Some(data), _) if self.ok => Ok(data),
            (_, Some(error)) => Err(ApiError::from_kind(
                self.kind.unwrap_or(ErrorKind::Domain),
                error,
            )),
            _ => Err(ApiError::Domain("Malformed envelope".to_string())),
        }
    }
}
