// survey-client/src/error.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

/// The error code the backend uses for field-level validation failures.
pub const VALIDATION_ERROR_CODE: &str = "VALIDATION_ERROR";

/// The fixed message surfaced after a session expires. The underlying backend
/// message is deliberately not leaked.
pub const AUTH_REQUIRED_MESSAGE: &str = "Authentication required";

/// エラー分類
///
/// Every classified gateway failure carries exactly one of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Backend-reported, field-scoped; recoverable by correcting input.
    Validation,
    /// Backend-reported business-rule rejection; propagated verbatim.
    Domain,
    /// Classified locally from a 401-shaped response; fatal to the workflow.
    AuthExpired,
    /// Network or parse failure; recoverable via caller retry.
    Transport,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Domain(String),

    #[error("{AUTH_REQUIRED_MESSAGE}")]
    AuthExpired,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Validation(_) => ErrorKind::Validation,
            ApiError::Domain(_) => ErrorKind::Domain,
            ApiError::AuthExpired => ErrorKind::AuthExpired,
            ApiError::Transport(_) | ApiError::Config(_) => ErrorKind::Transport,
        }
    }

    pub fn from_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        match kind {
            ErrorKind::Validation => ApiError::Validation(message.into()),
            ErrorKind::Domain => ApiError::Domain(message.into()),
            ErrorKind::AuthExpired => ApiError::AuthExpired,
            ErrorKind::Transport => ApiError::Transport(message.into()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

// Result 型のエイリアス
pub type ApiResult<T> = Result<T, ApiError>;

/// 構造化エラーレスポンス（新形式）
///
/// `{code, message, details?: {validation_errors?: {errors: [{field, message}]}}}`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<ErrorDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetails {
    #[serde(default)]
    pub validation_errors: Option<FieldErrorList>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldErrorList {
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl ApiErrorBody {
    pub fn is_validation(&self) -> bool {
        self.code == VALIDATION_ERROR_CODE
    }

    fn field_errors(&self) -> Option<&[FieldError]> {
        self.details
            .as_ref()
            .and_then(|d| d.validation_errors.as_ref())
            .map(|v| v.errors.as_slice())
            .filter(|errors| !errors.is_empty())
    }

    pub fn kind(&self) -> ErrorKind {
        if self.is_validation() {
            ErrorKind::Validation
        } else {
            ErrorKind::Domain
        }
    }

    /// Build the human-readable message surfaced to callers.
    ///
    /// Validation failures are flattened to `field: message` pairs joined with
    /// `", "`; anything else surfaces the backend message verbatim.
    pub fn surface_message(&self) -> String {
        if self.is_validation() {
            if let Some(errors) = self.field_errors() {
                return errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
            }
        }
        self.message.clone()
    }
}

/// ローカルバリデーションエラーをメッセージに変換
///
/// Mirrors the backend's `field: message` format so both paths read alike.
pub fn validation_errors_to_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map_or_else(|| "Invalid value".to_string(), |m| m.to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}
