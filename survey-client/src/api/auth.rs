// survey-client/src/api/auth.rs

use crate::api::client::ApiClient;
use crate::api::endpoints;
use crate::api::envelope::Envelope;
use crate::domain::role::Role;
use crate::error::{validation_errors_to_message, ErrorKind};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub role: Role,
}

/// 認証API
///
/// The session credential itself is an opaque, http-only cookie managed by
/// the gateway's cookie store; these calls only drive its lifecycle.
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// ログイン（成功時にセッション失効エピソードをリセット）
    pub async fn login(&self, credentials: &LoginRequest) -> Envelope<Value> {
        if let Err(errors) = credentials.validate() {
            return Envelope::err(ErrorKind::Validation, validation_errors_to_message(&errors));
        }

        let envelope: Envelope<Value> = self.client.post(endpoints::AUTH_LOGIN, credentials).await;
        if envelope.is_ok() {
            self.client.reset_auth_expired();
        }
        envelope
    }

    /// 新規登録
    pub async fn register(&self, payload: &RegisterRequest) -> Envelope<Value> {
        if let Err(errors) = payload.validate() {
            return Envelope::err(ErrorKind::Validation, validation_errors_to_message(&errors));
        }

        self.client.post(endpoints::AUTH_REGISTER, payload).await
    }

    /// ログアウト（バックエンドがクッキーを無効化する）
    pub async fn logout(&self) -> Envelope<Value> {
        let envelope: Envelope<Value> = self.client.post(endpoints::AUTH_LOGOUT, &json!({})).await;
        if envelope.is_ok() {
            self.client.reset_auth_expired();
        }
        envelope
    }
}
