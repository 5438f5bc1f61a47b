// survey-client/src/api/actions.rs

use crate::api::client::ApiClient;
use crate::api::endpoints;
use crate::api::envelope::Envelope;
use crate::domain::audit::{ActionTarget, RoleAction, RoleActionBuilder, RoleActionType};
use crate::domain::role::Role;
use crate::error::{validation_errors_to_message, ErrorKind};
use crate::notify::Notifier;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use validator::Validate;

/// 新規管理者アカウントの作成リクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewAdmin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// 特権操作ラッパー
///
/// Combines the permission resolver's domain with the request gateway for the
/// moderation operations, appending a best-effort audit record on success.
///
/// Callers are expected to consult [`PermissionChecker`] before invoking
/// these; the wrappers themselves do not re-check. Authorization is enforced
/// authoritatively by the backend on every call, and a server-side denial
/// surfaces as a normal domain error.
///
/// [`PermissionChecker`]: crate::domain::permission::PermissionChecker
pub struct RoleActions {
    client: Arc<ApiClient>,
    notifier: Arc<dyn Notifier>,
}

impl RoleActions {
    pub fn new(client: Arc<ApiClient>, notifier: Arc<dyn Notifier>) -> Self {
        Self { client, notifier }
    }

    /// クリエイターアカウントを承認
    pub async fn approve_creator(&self, creator_id: &str, reason: Option<&str>) -> Envelope<Value> {
        let envelope: Envelope<Value> = self
            .client
            .post(&endpoints::admin_user_approve(creator_id), &json!({}))
            .await;

        if envelope.is_ok() {
            self.notifier
                .success("Creator account has been approved successfully");
            let record = RoleActionBuilder::new(
                RoleActionType::Approval,
                Role::Admin,
                ActionTarget::User,
                creator_id,
            )
            .maybe_reason(reason)
            .build();
            self.log_role_action(&record).await;
        } else {
            self.notify_failure(&envelope);
        }
        envelope
    }

    /// フィラーのKYCを承認
    pub async fn approve_filler_kyc(&self, filler_id: &str) -> Envelope<Value> {
        let envelope: Envelope<Value> = self
            .client
            .post(&endpoints::admin_user_approve(filler_id), &json!({}))
            .await;

        if envelope.is_ok() {
            self.notifier
                .success("Filler KYC has been verified and approved");
            let record = RoleActionBuilder::new(
                RoleActionType::Approval,
                Role::Admin,
                ActionTarget::User,
                filler_id,
            )
            .build();
            self.log_role_action(&record).await;
        } else {
            self.notify_failure(&envelope);
        }
        envelope
    }

    /// ユーザーを拒否（理由は必須）
    pub async fn reject_user(&self, user_id: &str, reason: &str) -> Envelope<Value> {
        let envelope: Envelope<Value> = self
            .client
            .post(
                &endpoints::admin_user_reject(user_id),
                &json!({ "reason": reason }),
            )
            .await;

        if envelope.is_ok() {
            // Rejection is rendered as a destructive notification
            self.notifier
                .error(&format!("User has been rejected: {}", reason));
            let record = RoleActionBuilder::new(
                RoleActionType::Rejection,
                Role::Admin,
                ActionTarget::User,
                user_id,
            )
            .reason(reason)
            .build();
            self.log_role_action(&record).await;
        } else {
            self.notify_failure(&envelope);
        }
        envelope
    }

    /// ユーザーを一時停止（理由は必須）
    pub async fn suspend_user(&self, user_id: &str, reason: &str) -> Envelope<Value> {
        let envelope: Envelope<Value> = self
            .client
            .post(
                &endpoints::admin_user_suspend(user_id),
                &json!({ "reason": reason }),
            )
            .await;

        if envelope.is_ok() {
            self.notifier
                .error(&format!("User has been suspended: {}", reason));
            let record = RoleActionBuilder::new(
                RoleActionType::Suspension,
                Role::Admin,
                ActionTarget::User,
                user_id,
            )
            .reason(reason)
            .build();
            self.log_role_action(&record).await;
        } else {
            self.notify_failure(&envelope);
        }
        envelope
    }

    /// アンケートを承認して公開
    pub async fn approve_survey(&self, survey_id: &str) -> Envelope<Value> {
        let envelope: Envelope<Value> = self
            .client
            .post(&endpoints::admin_survey_approve(survey_id), &json!({}))
            .await;

        if envelope.is_ok() {
            self.notifier
                .success("Survey has been approved and is now live");
            let record = RoleActionBuilder::new(
                RoleActionType::Approval,
                Role::Admin,
                ActionTarget::Survey,
                survey_id,
            )
            .build();
            self.log_role_action(&record).await;
        } else {
            self.notify_failure(&envelope);
        }
        envelope
    }

    /// アンケートを拒否
    pub async fn reject_survey(&self, survey_id: &str, reason: Option<&str>) -> Envelope<Value> {
        let envelope: Envelope<Value> = self
            .client
            .post(
                &endpoints::admin_survey_reject(survey_id),
                &json!({ "reason": reason }),
            )
            .await;

        if envelope.is_ok() {
            self.notifier.error("Survey has been rejected");
            let record = RoleActionBuilder::new(
                RoleActionType::Rejection,
                Role::Admin,
                ActionTarget::Survey,
                survey_id,
            )
            .maybe_reason(reason)
            .build();
            self.log_role_action(&record).await;
        } else {
            self.notify_failure(&envelope);
        }
        envelope
    }

    /// 出金リクエストを承認
    pub async fn approve_withdrawal(&self, withdrawal_id: &str) -> Envelope<Value> {
        let envelope: Envelope<Value> = self
            .client
            .post(
                &endpoints::admin_withdrawal_approve(withdrawal_id),
                &json!({}),
            )
            .await;

        if envelope.is_ok() {
            self.notifier.success("Withdrawal has been approved");
            let record = RoleActionBuilder::new(
                RoleActionType::Approval,
                Role::Admin,
                ActionTarget::Withdrawal,
                withdrawal_id,
            )
            .build();
            self.log_role_action(&record).await;
        } else {
            self.notify_failure(&envelope);
        }
        envelope
    }

    /// 管理者アカウントを作成（スーパー管理者のみ）
    pub async fn create_admin(&self, admin: &NewAdmin) -> Envelope<Value> {
        if let Err(errors) = admin.validate() {
            let message = validation_errors_to_message(&errors);
            self.notifier.error(&message);
            return Envelope::err(ErrorKind::Validation, message);
        }

        let envelope: Envelope<Value> = self
            .client
            .post(endpoints::SUPER_ADMIN_ADMINS, admin)
            .await;

        if envelope.is_ok() {
            self.notifier
                .success(&format!("New admin account created for {}", admin.email));
            let target_id = admin.id.as_deref().unwrap_or("unknown");
            let record = RoleActionBuilder::new(
                RoleActionType::Creation,
                Role::SuperAdmin,
                ActionTarget::User,
                target_id,
            )
            .build();
            self.log_role_action(&record).await;
        } else {
            self.notify_failure(&envelope);
        }
        envelope
    }

    /// 管理者アカウントを停止（スーパー管理者のみ）
    pub async fn suspend_admin(&self, admin_id: &str, reason: &str) -> Envelope<Value> {
        let envelope: Envelope<Value> = self
            .client
            .post(
                &endpoints::super_admin_admin_suspend(admin_id),
                &json!({ "reason": reason }),
            )
            .await;

        if envelope.is_ok() {
            self.notifier
                .error(&format!("Admin has been suspended: {}", reason));
            let record = RoleActionBuilder::new(
                RoleActionType::Suspension,
                Role::SuperAdmin,
                ActionTarget::User,
                admin_id,
            )
            .reason(reason)
            .build();
            self.log_role_action(&record).await;
        } else {
            self.notify_failure(&envelope);
        }
        envelope
    }

    /// 監査レコードを送信（ベストエフォート）
    ///
    /// A failed audit write is reported but never invalidates the
    /// already-successful primary action.
    async fn log_role_action(&self, record: &RoleAction) {
        let envelope: Envelope<Value> = self
            .client
            .post(endpoints::SUPER_ADMIN_AUDIT_LOGS, record)
            .await;

        if let Some(error) = envelope.error_message() {
            tracing::error!(
                error,
                action_type = record.action_type.as_str(),
                target = record.target.as_str(),
                target_id = %record.target_id,
                "Failed to log role action"
            );
            self.notifier.error("Failed to log action");
        }
    }

    fn notify_failure(&self, envelope: &Envelope<Value>) {
        if let Some(error) = envelope.error_message() {
            self.notifier.error(error);
        }
    }
}
