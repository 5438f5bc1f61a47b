// survey-client/src/domain/audit.rs
use crate::domain::role::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// 監査アクション種別の定義
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoleActionType {
    Approval,
    Rejection,
    Suspension,
    Creation,
}

impl RoleActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleActionType::Approval => "approval",
            RoleActionType::Rejection => "rejection",
            RoleActionType::Suspension => "suspension",
            RoleActionType::Creation => "creation",
        }
    }
}

// 監査対象エンティティ種別の定義
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActionTarget {
    User,
    Survey,
    Withdrawal,
}

impl ActionTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionTarget::User => "user",
            ActionTarget::Survey => "survey",
            ActionTarget::Withdrawal => "withdrawal",
        }
    }
}

/// 完了した特権操作を表す監査レコード
///
/// Created after a privileged call succeeds; append-only and never mutated.
/// The audit-log collaborator (backend) owns persistence; this crate only
/// constructs and transmits the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleAction {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub action_type: RoleActionType,
    pub source: Role,
    pub target: ActionTarget,
    pub target_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub timestamp: DateTime<Utc>,
}

// 監査レコードビルダー
pub struct RoleActionBuilder {
    action_type: RoleActionType,
    source: Role,
    target: ActionTarget,
    target_id: String,
    reason: Option<String>,
}

impl RoleActionBuilder {
    pub fn new(
        action_type: RoleActionType,
        source: Role,
        target: ActionTarget,
        target_id: impl Into<String>,
    ) -> Self {
        Self {
            action_type,
            source,
            target,
            target_id: target_id.into(),
            reason: None,
        }
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn maybe_reason(mut self, reason: Option<&str>) -> Self {
        self.reason = reason.map(String::from);
        self
    }

    pub fn build(self) -> RoleAction {
        RoleAction {
            id: Uuid::new_v4(),
            action_type: self.action_type,
            source: self.source,
            target: self.target,
            target_id: self.target_id,
            reason: self.reason,
            timestamp: Utc::now(),
        }
    }
}
