// survey-client/src/domain/action.rs
use crate::domain::role::Role;
use serde::{Deserialize, Serialize};

/// 操作を表すenum
///
/// Each action has a statically known minimum role. User moderation actions
/// additionally require the actor to strictly outrank the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ApproveUser,
    RejectUser,
    SuspendUser,
    ApproveSurvey,
    RejectSurvey,
    CreateAdmin,
    SuspendAdmin,
    CreateSurvey,
    TakeSurvey,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::ApproveUser,
        Action::RejectUser,
        Action::SuspendUser,
        Action::ApproveSurvey,
        Action::RejectSurvey,
        Action::CreateAdmin,
        Action::SuspendAdmin,
        Action::CreateSurvey,
        Action::TakeSurvey,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ApproveUser => "approve_user",
            Action::RejectUser => "reject_user",
            Action::SuspendUser => "suspend_user",
            Action::ApproveSurvey => "approve_survey",
            Action::RejectSurvey => "reject_survey",
            Action::CreateAdmin => "create_admin",
            Action::SuspendAdmin => "suspend_admin",
            Action::CreateSurvey => "create_survey",
            Action::TakeSurvey => "take_survey",
        }
    }

    /// 文字列からアクションを解析
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "approve_user" => Some(Action::ApproveUser),
            "reject_user" => Some(Action::RejectUser),
            "suspend_user" => Some(Action::SuspendUser),
            "approve_survey" => Some(Action::ApproveSurvey),
            "reject_survey" => Some(Action::RejectSurvey),
            "create_admin" => Some(Action::CreateAdmin),
            "suspend_admin" => Some(Action::SuspendAdmin),
            "create_survey" => Some(Action::CreateSurvey),
            "take_survey" => Some(Action::TakeSurvey),
            _ => None,
        }
    }

    /// アクションに必要な最低ランクを取得
    pub fn min_rank(&self) -> u8 {
        match self {
            // User and survey moderation requires admin or above
            Action::ApproveUser
            | Action::RejectUser
            | Action::SuspendUser
            | Action::ApproveSurvey
            | Action::RejectSurvey => Role::Admin.rank(),
            // Admin account management is super admin only
            Action::CreateAdmin | Action::SuspendAdmin => Role::SuperAdmin.rank(),
            Action::CreateSurvey => Role::Creator.rank(),
            Action::TakeSurvey => Role::Filler.rank(),
        }
    }

    /// ターゲットより強いランクが必要かどうか
    pub fn requires_target_outrank(&self) -> bool {
        matches!(
            self,
            Action::ApproveUser | Action::RejectUser | Action::SuspendUser
        )
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
