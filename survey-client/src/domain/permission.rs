// survey-client/src/domain/permission.rs

use crate::domain::action::Action;
use crate::domain::role::Role;

/// 統合された権限チェック機能
///
/// Pure and synchronous; safe to call repeatedly and speculatively (e.g. to
/// decide whether to render a control). Denial is expressed only as `false`,
/// never as an error.
///
/// This resolver is advisory for the caller's UI and is NOT the security
/// boundary: the backend independently enforces authorization on every
/// request.
pub struct PermissionChecker;

impl PermissionChecker {
    /// 指定されたアクションを実行する権限があるかチェック
    ///
    /// For actions with a target-outrank rule the actor must strictly outrank
    /// the target; an absent target counts as rank 0.
    pub fn can_perform(actor: Role, action: Action, target: Option<Role>) -> bool {
        Self::check(actor.rank(), action, target.map_or(0, |role| role.rank()))
    }

    /// ネットワーク由来のロール・アクション文字列に対する権限チェック
    ///
    /// Unknown roles resolve to rank 0; unknown actions deny. Deny-by-default
    /// is the only failure mode.
    pub fn can_perform_str(actor: &str, action: &str, target: Option<&str>) -> bool {
        let Some(action) = Action::from_str(action) else {
            return false;
        };
        Self::check(Role::rank_of(actor), action, target.map_or(0, Role::rank_of))
    }

    fn check(actor_rank: u8, action: Action, target_rank: u8) -> bool {
        if actor_rank < action.min_rank() {
            return false;
        }
        if action.requires_target_outrank() {
            return actor_rank > target_rank;
        }
        true
    }
}
