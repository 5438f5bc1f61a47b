// survey-client/src/domain/role.rs
use serde::{Deserialize, Serialize};

/// ロール名を表すenum
///
/// Roles form a total order: `filler(1) < creator(2) < admin(3) < super_admin(4)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Filler,
    Creator,
    Admin,
    SuperAdmin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Filler, Role::Creator, Role::Admin, Role::SuperAdmin];

    /// ロール名を文字列として取得
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Filler => "filler",
            Role::Creator => "creator",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }

    /// 文字列からロール名を解析
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "filler" => Some(Role::Filler),
            "creator" => Some(Role::Creator),
            "admin" => Some(Role::Admin),
            "super_admin" => Some(Role::SuperAdmin),
            _ => None,
        }
    }

    /// 権限レベルを数値で取得（高いほど強い権限）
    pub fn rank(&self) -> u8 {
        match self {
            Role::Filler => 1,
            Role::Creator => 2,
            Role::Admin => 3,
            Role::SuperAdmin => 4,
        }
    }

    /// Rank of a role string received from the network.
    ///
    /// An unrecognized role is maximally unprivileged (rank 0), never an error.
    pub fn rank_of(s: &str) -> u8 {
        Self::from_str(s).map_or(0, |role| role.rank())
    }

    /// 管理者権限があるかチェック
    pub fn is_admin(&self) -> bool {
        self.rank() >= Role::Admin.rank()
    }

    pub fn is_super_admin(&self) -> bool {
        matches!(self, Role::SuperAdmin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid role name: {}", s))
    }
}
