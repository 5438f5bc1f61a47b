// survey-client/src/notify.rs

/// ユーザー通知のための境界（トースト表示は呼び出し側の責務）
///
/// The UI collaborator renders these however it likes; the default
/// implementation just records them on the log.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(kind = "notification", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::warn!(kind = "notification", "{}", message);
    }
}

/// セッション失効時のナビゲーション境界
///
/// Invoked at most once per expiry episode, no matter how many concurrent
/// calls observe the same 401. A successful login or logout starts a new
/// episode.
pub trait AuthExpiredHandler: Send + Sync {
    fn on_auth_expired(&self);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogAuthExpiredHandler;

impl AuthExpiredHandler for LogAuthExpiredHandler {
    fn on_auth_expired(&self) {
        tracing::warn!("Session expired; caller should navigate to the login entry point");
    }
}
