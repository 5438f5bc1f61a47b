// survey-client/src/logging/mod.rs

use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[macro_export]
macro_rules! log_with_context {
    ($level:expr, $msg:expr $(, $($key:expr => $value:expr),* $(,)?)?) => {
        match $level {
            tracing::Level::ERROR => {
                tracing::error!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::WARN => {
                tracing::warn!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::INFO => {
                tracing::info!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::DEBUG => {
                tracing::debug!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            _ => {}
        }
    };
}

/// Initialize tracing for binaries and examples embedding this client.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

// リクエストログ（ステータスに応じてレベルを変える）
pub(crate) fn log_api_call(method: &str, path: &str, status: u16, duration: Duration) {
    let duration_ms = duration.as_millis() as u64;

    crate::log_with_context!(
        if status >= 500 {
            tracing::Level::ERROR
        } else if status >= 400 {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        },
        "Request completed",
        "method" => method,
        "path" => path,
        "status" => status,
        "duration_ms" => duration_ms,
    );
}

pub(crate) fn log_transport_failure(method: &str, path: &str, error: &str) {
    crate::log_with_context!(
        tracing::Level::ERROR,
        "Request failed before a response was received",
        "method" => method,
        "path" => path,
        "error" => error,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_with_context_accepts_every_level() {
        for level in [
            tracing::Level::ERROR,
            tracing::Level::WARN,
            tracing::Level::INFO,
            tracing::Level::DEBUG,
        ] {
            crate::log_with_context!(level, "level check", "status" => 200_u16);
        }
        crate::log_with_context!(tracing::Level::INFO, "no fields");
    }

    #[test]
    fn test_log_api_call_levels_do_not_panic() {
        for status in [200, 404, 500] {
            log_api_call("GET", "/api/thing", status, Duration::from_millis(3));
        }
        log_transport_failure("POST", "/api/thing", "connection refused");
    }
}
