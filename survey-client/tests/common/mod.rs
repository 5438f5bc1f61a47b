// tests/common/mod.rs
#![allow(dead_code)]

use axum::Router;
use std::sync::atomic::AtomicUsize;
use std::sync::Mutex;
use survey_client::notify::{AuthExpiredHandler, Notifier};

/// Serve a stub backend on an ephemeral port, returning its base URL.
pub async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub backend");
    });
    format!("http://{}", addr)
}

/// Notifier that records every message for later assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub successes: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

/// Auth-expired handler that only counts invocations.
#[derive(Debug, Default)]
pub struct CountingAuthHandler {
    pub fired: AtomicUsize,
}

impl AuthExpiredHandler for CountingAuthHandler {
    fn on_auth_expired(&self) {
        self.fired
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}
