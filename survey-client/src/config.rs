// survey-client/src/config.rs
use std::env;

/// クライアント設定
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub environment: String,
    /// Base URL prepended to every endpoint path.
    pub base_url: String,
    /// Transport-level timeout; the gateway itself applies no retry.
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string())
                .trim_end_matches('/')
                .to_string(),
            timeout_secs: env::var("API_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| "Invalid API_TIMEOUT_SECS value")?,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// テスト用の設定を作成
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            environment: "test".to_string(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs: 5,
        }
    }
}
