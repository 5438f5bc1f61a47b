// survey-client/src/api/surveys.rs

use crate::api::client::ApiClient;
use crate::api::endpoints;
use crate::api::envelope::Envelope;
use crate::error::{validation_errors_to_message, ErrorKind};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSurveyRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Reward paid out per completed response, in the smallest currency unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_cents: Option<u32>,
}

/// アンケートAPI（クリエイター側とフィラー側の両方）
pub struct SurveysApi {
    client: Arc<ApiClient>,
}

impl SurveysApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    // --- Creator side ---

    pub async fn list(&self) -> Envelope<Value> {
        self.client.get(endpoints::SURVEYS).await
    }

    pub async fn get(&self, survey_id: &str) -> Envelope<Value> {
        self.client.get(&endpoints::survey_detail(survey_id)).await
    }

    pub async fn create(&self, survey: &CreateSurveyRequest) -> Envelope<Value> {
        if let Err(errors) = survey.validate() {
            return Envelope::err(ErrorKind::Validation, validation_errors_to_message(&errors));
        }
        self.client.post(endpoints::SURVEYS, survey).await
    }

    pub async fn launch(&self, survey_id: &str) -> Envelope<Value> {
        self.client
            .post(&endpoints::survey_launch(survey_id), &json!({}))
            .await
    }

    pub async fn pause(&self, survey_id: &str) -> Envelope<Value> {
        self.client
            .post(&endpoints::survey_pause(survey_id), &json!({}))
            .await
    }

    // --- Filler side ---

    pub async fn available(&self) -> Envelope<Value> {
        self.client.get(endpoints::USER_SURVEYS_AVAILABLE).await
    }

    pub async fn take(&self, survey_id: &str) -> Envelope<Value> {
        self.client
            .get(&endpoints::user_survey_take(survey_id))
            .await
    }

    pub async fn submit_response(&self, survey_id: &str, responses: &Value) -> Envelope<Value> {
        self.client
            .post(&endpoints::user_survey_submit(survey_id), responses)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    #[tokio::test]
    async fn test_create_rejects_empty_title_locally() {
        let config = ApiConfig::for_testing("http://127.0.0.1:1");
        let api = SurveysApi::new(Arc::new(ApiClient::new(&config).unwrap()));

        let envelope = api
            .create(&CreateSurveyRequest {
                title: String::new(),
                description: None,
                reward_cents: Some(50),
            })
            .await;

        assert!(!envelope.ok);
        assert_eq!(envelope.kind, Some(ErrorKind::Validation));
        assert_eq!(envelope.error.as_deref(), Some("title: Title is required"));
    }
}
