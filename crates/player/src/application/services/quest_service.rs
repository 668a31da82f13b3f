//! Quest Service - Application service for quest generation and regeneration
//!
//! Wraps the two generation endpoints behind typed methods. Each call issues
//! exactly one HTTP request and returns the full quest document the server
//! sent back; regeneration responses are full replacements, not patches.

use questsmith_domain::{Brief, QuestDocument};
use questsmith_shared::{
    HealthResponse, RegenerateQuestRequest, GENERATE_QUEST_PATH, HEALTH_PATH,
    REGENERATE_QUEST_PATH,
};

use crate::application::api::Api;
use crate::application::ServiceError;

/// Quest service for talking to the generation API
#[derive(Clone)]
pub struct QuestService {
    api: Api,
}

impl QuestService {
    /// Create a new QuestService with the given API wrapper
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Generate a new quest from a brief
    pub async fn generate(&self, brief: &Brief) -> Result<QuestDocument, ServiceError> {
        tracing::debug!(zone = %brief.zone, steps = brief.number_of_steps, "Requesting quest generation");
        let value = self.api.post_value(GENERATE_QUEST_PATH, brief).await?;
        Ok(QuestDocument::from_value(value)?)
    }

    /// Regenerate one section (or one step) of an existing quest
    pub async fn regenerate(
        &self,
        request: &RegenerateQuestRequest,
    ) -> Result<QuestDocument, ServiceError> {
        tracing::debug!(
            section = %request.section,
            step_index = ?request.step_index,
            "Requesting quest regeneration"
        );
        let value = self.api.post_value(REGENERATE_QUEST_PATH, request).await?;
        Ok(QuestDocument::from_value(value)?)
    }

    /// Probe the API's health endpoint
    pub async fn check_health(&self) -> Result<HealthResponse, ServiceError> {
        Ok(self.api.get(HEALTH_PATH).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{ApiError, MockRawApiPort};
    use questsmith_domain::{BriefForm, Section};
    use serde_json::json;
    use std::sync::Arc;

    fn service(raw: MockRawApiPort) -> QuestService {
        QuestService::new(Api::new(Arc::new(raw)))
    }

    fn brief() -> Brief {
        BriefForm {
            zone: "Frostmire".to_string(),
            faction: "Wardens".to_string(),
            tone: "grim".to_string(),
            level_min: "5".to_string(),
            level_max: "8".to_string(),
            steps: "3".to_string(),
            ..Default::default()
        }
        .parse()
        .brief
    }

    #[tokio::test]
    async fn generate_posts_brief_once() {
        let mut raw = MockRawApiPort::new();
        let expected_body = serde_json::to_value(brief()).expect("brief serializes");
        raw.expect_post_json()
            .withf(move |path, body| path == GENERATE_QUEST_PATH && *body == expected_body)
            .times(1)
            .returning(|_, _| Ok(json!({ "title": "The Frozen Oath", "steps": [], "rewards": [] })));

        let doc = service(raw).generate(&brief()).await.expect("quest returned");
        assert_eq!(doc.quest().title, "The Frozen Oath");
    }

    #[tokio::test]
    async fn generate_surfaces_http_failures() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json().times(1).returning(|_, _| {
            Err(ApiError::HttpError {
                status: 500,
                message: "model unavailable".to_string(),
            })
        });

        let err = service(raw).generate(&brief()).await.expect_err("request fails");
        assert_eq!(err.to_string(), "model unavailable");
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn non_object_response_is_invalid_quest() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .times(1)
            .returning(|_, _| Ok(json!("not a quest")));

        let err = service(raw).generate(&brief()).await.expect_err("rejected");
        assert!(matches!(err, ServiceError::InvalidQuest(_)));
    }

    #[tokio::test]
    async fn regenerate_posts_wrapper_body() {
        let request = RegenerateQuestRequest {
            brief: brief(),
            quest: json!({ "title": "Old" }),
            section: Section::Steps,
            step_index: Some(2),
        };
        let expected_body = serde_json::to_value(&request).expect("request serializes");

        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(move |path, body| path == REGENERATE_QUEST_PATH && *body == expected_body)
            .times(1)
            .returning(|_, _| Ok(json!({ "title": "New" })));

        let doc = service(raw).regenerate(&request).await.expect("quest returned");
        assert_eq!(doc.quest().title, "New");
    }

    #[tokio::test]
    async fn health_probe_reads_status() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .withf(|path| path == HEALTH_PATH)
            .times(1)
            .returning(|_| Ok(json!({ "status": "ok" })));

        let health = service(raw).check_health().await.expect("healthy");
        assert!(health.is_ok());
    }
}
