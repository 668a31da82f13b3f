//! Service providers for the presentation layer
//!
//! Components reach the application services through Dioxus context and
//! never see the HTTP adapter behind them.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::QuestService;
use crate::application::Api;

#[derive(Clone)]
pub struct Services {
    pub quest: Arc<QuestService>,
}

impl Services {
    pub fn new(api: Api) -> Self {
        Self {
            quest: Arc::new(QuestService::new(api)),
        }
    }
}

/// Hook to access the quest service from context
pub fn use_quest_service() -> Arc<QuestService> {
    use_context::<Services>().quest.clone()
}
