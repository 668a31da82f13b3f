//! Endpoint paths of the generation API

pub const GENERATE_QUEST_PATH: &str = "/api/quests/generate";
pub const REGENERATE_QUEST_PATH: &str = "/api/quests/regenerate";
pub const HEALTH_PATH: &str = "/health";
