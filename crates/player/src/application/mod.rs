//! Application layer - Use cases and orchestration

pub mod actions;
pub mod api;
pub mod error;
pub mod render;
pub mod services;
pub mod session;

// Re-export common types
pub use actions::{generate_quest, regenerate_quest, SessionHandle};
pub use api::Api;
pub use error::ServiceError;
pub use render::{
    render_quest, QuestRender, EMPTY_JSON_PLACEHOLDER, EMPTY_QUEST_ACTION, EMPTY_QUEST_LEAD,
    EMPTY_QUEST_TAIL,
};
pub use session::{
    Completion, QuestAction, QuestSession, RequestTicket, ResponseOrdering, SessionError, Status,
    StatusKind,
};
