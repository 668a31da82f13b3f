//! Render model for the three output regions
//!
//! `render_quest` is a pure function of the current quest: the quest view,
//! the JSON dump and the visibility of the regenerate controls always change
//! together.

use questsmith_domain::{QuestDocument, QuestView};

/// Empty quest message, rendered as lead + bold action + tail
pub const EMPTY_QUEST_LEAD: &str = "No quest generated yet. Fill out the brief and click ";
pub const EMPTY_QUEST_ACTION: &str = "Generate Quest";
pub const EMPTY_QUEST_TAIL: &str = ".";
pub const EMPTY_JSON_PLACEHOLDER: &str = "// Generated quest JSON will appear here";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestRender {
    /// `None` renders the placeholder
    pub view: Option<QuestView>,
    /// Pretty-printed quest JSON, or the JSON placeholder
    pub json: String,
    pub controls_visible: bool,
}

impl QuestRender {
    pub fn is_empty(&self) -> bool {
        self.view.is_none()
    }
}

pub fn render_quest(quest: Option<&QuestDocument>) -> QuestRender {
    match quest {
        None => QuestRender {
            view: None,
            json: EMPTY_JSON_PLACEHOLDER.to_string(),
            controls_visible: false,
        },
        Some(doc) => QuestRender {
            view: Some(QuestView::from_quest(doc.quest())),
            json: doc.to_pretty_json(),
            controls_visible: true,
        },
    }
}
