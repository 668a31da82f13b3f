pub mod quest;

pub use quest::{BriefFormPanel, JsonOutput, QuestViewPanel, RegenerateControls, StatusLine};
