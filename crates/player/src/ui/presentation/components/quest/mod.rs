//! Quest designer components

mod brief_form;
mod json_output;
mod quest_view;
mod regenerate_controls;
mod status_line;

pub use brief_form::BriefFormPanel;
pub use json_output::JsonOutput;
pub use quest_view::QuestViewPanel;
pub use regenerate_controls::RegenerateControls;
pub use status_line::StatusLine;
