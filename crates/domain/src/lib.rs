//! Questsmith Domain - quest briefs, quest documents, and the quest view model
//!
//! Pure types and functions shared by the client. Nothing here performs I/O.

pub mod brief;
pub mod error;
pub mod quest;
pub mod section;
pub mod view;

pub use brief::{
    parse_forbidden_elements, parse_int, Brief, BriefField, BriefForm, ParsedBrief,
    DEFAULT_NUMBER_OF_STEPS,
};
pub use error::QuestError;
pub use quest::{DialogueLine, Quest, QuestDocument, QuestStep, Reward, RewardAmount};
pub use section::{parse_step_index, Section};
pub use view::{format_reward, DialogueLineView, QuestMeta, QuestView, StepView};
