pub mod quest_state;

pub use quest_state::{use_quest_state, QuestState};
