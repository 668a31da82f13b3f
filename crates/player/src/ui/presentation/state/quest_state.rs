//! Quest session state
//!
//! The whole client state is one [`QuestSession`] held in a signal. Actions
//! mutate it through [`SessionHandle`], so a write guard is never held across
//! a network await.

use dioxus::prelude::*;

use crate::application::{QuestSession, ResponseOrdering, SessionHandle};

#[derive(Clone, Copy)]
pub struct QuestState {
    pub session: Signal<QuestSession>,
}

impl QuestState {
    pub fn new(ordering: ResponseOrdering) -> Self {
        Self {
            session: Signal::new(QuestSession::new(ordering)),
        }
    }
}

impl SessionHandle for Signal<QuestSession> {
    fn update<R>(&mut self, f: impl FnOnce(&mut QuestSession) -> R) -> R {
        f(&mut self.write())
    }
}

/// Hook to access the quest state from Dioxus context
pub fn use_quest_state() -> QuestState {
    use_context::<QuestState>()
}
