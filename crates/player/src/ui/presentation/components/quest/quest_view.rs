//! Human-readable quest view
//!
//! Walks the [`QuestView`] tree; every omission rule is already decided by
//! the view model.

use dioxus::prelude::*;
use questsmith_domain::{QuestView, StepView};

use crate::application::{EMPTY_QUEST_ACTION, EMPTY_QUEST_LEAD, EMPTY_QUEST_TAIL};

#[component]
pub fn QuestViewPanel(view: Option<QuestView>) -> Element {
    let Some(view) = view else {
        return rsx! {
            section {
                class: "quest-view empty",
                p {
                    "{EMPTY_QUEST_LEAD}"
                    strong { "{EMPTY_QUEST_ACTION}" }
                    "{EMPTY_QUEST_TAIL}"
                }
            }
        };
    };

    rsx! {
        section {
            class: "quest-view",
            h3 { "{view.title}" }
            p { "{view.summary}" }

            div {
                class: "quest-meta",
                MetaItem { label: "Zone", value: view.meta.zone.clone() }
                " | "
                MetaItem { label: "Faction", value: view.meta.faction.clone() }
                " | "
                MetaItem { label: "Tone", value: view.meta.tone.clone() }
                " | "
                MetaItem { label: "Levels", value: view.meta.levels.clone() }
            }

            if view.has_steps() {
                div {
                    class: "quest-steps",
                    for (i, step) in view.steps.iter().enumerate() {
                        StepBlock { key: "{i}", step: step.clone() }
                    }
                }
            }

            if let Some(rewards) = view.rewards_line.as_ref() {
                p {
                    strong { "Rewards: " }
                    "{rewards}"
                }
            }
        }
    }
}

#[component]
fn MetaItem(label: &'static str, value: String) -> Element {
    rsx! {
        span {
            strong { "{label}: " }
            "{value}"
        }
    }
}

#[component]
fn StepBlock(step: StepView) -> Element {
    rsx! {
        div {
            class: "quest-step",
            h4 { "{step.heading}" }
            p {
                strong { "Objective: " }
                "{step.objective}"
            }
            if step.has_dialogue() {
                div {
                    class: "quest-dialogue",
                    for (i, line) in step.dialogue.iter().enumerate() {
                        p {
                            key: "{i}",
                            span { class: "speaker", "{line.speaker}:" }
                            " {line.text}"
                        }
                    }
                }
            }
        }
    }
}
