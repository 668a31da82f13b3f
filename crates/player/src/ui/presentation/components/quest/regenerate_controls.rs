//! Regenerate controls - one button per section plus a per-step trigger

use dioxus::prelude::*;
use questsmith_domain::{parse_step_index, Section};

use crate::application::regenerate_quest;
use crate::ui::presentation::state::use_quest_state;
use crate::ui::presentation::use_quest_service;

#[component]
pub fn RegenerateControls(visible: bool) -> Element {
    let service = use_quest_service();
    let state = use_quest_state();
    let mut step_index = use_signal(|| "0".to_string());

    let regenerate = move |section: Section, index: Option<i64>| {
        let service = service.clone();
        spawn(async move {
            let _ = regenerate_quest(state.session, &service, section, index).await;
        });
    };

    if !visible {
        return rsx! {};
    }

    rsx! {
        section {
            class: "regenerate-controls",
            h2 { "Regenerate" }

            div {
                class: "section-buttons",
                for section in Section::BUTTONS {
                    button {
                        key: "{section}",
                        r#type: "button",
                        "data-section": section.as_str().to_string(),
                        onclick: {
                            let regenerate = regenerate.clone();
                            let section = section.clone();
                            move |_| {
                                regenerate(section.clone(), None);
                            }
                        },
                        "{section.button_label()}"
                    }
                }
            }

            div {
                class: "step-regenerate",
                label {
                    class: "field",
                    span { "Step index" }
                    input {
                        r#type: "number",
                        min: "0",
                        value: "{step_index}",
                        oninput: move |e| step_index.set(e.value()),
                    }
                }
                button {
                    r#type: "button",
                    onclick: {
                        let regenerate = regenerate.clone();
                        move |_| {
                            let index = parse_step_index(&step_index.read());
                            regenerate(Section::Steps, index);
                        }
                    },
                    "Regenerate Step"
                }
            }
        }
    }
}
