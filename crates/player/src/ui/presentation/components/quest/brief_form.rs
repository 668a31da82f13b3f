//! Brief form - collects the quest brief and starts a generation

use dioxus::prelude::*;
use questsmith_domain::BriefForm;

use crate::application::generate_quest;
use crate::ui::presentation::state::use_quest_state;
use crate::ui::presentation::use_quest_service;

#[component]
pub fn BriefFormPanel() -> Element {
    let service = use_quest_service();
    let state = use_quest_state();
    let mut form = use_signal(BriefForm::default);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let service = service.clone();
        let snapshot = form.read().clone();
        spawn(async move {
            generate_quest(state.session, &service, &snapshot).await;
        });
    };

    rsx! {
        form {
            class: "brief-form",
            onsubmit: on_submit,

            h2 { "Quest Brief" }

            TextField {
                label: "Zone",
                name: "zone",
                placeholder: "e.g., Frostmire",
                value: form.read().zone.clone(),
                on_input: move |v| form.write().zone = v,
            }
            TextField {
                label: "Faction",
                name: "faction",
                placeholder: "e.g., Wardens of the Pass",
                value: form.read().faction.clone(),
                on_input: move |v| form.write().faction = v,
            }
            TextField {
                label: "Tone",
                name: "tone",
                placeholder: "e.g., grim, hopeful",
                value: form.read().tone.clone(),
                on_input: move |v| form.write().tone = v,
            }

            div {
                class: "field-row",
                NumberField {
                    label: "Level min",
                    name: "level-min",
                    value: form.read().level_min.clone(),
                    on_input: move |v| form.write().level_min = v,
                }
                NumberField {
                    label: "Level max",
                    name: "level-max",
                    value: form.read().level_max.clone(),
                    on_input: move |v| form.write().level_max = v,
                }
            }

            TextField {
                label: "Narrative style",
                name: "style",
                placeholder: "optional",
                value: form.read().style.clone(),
                on_input: move |v| form.write().style = v,
            }

            div {
                class: "field-row",
                NumberField {
                    label: "Steps",
                    name: "steps",
                    value: form.read().steps.clone(),
                    on_input: move |v| form.write().steps = v,
                }
                NumberField {
                    label: "Playtime (minutes)",
                    name: "playtime",
                    value: form.read().playtime.clone(),
                    on_input: move |v| form.write().playtime = v,
                }
            }

            TextField {
                label: "Forbidden elements",
                name: "forbidden",
                placeholder: "comma-separated, e.g., dragons, time travel",
                value: form.read().forbidden.clone(),
                on_input: move |v| form.write().forbidden = v,
            }

            button {
                class: "primary",
                r#type: "submit",
                "Generate Quest"
            }
        }
    }
}

#[component]
fn TextField(
    label: &'static str,
    name: &'static str,
    #[props(default)] placeholder: &'static str,
    value: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            class: "field",
            span { "{label}" }
            input {
                r#type: "text",
                name,
                placeholder,
                value,
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

/// Number input; the raw text is kept so parsing happens on submit
#[component]
fn NumberField(
    label: &'static str,
    name: &'static str,
    value: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            class: "field",
            span { "{label}" }
            input {
                r#type: "number",
                name,
                value,
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}
