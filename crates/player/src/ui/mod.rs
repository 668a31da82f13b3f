use dioxus::prelude::*;

use crate::application::ResponseOrdering;

pub mod presentation;

use presentation::components::{
    BriefFormPanel, JsonOutput, QuestViewPanel, RegenerateControls, StatusLine,
};
use presentation::state::{use_quest_state, QuestState};

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/runner.rs`).
    let ordering = use_context::<ResponseOrdering>();
    let service = presentation::use_quest_service();

    // Must be created inside an active Dioxus runtime.
    use_context_provider(move || QuestState::new(ordering));

    use_future(move || {
        let service = service.clone();
        async move {
            match service.check_health().await {
                Ok(health) if health.is_ok() => tracing::info!("Generation API is healthy"),
                Ok(health) => {
                    tracing::warn!(status = %health.status, "Generation API reports degraded health")
                }
                Err(e) => tracing::warn!(error = %e, "Generation API health probe failed"),
            }
        }
    });

    rsx! {
        document::Title { "Quest Narrative Designer" }
        document::Stylesheet {
            href: asset!("/assets/css/main.css"),
        }

        QuestDesigner {}
    }
}

#[component]
fn QuestDesigner() -> Element {
    let state = use_quest_state();
    let render = use_memo(move || state.session.read().render());
    let status = use_memo(move || state.session.read().status().clone());

    let render = render.read();

    rsx! {
        main {
            class: "designer",

            header {
                h1 { "Quest Narrative Designer" }
                StatusLine { status: status() }
            }

            div {
                class: "columns",
                div {
                    class: "column",
                    BriefFormPanel {}
                    RegenerateControls { visible: render.controls_visible }
                }
                div {
                    class: "column",
                    QuestViewPanel { view: render.view.clone() }
                    JsonOutput { json: render.json.clone() }
                }
            }
        }
    }
}
