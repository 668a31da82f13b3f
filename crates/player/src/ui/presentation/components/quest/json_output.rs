use dioxus::prelude::*;

/// Pretty-printed quest JSON (or its placeholder)
#[component]
pub fn JsonOutput(json: String) -> Element {
    rsx! {
        section {
            class: "json-output",
            h2 { "Quest JSON" }
            pre { code { "{json}" } }
        }
    }
}
