use dioxus::prelude::*;

use crate::application::Status;

#[component]
pub fn StatusLine(status: Status) -> Element {
    let class = match status.kind.css_class() {
        "" => "status".to_string(),
        kind => format!("status {kind}"),
    };

    rsx! {
        p {
            class,
            role: "status",
            "{status.message}"
        }
    }
}
