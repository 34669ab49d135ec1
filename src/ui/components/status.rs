use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator(message: String, visible: bool) -> Element {
    if !visible {
        return rsx! {};
    }

    rsx! {
        p { class: "loading-indicator", "{message}" }
    }
}

/// Dedicated region for user-facing error text.
#[component]
pub fn ErrorMessage(message: Option<String>) -> Element {
    let Some(text) = message else {
        return rsx! {};
    };

    rsx! {
        div { class: "error-message", "{text}" }
    }
}
