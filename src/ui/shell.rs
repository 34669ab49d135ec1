use dioxus::prelude::*;

use crate::app::Route;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let version = version_label();

    rsx! {
        header {
            class: "shell-header",
            div {
                h1 { class: "shell-title", "{APP_NAME}" }
                p { class: "shell-version", "{version}" }
            }
            nav { class: "shell-nav",
                NavButton { active: matches!(current_route, Route::Profits {}), onclick: move |_| { nav.push(Route::Profits {}); }, label: "Recipe profits" }
                NavButton { active: matches!(current_route, Route::Lookup {}), onclick: move |_| { nav.push(Route::Lookup {}); }, label: "Price lookup" }
            }
        }
        main { class: "shell-main",
            {children}
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active { "nav-button active" } else { "nav-button" };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
