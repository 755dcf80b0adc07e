//! Reading progress bar and back-to-top button

use std::rc::Rc;

use dioxus::prelude::*;

use crate::browser;
use crate::state::PageState;

#[component]
pub fn ScrollIndicators() -> Element {
    let state = use_context::<PageState>();

    use_hook(move || {
        let guard = browser::on_window_scroll(move || state.sync_scroll())
            .map_err(|err| tracing::warn!(error = %err, "Scroll listener unavailable"))
            .ok();
        Rc::new(guard)
    });

    // Initial position, e.g. after a reload halfway down the page
    use_effect(move || state.sync_scroll());

    let width = *state.progress.read();
    let show_to_top = *state.show_to_top.read();

    rsx! {
        div {
            class: "progress",
            role: "presentation",
            style: "width: {width}%;",
        }
        button {
            class: if show_to_top { "toTop is-visible" } else { "toTop" },
            r#type: "button",
            aria_label: "Voltar ao topo",
            onclick: move |_| state.scroll_to_top(),
            "\u{2191}"
        }
    }
}
