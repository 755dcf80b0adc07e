//! Animated hero counter

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use landing_core::{CounterRole, CounterState};

use crate::browser::{self, VisibilityHandle};
use crate::state::PageState;

#[derive(Props, Clone, PartialEq)]
pub struct HeroCounterProps {
    /// DOM id, also used to watch the counter's visibility
    #[props(into)]
    pub id: String,
    pub role: CounterRole,
    #[props(into)]
    pub label: String,
}

/// Counts from 0 up to its target the first time it scrolls into view.
///
/// The target is rendered as `data-count` and as the initial text, so a
/// counter that never animates (invalid target, no JS) still shows it.
#[component]
pub fn HeroCounter(props: HeroCounterProps) -> Element {
    let state = use_context::<PageState>();
    let raw_target = props.role.raw_target(&state.stats);

    let mut display = use_signal(|| raw_target.clone());
    let mut counter = use_signal(|| CounterState::new(props.role.target(&state.stats)));
    let mut in_view = use_signal(|| false);

    let watch = use_hook(|| Rc::new(RefCell::new(None::<VisibilityHandle>)));
    let element_id = props.id.clone();
    use_effect(move || {
        if watch.borrow().is_some() {
            return;
        }
        let threshold = state.config.peek().visibility_threshold;
        let on_visible: Box<dyn FnOnce()> = Box::new(move || in_view.set(true));

        match browser::visibility_source().observe(&element_id, threshold, on_visible) {
            Ok(handle) => *watch.borrow_mut() = Some(handle),
            Err(err) => {
                tracing::warn!(error = %err, element_id = %element_id, "Counter visibility unavailable")
            }
        }
    });

    use_effect(move || {
        if !in_view() {
            return;
        }
        let duration = state.config.peek().counter_duration_ms;
        let Some(animation) = counter.write().begin(duration) else {
            return;
        };

        spawn(async move {
            let started = browser::now_ms();
            loop {
                let elapsed = browser::now_ms() - started;
                display.set(animation.value_at(elapsed).to_string());
                if animation.is_finished(elapsed) {
                    break;
                }
                browser::next_frame().await;
            }
        });
    });

    rsx! {
        div {
            class: "stat",
            span {
                id: "{props.id}",
                class: "count",
                "data-count": "{raw_target}",
                "{display}"
            }
            span { class: "stat__label", "{props.label}" }
        }
    }
}
