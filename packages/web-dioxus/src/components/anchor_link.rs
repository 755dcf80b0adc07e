//! In-page link with header-aware smooth scrolling

use dioxus::prelude::*;

use crate::state::PageState;

#[derive(Props, Clone, PartialEq)]
pub struct AnchorLinkProps {
    /// `#id` of the target section
    #[props(into)]
    pub href: String,
    #[props(into, default)]
    pub class: String,
    /// Runs before scrolling, whether or not the target resolves
    pub on_follow: Option<EventHandler<()>>,
    pub children: Element,
}

/// Anchor that scrolls its target to just below the fixed header.
///
/// Falls back to the browser's default jump when the target is missing.
#[component]
pub fn AnchorLink(props: AnchorLinkProps) -> Element {
    let state = use_context::<PageState>();
    let on_follow = props.on_follow;
    let href = props.href.clone();

    rsx! {
        a {
            href: "{props.href}",
            class: "{props.class}",
            onclick: move |evt: MouseEvent| {
                if let Some(on_follow) = on_follow {
                    on_follow.call(());
                }
                if state.follow_anchor(&href) {
                    evt.prevent_default();
                }
            },
            {props.children}
        }
    }
}
