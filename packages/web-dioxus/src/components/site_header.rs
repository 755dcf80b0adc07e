//! Fixed header with the mobile navigation menu

use dioxus::prelude::*;

use crate::components::AnchorLink;
use crate::state::PageState;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#imoveis", "Imóveis"),
    ("#como-funciona", "Como funciona"),
    ("#contato", "Quero uma curadoria"),
];

/// Header and navigation.
///
/// The toggle and the menu stop click propagation, so any click that reaches
/// the page root came from outside both and closes the menu.
#[component]
pub fn SiteHeader() -> Element {
    let state = use_context::<PageState>();
    let (is_open, expanded) = {
        let menu = state.menu.read();
        (menu.is_open(), menu.aria_expanded())
    };

    rsx! {
        header {
            class: "header",
            div {
                class: "container nav",
                AnchorLink {
                    href: "#inicio",
                    class: "brand",
                    "Curadoria "
                    strong { "Cambuí" }
                }
                button {
                    class: "nav__toggle",
                    r#type: "button",
                    aria_controls: "navMenu",
                    aria_expanded: expanded,
                    aria_label: "Abrir menu",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        state.toggle_menu();
                    },
                    span {}
                    span {}
                    span {}
                }
                nav {
                    id: "navMenu",
                    class: if is_open { "nav__menu is-open" } else { "nav__menu" },
                    onclick: move |evt: MouseEvent| evt.stop_propagation(),
                    for (href, label) in NAV_LINKS.iter().copied() {
                        AnchorLink {
                            key: "{href}",
                            href,
                            class: "nav__link",
                            on_follow: move |_| state.close_menu(),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
