//! Listing details modal

use std::rc::Rc;

use dioxus::prelude::*;

use crate::browser;
use crate::state::PageState;

/// Details dialog for the last clicked listing.
///
/// Escape and every `data-close` control close it. While it is open the page
/// behind it does not scroll.
#[component]
pub fn ListingModal() -> Element {
    let state = use_context::<PageState>();

    use_hook(move || {
        let guard = browser::on_document_keydown(move |key| state.key_pressed(&key))
            .map_err(|err| tracing::warn!(error = %err, "Keydown listener unavailable"))
            .ok();
        Rc::new(guard)
    });

    use_effect(move || {
        let overflow = state.modal.read().body_overflow();
        browser::set_body_overflow(overflow);
    });

    let modal = state.modal.read().clone();

    rsx! {
        div {
            id: "listingModal",
            class: if modal.is_open() { "modal is-open" } else { "modal" },
            role: "dialog",
            aria_modal: "true",
            aria_hidden: modal.aria_hidden(),
            aria_labelledby: "modalTitle",

            div {
                class: "modal__backdrop",
                "data-close": "1",
                onclick: move |_| state.close_modal(),
            }

            div {
                class: "modal__panel",
                button {
                    class: "modal__close",
                    r#type: "button",
                    "data-close": "1",
                    aria_label: "Fechar",
                    onclick: move |_| state.close_modal(),
                    "\u{00D7}"
                }

                if let Some(details) = modal.details() {
                    img { id: "modalImg", class: "modal__img", src: "{details.img}", alt: "{details.title}" }
                    div {
                        class: "modal__content",
                        span {
                            id: "modalBadge",
                            class: "badge badge--ouro",
                            hidden: !details.featured,
                            "Selo Ouro"
                        }
                        p { id: "modalNeighborhood", class: "muted", "{details.neighborhood}" }
                        h3 { id: "modalTitle", "{details.title}" }
                        p { id: "modalPrice", class: "price", "{details.price}" }
                        p { id: "modalDesc", "{details.desc}" }
                        ul {
                            id: "modalMeta",
                            class: "modal__meta",
                            for (index, feature) in details.features.iter().enumerate() {
                                li { key: "{index}", "{feature}" }
                            }
                        }
                        div {
                            class: "modal__actions",
                            a {
                                id: "modalWhats",
                                class: "btn btn--primary",
                                href: "{details.whatsapp_link}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "Falar no WhatsApp"
                            }
                            a {
                                id: "modalOfficial",
                                class: "btn btn--ghost",
                                href: "{details.official.href()}",
                                style: details.official.display_style(),
                                aria_disabled: details.official.aria_disabled(),
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "Ver anúncio oficial"
                            }
                        }
                    }
                }
            }
        }
    }
}
