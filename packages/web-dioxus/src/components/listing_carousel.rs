//! Filter chips and the listing carousel

use dioxus::prelude::*;

use crate::components::ListingCard;
use crate::state::{PageState, VIEWPORT_ID};

#[component]
pub fn ListingCarousel() -> Element {
    let state = use_context::<PageState>();
    let chips = state.chips.read().clone();
    let listings = state.catalog.read().listings().to_vec();
    let visibility = state.visibility();
    let nothing_visible = !visibility.iter().any(|v| *v);

    rsx! {
        section {
            id: "imoveis",
            class: "section listings",
            div {
                class: "container",
                div {
                    class: "section__head",
                    h2 { "Imóveis da curadoria" }
                    p {
                        class: "muted",
                        "Todos visitados ou checados com o corretor. Toque em um card para ver os detalhes."
                    }
                }

                div {
                    class: "chips",
                    for (index, chip) in chips.chips().iter().enumerate() {
                        button {
                            key: "{index}",
                            r#type: "button",
                            class: if chips.is_active(index) { "chip is-active" } else { "chip" },
                            "data-filter": "{chip.keyword}",
                            aria_pressed: if chips.is_active(index) { "true" } else { "false" },
                            onclick: move |_| state.select_chip(index),
                            "{chip.label}"
                        }
                    }
                }

                div {
                    class: "carousel",
                    button {
                        class: "carousel__btn carousel__btn--prev",
                        r#type: "button",
                        "data-carousel-prev": "true",
                        aria_label: "Imóvel anterior",
                        onclick: move |_| state.step_carousel(-1.0),
                        "\u{2039}"
                    }
                    div {
                        id: VIEWPORT_ID,
                        class: "carousel__viewport",
                        for (listing, visible) in listings.iter().zip(visibility) {
                            ListingCard { key: "{listing.id}", listing: listing.clone(), visible }
                        }
                    }
                    button {
                        class: "carousel__btn carousel__btn--next",
                        r#type: "button",
                        "data-carousel-next": "true",
                        aria_label: "Próximo imóvel",
                        onclick: move |_| state.step_carousel(1.0),
                        "\u{203A}"
                    }
                }

                if nothing_visible {
                    p { class: "muted listings__empty", "Nenhum imóvel com esse filtro por enquanto." }
                }
            }
        }
    }
}
