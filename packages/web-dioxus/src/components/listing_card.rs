//! Listing card

use dioxus::prelude::*;
use landing_core::Listing;

use crate::state::PageState;

#[derive(Props, Clone, PartialEq)]
pub struct ListingCardProps {
    pub listing: Listing,
    /// Whether the active filter lets this card through
    pub visible: bool,
}

/// Carousel card; clicking it opens the details modal.
#[component]
pub fn ListingCard(props: ListingCardProps) -> Element {
    let state = use_context::<PageState>();
    let listing = &props.listing;

    let (title, neighborhood, price, featured) = {
        let config = state.config.read();
        (
            listing.title_or(&config.fallbacks).to_string(),
            listing.neighborhood_or(&config.fallbacks).to_string(),
            listing.price_or(&config.fallbacks).to_string(),
            listing.is_featured(&config.featured_marker),
        )
    };
    let highlights: Vec<String> = listing
        .feature_list()
        .into_iter()
        .take(3)
        .map(String::from)
        .collect();

    let click_id = listing.id.clone();
    let key_id = listing.id.clone();

    rsx! {
        article {
            id: "{listing.dom_id()}",
            class: "listing",
            style: if props.visible { "" } else { "display: none;" },
            role: "button",
            tabindex: "0",
            "data-title": "{title}",
            "data-neighborhood": "{neighborhood}",
            "data-price": "{price}",
            "data-img": "{listing.img_or_empty()}",
            "data-tags": "{listing.tags}",
            "data-features": "{listing.features}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                state.open_listing(&click_id);
            },
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Enter {
                    state.open_listing(&key_id);
                }
            },
            div {
                class: "listing__media",
                img {
                    src: "{listing.img_or_empty()}",
                    alt: "{title}",
                    "loading": "lazy",
                }
                if featured {
                    span { class: "badge badge--ouro", "Selo Ouro" }
                }
            }
            div {
                class: "listing__body",
                p { class: "muted", "{neighborhood}" }
                h3 { "{title}" }
                p { class: "price", "{price}" }
                if !highlights.is_empty() {
                    ul {
                        class: "listing__features",
                        for (index, feature) in highlights.iter().enumerate() {
                            li { key: "{index}", "{feature}" }
                        }
                    }
                }
                span { class: "listing__more", "Ver detalhes" }
            }
        }
    }
}
