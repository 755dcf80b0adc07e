//! Landing page

use dioxus::prelude::*;

use crate::components::{
    AnchorLink, Hero, LeadFormSection, ListingCarousel, ListingModal, ScrollIndicators, SiteHeader,
};
use crate::state::PageState;

const STEPS: &[(&str, &str)] = &[
    (
        "Você conta o que precisa",
        "Orçamento, tipo de imóvel e o que não pode faltar. Leva dois minutos.",
    ),
    (
        "A gente filtra o mercado",
        "Descartamos o que tem condomínio fora da curva, documentação enrolada ou preço inflado.",
    ),
    (
        "Você visita só o que vale",
        "Recebe uma lista curta no WhatsApp e agenda as visitas com quem já conhece cada imóvel.",
    ),
];

/// Home page - every section of the landing page
#[component]
pub fn Home() -> Element {
    let state = use_context::<PageState>();

    rsx! {
        div {
            class: "page",
            // Clicks on the toggle and menu stop here, so this only sees outside clicks
            onclick: move |_| state.page_clicked(),

            ScrollIndicators {}
            SiteHeader {}

            main {
                Hero {}
                ListingCarousel {}
                HowItWorks {}
                LeadFormSection {}
            }

            Footer {}
            ListingModal {}
        }
    }
}

#[component]
fn HowItWorks() -> Element {
    rsx! {
        section {
            id: "como-funciona",
            class: "section steps",
            div {
                class: "container",
                div {
                    class: "section__head",
                    h2 { "Como funciona" }
                }
                ol {
                    class: "steps__list",
                    for (index, (title, body)) in STEPS.iter().copied().enumerate() {
                        li {
                            key: "{index}",
                            class: "step",
                            span { class: "step__number", "{index + 1}" }
                            h3 { "{title}" }
                            p { class: "muted", "{body}" }
                        }
                    }
                }
                AnchorLink { href: "#contato", class: "btn btn--primary", "Começar agora" }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            div {
                class: "container footer__inner",
                p {
                    strong { "Curadoria Cambuí" }
                    " \u{2022} Imóveis até R$ 350 mil em Campinas"
                }
                AnchorLink { href: "#inicio", class: "footer__top", "Voltar ao início" }
            }
        }
    }
}
