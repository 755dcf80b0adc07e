//! Hero section

use dioxus::prelude::*;
use landing_core::CounterRole;

use crate::components::{AnchorLink, HeroCounter};
use crate::state::PageState;

#[component]
pub fn Hero() -> Element {
    let state = use_context::<PageState>();
    let hero_stats = state.config.read().hero_stats.clone();

    rsx! {
        section {
            id: "inicio",
            class: "hero",
            div {
                class: "container hero__grid",
                div {
                    class: "hero__copy",
                    p { class: "eyebrow", "Curadoria Cambuí \u{2022} Campinas" }
                    h1 { "Seu primeiro imóvel no Cambuí, até R$ 350 mil." }
                    p {
                        class: "lead",
                        "A gente garimpa, visita e filtra. Você recebe só o que cabe no bolso e faz sentido para a sua rotina."
                    }
                    div {
                        class: "hero__actions",
                        AnchorLink { href: "#imoveis", class: "btn btn--primary", "Ver imóveis" }
                        AnchorLink { href: "#contato", class: "btn btn--ghost", "Quero uma curadoria" }
                    }
                }
                div {
                    class: "hero__stats",
                    HeroCounter { id: "totalCount", role: CounterRole::Total, label: "imóveis na curadoria" }
                    HeroCounter { id: "ouroCount", role: CounterRole::Featured, label: "com selo ouro" }
                    for (index, stat) in hero_stats.into_iter().enumerate() {
                        HeroCounter {
                            key: "{index}",
                            id: format!("heroStat{index}"),
                            role: CounterRole::Fixed(stat.target),
                            label: stat.label,
                        }
                    }
                }
            }
        }
    }
}
