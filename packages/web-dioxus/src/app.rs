//! Root application component

use dioxus::prelude::*;
use landing_core::{Catalog, LandingConfig};

use crate::pages::Home;
use crate::state::PageState;

const LANDING_CONFIG: &str = include_str!("../assets/landing.json");
const LISTINGS: &str = include_str!("../assets/listings.json");

/// Root application component
#[component]
pub fn App() -> Element {
    use_context_provider(|| PageState::new(load_config(), load_catalog()));

    rsx! {
        document::Title { "Curadoria Cambuí | Primeiro Imóvel" }
        document::Stylesheet { href: asset!("/assets/main.css") }

        Home {}
    }
}

fn load_config() -> LandingConfig {
    LandingConfig::from_json(LANDING_CONFIG).unwrap_or_else(|err| {
        tracing::error!(error = %err, "Falling back to default landing config");
        LandingConfig::default()
    })
}

fn load_catalog() -> Catalog {
    match Catalog::from_json(LISTINGS) {
        Ok(catalog) => {
            tracing::info!(listings = catalog.len(), "Loaded listing catalog");
            catalog
        }
        Err(err) => {
            tracing::error!(error = %err, "Listing catalog unavailable");
            Catalog::default()
        }
    }
}
