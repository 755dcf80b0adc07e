//! Primeiro Imóvel - Dioxus web landing page
//!
//! Curated listings of properties up to R$ 350 mil in Cambuí, Campinas.
//! Everything runs in the browser; the listing catalog and site settings are
//! embedded at build time.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod browser;
mod components;
mod pages;
mod state;

fn main() {
    init_logging();

    dioxus::launch(app::App);
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    dioxus::logger::initialize_default();
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();
}
