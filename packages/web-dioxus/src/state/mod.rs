//! Page controller: all interactive state of the landing page.
//!
//! Built once when [`crate::app::App`] mounts and shared through context.
//! Every field is a signal, so the controller is `Copy` and can be moved into
//! event handlers and browser listeners freely.

use dioxus::prelude::*;
use landing_core::{
    anchor_scroll_top, anchor_target_id, back_to_top_visible, carousel_step, scroll_progress,
    Catalog, ChipSet, LandingConfig, LeadForm, ListingDetails, ListingStats, MenuState, ModalState,
    Toast,
};

use crate::browser;

/// DOM id of the horizontally scrolling listing row
pub const VIEWPORT_ID: &str = "listingViewport";

#[derive(Clone, Copy)]
pub struct PageState {
    pub config: Signal<LandingConfig>,
    pub catalog: Signal<Catalog>,
    /// Derived once from the catalog
    pub stats: ListingStats,
    pub menu: Signal<MenuState>,
    pub chips: Signal<ChipSet>,
    pub modal: Signal<ModalState>,
    pub lead: Signal<LeadForm>,
    pub toast: Signal<Option<Toast>>,
    /// Scroll progress, percent
    pub progress: Signal<f64>,
    pub show_to_top: Signal<bool>,
}

impl PageState {
    pub fn new(config: LandingConfig, catalog: Catalog) -> Self {
        let stats = catalog.stats(&config.featured_marker);
        let chips = ChipSet::from_config(&config.chips);

        Self {
            stats,
            chips: Signal::new(chips),
            config: Signal::new(config),
            catalog: Signal::new(catalog),
            menu: Signal::new(MenuState::default()),
            modal: Signal::new(ModalState::default()),
            lead: Signal::new(LeadForm::default()),
            toast: Signal::new(None),
            progress: Signal::new(0.0),
            show_to_top: Signal::new(false),
        }
    }

    // Menu

    pub fn toggle_menu(mut self) {
        self.menu.write().toggle();
    }

    pub fn close_menu(mut self) {
        if self.menu.peek().is_open() {
            self.menu.write().close();
        }
    }

    /// A click bubbled up to the page root, i.e. it landed outside the menu
    /// and its toggle.
    pub fn page_clicked(mut self) {
        if self.menu.peek().is_open() {
            self.menu.write().on_page_click(false);
        }
    }

    // Scrolling

    /// Smooth-scroll to an in-page anchor. Returns `false` when `href` has no
    /// resolvable target, in which case the browser's default is left alone.
    pub fn follow_anchor(self, href: &str) -> bool {
        let Some(id) = anchor_target_id(href) else {
            return false;
        };
        let (Some(top), Some(metrics)) = (browser::element_top(id), browser::scroll_metrics()) else {
            return false;
        };

        let margin = self.config.peek().header_margin;
        browser::scroll_window_to(anchor_scroll_top(
            top,
            metrics.scroll_y,
            browser::header_height(),
            margin,
        ));
        true
    }

    /// Recompute the progress bar and back-to-top visibility.
    pub fn sync_scroll(mut self) {
        let Some(metrics) = browser::scroll_metrics() else {
            return;
        };
        let threshold = self.config.peek().back_to_top_threshold;

        self.progress.set(scroll_progress(
            metrics.scroll_y,
            metrics.scroll_height,
            metrics.viewport_height,
        ));
        let visible = back_to_top_visible(metrics.scroll_y, threshold);
        if *self.show_to_top.peek() != visible {
            self.show_to_top.set(visible);
        }
    }

    pub fn scroll_to_top(self) {
        browser::scroll_window_to(0.0);
    }

    // Listings

    /// Visibility of each listing under the active chip. Subscribes the caller.
    pub fn visibility(&self) -> Vec<bool> {
        let filter = self.chips.read().active_filter();
        self.catalog.read().visibility(&filter)
    }

    /// Activate a chip, re-filter, and rewind the carousel.
    pub fn select_chip(mut self, index: usize) {
        if self.chips.write().activate(index).is_some() {
            browser::scroll_element_to(VIEWPORT_ID, 0.0);
        }
    }

    /// Scroll the carousel one card in `direction` (-1 or 1).
    pub fn step_carousel(self, direction: f64) {
        let first_visible_width = {
            let catalog = self.catalog.peek();
            let filter = self.chips.peek().active_filter();
            let width = catalog
                .iter()
                .find(|l| filter.matches(&l.tags))
                .and_then(|l| browser::element_width(&l.dom_id()));
            width
        };
        let config = self.config.peek();
        let step = carousel_step(first_visible_width, config.fallback_card_width, config.carousel_gap);
        browser::scroll_element_by(VIEWPORT_ID, direction * step);
    }

    // Modal

    pub fn open_listing(mut self, listing_id: &str) {
        let details = {
            let catalog = self.catalog.peek();
            let Some(listing) = catalog.get(listing_id) else {
                tracing::warn!(listing_id, "Clicked listing is not in the catalog");
                return;
            };
            let config = self.config.peek();
            let details = ListingDetails::project(listing, &config);
            details
        };
        self.modal.write().open(details);
    }

    pub fn close_modal(mut self) {
        if self.modal.peek().is_open() {
            self.modal.write().close();
        }
    }

    pub fn key_pressed(mut self, key: &str) {
        let mut next = self.modal.peek().clone();
        if next.on_key(key) {
            self.modal.set(next);
        }
    }

    // Lead form

    pub fn submit_lead(mut self) {
        let toast = self.lead.write().submit();
        self.toast.set(Some(toast));
    }
}
