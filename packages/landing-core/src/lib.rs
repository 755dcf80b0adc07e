//! # Landing Core
//!
//! Platform-free behaviour of the Primeiro Imóvel landing page.
//!
//! Everything here is pure: no DOM, no timers, no IO. The web crate owns the
//! browser and feeds measurements (scroll offsets, card widths, elapsed time)
//! into these types, then renders whatever they decide.
//!
//! ## Modules
//!
//! - [`config`] - every tunable constant, loaded from the embedded site config
//! - [`listing`] - the listing catalog and the derived hero counts
//! - [`filter`] - filter chips and tag matching
//! - [`counter`] - one-shot eased counter animation
//! - [`scroll`] - progress bar, back-to-top, anchor offset and carousel step math
//! - [`menu`] - mobile navigation open/closed state
//! - [`lead`] - lead form validation and toast
//! - [`modal`] - listing details projection and modal open/closed state
//! - [`outbound`] - WhatsApp deep link builder
//!
//! ## Example
//!
//! ```
//! use landing_core::{Catalog, LandingConfig, TagFilter};
//!
//! let config = LandingConfig::default();
//! let catalog = Catalog::from_json(r#"[
//!     {"id": "a", "title": "Studio Cambuí", "tags": "ouro, studio"},
//!     {"id": "b", "title": "Apto 2Q", "tags": "2q"}
//! ]"#).unwrap();
//!
//! let stats = catalog.stats(&config.featured_marker);
//! assert_eq!((stats.total, stats.featured), (2, 1));
//!
//! let visible = catalog.visibility(&TagFilter::parse("studio"));
//! assert_eq!(visible, vec![true, false]);
//! ```

pub mod config;
pub mod counter;
pub mod error;
pub mod filter;
pub mod lead;
pub mod listing;
pub mod menu;
pub mod modal;
pub mod outbound;
pub mod scroll;

pub use config::{ChipConfig, HeroStatConfig, LandingConfig, ListingFallbacks};
pub use counter::{ease_out_cubic, CounterAnimation, CounterRole, CounterState, CounterTarget};
pub use error::{LandingError, Result};
pub use filter::{ChipSet, FilterChip, TagFilter};
pub use lead::{LeadError, LeadForm, Toast, ToastTone};
pub use listing::{Catalog, Listing, ListingStats};
pub use menu::MenuState;
pub use modal::{ListingDetails, ModalState, OfficialLink};
pub use outbound::whatsapp_link;
pub use scroll::{anchor_scroll_top, anchor_target_id, back_to_top_visible, carousel_step, scroll_progress};
