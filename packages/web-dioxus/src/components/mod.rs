//! Page sections and reusable pieces

mod anchor_link;
mod hero;
mod hero_counter;
mod lead_form;
mod listing_card;
mod listing_carousel;
mod listing_modal;
mod scroll_indicators;
mod site_header;

pub use anchor_link::*;
pub use hero::*;
pub use hero_counter::*;
pub use lead_form::*;
pub use listing_card::*;
pub use listing_carousel::*;
pub use listing_modal::*;
pub use scroll_indicators::*;
pub use site_header::*;
