//! Listing details modal.
//!
//! Opening a card projects the listing into [`ListingDetails`] (fallbacks
//! applied, features split, links built) and flips [`ModalState`] open.

use crate::config::LandingConfig;
use crate::listing::Listing;
use crate::outbound::whatsapp_link;

/// The modal's "official link" control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfficialLink {
    Available(String),
    /// Hidden and marked `aria-disabled`
    Unavailable,
}

impl OfficialLink {
    pub fn is_available(&self) -> bool {
        matches!(self, OfficialLink::Available(_))
    }

    pub fn href(&self) -> &str {
        match self {
            OfficialLink::Available(url) => url,
            OfficialLink::Unavailable => "#",
        }
    }

    pub fn aria_disabled(&self) -> &'static str {
        if self.is_available() {
            "false"
        } else {
            "true"
        }
    }

    /// Inline `display` style; empty keeps the stylesheet's value
    pub fn display_style(&self) -> &'static str {
        if self.is_available() {
            ""
        } else {
            "display: none;"
        }
    }
}

/// Everything the modal shows for one listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingDetails {
    pub listing_id: String,
    pub title: String,
    pub neighborhood: String,
    pub price: String,
    pub img: String,
    pub desc: String,
    /// One list item each, in declaration order
    pub features: Vec<String>,
    /// Shows the "ouro" badge
    pub featured: bool,
    pub whatsapp_link: String,
    pub official: OfficialLink,
}

impl ListingDetails {
    pub fn project(listing: &Listing, config: &LandingConfig) -> Self {
        let title = listing.title_or(&config.fallbacks).to_string();
        let neighborhood = listing.neighborhood_or(&config.fallbacks).to_string();
        let price = listing.price_or(&config.fallbacks).to_string();
        let whatsapp_link = whatsapp_link(config, &title, &neighborhood, &price);

        Self {
            listing_id: listing.id.clone(),
            img: listing.img_or_empty().to_string(),
            desc: listing.desc_or_empty().to_string(),
            features: listing.feature_list().into_iter().map(String::from).collect(),
            featured: listing.is_featured(&config.featured_marker),
            official: listing
                .official_url()
                .map(|url| OfficialLink::Available(url.to_string()))
                .unwrap_or(OfficialLink::Unavailable),
            title,
            neighborhood,
            price,
            whatsapp_link,
        }
    }
}

/// Open/closed state plus the last projected listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
    details: Option<ListingDetails>,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn details(&self) -> Option<&ListingDetails> {
        self.details.as_ref()
    }

    /// Replace the shown listing and open.
    pub fn open(&mut self, details: ListingDetails) {
        tracing::debug!(listing = %details.listing_id, "Opening listing modal");
        self.details = Some(details);
        self.open = true;
    }

    /// Close if open. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Escape closes an open modal; other keys are ignored.
    pub fn on_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }

    pub fn aria_hidden(&self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }

    /// `overflow` applied to `<body>` while the modal is shown
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Listing {
        Listing {
            id: "studio-cambui".into(),
            title: Some("Studio Cambuí".into()),
            neighborhood: None,
            price: Some("R$ 310.000".into()),
            img: Some("/img/studio.jpg".into()),
            desc: Some("Perto de tudo.".into()),
            features: "Piscina | 3 quartos | Suíte".into(),
            tags: "ouro, studio".into(),
            url: None,
        }
    }

    #[test]
    fn projection_applies_fallbacks_and_parses_features() {
        let details = ListingDetails::project(&listing(), &LandingConfig::default());

        assert_eq!(details.title, "Studio Cambuí");
        assert_eq!(details.neighborhood, "Cambuí • Campinas");
        assert_eq!(details.features, vec!["Piscina", "3 quartos", "Suíte"]);
        assert!(details.featured);
        assert!(details.whatsapp_link.contains("Studio+Cambu%C3%AD"));
    }

    #[test]
    fn missing_official_url_disables_control() {
        let details = ListingDetails::project(&listing(), &LandingConfig::default());

        assert_eq!(details.official, OfficialLink::Unavailable);
        assert_eq!(details.official.href(), "#");
        assert_eq!(details.official.aria_disabled(), "true");
        assert_eq!(details.official.display_style(), "display: none;");
    }

    #[test]
    fn declared_official_url_is_linked() {
        let mut l = listing();
        l.url = Some("https://imobiliaria.example/123".into());
        let details = ListingDetails::project(&l, &LandingConfig::default());

        assert_eq!(details.official.href(), "https://imobiliaria.example/123");
        assert_eq!(details.official.aria_disabled(), "false");
        assert_eq!(details.official.display_style(), "");
    }

    #[test]
    fn open_and_close_flip_all_flags() {
        let mut modal = ModalState::default();
        assert_eq!((modal.aria_hidden(), modal.body_overflow()), ("true", ""));

        modal.open(ListingDetails::project(&listing(), &LandingConfig::default()));
        assert!(modal.is_open());
        assert_eq!((modal.aria_hidden(), modal.body_overflow()), ("false", "hidden"));

        assert!(modal.close());
        assert_eq!((modal.aria_hidden(), modal.body_overflow()), ("true", ""));
        assert!(!modal.close());
    }

    #[test]
    fn only_escape_closes() {
        let mut modal = ModalState::default();
        modal.open(ListingDetails::project(&listing(), &LandingConfig::default()));

        assert!(!modal.on_key("Enter"));
        assert!(modal.is_open());
        assert!(modal.on_key("Escape"));
        assert!(!modal.is_open());
        assert!(!modal.on_key("Escape"));
    }

    #[test]
    fn reopening_overwrites_details() {
        let mut modal = ModalState::default();
        let config = LandingConfig::default();
        modal.open(ListingDetails::project(&listing(), &config));

        let mut other = listing();
        other.id = "apto".into();
        other.tags = "2q".into();
        modal.open(ListingDetails::project(&other, &config));

        let details = modal.details().unwrap();
        assert_eq!(details.listing_id, "apto");
        assert!(!details.featured);
    }
}
