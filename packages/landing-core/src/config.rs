//! Site configuration.
//!
//! Every tunable constant of the page lives here. The web crate embeds a JSON
//! file at compile time and parses it with [`LandingConfig::from_json`];
//! any field left out of that file keeps its default.

use serde::{Deserialize, Serialize};

use crate::error::{LandingError, Result};

/// Default WhatsApp message. `{title}`, `{neighborhood}` and `{price}` are
/// substituted from the opened listing.
pub const DEFAULT_MESSAGE_TEMPLATE: &str = "Olá! Tenho interesse neste imóvel da Curadoria Cambuí (até R$ 350 mil):\n\n*{title}*\n{neighborhood}\nPreço: {price}\n\nPode me passar mais detalhes e agenda de visita?";

/// Landing page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LandingConfig {
    /// Extra space kept between the fixed header and an anchor target (px)
    pub header_margin: f64,
    /// Scroll offset after which the back-to-top control appears (px)
    pub back_to_top_threshold: f64,
    pub counter_duration_ms: f64,
    /// Fraction of a counter that must be in view before it animates
    pub visibility_threshold: f64,
    /// Gap between carousel cards (px)
    pub carousel_gap: f64,
    /// Card width used for stepping when every card is filtered out (px)
    pub fallback_card_width: f64,
    /// Tag substring marking a featured ("ouro") listing
    pub featured_marker: String,
    pub whatsapp_base_url: String,
    pub whatsapp_phone: String,
    pub message_template: String,
    pub chips: Vec<ChipConfig>,
    /// Hero stats with author-set targets, shown after the derived counters
    pub hero_stats: Vec<HeroStatConfig>,
    pub fallbacks: ListingFallbacks,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            header_margin: 10.0,
            back_to_top_threshold: 520.0,
            counter_duration_ms: 900.0,
            visibility_threshold: 0.5,
            carousel_gap: 14.0,
            fallback_card_width: 280.0,
            featured_marker: "ouro".to_string(),
            whatsapp_base_url: "https://api.whatsapp.com/send".to_string(),
            whatsapp_phone: "5519981611842".to_string(),
            message_template: DEFAULT_MESSAGE_TEMPLATE.to_string(),
            chips: ChipConfig::defaults(),
            hero_stats: Vec::new(),
            fallbacks: ListingFallbacks::default(),
        }
    }
}

impl LandingConfig {
    /// Parse a configuration document, filling omitted fields with defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw).map_err(LandingError::Config)?;
        tracing::debug!(
            chips = config.chips.len(),
            hero_stats = config.hero_stats.len(),
            "Loaded landing config"
        );
        Ok(config)
    }
}

/// A filter chip as declared in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipConfig {
    /// Tag keyword, or `all`
    pub keyword: String,
    pub label: String,
}

impl ChipConfig {
    fn new(keyword: &str, label: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            label: label.to_string(),
        }
    }

    fn defaults() -> Vec<Self> {
        vec![
            Self::new("all", "Todos"),
            Self::new("ouro", "Selo Ouro"),
            Self::new("studio", "Studio"),
            Self::new("1q", "1 quarto"),
            Self::new("2q", "2 quartos"),
            Self::new("lazer", "Com lazer"),
        ]
    }
}

/// An extra hero counter with an author-set target.
///
/// The target stays a raw string so a typo in the config file disables the
/// animation for that stat instead of failing the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroStatConfig {
    pub label: String,
    pub target: String,
}

/// Text shown when a listing leaves a field out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingFallbacks {
    pub title: String,
    pub neighborhood: String,
    pub price: String,
}

impl Default for ListingFallbacks {
    fn default() -> Self {
        Self {
            title: "Imóvel".to_string(),
            neighborhood: "Cambuí • Campinas".to_string(),
            price: "R$ —".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = LandingConfig::from_json("{}").unwrap();
        assert_eq!(config, LandingConfig::default());
        assert_eq!(config.back_to_top_threshold, 520.0);
        assert_eq!(config.featured_marker, "ouro");
        assert_eq!(config.chips.first().map(|c| c.keyword.as_str()), Some("all"));
    }

    #[test]
    fn partial_document_overrides_only_named_fields() {
        let config = LandingConfig::from_json(
            r#"{"carouselGap": 20, "fallbacks": {"price": "Consulte"}}"#,
        )
        .unwrap();

        assert_eq!(config.carousel_gap, 20.0);
        assert_eq!(config.fallback_card_width, 280.0);
        assert_eq!(config.fallbacks.price, "Consulte");
        assert_eq!(config.fallbacks.title, "Imóvel");
    }

    #[test]
    fn malformed_document_is_a_config_error() {
        let err = LandingConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, LandingError::Config(_)));
    }
}
