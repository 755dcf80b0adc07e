//! Listing catalog and the hero counts derived from it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::ListingFallbacks;
use crate::error::{LandingError, Result};
use crate::filter::TagFilter;

/// A property listing as declared in the catalog.
///
/// Text fields are optional; the card and the modal fill gaps from
/// [`ListingFallbacks`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    /// Pipe-delimited feature list, e.g. `"Piscina | 3 quartos | Suíte"`
    #[serde(default)]
    pub features: String,
    /// Free-form tag string, matched by substring
    #[serde(default)]
    pub tags: String,
    /// Official listing page
    #[serde(default)]
    pub url: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Listing {
    /// DOM id of the rendered card
    pub fn dom_id(&self) -> String {
        format!("listing-{}", self.id)
    }

    pub fn title_or<'a>(&'a self, fallbacks: &'a ListingFallbacks) -> &'a str {
        non_empty(&self.title).unwrap_or(&fallbacks.title)
    }

    pub fn neighborhood_or<'a>(&'a self, fallbacks: &'a ListingFallbacks) -> &'a str {
        non_empty(&self.neighborhood).unwrap_or(&fallbacks.neighborhood)
    }

    pub fn price_or<'a>(&'a self, fallbacks: &'a ListingFallbacks) -> &'a str {
        non_empty(&self.price).unwrap_or(&fallbacks.price)
    }

    pub fn img_or_empty(&self) -> &str {
        self.img.as_deref().unwrap_or("")
    }

    pub fn desc_or_empty(&self) -> &str {
        self.desc.as_deref().unwrap_or("")
    }

    /// Case-insensitive substring match against the tag string
    pub fn has_tag(&self, needle: &str) -> bool {
        self.tags.to_lowercase().contains(&needle.to_lowercase())
    }

    pub fn is_featured(&self, marker: &str) -> bool {
        self.has_tag(marker)
    }

    /// Split the feature string on `|`, trimming entries and dropping empty ones.
    pub fn feature_list(&self) -> Vec<&str> {
        self.features
            .split('|')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Official page URL, if one is declared and not blank
    pub fn official_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Hero counts derived from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListingStats {
    pub total: usize,
    pub featured: usize,
}

/// The page's listings, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Result<Self> {
        let mut seen = HashSet::new();
        for listing in &listings {
            if !seen.insert(listing.id.as_str()) {
                return Err(LandingError::DuplicateListingId(listing.id.clone()));
            }
        }
        Ok(Self { listings })
    }

    /// Parse a JSON array of listings.
    pub fn from_json(raw: &str) -> Result<Self> {
        let listings: Vec<Listing> = serde_json::from_str(raw).map_err(LandingError::Catalog)?;
        Self::new(listings)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter()
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Count every listing and the featured ones.
    pub fn stats(&self, featured_marker: &str) -> ListingStats {
        let stats = ListingStats {
            total: self.listings.len(),
            featured: self
                .listings
                .iter()
                .filter(|l| l.is_featured(featured_marker))
                .count(),
        };
        tracing::debug!(total = stats.total, featured = stats.featured, "Derived listing stats");
        stats
    }

    /// Visibility of each listing under `filter`, index-aligned with [`Self::listings`].
    pub fn visibility(&self, filter: &TagFilter) -> Vec<bool> {
        self.listings.iter().map(|l| filter.matches(&l.tags)).collect()
    }
}
