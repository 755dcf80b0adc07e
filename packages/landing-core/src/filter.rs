//! Filter chips and tag matching

use crate::config::ChipConfig;

/// Keyword that shows every listing
pub const ALL_KEYWORD: &str = "all";

/// A parsed chip filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    /// Lowercased keyword matched as a substring of the tag string
    Keyword(String),
}

impl TagFilter {
    /// An empty keyword behaves like `all`.
    pub fn parse(keyword: &str) -> Self {
        let keyword = keyword.to_lowercase();
        if keyword.is_empty() || keyword == ALL_KEYWORD {
            TagFilter::All
        } else {
            TagFilter::Keyword(keyword)
        }
    }

    pub fn matches(&self, tags: &str) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Keyword(keyword) => tags.to_lowercase().contains(keyword.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    /// Keyword as written in configuration, rendered as `data-filter`
    pub keyword: String,
    pub label: String,
    pub filter: TagFilter,
}

/// The row of filter chips. Exactly one chip is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipSet {
    chips: Vec<FilterChip>,
    active: usize,
}

impl ChipSet {
    /// Build from configuration. The first `all` chip starts active, or the
    /// first chip when none shows everything.
    pub fn from_config(chips: &[ChipConfig]) -> Self {
        let chips: Vec<FilterChip> = chips
            .iter()
            .map(|c| FilterChip {
                keyword: c.keyword.clone(),
                label: c.label.clone(),
                filter: TagFilter::parse(&c.keyword),
            })
            .collect();
        let active = chips
            .iter()
            .position(|c| c.filter == TagFilter::All)
            .unwrap_or(0);

        Self { chips, active }
    }

    pub fn chips(&self) -> &[FilterChip] {
        &self.chips
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.chips.is_empty() && self.active == index
    }

    pub fn active_index(&self) -> Option<usize> {
        (!self.chips.is_empty()).then_some(self.active)
    }

    /// Filter of the active chip. A chip-less page shows everything.
    pub fn active_filter(&self) -> TagFilter {
        self.chips
            .get(self.active)
            .map(|c| c.filter.clone())
            .unwrap_or_default()
    }

    /// Make `index` the only active chip and return its filter.
    ///
    /// Returns `None` and leaves the selection alone if `index` is out of range.
    pub fn activate(&mut self, index: usize) -> Option<TagFilter> {
        let chip = self.chips.get(index)?;
        self.active = index;
        tracing::debug!(keyword = %chip.keyword, "Filter chip activated");
        Some(chip.filter.clone())
    }
}
