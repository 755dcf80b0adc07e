//! Hero counters.
//!
//! A counter animates its displayed integer from 0 to its target once per
//! page view. The web crate decides *when* (first time the counter is in
//! view) and drives the clock; this module decides *what* is shown at each
//! tick and guards against a second run.

use crate::listing::ListingStats;

/// Cubic ease-out: fast start, gentle landing. `p` is clamped to `[0, 1]`.
pub fn ease_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Parsed counter target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterTarget(f64);

impl CounterTarget {
    /// Parse a `data-count` value. Non-numeric, non-finite and non-positive
    /// targets are rejected, which leaves the counter's text untouched.
    pub fn parse(raw: &str) -> Option<Self> {
        let value: f64 = raw.trim().parse().ok()?;
        Self::from_value(value)
    }

    pub fn from_value(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Where a hero counter takes its target from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterRole {
    /// Number of listings in the catalog
    Total,
    /// Number of featured listings
    Featured,
    /// Author-set target from configuration, kept raw
    Fixed(String),
}

impl CounterRole {
    /// Value written to `data-count` and used as the counter's initial text
    pub fn raw_target(&self, stats: &ListingStats) -> String {
        match self {
            CounterRole::Total => stats.total.to_string(),
            CounterRole::Featured => stats.featured.to_string(),
            CounterRole::Fixed(raw) => raw.clone(),
        }
    }

    pub fn target(&self, stats: &ListingStats) -> Option<CounterTarget> {
        CounterTarget::parse(&self.raw_target(stats))
    }
}

/// One in-flight animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: CounterTarget, duration_ms: f64) -> Self {
        Self {
            target: target.value(),
            duration_ms,
        }
    }

    /// Linear progress in `[0, 1]` after `elapsed_ms`
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Integer to display after `elapsed_ms`
    pub fn value_at(&self, elapsed_ms: f64) -> i64 {
        (self.target * ease_out_cubic(self.progress(elapsed_ms))).round() as i64
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

/// Per-counter one-shot guard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterState {
    target: Option<CounterTarget>,
    animated: bool,
}

impl CounterState {
    pub fn new(target: Option<CounterTarget>) -> Self {
        Self {
            target,
            animated: false,
        }
    }

    pub fn has_animated(&self) -> bool {
        self.animated
    }

    /// Start the animation if it has not run yet and the target is valid.
    pub fn begin(&mut self, duration_ms: f64) -> Option<CounterAnimation> {
        if self.animated {
            return None;
        }
        let target = self.target?;
        self.animated = true;
        Some(CounterAnimation::new(target, duration_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(7.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn animation_is_monotone_and_lands_on_target() {
        let anim = CounterAnimation::new(CounterTarget::parse("12").unwrap(), 900.0);

        assert_eq!(anim.value_at(0.0), 0);
        let mut last = 0;
        for t in (0..=900).step_by(15) {
            let v = anim.value_at(t as f64);
            assert!(v >= last, "value went down at t={t}");
            last = v;
        }
        assert_eq!(anim.value_at(900.0), 12);
        assert_eq!(anim.value_at(5_000.0), 12);
        assert!(anim.is_finished(900.0));
        assert!(!anim.is_finished(899.0));
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let anim = CounterAnimation::new(CounterTarget::parse("5").unwrap(), 0.0);
        assert_eq!(anim.value_at(0.0), 5);
    }

    #[test]
    fn invalid_targets_are_skipped() {
        assert_eq!(CounterTarget::parse("0"), None);
        assert_eq!(CounterTarget::parse("-4"), None);
        assert_eq!(CounterTarget::parse("abc"), None);
        assert_eq!(CounterTarget::parse(""), None);
        assert_eq!(CounterTarget::parse("NaN"), None);
        assert_eq!(CounterTarget::parse(" 350 ").map(|t| t.value()), Some(350.0));
    }

    #[test]
    fn counter_animates_once() {
        let mut state = CounterState::new(CounterTarget::parse("7"));
        assert!(state.begin(900.0).is_some());
        assert!(state.has_animated());
        assert!(state.begin(900.0).is_none());
    }

    #[test]
    fn counter_without_target_never_starts() {
        let mut state = CounterState::new(None);
        assert!(state.begin(900.0).is_none());
        assert!(!state.has_animated());
    }

    #[test]
    fn roles_resolve_from_stats() {
        let stats = ListingStats { total: 9, featured: 0 };
        assert_eq!(CounterRole::Total.raw_target(&stats), "9");
        assert_eq!(CounterRole::Featured.target(&stats), None);
        assert_eq!(
            CounterRole::Fixed("350".into()).target(&stats).map(|t| t.value()),
            Some(350.0)
        );
    }
}
