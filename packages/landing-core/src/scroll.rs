//! Scroll math for the progress bar, back-to-top control, anchor links and
//! the listing carousel. All values are CSS pixels.

/// Page scroll as a percentage in `[0, 100]`.
///
/// A page that cannot scroll reports 0.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Element id targeted by an in-page `href`, or `None` for `""`, `"#"` and
/// links that leave the page.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Window offset that puts an anchor target just below the fixed header.
pub fn anchor_scroll_top(target_top: f64, scroll_y: f64, header_height: f64, margin: f64) -> f64 {
    target_top + scroll_y - header_height - margin
}

/// Carousel step: one card plus the gap, or the fallback width when every
/// card is hidden.
pub fn carousel_step(first_visible_width: Option<f64>, fallback_width: f64, gap: f64) -> f64 {
    (first_visible_width.unwrap_or(fallback_width) + gap).round()
}
