//! Thin wrapper over the browser APIs the page needs beyond what Dioxus
//! renders: window scrolling, element geometry, global listeners, visibility
//! detection and frame timing.
//!
//! With the `web` feature these call into `web-sys`. Without it (native
//! builds, `cargo test`) every measurement is absent and every action is a
//! no-op, so components compile and degrade the same way they do when an
//! element is missing from the page.

use anyhow::Result;

/// Window scroll measurements, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

/// Calls `on_visible` at most once, the first time an element is in view.
///
/// Implementations can be swapped: the intersection observer is preferred,
/// and [`ImmediateVisibility`] stands in when the browser lacks one.
pub trait VisibilitySource {
    fn observe(
        &self,
        element_id: &str,
        threshold: f64,
        on_visible: Box<dyn FnOnce()>,
    ) -> Result<VisibilityHandle>;
}

/// Treats every element as already visible.
pub struct ImmediateVisibility;

impl VisibilitySource for ImmediateVisibility {
    fn observe(
        &self,
        _element_id: &str,
        _threshold: f64,
        on_visible: Box<dyn FnOnce()>,
    ) -> Result<VisibilityHandle> {
        on_visible();
        Ok(VisibilityHandle::default())
    }
}

pub use platform::*;

#[cfg(feature = "web")]
mod platform {
    use anyhow::{anyhow, Context, Result};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{
        AddEventListenerOptions, Document, EventTarget, HtmlElement, IntersectionObserver,
        IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, ScrollBehavior,
        ScrollToOptions, Window,
    };

    use super::{ImmediateVisibility, ScrollMetrics, VisibilitySource};

    fn js_err(err: JsValue) -> anyhow::Error {
        anyhow!("{err:?}")
    }

    fn window() -> Result<Window> {
        web_sys::window().context("no window")
    }

    fn document() -> Result<Document> {
        window()?.document().context("no document")
    }

    fn smooth(left: Option<f64>, top: Option<f64>) -> ScrollToOptions {
        let options = ScrollToOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        if let Some(left) = left {
            options.set_left(left);
        }
        if let Some(top) = top {
            options.set_top(top);
        }
        options
    }

    pub fn scroll_metrics() -> Option<ScrollMetrics> {
        let window = window().ok()?;
        let root = window.document()?.document_element()?;
        Some(ScrollMetrics {
            scroll_y: window.scroll_y().ok()?,
            scroll_height: f64::from(root.scroll_height()),
            viewport_height: window.inner_height().ok()?.as_f64()?,
        })
    }

    pub fn scroll_window_to(top: f64) {
        if let Ok(window) = window() {
            window.scroll_to_with_scroll_to_options(&smooth(None, Some(top)));
        }
    }

    /// Rendered height of the fixed `.header`, 0 when absent
    pub fn header_height() -> f64 {
        document()
            .ok()
            .and_then(|d| d.query_selector(".header").ok().flatten())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| f64::from(el.offset_height()))
            .unwrap_or(0.0)
    }

    /// Viewport-relative top of an element
    pub fn element_top(id: &str) -> Option<f64> {
        let el = document().ok()?.get_element_by_id(id)?;
        Some(el.get_bounding_client_rect().top())
    }

    pub fn element_width(id: &str) -> Option<f64> {
        let el = document().ok()?.get_element_by_id(id)?;
        Some(el.get_bounding_client_rect().width())
    }

    pub fn scroll_element_by(id: &str, left: f64) {
        if let Some(el) = document().ok().and_then(|d| d.get_element_by_id(id)) {
            el.scroll_by_with_scroll_to_options(&smooth(Some(left), None));
        }
    }

    pub fn scroll_element_to(id: &str, left: f64) {
        if let Some(el) = document().ok().and_then(|d| d.get_element_by_id(id)) {
            el.scroll_to_with_scroll_to_options(&smooth(Some(left), None));
        }
    }

    /// Set `overflow` on `<body>`; an empty value restores the stylesheet's.
    pub fn set_body_overflow(value: &str) {
        let Some(body) = document().ok().and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let result = if value.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", value)
        };
        if let Err(err) = result {
            tracing::debug!(error = ?err, "Failed to set body overflow");
        }
    }

    /// High resolution timestamp in milliseconds
    pub fn now_ms() -> f64 {
        window()
            .ok()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    /// Wait roughly one display frame.
    pub async fn next_frame() {
        gloo_timers::future::TimeoutFuture::new(16).await;
    }

    /// Removes its listener when dropped.
    pub struct ListenerGuard {
        target: EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl Drop for ListenerGuard {
        fn drop(&mut self) {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }

    fn listen(
        target: EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<ListenerGuard> {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(js_err)?;
        Ok(ListenerGuard {
            target,
            event,
            callback,
        })
    }

    /// Passive `scroll` listener on the window
    pub fn on_window_scroll(mut handler: impl FnMut() + 'static) -> Result<ListenerGuard> {
        listen(window()?.into(), "scroll", true, move |_| handler())
    }

    /// `keydown` listener on the document, handed the key name
    pub fn on_document_keydown(mut handler: impl FnMut(String) + 'static) -> Result<ListenerGuard> {
        listen(document()?.into(), "keydown", false, move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                handler(event.key());
            }
        })
    }

    /// Keeps an observer alive; disconnects it when dropped.
    #[derive(Default)]
    pub struct VisibilityHandle {
        observer: Option<IntersectionObserver>,
        _callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
    }

    impl Drop for VisibilityHandle {
        fn drop(&mut self) {
            if let Some(observer) = &self.observer {
                observer.disconnect();
            }
        }
    }

    /// One-shot visibility through `IntersectionObserver`
    pub struct IntersectionVisibility;

    impl VisibilitySource for IntersectionVisibility {
        fn observe(
            &self,
            element_id: &str,
            threshold: f64,
            on_visible: Box<dyn FnOnce()>,
        ) -> Result<VisibilityHandle> {
            let element = document()?
                .get_element_by_id(element_id)
                .with_context(|| format!("element #{element_id} not found"))?;

            let mut on_visible = Some(on_visible);
            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        if entry.is_intersecting() && entry.intersection_ratio() >= threshold {
                            observer.unobserve(&entry.target());
                            if let Some(on_visible) = on_visible.take() {
                                on_visible();
                            }
                        }
                    }
                },
            );

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(threshold));
            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                    .map_err(js_err)?;
            observer.observe(&element);

            Ok(VisibilityHandle {
                observer: Some(observer),
                _callback: Some(callback),
            })
        }
    }

    /// The intersection observer when the browser has one, otherwise the
    /// immediate fallback.
    pub fn visibility_source() -> Box<dyn VisibilitySource> {
        let supported = window()
            .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
            .unwrap_or(false);

        if supported {
            Box::new(IntersectionVisibility)
        } else {
            tracing::debug!("IntersectionObserver unavailable, animating counters immediately");
            Box::new(ImmediateVisibility)
        }
    }
}

#[cfg(not(feature = "web"))]
mod platform {
    use std::sync::OnceLock;
    use std::time::Instant;

    use anyhow::Result;

    use super::{ImmediateVisibility, ScrollMetrics, VisibilitySource};

    pub fn scroll_metrics() -> Option<ScrollMetrics> {
        None
    }

    pub fn scroll_window_to(_top: f64) {}

    pub fn header_height() -> f64 {
        0.0
    }

    pub fn element_top(_id: &str) -> Option<f64> {
        None
    }

    pub fn element_width(_id: &str) -> Option<f64> {
        None
    }

    pub fn scroll_element_by(_id: &str, _left: f64) {}

    pub fn scroll_element_to(_id: &str, _left: f64) {}

    pub fn set_body_overflow(_value: &str) {}

    pub fn now_ms() -> f64 {
        static EPOCH: OnceLock<Instant> = OnceLock::new();
        EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
    }

    pub async fn next_frame() {}

    pub struct ListenerGuard;

    pub fn on_window_scroll(_handler: impl FnMut() + 'static) -> Result<ListenerGuard> {
        Ok(ListenerGuard)
    }

    pub fn on_document_keydown(_handler: impl FnMut(String) + 'static) -> Result<ListenerGuard> {
        Ok(ListenerGuard)
    }

    #[derive(Default)]
    pub struct VisibilityHandle;

    pub fn visibility_source() -> Box<dyn VisibilitySource> {
        Box::new(ImmediateVisibility)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn immediate_visibility_fires_during_observe() {
        let seen = Rc::new(Cell::new(false));
        let flag = seen.clone();

        let handle = ImmediateVisibility.observe("totalCount", 0.5, Box::new(move || flag.set(true)));

        assert!(handle.is_ok());
        assert!(seen.get());
    }

    #[cfg(not(feature = "web"))]
    #[test]
    fn native_build_measures_nothing() {
        assert!(scroll_metrics().is_none());
        assert!(element_width("listingViewport").is_none());
        assert_eq!(header_height(), 0.0);
        assert!(on_window_scroll(|| {}).is_ok());
    }
}
