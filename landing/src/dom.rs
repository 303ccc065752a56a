//! DOM glue: paintable element handles, listeners and observers.
//!
//! Every listener or observer created here is registered in the caller's
//! [`Scope`], so dropping the scope detaches it.

use aon_motion::{HandleId, HandleKind, Scope, Style, Target};
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// An element the motion engine paints directly through inline styles.
#[derive(Clone)]
pub struct El(HtmlElement);

impl El {
    pub fn new(element: impl Into<HtmlElement>) -> Self {
        Self(element.into())
    }

    pub fn element(&self) -> &HtmlElement {
        &self.0
    }

    /// Top edge relative to the viewport and height, in CSS pixels.
    pub fn rect(&self) -> (f64, f64) {
        let rect = self.0.get_bounding_client_rect();
        (rect.top(), rect.height())
    }

    pub fn set_height(&self, px: f64) {
        let _ = self.0.style().set_property("height", &format!("{px:.0}px"));
    }

    pub fn clear_height(&self) {
        let _ = self.0.style().remove_property("height");
    }
}

impl Target for El {
    fn apply(&self, style: &Style) {
        let css = self.0.style();
        let _ = css.set_property("transform", &style.transform_css());
        let _ = css.set_property("opacity", &style.opacity_css());
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn reset(&self) {
        let css = self.0.style();
        let _ = css.remove_property("transform");
        let _ = css.remove_property("opacity");
    }
}

/// Resolve a single node ref, logging when it never mounted.
pub fn resolve<E>(node_ref: NodeRef<E>, what: &'static str) -> Option<El>
where
    E: html::ElementType,
    E::Output: JsCast + Clone + Into<HtmlElement> + 'static,
{
    let element = node_ref.get_untracked();
    if element.is_none() {
        tracing::debug!(what, "element not mounted, skipping");
    }
    element.map(El::new)
}

/// Resolve a list of node refs, dropping the ones that never mounted.
pub fn resolve_all<E>(node_refs: &[NodeRef<E>], what: &'static str) -> Vec<El>
where
    E: html::ElementType,
    E::Output: JsCast + Clone + Into<HtmlElement> + 'static,
{
    node_refs
        .iter()
        .filter_map(|node_ref| resolve(*node_ref, what))
        .collect()
}

/// Milliseconds-precision page clock in seconds, matching frame timestamps.
pub fn now() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now() / 1000.0)
        .unwrap_or(0.0)
}

/// Attach `handler` to a window event. The listener is removed when the
/// returned handle is released.
pub fn listen_window(
    scope: &mut Scope,
    kind: HandleKind,
    event: &'static str,
    handler: impl FnMut() + 'static,
) -> Option<HandleId> {
    let window = web_sys::window()?;
    let closure = Closure::<dyn FnMut()>::new(handler);
    if window
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        tracing::warn!(event, "could not attach window listener");
        return None;
    }
    Some(scope.register(kind, move || {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }))
}

/// Report whether `target` intersects the viewport at `threshold` visibility.
/// The observer disconnects when the returned handle is released.
pub fn observe_visibility(
    scope: &mut Scope,
    target: &El,
    threshold: f64,
    mut handler: impl FnMut(bool) + 'static,
) -> Option<HandleId> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                handler(entry.is_intersecting());
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                tracing::warn!(?err, "IntersectionObserver unavailable");
                return None;
            }
        };
    observer.observe(target.element());

    Some(scope.register(HandleKind::Observer, move || {
        observer.disconnect();
        drop(callback);
    }))
}
