//! `requestAnimationFrame` driver for the engine.
//!
//! Scroll position, viewport and time are read once per browser frame and
//! handed to [`Engine::tick`] as a single snapshot.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use aon_motion::{Engine, FrameContext, HandleKind, Scope, Viewport};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

type FrameClosure = Closure<dyn FnMut(f64)>;

/// Start ticking `engine` every animation frame until `scope` releases the loop.
pub fn start(engine: &Engine, scope: &mut Scope) {
    let Some(window) = web_sys::window() else {
        tracing::debug!("no window, frame loop not started");
        return;
    };

    let request: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let callback: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));
    let previous: Rc<Cell<Option<FrameContext>>> = Rc::new(Cell::new(None));

    let engine = engine.clone();
    let next = callback.clone();
    let pending = request.clone();
    *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let frame = snapshot(&window, timestamp / 1000.0, previous.get());
        previous.set(Some(frame));
        engine.tick(frame);

        if let Some(closure) = next.borrow().as_ref() {
            pending.set(
                window
                    .request_animation_frame(closure.as_ref().unchecked_ref())
                    .ok(),
            );
        }
    }));

    if let Some(closure) = callback.borrow().as_ref() {
        request.set(
            window
                .request_animation_frame(closure.as_ref().unchecked_ref())
                .ok(),
        );
    }

    scope.register(HandleKind::FrameLoop, move || {
        if let (Some(window), Some(id)) = (web_sys::window(), request.take()) {
            let _ = window.cancel_animation_frame(id);
        }
        // breaks the closure's reference to itself
        callback.borrow_mut().take();
        tracing::debug!("frame loop stopped");
    });
}

/// Current viewport in CSS pixels.
pub fn viewport(window: &web_sys::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width, height)
}

fn snapshot(window: &web_sys::Window, time: f64, previous: Option<FrameContext>) -> FrameContext {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = viewport(window);
    match previous {
        Some(previous) => previous.advance(time, scroll_y, viewport),
        None => FrameContext::new(time, scroll_y, viewport),
    }
}
