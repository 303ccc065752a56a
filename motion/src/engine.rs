//! The animation engine capability handed to every section.
//!
//! The engine owns the handle registry and a set of per-frame subscribers.
//! The host calls [`Engine::tick`] once per animation frame with a single
//! [`FrameContext`]; every subscriber reads that same snapshot. Sections
//! never reach for globals: they receive an `Engine` at construction, open a
//! [`Scope`] on it and register everything they hook up in that scope.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::{Rc, Weak};

use crate::config::MotionConfig;
use crate::registry::{HandleId, HandleKind, HandleRegistry, Scope};
use crate::scroll::FrameContext;
use crate::style::Style;

/// Something the engine can paint. Implemented for DOM elements by the host
/// and by recording fakes in tests.
pub trait Target {
    fn apply(&self, style: &Style);

    fn set_text(&self, text: &str);

    /// Remove every property this crate may have written.
    fn reset(&self);
}

type FrameCallback = Box<dyn FnMut(&FrameContext)>;

struct EngineInner {
    config: MotionConfig,
    registry: HandleRegistry,
    subscribers: RefCell<BTreeMap<u64, FrameCallback>>,
    // keys released while their callback was detached for a tick
    detached_releases: RefCell<BTreeSet<u64>>,
    next_key: Cell<u64>,
    last_frame: Cell<Option<FrameContext>>,
}

#[derive(Clone)]
pub struct Engine {
    inner: Rc<EngineInner>,
}

impl Engine {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            inner: Rc::new(EngineInner {
                config,
                registry: HandleRegistry::new(),
                subscribers: RefCell::new(BTreeMap::new()),
                detached_releases: RefCell::new(BTreeSet::new()),
                next_key: Cell::new(0),
                last_frame: Cell::new(None),
            }),
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.inner.config
    }

    pub fn registry(&self) -> &HandleRegistry {
        &self.inner.registry
    }

    pub fn scope(&self, owner: &'static str) -> Scope {
        self.inner.registry.scope(owner)
    }

    /// Handles currently registered by all scopes.
    pub fn live_handles(&self) -> usize {
        self.inner.registry.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Most recent frame passed to [`Engine::tick`].
    pub fn last_frame(&self) -> Option<FrameContext> {
        self.inner.last_frame.get()
    }

    /// Call `callback` on every tick until the returned handle is released
    /// through `scope`.
    pub fn on_frame(
        &self,
        scope: &mut Scope,
        callback: impl FnMut(&FrameContext) + 'static,
    ) -> HandleId {
        let key = self.inner.next_key.get();
        self.inner.next_key.set(key + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .insert(key, Box::new(callback));

        let weak: Weak<EngineInner> = Rc::downgrade(&self.inner);
        scope.register(HandleKind::FrameSubscriber, move || {
            if let Some(inner) = weak.upgrade() {
                let removed = inner.subscribers.borrow_mut().remove(&key);
                if removed.is_none() {
                    inner.detached_releases.borrow_mut().insert(key);
                }
            }
        })
    }

    /// Run one frame.
    ///
    /// Subscribers are detached while they run, so a callback may register or
    /// release handles. Anything released mid-tick is not re-attached;
    /// anything added mid-tick first runs on the next frame.
    pub fn tick(&self, frame: FrameContext) {
        self.inner.last_frame.set(Some(frame));
        let mut running = std::mem::take(&mut *self.inner.subscribers.borrow_mut());

        let keys: Vec<u64> = running.keys().copied().collect();
        for key in keys {
            if self.inner.detached_releases.borrow().contains(&key) {
                continue;
            }
            if let Some(callback) = running.get_mut(&key) {
                callback(&frame);
            }
        }

        for key in std::mem::take(&mut *self.inner.detached_releases.borrow_mut()) {
            running.remove(&key);
        }
        let mut subscribers = self.inner.subscribers.borrow_mut();
        running.append(&mut subscribers);
        *subscribers = running;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::Viewport;

    fn frame(time: f64, scroll_y: f64) -> FrameContext {
        FrameContext::new(time, scroll_y, Viewport::new(1280.0, 800.0))
    }

    #[test]
    fn all_subscribers_see_the_same_snapshot() {
        let engine = Engine::new(MotionConfig::default());
        let mut scope = engine.scope("test");
        let seen = Rc::new(RefCell::new(Vec::new()));

        for _ in 0..3 {
            let seen = seen.clone();
            engine.on_frame(&mut scope, move |frame| seen.borrow_mut().push(frame.scroll_y));
        }
        engine.tick(frame(0.0, 420.0));

        assert_eq!(*seen.borrow(), vec![420.0, 420.0, 420.0]);
        assert_eq!(engine.last_frame().map(|f| f.scroll_y), Some(420.0));
    }

    #[test]
    fn dropping_scope_detaches_subscribers() {
        let engine = Engine::new(MotionConfig::default());
        let calls = Rc::new(Cell::new(0));
        {
            let mut scope = engine.scope("stats");
            let calls = calls.clone();
            engine.on_frame(&mut scope, move |_| calls.set(calls.get() + 1));
            engine.tick(frame(0.0, 0.0));
            assert_eq!(engine.live_handles(), 1);
        }
        engine.tick(frame(0.016, 0.0));

        assert_eq!(calls.get(), 1);
        assert_eq!(engine.live_handles(), 0);
        assert_eq!(engine.subscriber_count(), 0);
    }

    #[test]
    fn subscriber_can_release_itself_mid_tick() {
        let engine = Engine::new(MotionConfig::default());
        let scope = Rc::new(RefCell::new(Some(engine.scope("counter"))));
        let calls = Rc::new(Cell::new(0));

        let handle = {
            let scope_in_cb = scope.clone();
            let calls = calls.clone();
            let mut guard = scope.borrow_mut();
            let owned = guard.as_mut().unwrap();
            engine.on_frame(owned, move |_| {
                calls.set(calls.get() + 1);
                // drop the whole scope from inside its own callback
                scope_in_cb.borrow_mut().take();
            })
        };

        engine.tick(frame(0.0, 0.0));
        engine.tick(frame(0.016, 0.0));

        assert_eq!(calls.get(), 1);
        assert!(!engine.registry().contains(handle));
        assert_eq!(engine.subscriber_count(), 0);
    }

    #[test]
    fn subscriber_added_mid_tick_runs_next_frame() {
        let engine = Engine::new(MotionConfig::default());
        let outer_scope = Rc::new(RefCell::new(engine.scope("outer")));
        let late_calls = Rc::new(Cell::new(0));
        let added = Rc::new(Cell::new(false));

        {
            let engine_in_cb = engine.clone();
            let scope_in_cb = outer_scope.clone();
            let late_calls = late_calls.clone();
            let added = added.clone();
            let mut scope = outer_scope.borrow_mut();
            engine.on_frame(&mut scope, move |_| {
                if !added.get() {
                    added.set(true);
                    let late_calls = late_calls.clone();
                    engine_in_cb.on_frame(&mut scope_in_cb.borrow_mut(), move |_| {
                        late_calls.set(late_calls.get() + 1)
                    });
                }
            });
        }

        engine.tick(frame(0.0, 0.0));
        assert_eq!(late_calls.get(), 0);
        engine.tick(frame(0.016, 0.0));
        assert_eq!(late_calls.get(), 1);
        assert_eq!(engine.subscriber_count(), 2);
    }
}
