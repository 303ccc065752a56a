//! Scoped ownership of everything a section hooks into the host.
//!
//! Each registered handle carries the closure that undoes it (remove a
//! listener, disconnect an observer, clear a style). A [`Scope`] remembers
//! the handles its owner created and releases them, newest first, when
//! [`Scope::release_all`] is called or the scope is dropped. The shared
//! [`HandleRegistry`] counts live handles so leaks are observable.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandleId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    ResizeListener,
    FrameSubscriber,
    FrameLoop,
    Observer,
    PinSpacer,
    StyleOverride,
}

type Release = Box<dyn FnOnce()>;

struct Entry {
    kind: HandleKind,
    owner: &'static str,
    release: Option<Release>,
}

#[derive(Default)]
struct RegistryInner {
    next_id: u64,
    live: BTreeMap<HandleId, Entry>,
}

/// Shared, single-threaded table of live handles.
#[derive(Clone, Default)]
pub struct HandleRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

impl fmt::Debug for HandleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandleRegistry")
            .field("live", &self.len())
            .finish()
    }
}

impl HandleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope(&self, owner: &'static str) -> Scope {
        Scope {
            registry: self.clone(),
            owner,
            handles: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: HandleId) -> bool {
        self.inner.borrow().live.contains_key(&id)
    }

    pub fn count_for(&self, owner: &str) -> usize {
        self.inner
            .borrow()
            .live
            .values()
            .filter(|entry| entry.owner == owner)
            .count()
    }

    fn insert(&self, kind: HandleKind, owner: &'static str, release: Release) -> HandleId {
        let mut inner = self.inner.borrow_mut();
        let id = HandleId(inner.next_id);
        inner.next_id += 1;
        inner.live.insert(
            id,
            Entry {
                kind,
                owner,
                release: Some(release),
            },
        );
        id
    }

    /// Remove the entry and run its release closure. The registry borrow is
    /// dropped first so the closure may touch the registry again.
    fn release(&self, id: HandleId) -> bool {
        let entry = self.inner.borrow_mut().live.remove(&id);
        match entry {
            Some(mut entry) => {
                tracing::trace!(owner = entry.owner, kind = ?entry.kind, "releasing handle");
                if let Some(release) = entry.release.take() {
                    release();
                }
                true
            }
            None => false,
        }
    }
}

/// Owner-side view of the registry. Dropping it releases everything it holds.
pub struct Scope {
    registry: HandleRegistry,
    owner: &'static str,
    handles: Vec<HandleId>,
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("owner", &self.owner)
            .field("handles", &self.handles.len())
            .finish()
    }
}

impl Scope {
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    pub fn registry(&self) -> &HandleRegistry {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn register(&mut self, kind: HandleKind, release: impl FnOnce() + 'static) -> HandleId {
        let id = self.registry.insert(kind, self.owner, Box::new(release));
        self.handles.push(id);
        id
    }

    /// Release one handle early. Returns `false` if it was not live.
    pub fn release(&mut self, id: HandleId) -> bool {
        self.handles.retain(|held| *held != id);
        self.registry.release(id)
    }

    pub fn release_all(&mut self) {
        if self.handles.is_empty() {
            return;
        }
        tracing::debug!(owner = self.owner, handles = self.handles.len(), "tearing down scope");
        while let Some(id) = self.handles.pop() {
            self.registry.release(id);
        }
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        self.release_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn dropping_scope_returns_to_baseline() {
        let registry = HandleRegistry::new();
        let _page = {
            let mut page = registry.scope("page");
            page.register(HandleKind::FrameLoop, || {});
            page
        };
        let baseline = registry.len();

        {
            let mut stats = registry.scope("stats");
            stats.register(HandleKind::Observer, || {});
            stats.register(HandleKind::FrameSubscriber, || {});
            assert_eq!(registry.len(), baseline + 2);
            assert_eq!(registry.count_for("stats"), 2);
        }

        assert_eq!(registry.len(), baseline);
        assert_eq!(registry.count_for("stats"), 0);
    }

    #[test]
    fn release_runs_in_reverse_registration_order() {
        let registry = HandleRegistry::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut scope = registry.scope("hero");
        for n in 0..3 {
            let order = order.clone();
            scope.register(HandleKind::StyleOverride, move || order.borrow_mut().push(n));
        }

        scope.release_all();
        assert_eq!(*order.borrow(), vec![2, 1, 0]);
        assert!(registry.is_empty());
        assert!(scope.is_empty());
    }

    #[test]
    fn early_release_runs_once() {
        let registry = HandleRegistry::new();
        let calls = Rc::new(Cell::new(0));
        let mut scope = registry.scope("contact");
        let id = {
            let calls = calls.clone();
            scope.register(HandleKind::ResizeListener, move || calls.set(calls.get() + 1))
        };

        assert!(scope.release(id));
        assert!(!scope.release(id));
        drop(scope);
        assert_eq!(calls.get(), 1);
        assert!(!registry.contains(id));
    }

    #[test]
    fn release_closure_may_use_registry() {
        let registry = HandleRegistry::new();
        let mut outer = registry.scope("outer");
        let inner_registry = registry.clone();
        let seen = Rc::new(Cell::new(usize::MAX));
        let seen_in_release = seen.clone();
        outer.register(HandleKind::PinSpacer, move || {
            seen_in_release.set(inner_registry.len());
        });

        outer.release_all();
        assert_eq!(seen.get(), 0);
    }
}
