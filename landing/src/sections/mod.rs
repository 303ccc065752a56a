// Landing page sections

mod contact;
mod hero;
mod horizontal_scroll;
mod nav;
mod services;
mod stats;

pub use contact::ContactSection;
pub use hero::HeroSection;
pub use horizontal_scroll::HorizontalScroll;
pub use nav::Nav;
pub use services::ServicesSection;
pub use stats::StatsSection;

use std::cell::RefCell;
use std::rc::Rc;

use aon_motion::bind::RevealGroup;
use aon_motion::{Engine, HandleKind, Scope};
use leptos::prelude::*;

use crate::dom::El;

/// Slot holding a section's animation scope between mount and cleanup.
///
/// Replacing or clearing the slot drops the previous scope, which releases
/// every listener, observer and frame subscriber registered in it.
#[derive(Clone, Copy)]
pub(crate) struct SectionScope(StoredValue<Option<Scope>, LocalStorage>);

impl SectionScope {
    pub fn new() -> Self {
        let slot = Self(StoredValue::new_local(None));
        on_cleanup(move || slot.clear());
        slot
    }

    pub fn install(&self, scope: Scope) {
        tracing::debug!(owner = scope.owner(), handles = scope.len(), "section mounted");
        self.0.update_value(|slot| *slot = Some(scope));
    }

    fn clear(&self) {
        self.0.try_update_value(|slot| slot.take());
    }
}

/// Play `group` once `anchor`'s top crosses its trigger line, checked every
/// frame against the frame's viewport.
pub(crate) fn scroll_reveal(engine: &Engine, scope: &mut Scope, anchor: El, group: RevealGroup<El>) {
    group.mount();
    let group = Rc::new(RefCell::new(group));
    let painter = group.clone();
    engine.on_frame(scope, move |frame| {
        let mut group = painter.borrow_mut();
        let (top, _) = anchor.rect();
        let in_view = group.reveal().trigger().crossed(top, frame.viewport.height);
        group.frame(in_view, frame.time);
    });
    scope.register(HandleKind::StyleOverride, move || group.borrow().unmount());
}
