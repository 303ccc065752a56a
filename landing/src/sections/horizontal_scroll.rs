use std::cell::RefCell;
use std::rc::Rc;

use aon_motion::bind::StripAnimator;
use aon_motion::horizontal::StripGeometry;
use aon_motion::{Engine, HandleKind};
use leptos::html;
use leptos::prelude::*;

use super::SectionScope;
use crate::content::PANELS;
use crate::dom::{self, El, resolve, resolve_all};

/// Pinned strip of full-viewport panels, translated horizontally while the
/// page scrolls vertically.
///
/// The section element is the pin spacer: its height is set to one viewport
/// plus the strip's horizontal travel, and the sticky inner container holds
/// the viewport in place for exactly that distance.
#[component]
pub fn HorizontalScroll(engine: Engine) -> impl IntoView {
    let spacer_ref = NodeRef::<html::Section>::new();
    let strip_ref = NodeRef::<html::Div>::new();
    let content_refs: Vec<NodeRef<html::Div>> = PANELS.iter().map(|_| NodeRef::new()).collect();
    let (active, set_active) = signal(0usize);
    let slot = SectionScope::new();

    let panel_refs = content_refs.clone();
    Effect::new(move |_| {
        let Some(spacer) = spacer_ref.get() else {
            return;
        };
        let spacer = El::new(spacer);
        let Some(strip) = resolve(strip_ref, "horizontal strip") else {
            return;
        };
        let panels = resolve_all(&panel_refs, "panel content");
        if panels.is_empty() {
            tracing::debug!("no panels, horizontal scroll stays unpinned");
            return;
        }

        let mut scope = engine.scope("horizontal-scroll");
        let panel_count = panels.len();
        let animator = Rc::new(RefCell::new(StripAnimator::new(engine.config(), strip, panels)));

        let resized = animator.clone();
        dom::listen_window(&mut scope, HandleKind::ResizeListener, "resize", move || {
            resized.borrow_mut().invalidate()
        });

        let painter = animator.clone();
        let pin_spacer = spacer.clone();
        engine.on_frame(&mut scope, move |frame| {
            let mut animator = painter.borrow_mut();
            if animator.needs_refresh() {
                let (top, _) = pin_spacer.rect();
                let geometry = StripGeometry {
                    panel_count,
                    viewport: frame.viewport,
                    container_top: top + frame.scroll_y,
                };
                if animator.refresh(geometry).is_ok() {
                    if let Some(layout) = animator.controller().layout() {
                        pin_spacer.set_height(layout.spacer_height());
                        tracing::debug!(
                            pin_start = layout.pin.start,
                            travel = layout.max_travel(),
                            "horizontal scroll pinned"
                        );
                    }
                }
            }
            if let Some(out) = animator.frame(frame) {
                if out.active_panel != active.get_untracked() {
                    set_active.set(out.active_panel);
                }
            }
        });

        scope.register(HandleKind::PinSpacer, move || spacer.clear_height());
        scope.register(HandleKind::StyleOverride, move || animator.borrow_mut().unmount());
        slot.install(scope);
    });

    view! {
        <section id="solutions" class="hscroll" node_ref=spacer_ref>
            <div class="hscroll-pin">
                <div
                    class="hscroll-strip"
                    node_ref=strip_ref
                    style=format!("width: {}vw", PANELS.len() * 100)
                >
                    {PANELS
                        .iter()
                        .zip(content_refs)
                        .enumerate()
                        .map(|(index, (panel, content_ref))| {
                            view! {
                                <div class=format!("panel panel--{}", panel.color) id=panel.id>
                                    <div class="panel-rings">
                                        <span class="ring ring-a"></span>
                                        <span class="ring ring-b"></span>
                                        <span class="ring ring-c"></span>
                                    </div>
                                    <div class="panel-content" node_ref=content_ref>
                                        <div class="panel-copy">
                                            <div class="panel-icon">{panel.icon}</div>
                                            <h2 class="panel-title">{panel.title}</h2>
                                            <h3 class="panel-subtitle">{panel.subtitle}</h3>
                                            <p class="panel-description">{panel.description}</p>
                                            <a href="#contact" class="btn btn-light">"Learn More"</a>
                                        </div>
                                        <div class="panel-features">
                                            <h4>"Key Features"</h4>
                                            {panel
                                                .features
                                                .iter()
                                                .map(|feature| {
                                                    view! {
                                                        <div class="panel-feature">
                                                            <span class="panel-feature-dot"></span>
                                                            <span>{*feature}</span>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                    <div class="panel-number">{format!("{:02}", index + 1)}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="hscroll-progress">
                    {(0..PANELS.len())
                        .map(|index| {
                            view! {
                                <span class=move || {
                                    if active.get() == index { "progress-dot active" } else { "progress-dot" }
                                }></span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
