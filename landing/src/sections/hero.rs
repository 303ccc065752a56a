use std::cell::{Cell, RefCell};
use std::rc::Rc;

use aon_motion::bind::HeroAnimator;
use aon_motion::parallax::Parallax;
use aon_motion::{Engine, HandleKind, ScrollSpan};
use leptos::html;
use leptos::prelude::*;

use super::SectionScope;
use crate::dom::{self, El, resolve};

#[component]
pub fn HeroSection(engine: Engine) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let background_ref = NodeRef::<html::Div>::new();
    let title_ref = NodeRef::<html::H1>::new();
    let subtitle_ref = NodeRef::<html::P>::new();
    let cta_ref = NodeRef::<html::Div>::new();
    let slot = SectionScope::new();

    Effect::new(move |_| {
        let Some(section) = section_ref.get() else {
            return;
        };
        let section = El::new(section);
        let Some(items) = [
            resolve(title_ref, "hero title"),
            resolve(subtitle_ref, "hero subtitle"),
            resolve(cta_ref, "hero actions"),
        ]
        .into_iter()
        .collect::<Option<Vec<El>>>() else {
            return;
        };

        let mut scope = engine.scope("hero");
        let animator = Rc::new(RefCell::new(HeroAnimator::new(
            engine.config(),
            items,
            resolve(background_ref, "hero background"),
        )));
        animator.borrow().mount();

        // parallax span in document coordinates, re-measured after a resize
        let measured: Rc<Cell<Option<ScrollSpan>>> = Rc::new(Cell::new(None));
        let stale = measured.clone();
        dom::listen_window(&mut scope, HandleKind::ResizeListener, "resize", move || {
            stale.set(None)
        });

        let painter = animator.clone();
        engine.on_frame(&mut scope, move |frame| {
            let span = measured.get().unwrap_or_else(|| {
                let (top, height) = section.rect();
                let span = Parallax::span(top + frame.scroll_y, height, frame.viewport.height);
                measured.set(Some(span));
                span
            });
            painter.borrow_mut().frame(frame, span);
        });

        scope.register(HandleKind::StyleOverride, move || animator.borrow().unmount());
        slot.install(scope);
    });

    view! {
        <section id="top" class="hero" node_ref=section_ref>
            <div class="hero-bg" node_ref=background_ref></div>
            <div class="hero-glow">
                <div class="hero-glow-a"></div>
                <div class="hero-glow-b"></div>
            </div>

            <div class="container hero-content">
                <h1 class="hero-title" node_ref=title_ref>
                    "Better Decisions for a "
                    <span class="hero-title-accent">"Better World"</span>
                </h1>
                <p class="hero-subtitle" node_ref=subtitle_ref>
                    "Through actionable analytic insight, globally integrated Risk Capital and Human Capital expertise, "
                    "we provide clients with the clarity and confidence to make better decisions."
                </p>
                <div class="hero-actions" node_ref=cta_ref>
                    <a href="#solutions" class="btn btn-light">"Explore Solutions"</a>
                    <a href="#services" class="btn btn-outline">"Watch Demo"</a>
                </div>
                <div class="scroll-indicator">
                    <div class="scroll-indicator-dot"></div>
                </div>
            </div>
        </section>
    }
}
