use std::cell::RefCell;
use std::rc::Rc;

use aon_motion::bind::StatsAnimator;
use aon_motion::counter::Counter;
use aon_motion::{Engine, HandleKind};
use leptos::html;
use leptos::prelude::*;

use super::SectionScope;
use crate::content::STATS;
use crate::dom::{self, El, resolve, resolve_all};

fn counter_for(index: usize) -> Option<Counter> {
    STATS
        .get(index)
        .map(|stat| Counter::new(stat.number, stat.prefix, stat.suffix))
}

/// Global impact figures. Revealed and counted up the first time the
/// section becomes visible, never again.
#[component]
pub fn StatsSection(engine: Engine) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let background_ref = NodeRef::<html::Div>::new();
    let heading_ref = NodeRef::<html::H2>::new();
    let lead_ref = NodeRef::<html::P>::new();
    let card_refs: Vec<NodeRef<html::Div>> = STATS.iter().map(|_| NodeRef::new()).collect();
    let counter_refs: Vec<NodeRef<html::Span>> = STATS.iter().map(|_| NodeRef::new()).collect();
    let slot = SectionScope::new();

    let (cards, counters) = (card_refs.clone(), counter_refs.clone());
    Effect::new(move |_| {
        let Some(section) = section_ref.get() else {
            return;
        };
        let Some(background) = resolve(background_ref, "stats background") else {
            return;
        };
        let titles: Vec<El> = [resolve(heading_ref, "stats heading"), resolve(lead_ref, "stats lead")]
            .into_iter()
            .flatten()
            .collect();
        let title_count = titles.len();
        let items: Vec<El> = std::iter::once(background)
            .chain(titles)
            .chain(resolve_all(&cards, "stat card"))
            .collect();
        let counters: Vec<(Counter, El)> = counters
            .iter()
            .enumerate()
            .filter_map(|(index, node_ref)| {
                Some((counter_for(index)?, resolve(*node_ref, "stat counter")?))
            })
            .collect();

        let config = engine.config();
        let mut scope = engine.scope("stats");
        let animator = Rc::new(RefCell::new(StatsAnimator::new(config, title_count, items, counters)));
        animator.borrow().mount();

        let observed = animator.clone();
        dom::observe_visibility(&mut scope, &El::new(section), config.stats_threshold, move |visible| {
            if observed.borrow_mut().notify_visible(visible, dom::now()) {
                tracing::debug!("stats section revealed");
            }
        });

        let painter = animator.clone();
        engine.on_frame(&mut scope, move |frame| painter.borrow_mut().frame(frame.time));

        scope.register(HandleKind::StyleOverride, move || animator.borrow().unmount());
        slot.install(scope);
    });

    view! {
        <section id="impact" class="stats" node_ref=section_ref>
            <div class="stats-bg" node_ref=background_ref></div>
            <div class="stats-pattern"></div>

            <div class="container stats-inner">
                <div class="section-header">
                    <h2 class="section-title light" node_ref=heading_ref>"Our Global Impact"</h2>
                    <p class="section-lead light" node_ref=lead_ref>
                        "Trusted by organizations worldwide, we deliver results that matter across every industry and geography."
                    </p>
                </div>

                <div class="stats-grid">
                    {STATS
                        .iter()
                        .enumerate()
                        .zip(card_refs.into_iter().zip(counter_refs))
                        .map(|((index, stat), (card_ref, counter_ref))| {
                            let initial = counter_for(index)
                                .map(|counter| counter.initial_text())
                                .unwrap_or_default();
                            view! {
                                <div class="stat-card" node_ref=card_ref>
                                    <div class="stat-card-inner">
                                        <div class="stat-icon">{stat.icon}</div>
                                        <span class="stat-counter" node_ref=counter_ref>{initial}</span>
                                        <p class="stat-label">{stat.label}</p>
                                        <div class="stat-rule"></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="stats-cta">
                    <p>"Join thousands of organizations that trust Aon for their most critical decisions"</p>
                    <a href="#contact" class="btn btn-light">"Partner With Us"</a>
                </div>
            </div>
        </section>
    }
}
