use aon_motion::bind::RevealGroup;
use aon_motion::{Engine, presets};
use leptos::html;
use leptos::prelude::*;

use super::{SectionScope, scroll_reveal};
use crate::content::SERVICES;
use crate::dom::{El, resolve, resolve_all};

#[component]
pub fn ServicesSection(engine: Engine) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let heading_ref = NodeRef::<html::H2>::new();
    let lead_ref = NodeRef::<html::P>::new();
    let card_refs: Vec<NodeRef<html::Div>> = SERVICES.iter().map(|_| NodeRef::new()).collect();
    let slot = SectionScope::new();

    let cards = card_refs.clone();
    Effect::new(move |_| {
        let Some(section) = section_ref.get() else {
            return;
        };
        let section = El::new(section);
        let config = engine.config();
        let mut scope = engine.scope("services");

        let titles: Vec<El> = [resolve(heading_ref, "services heading"), resolve(lead_ref, "services lead")]
            .into_iter()
            .flatten()
            .collect();
        let count = titles.len();
        scroll_reveal(
            &engine,
            &mut scope,
            section.clone(),
            RevealGroup::new(presets::services_title(config, count), titles),
        );

        let cards = resolve_all(&cards, "service card");
        let count = cards.len();
        scroll_reveal(
            &engine,
            &mut scope,
            section,
            RevealGroup::new(presets::services_cards(config, count), cards),
        );

        slot.install(scope);
    });

    view! {
        <section id="services" class="services" node_ref=section_ref>
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title" node_ref=heading_ref>"Our Services"</h2>
                    <p class="section-lead" node_ref=lead_ref>
                        "We provide comprehensive solutions across risk management, human capital, "
                        "and business consulting to help organizations thrive in an uncertain world."
                    </p>
                </div>

                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .zip(card_refs)
                        .map(|(service, card_ref)| {
                            view! {
                                <div class=format!("service-card service-card--{}", service.color) node_ref=card_ref>
                                    <div class="service-icon">{service.icon}</div>
                                    <h3 class="service-title">{service.title}</h3>
                                    <p class="service-description">{service.description}</p>
                                    <ul class="service-features">
                                        {service
                                            .features
                                            .iter()
                                            .map(|feature| view! { <li>{*feature}</li> })
                                            .collect_view()}
                                    </ul>
                                    <a href="#contact" class="btn btn-dark btn-block">"Learn More"</a>
                                    <span class="service-arrow">"→"</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
