use aon_motion::bind::RevealGroup;
use aon_motion::form::{ContactFormState, Field};
use aon_motion::{Engine, presets};
use leptos::html;
use leptos::prelude::*;

use super::{SectionScope, scroll_reveal};
use crate::content::{CONTACT_INFO, SOCIAL_LINKS};
use crate::dom::{El, resolve, resolve_all};

const THANK_YOU: &str = "Thank you for your message! We'll get back to you soon.";

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Enter your full name",
        Field::Email => "Enter your email address",
        Field::Company => "Enter your company name",
        Field::Message => "Tell us about your needs and how we can help...",
    }
}

#[component]
fn FormField(
    field: Field,
    form: RwSignal<ContactFormState>,
    wrapper: NodeRef<html::Div>,
) -> impl IntoView {
    let label = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };
    let value = move || form.with(|state| state.get(field).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        form.update(|state| state.set(field, event_target_value(&ev)))
    };

    let input_type = if field == Field::Email { "email" } else { "text" };
    let control = match field {
        Field::Message => view! {
            <textarea
                id=field.key()
                name=field.key()
                rows="5"
                placeholder=placeholder(field)
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        _ => view! {
            <input
                type=input_type
                id=field.key()
                name=field.key()
                placeholder=placeholder(field)
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-field" node_ref=wrapper>
            <label for=field.key()>{label}</label>
            {control}
        </div>
    }
}

/// Contact form, office details and the page footer.
#[component]
pub fn ContactSection(engine: Engine) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let header_ref = NodeRef::<html::Div>::new();
    let form_card_ref = NodeRef::<html::Div>::new();
    let info_column_ref = NodeRef::<html::Div>::new();
    let field_refs: Vec<NodeRef<html::Div>> = Field::ALL.iter().map(|_| NodeRef::new()).collect();
    let info_refs: Vec<NodeRef<html::Div>> =
        (0..=CONTACT_INFO.len()).map(|_| NodeRef::new()).collect();
    let slot = SectionScope::new();

    let form = RwSignal::new(ContactFormState::default());
    let error = RwSignal::new(None::<String>);

    let (fields, infos) = (field_refs.clone(), info_refs.clone());
    Effect::new(move |_| {
        let Some(section) = section_ref.get() else {
            return;
        };
        let section = El::new(section);
        let config = engine.config();
        let mut scope = engine.scope("contact");

        let content: Vec<El> = [
            resolve(header_ref, "contact header"),
            resolve(form_card_ref, "contact form card"),
            resolve(info_column_ref, "contact info column"),
        ]
        .into_iter()
        .flatten()
        .collect();
        let count = content.len();
        scroll_reveal(
            &engine,
            &mut scope,
            section.clone(),
            RevealGroup::new(presets::contact_content(config, count), content),
        );

        let fields = resolve_all(&fields, "form field");
        let count = fields.len();
        scroll_reveal(
            &engine,
            &mut scope,
            section.clone(),
            RevealGroup::new(presets::contact_fields(config, count), fields),
        );

        let cards = resolve_all(&infos, "contact info card");
        let count = cards.len();
        scroll_reveal(
            &engine,
            &mut scope,
            section,
            RevealGroup::new(presets::contact_info(config, count), cards),
        );

        slot.install(scope);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(ContactFormState::submit) {
            Ok(_) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(THANK_YOU);
                }
                form.update(ContactFormState::clear);
                error.set(None);
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    let social_ref = info_refs[CONTACT_INFO.len()];

    view! {
        <section id="contact" class="contact" node_ref=section_ref>
            <div class="container">
                <div class="section-header" node_ref=header_ref>
                    <h2 class="section-title">"Get In Touch"</h2>
                    <p class="section-lead">
                        "Ready to make better decisions for your organization? "
                        "Contact our experts to discuss how we can help you navigate uncertainty and drive growth."
                    </p>
                </div>

                <div class="contact-grid">
                    <div class="contact-form-card" node_ref=form_card_ref>
                        <h3>"Send us a Message"</h3>
                        <form class="contact-form" novalidate=true on:submit=on_submit>
                            {Field::ALL
                                .into_iter()
                                .zip(field_refs)
                                .map(|(field, wrapper)| view! { <FormField field=field form=form wrapper=wrapper /> })
                                .collect_view()}
                            {move || {
                                error
                                    .get()
                                    .map(|message| view! { <p class="form-error" role="alert">{message}</p> })
                            }}
                            <button type="submit" class="btn btn-primary btn-block">"Send Message"</button>
                        </form>
                    </div>

                    <div class="contact-info-column" node_ref=info_column_ref>
                        {CONTACT_INFO
                            .iter()
                            .zip(info_refs)
                            .map(|(info, card_ref)| {
                                view! {
                                    <div class="contact-info" node_ref=card_ref>
                                        <div class="contact-info-icon">{info.icon}</div>
                                        <div>
                                            <h4>{info.title}</h4>
                                            {info.details.iter().map(|detail| view! { <p>{*detail}</p> }).collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}

                        <div class="contact-info contact-social" node_ref=social_ref>
                            <h4>"Follow Us"</h4>
                            <div class="social-links">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|(name, icon)| {
                                        view! { <a href="#" class="social-link" aria-label=*name>{*icon}</a> }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <footer class="footer">
                <div class="container footer-inner">
                    <div class="footer-brand">"AON"</div>
                    <div class="footer-copy">
                        <p>"© 2024 Aon plc. All rights reserved."</p>
                        <p class="footer-tagline">"Better decisions for a better world."</p>
                    </div>
                </div>
            </footer>
        </section>
    }
}
