// Aon Landing Page, Leptos 0.8 Edition

mod content;
mod dom;
mod frame_loop;
mod sections;
mod settings;
mod styles;

use aon_motion::Engine;
use leptos::prelude::*;
use sections::*;
use styles::LANDING_CSS;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::INFO)
            .build(),
    );
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let engine = Engine::new(settings::load());

    // The frame loop lives as long as the page and goes down with it.
    let mut scope = engine.scope("page");
    frame_loop::start(&engine, &mut scope);
    SectionScope::new().install(scope);

    view! {
        <style>{LANDING_CSS}</style>
        <Nav />
        <main>
            <HeroSection engine=engine.clone() />
            <HorizontalScroll engine=engine.clone() />
            <ServicesSection engine=engine.clone() />
            <StatsSection engine=engine.clone() />
            <ContactSection engine=engine />
        </main>
    }
}
