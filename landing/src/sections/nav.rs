use leptos::prelude::*;

const LINKS: &[(&str, &str)] = &[
    ("Solutions", "#solutions"),
    ("Services", "#services"),
    ("Impact", "#impact"),
    ("Contact", "#contact"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let (drawer_open, set_drawer_open) = signal(false);

    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <a href="#top" class="nav-brand">"AON"</a>
                <div class="nav-links">
                    {LINKS
                        .iter()
                        .map(|(label, href)| view! { <a href=*href class="nav-link">{*label}</a> })
                        .collect_view()}
                    <a href="#contact" class="btn btn-primary nav-cta">"Get In Touch"</a>
                </div>
                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_drawer_open.update(|open| *open = !*open)
                >
                    {move || if drawer_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <div class=move || if drawer_open.get() { "nav-drawer open" } else { "nav-drawer" }>
                {LINKS
                    .iter()
                    .map(|(label, href)| {
                        view! {
                            <a href=*href class="nav-drawer-link" on:click=move |_| set_drawer_open.set(false)>
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
