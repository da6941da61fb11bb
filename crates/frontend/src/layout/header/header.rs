use leptos::prelude::*;

/// Sections in the navigation; each path is a server-rendered page
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("/subscribers", "Müşderiler"),
    ("/orders", "Sargytlar"),
    ("/admin/users", "Ulanyjylar"),
    ("/admin/prices", "Bahalar"),
];

/// `rel="external"` keeps the router from intercepting the click, so every
/// section is a full page load with its own window globals.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Suw hasaby"</span>
                <nav class="header__nav">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <a href=href rel="external">{label}</a> })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
