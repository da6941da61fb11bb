use crate::domain::a001_subscriber::ui::list::SubscriberListPage;
use crate::domain::a002_price::ui::edit::PricesPage;
use crate::domain::a004_order::ui::list::OrderListPage;
use crate::layout::Shell;
use crate::system::users::ui::list::UsersListPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Paths the server renders a page for
pub const PAGE_PATHS: [&str; 5] = ["/", "/subscribers", "/orders", "/admin/users", "/admin/prices"];

/// The server renders one page per path; pick the matching component.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="page-empty">"Sahypa tapylmady"</p> }>
                    <Route path=path!("/") view=SubscriberListPage />
                    <Route path=path!("/subscribers") view=SubscriberListPage />
                    <Route path=path!("/orders") view=OrderListPage />
                    <Route path=path!("/admin/users") view=UsersListPage />
                    <Route path=path!("/admin/prices") view=PricesPage />
                </Routes>
            </Shell>
        </Router>
    }
}
