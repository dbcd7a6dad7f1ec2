//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Link, MetaTags, Script, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::RequireAccess;
use crate::components::navbar::NavBar;
use crate::components::toast_host::ToastHost;
use crate::net::types::Role;
use crate::pages::admin::{
    carousel::AdminCarouselPage, categories::AdminCategoriesPage, dashboard::AdminDashboardPage, shops::AdminShopsPage,
};
use crate::pages::merchant::{
    dashboard::MerchantDashboardPage, orders::MerchantOrdersPage, products::MerchantProductsPage,
};
use crate::pages::{
    home::HomePage, login::LoginPage, nearby::NearbyPage, orders::BuyerOrdersPage, product_detail::ProductDetailPage,
    profile::ProfilePage,
};
use crate::state::auth::{AuthState, load_session};
use crate::state::toast::ToastState;
use crate::util::auth::Requirement;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts, starts the session lookup and
/// sets up client-side routing. Role-restricted routes are wrapped in
/// [`RequireAccess`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    load_session(auth);

    let merchant = Requirement::Role(Role::Merchant);
    let admin = Requirement::Role(Role::Admin);

    view! {
        <Stylesheet id="leptos" href="/pkg/lapak.css"/>
        <Link rel="stylesheet" href=LEAFLET_CSS/>
        <Script src=LEAFLET_JS/>
        <Title text="Lapak"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| view! { <div class="empty-state">"Halaman tidak ditemukan."</div> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("nearby") view=NearbyPage/>
                    <Route path=(StaticSegment("products"), ParamSegment("id")) view=ProductDetailPage/>
                    <Route
                        path=StaticSegment("orders")
                        view=|| view! { <RequireAccess requirement=Requirement::AnyUser><BuyerOrdersPage/></RequireAccess> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <RequireAccess requirement=Requirement::AnyUser><ProfilePage/></RequireAccess> }
                    />
                    <Route
                        path=StaticSegment("merchant")
                        view=move || view! { <RequireAccess requirement=merchant><MerchantDashboardPage/></RequireAccess> }
                    />
                    <Route
                        path=(StaticSegment("merchant"), StaticSegment("products"))
                        view=move || view! { <RequireAccess requirement=merchant><MerchantProductsPage/></RequireAccess> }
                    />
                    <Route
                        path=(StaticSegment("merchant"), StaticSegment("orders"))
                        view=move || view! { <RequireAccess requirement=merchant><MerchantOrdersPage/></RequireAccess> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=move || view! { <RequireAccess requirement=admin><AdminDashboardPage/></RequireAccess> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("shops"))
                        view=move || view! { <RequireAccess requirement=admin><AdminShopsPage/></RequireAccess> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("categories"))
                        view=move || view! { <RequireAccess requirement=admin><AdminCategoriesPage/></RequireAccess> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("carousel"))
                        view=move || view! { <RequireAccess requirement=admin><AdminCarouselPage/></RequireAccess> }
                    />
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
