//! Course-enrollment frontend.
//!
//! Context-driven layering:
//! - `web::route` / `web::router`: route model and History-API engine
//! - `session`: persisted session store over localStorage
//! - `api`: typed client for the enrollment gateway
//! - `auth`: reactive auth state and the page-load guard
//! - `components`: UI layer

mod api;
mod auth;
mod components {
    mod course_list;
    pub mod dashboard;
    mod grade_table;
    mod grade_upload;
    mod icons;
    pub mod login;
}
mod error;
mod logging;
mod request;
mod session;

use crate::api::{API_BASE, AppApi};
use crate::auth::{AuthContext, init_auth};
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::request::FetchHttpClient;
use crate::session::{BrowserStorage, SessionStore};

use leptos::prelude::*;

// Light wrappers over the native browser APIs, instead of the gloo-*
// crates, to keep the WASM binary small.
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // One API client for the whole app, with the browser-backed session
    // store injected.
    let api = AppApi::new(
        API_BASE,
        FetchHttpClient,
        SessionStore::new(BrowserStorage),
    );

    let auth_ctx = AuthContext::new();
    init_auth(&auth_ctx, api.session());

    provide_context(api);
    provide_context(auth_ctx);

    // The router only sees this signal; it knows nothing about sessions.
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
