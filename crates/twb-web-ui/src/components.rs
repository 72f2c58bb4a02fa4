//! Reusable UI Components
//!
//! Chrome shared by every page of the web manager.

use leptos::*;
use leptos_router::*;

use crate::routes::{nav_routes, SHELL};

/// Navigation bar. Static: no props, no state, no network access.
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-brand">
                <A href=SHELL.path class="brand-link">"TWB Manager"</A>
            </div>
            <nav class="header-nav">
                {nav_routes()
                    .map(|route| view! {
                        <A href=route.path class="nav-link">{route.title}</A>
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}

/// Application shell: navigation bar above the matched nested page.
///
/// The bar lives outside the outlet, so navigating between nested routes
/// leaves it mounted.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="app-container">
            <Outlet/>
        </main>
    }
}

/// Loading placeholder
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-spinner">
            <div class="spinner"></div>
            <span>"Loading..."</span>
        </div>
    }
}

/// Error display
#[component]
pub fn ErrorDisplay(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-display" role="alert">
            <span class="error-icon">"⚠️"</span>
            <span class="error-message">{message}</span>
        </div>
    }
}
