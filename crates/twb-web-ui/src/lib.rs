//! Web manager front-end for the twb bot
//!
//! A Leptos single-page app compiled to WebAssembly:
//! - a navigation bar and router shell
//! - a config page showing the bot's config as fetched from its HTTP API
//!
//! The API base URL comes from [`AppConfig`] and reaches components through
//! context, together with the [`ApiClient`] built from it.

use leptos::*;
use leptos_router::{Route, Router, Routes};
use tracing::{info, warn};

mod api;
mod components;
mod config;
mod error;
mod hooks;
mod pages;
mod routes;
mod state;

pub use api::*;
pub use components::*;
pub use config::*;
pub use error::{ConfigError, FetchError};
pub use hooks::*;
pub use pages::*;
pub use routes::*;
pub use state::*;

/// Main application component
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let client = ApiClient::new(&config);
    provide_context(config);
    provide_context(client);

    view! {
        <Router>
            <Routes>
                <Route path=SHELL.segment() view=Shell>
                    <Route path="" view=HomePage/>
                    <Route path=CONFIG.segment() view=ConfigPage/>
                </Route>
            </Routes>
        </Router>
    }
}

/// Application entry point for WASM
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let (config, rejected) = AppConfig::load();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config.level())
            .build(),
    );
    for err in rejected {
        warn!(error = %err, "Ignoring config layer");
    }
    info!(api = %config.api_base_url, "Starting twb web manager");

    mount_to_body(move || view! { <App config=config/> });
}
