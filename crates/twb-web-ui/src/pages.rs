//! Page Components

use leptos::*;

use crate::components::*;
use crate::hooks::use_get;
use crate::routes::CONFIG;
use crate::state::BodyContent;

/// API path the config page reads
pub const CONFIG_API_PATH: &str = "config";

/// Index page under the shell at `/`
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"TWB Manager"</h1>
            <p>"Pick a page from the navigation bar."</p>
        </div>
    }
}

/// Shows the bot's current config as JSON text
#[component]
pub fn ConfigPage() -> impl IntoView {
    let config = use_get(CONFIG_API_PATH);

    view! {
        <div class="config-page">
            <h1>{CONFIG.title}</h1>
            {move || match config.body() {
                BodyContent::Loading => view! { <LoadingSpinner/> }.into_view(),
                BodyContent::Payload(text) => view! {
                    <p class="config-payload">{text}</p>
                }.into_view(),
                BodyContent::Error(message) => view! {
                    <ErrorDisplay message=message/>
                }.into_view(),
            }}
        </div>
    }
}
