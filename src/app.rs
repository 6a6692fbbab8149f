//! Pharmacy Comparison Frontend App
//!
//! Picks the page controller named by the hosting page.

use leptos::prelude::*;

use crate::api::RecordSource;
use crate::components::{ComparisonTable, RecordTable};
use crate::config::{AppConfig, View};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let selected = config.view;
    web_sys::console::log_1(&format!("[APP] Mounting {:?} view, api base {}", selected, config.api_base).into());

    // Provide config to all children
    provide_context(config);

    view! {
        <main class="main-content">
            {match selected {
                View::Apollo => view! { <RecordTable source=RecordSource::Apollo /> }.into_any(),
                View::Pharmeasy => view! { <RecordTable source=RecordSource::Pharmeasy /> }.into_any(),
                View::Comparison => view! { <ComparisonTable /> }.into_any(),
            }}
        </main>
    }
}
