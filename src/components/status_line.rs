//! Status Line Component

use leptos::prelude::*;

use crate::context::use_compare_context;

/// Outcome of the last user action, plus a loading hint
#[component]
pub fn StatusLine(loading: ReadSignal<bool>) -> impl IntoView {
    let ctx = use_compare_context();

    view! {
        <div class="status-row">
            <Show when=move || loading.get()>
                <span class="status loading">"Loading…"</span>
            </Show>
            <span class=move || ctx.status.get().class()>
                {move || ctx.status.get().text()}
            </span>
        </div>
    }
}
