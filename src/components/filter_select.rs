//! Filter Select Component
//!
//! Sort-key selector for the comparison table.

use leptos::prelude::*;

use crate::models::FILTER_OPTIONS;

#[component]
pub fn FilterSelect(
    filter: ReadSignal<String>,
    set_filter: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <label class="filter-label">
            "Sort by "
            <select
                id="filter"
                prop:value=move || filter.get()
                on:change=move |ev| set_filter.set(event_target_value(&ev))
            >
                {FILTER_OPTIONS.iter().map(|(value, label)| view! {
                    <option value=*value>{*label}</option>
                }).collect_view()}
            </select>
        </label>
    }
}
