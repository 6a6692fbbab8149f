//! Comparison Table Component
//!
//! Filterable, editable price comparison. Every user action posts to the
//! backend and then reloads the rows for the current filter.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ComparisonRow, FilterSelect, StatusLine};
use crate::config::use_config;
use crate::context::{watch_loads, CompareContext, LoadGeneration, LoadOutcome, Status};
use crate::models::{ComparisonItem, DEFAULT_FILTER};
use crate::table::{best_price_text, collect_updates, COMPARISON_HEADERS};

#[component]
pub fn ComparisonTable() -> impl IntoView {
    let config = use_config();

    // State
    let (filter, set_filter) = signal(DEFAULT_FILTER.to_string());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (status, set_status) = signal(Status::Idle);
    let (items, set_items) = signal(Vec::<ComparisonItem>::new());
    let (loading, set_loading) = signal(false);
    let drafts = RwSignal::new(Vec::<String>::new());
    let generation = StoredValue::new(LoadGeneration::default());

    let ctx = CompareContext::new(filter, set_reload_trigger, (status, set_status));
    provide_context(ctx);

    // Load rows when filter or trigger changes
    let load_config = config.clone();
    watch_loads(filter, reload_trigger, generation, move |filter, ticket| {
        let config = load_config.clone();
        web_sys::console::log_1(&format!("[COMPARE] Loading filter={}, ticket={}", filter, ticket).into());
        set_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_comparison(&config, &filter).await;

            let outcome = generation
                .try_with_value(|g| g.settle(ticket, result))
                .unwrap_or(LoadOutcome::Stale);
            if !matches!(outcome, LoadOutcome::Stale) {
                set_loading.set(false);
            }

            match outcome {
                LoadOutcome::Apply(loaded) => {
                    web_sys::console::log_1(&format!("[COMPARE] Fetched {} rows", loaded.len()).into());
                    drafts.set(loaded.iter().map(|item| best_price_text(item.best_price)).collect());
                    set_items.set(loaded);
                }
                LoadOutcome::Fail(e) => {
                    web_sys::console::error_1(&format!("[COMPARE] Error: {}", e).into());
                    ctx.fail(format!("Loading failed: {}", e));
                }
                LoadOutcome::Stale => {
                    web_sys::console::log_1(&format!("[COMPARE] Dropping stale response for ticket {}", ticket).into());
                }
            }
        });
    });

    let on_save_all = move |_| {
        let updates = items.with_untracked(|items| {
            drafts.with_untracked(|drafts| {
                collect_updates(items.iter().enumerate().map(|(i, item)| {
                    (
                        item.name.as_str(),
                        item.brand.as_str(),
                        drafts.get(i).map(String::as_str).unwrap_or(""),
                    )
                }))
            })
        });
        if updates.is_empty() {
            web_sys::console::log_1(&"[COMPARE] Save all: nothing to send".into());
            return;
        }

        let filter = filter.get_untracked();
        let config = config.clone();
        ctx.clear_status();
        spawn_local(async move {
            web_sys::console::log_1(&format!("[COMPARE] Save all: {} rows", updates.len()).into());
            match api::save_all(&config, &filter, &updates).await {
                Ok(_) => ctx.flash_saved(format!("Saved {} rows", updates.len())),
                Err(e) => {
                    web_sys::console::error_1(&format!("[COMPARE] Save all failed: {}", e).into());
                    ctx.fail(format!("Saving all rows failed: {}", e));
                }
            }
            ctx.reload();
        });
    };

    view! {
        <section class="comparison-page">
            <h1>"Price Comparison"</h1>

            <div class="toolbar">
                <FilterSelect filter=filter set_filter=set_filter />
                <button id="save-all-btn" on:click=on_save_all>"Save All"</button>
            </div>

            <StatusLine loading=loading />

            <table class="data-table">
                <thead id="table-head">
                    <tr>
                        {COMPARISON_HEADERS.iter().map(|label| view! { <th>{*label}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody id="table-body">
                    // Rebuilt from scratch on every load
                    {move || items.get().into_iter().enumerate().map(|(index, item)| view! {
                        <ComparisonRow index=index item=item drafts=drafts />
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}
