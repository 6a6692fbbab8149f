//! Record Table Component
//!
//! Generic table over a raw scraped source. Columns come from the keys of
//! the first record.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RecordSource};
use crate::config::use_config;
use crate::models::Record;
use crate::table::{derive_columns, record_cells};

#[component]
pub fn RecordTable(source: RecordSource) -> impl IntoView {
    let config = use_config();
    let (records, set_records) = signal(Vec::<Record>::new());
    let (error, set_error) = signal(None::<String>);

    // Load once on mount
    Effect::new(move |_| {
        let config = config.clone();
        spawn_local(async move {
            match api::list_records(&config, source).await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("{} Fetched {} records", source.tag(), loaded.len()).into());
                    set_records.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("{} Error: {}", source.tag(), e).into());
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let columns = Memo::new(move |_| records.with(|rows| derive_columns(rows)));

    view! {
        <section class="records-page">
            <h1>{source.title()}</h1>

            <Show when=move || error.get().is_some()>
                <p class="status error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <table class="data-table">
                <thead id="table-head">
                    <Show when=move || !columns.get().is_empty()>
                        <tr>
                            {move || columns.get().into_iter().map(|key| view! {
                                <th>{key}</th>
                            }).collect_view()}
                        </tr>
                    </Show>
                </thead>
                <tbody id="table-body">
                    {move || {
                        let columns = columns.get();
                        records.get().iter().map(|record| {
                            let cells = record_cells(record, &columns);
                            view! {
                                <tr>
                                    {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                </tr>
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </section>
    }
}
