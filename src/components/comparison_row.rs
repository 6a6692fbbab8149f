//! Comparison Row Component
//!
//! One editable row: scraped values, a best-price input and save/reset buttons.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::use_config;
use crate::context::use_compare_context;
use crate::models::{BestPriceUpdate, ComparisonItem};
use crate::table::{best_price_text, cell_text, input_id, parse_best_price, text_or_blank};

/// Row `index` reads and writes its input text at `drafts[index]`
#[component]
pub fn ComparisonRow(
    index: usize,
    item: ComparisonItem,
    drafts: RwSignal<Vec<String>>,
) -> impl IntoView {
    let ctx = use_compare_context();
    let config = use_config();
    let reset_config = config.clone();

    let name = item.name.clone();
    let brand = item.brand.clone();
    let reset_name = name.clone();
    let reset_brand = brand.clone();

    let on_save = move |_| {
        let input = drafts.with_untracked(|d| d.get(index).cloned().unwrap_or_default());
        let update = BestPriceUpdate {
            name: name.clone(),
            brand: brand.clone(),
            best_price: parse_best_price(&input),
        };
        let filter = ctx.filter.get_untracked();
        let config = config.clone();
        ctx.clear_status();
        spawn_local(async move {
            web_sys::console::log_1(&format!("[COMPARE] Save {} ({}) -> {:?}", update.name, update.brand, update.best_price).into());
            match api::save_best_price(&config, &filter, &update).await {
                Ok(_) => ctx.flash_saved(format!("Saved {} ({})", update.name, update.brand)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[COMPARE] Save failed: {}", e).into());
                    ctx.fail(format!("Saving {} ({}) failed: {}", update.name, update.brand, e));
                }
            }
            ctx.reload();
        });
    };

    let on_reset = move |_| {
        let name = reset_name.clone();
        let brand = reset_brand.clone();
        let config = reset_config.clone();
        ctx.clear_status();
        spawn_local(async move {
            web_sys::console::log_1(&format!("[COMPARE] Reset {} ({})", name, brand).into());
            match api::reset_entry(&config, &name, &brand).await {
                Ok(()) => ctx.flash_saved(format!("Reset {} ({})", name, brand)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[COMPARE] Reset failed: {}", e).into());
                    ctx.fail(format!("Resetting {} ({}) failed: {}", name, brand, e));
                }
            }
            ctx.reload();
        });
    };

    view! {
        <tr>
            <td>{item.name.clone()}</td>
            <td>{item.brand.clone()}</td>
            <td>{text_or_blank(item.source.as_ref())}</td>
            <td>{text_or_blank(item.price.as_ref())}</td>
            <td>{text_or_blank(item.discount.as_ref())}</td>
            <td>
                <input
                    type="number"
                    id=input_id(&item.name, &item.brand)
                    value=best_price_text(item.best_price)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        drafts.update(|d| {
                            if let Some(slot) = d.get_mut(index) {
                                *slot = value;
                            }
                        });
                    }
                />
            </td>
            <td>{cell_text(item.best_offer.as_ref())}</td>
            <td>
                <button class="save-btn" on:click=on_save>"Save"</button>
                <button class="reset-btn" on:click=on_reset>"Reset"</button>
            </td>
        </tr>
    }
}
