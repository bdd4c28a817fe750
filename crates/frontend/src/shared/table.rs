//! Table cell helpers shared by the entity views.

use crate::state::{DetailSlot, DetailStatus};
use contracts::domain::common::SimpleItem;
use leptos::prelude::*;
use std::fmt::Display;

/// Cell text; missing values render as an empty cell.
pub fn cell_text<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Rows of a nested `{ID, nombre, codigo}` record.
pub fn simple_item_rows(item: &SimpleItem) -> Vec<(&'static str, String)> {
    vec![
        ("ID", cell_text(item.id.as_ref())),
        ("nombre", cell_text(item.nombre.as_ref())),
        ("codigo", cell_text(item.codigo.as_ref())),
    ]
}

/// Texts used while a detail slot is not ready.
pub struct SlotMessages {
    pub loading: &'static str,
    pub not_found: &'static str,
    pub load_error: &'static str,
}

/// Message to show instead of data, or `None` when the slot is ready.
pub fn slot_message<T>(slot: &DetailSlot<T>, messages: &SlotMessages) -> Option<String> {
    match slot.status() {
        DetailStatus::Ready if slot.data().is_some() => None,
        DetailStatus::Loading => Some(messages.loading.to_string()),
        DetailStatus::NotFound => Some(messages.not_found.to_string()),
        DetailStatus::Error => Some(
            slot.error_message()
                .unwrap_or(messages.load_error)
                .to_string(),
        ),
        _ => Some(messages.load_error.to_string()),
    }
}

/// Single full-width row carrying a status message.
#[component]
pub fn MessageRow(colspan: usize, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <tr class="table__row">
            <td class="table__cell table__cell--message" colspan=colspan>{message}</td>
        </tr>
    }
}

/// Two-column field/value table.
#[component]
pub fn KeyValueTable(rows: Vec<(&'static str, String)>) -> impl IntoView {
    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">{"Campo"}</th>
                        <th class="table__header-cell">{"Valor"}</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|(label, value)| view! {
                        <tr class="table__row">
                            <td class="table__cell table__cell--label">{label}</td>
                            <td class="table__cell">{value}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// Either the key/value table or a message row.
#[component]
pub fn DetailBody(rows: Result<Vec<(&'static str, String)>, String>) -> impl IntoView {
    match rows {
        Ok(rows) => view! { <KeyValueTable rows=rows /> }.into_any(),
        Err(message) => view! {
            <div class="table">
                <table class="table__data">
                    <tbody>
                        <MessageRow colspan=2 message=message />
                    </tbody>
                </table>
            </div>
        }
        .into_any(),
    }
}
