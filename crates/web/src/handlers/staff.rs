//! # Staff Portal Handlers
//!
//! Staff create open slots and delete existing ones. The duplicate check
//! before a create is a best-effort freshness check against an awaited
//! fetch of the affected month; the external API remains the authority on
//! key uniqueness, since two staff sessions can race on the same key.
//! After every successful mutation the month is re-fetched before the page
//! is rendered, so the change appears immediately.

use axum::extract::{Query, State};
use axum::response::Html;
use axum::Form;
use chrono::Datelike;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use slotbook_core::validate::{parse_date, parse_hour};

use crate::handlers::{fetch_month, key_for, Selection};
use crate::middleware::error_handling::AppError;
use crate::views::{self, Notice};
use crate::ApiState;

/// Which month the staff table shows. Defaults to the current month.
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// The create form as the browser submits it.
#[derive(Debug, Deserialize)]
pub struct CreateSlotForm {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub hour: String,
}

/// The key of a fetched row, echoed back through hidden fields.
#[derive(Debug, Deserialize)]
pub struct RemoveSlotForm {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub hour: u32,
}

/// `GET /staff` — create form plus the visible month's slot table.
pub async fn staff_page(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<MonthQuery>,
) -> Result<Html<String>, AppError> {
    let now = Selection::now();
    let year = query.year.unwrap_or_else(|| now.date.year());
    let month = query.month.unwrap_or_else(|| now.date.month());

    let view = fetch_month(&state, year, month).await?;
    Ok(views::staff_page(
        &view,
        &now.date_value(),
        &now.hour_value(),
        None,
    ))
}

/// `POST /staff/slots` — create a slot.
///
/// A slot whose key is already present in a fresh fetch of the month is
/// refused with a conflict notice and no mutation is issued.
pub async fn create_slot(
    State(state): State<Arc<ApiState>>,
    Form(form): Form<CreateSlotForm>,
) -> Result<Html<String>, AppError> {
    let parsed = parse_date(&form.date).and_then(|date| Ok((date, parse_hour(&form.hour)?)));
    let (date, hour) = match parsed {
        Ok(parsed) => parsed,
        Err(err) => {
            let now = Selection::now();
            let view = fetch_month(&state, now.date.year(), now.date.month()).await?;
            return Ok(views::staff_page(
                &view,
                &form.date,
                &form.hour,
                Some(&Notice::Error(err.to_string())),
            ));
        }
    };

    let key = key_for(date, hour);

    let view = fetch_month(&state, key.year, key.month).await?;
    if view.contains(&key) {
        return Ok(views::staff_page(
            &view,
            &form.date,
            &form.hour,
            Some(&Notice::Error(format!("A slot for {key} already exists"))),
        ));
    }

    state.slots.add_slot(key).await?;
    info!(%key, "slot created");

    let view = fetch_month(&state, key.year, key.month).await?;
    Ok(views::staff_page(
        &view,
        &form.date,
        &form.hour,
        Some(&Notice::Success(format!("Appointment created for {key}"))),
    ))
}

/// `POST /staff/slots/remove` — delete a slot by its full key. No
/// confirmation step.
pub async fn remove_slot(
    State(state): State<Arc<ApiState>>,
    Form(form): Form<RemoveSlotForm>,
) -> Result<Html<String>, AppError> {
    let key = slotbook_core::models::SlotKey {
        day: form.day,
        month: form.month,
        year: form.year,
        hour: form.hour,
    };

    state.slots.remove_slot(key).await?;
    info!(%key, "slot removed");

    let view = fetch_month(&state, key.year, key.month).await?;
    let now = Selection::now();
    Ok(views::staff_page(
        &view,
        &now.date_value(),
        &now.hour_value(),
        Some(&Notice::Success(format!("Appointment {key} deleted"))),
    ))
}
