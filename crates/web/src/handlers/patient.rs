//! # Patient Portal Handlers
//!
//! Patients book an open slot by identity number. All validation happens
//! here before any network call: a malformed DNI or missing field renders
//! an alert and the mutation is never issued. The availability hint shown
//! next to the form reflects the last fetched month and can be stale; the
//! external API makes the authoritative booking decision.

use axum::extract::{Query, State};
use axum::response::Html;
use axum::Form;
use chrono::Datelike;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use slotbook_core::validate::{parse_date, parse_hour, validate_dni};

use crate::handlers::{fetch_month, key_for, Selection};
use crate::middleware::error_handling::AppError;
use crate::views::{self, Notice};
use crate::ApiState;

/// Optional selection carried on the page URL so the hint can be
/// recomputed for a chosen date and hour.
#[derive(Debug, Deserialize)]
pub struct SelectionQuery {
    pub date: Option<String>,
    pub hour: Option<String>,
}

/// The booking form as the browser submits it.
#[derive(Debug, Deserialize)]
pub struct BookSlotForm {
    #[serde(default)]
    pub dni: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub hour: String,
}

/// `GET /patient` — booking form, availability hint for the selected
/// hour, and the month's slot table.
pub async fn patient_page(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SelectionQuery>,
) -> Result<Html<String>, AppError> {
    let now = Selection::now();
    let date = query
        .date
        .as_deref()
        .and_then(|value| parse_date(value).ok())
        .unwrap_or(now.date);
    let hour = query
        .hour
        .as_deref()
        .and_then(|value| parse_hour(value).ok())
        .unwrap_or(now.hour);

    let view = fetch_month(&state, date.year(), date.month()).await?;
    let hour_available = view.hour_available(hour);

    Ok(views::patient_page(
        &view,
        "",
        &date.format("%Y-%m-%d").to_string(),
        &format!("{hour:02}:00"),
        hour_available,
        None,
    ))
}

/// `POST /patient/book` — book a slot.
///
/// On success the form resets: DNI cleared, date and hour back to the
/// current moment, confirmation shown.
pub async fn book_slot(
    State(state): State<Arc<ApiState>>,
    Form(form): Form<BookSlotForm>,
) -> Result<Html<String>, AppError> {
    let validated = validate_dni(&form.dni)
        .and_then(|()| parse_date(&form.date))
        .and_then(|date| Ok((date, parse_hour(&form.hour)?)));

    let (date, hour) = match validated {
        Ok(validated) => validated,
        Err(err) => {
            // Request never sent; re-render with the entered values.
            let now = Selection::now();
            let date = parse_date(&form.date).unwrap_or(now.date);
            let view = fetch_month(&state, date.year(), date.month()).await?;
            let hour_available = parse_hour(&form.hour)
                .map(|hour| view.hour_available(hour))
                .unwrap_or(false);
            return Ok(views::patient_page(
                &view,
                &form.dni,
                &form.date,
                &form.hour,
                hour_available,
                Some(&Notice::Error(err.to_string())),
            ));
        }
    };

    let key = key_for(date, hour);
    state.slots.book_slot(key, form.dni.clone()).await?;
    info!(%key, "slot booked");

    // Successful booking: reset the form to the current moment.
    let now = Selection::now();
    let view = fetch_month(&state, now.date.year(), now.date.month()).await?;
    let hour_available = view.hour_available(now.hour);

    Ok(views::patient_page(
        &view,
        "",
        &now.date_value(),
        &now.hour_value(),
        hour_available,
        Some(&Notice::Success("Appointment booked".to_string())),
    ))
}
