/// Landing page handler
pub mod home;
/// Patient portal handlers
pub mod patient;
/// Staff portal handlers
pub mod staff;

use chrono::{Datelike, Local, NaiveDate, Timelike};
use slotbook_core::models::{MonthView, SlotKey};

use crate::middleware::error_handling::AppError;
use crate::ApiState;

/// The date/hour a form is currently pointing at.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Selection {
    pub date: NaiveDate,
    pub hour: u32,
}

impl Selection {
    /// The current moment, the default for fresh and reset forms.
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            date: now.date_naive(),
            hour: now.hour(),
        }
    }

    pub fn date_value(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn hour_value(&self) -> String {
        format!("{:02}:00", self.hour)
    }
}

pub(crate) fn key_for(date: NaiveDate, hour: u32) -> SlotKey {
    SlotKey {
        day: date.day(),
        month: date.month(),
        year: date.year(),
        hour,
    }
}

/// One awaited query for a month's slots, wrapped into the advisory view.
/// This is the only consistency mechanism the frontend has: every check
/// and every table render goes through a fresh call to this.
pub(crate) async fn fetch_month(
    state: &ApiState,
    year: i32,
    month: u32,
) -> Result<MonthView, AppError> {
    let slots = state.slots.available_slots(year, month).await?;
    Ok(MonthView::new(year, month, slots))
}
