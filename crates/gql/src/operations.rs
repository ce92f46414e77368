//! The four operations the external appointment API exposes, with the
//! selection sets the frontend relies on.

use serde::{Deserialize, Serialize};
use slotbook_core::models::{Slot, SlotKey};

pub const GET_SLOTS: &str = r#"
query GetSlots($year: Int!, $month: Int!) {
    availableSlots(year: $year, month: $month) {
        day
        month
        year
        hour
        available
        dni
    }
}
"#;

pub const CREATE_SLOT: &str = r#"
mutation CreateSlot($day: Int!, $month: Int!, $year: Int!, $hour: Int!) {
    addSlot(day: $day, month: $month, year: $year, hour: $hour) {
        day
        month
        year
        hour
        available
    }
}
"#;

pub const REMOVE_SLOT: &str = r#"
mutation RemoveSlot($day: Int!, $month: Int!, $year: Int!, $hour: Int!) {
    removeSlot(day: $day, month: $month, year: $year, hour: $hour) {
        day
        month
        year
        hour
        available
    }
}
"#;

pub const BOOK_SLOT: &str = r#"
mutation BookSlot($day: Int!, $month: Int!, $year: Int!, $hour: Int!, $dni: String!) {
    bookSlot(day: $day, month: $month, year: $year, hour: $hour, dni: $dni) {
        day
        month
        year
        hour
        available
        dni
    }
}
"#;

#[derive(Debug, Clone, Serialize)]
pub struct MonthVariables {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotKeyVariables {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub hour: u32,
}

impl From<SlotKey> for SlotKeyVariables {
    fn from(key: SlotKey) -> Self {
        Self {
            day: key.day,
            month: key.month,
            year: key.year,
            hour: key.hour,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BookVariables {
    #[serde(flatten)]
    pub key: SlotKeyVariables,
    pub dni: String,
}

#[derive(Debug, Deserialize)]
pub struct AvailableSlotsData {
    #[serde(rename = "availableSlots")]
    pub available_slots: Vec<Slot>,
}

#[derive(Debug, Deserialize)]
pub struct AddSlotData {
    #[serde(rename = "addSlot")]
    pub add_slot: Slot,
}

#[derive(Debug, Deserialize)]
pub struct RemoveSlotData {
    #[serde(rename = "removeSlot")]
    pub remove_slot: Slot,
}

#[derive(Debug, Deserialize)]
pub struct BookSlotData {
    #[serde(rename = "bookSlot")]
    pub book_slot: Slot,
}
