use std::fmt;

use serde::{Deserialize, Serialize};

/// First bookable hour of the clinic day.
pub const OPENING_HOUR: u32 = 9;
/// Last bookable hour of the clinic day.
pub const CLOSING_HOUR: u32 = 21;

/// An appointment slot as the external API sends it. `dni` is null until
/// a patient books the slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub hour: u32,
    pub available: bool,
    #[serde(default)]
    pub dni: Option<String>,
}

impl Slot {
    pub fn key(&self) -> SlotKey {
        SlotKey {
            day: self.day,
            month: self.month,
            year: self.year,
            hour: self.hour,
        }
    }
}

/// Identity of a slot. At most one slot exists per key; the external API
/// owns that invariant, this type only names the tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub hour: u32,
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{} at {}:00",
            self.day, self.month, self.year, self.hour
        )
    }
}
