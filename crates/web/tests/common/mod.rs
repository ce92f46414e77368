use std::sync::Arc;

use slotbook_core::models::{Slot, SlotKey};
use slotbook_gql::mock::MockSlotRepo;
use slotbook_web::ApiState;

pub fn state_with(mock: MockSlotRepo) -> Arc<ApiState> {
    Arc::new(ApiState {
        slots: Arc::new(mock),
    })
}

pub fn open_slot(day: u32, month: u32, year: i32, hour: u32) -> Slot {
    Slot {
        day,
        month,
        year,
        hour,
        available: true,
        dni: None,
    }
}

pub fn key(day: u32, month: u32, year: i32, hour: u32) -> SlotKey {
    SlotKey {
        day,
        month,
        year,
        hour,
    }
}
