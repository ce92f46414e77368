use async_trait::async_trait;
use mockall::mock;
use slotbook_core::errors::BookingResult;
use slotbook_core::models::{Slot, SlotKey};

use crate::repository::SlotRepository;

// Mock repository for testing the web layer without the external API.
mock! {
    pub SlotRepo {}

    #[async_trait]
    impl SlotRepository for SlotRepo {
        async fn available_slots(&self, year: i32, month: u32) -> BookingResult<Vec<Slot>>;
        async fn add_slot(&self, key: SlotKey) -> BookingResult<Slot>;
        async fn remove_slot(&self, key: SlotKey) -> BookingResult<Slot>;
        async fn book_slot(&self, key: SlotKey, dni: String) -> BookingResult<Slot>;
    }
}
