use async_trait::async_trait;
use slotbook_core::errors::BookingResult;
use slotbook_core::models::{Slot, SlotKey};

use crate::operations::{
    AddSlotData, AvailableSlotsData, BookSlotData, BookVariables, MonthVariables, RemoveSlotData,
    SlotKeyVariables, BOOK_SLOT, CREATE_SLOT, GET_SLOTS, REMOVE_SLOT,
};
use crate::GraphQlClient;

/// The data-access seam between the views and the external API. One
/// outstanding call per operation, no retries, no caching.
#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Fetches every slot of one (year, month).
    async fn available_slots(&self, year: i32, month: u32) -> BookingResult<Vec<Slot>>;

    /// Creates an open slot. The API owns key uniqueness.
    async fn add_slot(&self, key: SlotKey) -> BookingResult<Slot>;

    /// Deletes a slot by its full key.
    async fn remove_slot(&self, key: SlotKey) -> BookingResult<Slot>;

    /// Books a slot for an identity number. The API owns the at-most-once
    /// booking decision.
    async fn book_slot(&self, key: SlotKey, dni: String) -> BookingResult<Slot>;
}

#[async_trait]
impl SlotRepository for GraphQlClient {
    async fn available_slots(&self, year: i32, month: u32) -> BookingResult<Vec<Slot>> {
        let data: AvailableSlotsData = self
            .post(GET_SLOTS, MonthVariables { year, month })
            .await?;
        Ok(data.available_slots)
    }

    async fn add_slot(&self, key: SlotKey) -> BookingResult<Slot> {
        let data: AddSlotData = self
            .post(CREATE_SLOT, SlotKeyVariables::from(key))
            .await?;
        Ok(data.add_slot)
    }

    async fn remove_slot(&self, key: SlotKey) -> BookingResult<Slot> {
        let data: RemoveSlotData = self
            .post(REMOVE_SLOT, SlotKeyVariables::from(key))
            .await?;
        Ok(data.remove_slot)
    }

    async fn book_slot(&self, key: SlotKey, dni: String) -> BookingResult<Slot> {
        let data: BookSlotData = self
            .post(
                BOOK_SLOT,
                BookVariables {
                    key: SlotKeyVariables::from(key),
                    dni,
                },
            )
            .await?;
        Ok(data.book_slot)
    }
}
