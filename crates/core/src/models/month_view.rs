use crate::models::{Slot, SlotKey};

/// The slots fetched for one (year, month), as last seen by a view.
///
/// Every check on this type is advisory: it reflects the moment of the
/// last fetch, not the current state of the external API. The API remains
/// the authority on uniqueness and availability; the view only uses this
/// to refuse obviously stale submissions and to hint availability.
#[derive(Debug, Clone)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    slots: Vec<Slot>,
}

impl MonthView {
    /// Builds the view from a fetch result, keeping only slots that belong
    /// to the requested month.
    pub fn new(year: i32, month: u32, fetched: Vec<Slot>) -> Self {
        let slots = fetched
            .into_iter()
            .filter(|slot| slot.year == year && slot.month == month)
            .collect();
        Self { year, month, slots }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True if a slot with this exact key was present in the last fetch.
    /// Used by the staff view to refuse duplicate creation without calling
    /// the API.
    pub fn contains(&self, key: &SlotKey) -> bool {
        self.slots.iter().any(|slot| slot.key() == *key)
    }

    /// True if any slot at this hour was still available in the last
    /// fetch. The patient view shows this as a hint before booking.
    pub fn hour_available(&self, hour: u32) -> bool {
        self.slots
            .iter()
            .any(|slot| slot.hour == hour && slot.available)
    }

    /// Slots ordered by (day, hour) for table rendering.
    pub fn sorted(&self) -> Vec<&Slot> {
        let mut slots: Vec<&Slot> = self.slots.iter().collect();
        slots.sort_by_key(|slot| (slot.day, slot.hour));
        slots
    }
}
