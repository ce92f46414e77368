pub mod month_view;
pub mod slot;

pub use month_view::MonthView;
pub use slot::{Slot, SlotKey, CLOSING_HOUR, OPENING_HOUR};
