//! Domain types shared by the slotbook frontend: the appointment slot
//! model, the advisory view of the last fetched month, form validation,
//! and the error taxonomy.

pub mod errors;
pub mod models;
pub mod validate;
