/// Health and version endpoints
pub mod health;
/// Landing page
pub mod home;
/// Patient portal
pub mod patient;
/// Staff portal
pub mod staff;
