use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Rejected by the appointment API: {0}")]
    Rejected(String),

    #[error("Appointment API unavailable: {0}")]
    Api(#[from] eyre::Report),
}

pub type BookingResult<T> = Result<T, BookingError>;
