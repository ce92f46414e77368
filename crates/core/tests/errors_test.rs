use slotbook_core::errors::{BookingError, BookingResult};

#[test]
fn test_booking_error_display() {
    let validation = BookingError::Validation("DNI must be 8 digits".to_string());
    let conflict = BookingError::Conflict("slot already exists".to_string());
    let rejected = BookingError::Rejected("slot already booked".to_string());
    let api = BookingError::Api(eyre::eyre!("connection refused"));

    assert_eq!(
        validation.to_string(),
        "Validation error: DNI must be 8 digits"
    );
    assert_eq!(conflict.to_string(), "Conflict: slot already exists");
    assert_eq!(
        rejected.to_string(),
        "Rejected by the appointment API: slot already booked"
    );
    assert!(api.to_string().contains("Appointment API unavailable:"));
}

#[test]
fn test_from_eyre_report() {
    fn fails() -> BookingResult<()> {
        Err(eyre::eyre!("timed out"))?;
        Ok(())
    }

    assert!(matches!(fails(), Err(BookingError::Api(_))));
}

#[test]
fn test_booking_result() {
    let ok: BookingResult<u32> = Ok(42);
    assert_eq!(ok.unwrap(), 42);

    let err: BookingResult<u32> = Err(BookingError::Conflict("duplicate".to_string()));
    assert!(err.is_err());
}
