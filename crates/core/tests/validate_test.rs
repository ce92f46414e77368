use rstest::rstest;
use slotbook_core::errors::BookingError;
use slotbook_core::validate::{parse_date, parse_hour, validate_dni, validate_hour};

#[rstest]
#[case("12345678")]
#[case("00000000")]
fn test_valid_dni(#[case] dni: &str) {
    assert!(validate_dni(dni).is_ok());
}

#[rstest]
#[case("")] // empty
#[case("1234567")] // 7 digits
#[case("123456789")] // 9 digits
#[case("1234567a")] // non-numeric tail
#[case("a2345678")] // non-numeric head
#[case("1234 678")] // embedded space
#[case("-1234567")] // sign is not a digit
fn test_invalid_dni(#[case] dni: &str) {
    match validate_dni(dni) {
        Err(BookingError::Validation(_)) => {}
        other => panic!("Expected validation error, got: {:?}", other),
    }
}

#[rstest]
#[case(9)]
#[case(15)]
#[case(21)]
fn test_hour_within_clinic_hours(#[case] hour: u32) {
    assert!(validate_hour(hour).is_ok());
}

#[rstest]
#[case(0)]
#[case(8)]
#[case(22)]
fn test_hour_outside_clinic_hours(#[case] hour: u32) {
    assert!(matches!(
        validate_hour(hour),
        Err(BookingError::Validation(_))
    ));
}

#[test]
fn test_parse_date_valid() {
    let date = parse_date("2024-06-10").expect("Failed to parse date");
    assert_eq!(date.to_string(), "2024-06-10");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("2024-13-01")] // no 13th month
#[case("2024-02-30")] // not a real day
#[case("10/06/2024")] // wrong shape
fn test_parse_date_invalid(#[case] input: &str) {
    assert!(matches!(
        parse_date(input),
        Err(BookingError::Validation(_))
    ));
}

#[rstest]
#[case("10:00", 10)]
#[case("09:00", 9)]
#[case("21:00", 21)]
#[case("12", 12)]
fn test_parse_hour_valid(#[case] input: &str, #[case] expected: u32) {
    assert_eq!(parse_hour(input).expect("Failed to parse hour"), expected);
}

#[rstest]
#[case("")]
#[case("notime")]
#[case("8:00")] // before opening
#[case("22:00")] // after closing
fn test_parse_hour_invalid(#[case] input: &str) {
    assert!(matches!(
        parse_hour(input),
        Err(BookingError::Validation(_))
    ));
}
