use std::error::Error;
use classbook_core::errors::{BookingError, BookingResult};

#[test]
fn test_booking_error_display() {
    let not_found = BookingError::NotFound("classroom does not exist".to_string());
    let invalid = BookingError::InvalidRequest("time slot already booked".to_string());
    let denied = BookingError::PermissionDenied("not the owner".to_string());
    let database = BookingError::Database(eyre::eyre!("Database connection failed"));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: classroom does not exist"
    );
    assert_eq!(
        invalid.to_string(),
        "Invalid request: time slot already booked"
    );
    assert_eq!(denied.to_string(), "Permission denied: not the owner");
    assert!(database.to_string().contains("Database error:"));
}

#[test]
fn test_booking_result() {
    let result: BookingResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: BookingResult<i32> = Err(BookingError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_eyre_report() {
    fn failing() -> BookingResult<()> {
        Err::<(), _>(eyre::eyre!("connection reset"))?;
        Ok(())
    }

    let err = failing().unwrap_err();
    assert!(matches!(err, BookingError::Database(_)));
    assert!(err.to_string().contains("connection reset"));
}

#[test]
fn test_database_error_keeps_source() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let err = BookingError::Database(eyre::Report::new(io_error));

    assert!(err.source().is_some());
}
