use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};
use crate::models::{classroom::Classroom, user::User};

/// Display name used when a reservation's user can no longer be resolved ("unknown").
pub const UNKNOWN_USER_NAME: &str = "알 수 없음";

/// A persisted reservation.
///
/// The classroom and user references are resolved by the store on read and
/// may be missing if the referenced row has since disappeared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i32,
    pub classroom: Option<Classroom>,
    pub user: Option<User>,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
}

impl Reservation {
    pub fn classroom_id(&self) -> Option<i32> {
        self.classroom.as_ref().map(|c| c.id)
    }

    pub fn user_id(&self) -> Option<i32> {
        self.user.as_ref().map(|u| u.id)
    }
}

/// A validated reservation waiting for the store to assign it an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub classroom: Classroom,
    pub user: User,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub classroom_id: i32,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDto {
    pub reservation_id: i32,
    pub classroom_id: Option<i32>,
    pub user_id: Option<i32>,
    pub user_name_kor: String,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
}

impl From<Reservation> for ReservationDto {
    fn from(entity: Reservation) -> Self {
        let classroom_id = entity.classroom_id();
        let (user_id, user_name_kor) = match entity.user {
            Some(user) => (Some(user.id), user.name_kor),
            None => (None, UNKNOWN_USER_NAME.to_string()),
        };

        ReservationDto {
            reservation_id: entity.id,
            classroom_id,
            user_id,
            user_name_kor,
            start_at: entity.start_at,
            end_at: entity.end_at,
        }
    }
}

/// Whether `[s1, e1)` and `[s2, e2)` share any instant.
pub fn overlaps(
    s1: NaiveDateTime,
    e1: NaiveDateTime,
    s2: NaiveDateTime,
    e2: NaiveDateTime,
) -> bool {
    s1 < e2 && s2 < e1
}

/// Half-open window from midnight of `date` to midnight of the next day.
///
/// Fails with `InvalidRequest` for the last representable date, which has no next midnight.
pub fn day_window(date: NaiveDate) -> BookingResult<(NaiveDateTime, NaiveDateTime)> {
    let start = date.and_time(NaiveTime::MIN);
    let next = start
        .checked_add_signed(Duration::days(1))
        .ok_or_else(|| BookingError::InvalidRequest(format!("date out of range: {}", date)))?;
    Ok((start, next))
}

/// Closed span from midnight of `date` to the last representable instant of that day.
pub fn day_span(date: NaiveDate) -> BookingResult<(NaiveDateTime, NaiveDateTime)> {
    let (start, next) = day_window(date)?;
    Ok((start, next - Duration::nanoseconds(1)))
}
