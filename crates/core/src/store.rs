//! Collaborators the scheduler reads from and writes through.
//!
//! Every method reports infrastructure failures as
//! [`BookingError::Database`](crate::errors::BookingError::Database). A store may
//! also surface [`BookingError::InvalidRequest`](crate::errors::BookingError::InvalidRequest)
//! from `save` when its own constraints reject a booking that raced past the
//! scheduler's checks.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use mockall::automock;

use crate::errors::BookingResult;
use crate::models::{Classroom, NewReservation, Reservation, User};

#[automock]
#[async_trait]
pub trait ClassroomDirectory: Send + Sync {
    async fn find_classroom(&self, id: i32) -> BookingResult<Option<Classroom>>;
}

#[automock]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_user(&self, id: i32) -> BookingResult<Option<User>>;
}

#[automock]
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Reservations whose start lies in `[start, end]`.
    async fn find_by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> BookingResult<Vec<Reservation>>;

    /// Reservations held by `user_id` whose start lies in `[start, end)`.
    async fn find_by_user_and_date(
        &self,
        user_id: i32,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> BookingResult<Vec<Reservation>>;

    /// Reservations on `classroom_id` overlapping `[start, end)`.
    async fn find_conflicting_reservations(
        &self,
        classroom_id: i32,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> BookingResult<Vec<Reservation>>;

    async fn find_by_id(&self, id: i32) -> BookingResult<Option<Reservation>>;

    async fn save(&self, reservation: NewReservation) -> BookingResult<Reservation>;

    async fn delete(&self, reservation: Reservation) -> BookingResult<()>;
}
