//! PostgreSQL implementation of the scheduler's collaborators.
//!
//! Store-level constraints back up the scheduler's checks when two bookings
//! race: the exclusion constraint on overlapping slots and the unique index on
//! (user, day) both surface as [`BookingError::InvalidRequest`].

use async_trait::async_trait;
use chrono::NaiveDateTime;
use classbook_core::errors::{BookingError, BookingResult};
use classbook_core::models::{Classroom, NewReservation, Reservation, User};
use classbook_core::store::{ClassroomDirectory, ReservationStore, UserDirectory};

use crate::models::DbReservation;
use crate::repositories::{classroom, reservation, user};
use crate::DbPool;

/// SQLSTATE raised by an exclusion constraint.
const EXCLUSION_VIOLATION: &str = "23P01";
/// SQLSTATE raised by a unique index.
const UNIQUE_VIOLATION: &str = "23505";

/// Exclusion constraint on overlapping slots, declared in [`crate::schema`].
pub const OVERLAP_CONSTRAINT: &str = "no_overlapping_reservations";
/// Unique index on (user, day), declared in [`crate::schema`].
pub const USER_DAY_CONSTRAINT: &str = "uq_reservations_user_day";

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Message for a booking-rule violation, if `code` and `constraint` identify one.
///
/// Violations of any other constraint are left to surface as database errors.
pub fn constraint_violation_message(code: &str, constraint: Option<&str>) -> Option<&'static str> {
    match (code, constraint) {
        (EXCLUSION_VIOLATION, Some(OVERLAP_CONSTRAINT)) => Some("time slot already booked"),
        (UNIQUE_VIOLATION, Some(USER_DAY_CONSTRAINT)) => Some("at most one reservation per day"),
        _ => None,
    }
}

fn map_write_error(err: eyre::Report) -> BookingError {
    let violation = err
        .downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .and_then(|db| {
            let code = db.code()?;
            constraint_violation_message(&code, db.constraint())
        });

    match violation {
        Some(message) => {
            tracing::debug!("Reservation rejected by store constraint: {}", message);
            BookingError::InvalidRequest(message.to_string())
        }
        None => BookingError::Database(err),
    }
}

fn into_reservations(rows: Vec<DbReservation>) -> BookingResult<Vec<Reservation>> {
    rows.into_iter().map(Reservation::try_from).collect()
}

#[async_trait]
impl ClassroomDirectory for PgStore {
    async fn find_classroom(&self, id: i32) -> BookingResult<Option<Classroom>> {
        classroom::get_classroom_by_id(&self.pool, id)
            .await?
            .map(Classroom::try_from)
            .transpose()
    }
}

#[async_trait]
impl UserDirectory for PgStore {
    async fn find_user(&self, id: i32) -> BookingResult<Option<User>> {
        let user = user::get_user_by_id(&self.pool, id).await?;
        Ok(user.map(User::from))
    }
}

#[async_trait]
impl ReservationStore for PgStore {
    async fn find_by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> BookingResult<Vec<Reservation>> {
        into_reservations(reservation::find_by_date_range(&self.pool, start, end).await?)
    }

    async fn find_by_user_and_date(
        &self,
        user_id: i32,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> BookingResult<Vec<Reservation>> {
        into_reservations(
            reservation::find_by_user_and_date(&self.pool, user_id, start, end).await?,
        )
    }

    async fn find_conflicting_reservations(
        &self,
        classroom_id: i32,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> BookingResult<Vec<Reservation>> {
        into_reservations(
            reservation::find_conflicting_reservations(&self.pool, classroom_id, start, end)
                .await?,
        )
    }

    async fn find_by_id(&self, id: i32) -> BookingResult<Option<Reservation>> {
        reservation::get_reservation_by_id(&self.pool, id)
            .await?
            .map(Reservation::try_from)
            .transpose()
    }

    async fn save(&self, new: NewReservation) -> BookingResult<Reservation> {
        let row = reservation::create_reservation(
            &self.pool,
            new.classroom.id,
            new.user.id,
            new.start_at,
            new.end_at,
        )
        .await
        .map_err(map_write_error)?;

        Reservation::try_from(row)
    }

    async fn delete(&self, existing: Reservation) -> BookingResult<()> {
        reservation::delete_reservation(&self.pool, existing.id).await?;
        Ok(())
    }
}
