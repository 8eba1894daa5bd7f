//! # Reservation Scheduler
//!
//! Books, lists and cancels classroom reservations. Every write goes through
//! [`ReservationScheduler`], which validates a request completely before
//! issuing the single `save` or `delete` against the store, so a rejected
//! request leaves nothing behind.
//!
//! Each public operation is meant to run inside one unit of work of the
//! backing store; the scheduler itself holds no locks.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::errors::{BookingError, BookingResult};
use crate::models::{
    ClassroomDto, NewReservation, ReservationDto, ReservationRequest, User, day_span, day_window,
};
use crate::store::{ClassroomDirectory, ReservationStore, UserDirectory};

/// Gatekeeper for reservation state changes.
///
/// # Example
///
/// ```ignore
/// let store = PgStore::new(pool);
/// let scheduler = ReservationScheduler::new(store.clone(), store.clone(), store);
/// let dto = scheduler.create_reservation(&user, request).await?;
/// ```
pub struct ReservationScheduler<C, R, U> {
    classrooms: C,
    reservations: R,
    users: U,
}

impl<C, R, U> ReservationScheduler<C, R, U>
where
    C: ClassroomDirectory,
    R: ReservationStore,
    U: UserDirectory,
{
    pub fn new(classrooms: C, reservations: R, users: U) -> Self {
        Self {
            classrooms,
            reservations,
            users,
        }
    }

    /// Reservations on `classroom_id` that start on `date`, in store order.
    pub async fn reservations_for_classroom(
        &self,
        classroom_id: i32,
        date: NaiveDate,
    ) -> BookingResult<Vec<ReservationDto>> {
        let (start_of_day, end_of_day) = day_span(date)?;

        let reservations = self
            .reservations
            .find_by_date_range(start_of_day, end_of_day)
            .await?;

        let dtos: Vec<ReservationDto> = reservations
            .into_iter()
            .filter(|r| r.classroom_id() == Some(classroom_id))
            .map(ReservationDto::from)
            .collect();

        debug!(
            "Found {} reservations for classroom {} on {}",
            dtos.len(),
            classroom_id,
            date
        );
        Ok(dtos)
    }

    /// The classroom's details along with its reservations on `date`.
    pub async fn classroom_schedule(
        &self,
        classroom_id: i32,
        date: NaiveDate,
    ) -> BookingResult<ClassroomDto> {
        let classroom = self
            .classrooms
            .find_classroom(classroom_id)
            .await?
            .ok_or_else(|| BookingError::NotFound("classroom does not exist".to_string()))?;

        let reservations = self.reservations_for_classroom(classroom_id, date).await?;

        Ok(ClassroomDto::new(classroom, reservations))
    }

    /// Books a classroom for `user`.
    ///
    /// Checks run in order and the first failure is returned:
    ///
    /// 1. the classroom exists (`NotFound`)
    /// 2. the window ends after it starts (`InvalidRequest`)
    /// 3. the user holds no other reservation starting that day (`InvalidRequest`)
    /// 4. no reservation on the classroom overlaps the window (`InvalidRequest`)
    pub async fn create_reservation(
        &self,
        user: &User,
        request: ReservationRequest,
    ) -> BookingResult<ReservationDto> {
        let classroom = self
            .classrooms
            .find_classroom(request.classroom_id)
            .await?
            .ok_or_else(|| BookingError::NotFound("classroom does not exist".to_string()))?;

        if request.start_at >= request.end_at {
            return Err(BookingError::InvalidRequest(
                "reservation must end after it starts".to_string(),
            ));
        }

        let (start_of_day, next_day) = day_window(request.start_at.date())?;
        let same_day = self
            .reservations
            .find_by_user_and_date(user.id, start_of_day, next_day)
            .await?;
        if !same_day.is_empty() {
            debug!(
                "User {} already holds {} reservation(s) on {}",
                user.id,
                same_day.len(),
                start_of_day.date()
            );
            return Err(BookingError::InvalidRequest(
                "at most one reservation per day".to_string(),
            ));
        }

        let conflicting = self
            .reservations
            .find_conflicting_reservations(classroom.id, request.start_at, request.end_at)
            .await?;
        if !conflicting.is_empty() {
            debug!(
                "Classroom {} has {} overlapping reservation(s) for {} - {}",
                classroom.id,
                conflicting.len(),
                request.start_at,
                request.end_at
            );
            return Err(BookingError::InvalidRequest(
                "time slot already booked".to_string(),
            ));
        }

        let saved = self
            .reservations
            .save(NewReservation {
                classroom,
                user: user.clone(),
                start_at: request.start_at,
                end_at: request.end_at,
            })
            .await?;

        info!(
            "Reservation {} created: classroom={:?}, user={}, {} - {}",
            saved.id,
            saved.classroom_id(),
            user.id,
            saved.start_at,
            saved.end_at
        );
        Ok(saved.into())
    }

    /// Resolves `user_id` through the user directory, then books as [`Self::create_reservation`].
    pub async fn create_reservation_for(
        &self,
        user_id: i32,
        request: ReservationRequest,
    ) -> BookingResult<ReservationDto> {
        let user = self
            .users
            .find_user(user_id)
            .await?
            .ok_or_else(|| BookingError::NotFound("user does not exist".to_string()))?;

        self.create_reservation(&user, request).await
    }

    /// Cancels a reservation. Only its owner may do so.
    pub async fn delete_reservation(&self, user: &User, reservation_id: i32) -> BookingResult<()> {
        let reservation = self
            .reservations
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| BookingError::NotFound("reservation does not exist".to_string()))?;

        if reservation.user_id() != Some(user.id) {
            debug!(
                "User {} tried to cancel reservation {} owned by {:?}",
                user.id,
                reservation_id,
                reservation.user_id()
            );
            return Err(BookingError::PermissionDenied(
                "no permission to cancel this reservation".to_string(),
            ));
        }

        self.reservations.delete(reservation).await?;

        info!("Reservation {} cancelled by user {}", reservation_id, user.id);
        Ok(())
    }
}
