#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use classbook_core::errors::BookingResult;
use classbook_core::models::{
    Classroom, ClassroomType, NewReservation, Reservation, User, overlaps,
};
use classbook_core::store::{ClassroomDirectory, ReservationStore, UserDirectory};
use classbook_core::ReservationScheduler;

pub fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid timestamp")
}

pub fn user(id: i32, name_kor: &str) -> User {
    User {
        id,
        name_kor: name_kor.to_string(),
    }
}

pub fn classroom(id: i32, name: &str) -> Classroom {
    Classroom {
        id,
        name: name.to_string(),
        classroom_type: ClassroomType::Lecture,
        is_active: true,
    }
}

#[derive(Default)]
struct State {
    classrooms: Vec<Classroom>,
    users: Vec<User>,
    reservations: Vec<Reservation>,
    next_id: i32,
}

/// Store backed by plain vectors, shared between clones.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn with_classroom(self, classroom: Classroom) -> Self {
        self.state.lock().unwrap().classrooms.push(classroom);
        self
    }

    pub fn with_user(self, user: User) -> Self {
        self.state.lock().unwrap().users.push(user);
        self
    }

    pub fn reservations(&self) -> Vec<Reservation> {
        self.state.lock().unwrap().reservations.clone()
    }

    pub fn scheduler(&self) -> ReservationScheduler<Self, Self, Self> {
        ReservationScheduler::new(self.clone(), self.clone(), self.clone())
    }

    fn select(&self, keep: impl Fn(&Reservation) -> bool) -> Vec<Reservation> {
        self.state
            .lock()
            .unwrap()
            .reservations
            .iter()
            .filter(|r| keep(r))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ClassroomDirectory for InMemoryStore {
    async fn find_classroom(&self, id: i32) -> BookingResult<Option<Classroom>> {
        let state = self.state.lock().unwrap();
        Ok(state.classrooms.iter().find(|c| c.id == id).cloned())
    }
}

#[async_trait]
impl UserDirectory for InMemoryStore {
    async fn find_user(&self, id: i32) -> BookingResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl ReservationStore for InMemoryStore {
    async fn find_by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> BookingResult<Vec<Reservation>> {
        Ok(self.select(|r| start <= r.start_at && r.start_at <= end))
    }

    async fn find_by_user_and_date(
        &self,
        user_id: i32,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> BookingResult<Vec<Reservation>> {
        Ok(self.select(|r| {
            r.user_id() == Some(user_id) && start <= r.start_at && r.start_at < end
        }))
    }

    async fn find_conflicting_reservations(
        &self,
        classroom_id: i32,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> BookingResult<Vec<Reservation>> {
        Ok(self.select(|r| {
            r.classroom_id() == Some(classroom_id) && overlaps(r.start_at, r.end_at, start, end)
        }))
    }

    async fn find_by_id(&self, id: i32) -> BookingResult<Option<Reservation>> {
        Ok(self.select(|r| r.id == id).into_iter().next())
    }

    async fn save(&self, reservation: NewReservation) -> BookingResult<Reservation> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let saved = Reservation {
            id: state.next_id,
            classroom: Some(reservation.classroom),
            user: Some(reservation.user),
            start_at: reservation.start_at,
            end_at: reservation.end_at,
        };
        state.reservations.push(saved.clone());
        Ok(saved)
    }

    async fn delete(&self, reservation: Reservation) -> BookingResult<()> {
        let mut state = self.state.lock().unwrap();
        state.reservations.retain(|r| r.id != reservation.id);
        Ok(())
    }
}
