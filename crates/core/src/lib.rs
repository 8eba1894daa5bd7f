//! # Classbook Core
//!
//! Domain types and booking rules for classroom reservations.
//!
//! - **models**: classrooms, users, reservation records and their DTOs
//! - **store**: the collaborator traits a backing store implements
//! - **scheduler**: [`scheduler::ReservationScheduler`], the only writer of reservations
//! - **errors**: the error taxonomy every operation reports through

pub mod errors;
pub mod models;
pub mod scheduler;
pub mod store;

pub use errors::{BookingError, BookingResult};
pub use scheduler::ReservationScheduler;
