pub mod classroom;
pub mod reservation;
pub mod user;
