pub mod classroom;
pub mod reservation;
pub mod user;

pub use classroom::{Classroom, ClassroomDto, ClassroomType};
pub use reservation::{
    NewReservation, Reservation, ReservationDto, ReservationRequest, UNKNOWN_USER_NAME,
    day_span, day_window, overlaps,
};
pub use user::User;
