use chrono::NaiveDateTime;
use classbook_core::errors::BookingError;
use classbook_core::models::{Classroom, Reservation, User};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClassroom {
    pub classroom_id: i32,
    pub name: String,
    pub classroom_type: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub user_id: i32,
    pub name_kor: String,
}

/// A reservation row joined with its classroom and user.
///
/// The joined columns are all nullable because the references are left joins.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbReservation {
    pub reservation_id: i32,
    pub classroom_id: Option<i32>,
    pub classroom_name: Option<String>,
    pub classroom_type: Option<String>,
    pub classroom_is_active: Option<bool>,
    pub user_id: Option<i32>,
    pub user_name_kor: Option<String>,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
}

impl TryFrom<DbClassroom> for Classroom {
    type Error = BookingError;

    fn try_from(row: DbClassroom) -> Result<Self, Self::Error> {
        Ok(Classroom {
            id: row.classroom_id,
            name: row.name,
            classroom_type: row.classroom_type.parse()?,
            is_active: row.is_active,
        })
    }
}

impl From<DbUser> for User {
    fn from(row: DbUser) -> Self {
        User {
            id: row.user_id,
            name_kor: row.name_kor,
        }
    }
}

impl TryFrom<DbReservation> for Reservation {
    type Error = BookingError;

    fn try_from(row: DbReservation) -> Result<Self, Self::Error> {
        let classroom = match (
            row.classroom_id,
            row.classroom_name,
            row.classroom_type,
            row.classroom_is_active,
        ) {
            (Some(classroom_id), Some(name), Some(classroom_type), Some(is_active)) => {
                Some(Classroom::try_from(DbClassroom {
                    classroom_id,
                    name,
                    classroom_type,
                    is_active,
                })?)
            }
            _ => None,
        };

        let user = match (row.user_id, row.user_name_kor) {
            (Some(user_id), Some(name_kor)) => Some(User::from(DbUser { user_id, name_kor })),
            _ => None,
        };

        Ok(Reservation {
            id: row.reservation_id,
            classroom,
            user,
            start_at: row.start_at,
            end_at: row.end_at,
        })
    }
}
