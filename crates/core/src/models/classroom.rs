use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BookingError;
use crate::models::reservation::ReservationDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassroomType {
    Lecture,
    Lab,
    Seminar,
    Study,
}

impl ClassroomType {
    /// Stored and serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassroomType::Lecture => "LECTURE",
            ClassroomType::Lab => "LAB",
            ClassroomType::Seminar => "SEMINAR",
            ClassroomType::Study => "STUDY",
        }
    }
}

impl fmt::Display for ClassroomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassroomType {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LECTURE" => Ok(ClassroomType::Lecture),
            "LAB" => Ok(ClassroomType::Lab),
            "SEMINAR" => Ok(ClassroomType::Seminar),
            "STUDY" => Ok(ClassroomType::Study),
            other => Err(BookingError::InvalidRequest(format!(
                "unknown classroom type: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    pub id: i32,
    pub name: String,
    pub classroom_type: ClassroomType,
    pub is_active: bool,
}

/// A classroom together with the reservations booked on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassroomDto {
    pub classroom_id: i32,
    pub name: String,
    pub classroom_type: ClassroomType,
    pub is_active: bool,
    #[serde(default)]
    pub reservations: Vec<ReservationDto>,
}

impl ClassroomDto {
    pub fn new(classroom: Classroom, reservations: Vec<ReservationDto>) -> Self {
        Self {
            classroom_id: classroom.id,
            name: classroom.name,
            classroom_type: classroom.classroom_type,
            is_active: classroom.is_active,
            reservations,
        }
    }
}
