//! Domain models for tutoring sessions and their rosters.

use chrono::{DateTime, Utc};

/// A student enrolled in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Display name of the student.
    pub student_name: String,
    /// External identifier of the student (Discord user id for enrollments made
    /// through `.add <name> <studentName> <studentId>`).
    pub student_id: String,
}

impl Student {
    pub fn new(student_name: impl Into<String>, student_id: impl Into<String>) -> Self {
        Self {
            student_name: student_name.into(),
            student_id: student_id.into(),
        }
    }

    /// Converts a roster entity model to a student domain model.
    pub fn from_entity(entity: entity::session_student::Model) -> Self {
        Self {
            student_name: entity.student_name,
            student_id: entity.student_id,
        }
    }
}

/// A scheduled tutoring session with its roster in enrollment order.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Generated unique identifier.
    pub id: i32,
    /// Human-chosen label, not unique on its own.
    pub name: String,
    /// Scheduled start in UTC.
    pub date: DateTime<Utc>,
    /// Duration in whole hours.
    pub session_hours: u32,
    /// Display name of the tutor.
    pub tutor_name: String,
    /// External identifier of the tutor.
    pub tutor_id: String,
    /// Enrolled students, oldest enrollment first.
    pub students: Vec<Student>,
    /// Timestamp when the session was first stored.
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Converts a session entity and its roster entities to a domain model.
    ///
    /// # Arguments
    /// - `entity` - The session row
    /// - `students` - Roster rows, already ordered by enrollment
    ///
    /// # Returns
    /// - `Session` - The converted domain model
    pub fn from_entity(
        entity: entity::tutoring_session::Model,
        students: Vec<entity::session_student::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            date: entity.session_date,
            session_hours: entity.session_hours.max(0) as u32,
            tutor_name: entity.tutor_name,
            tutor_id: entity.tutor_id,
            students: students.into_iter().map(Student::from_entity).collect(),
            created_at: entity.created_at,
        }
    }

    /// Price of the whole session at the given hourly rate.
    pub fn cost(&self, hourly_rate: u32) -> u64 {
        u64::from(self.session_hours) * u64::from(hourly_rate)
    }
}

/// The (name, tutor id, date) triple used by staff commands to address a session.
///
/// Matching is exact, including the time of day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKey {
    pub name: String,
    pub tutor_id: String,
    pub date: DateTime<Utc>,
}

/// Parameters for creating or overwriting a session.
#[derive(Debug, Clone)]
pub struct SetSessionParams {
    pub name: String,
    pub date: DateTime<Utc>,
    pub session_hours: u32,
    pub tutor_name: String,
    pub tutor_id: String,
    /// Replaces the whole roster when the session already exists.
    pub students: Vec<Student>,
}

impl SetSessionParams {
    pub fn key(&self) -> SessionKey {
        SessionKey {
            name: self.name.clone(),
            tutor_id: self.tutor_id.clone(),
            date: self.date,
        }
    }
}

/// Whether `set_session` inserted a new row or overwrote an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Created,
    Updated,
}

/// Result of a self-service enrollment by session name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enrollment {
    Enrolled,
    AlreadyEnrolled,
    SessionNotFound,
}

impl Enrollment {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Enrolled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session(hours: u32) -> Session {
        let date = Utc.with_ymd_and_hms(2025, 3, 30, 14, 0, 0).unwrap();
        Session {
            id: 1,
            name: "Math101".to_string(),
            date,
            session_hours: hours,
            tutor_name: "JohnDoe".to_string(),
            tutor_id: "12345".to_string(),
            students: vec![Student::new("Jane Smith", "stu123")],
            created_at: date,
        }
    }

    #[test]
    fn cost_is_hours_times_rate() {
        assert_eq!(session(2).cost(10), 20);
        assert_eq!(session(3).cost(15), 45);
    }
}
