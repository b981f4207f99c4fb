//! Session student factory for creating roster entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating roster entries with customizable fields.
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    session_id: i32,
    student_name: String,
    student_id: String,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - student_name: `"Student {id}"`
    /// - student_id: `"stu{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `session_id` - Session the student is enrolled in
    pub fn new(db: &'a DatabaseConnection, session_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            session_id,
            student_name: format!("Student {}", id),
            student_id: format!("stu{}", id),
        }
    }

    /// Sets the student's display name.
    pub fn student_name(mut self, student_name: impl Into<String>) -> Self {
        self.student_name = student_name.into();
        self
    }

    /// Sets the student's external identifier.
    pub fn student_id(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = student_id.into();
        self
    }

    /// Builds and inserts the roster entry into the database.
    pub async fn build(self) -> Result<entity::session_student::Model, DbErr> {
        entity::session_student::ActiveModel {
            id: ActiveValue::NotSet,
            session_id: ActiveValue::Set(self.session_id),
            student_name: ActiveValue::Set(self.student_name),
            student_id: ActiveValue::Set(self.student_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a roster entry with default values for the given session.
pub async fn create_student(
    db: &DatabaseConnection,
    session_id: i32,
) -> Result<entity::session_student::Model, DbErr> {
    StudentFactory::new(db, session_id).build().await
}
