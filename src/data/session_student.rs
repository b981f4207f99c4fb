//! Session roster repository.
//!
//! Provides the `SessionStudentRepository` for adding and removing students on a
//! session's roster. Staff operations address the session by natural key and do not
//! check for duplicates; self-service enrollment addresses it by name and refuses a
//! student id that is already enrolled.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};

use super::session::{find_model_by_key, find_models_by_name, find_roster};
use crate::model::session::{Enrollment, SessionKey, Student};

/// Repository for session roster operations.
pub struct SessionStudentRepository<'a> {
    /// Database connection for executing queries.
    db: &'a DatabaseConnection,
}

impl<'a> SessionStudentRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a student to the end of a session's roster.
    ///
    /// Does not check whether the student id is already enrolled.
    ///
    /// # Arguments
    /// - `key` - Natural key of the session
    /// - `student` - Student to append
    ///
    /// # Returns
    /// - `Ok(true)` - Student appended
    /// - `Ok(false)` - No session matches the key
    /// - `Err(DbErr)` - Database error
    pub async fn append(&self, key: &SessionKey, student: Student) -> Result<bool, DbErr> {
        let Some(session) = find_model_by_key(self.db, key).await? else {
            return Ok(false);
        };

        entity::session_student::ActiveModel {
            session_id: ActiveValue::Set(session.id),
            student_name: ActiveValue::Set(student.student_name),
            student_id: ActiveValue::Set(student.student_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes every roster entry with the given student id.
    ///
    /// # Arguments
    /// - `key` - Natural key of the session
    /// - `student_id` - Student id to remove
    ///
    /// # Returns
    /// - `Ok(Some(count))` - Number of entries removed (0 if the student was not enrolled)
    /// - `Ok(None)` - No session matches the key
    /// - `Err(DbErr)` - Database error
    pub async fn remove(&self, key: &SessionKey, student_id: &str) -> Result<Option<u64>, DbErr> {
        let Some(session) = find_model_by_key(self.db, key).await? else {
            return Ok(None);
        };

        let result = entity::prelude::SessionStudent::delete_many()
            .filter(entity::session_student::Column::SessionId.eq(session.id))
            .filter(entity::session_student::Column::StudentId.eq(student_id))
            .exec(self.db)
            .await?;

        Ok(Some(result.rows_affected))
    }

    /// Enrolls a student in the session with the given name unless already enrolled.
    ///
    /// When several sessions share the name, the earliest-dated one is used. The
    /// duplicate check and the insert run in one transaction so two concurrent
    /// enrollments of the same student cannot both succeed.
    ///
    /// # Arguments
    /// - `name` - Exact session name
    /// - `student` - Student to enroll
    ///
    /// # Returns
    /// - `Ok(Enrollment::Enrolled)` - Student appended to the roster
    /// - `Ok(Enrollment::AlreadyEnrolled)` - Student id already on the roster, nothing changed
    /// - `Ok(Enrollment::SessionNotFound)` - No session has that name
    /// - `Err(DbErr)` - Database error
    pub async fn enroll_by_name(&self, name: &str, student: Student) -> Result<Enrollment, DbErr> {
        let txn = self.db.begin().await?;

        let Some(session) = find_models_by_name(&txn, name).await?.into_iter().next() else {
            txn.rollback().await?;
            return Ok(Enrollment::SessionNotFound);
        };

        let roster = find_roster(&txn, session.id).await?;
        if roster.iter().any(|s| s.student_id == student.student_id) {
            txn.rollback().await?;
            return Ok(Enrollment::AlreadyEnrolled);
        }

        entity::session_student::ActiveModel {
            session_id: ActiveValue::Set(session.id),
            student_name: ActiveValue::Set(student.student_name),
            student_id: ActiveValue::Set(student.student_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Enrollment::Enrolled)
    }
}
