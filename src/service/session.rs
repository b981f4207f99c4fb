//! Session store operations.
//!
//! `SessionService` wraps the session and roster repositories, logging each outcome
//! and converting database errors to `AppError` so callers can tell a failure apart
//! from a legitimate "not found".

use sea_orm::DatabaseConnection;

use crate::{
    data::{session::SessionRepository, session_student::SessionStudentRepository},
    error::AppError,
    model::session::{Enrollment, Session, SessionKey, SetSessionParams, Student, Upsert},
};

pub struct SessionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a session or overwrites the one with the same natural key.
    ///
    /// # Returns
    /// - `Ok((Session, Upsert))` - Stored session and whether it was created or updated
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_session(&self, params: SetSessionParams) -> Result<(Session, Upsert), AppError> {
        let (session, outcome) = SessionRepository::new(self.db).upsert(params).await?;

        match outcome {
            Upsert::Created => tracing::info!(
                "New session created: {} ({}) by tutor {}",
                session.name,
                session.date,
                session.tutor_id
            ),
            Upsert::Updated => tracing::info!(
                "Session updated: {} ({}) by tutor {}",
                session.name,
                session.date,
                session.tutor_id
            ),
        }

        Ok((session, outcome))
    }

    /// Gets a session by its natural key.
    pub async fn get_session(&self, key: &SessionKey) -> Result<Option<Session>, AppError> {
        let session = SessionRepository::new(self.db).get_by_key(key).await?;

        if session.is_none() {
            tracing::debug!(
                "No session found for {} / {} / {}",
                key.name,
                key.tutor_id,
                key.date
            );
        }

        Ok(session)
    }

    /// Gets a session by name alone.
    ///
    /// Names are not unique. When several sessions share the name the earliest-dated
    /// one is returned and a warning is logged.
    pub async fn get_session_by_name(&self, name: &str) -> Result<Option<Session>, AppError> {
        let sessions = SessionRepository::new(self.db).get_all_by_name(name).await?;

        if sessions.len() > 1 {
            tracing::warn!(
                "{} sessions share the name {}, using the earliest",
                sessions.len(),
                name
            );
        }

        let session = sessions.into_iter().next();
        if session.is_none() {
            tracing::debug!("No session found with name {}", name);
        }

        Ok(session)
    }

    /// Deletes the session with this natural key.
    ///
    /// # Returns
    /// - `Ok(true)` - Session removed
    /// - `Ok(false)` - No session matched
    pub async fn remove_session(&self, key: &SessionKey) -> Result<bool, AppError> {
        let removed = SessionRepository::new(self.db).delete_by_key(key).await?;

        if removed {
            tracing::info!("Session removed: {} ({})", key.name, key.date);
        } else {
            tracing::debug!("No session found to remove: {} ({})", key.name, key.date);
        }

        Ok(removed)
    }

    /// Appends a student to a session's roster without a duplicate check.
    ///
    /// # Returns
    /// - `Ok(true)` - Student added
    /// - `Ok(false)` - Session not found
    pub async fn add_student_to_session(
        &self,
        key: &SessionKey,
        student: Student,
    ) -> Result<bool, AppError> {
        let student_id = student.student_id.clone();
        let added = SessionStudentRepository::new(self.db)
            .append(key, student)
            .await?;

        if added {
            tracing::info!("Student {} added to session {}", student_id, key.name);
        } else {
            tracing::debug!("Session {} not found, student {} not added", key.name, student_id);
        }

        Ok(added)
    }

    /// Removes every roster entry with this student id.
    ///
    /// # Returns
    /// - `Ok(Some(count))` - Entries removed
    /// - `Ok(None)` - Session not found
    pub async fn remove_student_from_session(
        &self,
        key: &SessionKey,
        student_id: &str,
    ) -> Result<Option<u64>, AppError> {
        let removed = SessionStudentRepository::new(self.db)
            .remove(key, student_id)
            .await?;

        match removed {
            Some(0) => tracing::debug!(
                "Student {} is not enrolled in session {}",
                student_id,
                key.name
            ),
            Some(count) => tracing::info!(
                "Removed {} entries for student {} from session {}",
                count,
                student_id,
                key.name
            ),
            None => tracing::debug!("Session {} not found", key.name),
        }

        Ok(removed)
    }

    /// Enrolls a student in the session with this name unless already enrolled.
    pub async fn apply_to_session(
        &self,
        name: &str,
        student_name: &str,
        student_id: &str,
    ) -> Result<Enrollment, AppError> {
        let enrollment = SessionStudentRepository::new(self.db)
            .enroll_by_name(name, Student::new(student_name, student_id))
            .await?;

        match enrollment {
            Enrollment::Enrolled => {
                tracing::info!("Student {} enrolled in session {}", student_id, name)
            }
            Enrollment::AlreadyEnrolled => tracing::debug!(
                "Student {} is already enrolled in session {}",
                student_id,
                name
            ),
            Enrollment::SessionNotFound => tracing::debug!("Session {} not found", name),
        }

        Ok(enrollment)
    }
}
