//! Tutoring session factory for creating test session entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Timelike, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sessions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::tutoring_session::SessionFactory;
///
/// let session = SessionFactory::new(&db)
///     .name("Math 101")
///     .session_hours(2)
///     .build()
///     .await?;
/// ```
pub struct SessionFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    tutor_id: String,
    tutor_name: String,
    session_date: DateTime<Utc>,
    session_hours: i32,
}

impl<'a> SessionFactory<'a> {
    /// Creates a new SessionFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Session {id}"` where id is auto-incremented
    /// - tutor_id: `"{id}"`
    /// - tutor_name: `"Tutor {id}"`
    /// - session_date: one day from now, truncated to the minute
    /// - session_hours: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let session_date = (Utc::now() + Duration::days(1))
            .with_second(0)
            .and_then(|date| date.with_nanosecond(0))
            .unwrap_or_else(Utc::now);

        Self {
            db,
            name: format!("Session {}", id),
            tutor_id: id.to_string(),
            tutor_name: format!("Tutor {}", id),
            session_date,
            session_hours: 1,
        }
    }

    /// Sets the session name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the tutor's external identifier.
    pub fn tutor_id(mut self, tutor_id: impl Into<String>) -> Self {
        self.tutor_id = tutor_id.into();
        self
    }

    /// Sets the tutor's display name.
    pub fn tutor_name(mut self, tutor_name: impl Into<String>) -> Self {
        self.tutor_name = tutor_name.into();
        self
    }

    /// Sets the scheduled date and time.
    pub fn session_date(mut self, session_date: DateTime<Utc>) -> Self {
        self.session_date = session_date;
        self
    }

    /// Sets the duration in hours.
    pub fn session_hours(mut self, session_hours: i32) -> Self {
        self.session_hours = session_hours;
        self
    }

    /// Builds and inserts the session entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::tutoring_session::Model)` - Created session entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::tutoring_session::Model, DbErr> {
        entity::tutoring_session::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            tutor_id: ActiveValue::Set(self.tutor_id),
            tutor_name: ActiveValue::Set(self.tutor_name),
            session_date: ActiveValue::Set(self.session_date),
            session_hours: ActiveValue::Set(self.session_hours),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a session with default values.
///
/// Shorthand for `SessionFactory::new(db).build().await`.
pub async fn create_session(
    db: &DatabaseConnection,
) -> Result<entity::tutoring_session::Model, DbErr> {
    SessionFactory::new(db).build().await
}
