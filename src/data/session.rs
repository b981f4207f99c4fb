//! Tutoring session repository for database operations.
//!
//! This module provides the `SessionRepository` for creating, looking up and deleting
//! tutoring sessions. Sessions are addressed either by their natural key (name, tutor id,
//! date) with exact equality on every part, or by name alone. Every returned `Session`
//! carries its roster in enrollment order.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::session::{Session, SessionKey, SetSessionParams, Upsert};

/// Repository for tutoring session database operations.
pub struct SessionRepository<'a> {
    /// Database connection for executing queries.
    db: &'a DatabaseConnection,
}

impl<'a> SessionRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a session, or overwrites the one with the same natural key.
    ///
    /// When a session with the same (name, tutor id, date) exists, every column is
    /// overwritten and its roster is replaced by `params.students`. Otherwise a new
    /// session is inserted with that roster. Runs in a single transaction.
    ///
    /// # Arguments
    /// - `params` - Session fields and initial roster
    ///
    /// # Returns
    /// - `Ok((Session, Upsert))` - Stored session and whether it was created or updated
    /// - `Err(DbErr)` - Database error, or hours too large to store
    pub async fn upsert(&self, params: SetSessionParams) -> Result<(Session, Upsert), DbErr> {
        let session_hours = i32::try_from(params.session_hours).map_err(|_| {
            DbErr::Custom(format!(
                "Session hours {} exceed the storable range",
                params.session_hours
            ))
        })?;

        let txn = self.db.begin().await?;

        let (session, outcome) = match find_model_by_key(&txn, &params.key()).await? {
            Some(existing) => {
                let mut active: entity::tutoring_session::ActiveModel = existing.into();
                active.name = ActiveValue::Set(params.name);
                active.tutor_id = ActiveValue::Set(params.tutor_id);
                active.tutor_name = ActiveValue::Set(params.tutor_name);
                active.session_date = ActiveValue::Set(params.date);
                active.session_hours = ActiveValue::Set(session_hours);
                let updated = active.update(&txn).await?;

                entity::prelude::SessionStudent::delete_many()
                    .filter(entity::session_student::Column::SessionId.eq(updated.id))
                    .exec(&txn)
                    .await?;

                (updated, Upsert::Updated)
            }
            None => {
                let created = entity::tutoring_session::ActiveModel {
                    name: ActiveValue::Set(params.name),
                    tutor_id: ActiveValue::Set(params.tutor_id),
                    tutor_name: ActiveValue::Set(params.tutor_name),
                    session_date: ActiveValue::Set(params.date),
                    session_hours: ActiveValue::Set(session_hours),
                    created_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;

                (created, Upsert::Created)
            }
        };

        let mut students = Vec::with_capacity(params.students.len());
        for student in params.students {
            let entity = entity::session_student::ActiveModel {
                session_id: ActiveValue::Set(session.id),
                student_name: ActiveValue::Set(student.student_name),
                student_id: ActiveValue::Set(student.student_id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            students.push(entity);
        }

        txn.commit().await?;

        Ok((Session::from_entity(session, students), outcome))
    }

    /// Gets a session by its natural key.
    ///
    /// # Arguments
    /// - `key` - Name, tutor id and exact date of the session
    ///
    /// # Returns
    /// - `Ok(Some(Session))` - Session with its roster
    /// - `Ok(None)` - No session matches the key exactly
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_key(&self, key: &SessionKey) -> Result<Option<Session>, DbErr> {
        let Some(session) = find_model_by_key(self.db, key).await? else {
            return Ok(None);
        };

        let students = find_roster(self.db, session.id).await?;

        Ok(Some(Session::from_entity(session, students)))
    }

    /// Gets all sessions with the given name, earliest date first.
    ///
    /// Names are not unique; callers needing a single session take the first entry,
    /// which is the same one `SessionStudentRepository::enroll_by_name` uses.
    ///
    /// # Arguments
    /// - `name` - Exact session name
    ///
    /// # Returns
    /// - `Ok(Vec<Session>)` - Matching sessions with rosters, possibly empty
    /// - `Err(DbErr)` - Database error
    pub async fn get_all_by_name(&self, name: &str) -> Result<Vec<Session>, DbErr> {
        let sessions = find_models_by_name(self.db, name).await?;

        let mut results = Vec::with_capacity(sessions.len());
        for session in sessions {
            let students = find_roster(self.db, session.id).await?;
            results.push(Session::from_entity(session, students));
        }

        Ok(results)
    }

    /// Deletes the session matching the natural key, along with its roster.
    ///
    /// At most one session is deleted even if duplicates exist.
    ///
    /// # Arguments
    /// - `key` - Name, tutor id and exact date of the session
    ///
    /// # Returns
    /// - `Ok(true)` - A session was deleted
    /// - `Ok(false)` - No session matched
    /// - `Err(DbErr)` - Database error
    pub async fn delete_by_key(&self, key: &SessionKey) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let Some(session) = find_model_by_key(&txn, key).await? else {
            txn.rollback().await?;
            return Ok(false);
        };

        entity::prelude::SessionStudent::delete_many()
            .filter(entity::session_student::Column::SessionId.eq(session.id))
            .exec(&txn)
            .await?;

        entity::prelude::TutoringSession::delete_by_id(session.id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }
}

/// Finds the oldest session row matching the natural key exactly.
pub(super) async fn find_model_by_key<C: ConnectionTrait>(
    conn: &C,
    key: &SessionKey,
) -> Result<Option<entity::tutoring_session::Model>, DbErr> {
    entity::prelude::TutoringSession::find()
        .filter(entity::tutoring_session::Column::Name.eq(key.name.as_str()))
        .filter(entity::tutoring_session::Column::TutorId.eq(key.tutor_id.as_str()))
        .filter(entity::tutoring_session::Column::SessionDate.eq(key.date))
        .order_by_asc(entity::tutoring_session::Column::Id)
        .one(conn)
        .await
}

/// Finds session rows by name, earliest date first, ties broken by id.
pub(super) async fn find_models_by_name<C: ConnectionTrait>(
    conn: &C,
    name: &str,
) -> Result<Vec<entity::tutoring_session::Model>, DbErr> {
    entity::prelude::TutoringSession::find()
        .filter(entity::tutoring_session::Column::Name.eq(name))
        .order_by_asc(entity::tutoring_session::Column::SessionDate)
        .order_by_asc(entity::tutoring_session::Column::Id)
        .all(conn)
        .await
}

/// Loads the roster of a session in enrollment order.
pub(super) async fn find_roster<C: ConnectionTrait>(
    conn: &C,
    session_id: i32,
) -> Result<Vec<entity::session_student::Model>, DbErr> {
    entity::prelude::SessionStudent::find()
        .filter(entity::session_student::Column::SessionId.eq(session_id))
        .order_by_asc(entity::session_student::Column::Id)
        .all(conn)
        .await
}
