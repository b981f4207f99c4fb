use crate::{
    data::{session::SessionRepository, session_student::SessionStudentRepository},
    model::session::{Enrollment, SessionKey, SetSessionParams, Student},
};
use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod append;
mod enroll_by_name;
mod remove;

/// Stores an empty "Math 101" session and returns its key.
async fn store_math_101(db: &sea_orm::DatabaseConnection) -> Result<SessionKey, DbErr> {
    let params = SetSessionParams {
        name: "Math 101".to_string(),
        date: Utc.with_ymd_and_hms(2025, 3, 30, 0, 0, 0).unwrap(),
        session_hours: 2,
        tutor_name: "John Doe".to_string(),
        tutor_id: "12345".to_string(),
        students: Vec::new(),
    };
    let key = params.key();
    SessionRepository::new(db).upsert(params).await?;

    Ok(key)
}

/// Loads the roster ids of the session with this key.
async fn roster_ids(db: &sea_orm::DatabaseConnection, key: &SessionKey) -> Result<Vec<String>, DbErr> {
    let session = SessionRepository::new(db)
        .get_by_key(key)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("session".to_string()))?;

    Ok(session.students.into_iter().map(|s| s.student_id).collect())
}
