use super::*;

/// Tests creating a new session.
///
/// Verifies that upserting a key with no existing session inserts a row and
/// returns the stored fields.
///
/// Expected: Ok with Upsert::Created
#[tokio::test]
async fn creates_new_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);
    let (session, outcome) = repo.upsert(math_101()).await?;

    assert_eq!(outcome, Upsert::Created);
    assert_eq!(session.name, "Math 101");
    assert_eq!(session.tutor_id, "12345");
    assert_eq!(session.tutor_name, "John Doe");
    assert_eq!(session.session_hours, 2);
    assert_eq!(session.date, math_101().date);
    assert!(session.students.is_empty());

    Ok(())
}

/// Tests that upserting identical data twice keeps a single row.
///
/// Expected: Ok with one row and Upsert::Updated on the second call
#[tokio::test]
async fn is_idempotent_for_same_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);
    let (first, _) = repo.upsert(math_101()).await?;
    let (second, outcome) = repo.upsert(math_101()).await?;

    assert_eq!(outcome, Upsert::Updated);
    assert_eq!(first.id, second.id);

    let count = entity::prelude::TutoringSession::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that an update overwrites fields and replaces the roster.
///
/// Expected: Ok with new hours, tutor name and roster
#[tokio::test]
async fn overwrites_fields_and_roster_of_existing_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);
    let mut params = math_101();
    params.students = vec![
        Student::new("Jane Smith", "stu123"),
        Student::new("Jake White", "stu456"),
    ];
    let (created, _) = repo.upsert(params).await?;

    let mut params = math_101();
    params.session_hours = 3;
    params.tutor_name = "Johnny Doe".to_string();
    params.students = vec![Student::new("John Doe", "stu789")];
    let (updated, outcome) = repo.upsert(params).await?;

    assert_eq!(outcome, Upsert::Updated);
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.session_hours, 3);
    assert_eq!(updated.tutor_name, "Johnny Doe");
    assert_eq!(updated.students, vec![Student::new("John Doe", "stu789")]);

    let roster_count = entity::prelude::SessionStudent::find()
        .filter(entity::session_student::Column::SessionId.eq(created.id))
        .count(db)
        .await?;
    assert_eq!(roster_count, 1);

    Ok(())
}

/// Tests that a different time of day is a different key.
///
/// Expected: Ok with two separate rows
#[tokio::test]
async fn treats_different_time_as_different_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);
    repo.upsert(math_101()).await?;

    let mut later = math_101();
    later.date = Utc.with_ymd_and_hms(2025, 3, 30, 14, 0, 0).unwrap();
    let (_, outcome) = repo.upsert(later).await?;

    assert_eq!(outcome, Upsert::Created);
    let count = entity::prelude::TutoringSession::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
