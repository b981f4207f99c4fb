use super::*;

/// Tests deleting a session removes it and its roster.
///
/// Expected: Ok(true) with no session or roster rows left
#[tokio::test]
async fn deletes_session_and_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);
    let mut params = math_101();
    params.students = vec![Student::new("Jane Smith", "stu123")];
    let (session, _) = repo.upsert(params.clone()).await?;

    let removed = repo.delete_by_key(&params.key()).await?;

    assert!(removed);
    assert!(entity::prelude::TutoringSession::find_by_id(session.id)
        .one(db)
        .await?
        .is_none());
    let roster_count = entity::prelude::SessionStudent::find()
        .filter(entity::session_student::Column::SessionId.eq(session.id))
        .count(db)
        .await?;
    assert_eq!(roster_count, 0);

    Ok(())
}

/// Tests deleting a missing session leaves other sessions untouched.
///
/// Expected: Ok(false) with the row count unchanged
#[tokio::test]
async fn reports_not_found_for_missing_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_session(db).await?;

    let repo = SessionRepository::new(db);
    let removed = repo.delete_by_key(&math_101().key()).await?;

    assert!(!removed);
    let count = entity::prelude::TutoringSession::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
