use super::*;

/// Tests that sessions sharing a name are ordered by date.
///
/// Expected: Ok with the earliest session first
#[tokio::test]
async fn orders_same_name_sessions_by_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let late = factory::tutoring_session::SessionFactory::new(db)
        .name("Math 101")
        .session_date(Utc.with_ymd_and_hms(2025, 4, 2, 10, 0, 0).unwrap())
        .build()
        .await?;
    let early = factory::tutoring_session::SessionFactory::new(db)
        .name("Math 101")
        .session_date(Utc.with_ymd_and_hms(2025, 3, 30, 10, 0, 0).unwrap())
        .build()
        .await?;
    factory::tutoring_session::SessionFactory::new(db)
        .name("Physics")
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let sessions = repo.get_all_by_name("Math 101").await?;

    let ids: Vec<i32> = sessions.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![early.id, late.id]);

    Ok(())
}

/// Tests that an unknown name yields no sessions.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_session(db).await?;

    let repo = SessionRepository::new(db);
    let sessions = repo.get_all_by_name("Nope").await?;

    assert!(sessions.is_empty());

    Ok(())
}
