use super::*;

/// Tests that a stored session is returned with equal fields.
///
/// Expected: Ok(Some) with the fields that were upserted
#[tokio::test]
async fn returns_stored_session() -> Result<(), DbErr> {
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
    let (stored, _) = repo.upsert(params.clone()).await?;

    let found = repo.get_by_key(&params.key()).await?;

    assert_eq!(found, Some(stored));
    let found = found.unwrap();
    assert_eq!(found.students, params.students);

    Ok(())
}

/// Tests that every part of the key must match exactly.
///
/// Expected: Ok(None) for a different tutor or time of day
#[tokio::test]
async fn returns_none_when_any_key_part_differs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);
    let params = math_101();
    repo.upsert(params.clone()).await?;

    let other_tutor = SessionKey {
        tutor_id: "99999".to_string(),
        ..params.key()
    };
    let other_time = SessionKey {
        date: Utc.with_ymd_and_hms(2025, 3, 30, 0, 1, 0).unwrap(),
        ..params.key()
    };

    assert!(repo.get_by_key(&other_tutor).await?.is_none());
    assert!(repo.get_by_key(&other_time).await?.is_none());

    Ok(())
}

/// Tests that roster entries come back in insertion order.
///
/// Expected: Ok(Some) with students ordered as created
#[tokio::test]
async fn returns_roster_in_enrollment_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (session, students) = factory::helpers::create_session_with_students(db, 3).await?;

    let repo = SessionRepository::new(db);
    let key = SessionKey {
        name: session.name.clone(),
        tutor_id: session.tutor_id.clone(),
        date: session.session_date,
    };
    let found = repo.get_by_key(&key).await?.unwrap();

    let ids: Vec<&str> = found.students.iter().map(|s| s.student_id.as_str()).collect();
    let expected: Vec<&str> = students.iter().map(|s| s.student_id.as_str()).collect();
    assert_eq!(ids, expected);

    Ok(())
}
