use super::*;

/// Tests the add-then-remove scenario for a single student.
///
/// Expected: roster of one after adding, empty after removing
#[tokio::test]
async fn removes_added_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let key = store_math_101(db).await?;
    let repo = SessionStudentRepository::new(db);

    repo.append(&key, Student::new("Jane Smith", "stu123")).await?;
    let session = SessionRepository::new(db).get_by_key(&key).await?.unwrap();
    assert_eq!(session.students, vec![Student::new("Jane Smith", "stu123")]);

    let removed = repo.remove(&key, "stu123").await?;

    assert_eq!(removed, Some(1));
    assert!(roster_ids(db, &key).await?.is_empty());

    Ok(())
}

/// Tests that every entry with the id is removed and no other.
///
/// Expected: Ok(Some(2)) with only the other students left, in order
#[tokio::test]
async fn removes_all_matching_entries_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let key = store_math_101(db).await?;
    let repo = SessionStudentRepository::new(db);

    repo.append(&key, Student::new("Jane Smith", "stu123")).await?;
    repo.append(&key, Student::new("Jake White", "stu456")).await?;
    repo.append(&key, Student::new("Jane Smith", "stu123")).await?;
    repo.append(&key, Student::new("John Doe", "stu789")).await?;

    let removed = repo.remove(&key, "stu123").await?;

    assert_eq!(removed, Some(2));
    assert_eq!(roster_ids(db, &key).await?, vec!["stu456", "stu789"]);

    Ok(())
}

/// Tests removal only touches the addressed session.
///
/// Expected: the other session's roster is unchanged
#[tokio::test]
async fn leaves_other_sessions_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let key = store_math_101(db).await?;
    let other = factory::create_session(db).await?;
    factory::session_student::StudentFactory::new(db, other.id)
        .student_id("stu123")
        .build()
        .await?;

    let repo = SessionStudentRepository::new(db);
    repo.append(&key, Student::new("Jane Smith", "stu123")).await?;
    repo.remove(&key, "stu123").await?;

    let other_key = SessionKey {
        name: other.name,
        tutor_id: other.tutor_id,
        date: other.session_date,
    };
    assert_eq!(roster_ids(db, &other_key).await?, vec!["stu123"]);

    Ok(())
}

/// Tests removal from a missing session and of a missing student.
///
/// Expected: Ok(None) for the session, Ok(Some(0)) for the student
#[tokio::test]
async fn distinguishes_missing_session_from_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let key = store_math_101(db).await?;
    let missing = SessionKey {
        tutor_id: "54321".to_string(),
        ..key.clone()
    };

    let repo = SessionStudentRepository::new(db);

    assert_eq!(repo.remove(&missing, "stu123").await?, None);
    assert_eq!(repo.remove(&key, "stu123").await?, Some(0));

    Ok(())
}
