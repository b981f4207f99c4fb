use super::*;

/// Tests appending places the new student after existing ones.
///
/// Expected: Ok(true) with roster order preserved
#[tokio::test]
async fn appends_student_at_end_of_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let key = store_math_101(db).await?;
    let repo = SessionStudentRepository::new(db);

    assert!(repo.append(&key, Student::new("Jane Smith", "stu123")).await?);
    assert!(repo.append(&key, Student::new("Jake White", "stu456")).await?);
    assert!(repo.append(&key, Student::new("John Doe", "stu789")).await?);

    assert_eq!(roster_ids(db, &key).await?, vec!["stu123", "stu456", "stu789"]);

    Ok(())
}

/// Tests appending does not check for duplicates.
///
/// Expected: Ok(true) twice with two identical entries
#[tokio::test]
async fn allows_duplicate_student_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let key = store_math_101(db).await?;
    let repo = SessionStudentRepository::new(db);

    repo.append(&key, Student::new("Jane Smith", "stu123")).await?;
    repo.append(&key, Student::new("Jane Smith", "stu123")).await?;

    assert_eq!(roster_ids(db, &key).await?, vec!["stu123", "stu123"]);

    Ok(())
}

/// Tests appending to a missing session.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let key = store_math_101(db).await?;
    let missing = SessionKey {
        name: "Math 102".to_string(),
        ..key
    };

    let repo = SessionStudentRepository::new(db);
    let appended = repo
        .append(&missing, Student::new("Jane Smith", "stu123"))
        .await?;

    assert!(!appended);

    Ok(())
}
