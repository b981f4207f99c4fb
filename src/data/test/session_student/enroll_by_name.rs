use super::*;

/// Tests enrolling a new student by session name.
///
/// Expected: Ok(Enrolled) with the student on the roster
#[tokio::test]
async fn enrolls_new_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let key = store_math_101(db).await?;
    let repo = SessionStudentRepository::new(db);

    let result = repo
        .enroll_by_name("Math 101", Student::new("Jane Smith", "stu123"))
        .await?;

    assert_eq!(result, Enrollment::Enrolled);
    assert!(result.is_success());
    assert_eq!(roster_ids(db, &key).await?, vec!["stu123"]);

    Ok(())
}

/// Tests enrolling the same student id twice.
///
/// Expected: Ok(AlreadyEnrolled) the second time with a single roster entry
#[tokio::test]
async fn refuses_duplicate_student_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let key = store_math_101(db).await?;
    let repo = SessionStudentRepository::new(db);

    repo.enroll_by_name("Math 101", Student::new("Jane Smith", "stu123"))
        .await?;
    let second = repo
        .enroll_by_name("Math 101", Student::new("Jane S.", "stu123"))
        .await?;

    assert_eq!(second, Enrollment::AlreadyEnrolled);
    assert!(!second.is_success());
    assert_eq!(roster_ids(db, &key).await?, vec!["stu123"]);

    Ok(())
}

/// Tests enrolling into an unknown session name.
///
/// Expected: Ok(SessionNotFound)
#[tokio::test]
async fn reports_unknown_session_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    store_math_101(db).await?;
    let repo = SessionStudentRepository::new(db);

    let result = repo
        .enroll_by_name("Physics", Student::new("Jane Smith", "stu123"))
        .await?;

    assert_eq!(result, Enrollment::SessionNotFound);

    Ok(())
}

/// Tests that a shared name resolves to the earliest session.
///
/// Expected: the earliest session gains the student, the later one does not
#[tokio::test]
async fn enrolls_into_earliest_session_with_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let late = factory::tutoring_session::SessionFactory::new(db)
        .name("Math 101")
        .session_date(Utc.with_ymd_and_hms(2025, 4, 6, 0, 0, 0).unwrap())
        .build()
        .await?;
    let early_key = store_math_101(db).await?;

    let repo = SessionStudentRepository::new(db);
    repo.enroll_by_name("Math 101", Student::new("Jane Smith", "stu123"))
        .await?;

    let late_key = SessionKey {
        name: late.name,
        tutor_id: late.tutor_id,
        date: late.session_date,
    };
    assert_eq!(roster_ids(db, &early_key).await?, vec!["stu123"]);
    assert!(roster_ids(db, &late_key).await?.is_empty());

    Ok(())
}
