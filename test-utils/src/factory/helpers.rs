//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a session with the given number of default students on its roster.
///
/// Students are inserted in order, so the returned vector matches roster order.
///
/// # Arguments
/// - `db` - Database connection
/// - `student_count` - Number of students to enroll
///
/// # Returns
/// - `Ok((session, students))` - Created session and its students
/// - `Err(DbErr)` - Database error during creation
pub async fn create_session_with_students(
    db: &DatabaseConnection,
    student_count: usize,
) -> Result<
    (
        entity::tutoring_session::Model,
        Vec<entity::session_student::Model>,
    ),
    DbErr,
> {
    let session = crate::factory::tutoring_session::create_session(db).await?;

    let mut students = Vec::with_capacity(student_count);
    for _ in 0..student_count {
        students.push(crate::factory::session_student::create_student(db, session.id).await?);
    }

    Ok((session, students))
}
