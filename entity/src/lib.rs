//! SeaORM entity definitions for the tutoring bot database.

pub mod prelude;

pub mod session_student;
pub mod tutoring_session;
