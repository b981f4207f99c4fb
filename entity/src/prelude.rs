pub use super::session_student::Entity as SessionStudent;
pub use super::tutoring_session::Entity as TutoringSession;
