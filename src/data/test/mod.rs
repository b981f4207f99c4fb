mod session;
mod session_student;
