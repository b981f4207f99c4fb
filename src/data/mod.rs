//! Database repository layer.
//!
//! Repositories handle database operations (CRUD) for tutoring sessions and their
//! rosters. They use SeaORM entity models internally and return domain models so the
//! service layer never depends on database-specific structures. Repositories borrow the
//! connection they are given, which keeps them usable against an in-memory database in
//! tests.

pub mod session;
pub mod session_student;

#[cfg(test)]
mod test;
