//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let session = factory::create_session(&db).await?;
//!     let student = factory::create_student(&db, session.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let session = factory::tutoring_session::SessionFactory::new(&db)
//!     .name("Math 101")
//!     .tutor_id("12345")
//!     .session_hours(2)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod session_student;
pub mod tutoring_session;

pub use session_student::create_student;
pub use tutoring_session::create_session;
