//! Discord side effects.
//!
//! These services hold the serenity HTTP client and perform the platform actions that
//! follow a command outcome or gateway event.

pub mod application;
pub mod member;
pub mod thread;
