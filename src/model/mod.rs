//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary so the
//! service layer and the bot handlers never touch SeaORM types directly.

pub mod command;
pub mod session;
