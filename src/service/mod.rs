//! Business logic between the bot handlers and the data layer.
//!
//! - `session` - Session store operations with outcome logging
//! - `permission` - Role based authorization
//! - `command` - Text command routing, producing transport-independent outcomes
//! - `discord` - Discord side effects (application threads, thread cleanup, welcome)

pub mod command;
pub mod discord;
pub mod permission;
pub mod session;
