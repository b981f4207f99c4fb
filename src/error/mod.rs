//! Error types for the bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors. Unlike a web backend
//! there is no response mapping here: the message handler decides what a user sees
//! based on the variant (`CommandErr` becomes a usage reply, Discord errors are only
//! logged, everything else gets a generic failure reply with the details logged).

pub mod command;
pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{command::CommandError, config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Fatal: the process exits since the bot cannot run without its configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Invalid command invocation (missing or malformed arguments).
    ///
    /// The display text is safe to show to the invoking user.
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// Unexpected internal state indicating a possible bug.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Message shown to the Discord user who triggered the error.
    ///
    /// Command errors carry their own user-facing text; every other variant is
    /// reduced to a generic message so internal details only reach the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::CommandErr(err) => err.to_string(),
            _ => "Something went wrong while handling that command, please try again later."
                .to_string(),
        }
    }

    /// Text to reply with after a failed command, if a reply can still be delivered.
    ///
    /// Discord errors get no reply: the failed call was usually the reply itself, or
    /// removed the channel it would go to.
    pub fn reply_text(&self) -> Option<String> {
        match self {
            Self::DiscordErr(_) => None,
            _ => Some(self.user_message()),
        }
    }
}
