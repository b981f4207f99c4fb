//! Discord gateway integration.
//!
//! The bot assigns the member role to new members, welcomes them by direct message,
//! and answers text commands posted in guild channels.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel data for thread management
//! - `GUILD_MEMBERS` - Member join events (privileged intent)
//! - `GUILD_MESSAGES` - Message events in guild channels
//! - `MESSAGE_CONTENT` - Text of those messages (privileged intent)
//!
//! Note: `GUILD_MEMBERS` and `MESSAGE_CONTENT` are privileged intents and must be
//! explicitly enabled in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
