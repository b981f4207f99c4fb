use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Member, Message, Ready};
use serenity::async_trait;
use std::sync::Arc;

use crate::{config::Config, service::permission::RolePolicy};

pub mod member;
pub mod message;
pub mod ready;

/// Settings the handlers need from the configuration.
pub struct BotSettings {
    pub policy: RolePolicy,
    pub member_role_id: u64,
    pub hourly_rate: u32,
    pub payment_instructions: String,
}

impl BotSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            policy: RolePolicy::from_config(config),
            member_role_id: config.member_role_id,
            hourly_rate: config.hourly_rate,
            payment_instructions: config.payment_instructions.clone(),
        }
    }
}

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub settings: Arc<BotSettings>,
}

impl Handler {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            settings: Arc::new(BotSettings::from_config(config)),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.settings, ctx, new_member).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.db, &self.settings, ctx, message).await;
    }
}
