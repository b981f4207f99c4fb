//! Message event handler.
//!
//! Builds an `Invocation` from each guild message, routes it through the command
//! service, then performs the resulting Discord side effect.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildId, Message};

use crate::{
    bot::handler::BotSettings,
    error::AppError,
    model::command::{CommandOutcome, Invocation},
    service::{
        command::CommandService,
        discord::{
            application::ApplicationThreadService, member::MemberService, thread::ThreadService,
        },
    },
};

/// Handle message creation in a channel
pub async fn handle_message(
    db: &DatabaseConnection,
    settings: &BotSettings,
    ctx: Context,
    message: Message,
) {
    if message.author.bot {
        return;
    }

    // Commands only run in guild channels (not DMs)
    let Some(guild_id) = message.guild_id else {
        return;
    };

    if let Err(e) = route_message(db, settings, &ctx, guild_id, &message).await {
        match &e {
            AppError::CommandErr(_) => tracing::debug!(
                "Invalid command from {}: {}",
                message.author.name,
                e
            ),
            _ => tracing::error!(
                "Failed to handle message {} from {}: {}",
                message.id,
                message.author.name,
                e
            ),
        }

        let Some(reply) = e.reply_text() else {
            return;
        };

        if let Err(e) = message.reply(&ctx, reply).await {
            tracing::error!("Failed to send error reply: {}", e);
        }
    }
}

async fn route_message(
    db: &DatabaseConnection,
    settings: &BotSettings,
    ctx: &Context,
    guild_id: GuildId,
    message: &Message,
) -> Result<(), AppError> {
    // Skip ordinary chat before fetching roles
    if !message.content.trim_start().starts_with('.') {
        return Ok(());
    }

    let invocation = Invocation {
        author_id: message.author.id.get(),
        author_name: message.author.name.clone(),
        role_ids: author_roles(ctx, guild_id, message).await?,
        content: message.content.clone(),
    };

    let outcome = CommandService::new(db, &settings.policy, settings.hourly_rate)
        .handle(&invocation)
        .await?;

    match outcome {
        CommandOutcome::Ignored => {}
        CommandOutcome::Reply(text) => {
            message.reply(ctx, text).await?;
        }
        CommandOutcome::Enrolled {
            reply,
            student_id,
            session_name,
        } => {
            message.reply(ctx, reply).await?;

            if let Err(e) = MemberService::new(ctx.http.clone())
                .notify_enrollment(&student_id, &session_name)
                .await
            {
                tracing::warn!(
                    "Could not notify student {} of enrollment in {}: {}",
                    student_id,
                    session_name,
                    e
                );
            }
        }
        CommandOutcome::OpenApplication(application) => {
            ApplicationThreadService::new(ctx.http.clone())
                .open_application(
                    message.channel_id,
                    guild_id,
                    &application,
                    &settings.payment_instructions,
                )
                .await?;
        }
        CommandOutcome::ClearThreads => {
            let cleanup = ThreadService::new(ctx.http.clone())
                .clear_threads(guild_id)
                .await?;
            message.reply(ctx, cleanup.summary()).await?;
        }
    }

    Ok(())
}

/// Role ids of the message author, fetching the member when the event omits them.
async fn author_roles(
    ctx: &Context,
    guild_id: GuildId,
    message: &Message,
) -> Result<Vec<u64>, AppError> {
    if let Some(member) = &message.member {
        return Ok(member.roles.iter().map(|role| role.get()).collect());
    }

    let member = guild_id.member(ctx, message.author.id).await?;

    Ok(member.roles.iter().map(|role| role.get()).collect())
}
