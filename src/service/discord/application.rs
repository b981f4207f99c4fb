//! Private application threads.
//!
//! An `.apply` opens an invite-only thread in the channel it was sent from, adds the
//! applicant and the guild owner, and posts the session details with the amount due.

use serenity::{
    all::{
        ChannelId, ChannelType, CreateEmbed, CreateEmbedFooter, CreateMessage, CreateThread,
        GuildId, UserId,
    },
    http::Http,
};
use std::{future::Future, sync::Arc};

use crate::{error::AppError, model::command::Application};

/// Discord limit for channel and thread names.
const MAX_THREAD_NAME_LEN: usize = 100;

/// Green, matching the "ready to pay" state of an application.
const APPLICATION_COLOR: u32 = 0x2ecc71;

pub struct ApplicationThreadService {
    http: Arc<Http>,
}

impl ApplicationThreadService {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Opens a private thread for an application and posts the payment embed.
    ///
    /// Failing to add the guild owner is logged and does not abort the application.
    ///
    /// # Arguments
    /// - `channel_id` - Channel the `.apply` was sent in
    /// - `guild_id` - Guild owning the channel
    /// - `application` - Session, cost and applicant
    /// - `payment_instructions` - Text appended after the amount due
    ///
    /// # Returns
    /// - `Ok(ChannelId)` - Id of the new thread
    /// - `Err(AppError::DiscordErr)` - Thread creation, member add or posting failed
    pub async fn open_application(
        &self,
        channel_id: ChannelId,
        guild_id: GuildId,
        application: &Application,
        payment_instructions: &str,
    ) -> Result<ChannelId, AppError> {
        let name = thread_name(&application.session.name, &application.applicant_name);
        let thread = channel_id
            .create_thread(
                &self.http,
                CreateThread::new(name)
                    .kind(ChannelType::PrivateThread)
                    .invitable(false),
            )
            .await?;

        let joined = thread
            .id
            .add_thread_member(&self.http, UserId::new(application.applicant_id))
            .await;
        discard_on_err(joined, || async {
            tracing::warn!(
                "Could not add applicant {} to thread {}, deleting it",
                application.applicant_id,
                thread.id
            );
            if let Err(e) = thread.id.delete(&self.http).await {
                tracing::error!("Failed to delete empty thread {}: {}", thread.id, e);
            }
        })
        .await?;

        match guild_id.to_partial_guild(&self.http).await {
            Ok(guild) => {
                if let Err(e) = thread.id.add_thread_member(&self.http, guild.owner_id).await {
                    tracing::warn!(
                        "Failed to add guild owner {} to thread {}: {}",
                        guild.owner_id,
                        thread.id,
                        e
                    );
                }
            }
            Err(e) => tracing::warn!("Failed to fetch guild {}: {}", guild_id, e),
        }

        let message = CreateMessage::new()
            .content(format!("<@{}>", application.applicant_id))
            .embed(build_application_embed(application, payment_instructions));
        thread.id.send_message(&self.http, message).await?;

        tracing::info!(
            "Opened application thread {} for {} in session {}",
            thread.id,
            application.applicant_id,
            application.session.name
        );

        Ok(thread.id)
    }
}

/// Text telling the applicant how much to pay and how.
pub fn payment_message(cost: u64, payment_instructions: &str) -> String {
    format!("The total for this session is ${}. {}", cost, payment_instructions)
}

/// Runs `discard` before passing an error on, so a half-built resource is removed.
async fn discard_on_err<T, E, F, Fut>(result: Result<T, E>, discard: F) -> Result<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    if result.is_err() {
        discard().await;
    }

    result
}

/// Thread name for an application, cut to the Discord limit.
fn thread_name(session_name: &str, applicant_name: &str) -> String {
    format!("{} - {}", session_name, applicant_name)
        .chars()
        .take(MAX_THREAD_NAME_LEN)
        .collect()
}

fn build_application_embed(application: &Application, payment_instructions: &str) -> CreateEmbed {
    let session = &application.session;

    CreateEmbed::new()
        .title(format!("Application: {}", session.name))
        .color(APPLICATION_COLOR)
        .field("Tutor", &session.tutor_name, true)
        .field(
            "Date",
            format!(
                "{} UTC (<t:{}:F>)",
                session.date.format("%Y-%m-%d %H:%M"),
                session.date.timestamp()
            ),
            false,
        )
        .field("Hours", session.session_hours.to_string(), true)
        .field("Cost", format!("${}", application.cost), true)
        .field(
            "Payment",
            payment_message(application.cost, payment_instructions),
            false,
        )
        .footer(CreateEmbedFooter::new(format!(
            "Applicant: {}",
            application.applicant_name
        )))
}
