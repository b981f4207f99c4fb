//! Bulk thread cleanup for `.clearThreads`.

use serenity::{
    all::{ChannelId, ChannelType, GuildChannel, GuildId},
    http::Http,
};
use std::sync::Arc;

use crate::error::AppError;

/// Archived threads fetched per channel and visibility.
const ARCHIVED_THREAD_LIMIT: u64 = 100;

/// Result of a cleanup run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ThreadCleanup {
    pub deleted: usize,
    pub failed: usize,
}

impl ThreadCleanup {
    fn record(&mut self, deleted: bool) {
        if deleted {
            self.deleted += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Reply sent to the owner after cleanup.
    pub fn summary(&self) -> String {
        if self.failed == 0 {
            format!("Deleted {} thread(s).", self.deleted)
        } else {
            format!(
                "Deleted {} thread(s), {} could not be deleted.",
                self.deleted, self.failed
            )
        }
    }
}

pub struct ThreadService {
    http: Arc<Http>,
}

impl ThreadService {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Deletes every active thread in the guild plus up to 100 archived public and
    /// private threads per text channel.
    ///
    /// Failures on single threads are logged and counted, not returned.
    ///
    /// # Returns
    /// - `Ok(ThreadCleanup)` - Deleted and failed counts
    /// - `Err(AppError::DiscordErr)` - Listing guild channels or active threads failed
    pub async fn clear_threads(&self, guild_id: GuildId) -> Result<ThreadCleanup, AppError> {
        let mut cleanup = ThreadCleanup::default();

        let active = guild_id.get_active_threads(&self.http).await?;
        for thread in &active.threads {
            cleanup.record(self.delete_thread(thread).await);
        }

        let channels = guild_id.channels(&self.http).await?;
        for channel_id in text_channel_ids(channels.values()) {
            for thread in self.archived_threads(channel_id).await {
                cleanup.record(self.delete_thread(&thread).await);
            }
        }

        tracing::info!(
            "Cleared threads in guild {}: {} deleted, {} failed",
            guild_id,
            cleanup.deleted,
            cleanup.failed
        );

        Ok(cleanup)
    }

    async fn archived_threads(&self, channel_id: ChannelId) -> Vec<GuildChannel> {
        let mut threads = Vec::new();

        match channel_id
            .get_archived_public_threads(&self.http, None, Some(ARCHIVED_THREAD_LIMIT))
            .await
        {
            Ok(data) => threads.extend(data.threads),
            Err(e) => tracing::error!(
                "Failed to fetch archived public threads in {}: {}",
                channel_id,
                e
            ),
        }

        match channel_id
            .get_archived_private_threads(&self.http, None, Some(ARCHIVED_THREAD_LIMIT))
            .await
        {
            Ok(data) => threads.extend(data.threads),
            Err(e) => tracing::error!(
                "Failed to fetch archived private threads in {}: {}",
                channel_id,
                e
            ),
        }

        threads
    }

    async fn delete_thread(&self, thread: &GuildChannel) -> bool {
        match thread.id.delete(&self.http).await {
            Ok(_) => {
                tracing::debug!("Deleted thread {} ({})", thread.name, thread.id);
                true
            }
            Err(e) => {
                tracing::error!("Failed to delete thread {} ({}): {}", thread.name, thread.id, e);
                false
            }
        }
    }
}

/// Ids of channels that can hold threads.
fn text_channel_ids<'a>(channels: impl Iterator<Item = &'a GuildChannel>) -> Vec<ChannelId> {
    channels
        .filter(|channel| matches!(channel.kind, ChannelType::Text | ChannelType::News))
        .map(|channel| channel.id)
        .collect()
}
