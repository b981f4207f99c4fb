//! Ready event handler.

use serenity::all::{ActivityData, Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("Logged in as {}", ready.user.tag());

    ctx.set_activity(Some(ActivityData::custom("Type .help for commands")));
}
