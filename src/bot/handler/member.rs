use serenity::all::{Context, Member};

use crate::{bot::handler::BotSettings, service::discord::member::MemberService};

/// Handle a member joining the guild
pub async fn handle_guild_member_addition(settings: &BotSettings, ctx: Context, new_member: Member) {
    tracing::info!(
        "{} joined guild {}",
        new_member.user.name,
        new_member.guild_id
    );

    MemberService::new(ctx.http.clone())
        .onboard(&new_member, settings.member_role_id)
        .await;
}
