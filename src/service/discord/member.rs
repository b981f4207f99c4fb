//! New member onboarding.

use serenity::{
    all::{CreateMessage, Member, RoleId, UserId},
    http::Http,
};
use std::sync::Arc;

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Direct message sent to every member who joins.
pub fn welcome_message(username: &str) -> String {
    format!(
        "Welcome, {}! Make sure to take a look around the server, and if you have any questions, type \".help\" in \"bot-commands\".",
        username
    )
}

/// Direct message sent to a student once staff confirm their enrollment.
pub fn enrollment_message(session_name: &str) -> String {
    format!(
        "You have been enrolled in {}. See you at the session!",
        session_name
    )
}

pub struct MemberService {
    http: Arc<Http>,
}

impl MemberService {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Gives a new member the member role and sends the welcome message.
    ///
    /// Both steps run regardless of the other's result; failures are logged.
    ///
    /// # Arguments
    /// - `member` - Member who just joined
    /// - `member_role_id` - Role assigned to every new member
    pub async fn onboard(&self, member: &Member, member_role_id: u64) {
        let role_id = RoleId::new(member_role_id);
        match member.add_role(&self.http, role_id).await {
            Ok(()) => tracing::info!("Gave role {} to {}", role_id, member.user.name),
            Err(e) => tracing::error!(
                "Failed to give role {} to {}: {}",
                role_id,
                member.user.name,
                e
            ),
        }

        let message = CreateMessage::new().content(welcome_message(&member.user.name));
        if let Err(e) = member.user.direct_message(&self.http, message).await {
            tracing::warn!("Failed to send welcome message to {}: {}", member.user.name, e);
        }
    }
}

impl MemberService {
    /// Tells a student they were enrolled in a session.
    ///
    /// # Arguments
    /// - `student_id` - Discord user id of the student, as stored on the roster
    /// - `session_name` - Session the student was enrolled in
    ///
    /// # Returns
    /// - `Ok(())` - Message delivered
    /// - `Err(AppError::InternalErr)` - Student id is not a Discord id
    /// - `Err(AppError::DiscordErr)` - The student does not accept direct messages
    pub async fn notify_enrollment(
        &self,
        student_id: &str,
        session_name: &str,
    ) -> Result<(), AppError> {
        let user_id = UserId::new(parse_u64_from_string(student_id)?);
        let message = CreateMessage::new().content(enrollment_message(session_name));
        user_id.direct_message(&self.http, message).await?;

        Ok(())
    }
}
