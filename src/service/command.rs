//! Routing of text commands.
//!
//! `CommandService::handle` takes one `Invocation` and produces a `CommandOutcome`
//! describing what the bot should do. Nothing here talks to Discord, so routing,
//! authorization and the store side of every command are testable against SQLite.

use sea_orm::DatabaseConnection;

use crate::{
    error::AppError,
    model::{
        command::{Application, Command, CommandKind, CommandOutcome, Invocation, HELP_TOKEN},
        session::{Enrollment, SetSessionParams, Upsert},
    },
    service::{permission::RolePolicy, session::SessionService},
    util::command::{parse_command, split_command, tokenize},
};

pub const HELP_TEXT: &str = "Hey! Here is what I can do:
`.apply <scheduleName>` - apply to a tutoring session, a private thread opens with payment details
Staff only:
`.create <name> <YYYY-MM-DD> <HH:MM> <sessionHours> <tutorName> <tutorID>` - create or overwrite a session
`.cancel <name> <tutorID> <YYYY-MM-DD> <HH:MM>` - cancel a session
`.add <name> <studentName> <studentId>` - enroll a student who has paid
`.add <name> <tutorID> <YYYY-MM-DD> <HH:MM> <studentName> <studentId>` - add a student to an exact session
`.remove <name> <tutorID> <YYYY-MM-DD> <HH:MM> <studentId>` - remove a student from a session
Use double quotes for names with spaces, e.g. `.apply \"Math 101\"`.";

pub struct CommandService<'a> {
    db: &'a DatabaseConnection,
    policy: &'a RolePolicy,
    hourly_rate: u32,
}

impl<'a> CommandService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: &'a RolePolicy, hourly_rate: u32) -> Self {
        Self {
            db,
            policy,
            hourly_rate,
        }
    }

    /// Routes a message to its command and runs it.
    ///
    /// # Arguments
    /// - `invocation` - Message content plus the author's id, name and roles
    ///
    /// # Returns
    /// - `Ok(CommandOutcome::Ignored)` - Not a command, or the author lacks permission
    /// - `Ok(outcome)` - Side effect the caller should perform
    /// - `Err(AppError::CommandErr)` - Missing or malformed arguments
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn handle(&self, invocation: &Invocation) -> Result<CommandOutcome, AppError> {
        let Some((kind, rest)) = split_command(&invocation.content) else {
            return Ok(CommandOutcome::Ignored);
        };

        // `.help` only answers to the bare token
        if kind == CommandKind::Help && invocation.content.trim() != HELP_TOKEN {
            return Ok(CommandOutcome::Ignored);
        }

        if !self.policy.permits(kind.permission(), &invocation.role_ids) {
            tracing::debug!(
                "Ignoring {:?} from {} ({}): missing permission",
                kind,
                invocation.author_name,
                invocation.author_id
            );
            return Ok(CommandOutcome::Ignored);
        }

        let args = tokenize(rest)?;
        let command = parse_command(kind, &args)?;

        self.execute(command, invocation).await
    }

    async fn execute(
        &self,
        command: Command,
        invocation: &Invocation,
    ) -> Result<CommandOutcome, AppError> {
        let sessions = SessionService::new(self.db);

        let outcome = match command {
            Command::Help => CommandOutcome::Reply(HELP_TEXT.to_string()),
            Command::Create {
                name,
                date,
                session_hours,
                tutor_name,
                tutor_id,
            } => {
                let params = SetSessionParams {
                    name,
                    date,
                    session_hours,
                    tutor_name,
                    tutor_id,
                    students: Vec::new(),
                };
                let (session, upsert) = sessions.set_session(params).await?;
                let verb = match upsert {
                    Upsert::Created => "created",
                    Upsert::Updated => "updated",
                };

                CommandOutcome::Reply(format!(
                    "Session {} with {} on {} for {} hour(s) {}.",
                    session.name,
                    session.tutor_name,
                    session.date.format("%Y-%m-%d %H:%M"),
                    session.session_hours,
                    verb
                ))
            }
            Command::Cancel { key } => {
                if sessions.remove_session(&key).await? {
                    CommandOutcome::Reply(format!("Session {} cancelled.", key.name))
                } else {
                    CommandOutcome::Reply(format!("No session {} found to cancel.", key.name))
                }
            }
            Command::AddStudent { key, student } => {
                let student_name = student.student_name.clone();
                if sessions.add_student_to_session(&key, student).await? {
                    CommandOutcome::Reply(format!(
                        "{} added to session {}.",
                        student_name, key.name
                    ))
                } else {
                    CommandOutcome::Reply(format!("No session {} found.", key.name))
                }
            }
            Command::Enroll { name, student } => {
                match sessions
                    .apply_to_session(&name, &student.student_name, &student.student_id)
                    .await?
                {
                    Enrollment::Enrolled => CommandOutcome::Enrolled {
                        reply: format!("{} enrolled in {}.", student.student_name, name),
                        student_id: student.student_id,
                        session_name: name,
                    },
                    Enrollment::AlreadyEnrolled => CommandOutcome::Reply(format!(
                        "{} is already enrolled in {}.",
                        student.student_name, name
                    )),
                    Enrollment::SessionNotFound => {
                        CommandOutcome::Reply(format!("No session named {} found.", name))
                    }
                }
            }
            Command::RemoveStudent { key, student_id } => {
                match sessions
                    .remove_student_from_session(&key, &student_id)
                    .await?
                {
                    Some(0) => CommandOutcome::Reply(format!(
                        "{} is not enrolled in {}.",
                        student_id, key.name
                    )),
                    Some(count) => CommandOutcome::Reply(format!(
                        "Removed {} entry(ies) for {} from {}.",
                        count, student_id, key.name
                    )),
                    None => CommandOutcome::Reply(format!("No session {} found.", key.name)),
                }
            }
            Command::Apply { schedule_name } => {
                match sessions.get_session_by_name(&schedule_name).await? {
                    Some(session) => {
                        let cost = session.cost(self.hourly_rate);
                        CommandOutcome::OpenApplication(Application {
                            session,
                            cost,
                            applicant_id: invocation.author_id,
                            applicant_name: invocation.author_name.clone(),
                        })
                    }
                    None => CommandOutcome::Reply(format!(
                        "No session named {} found.",
                        schedule_name
                    )),
                }
            }
            Command::ClearThreads => CommandOutcome::ClearThreads,
        };

        Ok(outcome)
    }
}
