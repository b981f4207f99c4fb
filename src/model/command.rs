//! Domain models for text commands.
//!
//! A message is routed in two steps: its first token selects a `CommandKind` (which
//! fixes the permission needed), and only after the sender is authorized are the
//! remaining tokens parsed into a typed `Command`. Both steps are independent of the
//! Discord transport so routing can be tested against a plain `Invocation`.

use chrono::{DateTime, Utc};

use super::session::{Session, SessionKey, Student};

/// Exact content that triggers the static help reply.
pub const HELP_TOKEN: &str = ".help";

/// Who may run a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Any guild member.
    Everyone,
    /// Members holding at least one allowed role (or the owner role).
    Staff,
    /// Members holding the owner role.
    Owner,
}

/// The command selected by the first token of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Create,
    Cancel,
    Add,
    Remove,
    Apply,
    ClearThreads,
}

impl CommandKind {
    /// Matches a command literal. Matching is case sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            HELP_TOKEN => Some(Self::Help),
            ".create" => Some(Self::Create),
            ".cancel" => Some(Self::Cancel),
            ".add" => Some(Self::Add),
            ".remove" => Some(Self::Remove),
            ".apply" => Some(Self::Apply),
            ".clearThreads" => Some(Self::ClearThreads),
            _ => None,
        }
    }

    pub fn permission(self) -> Permission {
        match self {
            Self::Help | Self::Apply => Permission::Everyone,
            Self::Create | Self::Cancel | Self::Add | Self::Remove => Permission::Staff,
            Self::ClearThreads => Permission::Owner,
        }
    }

    /// Usage line shown when arguments are missing or malformed.
    pub fn usage(self) -> &'static str {
        match self {
            Self::Help => ".help",
            Self::Create => {
                ".create <name> <YYYY-MM-DD> <HH:MM> <sessionHours> <tutorName> <tutorID>"
            }
            Self::Cancel => ".cancel <name> <tutorID> <YYYY-MM-DD> <HH:MM>",
            Self::Add => {
                ".add <name> <studentName> <studentId> | .add <name> <tutorID> <YYYY-MM-DD> <HH:MM> <studentName> <studentId>"
            }
            Self::Remove => ".remove <name> <tutorID> <YYYY-MM-DD> <HH:MM> <studentId>",
            Self::Apply => ".apply <scheduleName>",
            Self::ClearThreads => ".clearThreads",
        }
    }
}

/// A fully parsed command with typed arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Create {
        name: String,
        date: DateTime<Utc>,
        session_hours: u32,
        tutor_name: String,
        tutor_id: String,
    },
    Cancel {
        key: SessionKey,
    },
    /// Staff appends a student to the session addressed by its natural key.
    AddStudent {
        key: SessionKey,
        student: Student,
    },
    /// Staff enrolls a student by session name after payment; the student is notified.
    Enroll {
        name: String,
        student: Student,
    },
    RemoveStudent {
        key: SessionKey,
        student_id: String,
    },
    Apply {
        schedule_name: String,
    },
    ClearThreads,
}

/// One message as seen by the router, stripped of transport details.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Discord id of the author.
    pub author_id: u64,
    /// Display name of the author.
    pub author_name: String,
    /// Role ids the author holds in the guild.
    pub role_ids: Vec<u64>,
    /// Raw message content.
    pub content: String,
}

/// Everything needed to open a private application thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub session: Session,
    /// Total price, `session_hours * hourly_rate`.
    pub cost: u64,
    pub applicant_id: u64,
    pub applicant_name: String,
}

/// What the bot should do in response to a message.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// Not a command, or the sender is not allowed to run it.
    Ignored,
    /// Reply to the message with this text.
    Reply(String),
    /// Reply to the message, then direct-message the enrolled student.
    Enrolled {
        reply: String,
        student_id: String,
        session_name: String,
    },
    /// Open a private thread for the applicant with payment instructions.
    OpenApplication(Application),
    /// Delete every thread in the guild.
    ClearThreads,
}
