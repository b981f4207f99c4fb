//! Command text parsing.
//!
//! Arguments are whitespace separated. A double-quoted argument may contain spaces
//! (`.apply "Math 101"`); quotes inside a bare word are kept literally.

use chrono::NaiveDate;

use crate::{
    error::command::CommandError,
    model::{
        command::{Command, CommandKind},
        session::{SessionKey, Student},
    },
    util::parse::{parse_session_date, DATE_FORMAT},
};

/// Splits a message into its command kind and the raw text after it.
///
/// # Returns
/// - `Some((kind, rest))` - The first token is a known command literal
/// - `None` - Empty message or unknown first token
pub fn split_command(content: &str) -> Option<(CommandKind, &str)> {
    let content = content.trim_start();
    let end = content
        .find(char::is_whitespace)
        .unwrap_or(content.len());
    let (token, rest) = content.split_at(end);

    CommandKind::from_token(token).map(|kind| (kind, rest))
}

/// Splits argument text into tokens, honouring double quotes.
///
/// # Returns
/// - `Ok(Vec<String>)` - Tokens in order; `""` yields an empty token
/// - `Err(CommandError::UnterminatedQuote)` - A quoted token was never closed
pub fn tokenize(input: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if c == '"' {
            chars.next();
            let mut token = String::new();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '"' {
                    closed = true;
                    break;
                }
                token.push(c);
            }
            if !closed {
                return Err(CommandError::UnterminatedQuote);
            }
            tokens.push(token);
        } else {
            let mut token = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                token.push(c);
                chars.next();
            }
            tokens.push(token);
        }
    }

    Ok(tokens)
}

/// Parses the arguments of a command into its typed form.
///
/// Trailing arguments beyond what the command needs are ignored.
///
/// # Arguments
/// - `kind` - Command selected by the first token
/// - `args` - Tokens following the command literal
///
/// # Returns
/// - `Ok(Command)` - Typed command ready to execute
/// - `Err(CommandError)` - Too few arguments, or an argument failed to parse
pub fn parse_command(kind: CommandKind, args: &[String]) -> Result<Command, CommandError> {
    let usage = kind.usage();
    let require = |count: usize| {
        if args.len() < count {
            Err(CommandError::MissingArguments { usage })
        } else {
            Ok(())
        }
    };

    match kind {
        CommandKind::Help => Ok(Command::Help),
        CommandKind::Create => {
            require(6)?;
            Ok(Command::Create {
                name: args[0].clone(),
                date: parse_date(&args[1], &args[2], usage)?,
                session_hours: parse_hours(&args[3], usage)?,
                tutor_name: args[4].clone(),
                tutor_id: args[5].clone(),
            })
        }
        CommandKind::Cancel => {
            require(4)?;
            Ok(Command::Cancel {
                key: parse_key(&args[0], &args[1], &args[2], &args[3], usage)?,
            })
        }
        CommandKind::Add => {
            require(3)?;
            if args.len() >= 6 {
                Ok(Command::AddStudent {
                    key: parse_key(&args[0], &args[1], &args[2], &args[3], usage)?,
                    student: Student::new(args[4].clone(), args[5].clone()),
                })
            } else if args.len() > 3 && is_session_day(&args[2]) {
                // A date in third position means the key form was cut short
                Err(CommandError::MissingArguments { usage })
            } else {
                Ok(Command::Enroll {
                    name: args[0].clone(),
                    student: Student::new(args[1].clone(), args[2].clone()),
                })
            }
        }
        CommandKind::Remove => {
            require(5)?;
            Ok(Command::RemoveStudent {
                key: parse_key(&args[0], &args[1], &args[2], &args[3], usage)?,
                student_id: args[4].clone(),
            })
        }
        CommandKind::Apply => {
            require(1)?;
            Ok(Command::Apply {
                schedule_name: args[0].clone(),
            })
        }
        CommandKind::ClearThreads => Ok(Command::ClearThreads),
    }
}

fn parse_key(
    name: &str,
    tutor_id: &str,
    day: &str,
    time: &str,
    usage: &'static str,
) -> Result<SessionKey, CommandError> {
    Ok(SessionKey {
        name: name.to_string(),
        tutor_id: tutor_id.to_string(),
        date: parse_date(day, time, usage)?,
    })
}

fn parse_date(
    day: &str,
    time: &str,
    usage: &'static str,
) -> Result<chrono::DateTime<chrono::Utc>, CommandError> {
    parse_session_date(day, time).ok_or_else(|| CommandError::InvalidDate {
        value: format!("{} {}", day, time),
        usage,
    })
}

fn is_session_day(value: &str) -> bool {
    NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}

fn parse_hours(value: &str, usage: &'static str) -> Result<u32, CommandError> {
    match value.parse::<u32>() {
        Ok(hours) if hours > 0 => Ok(hours),
        _ => Err(CommandError::InvalidHours {
            value: value.to_string(),
            usage,
        }),
    }
}
