use thiserror::Error;

/// Problems with a command invocation typed by a user.
///
/// The display text of every variant is the reply sent back to the user, so it
/// always ends with the usage line for the command.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// Fewer positional arguments than the command needs.
    #[error("Not enough arguments. Usage: `{usage}`")]
    MissingArguments {
        /// Usage line of the invoked command
        usage: &'static str,
    },

    /// Session hours were not a positive whole number.
    #[error("`{value}` is not a valid number of hours. Usage: `{usage}`")]
    InvalidHours {
        /// The rejected argument
        value: String,
        /// Usage line of the invoked command
        usage: &'static str,
    },

    /// Date and time did not match `YYYY-MM-DD HH:MM`.
    #[error("`{value}` is not a valid date, expected YYYY-MM-DD HH:MM. Usage: `{usage}`")]
    InvalidDate {
        /// The rejected date and time, joined by a space
        value: String,
        /// Usage line of the invoked command
        usage: &'static str,
    },

    /// A double quote opened an argument that was never closed.
    #[error("Unterminated quote in command arguments.")]
    UnterminatedQuote,
}
