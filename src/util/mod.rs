pub mod command;
pub mod parse;
