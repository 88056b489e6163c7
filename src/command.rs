//! Command parsing.
//!
//! One input line maps to exactly one [`Command`]. The line is split on
//! single spaces; the first token selects the command and the rest are its
//! positional arguments. Only the token count is checked here, format
//! validation of phones and emails happens when the command is applied.

use crate::domain::{is_valid_email, is_valid_phone};

/// Static command reference printed by `help`.
pub const HELP_TEXT: &str = "\
Available commands:
  exit                       - quit the program
  help                       - show this command reference
  addPhone <name> <phone>    - add a phone number (+ followed by digits) to a contact
  addEmail <name> <email>    - add an email address (letters@letters.letters) to a contact
  show <name>                - show all phones and emails of a contact
  find <value>               - list contacts that have this exact phone or email
  export <path>              - save all contacts to a JSON file";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    AddPhone { name: String, phone: String },
    AddEmail { name: String, email: String },
    Show { name: String },
    Find { value: String },
    Export { path: String },
    /// Unknown keyword or wrong number of arguments.
    Invalid,
}

impl Command {
    /// Parse one line of input.
    ///
    /// Never fails: anything that does not match a known command shape is
    /// [`Command::Invalid`]. Consecutive spaces produce empty tokens, which
    /// count towards the argument total.
    pub fn parse(line: &str) -> Self {
        let tokens: Vec<&str> = line.split(' ').collect();

        match tokens.as_slice() {
            ["exit"] => Command::Exit,
            ["help"] => Command::Help,
            ["addPhone", name, phone] => Command::AddPhone {
                name: name.to_string(),
                phone: phone.to_string(),
            },
            ["addEmail", name, email] => Command::AddEmail {
                name: name.to_string(),
                email: email.to_string(),
            },
            ["show", name] => Command::Show {
                name: name.to_string(),
            },
            ["find", value] => Command::Find {
                value: value.to_string(),
            },
            ["export", path] => Command::Export {
                path: path.to_string(),
            },
            _ => Command::Invalid,
        }
    }

    /// Whether the command can be applied as-is.
    ///
    /// `AddPhone` and `AddEmail` are valid only when their value passes the
    /// matching format check; `Invalid` never is; everything else always is.
    pub fn is_valid(&self) -> bool {
        match self {
            Command::AddPhone { phone, .. } => is_valid_phone(phone),
            Command::AddEmail { email, .. } => is_valid_email(email),
            Command::Invalid => false,
            Command::Exit
            | Command::Help
            | Command::Show { .. }
            | Command::Find { .. }
            | Command::Export { .. } => true,
        }
    }

    /// Keyword that selects this command, used in logs.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Exit => "exit",
            Command::Help => "help",
            Command::AddPhone { .. } => "addPhone",
            Command::AddEmail { .. } => "addEmail",
            Command::Show { .. } => "show",
            Command::Find { .. } => "find",
            Command::Export { .. } => "export",
            Command::Invalid => "invalid",
        }
    }
}
