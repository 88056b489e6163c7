//! Interactive command loop.
//!
//! Reads one command per line, echoes the parsed command, applies it to the
//! contact service and writes the result. Generic over the reader and writer
//! so whole sessions can be driven from memory.

use crate::command::{Command, HELP_TEXT};
use crate::config::DEFAULT_PROMPT;
use crate::error::ServiceResult;
use crate::models::Contact;
use crate::observability::CommandMetrics;
use crate::repositories::AddOutcome;
use crate::services::ContactService;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub const EXIT_MESSAGE: &str = "Program finished.";
pub const INVALID_COMMAND_MESSAGE: &str =
    "Unknown command. Type 'help' to see the list of commands.";
pub const CONTACT_NOT_FOUND_MESSAGE: &str = "Contact not found.";
pub const NO_MATCHES_MESSAGE: &str = "No contacts found with this phone or email.";

/// Whether the loop keeps reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// The read-evaluate-print loop over a contact service.
pub struct Repl<R, W> {
    reader: R,
    writer: W,
    prompt: String,
    service: ContactService,
    metrics: CommandMetrics,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Create a loop with an empty directory and the default prompt.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            prompt: DEFAULT_PROMPT.to_string(),
            service: ContactService::new(),
            metrics: CommandMetrics::new(),
        }
    }

    /// Replace the prompt written before each read.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Run until `exit` or end of input.
    ///
    /// Command-level failures are reported to the writer and never end the
    /// loop; only a failure to read input or write output is returned.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.writer, "{}", self.prompt)?;
            self.writer.flush()?;

            let Some(line) = self.read_line()? else {
                info!("End of input, stopping");
                break;
            };

            if self.execute_line(&line)? == LoopState::Terminated {
                break;
            }
        }

        self.writer.flush()?;
        self.metrics.report();
        Ok(())
    }

    /// Parse and apply a single line, returning the resulting loop state.
    pub fn execute_line(&mut self, line: &str) -> Result<LoopState> {
        let command = Command::parse(line);
        self.metrics.track_command(&command);
        debug!(command = command.keyword(), valid = command.is_valid(), "Dispatching command");

        writeln!(self.writer, "{:?}", command)?;
        self.dispatch(command)
    }

    /// The contact service holding this session's directory.
    pub fn service(&self) -> &ContactService {
        &self.service
    }

    /// Counters for this session.
    pub fn metrics(&self) -> &CommandMetrics {
        &self.metrics
    }

    /// Consume the loop and return the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Read one line without its terminator; `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a
    /// malformed line is handled like any other unknown input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        let line = String::from_utf8_lossy(&buf).into_owned();
        if line.contains(char::REPLACEMENT_CHARACTER) {
            warn!("Input line was not valid UTF-8");
        }
        Ok(Some(line))
    }

    fn dispatch(&mut self, command: Command) -> Result<LoopState> {
        match command {
            Command::Exit => {
                writeln!(self.writer, "{}", EXIT_MESSAGE)?;
                return Ok(LoopState::Terminated);
            }
            Command::Help => writeln!(self.writer, "{}", HELP_TEXT)?,
            Command::AddPhone { name, phone } => {
                let result = self.service.add_phone(&name, &phone);
                self.report_add(&name, "Phone", &phone, result)?;
            }
            Command::AddEmail { name, email } => {
                let result = self.service.add_email(&name, &email);
                self.report_add(&name, "Email", &email, result)?;
            }
            Command::Show { name } => match self.service.show(&name) {
                Some(contact) => write_contact(&mut self.writer, contact)?,
                None => writeln!(self.writer, "{}", CONTACT_NOT_FOUND_MESSAGE)?,
            },
            Command::Find { value } => {
                let names = self.service.find(&value);
                if names.is_empty() {
                    writeln!(self.writer, "{}", NO_MATCHES_MESSAGE)?;
                }
                for name in names {
                    writeln!(self.writer, "{}", name)?;
                }
            }
            Command::Export { path } => {
                let result = self.service.export(&path);
                self.metrics.track_export(result.is_ok());
                match result {
                    Ok(count) => writeln!(
                        self.writer,
                        "Exported {} contact(s) to {}",
                        count, path
                    )?,
                    Err(e) => {
                        warn!(path = %path, error = %e, "Export failed");
                        writeln!(self.writer, "Error: {}", e)?;
                    }
                }
            }
            Command::Invalid => writeln!(self.writer, "{}", INVALID_COMMAND_MESSAGE)?,
        }

        Ok(LoopState::Running)
    }

    fn report_add(
        &mut self,
        name: &str,
        field: &str,
        value: &str,
        result: ServiceResult<AddOutcome>,
    ) -> Result<()> {
        match result {
            Ok(AddOutcome::Created) => {
                self.metrics.track_contact_created();
                writeln!(self.writer, "Contact {} created.", name)?;
            }
            Ok(AddOutcome::Appended) => {
                writeln!(self.writer, "{} {} added for {}.", field, value, name)?;
            }
            Err(e) => {
                self.metrics.track_validation_error();
                writeln!(self.writer, "Error: {}", e)?;
            }
        }
        Ok(())
    }
}

fn write_contact<W: Write>(writer: &mut W, contact: &Contact) -> std::io::Result<()> {
    writeln!(writer, "Name: {}", contact.name)?;
    writeln!(writer, "Phones: {}", contact.phones_joined())?;
    writeln!(writer, "Emails: {}", contact.emails_joined())
}
