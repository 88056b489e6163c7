//! Per-session command metrics.

use crate::command::Command;
use std::time::Instant;

/// Counters for one run of the command loop.
///
/// Owned by the loop and updated as commands are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandMetrics {
    commands_total: u64,
    invalid_commands_total: u64,
    validation_errors_total: u64,
    contacts_created_total: u64,
    exports_total: u64,
    export_errors_total: u64,
}

impl CommandMetrics {
    /// Create a new metrics tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a parsed command.
    pub fn track_command(&mut self, command: &Command) {
        self.commands_total += 1;
        if *command == Command::Invalid {
            self.invalid_commands_total += 1;
        }
        tracing::trace!(keyword = command.keyword(), "Command parsed");
    }

    /// Track a phone/email/name that failed its format check.
    pub fn track_validation_error(&mut self) {
        self.validation_errors_total += 1;
    }

    /// Track creation of a new contact.
    pub fn track_contact_created(&mut self) {
        self.contacts_created_total += 1;
    }

    /// Track an export attempt.
    pub fn track_export(&mut self, success: bool) {
        self.exports_total += 1;
        if !success {
            self.export_errors_total += 1;
        }
    }

    /// Get the total number of commands read.
    pub fn commands_total(&self) -> u64 {
        self.commands_total
    }

    /// Get the number of unknown or malformed commands.
    pub fn invalid_commands_total(&self) -> u64 {
        self.invalid_commands_total
    }

    /// Get the number of rejected phones, emails and names.
    pub fn validation_errors_total(&self) -> u64 {
        self.validation_errors_total
    }

    /// Get the number of contacts created.
    pub fn contacts_created_total(&self) -> u64 {
        self.contacts_created_total
    }

    /// Get the number of export attempts.
    pub fn exports_total(&self) -> u64 {
        self.exports_total
    }

    /// Get the number of failed exports.
    pub fn export_errors_total(&self) -> u64 {
        self.export_errors_total
    }

    /// Log the counters at `info` level.
    pub fn report(&self) {
        tracing::info!(
            commands = self.commands_total,
            invalid = self.invalid_commands_total,
            validation_errors = self.validation_errors_total,
            contacts_created = self.contacts_created_total,
            exports = self.exports_total,
            export_errors = self.export_errors_total,
            "Session finished"
        );
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Finish the timer with a specific status, returning elapsed milliseconds.
    pub fn finish_with_status(self, success: bool) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        if success {
            tracing::debug!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation succeeded"
            );
        } else {
            tracing::warn!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation failed"
            );
        }

        duration_ms
    }
}
