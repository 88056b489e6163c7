//! Contact Book - an interactive command-line contact directory.
//!
//! Commands are read one per line from a terminal and applied to an
//! in-memory directory mapping names to phone numbers and email addresses.
//! The directory can be exported to a JSON file.
//!
//! # Architecture
//!
//! - **command**: Parsing of input lines into typed commands
//! - **domain**: Validated value objects for names, phones and emails
//! - **models**: The contact record
//! - **repositories**: Contact storage trait and the in-memory directory
//! - **services**: Business rules applied per command
//! - **export**: JSON export of the directory
//! - **repl**: The interactive read-evaluate-print loop
//! - **config**: Optional configuration from environment variables
//! - **error**: Custom error types for precise error handling
//! - **observability**: Session counters reported through tracing

pub mod command;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod models;
pub mod observability;
pub mod repl;
pub mod repositories;
pub mod services;

pub use command::Command;
pub use config::Config;
pub use error::{ConfigError, ExportError, ServiceError};
pub use models::Contact;
pub use repl::{LoopState, Repl};
pub use repositories::{AddOutcome, ContactRepository, Directory};
pub use services::ContactService;
