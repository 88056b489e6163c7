//! Contact service layer.
//!
//! Validation and business logic for adding, showing, finding and exporting
//! contacts.

use crate::domain::{ContactName, EmailAddress, PhoneNumber};
use crate::error::ServiceResult;
use crate::export;
use crate::models::Contact;
use crate::observability::Timer;
use crate::repositories::{AddOutcome, ContactRepository, Directory};
use std::path::Path;
use tracing::{debug, info, warn};

/// Applies contact operations to an owned repository.
///
/// Values are validated before the repository is touched, so a rejected
/// phone or email leaves the directory exactly as it was.
#[derive(Debug, Default)]
pub struct ContactService<R = Directory> {
    repo: R,
}

impl ContactService<Directory> {
    /// Create a service over an empty in-memory directory.
    pub fn new() -> Self {
        Self::with_repository(Directory::new())
    }
}

impl<R: ContactRepository> ContactService<R> {
    /// Create a service over an existing repository.
    pub fn with_repository(repo: R) -> Self {
        Self { repo }
    }

    /// Borrow the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Add a phone number to `name`, creating the contact if needed.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the phone is malformed (checked first)
    /// or the name is empty.
    pub fn add_phone(&mut self, name: &str, phone: &str) -> ServiceResult<AddOutcome> {
        let phone = PhoneNumber::new(phone).inspect_err(|e| warn!("Rejected phone: {}", e))?;
        let name = ContactName::new(name).inspect_err(|e| warn!("Rejected name: {}", e))?;

        let outcome = self.repo.add_phone(name.clone(), phone);
        Self::log_outcome(&name, outcome, "phone");
        Ok(outcome)
    }

    /// Add an email address to `name`, creating the contact if needed.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the email is malformed (checked first)
    /// or the name is empty.
    pub fn add_email(&mut self, name: &str, email: &str) -> ServiceResult<AddOutcome> {
        let email = EmailAddress::new(email).inspect_err(|e| warn!("Rejected email: {}", e))?;
        let name = ContactName::new(name).inspect_err(|e| warn!("Rejected name: {}", e))?;

        let outcome = self.repo.add_email(name.clone(), email);
        Self::log_outcome(&name, outcome, "email");
        Ok(outcome)
    }

    /// Look up a contact by exact name.
    pub fn show(&self, name: &str) -> Option<&Contact> {
        let contact = self.repo.get(name);
        debug!(name = %name, found = contact.is_some(), "Contact lookup");
        contact
    }

    /// Names of all contacts holding `value` as a phone or email, in
    /// directory order.
    pub fn find(&self, value: &str) -> Vec<&str> {
        let names: Vec<&str> = self
            .repo
            .find_by_value(value)
            .into_iter()
            .map(|contact| contact.name.as_str())
            .collect();
        debug!(value = %value, matches = names.len(), "Search by value completed");
        names
    }

    /// Export the whole directory as JSON to `path`.
    ///
    /// Returns the number of contacts written.
    pub fn export(&self, path: impl AsRef<Path>) -> ServiceResult<usize> {
        let timer = Timer::new("export");
        let result = export::export_to_file(&self.repo, path);
        timer.finish_with_status(result.is_ok());
        Ok(result?)
    }

    fn log_outcome(name: &ContactName, outcome: AddOutcome, field: &str) {
        match outcome {
            AddOutcome::Created => info!(name = %name, field = field, "Contact created"),
            AddOutcome::Appended => debug!(name = %name, field = field, "Value appended"),
        }
    }
}
