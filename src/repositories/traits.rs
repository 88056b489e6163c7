use crate::domain::{ContactName, EmailAddress, PhoneNumber};
use crate::models::Contact;

/// Result of appending a phone or email to the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// No contact existed under the name; one was created.
    Created,
    /// The value was appended to an existing contact.
    Appended,
}

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage so the service layer can be
/// exercised against any backing store. Only validated value objects can be
/// added, which keeps every stored phone and email well-formed.
pub trait ContactRepository {
    /// Retrieve a single contact by exact name.
    fn get(&self, name: &str) -> Option<&Contact>;

    /// All contacts in directory order.
    fn contacts(&self) -> &[Contact];

    /// Append a phone, creating the contact if the name is unknown.
    fn add_phone(&mut self, name: ContactName, phone: PhoneNumber) -> AddOutcome;

    /// Append an email, creating the contact if the name is unknown.
    fn add_email(&mut self, name: ContactName, email: EmailAddress) -> AddOutcome;

    /// Contacts holding `value` as one of their phones or emails, in
    /// directory order.
    fn find_by_value(&self, value: &str) -> Vec<&Contact> {
        self.contacts()
            .iter()
            .filter(|contact| contact.has_value(value))
            .collect()
    }

    /// Number of contacts.
    fn len(&self) -> usize {
        self.contacts().len()
    }

    /// Whether the directory holds no contacts.
    fn is_empty(&self) -> bool {
        self.contacts().is_empty()
    }
}
