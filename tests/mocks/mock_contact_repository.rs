use contact_book::domain::{ContactName, EmailAddress, PhoneNumber};
use contact_book::models::Contact;
use contact_book::repositories::{AddOutcome, ContactRepository};
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock contact repository for testing.
///
/// Keeps contacts in a plain vector and counts every trait call so tests can
/// verify which operations the service actually performed.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockContactRepository {
    contacts: Vec<Contact>,
    call_counts: RefCell<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a contact directly, bypassing call tracking.
    pub fn add_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }

    fn slot(&self, name: &ContactName) -> Option<usize> {
        self.contacts.iter().position(|c| &c.name == name)
    }
}

impl ContactRepository for MockContactRepository {
    fn get(&self, name: &str) -> Option<&Contact> {
        self.track_call("get");
        self.contacts.iter().find(|c| c.name.as_str() == name)
    }

    fn contacts(&self) -> &[Contact] {
        self.track_call("contacts");
        &self.contacts
    }

    fn add_phone(&mut self, name: ContactName, phone: PhoneNumber) -> AddOutcome {
        self.track_call("add_phone");
        match self.slot(&name) {
            Some(slot) => {
                self.contacts[slot].phones.push(phone);
                AddOutcome::Appended
            }
            None => {
                self.contacts.push(Contact::with_phone(name, phone));
                AddOutcome::Created
            }
        }
    }

    fn add_email(&mut self, name: ContactName, email: EmailAddress) -> AddOutcome {
        self.track_call("add_email");
        match self.slot(&name) {
            Some(slot) => {
                self.contacts[slot].emails.push(email);
                AddOutcome::Appended
            }
            None => {
                self.contacts.push(Contact::with_email(name, email));
                AddOutcome::Created
            }
        }
    }
}
