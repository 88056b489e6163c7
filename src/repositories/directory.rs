use crate::domain::{ContactName, EmailAddress, PhoneNumber};
use crate::models::Contact;
use crate::repositories::traits::{AddOutcome, ContactRepository};
use std::collections::HashMap;

/// In-memory contact directory.
///
/// Contacts are kept in the order they were first created, with a name
/// index for lookups. Nothing is persisted; a new directory is empty.
#[derive(Debug, Default, Clone)]
pub struct Directory {
    contacts: Vec<Contact>,
    index: HashMap<String, usize>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `update` to the contact named `name`, or insert `create()`.
    fn upsert(
        &mut self,
        name: ContactName,
        update: impl FnOnce(&mut Contact),
        create: impl FnOnce(ContactName) -> Contact,
    ) -> AddOutcome {
        if let Some(&slot) = self.index.get(name.as_str()) {
            update(&mut self.contacts[slot]);
            return AddOutcome::Appended;
        }

        self.index
            .insert(name.as_str().to_string(), self.contacts.len());
        self.contacts.push(create(name));
        AddOutcome::Created
    }
}

impl ContactRepository for Directory {
    fn get(&self, name: &str) -> Option<&Contact> {
        self.index.get(name).map(|&slot| &self.contacts[slot])
    }

    fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    fn add_phone(&mut self, name: ContactName, phone: PhoneNumber) -> AddOutcome {
        let for_new = phone.clone();
        self.upsert(
            name,
            |contact| contact.phones.push(phone),
            |name| Contact::with_phone(name, for_new),
        )
    }

    fn add_email(&mut self, name: ContactName, email: EmailAddress) -> AddOutcome {
        let for_new = email.clone();
        self.upsert(
            name,
            |contact| contact.emails.push(email),
            |name| Contact::with_email(name, for_new),
        )
    }
}
