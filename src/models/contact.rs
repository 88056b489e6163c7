//! Contact model: a person with phone numbers and email addresses.

use crate::domain::{ContactName, EmailAddress, PhoneNumber};
use serde::Serialize;

/// Separator used when a contact's phones or emails are shown on one line.
pub const LIST_SEPARATOR: &str = ", ";

/// A contact in the directory.
///
/// Phones and emails keep insertion order and are never deduplicated.
/// Serialized as `{"phones": [...], "emails": [...]}`; the name is the key
/// the contact is stored under and is not repeated inside the record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique name of the contact
    #[serde(skip_serializing)]
    pub name: ContactName,

    /// Phone numbers in the order they were added
    pub phones: Vec<PhoneNumber>,

    /// Email addresses in the order they were added
    pub emails: Vec<EmailAddress>,
}

impl Contact {
    /// Create a contact with no phones or emails.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            emails: Vec::new(),
        }
    }

    /// Create a contact holding a single phone number.
    pub fn with_phone(name: ContactName, phone: PhoneNumber) -> Self {
        let mut contact = Self::new(name);
        contact.phones.push(phone);
        contact
    }

    /// Create a contact holding a single email address.
    pub fn with_email(name: ContactName, email: EmailAddress) -> Self {
        let mut contact = Self::new(name);
        contact.emails.push(email);
        contact
    }

    /// Whether `value` is exactly one of this contact's phones or emails.
    pub fn has_value(&self, value: &str) -> bool {
        self.phones.iter().any(|p| p.as_str() == value)
            || self.emails.iter().any(|e| e.as_str() == value)
    }

    /// Phones joined with [`LIST_SEPARATOR`]; empty string when there are none.
    pub fn phones_joined(&self) -> String {
        join(self.phones.iter().map(PhoneNumber::as_str))
    }

    /// Emails joined with [`LIST_SEPARATOR`]; empty string when there are none.
    pub fn emails_joined(&self) -> String {
        join(self.emails.iter().map(EmailAddress::as_str))
    }
}

fn join<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(LIST_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ContactName {
        ContactName::new(s).unwrap()
    }

    fn phone(s: &str) -> PhoneNumber {
        PhoneNumber::new(s).unwrap()
    }

    fn email(s: &str) -> EmailAddress {
        EmailAddress::new(s).unwrap()
    }

    #[test]
    fn test_with_phone_has_no_emails() {
        let contact = Contact::with_phone(name("Alice"), phone("+123"));
        assert_eq!(contact.phones.len(), 1);
        assert!(contact.emails.is_empty());
    }

    #[test]
    fn test_has_value_is_exact_match() {
        let mut contact = Contact::with_phone(name("Alice"), phone("+123"));
        contact.emails.push(email("a@b.co"));

        assert!(contact.has_value("+123"));
        assert!(contact.has_value("a@b.co"));
        assert!(!contact.has_value("+12"));
        assert!(!contact.has_value("123"));
        assert!(!contact.has_value("b.co"));
        assert!(!contact.has_value("Alice"));
    }

    #[test]
    fn test_joined_lists() {
        let mut contact = Contact::with_phone(name("Alice"), phone("+123"));
        assert_eq!(contact.phones_joined(), "+123");
        assert_eq!(contact.emails_joined(), "");

        contact.phones.push(phone("+456"));
        contact.phones.push(phone("+123"));
        assert_eq!(contact.phones_joined(), "+123, +456, +123");
    }

    #[test]
    fn test_serialization_omits_name_and_keeps_empty_lists() {
        let contact = Contact::with_email(name("Bob"), email("bob@mail.com"));
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"phones": [], "emails": ["bob@mail.com"]})
        );
    }
}
