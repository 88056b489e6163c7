//! Domain value objects and types.
//!
//! Contact names, phone numbers and email addresses are wrapped in
//! value objects that validate at construction time, so the directory
//! can only ever hold values that passed their format check.

pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use email::{is_valid_email, EmailAddress};
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::{is_valid_phone, PhoneNumber};
