//! Application service layer.
//!
//! Services hold the business rules for each command and sit between the
//! command loop and the contact repository.

mod contact_service;

pub use contact_service::ContactService;
