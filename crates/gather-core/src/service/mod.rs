//! Person and event services.
//!
//! Each public operation opens exactly one store transaction. Lookups that
//! miss are returned as [`crate::Error::PersonNotFound`] or
//! [`crate::Error::EventNotFound`], never as an empty success.

mod event;
mod person;

pub use event::EventService;
pub use person::PersonService;
