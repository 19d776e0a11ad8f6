//! Core types, store boundary, and services for the Gather scheduler.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::ScheduleStore`]; the API layer drives
//! the services in [`service`].

pub mod error;
pub mod event;
pub mod person;
pub mod service;
pub mod store;

pub use error::{Error, Result};
