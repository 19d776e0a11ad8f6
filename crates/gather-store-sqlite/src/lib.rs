//! SQLite backend for the Gather scheduler.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. Every
//! [`ScheduleStore::transaction`](gather_core::store::ScheduleStore::transaction)
//! call maps to one SQL transaction.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
