//! The storage boundary.
//!
//! A backend implements [`ScheduleStore`] by running a closure against a
//! [`Session`] inside a single transaction. Services are written against
//! `Session`, so every multi-step operation commits or rolls back as a unit.

use std::future::Future;

use uuid::Uuid;

use crate::{
  Result,
  event::EventRecord,
  person::Person,
};

/// Row-level operations available inside a transaction.
///
/// Implementations report backend faults as [`crate::Error::Store`]. Absence
/// is reported through `Option`/`bool`, never as an error.
pub trait Session {
  // ── Persons ───────────────────────────────────────────────────────────

  fn insert_person(&mut self, person: &Person) -> Result<()>;

  fn person(&mut self, id: Uuid) -> Result<Option<Person>>;

  fn persons(&mut self) -> Result<Vec<Person>>;

  /// Remove a person and every association that references it. Returns
  /// `false` if no such person existed.
  fn delete_person(&mut self, id: Uuid) -> Result<bool>;

  // ── Events ────────────────────────────────────────────────────────────

  fn insert_event(&mut self, event: &EventRecord) -> Result<()>;

  fn event(&mut self, id: Uuid) -> Result<Option<EventRecord>>;

  fn events(&mut self) -> Result<Vec<EventRecord>>;

  /// Remove an event and its associations. Returns `false` if no such event
  /// existed.
  fn delete_event(&mut self, id: Uuid) -> Result<bool>;

  fn set_cancelled(&mut self, id: Uuid, cancelled: bool) -> Result<()>;

  // ── Associations ──────────────────────────────────────────────────────

  /// Persons attending `event_id`, ordered by name then id.
  fn attendees(&mut self, event_id: Uuid) -> Result<Vec<Person>>;

  /// Link a person to an event if not already linked. Returns `true` if a
  /// new row was written.
  fn attend(&mut self, event_id: Uuid, person_id: Uuid) -> Result<bool>;
}

/// A transactional store handle.
///
/// The handle is passed explicitly to each service; nothing holds a global
/// connection.
pub trait ScheduleStore: Send + Sync {
  /// Run `f` inside one transaction. Commits when `f` returns `Ok`, rolls
  /// back and returns the error unchanged otherwise.
  fn transaction<T, F>(
    &self,
    f: F,
  ) -> impl Future<Output = Result<T>> + Send + '_
  where
    T: Send + 'static,
    F: FnOnce(&mut dyn Session) -> Result<T> + Send + 'static;
}
