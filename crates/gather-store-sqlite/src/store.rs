//! [`SqliteStore`]: the SQLite implementation of [`ScheduleStore`].

use std::path::Path;

use gather_core::{
  event::EventRecord,
  person::Person,
  store::{ScheduleStore, Session},
};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use crate::{
  Error, Result,
  encode::{
    EVENT_COLUMNS, PERSON_COLUMNS, RawEvent, RawPerson, encode_dt, encode_uuid,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Gather store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open a private in-memory store; nothing survives the handle.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ScheduleStore impl ──────────────────────────────────────────────────────

impl ScheduleStore for SqliteStore {
  async fn transaction<T, F>(&self, f: F) -> gather_core::Result<T>
  where
    T: Send + 'static,
    F: FnOnce(&mut dyn Session) -> gather_core::Result<T> + Send + 'static,
  {
    let outcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let outcome = f(&mut SqliteSession { conn: &tx });
        match &outcome {
          Ok(_) => tx.commit()?,
          Err(e) => {
            tracing::debug!(error = %e, "rolling back transaction");
            tx.rollback()?;
          }
        }
        Ok(outcome)
      })
      .await
      .map_err(Error::Database)?;
    outcome
  }
}

// ─── Session ─────────────────────────────────────────────────────────────────

/// Row operations bound to an open transaction.
struct SqliteSession<'t> {
  conn: &'t rusqlite::Connection,
}

impl SqliteSession<'_> {
  fn query_rows<R>(
    &self,
    sql: &str,
    params: impl rusqlite::Params,
    map: fn(&rusqlite::Row<'_>) -> rusqlite::Result<R>,
  ) -> Result<Vec<R>> {
    let mut stmt = self.conn.prepare(sql)?;
    let rows = stmt
      .query_map(params, map)?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn query_persons(
    &self,
    sql: &str,
    params: impl rusqlite::Params,
  ) -> Result<Vec<Person>> {
    self
      .query_rows(sql, params, RawPerson::from_row)?
      .into_iter()
      .map(RawPerson::into_person)
      .collect()
  }
}

impl Session for SqliteSession<'_> {
  // ── Persons ───────────────────────────────────────────────────────────────

  fn insert_person(&mut self, person: &Person) -> gather_core::Result<()> {
    self
      .conn
      .execute(
        "INSERT INTO persons (person_id, name) VALUES (?1, ?2)",
        rusqlite::params![encode_uuid(person.id), person.name.as_str()],
      )
      .map_err(Error::Sqlite)?;
    Ok(())
  }

  fn person(&mut self, id: Uuid) -> gather_core::Result<Option<Person>> {
    let raw = self
      .conn
      .query_row(
        &format!("SELECT {PERSON_COLUMNS} FROM persons WHERE person_id = ?1"),
        rusqlite::params![encode_uuid(id)],
        RawPerson::from_row,
      )
      .optional()
      .map_err(Error::Sqlite)?;
    Ok(raw.map(RawPerson::into_person).transpose()?)
  }

  fn persons(&mut self) -> gather_core::Result<Vec<Person>> {
    Ok(self.query_persons(
      &format!("SELECT {PERSON_COLUMNS} FROM persons ORDER BY name, person_id"),
      [],
    )?)
  }

  fn delete_person(&mut self, id: Uuid) -> gather_core::Result<bool> {
    // Attendance rows go with it via ON DELETE CASCADE.
    let removed = self
      .conn
      .execute(
        "DELETE FROM persons WHERE person_id = ?1",
        rusqlite::params![encode_uuid(id)],
      )
      .map_err(Error::Sqlite)?;
    Ok(removed > 0)
  }

  // ── Events ────────────────────────────────────────────────────────────────

  fn insert_event(&mut self, event: &EventRecord) -> gather_core::Result<()> {
    self
      .conn
      .execute(
        "INSERT INTO events (event_id, title, description, time, cancelled)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![
          encode_uuid(event.id),
          event.title,
          event.description,
          encode_dt(event.time),
          event.cancelled,
        ],
      )
      .map_err(Error::Sqlite)?;
    Ok(())
  }

  fn event(&mut self, id: Uuid) -> gather_core::Result<Option<EventRecord>> {
    let raw = self
      .conn
      .query_row(
        &format!("SELECT {EVENT_COLUMNS} FROM events WHERE event_id = ?1"),
        rusqlite::params![encode_uuid(id)],
        RawEvent::from_row,
      )
      .optional()
      .map_err(Error::Sqlite)?;
    Ok(raw.map(RawEvent::into_record).transpose()?)
  }

  fn events(&mut self) -> gather_core::Result<Vec<EventRecord>> {
    let raws = self.query_rows(
      &format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY time, event_id"),
      [],
      RawEvent::from_row,
    )?;
    Ok(
      raws
        .into_iter()
        .map(RawEvent::into_record)
        .collect::<Result<Vec<_>>>()?,
    )
  }

  fn delete_event(&mut self, id: Uuid) -> gather_core::Result<bool> {
    let removed = self
      .conn
      .execute(
        "DELETE FROM events WHERE event_id = ?1",
        rusqlite::params![encode_uuid(id)],
      )
      .map_err(Error::Sqlite)?;
    Ok(removed > 0)
  }

  fn set_cancelled(&mut self, id: Uuid, cancelled: bool) -> gather_core::Result<()> {
    self
      .conn
      .execute(
        "UPDATE events SET cancelled = ?2 WHERE event_id = ?1",
        rusqlite::params![encode_uuid(id), cancelled],
      )
      .map_err(Error::Sqlite)?;
    Ok(())
  }

  // ── Associations ──────────────────────────────────────────────────────────

  fn attendees(&mut self, event_id: Uuid) -> gather_core::Result<Vec<Person>> {
    Ok(self.query_persons(
      "SELECT p.person_id, p.name
       FROM event_persons ep
       JOIN persons p ON p.person_id = ep.person_id
       WHERE ep.event_id = ?1
       ORDER BY p.name, p.person_id",
      rusqlite::params![encode_uuid(event_id)],
    )?)
  }

  fn attend(&mut self, event_id: Uuid, person_id: Uuid) -> gather_core::Result<bool> {
    let inserted = self
      .conn
      .execute(
        "INSERT OR IGNORE INTO event_persons (event_id, person_id) VALUES (?1, ?2)",
        rusqlite::params![encode_uuid(event_id), encode_uuid(person_id)],
      )
      .map_err(Error::Sqlite)?;
    Ok(inserted > 0)
  }
}
