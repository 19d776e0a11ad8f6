//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as fixed-width RFC 3339 strings (nanoseconds, `Z`)
//! so that text order matches time order. UUIDs are stored as hyphenated
//! lowercase strings.

use chrono::{DateTime, SecondsFormat, Utc};
use gather_core::{
  event::EventRecord,
  person::{Person, PersonName},
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

pub const PERSON_COLUMNS: &str = "person_id, name";

pub const EVENT_COLUMNS: &str =
  "event_id, title, description, time, cancelled";

/// Raw values read directly from a `persons` row.
pub struct RawPerson {
  pub person_id: String,
  pub name:      String,
}

impl RawPerson {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      person_id: row.get(0)?,
      name:      row.get(1)?,
    })
  }

  pub fn into_person(self) -> Result<Person> {
    let name = PersonName::parse(&self.name).map_err(Error::Corrupt)?;
    Person::with_id(decode_uuid(&self.person_id)?, name).map_err(Error::Corrupt)
  }
}

/// Raw values read directly from an `events` row.
pub struct RawEvent {
  pub event_id:    String,
  pub title:       String,
  pub description: String,
  pub time:        String,
  pub cancelled:   bool,
}

impl RawEvent {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      event_id:    row.get(0)?,
      title:       row.get(1)?,
      description: row.get(2)?,
      time:        row.get(3)?,
      cancelled:   row.get(4)?,
    })
  }

  pub fn into_record(self) -> Result<EventRecord> {
    Ok(EventRecord {
      id:          decode_uuid(&self.event_id)?,
      title:       self.title,
      description: self.description,
      time:        decode_dt(&self.time)?,
      cancelled:   self.cancelled,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone as _;

  use super::*;

  #[test]
  fn encoded_times_have_fixed_width_and_sort_in_time_order() {
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 18, 30, 0).unwrap();
    let times = [
      base,
      base + chrono::Duration::milliseconds(50),
      base + chrono::Duration::milliseconds(500),
      base + chrono::Duration::nanoseconds(500_000_001),
      base + chrono::Duration::seconds(1),
    ];
    let encoded: Vec<String> = times.iter().map(|&t| encode_dt(t)).collect();

    assert!(encoded.iter().all(|e| e.len() == encoded[0].len()));
    let mut sorted = encoded.clone();
    sorted.sort();
    assert_eq!(sorted, encoded);
    for (raw, &t) in encoded.iter().zip(&times) {
      assert_eq!(decode_dt(raw).unwrap(), t);
    }
  }
}
