//! Event types.
//!
//! An [`EventRecord`] is the stored row; an [`Event`] is that row together
//! with its resolved attendees. Attendance is a set: a person appears at most
//! once per event.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use uuid::Uuid;

use crate::{Error, Result, person::Person};

// ─── Time ────────────────────────────────────────────────────────────────────

/// Parse an event time.
///
/// Accepts RFC 3339, an offset with a space separator, or a naive
/// `YYYY-MM-DD HH:MM:SS[.ffffff]` (space or `T`) which is taken as UTC.
pub fn parse_time(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
  let raw = raw.trim();
  DateTime::parse_from_rfc3339(raw)
    .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z"))
    .map(|dt| dt.with_timezone(&Utc))
    .or_else(|_| {
      NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
    })
}

fn deserialize_time<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = String::deserialize(deserializer)?;
  parse_time(&raw).map_err(de::Error::custom)
}

// ─── Input ───────────────────────────────────────────────────────────────────

/// Input to both event creation paths.
///
/// A supplied `id` is kept as-is; otherwise one is generated on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
  #[serde(default)]
  pub id:          Option<Uuid>,
  pub title:       String,
  pub description: String,
  #[serde(deserialize_with = "deserialize_time")]
  pub time:        DateTime<Utc>,
}

impl NewEvent {
  pub fn new(
    title: impl Into<String>,
    description: impl Into<String>,
    time: DateTime<Utc>,
  ) -> Self {
    Self {
      id: None,
      title: title.into(),
      description: description.into(),
      time,
    }
  }

  pub fn with_id(mut self, id: Uuid) -> Self {
    self.id = Some(id);
    self
  }

  /// Build the row to persist. New events always start active.
  pub fn into_record(self) -> Result<EventRecord> {
    let id = match self.id {
      Some(id) if id.is_nil() => return Err(Error::InvalidId),
      Some(id) => id,
      None => Uuid::new_v4(),
    };
    Ok(EventRecord {
      id,
      title: self.title,
      description: self.description,
      time: self.time,
      cancelled: false,
    })
  }
}

// ─── Stored row ──────────────────────────────────────────────────────────────

/// An `events` row, without attendees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
  pub id:          Uuid,
  pub title:       String,
  pub description: String,
  pub time:        DateTime<Utc>,
  pub cancelled:   bool,
}

impl EventRecord {
  /// Flip between active and cancelled. Applying it twice is the identity.
  pub fn toggled(self) -> Self {
    Self { cancelled: !self.cancelled, ..self }
  }
}

// ─── Read model ──────────────────────────────────────────────────────────────

/// An event with its attendees resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
  pub id:          Uuid,
  pub title:       String,
  pub description: String,
  #[serde(deserialize_with = "deserialize_time")]
  pub time:        DateTime<Utc>,
  #[serde(default)]
  pub cancelled:   bool,
  #[serde(default)]
  pub persons:     Vec<Person>,
}

impl Event {
  pub fn from_parts(record: EventRecord, persons: Vec<Person>) -> Self {
    Self {
      id: record.id,
      title: record.title,
      description: record.description,
      time: record.time,
      cancelled: record.cancelled,
      persons,
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone as _;

  use super::*;

  fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 18, 30, 0).unwrap()
  }

  #[test]
  fn supplied_id_is_kept() {
    let id = Uuid::new_v4();
    let record = NewEvent::new("blah", "blah", at()).with_id(id).into_record().unwrap();
    assert_eq!(record.id, id);
    assert!(!record.cancelled);
  }

  #[test]
  fn missing_id_is_generated() {
    let record = NewEvent::new("blah", "blah", at()).into_record().unwrap();
    assert!(!record.id.is_nil());
  }

  #[test]
  fn nil_id_is_rejected() {
    let result = NewEvent::new("blah", "blah", at()).with_id(Uuid::nil()).into_record();
    assert!(matches!(result, Err(Error::InvalidId)));
  }

  #[test]
  fn toggle_is_an_involution() {
    let record = NewEvent::new("blah", "blah", at()).into_record().unwrap();
    let once = record.clone().toggled();
    assert!(once.cancelled);
    assert_eq!(once.toggled(), record);
  }

  #[test]
  fn new_event_accepts_simple_uuid_form() {
    let id = Uuid::new_v4();
    let input: NewEvent = serde_json::from_value(serde_json::json!({
      "id": id.simple().to_string(),
      "title": "blah",
      "description": "blah",
      "time": "2024-05-01T18:30:00Z",
    }))
    .unwrap();
    assert_eq!(input.id, Some(id));
    assert_eq!(input.time, at());
  }

  #[test]
  fn naive_times_are_read_as_utc() {
    let expected = at() + chrono::Duration::microseconds(123_456);
    assert_eq!(parse_time("2024-05-01 18:30:00.123456").unwrap(), expected);
    assert_eq!(parse_time("2024-05-01T18:30:00.123456").unwrap(), expected);
    assert_eq!(parse_time("2024-05-01 18:30:00").unwrap(), at());
  }

  #[test]
  fn offset_times_are_normalised_to_utc() {
    assert_eq!(parse_time("2024-05-01T20:30:00+02:00").unwrap(), at());
    assert_eq!(parse_time("2024-05-01 18:30:00+00:00").unwrap(), at());
  }

  #[test]
  fn garbage_time_is_rejected() {
    assert!(parse_time("yesterday").is_err());
    let result = serde_json::from_value::<NewEvent>(serde_json::json!({
      "title": "blah",
      "description": "blah",
      "time": "2024-05-01",
    }));
    assert!(result.is_err());
  }

  #[test]
  fn new_event_accepts_python_style_time() {
    let input: NewEvent = serde_json::from_value(serde_json::json!({
      "title": "blah",
      "description": "blah",
      "time": "2024-05-01 18:30:00",
    }))
    .unwrap();
    assert_eq!(input.time, at());
  }
}
