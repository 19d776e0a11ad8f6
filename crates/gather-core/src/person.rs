//! Persons: individuals who can attend events.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// A validated, non-empty display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
  /// Trim surrounding whitespace and reject the empty result.
  pub fn parse(raw: &str) -> Result<Self> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
      return Err(Error::EmptyName);
    }
    Ok(Self(trimmed.to_owned()))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl TryFrom<String> for PersonName {
  type Error = Error;

  fn try_from(raw: String) -> Result<Self> { Self::parse(&raw) }
}

impl From<PersonName> for String {
  fn from(name: PersonName) -> Self { name.0 }
}

impl fmt::Display for PersonName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// A person row. The id never changes once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:   Uuid,
  pub name: PersonName,
}

impl Person {
  /// A new person with a freshly generated id.
  pub fn new(name: PersonName) -> Self {
    Self { id: Uuid::new_v4(), name }
  }

  /// A person with a caller-supplied id; the nil uuid is rejected.
  pub fn with_id(id: Uuid, name: PersonName) -> Result<Self> {
    if id.is_nil() {
      return Err(Error::InvalidId);
    }
    Ok(Self { id, name })
  }
}

/// A person named by id alone.
///
/// Deserialising ignores any other fields sent alongside the id, so a full
/// [`Person`] payload is accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
  pub id: Uuid,
}

impl From<Person> for PersonRef {
  fn from(person: Person) -> Self { Self { id: person.id } }
}

impl From<&Person> for PersonRef {
  fn from(person: &Person) -> Self { Self { id: person.id } }
}

impl From<Uuid> for PersonRef {
  fn from(id: Uuid) -> Self { Self { id } }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn name_is_trimmed() {
    let name = PersonName::parse("  chris ").unwrap();
    assert_eq!(name.as_str(), "chris");
  }

  #[test]
  fn blank_name_is_rejected() {
    assert!(matches!(PersonName::parse("   "), Err(Error::EmptyName)));
    assert!(matches!(PersonName::parse(""), Err(Error::EmptyName)));
  }

  #[test]
  fn deserialising_validates_the_name() {
    let id = Uuid::new_v4();
    let ok: Person =
      serde_json::from_value(serde_json::json!({ "id": id, "name": "Person1" }))
        .unwrap();
    assert_eq!(ok.id, id);
    assert_eq!(ok.name.as_str(), "Person1");

    let bad = serde_json::from_value::<Person>(
      serde_json::json!({ "id": id, "name": " " }),
    );
    assert!(bad.is_err());
  }

  #[test]
  fn person_ref_ignores_the_name() {
    let id = Uuid::new_v4();
    let blank: PersonRef =
      serde_json::from_value(serde_json::json!({ "id": id, "name": "" })).unwrap();
    let bare: PersonRef =
      serde_json::from_value(serde_json::json!({ "id": id })).unwrap();
    assert_eq!(blank, PersonRef { id });
    assert_eq!(bare, blank);
  }

  #[test]
  fn nil_id_is_rejected() {
    let name = PersonName::parse("chris").unwrap();
    assert!(matches!(Person::with_id(Uuid::nil(), name), Err(Error::InvalidId)));
  }

  #[test]
  fn new_people_get_distinct_ids() {
    let name = PersonName::parse("chris").unwrap();
    let a = Person::new(name.clone());
    let b = Person::new(name);
    assert_ne!(a.id, b.id);
  }
}
