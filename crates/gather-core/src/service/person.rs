use uuid::Uuid;

use crate::{
  Error, Result,
  person::{Person, PersonName},
  store::{ScheduleStore, Session},
};

/// CRUD over persons.
pub struct PersonService<'s, S> {
  store: &'s S,
}

impl<'s, S: ScheduleStore> PersonService<'s, S> {
  pub fn new(store: &'s S) -> Self { Self { store } }

  /// Validate `name`, assign a fresh id, and persist.
  pub async fn create(&self, name: &str) -> Result<Person> {
    let person = Person::new(PersonName::parse(name)?);
    let row = person.clone();
    self
      .store
      .transaction(move |tx| tx.insert_person(&row))
      .await?;
    tracing::info!(person_id = %person.id, "created person");
    Ok(person)
  }

  pub async fn get(&self, id: Uuid) -> Result<Person> {
    self.store.transaction(move |tx| resolve(tx, id)).await
  }

  /// Remove a person and return the deleted snapshot.
  ///
  /// The person is also dropped from every event it attended.
  pub async fn delete(&self, id: Uuid) -> Result<Person> {
    let person = self
      .store
      .transaction(move |tx| {
        let person = resolve(tx, id)?;
        tx.delete_person(id)?;
        Ok(person)
      })
      .await?;
    tracing::info!(person_id = %id, "deleted person");
    Ok(person)
  }

  pub async fn list_all(&self) -> Result<Vec<Person>> {
    self.store.transaction(|tx| tx.persons()).await
  }
}

/// Existence check shared with the event service.
pub(super) fn resolve(tx: &mut dyn Session, id: Uuid) -> Result<Person> {
  tx.person(id)?.ok_or_else(|| {
    tracing::debug!(person_id = %id, "person not found");
    Error::PersonNotFound(id)
  })
}
