use uuid::Uuid;

use crate::{
  Error, Result,
  event::{Event, EventRecord, NewEvent},
  person::PersonRef,
  store::{ScheduleStore, Session},
};

use super::person::resolve as resolve_person;

/// CRUD over events, attendance, and the cancellation toggle.
pub struct EventService<'s, S> {
  store: &'s S,
}

impl<'s, S: ScheduleStore> EventService<'s, S> {
  pub fn new(store: &'s S) -> Self { Self { store } }

  /// Persist an event with no attendees.
  pub async fn create_without_persons(&self, input: NewEvent) -> Result<Event> {
    self.create(input, Vec::new()).await
  }

  /// Persist an event together with its attendees.
  ///
  /// Every person is looked up by id before anything is written. If any is
  /// missing the call fails with [`Error::PersonNotFound`] and neither the
  /// event nor any association is stored. Only ids are read from
  /// `persons`; the returned attendees are the stored rows.
  pub async fn create_with_persons(
    &self,
    input: NewEvent,
    persons: impl IntoIterator<Item = impl Into<PersonRef>>,
  ) -> Result<Event> {
    let person_ids = persons
      .into_iter()
      .map(|p| Into::<PersonRef>::into(p).id)
      .collect();
    self.create(input, person_ids).await
  }

  async fn create(&self, input: NewEvent, person_ids: Vec<Uuid>) -> Result<Event> {
    let record = input.into_record()?;
    let event = self
      .store
      .transaction(move |tx| create_event(tx, record, &person_ids))
      .await?;
    tracing::info!(
      event_id = %event.id,
      persons = event.persons.len(),
      "created event"
    );
    Ok(event)
  }

  pub async fn read_by_id(&self, id: Uuid) -> Result<Event> {
    self.store.transaction(move |tx| load(tx, id)).await
  }

  /// Remove an event and its associations; returns the deleted snapshot.
  pub async fn delete_by_id(&self, id: Uuid) -> Result<Event> {
    let event = self
      .store
      .transaction(move |tx| {
        let event = load(tx, id)?;
        tx.delete_event(id)?;
        Ok(event)
      })
      .await?;
    tracing::info!(event_id = %id, "deleted event");
    Ok(event)
  }

  pub async fn get_all_events(&self) -> Result<Vec<Event>> {
    self
      .store
      .transaction(|tx| {
        tx.events()?
          .into_iter()
          .map(|record| {
            let persons = tx.attendees(record.id)?;
            Ok(Event::from_parts(record, persons))
          })
          .collect()
      })
      .await
  }

  /// Add each person to the event's attendee set.
  ///
  /// Ids already attending, or repeated within `person_ids`, are no-ops. A
  /// missing event or person fails the whole call and keeps no new links.
  pub async fn add_persons_to_event(
    &self,
    event_id: Uuid,
    person_ids: Vec<Uuid>,
  ) -> Result<Event> {
    let (event, added) = self
      .store
      .transaction(move |tx| {
        let record = find(tx, event_id)?;
        let mut added = 0;
        for person_id in person_ids {
          resolve_person(tx, person_id)?;
          if tx.attend(event_id, person_id)? {
            added += 1;
          }
        }
        let persons = tx.attendees(event_id)?;
        Ok((Event::from_parts(record, persons), added))
      })
      .await?;
    tracing::info!(event_id = %event_id, added, "added persons to event");
    Ok(event)
  }

  /// Flip the event between active and cancelled.
  pub async fn toggle_cancelled(&self, event_id: Uuid) -> Result<Event> {
    let event = self
      .store
      .transaction(move |tx| {
        let record = find(tx, event_id)?.toggled();
        tx.set_cancelled(event_id, record.cancelled)?;
        let persons = tx.attendees(event_id)?;
        Ok(Event::from_parts(record, persons))
      })
      .await?;
    tracing::info!(event_id = %event_id, cancelled = event.cancelled, "toggled event");
    Ok(event)
  }

  /// Replacing an event wholesale is not supported.
  pub async fn update_by_id(&self, event_id: Uuid, _event: NewEvent) -> Result<Event> {
    tracing::debug!(event_id = %event_id, "rejected event update");
    Err(Error::NotImplemented("event update"))
  }
}

fn create_event(
  tx: &mut dyn Session,
  record: EventRecord,
  person_ids: &[Uuid],
) -> Result<Event> {
  for &id in person_ids {
    resolve_person(tx, id)?;
  }

  if tx.event(record.id)?.is_some() {
    return Err(Error::EventExists(record.id));
  }
  tx.insert_event(&record)?;
  for &id in person_ids {
    tx.attend(record.id, id)?;
  }

  let persons = tx.attendees(record.id)?;
  Ok(Event::from_parts(record, persons))
}

fn find(tx: &mut dyn Session, id: Uuid) -> Result<EventRecord> {
  tx.event(id)?.ok_or_else(|| {
    tracing::debug!(event_id = %id, "event not found");
    Error::EventNotFound(id)
  })
}

fn load(tx: &mut dyn Session, id: Uuid) -> Result<Event> {
  let record = find(tx, id)?;
  let persons = tx.attendees(id)?;
  Ok(Event::from_parts(record, persons))
}
