//! Handlers for `/events` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/events/` | All events with attendees |
//! | `POST`   | `/events/create_no_persons` | Body: [`NewEvent`]; 201 |
//! | `POST`   | `/events/create_with_persons` | Body: [`CreateWithPersonsBody`]; 201, 404 if any person is missing |
//! | `GET`    | `/events/{id}` | 404 if not found |
//! | `PUT`    | `/events/{id}` | Always 501 |
//! | `DELETE` | `/events/{id}` | Returns the deleted event |
//! | `PUT`    | `/events/{id}/add_persons` | Body: `["<person id>", ...]` |
//! | `PATCH`  | `/events/{id}/cancel` | Toggles `cancelled` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use gather_core::{
  event::{Event, NewEvent},
  person::PersonRef,
  service::EventService,
  store::ScheduleStore,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;

// ─── Read ─────────────────────────────────────────────────────────────────────

/// `GET /events/`
pub async fn list<S: ScheduleStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Event>>, ApiError> {
  Ok(Json(EventService::new(&*store).get_all_events().await?))
}

/// `GET /events/{id}`
pub async fn get_one<S: ScheduleStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Event>, ApiError> {
  Ok(Json(EventService::new(&*store).read_by_id(id).await?))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /events/create_no_persons`
pub async fn create_no_persons<S: ScheduleStore>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewEvent>,
) -> Result<impl IntoResponse, ApiError> {
  let event = EventService::new(&*store).create_without_persons(body).await?;
  Ok((StatusCode::CREATED, Json(event)))
}

/// JSON body accepted by `POST /events/create_with_persons`.
///
/// Each entry in `persons` needs only an `id`; a `name` sent with it is
/// ignored in favour of the stored one.
#[derive(Debug, Deserialize)]
pub struct CreateWithPersonsBody {
  pub event:   NewEvent,
  #[serde(default)]
  pub persons: Vec<PersonRef>,
}

/// `POST /events/create_with_persons`
pub async fn create_with_persons<S: ScheduleStore>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateWithPersonsBody>,
) -> Result<impl IntoResponse, ApiError> {
  let event = EventService::new(&*store)
    .create_with_persons(body.event, body.persons)
    .await?;
  Ok((StatusCode::CREATED, Json(event)))
}

// ─── Mutate ───────────────────────────────────────────────────────────────────

/// `PUT /events/{id}`
pub async fn update_one<S: ScheduleStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<NewEvent>,
) -> Result<Json<Event>, ApiError> {
  Ok(Json(EventService::new(&*store).update_by_id(id, body).await?))
}

/// `PUT /events/{id}/add_persons`, body: a JSON array of person ids.
pub async fn add_persons<S: ScheduleStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(person_ids): Json<Vec<Uuid>>,
) -> Result<Json<Event>, ApiError> {
  Ok(Json(
    EventService::new(&*store)
      .add_persons_to_event(id, person_ids)
      .await?,
  ))
}

/// `PATCH /events/{id}/cancel`
pub async fn cancel<S: ScheduleStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Event>, ApiError> {
  Ok(Json(EventService::new(&*store).toggle_cancelled(id).await?))
}

/// `DELETE /events/{id}`
pub async fn delete_one<S: ScheduleStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Event>, ApiError> {
  Ok(Json(EventService::new(&*store).delete_by_id(id).await?))
}
