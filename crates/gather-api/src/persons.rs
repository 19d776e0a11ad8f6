//! Handlers for `/persons` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/persons/` | All persons |
//! | `POST`   | `/persons/?person_name=X` | Returns 201 + new person |
//! | `GET`    | `/persons/{id}` | 404 if not found |
//! | `DELETE` | `/persons/{id}` | Returns the deleted person; 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use gather_core::{person::Person, service::PersonService, store::ScheduleStore};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;

/// `GET /persons/`
pub async fn list<S: ScheduleStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Person>>, ApiError> {
  let persons = PersonService::new(&*store).list_all().await?;
  Ok(Json(persons))
}

#[derive(Debug, Deserialize)]
pub struct CreateParams {
  pub person_name: String,
}

/// `POST /persons/?person_name=<name>`
pub async fn create<S: ScheduleStore>(
  State(store): State<Arc<S>>,
  Query(params): Query<CreateParams>,
) -> Result<impl IntoResponse, ApiError> {
  let person = PersonService::new(&*store).create(&params.person_name).await?;
  Ok((StatusCode::CREATED, Json(person)))
}

/// `GET /persons/{id}`
pub async fn get_one<S: ScheduleStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Person>, ApiError> {
  Ok(Json(PersonService::new(&*store).get(id).await?))
}

/// `DELETE /persons/{id}`
pub async fn delete_one<S: ScheduleStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Person>, ApiError> {
  Ok(Json(PersonService::new(&*store).delete(id).await?))
}
