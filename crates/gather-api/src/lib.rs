//! JSON REST API for Gather.
//!
//! Exposes an axum [`Router`] backed by any [`ScheduleStore`]. Each request
//! builds its service over the shared store handle and runs one store
//! transaction. Transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(gather_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod events;
pub mod persons;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, patch, post, put},
};
use gather_core::store::ScheduleStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ScheduleStore + 'static,
{
  Router::new()
    // Persons
    .route("/persons/", get(persons::list::<S>).post(persons::create::<S>))
    .route(
      "/persons/{id}",
      get(persons::get_one::<S>).delete(persons::delete_one::<S>),
    )
    // Events
    .route("/events/", get(events::list::<S>))
    .route("/events/create_no_persons", post(events::create_no_persons::<S>))
    .route(
      "/events/create_with_persons",
      post(events::create_with_persons::<S>),
    )
    .route(
      "/events/{id}",
      get(events::get_one::<S>)
        .put(events::update_one::<S>)
        .delete(events::delete_one::<S>),
    )
    .route("/events/{id}/add_persons", put(events::add_persons::<S>))
    .route("/events/{id}/cancel", patch(events::cancel::<S>))
    .with_state(store)
}

// ─── Route tests ──────────────────────────────────────────────────────────────
