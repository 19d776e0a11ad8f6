//! Error types for `gather-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("person name must not be empty")]
  EmptyName,

  #[error("id must not be the nil uuid")]
  InvalidId,

  #[error("person not found: {0}")]
  PersonNotFound(Uuid),

  #[error("event not found: {0}")]
  EventNotFound(Uuid),

  #[error("event {0} already exists")]
  EventExists(Uuid),

  #[error("not implemented: {0}")]
  NotImplemented(&'static str),

  /// Unexpected fault raised by the storage backend.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
