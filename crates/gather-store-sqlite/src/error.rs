//! Error type for `gather-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("sqlite error: {0}")]
  Sqlite(#[from] rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// A stored value violates a domain invariant (e.g. an empty name).
  #[error("corrupt row: {0}")]
  Corrupt(#[source] gather_core::Error),
}

impl From<Error> for gather_core::Error {
  fn from(e: Error) -> Self { gather_core::Error::Store(Box::new(e)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
