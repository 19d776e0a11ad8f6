//! SQL schema for the Gather SQLite store.
//!
//! Executed once at connection startup. `foreign_keys` is a per-connection
//! setting, so it lives here rather than in a migration.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS persons (
    person_id TEXT PRIMARY KEY,
    name      TEXT NOT NULL CHECK (length(trim(name)) > 0)
);

CREATE TABLE IF NOT EXISTS events (
    event_id    TEXT PRIMARY KEY,
    title       TEXT NOT NULL,
    description TEXT NOT NULL,
    time        TEXT NOT NULL,             -- RFC 3339 UTC
    cancelled   INTEGER NOT NULL DEFAULT 0 -- 0 = active, 1 = cancelled
);

-- Attendance. The composite key makes each (event, person) pair unique.
CREATE TABLE IF NOT EXISTS event_persons (
    event_id  TEXT NOT NULL REFERENCES events(event_id)   ON DELETE CASCADE,
    person_id TEXT NOT NULL REFERENCES persons(person_id) ON DELETE CASCADE,
    PRIMARY KEY (event_id, person_id)
);

CREATE INDEX IF NOT EXISTS event_persons_person_idx ON event_persons(person_id);

PRAGMA user_version = 1;
";
