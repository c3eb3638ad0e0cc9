//! Canonical row-change event vocabulary.
//!
//! `EventKind` is the single source of truth for which events a function
//! hook may subscribe to. Parsing is the only way an externally supplied
//! event name enters the system; anything outside the vocabulary fails
//! with [`UnsupportedEventKind`], never a silent default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An event name outside the canonical vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot map event kind \"{0}\": unknown")]
pub struct UnsupportedEventKind(pub String);

/// Abstract classification of a row-change event, before translation to
/// the database's native keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A row was inserted into the table.
    RowCreated,
    /// An existing row was updated in place.
    RowUpdated,
}

impl EventKind {
    /// The PostgreSQL event keyword a trigger for this kind fires on.
    pub fn sql_keyword(&self) -> &'static str {
        match self {
            EventKind::RowCreated => "INSERT",
            EventKind::RowUpdated => "UPDATE",
        }
    }

    /// Manifest spelling of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::RowCreated => "row_created",
            EventKind::RowUpdated => "row_updated",
        }
    }
}

impl FromStr for EventKind {
    type Err = UnsupportedEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row_created" => Ok(EventKind::RowCreated),
            "row_updated" => Ok(EventKind::RowUpdated),
            other => Err(UnsupportedEventKind(other.to_string())),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
