use std::{fmt, str::FromStr};

use lazy_static::lazy_static;
use parking_lot::Mutex;
use thiserror::Error;
use ulid::{Generator, Ulid};

use crate::time::TimestampMs;

/// Length of the canonical string representation.
pub const ID_LEN: usize = ulid::ULID_LEN;

lazy_static! {
    static ref GENERATOR: Mutex<Generator> = Mutex::new(Generator::new());
}

/// Time-ordered, lexicographically sortable identifier (ULID).
///
/// The creation time of the identified object is encoded in the
/// identifier itself and can be recovered with [`Id::created_on`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(Ulid);

impl Id {
    /// Generates a new identifier.
    ///
    /// Identifiers generated by the same process are strictly increasing,
    /// even within the same millisecond.
    pub fn new() -> Self {
        // Only fails if 2^80 identifiers were generated within the same millisecond.
        let ulid = GENERATOR.lock().generate().unwrap_or_else(|_| Ulid::new());
        Self(ulid)
    }

    pub fn created_on(&self) -> TimestampMs {
        TimestampMs::from_millis(self.0.timestamp_ms() as i64)
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Ulid> for Id {
    fn from(from: Ulid) -> Self {
        Self(from)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Malformed identifier")]
pub struct MalformedIdentifier;

impl FromStr for Id {
    type Err = MalformedIdentifier;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ID_LEN {
            return Err(MalformedIdentifier);
        }
        Ulid::from_string(s).map(Self).map_err(|_| MalformedIdentifier)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
