//! Uniqueness tokens and time source used by the session.

use chrono::{Local, NaiveDate};
use uuid::Uuid;

/// Source of uniqueness suffixes for new and duplicated molecules.
pub trait KeyGenerator {
    fn next_key(&mut self) -> String;
}

/// Time-ordered UUIDv7 keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidKeyGenerator;

impl KeyGenerator for UuidKeyGenerator {
    fn next_key(&mut self) -> String {
        Uuid::now_v7().to_string()
    }
}

impl<F> KeyGenerator for F
where
    F: FnMut() -> String,
{
    fn next_key(&mut self) -> String {
        self()
    }
}

/// Source of "today" for date field defaults.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Generates a fresh organism id, `<prefix>-<uuid>`.
pub fn new_organism_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}
