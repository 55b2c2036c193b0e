//! Clock abstraction for the front-page date.
//!
//! The `{date}` placeholder is resolved at construction time. Production
//! code uses [`SystemClock`]; tests inject [`FixedClock`] so the rendered
//! date is deterministic.

use chrono::{Local, NaiveDate};
use std::fmt::Debug;

/// Source of the current date.
pub trait Clock: Debug {
    /// Get today's date.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock date in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
