// Copyright (c) 2025 - Cowboy AI, Inc.
//! Time Instants and Event Occurrences
//!
//! `Time` is a real-valued scalar marking an instant on the time axis.
//! `Occurrence<V>` pairs an instant with the value that occurred there.
//! Sequences of occurrences carry the strict-monotonicity invariant; a
//! single occurrence carries none of its own.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// An instant on the time axis
///
/// Wraps an `f64` with a TOTAL order (via [`f64::total_cmp`]) so that
/// instants can be compared, merged, and coalesced without a partial-order
/// escape hatch. Equality follows the same total comparison.
///
/// # Examples
///
/// ```rust
/// use frp_semantics::Time;
///
/// assert!(Time(1.0) < Time(2.5));
/// assert_eq!(Time(3.0), Time(3.0));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Time(pub f64);

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0).is_eq()
    }
}

impl Eq for Time {}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A discrete event: a value at an instant
///
/// Immutable pair of time and carried value. The value can be transformed
/// with [`map`](Occurrence::map); the time is fixed for life.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence<V> {
    /// Instant at which the value occurred
    pub time: Time,
    /// The carried value
    pub value: V,
}

impl<V> Occurrence<V> {
    /// Create an occurrence of `value` at `time`
    pub fn new(time: Time, value: V) -> Self {
        Self { time, value }
    }

    /// Transform the carried value, keeping the time fixed
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frp_semantics::{Occurrence, Time};
    ///
    /// let occurrence = Occurrence::new(Time(2.0), 21);
    /// assert_eq!(occurrence.map(|n| n * 2), Occurrence::new(Time(2.0), 42));
    /// ```
    pub fn map<U, F>(self, transform: F) -> Occurrence<U>
    where
        F: FnOnce(V) -> U,
    {
        Occurrence {
            time: self.time,
            value: transform(self.value),
        }
    }
}
