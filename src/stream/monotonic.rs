// Copyright (c) 2025 - Cowboy AI, Inc.
//! Monotonicity Guard
//!
//! Wraps a raw occurrence iterator and enforces the event-stream
//! invariant: strictly increasing timestamps. The check is lazy — a
//! violation fails at the first offending pull, not at construction, and
//! never for the first element. This is the single enforcement point for
//! the invariant; combinator-built streams preserve it by construction
//! and are not re-checked.

use crate::errors::SemanticsError;
use crate::time::{Occurrence, Time};

/// Iterator adapter checking strict time monotonicity on each pull
pub(crate) struct Monotonic<I> {
    inner: I,
    previous_time: Option<Time>,
}

impl<I> Monotonic<I> {
    pub(crate) fn new(inner: I) -> Self {
        Self {
            inner,
            previous_time: None,
        }
    }
}

impl<V, I> Iterator for Monotonic<I>
where
    I: Iterator<Item = Occurrence<V>>,
{
    type Item = Occurrence<V>;

    /// # Panics
    ///
    /// With [`SemanticsError::OutOfOrderOccurrence`] when the produced
    /// occurrence does not strictly follow the last emitted one.
    fn next(&mut self) -> Option<Occurrence<V>> {
        let occurrence = self.inner.next()?;

        if let Some(previous) = self.previous_time {
            if occurrence.time <= previous {
                let error = SemanticsError::OutOfOrderOccurrence {
                    previous,
                    next: occurrence.time,
                };
                tracing::error!(%previous, next = %occurrence.time, "event stream ordering violated");
                panic!("{error}");
            }
        }

        self.previous_time = Some(occurrence.time);
        Some(occurrence)
    }
}
