// Copyright (c) 2025 - Cowboy AI, Inc.
//! EventStream - Discrete-Time Occurrences
//!
//! An `EventStream<V>` represents values that occur at specific moments
//! in time. Unlike signals, which exist at all times, streams only have
//! values at their occurrences.
//!
//! ```text
//! Time: ────────────────────────────→
//! Value:      ●       ●   ●       ●
//! ```
//!
//! # Mathematical Model
//!
//! A stream is a lazy, possibly infinite sequence of occurrences in
//! strictly increasing time order:
//!
//! ```text
//! EventStream<V> ≅ [(Time, V)]   where t₁ < t₂ < …
//! ```
//!
//! The sequence is never materialized: pulling the next occurrence of a
//! derived stream evaluates exactly the combinators needed for that one
//! element, recursively pulling upstream as needed and no further. A
//! consumer that stops pulling leaves no work behind.
//!
//! # Occurrence Handles
//!
//! [`occurrences`](EventStream::occurrences) hands out a fresh, one-shot
//! [`Occurrences`] iterator positioned at the start of the stream. Each
//! handle is independent; holding several and interleaving pulls is fine,
//! and re-pulling from a fresh handle is deterministic. Strict time
//! monotonicity is enforced lazily on raw sources (see
//! [`new`](EventStream::new)) and preserved by construction through every
//! combinator.
//!
//! # Examples
//!
//! ## Finite stream
//!
//! ```rust
//! use frp_semantics::{EventStream, Occurrence, Time};
//!
//! let stream = EventStream::from_vec(vec![
//!     Occurrence::new(Time(1.0), 10),
//!     Occurrence::new(Time(2.0), 20),
//! ]);
//!
//! let doubled: Vec<_> = stream.map(|n| n * 2).occurrences().collect();
//! assert_eq!(doubled[1], Occurrence::new(Time(2.0), 40));
//! ```
//!
//! ## Infinite stream
//!
//! ```rust
//! use frp_semantics::{EventStream, Occurrence, Time};
//!
//! let naturals = EventStream::new(|| {
//!     std::iter::successors(Some(Occurrence::new(Time(1.0), 1)), |previous| {
//!         Some(Occurrence::new(Time(previous.time.0 + 1.0), previous.value + 1))
//!     })
//! });
//!
//! let prefix: Vec<_> = naturals.occurrences().take(3).map(|o| o.value).collect();
//! assert_eq!(prefix, vec![1, 2, 3]);
//! ```

pub(crate) mod merge;
mod monotonic;

use crate::errors::SemanticsError;
use crate::signal::Signal;
use crate::time::Occurrence;
use monotonic::Monotonic;
use std::fmt;
use std::sync::Arc;

/// Restartable producer of occurrence iterators
type OccurrenceSource<V> = Arc<dyn Fn() -> Box<dyn Iterator<Item = Occurrence<V>>> + Send + Sync>;

/// Discrete-time stream of occurrences in strictly increasing time order
///
/// Owns a restartable lazy source: every call to
/// [`occurrences`](EventStream::occurrences) produces a fresh iterator
/// over the same sequence, which is what makes repeated sampling of a
/// derived [`Cell::value`](crate::Cell::value) deterministic. Streams
/// clone cheaply and share their source.
///
/// # Type Parameters
///
/// - `V`: The type of value the occurrences carry
pub struct EventStream<V> {
    source: OccurrenceSource<V>,
}

impl<V> Clone for EventStream<V> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<V> fmt::Debug for EventStream<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventStream<{}>", std::any::type_name::<V>())
    }
}

/// One-shot iterator handle over a stream's occurrences
///
/// Obtained from [`EventStream::occurrences`]. May be consumed once from
/// its current position; get another handle from the stream to restart.
pub struct Occurrences<V> {
    inner: Box<dyn Iterator<Item = Occurrence<V>>>,
}

impl<V> Iterator for Occurrences<V> {
    type Item = Occurrence<V>;

    fn next(&mut self) -> Option<Occurrence<V>> {
        self.inner.next()
    }
}

impl<V: Clone + Send + Sync + 'static> EventStream<V> {
    /// Create a stream from a raw occurrence source
    ///
    /// `source` is invoked once per [`occurrences`](EventStream::occurrences)
    /// call and must regenerate the same sequence each time. Every
    /// iterator handed out is wrapped in the monotonicity guard: the
    /// producer contract is strictly increasing timestamps, checked
    /// lazily at each pull.
    ///
    /// # Panics
    ///
    /// Pulling an occurrence whose time does not strictly exceed the
    /// previously pulled one panics with
    /// [`SemanticsError::OutOfOrderOccurrence`] at that pull — not at
    /// construction, and never for the first element.
    pub fn new<S, I>(source: S) -> Self
    where
        S: Fn() -> I + Send + Sync + 'static,
        I: IntoIterator<Item = Occurrence<V>>,
        I::IntoIter: 'static,
    {
        Self {
            source: Arc::new(move || Box::new(Monotonic::new(source().into_iter()))),
        }
    }

    /// Create a finite stream from a vector of occurrences
    ///
    /// The occurrences are taken as-is: they must already be in strictly
    /// increasing time order, or the guard fails at the offending pull.
    pub fn from_vec(occurrences: Vec<Occurrence<V>>) -> Self {
        Self::new(move || occurrences.clone())
    }

    /// Create a derived stream from a source whose ordering is
    /// guaranteed by construction; no guard is attached
    pub(crate) fn from_source<S, I>(source: S) -> Self
    where
        S: Fn() -> I + Send + Sync + 'static,
        I: IntoIterator<Item = Occurrence<V>>,
        I::IntoIter: 'static,
    {
        Self {
            source: Arc::new(move || Box::new(source().into_iter())),
        }
    }

    /// The stream with no occurrences
    pub fn never() -> Self {
        Self::from_source(std::iter::empty)
    }

    /// Get a fresh lazy iterator over the stream's occurrences
    ///
    /// Each handle is independent and starts from the beginning of the
    /// sequence; pulling one does not advance another.
    pub fn occurrences(&self) -> Occurrences<V> {
        Occurrences {
            inner: (self.source)(),
        }
    }

    /// Transform each occurrence's value, preserving times and order
    ///
    /// # Laws
    ///
    /// Must satisfy the Functor laws over any finite prefix:
    /// 1. `stream.map(id) == stream`
    /// 2. `stream.map(f).map(g) == stream.map(|x| g(f(x)))`
    pub fn map<U, F>(self, transform: F) -> EventStream<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(V) -> U + Clone + Send + Sync + 'static,
    {
        let source = self.source;
        EventStream::from_source(move || {
            let transform = transform.clone();
            (source)().map(move |occurrence| occurrence.map(&transform))
        })
    }

    /// Keep only occurrences whose value satisfies the predicate
    ///
    /// Order and times are preserved. Over an infinite stream, pulling
    /// past the last accepted occurrence does not terminate unless the
    /// predicate rejects a cofinite suffix.
    pub fn filter<P>(self, predicate: P) -> EventStream<V>
    where
        P: Fn(&V) -> bool + Clone + Send + Sync + 'static,
    {
        let source = self.source;
        EventStream::from_source(move || {
            let predicate = predicate.clone();
            (source)().filter(move |occurrence| predicate(&occurrence.value))
        })
    }

    /// Combine each occurrence with the signal sampled at the
    /// occurrence's own time
    ///
    /// Emits `(o.time, combine(o.value, signal.at(o.time)))` for each
    /// occurrence `o`.
    pub fn probe<B, C, F>(self, signal: Signal<B>, combine: F) -> EventStream<C>
    where
        B: Clone + Send + Sync + 'static,
        C: Clone + Send + Sync + 'static,
        F: Fn(V, B) -> C + Clone + Send + Sync + 'static,
    {
        let source = self.source;
        EventStream::from_source(move || {
            let signal = signal.clone();
            let combine = combine.clone();
            (source)().map(move |occurrence| {
                let sampled = signal.at(occurrence.time);
                occurrence.map(|value| combine(value, sampled))
            })
        })
    }

    /// Sample the signal at each occurrence time, discarding the
    /// stream's own value
    pub fn prick<B>(self, signal: Signal<B>) -> EventStream<B>
    where
        B: Clone + Send + Sync + 'static,
    {
        self.probe(signal, |_, sampled| sampled)
    }

    /// Flatten a stream of signals by sampling each carried signal at
    /// its own occurrence time
    pub fn sample(stream: EventStream<Signal<V>>) -> EventStream<V> {
        let source = stream.source;
        EventStream::from_source(move || {
            (source)().map(|occurrence| {
                let time = occurrence.time;
                occurrence.map(|signal| signal.at(time))
            })
        })
    }

    /// Map each value to a signal, then flatten
    ///
    /// Composition of [`map`](EventStream::map) and
    /// [`sample`](EventStream::sample).
    pub fn sample_of<B, F>(self, selector: F) -> EventStream<B>
    where
        B: Clone + Send + Sync + 'static,
        F: Fn(V) -> Signal<B> + Clone + Send + Sync + 'static,
    {
        EventStream::sample(self.map(selector))
    }

    /// Merge with another stream of the same value type
    ///
    /// Occurrences from both streams interleave in time order. When both
    /// streams have an occurrence at the SAME instant, the two values
    /// coalesce into exactly one output occurrence via `combine` (own
    /// value first, other's second).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frp_semantics::{EventStream, Occurrence, Time};
    ///
    /// let left = EventStream::from_vec(vec![Occurrence::new(Time(1.0), "a".to_string())]);
    /// let right = EventStream::from_vec(vec![Occurrence::new(Time(1.0), "b".to_string())]);
    ///
    /// let merged = left.merge_with(right, |x, y| format!("{x}{y}"));
    /// let values: Vec<_> = merged.occurrences().map(|o| o.value).collect();
    /// assert_eq!(values, vec!["ab".to_string()]);
    /// ```
    pub fn merge_with<F>(self, other: EventStream<V>, combine: F) -> EventStream<V>
    where
        F: Fn(V, V) -> V + Clone + Send + Sync + 'static,
    {
        merge::merge_occurrences(
            self,
            other,
            |occurrence| occurrence.value,
            |occurrence| occurrence.value,
            move |left, right| combine(left.value, right.value),
        )
    }

    /// Push-based delivery registration
    ///
    /// Declared contract only; delivery semantics are an open design
    /// question and intentionally unimplemented in this model.
    ///
    /// # Panics
    ///
    /// Always, with [`SemanticsError::UnsupportedOperation`].
    pub fn subscribe<F>(self, _listener: F)
    where
        F: FnMut(V) + Send + 'static,
    {
        panic!(
            "{}",
            SemanticsError::UnsupportedOperation {
                operation: "EventStream::subscribe",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Time;

    fn finite(pairs: Vec<(f64, i32)>) -> EventStream<i32> {
        EventStream::from_vec(
            pairs
                .into_iter()
                .map(|(t, v)| Occurrence::new(Time(t), v))
                .collect(),
        )
    }

    fn collect<V: Clone + Send + Sync + 'static>(stream: &EventStream<V>) -> Vec<Occurrence<V>> {
        stream.occurrences().collect()
    }

    #[test]
    fn test_never_has_no_occurrences() {
        let stream: EventStream<i32> = EventStream::never();

        assert_eq!(stream.occurrences().count(), 0);
    }

    #[test]
    fn test_from_vec_preserves_order_and_values() {
        let stream = finite(vec![(1.2, 10), (3.1, 20), (5.8, 30)]);

        assert_eq!(
            collect(&stream),
            vec![
                Occurrence::new(Time(1.2), 10),
                Occurrence::new(Time(3.1), 20),
                Occurrence::new(Time(5.8), 30),
            ]
        );
    }

    #[test]
    fn test_map_transforms_values_and_keeps_times() {
        let stream = finite(vec![(1.2, 10), (3.1, 20), (5.8, 30)]);

        let result = stream.map(|n| format!("0x{n:X}"));

        assert_eq!(
            collect(&result),
            vec![
                Occurrence::new(Time(1.2), "0xA".to_string()),
                Occurrence::new(Time(3.1), "0x14".to_string()),
                Occurrence::new(Time(5.8), "0x1E".to_string()),
            ]
        );
    }

    #[test]
    fn test_filter_keeps_matching_occurrences() {
        let stream = finite(vec![(1.0, 1), (2.0, 2), (3.0, 3), (4.0, 4)]);

        let evens = stream.filter(|n| n % 2 == 0);

        assert_eq!(
            collect(&evens),
            vec![
                Occurrence::new(Time(2.0), 2),
                Occurrence::new(Time(4.0), 4),
            ]
        );
    }

    #[test]
    fn test_probe_samples_signal_at_occurrence_time() {
        let stream = finite(vec![(1.0, 5), (3.0, 7)]);
        let signal = Signal::from_fn(|t| t.0 as i32);

        let result = stream.probe(signal, |value, sampled| value * 10 + sampled);

        assert_eq!(
            collect(&result),
            vec![
                Occurrence::new(Time(1.0), 51),
                Occurrence::new(Time(3.0), 73),
            ]
        );
    }

    #[test]
    fn test_prick_keeps_only_sampled_values() {
        let stream = finite(vec![(2.0, 99), (4.0, 99)]);
        let signal = Signal::from_fn(|t| t.0 * 10.0);

        let result = stream.prick(signal);

        assert_eq!(
            collect(&result),
            vec![
                Occurrence::new(Time(2.0), 20.0),
                Occurrence::new(Time(4.0), 40.0),
            ]
        );
    }

    #[test]
    fn test_sample_flattens_stream_of_signals() {
        let stream = EventStream::from_vec(vec![
            Occurrence::new(Time(3.0), Signal::from_fn(|t| t.0 * t.0)),
            Occurrence::new(Time(5.0), Signal::from_fn(|t| t.0 / 4.0)),
        ]);

        let result = EventStream::sample(stream);

        assert_eq!(
            collect(&result),
            vec![
                Occurrence::new(Time(3.0), 9.0),
                Occurrence::new(Time(5.0), 1.25),
            ]
        );
    }

    #[test]
    fn test_sample_of_selects_then_flattens() {
        let stream = finite(vec![(2.0, 1), (4.0, 2)]);

        let result = stream.sample_of(|n| Signal::from_fn(move |t| n as f64 * t.0));

        assert_eq!(
            collect(&result),
            vec![
                Occurrence::new(Time(2.0), 2.0),
                Occurrence::new(Time(4.0), 8.0),
            ]
        );
    }

    #[test]
    fn test_merge_with_interleaves_and_coalesces() {
        let left = finite(vec![(1.0, 1), (3.0, 3)]);
        let right = finite(vec![(2.0, 2), (3.0, 30)]);

        let merged = left.merge_with(right, |a, b| a + b);

        assert_eq!(
            collect(&merged),
            vec![
                Occurrence::new(Time(1.0), 1),
                Occurrence::new(Time(2.0), 2),
                Occurrence::new(Time(3.0), 33),
            ]
        );
    }

    #[test]
    fn test_independent_handles_restart_from_the_beginning() {
        let stream = finite(vec![(1.0, 1), (2.0, 2)]);

        let mut first = stream.occurrences();
        first.next();
        first.next();

        // A second handle is unaffected by the first being drained.
        assert_eq!(
            stream.occurrences().collect::<Vec<_>>(),
            vec![
                Occurrence::new(Time(1.0), 1),
                Occurrence::new(Time(2.0), 2),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "no semantic implementation")]
    fn test_subscribe_fails_immediately() {
        let stream = finite(vec![(1.0, 1)]);
        stream.subscribe(|_| {});
    }
}
