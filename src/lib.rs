// Copyright (c) 2025 - Cowboy AI, Inc.
//! Denotational Functional Reactive Programming Semantics
//!
//! This crate provides FRP types for modeling time-varying values in a
//! pure functional way. It distinguishes between continuous-time and
//! discrete-time values, following classical FRP semantics, and is
//! evaluated on demand at caller-chosen times — there is no scheduler,
//! no wall clock, and no push-based delivery.
//!
//! # Core Concepts
//!
//! ## Signal<V> (Continuous-Time)
//!
//! A value that exists at all points in time. You can sample a signal at
//! any instant to get the value it denotes there.
//!
//! ```text
//! Time: ────────────────────────────→
//! Value:  ≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈
//! ```
//!
//! ## EventStream<V> (Discrete-Time)
//!
//! A value that occurs at specific moments in time. Streams are lazy,
//! possibly infinite sequences of occurrences with strictly increasing
//! timestamps.
//!
//! ```text
//! Time: ────────────────────────────→
//! Value:      ●       ●   ●       ●
//! ```
//!
//! ## Cell<V> (Piecewise-Constant)
//!
//! A baseline value plus a stream of discrete updates: constant between
//! updates, stepping at each one. A cell derives both a continuous view
//! ([`Cell::value`]) and a change-notification stream ([`Cell::changes`]).
//!
//! ```text
//! Time:  ──────●───────●─────●──────→
//! Value: b₀    │ v₁    │ v₂  │ v₃
//! ```
//!
//! # FRP Laws
//!
//! Signals, streams, and cells must satisfy the Functor laws:
//!
//! ```text
//! map id = id
//! map (g . f) = map g . map f
//! ```
//!
//! Signal and Cell additionally support applicative combination
//! (`apply`, `map2`, `map3`), with cells coalescing simultaneous
//! updates of both sides into a single output occurrence.
//!
//! # Evaluation Model
//!
//! Single-threaded, synchronous, pull-based: pulling the next occurrence
//! of a derived stream evaluates exactly the combinators needed to
//! produce that one element. All values are immutable and referentially
//! transparent, so they may be shared freely across derived computations;
//! sampling and re-pulling are deterministic.
//!
//! # Example
//!
//! ```rust
//! use frp_semantics::{Cell, EventStream, Occurrence, Signal, Time};
//!
//! // Discrete updates to a quantity.
//! let updates = EventStream::from_vec(vec![
//!     Occurrence::new(Time(1.0), 20),
//!     Occurrence::new(Time(2.0), 30),
//! ]);
//!
//! // The quantity itself: baseline 10, stepping at each update.
//! let quantity = Cell::new(10, updates);
//!
//! // A continuous scale factor.
//! let scale = Signal::constant(2);
//!
//! // Sample the step function anywhere; updates become visible just
//! // after their instant.
//! assert_eq!(quantity.value().at(Time(1.0)), 10);
//! assert_eq!(quantity.value().at(Time(1.5)), 20);
//!
//! // Cross the discrete and continuous worlds at update instants.
//! let scaled: Vec<_> = quantity
//!     .changes()
//!     .probe(scale, |change, factor| change.new_value * factor)
//!     .occurrences()
//!     .map(|o| o.value)
//!     .collect();
//! assert_eq!(scaled, vec![40, 60]);
//! ```

pub mod cell;
pub mod errors;
pub mod signal;
pub mod stream;
pub mod time;

// Re-export commonly used types
pub use cell::{Cell, ValueChange};
pub use errors::SemanticsError;
pub use signal::Signal;
pub use stream::{EventStream, Occurrences};
pub use time::{Occurrence, Time};
