// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cell - Piecewise-Constant Time-Varying Values
//!
//! A `Cell<V>` holds a baseline value plus a stream of discrete updates.
//! It denotes a step function of time: the baseline up to the first
//! update, then the most recent update's value.
//!
//! ```text
//! Time:  ──────●───────●─────●──────→
//! Value: b₀    │ v₁    │ v₂  │ v₃
//!        ──────┘       └─────┘
//! ```
//!
//! # Update Visibility
//!
//! The update boundary is LEFT-EXCLUSIVE: an update at time `t₀` is not
//! yet visible when sampling [`value`](Cell::value) exactly at `t₀`; it
//! becomes visible for any `t > t₀`. Equivalently, `value.at(t)` is the
//! value of the last update whose time is STRICTLY less than `t`, or the
//! baseline when no update qualifies.
//!
//! # Derived Views
//!
//! A cell does not own a signal; it derives one on demand:
//! [`value`](Cell::value) gives the continuous view, and
//! [`changes`](Cell::changes) gives a stream of
//! [`ValueChange`] transition records, one per update.
//!
//! # Examples
//!
//! ```rust
//! use frp_semantics::{Cell, EventStream, Occurrence, Time};
//!
//! let cell = Cell::new(
//!     10,
//!     EventStream::from_vec(vec![
//!         Occurrence::new(Time(1.0), 20),
//!         Occurrence::new(Time(2.0), 30),
//!     ]),
//! );
//!
//! assert_eq!(cell.value().at(Time(1.0)), 10); // not yet visible
//! assert_eq!(cell.value().at(Time(1.5)), 20);
//! assert_eq!(cell.value().at(Time(9.0)), 30);
//! ```

use crate::errors::SemanticsError;
use crate::signal::Signal;
use crate::stream::merge::merge_occurrences;
use crate::stream::EventStream;
use crate::time::Occurrence;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transition record produced per update occurrence by [`Cell::changes`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueChange<V> {
    /// Value immediately preceding the update
    pub old_value: V,
    /// Value carried by the update
    pub new_value: V,
}

/// A baseline value plus a stream of discrete updates
///
/// # Type Parameters
///
/// - `V`: The type of value the cell carries
#[derive(Clone)]
pub struct Cell<V> {
    initial_value: V,
    new_values: EventStream<V>,
}

impl<V> fmt::Debug for Cell<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell<{}>", std::any::type_name::<V>())
    }
}

impl<V: Clone + Send + Sync + 'static> Cell<V> {
    /// Create a cell from a baseline value and its update stream
    pub fn new(initial_value: V, new_values: EventStream<V>) -> Self {
        Self {
            initial_value,
            new_values,
        }
    }

    /// Create a cell that never changes
    pub fn constant(value: V) -> Self {
        Self {
            initial_value: value,
            new_values: EventStream::never(),
        }
    }

    /// The baseline value, in effect up to (and including) the first
    /// update's instant
    pub fn initial_value(&self) -> &V {
        &self.initial_value
    }

    /// The stream of update occurrences
    pub fn new_values(&self) -> &EventStream<V> {
        &self.new_values
    }

    /// Derive the continuous view of the cell
    ///
    /// `value().at(t)` walks the update stream and returns the value of
    /// the last update whose time is strictly less than `t`; with no
    /// qualifying update it returns the baseline. An update exactly at
    /// `t` is not yet visible (left-exclusive boundary).
    pub fn value(&self) -> Signal<V> {
        let initial_value = self.initial_value.clone();
        let new_values = self.new_values.clone();

        Signal::from_fn(move |t| {
            let mut current = initial_value.clone();
            for occurrence in new_values.occurrences() {
                if occurrence.time >= t {
                    break;
                }
                current = occurrence.value;
            }
            current
        })
    }

    /// Derive the change-notification stream
    ///
    /// One [`ValueChange`] per update occurrence, at the update's own
    /// time: `old_value` is the value immediately preceding the update
    /// (the previous update's value, or the baseline for the first) and
    /// `new_value` is the update's carried value.
    pub fn changes(&self) -> EventStream<ValueChange<V>> {
        let initial_value = self.initial_value.clone();
        let new_values = self.new_values.clone();

        EventStream::from_source(move || {
            let mut previous = initial_value.clone();
            new_values.occurrences().map(move |occurrence| {
                let old_value = std::mem::replace(&mut previous, occurrence.value.clone());
                Occurrence::new(
                    occurrence.time,
                    ValueChange {
                        old_value,
                        new_value: occurrence.value,
                    },
                )
            })
        })
    }

    /// Map the baseline and every update value through `transform`
    pub fn map<U, F>(self, transform: F) -> Cell<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(V) -> U + Clone + Send + Sync + 'static,
    {
        Cell {
            initial_value: transform(self.initial_value),
            new_values: self.new_values.map(transform),
        }
    }

    /// Apply a cell of functions to a cell of arguments
    ///
    /// The result's baseline is `function.initial_value(argument.initial_value)`.
    /// Its update stream is the merge of both update streams:
    ///
    /// - a function update alone applies the NEW function to the
    ///   argument's value just before that instant;
    /// - an argument update alone applies the function's value just
    ///   before that instant to the NEW argument;
    /// - simultaneous updates coalesce into one occurrence applying the
    ///   new function directly to the new argument.
    pub fn apply<A, F>(function: Cell<F>, argument: Cell<A>) -> Cell<V>
    where
        A: Clone + Send + Sync + 'static,
        F: Fn(A) -> V + Clone + Send + Sync + 'static,
    {
        let initial_value = (function.initial_value)(argument.initial_value.clone());
        let function_value = function.value();
        let argument_value = argument.value();

        let new_values = merge_occurrences(
            function.new_values,
            argument.new_values,
            move |function_occurrence| {
                let argument_before = argument_value.at(function_occurrence.time);
                (function_occurrence.value)(argument_before)
            },
            move |argument_occurrence| {
                (function_value.at(argument_occurrence.time))(argument_occurrence.value)
            },
            |function_occurrence, argument_occurrence| {
                (function_occurrence.value)(argument_occurrence.value)
            },
        );

        Cell {
            initial_value,
            new_values,
        }
    }

    /// Lift a unary function over a cell
    pub fn map1<A, F>(ca: Cell<A>, f: F) -> Cell<V>
    where
        A: Clone + Send + Sync + 'static,
        F: Fn(A) -> V + Clone + Send + Sync + 'static,
    {
        ca.map(f)
    }

    /// Lift a binary function over two cells
    ///
    /// Built from [`map`](Cell::map) and [`apply`](Cell::apply) by
    /// currying `f` one argument at a time, mirroring the signal lifts.
    pub fn map2<A, B, F>(ca: Cell<A>, cb: Cell<B>, f: F) -> Cell<V>
    where
        A: Clone + Send + Sync + 'static,
        B: Clone + Send + Sync + 'static,
        F: Fn(A, B) -> V + Clone + Send + Sync + 'static,
    {
        let lifted = ca.map(move |a| {
            let f = f.clone();
            move |b: B| f(a.clone(), b)
        });

        Cell::apply(lifted, cb)
    }

    /// Lift a ternary function over three cells
    pub fn map3<A, B, C, F>(ca: Cell<A>, cb: Cell<B>, cc: Cell<C>, f: F) -> Cell<V>
    where
        A: Clone + Send + Sync + 'static,
        B: Clone + Send + Sync + 'static,
        C: Clone + Send + Sync + 'static,
        F: Fn(A, B, C) -> V + Clone + Send + Sync + 'static,
    {
        let lifted = ca.map(move |a| {
            let f = f.clone();
            move |b: B| {
                let f = f.clone();
                let a = a.clone();
                move |c: C| f(a.clone(), b.clone(), c)
            }
        });

        Cell::apply(Cell::apply(lifted, cb), cc)
    }

    /// Flatten a cell whose value is itself a cell
    ///
    /// Declared contract only; the re-derivation of update streams as
    /// the outer cell changes is an open design question.
    ///
    /// # Panics
    ///
    /// Always, with [`SemanticsError::UnsupportedOperation`].
    pub fn switch(_cell: Cell<Cell<V>>) -> Cell<V> {
        panic!(
            "{}",
            SemanticsError::UnsupportedOperation {
                operation: "Cell::switch",
            }
        )
    }

    /// Flatten a cell of streams into the one live stream
    ///
    /// Declared contract only; which source stream is live across outer
    /// changes is an open design question.
    ///
    /// # Panics
    ///
    /// Always, with [`SemanticsError::UnsupportedOperation`].
    pub fn divert(_cell: Cell<EventStream<V>>) -> EventStream<V> {
        panic!(
            "{}",
            SemanticsError::UnsupportedOperation {
                operation: "Cell::divert",
            }
        )
    }

    /// Map each value to a cell, then flatten
    ///
    /// Composition of [`map`](Cell::map) and [`switch`](Cell::switch);
    /// fails through `switch` until its semantics are fixed.
    ///
    /// # Panics
    ///
    /// Always, with [`SemanticsError::UnsupportedOperation`].
    pub fn switch_of<B, F>(self, transform: F) -> Cell<B>
    where
        B: Clone + Send + Sync + 'static,
        F: Fn(V) -> Cell<B> + Clone + Send + Sync + 'static,
    {
        Cell::switch(self.map(transform))
    }
}
