// Copyright (c) 2025 - Cowboy AI, Inc.
//! Signal - Continuous-Time Values
//!
//! A `Signal<V>` represents a value that exists at all points in time.
//! You can sample a signal at any instant to get the value it denotes
//! there.
//!
//! ```text
//! Time: ────────────────────────────→
//! Value:  ≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈
//! ```
//!
//! # Mathematical Model
//!
//! A signal is a pure function from time to value:
//!
//! ```text
//! Signal<V> ≅ Time → V
//! ```
//!
//! Sampling is deterministic and referentially transparent: `at(t)` may
//! be evaluated any number of times, from any number of derived
//! computations, with identical results. Nothing is memoized and nothing
//! needs to be.
//!
//! # Examples
//!
//! ## Constant Signal
//!
//! ```rust
//! use frp_semantics::{Signal, Time};
//!
//! let constant = Signal::constant(42);
//! assert_eq!(constant.at(Time(-10.0)), 42);
//! assert_eq!(constant.at(Time(6.2)), 42);
//! ```
//!
//! ## Derived Signal
//!
//! ```rust
//! use frp_semantics::{Signal, Time};
//!
//! let ramp = Signal::from_fn(|t| t.0 * 2.0);
//! let shifted = ramp.map(|x| x + 1.0);
//! assert_eq!(shifted.at(Time(3.0)), 7.0);
//! ```

use crate::errors::SemanticsError;
use crate::time::Time;
use std::fmt;
use std::sync::Arc;

/// Continuous-time value that can be sampled at any instant
///
/// Implemented as a shared sampling function so that signals clone
/// cheaply and compose without evaluating anything until [`at`](Signal::at)
/// is called. Any closure of shape `Fn(Time) -> V` qualifies as a signal
/// through [`from_fn`](Signal::from_fn); there is no hierarchy to extend.
///
/// # Type Parameters
///
/// - `V`: The type of value the signal carries
#[derive(Clone)]
pub struct Signal<V> {
    /// Function that produces the value denoted at a given instant
    sampler: Arc<dyn Fn(Time) -> V + Send + Sync>,
}

impl<V> fmt::Debug for Signal<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signal<{}>", std::any::type_name::<V>())
    }
}

impl<V: Clone + Send + Sync + 'static> Signal<V> {
    /// Create a constant signal with a fixed value
    ///
    /// The resulting signal denotes the same value at every instant,
    /// negative and zero included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frp_semantics::{Signal, Time};
    ///
    /// let constant = Signal::constant(8);
    /// assert_eq!(constant.at(Time(0.0)), 8);
    /// ```
    pub fn constant(value: V) -> Self {
        Self {
            sampler: Arc::new(move |_| value.clone()),
        }
    }

    /// Create a signal from a sampling function
    ///
    /// This is the general constructor: any pure `Time -> V` function is
    /// a signal. The function must not hide mutable state — repeated
    /// sampling at the same instant must return the same value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frp_semantics::{Signal, Time};
    ///
    /// let square = Signal::from_fn(|t| t.0 * t.0);
    /// assert_eq!(square.at(Time(3.0)), 9.0);
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Time) -> V + Send + Sync + 'static,
    {
        Self {
            sampler: Arc::new(f),
        }
    }

    /// Sample the signal at instant `t`
    ///
    /// The sole read primitive for continuous values. Pure and total over
    /// all real-valued time.
    pub fn at(&self, t: Time) -> V {
        (self.sampler)(t)
    }

    /// Apply a function to the signal's values
    ///
    /// `result.at(t) == f(self.at(t))` for every `t`.
    ///
    /// # Laws
    ///
    /// Must satisfy the Functor laws:
    /// 1. `signal.map(id) == signal`
    /// 2. `signal.map(f).map(g) == signal.map(|x| g(f(x)))`
    pub fn map<U, F>(self, transform: F) -> Signal<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(V) -> U + Send + Sync + 'static,
    {
        let sampler = self.sampler;
        Signal {
            sampler: Arc::new(move |t| transform(sampler(t))),
        }
    }

    /// Apply a signal of functions to a signal of arguments
    ///
    /// `result.at(t) == function.at(t)(argument.at(t))` — both sides are
    /// sampled at the same instant.
    pub fn apply<A, F>(function: Signal<F>, argument: Signal<A>) -> Signal<V>
    where
        A: Clone + Send + Sync + 'static,
        F: Fn(A) -> V + Clone + Send + Sync + 'static,
    {
        Signal {
            sampler: Arc::new(move |t| (function.at(t))(argument.at(t))),
        }
    }

    /// Flatten a signal of signals by one level
    ///
    /// `result.at(t) == signal.at(t).at(t)` — the outer signal is
    /// evaluated first, then the inner one, both at the same instant.
    pub fn sample(signal: Signal<Signal<V>>) -> Signal<V> {
        Signal {
            sampler: Arc::new(move |t| signal.at(t).at(t)),
        }
    }

    /// Map each value to a signal, then flatten
    ///
    /// Composition of [`map`](Signal::map) and [`sample`](Signal::sample).
    pub fn sample_of<B, F>(self, transform: F) -> Signal<B>
    where
        B: Clone + Send + Sync + 'static,
        F: Fn(V) -> Signal<B> + Send + Sync + 'static,
    {
        Signal::sample(self.map(transform))
    }

    /// Lift a unary function over a signal
    pub fn map1<A, F>(sa: Signal<A>, f: F) -> Signal<V>
    where
        A: Clone + Send + Sync + 'static,
        F: Fn(A) -> V + Send + Sync + 'static,
    {
        sa.map(f)
    }

    /// Lift a binary function over two signals
    ///
    /// Built from [`map`](Signal::map) and [`apply`](Signal::apply) by
    /// currying `f` one argument at a time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frp_semantics::{Signal, Time};
    ///
    /// let sum = Signal::map2(Signal::constant(3), Signal::constant(4), |a, b| a + b);
    /// assert_eq!(sum.at(Time(0.0)), 7);
    /// ```
    pub fn map2<A, B, F>(sa: Signal<A>, sb: Signal<B>, f: F) -> Signal<V>
    where
        A: Clone + Send + Sync + 'static,
        B: Clone + Send + Sync + 'static,
        F: Fn(A, B) -> V + Clone + Send + Sync + 'static,
    {
        let lifted = sa.map(move |a| {
            let f = f.clone();
            move |b: B| f(a.clone(), b)
        });

        Signal::apply(lifted, sb)
    }

    /// Lift a ternary function over three signals
    pub fn map3<A, B, C, F>(sa: Signal<A>, sb: Signal<B>, sc: Signal<C>, f: F) -> Signal<V>
    where
        A: Clone + Send + Sync + 'static,
        B: Clone + Send + Sync + 'static,
        C: Clone + Send + Sync + 'static,
        F: Fn(A, B, C) -> V + Clone + Send + Sync + 'static,
    {
        let lifted = sa.map(move |a| {
            let f = f.clone();
            move |b: B| {
                let f = f.clone();
                let a = a.clone();
                move |c: C| f(a.clone(), b.clone(), c)
            }
        });

        Signal::apply(Signal::apply(lifted, sb), sc)
    }

    /// Operational escape hatch: a signal backed by external sampling
    ///
    /// Has no pure semantics and is intentionally unsupported in this
    /// model. Kept in the API surface as a documented contract.
    ///
    /// # Panics
    ///
    /// Always, with [`SemanticsError::UnsupportedOperation`].
    pub fn source<F>(_sample_external: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
    {
        panic!(
            "{}",
            SemanticsError::UnsupportedOperation {
                operation: "Signal::source",
            }
        )
    }

    /// Operational escape hatch: sample outside the time axis
    ///
    /// Has no pure semantics and is intentionally unsupported in this
    /// model.
    ///
    /// # Panics
    ///
    /// Always, with [`SemanticsError::UnsupportedOperation`].
    pub fn sample_externally(&self) -> V {
        panic!(
            "{}",
            SemanticsError::UnsupportedOperation {
                operation: "Signal::sample_externally",
            }
        )
    }
}
