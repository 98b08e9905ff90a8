// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for the FRP semantics

use crate::time::Time;
use thiserror::Error;

/// Contract violations in how a caller assembled or fed the combinators
///
/// Neither variant is recoverable: both denote a logic error to be fixed
/// at the call site, so they surface as panics formatted from this type
/// rather than as `Result` values threaded through every lazy pull.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SemanticsError {
    /// An occurrence source produced timestamps out of strict order
    #[error("occurrences in the event stream aren't monotonic in the time axis ({previous} >= {next})")]
    OutOfOrderOccurrence {
        /// Time of the last successfully emitted occurrence
        previous: Time,
        /// Time of the occurrence that violated the ordering
        next: Time,
    },

    /// An operational operator with no pure semantics was invoked
    #[error("operational operator `{operation}` has no semantic implementation")]
    UnsupportedOperation {
        /// Name of the invoked operator
        operation: &'static str,
    },
}
