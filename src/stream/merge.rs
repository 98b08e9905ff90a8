// Copyright (c) 2025 - Cowboy AI, Inc.
//! Merge Engine - Generic Two-Source Occurrence Merge
//!
//! Merges two monotonic occurrence sources into one monotonic stream,
//! lazily, one element at a time:
//!
//! - when one source is exhausted, the other is drained through its
//!   per-side transform;
//! - at distinct head times, the earlier head is emitted through its
//!   transform and only that side advances;
//! - at EQUAL head times, both heads coalesce into exactly one output
//!   occurrence via `combine`, and both sides advance.
//!
//! Lookahead is bounded: no more than one element of either input is
//! forced ahead of what the consumer has pulled, which is what lets the
//! merge run over conceptually infinite streams. Output timestamps are
//! input timestamps, so the result is monotonic by construction and is
//! not re-checked.
//!
//! [`EventStream::merge_with`](crate::EventStream::merge_with) is the
//! same-type specialization (identity transforms);
//! [`Cell::apply`](crate::Cell::apply) supplies cross-sampling transforms
//! to combine heterogeneous update streams.

use super::{EventStream, Occurrences};
use crate::time::Occurrence;
use std::cmp::Ordering;
use std::iter::Peekable;

/// Merge two monotonic streams into one through per-side transforms and
/// an equal-time combiner
pub(crate) fn merge_occurrences<X, Y, Z, FA, FB, FC>(
    left: EventStream<X>,
    right: EventStream<Y>,
    transform_left: FA,
    transform_right: FB,
    combine: FC,
) -> EventStream<Z>
where
    X: Clone + Send + Sync + 'static,
    Y: Clone + Send + Sync + 'static,
    Z: Clone + Send + Sync + 'static,
    FA: Fn(Occurrence<X>) -> Z + Clone + Send + Sync + 'static,
    FB: Fn(Occurrence<Y>) -> Z + Clone + Send + Sync + 'static,
    FC: Fn(Occurrence<X>, Occurrence<Y>) -> Z + Clone + Send + Sync + 'static,
{
    EventStream::from_source(move || Merge {
        left: left.occurrences().peekable(),
        right: right.occurrences().peekable(),
        transform_left: transform_left.clone(),
        transform_right: transform_right.clone(),
        combine: combine.clone(),
    })
}

/// Lazy merge iterator over two peekable occurrence handles
struct Merge<X, Y, FA, FB, FC> {
    left: Peekable<Occurrences<X>>,
    right: Peekable<Occurrences<Y>>,
    transform_left: FA,
    transform_right: FB,
    combine: FC,
}

impl<X, Y, Z, FA, FB, FC> Iterator for Merge<X, Y, FA, FB, FC>
where
    FA: Fn(Occurrence<X>) -> Z,
    FB: Fn(Occurrence<Y>) -> Z,
    FC: Fn(Occurrence<X>, Occurrence<Y>) -> Z,
{
    type Item = Occurrence<Z>;

    fn next(&mut self) -> Option<Occurrence<Z>> {
        // Peeking forces at most the head of each side.
        let left_time = self.left.peek().map(|occurrence| occurrence.time);
        let right_time = self.right.peek().map(|occurrence| occurrence.time);

        match (left_time, right_time) {
            (None, None) => None,
            (Some(_), None) => self.left.next().map(|occurrence| {
                let time = occurrence.time;
                Occurrence::new(time, (self.transform_left)(occurrence))
            }),
            (None, Some(_)) => self.right.next().map(|occurrence| {
                let time = occurrence.time;
                Occurrence::new(time, (self.transform_right)(occurrence))
            }),
            (Some(left_head), Some(right_head)) => match left_head.cmp(&right_head) {
                Ordering::Equal => {
                    tracing::trace!(time = %left_head, "coalescing simultaneous occurrences");
                    self.left
                        .next()
                        .zip(self.right.next())
                        .map(|(left, right)| {
                            Occurrence::new(left_head, (self.combine)(left, right))
                        })
                }
                Ordering::Less => self.left.next().map(|occurrence| {
                    Occurrence::new(left_head, (self.transform_left)(occurrence))
                }),
                Ordering::Greater => self.right.next().map(|occurrence| {
                    Occurrence::new(right_head, (self.transform_right)(occurrence))
                }),
            },
        }
    }
}
