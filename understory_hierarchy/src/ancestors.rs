// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ancestor-chain sequences.
//!
//! ## Overview
//!
//! [`Ancestors`] describes the walk `node, parent(node), parent(parent(node)), …`
//! up to a root. It is a restartable sequence: every call to [`Ancestors::iter`]
//! (or iterating `&Ancestors`) produces an independent [`AncestorIter`] cursor
//! starting from the original node.
//!
//! ## Live reads
//!
//! The cursor never snapshots the chain. After yielding a node, its parent is
//! looked up only when the next element is requested, so reparenting performed
//! between two `next` calls is observed.
//!
//! ```
//! use core::cell::Cell;
//! use understory_hierarchy::ancestors::Ancestors;
//! use understory_hierarchy::types::parent_fn;
//!
//! // 1 → 2 → 3, and later 1 → 9.
//! let reparented = Cell::new(false);
//! let parents = parent_fn(|n: &u32| match (*n, reparented.get()) {
//!     (1, false) => Some(2),
//!     (1, true) => Some(9),
//!     (2, _) => Some(3),
//!     _ => None,
//! });
//! let seq = Ancestors::inclusive(&parents, 1);
//! let mut it = seq.iter();
//! assert_eq!(it.next(), Some(1));
//! reparented.set(true);
//! assert_eq!(it.next(), Some(9));
//! assert_eq!(it.next(), None);
//! ```
//!
//! ## Termination
//!
//! Sequences are finite when the parent relation is acyclic. Cycles are not
//! detected; bound the walk with [`Iterator::take`] if the relation is untrusted.

use core::iter::FusedIterator;

use crate::types::{EnumerationStrategy, ParentLookup};

/// A lazy, restartable sequence of ancestors.
///
/// Holds the first node to yield (if any) and the parent lookup used to walk
/// from it. Construct with [`Ancestors::inclusive`], [`Ancestors::exclusive`],
/// or [`Ancestors::with_strategy`].
#[derive(Clone, Debug)]
pub struct Ancestors<K, P> {
    start: Option<K>,
    lookup: P,
}

impl<K: Clone, P: ParentLookup<K>> Ancestors<K, P> {
    /// Sequence starting at `node` itself.
    pub fn inclusive(lookup: P, node: K) -> Self {
        Self {
            start: Some(node),
            lookup,
        }
    }

    /// Sequence starting at the parent of `node`; empty when `node` is a root.
    ///
    /// The parent is read once, here.
    pub fn exclusive(lookup: P, node: &K) -> Self {
        let start = lookup.parent_of(node);
        Self { start, lookup }
    }

    /// Sequence whose first element is `first`; empty when `first` is `None`.
    pub fn starting_at(lookup: P, first: Option<K>) -> Self {
        Self {
            start: first,
            lookup,
        }
    }

    /// Pick [`inclusive`](Self::inclusive) or [`exclusive`](Self::exclusive) from `strategy`.
    pub fn with_strategy(lookup: P, node: K, strategy: EnumerationStrategy) -> Self {
        match strategy {
            EnumerationStrategy::Inclusive => Self::inclusive(lookup, node),
            EnumerationStrategy::Exclusive => Self::exclusive(lookup, &node),
        }
    }

    /// The first node this sequence yields, if any.
    pub fn first(&self) -> Option<&K> {
        self.start.as_ref()
    }

    /// Returns `true` if the sequence yields nothing.
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    /// The parent lookup driving this sequence.
    pub fn lookup(&self) -> &P {
        &self.lookup
    }

    /// A fresh cursor over the sequence, from its original start.
    pub fn iter(&self) -> AncestorIter<K, &P> {
        AncestorIter::new(self.start.clone(), &self.lookup)
    }

    /// Push-style enumeration with early stop.
    ///
    /// Calls `f` once per node. If `f` sets the flag to `true`, enumeration
    /// halts right after that call. Returns `true` if it was stopped early.
    ///
    /// ```
    /// use understory_hierarchy::ancestors::Ancestors;
    /// use understory_hierarchy::types::parent_fn;
    ///
    /// let seq = Ancestors::inclusive(parent_fn(|n: &u32| n.checked_sub(1)), 5);
    /// let mut seen = Vec::new();
    /// let stopped = seq.enumerate(|n, stop| {
    ///     seen.push(*n);
    ///     *stop = *n == 3;
    /// });
    /// assert!(stopped);
    /// assert_eq!(seen, vec![5, 4, 3]);
    /// ```
    pub fn enumerate(&self, mut f: impl FnMut(&K, &mut bool)) -> bool {
        let mut stop = false;
        for node in self {
            f(&node, &mut stop);
            if stop {
                return true;
            }
        }
        false
    }

    /// The nearest node in the sequence satisfying `pred`.
    pub fn first_where(&self, mut pred: impl FnMut(&K) -> bool) -> Option<K> {
        self.iter().find(|node| pred(node))
    }
}

impl<'a, K: Clone, P: ParentLookup<K>> IntoIterator for &'a Ancestors<K, P> {
    type Item = K;
    type IntoIter = AncestorIter<K, &'a P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Clone, P: ParentLookup<K>> IntoIterator for Ancestors<K, P> {
    type Item = K;
    type IntoIter = AncestorIter<K, P>;

    fn into_iter(self) -> Self::IntoIter {
        AncestorIter::new(self.start, self.lookup)
    }
}

/// Push-style enumeration over the ancestors of `node`.
///
/// Shorthand for [`Ancestors::with_strategy`] followed by [`Ancestors::enumerate`].
pub fn enumerate_ancestors<K: Clone, P: ParentLookup<K>>(
    lookup: P,
    node: K,
    strategy: EnumerationStrategy,
    f: impl FnMut(&K, &mut bool),
) -> bool {
    Ancestors::with_strategy(lookup, node, strategy).enumerate(f)
}

#[derive(Clone, Debug)]
enum Cursor<K> {
    /// Next element is known and has not been yielded.
    Pending(K),
    /// Last yielded element; its parent is read on the next step.
    Yielded(K),
    Exhausted,
}

/// Single-pass cursor over an [`Ancestors`] sequence.
///
/// Once exhausted it keeps returning `None`.
#[derive(Clone, Debug)]
pub struct AncestorIter<K, L> {
    cursor: Cursor<K>,
    lookup: L,
}

impl<K, L> AncestorIter<K, L> {
    fn new(start: Option<K>, lookup: L) -> Self {
        let cursor = match start {
            Some(node) => Cursor::Pending(node),
            None => Cursor::Exhausted,
        };
        Self { cursor, lookup }
    }
}

impl<K: Clone, L: ParentLookup<K>> Iterator for AncestorIter<K, L> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        let node = match core::mem::replace(&mut self.cursor, Cursor::Exhausted) {
            Cursor::Pending(node) => node,
            Cursor::Yielded(prev) => self.lookup.parent_of(&prev)?,
            Cursor::Exhausted => return None,
        };
        self.cursor = Cursor::Yielded(node.clone());
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor {
            Cursor::Pending(_) => (1, None),
            Cursor::Yielded(_) => (0, None),
            Cursor::Exhausted => (0, Some(0)),
        }
    }
}

impl<K: Clone, L: ParentLookup<K>> FusedIterator for AncestorIter<K, L> {}
