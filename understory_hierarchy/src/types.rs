// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core capabilities: parent lookups, realization, and enumeration strategy.
//!
//! ## Overview
//!
//! A hierarchy is described to this crate only through small capability traits.
//! The traversal types in [`ancestors`](crate::ancestors) and [`realize`](crate::realize)
//! are generic over them and never see the concrete node storage.

use alloc::vec::Vec;

/// Whether a traversal starts at the node itself or at its parent.
///
/// Accepted by [`Ancestors::with_strategy`](crate::ancestors::Ancestors::with_strategy)
/// purely as a dispatch convenience.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum EnumerationStrategy {
    /// The starting node is the first element.
    #[default]
    Inclusive,
    /// The starting node is skipped; traversal begins at its parent.
    Exclusive,
}

/// Look up the parent of a node.
///
/// This is the only capability ancestor traversal requires. The lookup is
/// consulted lazily, once per step, so implementations may read live state
/// (for example through a `RefCell`) and observe mutations made between steps.
///
/// Callers guarantee the relation is acyclic. A cycle makes traversal
/// non-terminating; it is not detected.
pub trait ParentLookup<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

impl<K, P: ParentLookup<K> + ?Sized> ParentLookup<K> for &P {
    #[inline]
    fn parent_of(&self, node: &K) -> Option<K> {
        (**self).parent_of(node)
    }
}

/// A no‑op parent provider: every node is a root.
///
/// All calls to [`ParentLookup::parent_of`] return `None`.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoParent;

impl<K> ParentLookup<K> for NoParent {
    #[inline]
    fn parent_of(&self, _node: &K) -> Option<K> {
        None
    }
}

/// A [`ParentLookup`] backed by a closure. Build one with [`parent_fn`].
#[derive(Copy, Clone)]
pub struct ParentFn<F>(F);

impl<F> core::fmt::Debug for ParentFn<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParentFn").finish_non_exhaustive()
    }
}

impl<K, F: Fn(&K) -> Option<K>> ParentLookup<K> for ParentFn<F> {
    #[inline]
    fn parent_of(&self, node: &K) -> Option<K> {
        (self.0)(node)
    }
}

/// Wrap a closure as a [`ParentLookup`].
///
/// ```
/// use understory_hierarchy::ancestors::Ancestors;
/// use understory_hierarchy::types::parent_fn;
///
/// let halve = parent_fn(|n: &u32| (*n > 1).then_some(*n / 2));
/// let chain: Vec<u32> = Ancestors::inclusive(halve, 12).into_iter().collect();
/// assert_eq!(chain, vec![12, 6, 3, 1]);
/// ```
pub fn parent_fn<K, F: Fn(&K) -> Option<K>>(f: F) -> ParentFn<F> {
    ParentFn(f)
}

/// Force lazily materialized nodes into existence and list their children.
///
/// Used by [`realize_subtree`](crate::realize::realize_subtree). `children_of`
/// is always called after `realize` for the same node, so children that only
/// appear once the node is realized are still visited.
pub trait Realize<K> {
    /// Materialize `node` if it has not been materialized yet.
    fn realize(&self, node: &K);
    /// Returns the children of `node` in visiting order.
    fn children_of(&self, node: &K) -> Vec<K>;
}

impl<K, R: Realize<K> + ?Sized> Realize<K> for &R {
    #[inline]
    fn realize(&self, node: &K) {
        (**self).realize(node);
    }

    #[inline]
    fn children_of(&self, node: &K) -> Vec<K> {
        (**self).children_of(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_parent_is_always_root() {
        assert_eq!(ParentLookup::<u32>::parent_of(&NoParent, &7), None);
    }

    #[test]
    fn parent_fn_forwards_to_closure() {
        let p = parent_fn(|n: &u32| n.checked_sub(1));
        assert_eq!(p.parent_of(&3), Some(2));
        assert_eq!(p.parent_of(&0), None);
        // Borrowed lookups forward as well.
        assert_eq!(ParentLookup::parent_of(&&p, &1), Some(0));
    }

    #[test]
    fn default_strategy_is_inclusive() {
        assert_eq!(EnumerationStrategy::default(), EnumerationStrategy::Inclusive);
    }
}
