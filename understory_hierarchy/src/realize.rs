// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eager realization of lazily materialized subtrees.
//!
//! Some hierarchies only create a node's children once the node itself is
//! materialized (a container screen creating its embedded children when its
//! content loads, for example). [`realize_subtree`] forces the whole subtree
//! into existence with an explicit work stack, so deep hierarchies do not
//! grow the call stack.

use alloc::vec;
use alloc::vec::Vec;

use crate::types::Realize;

/// Realize `root` and every node reachable through [`Realize::children_of`].
///
/// Nodes are visited depth-first in pre-order, children in the order
/// `children_of` returns them. Each node is realized before its children are
/// listed. Returns the number of nodes visited.
///
/// ```
/// use core::cell::RefCell;
/// use understory_hierarchy::realize::realize_subtree;
/// use understory_hierarchy::types::Realize;
///
/// // Node `n` only gains children `2n + 1` and `2n + 2` (below 7) once realized.
/// struct Lazy(RefCell<Vec<u32>>);
/// impl Realize<u32> for Lazy {
///     fn realize(&self, node: &u32) {
///         self.0.borrow_mut().push(*node);
///     }
///     fn children_of(&self, node: &u32) -> Vec<u32> {
///         assert!(self.0.borrow().contains(node));
///         [2 * node + 1, 2 * node + 2].into_iter().filter(|c| *c < 7).collect()
///     }
/// }
///
/// let lazy = Lazy(RefCell::new(Vec::new()));
/// assert_eq!(realize_subtree(&lazy, 0), 7);
/// assert_eq!(*lazy.0.borrow(), vec![0, 1, 3, 4, 2, 5, 6]);
/// ```
pub fn realize_subtree<K, R: Realize<K>>(realizer: R, root: K) -> usize {
    let mut stack = vec![root];
    let mut visited = 0;
    while let Some(node) = stack.pop() {
        realizer.realize(&node);
        visited += 1;
        let mut children = realizer.children_of(&node);
        // Reverse so the first child is popped next.
        children.reverse();
        stack.extend(children);
    }
    visited
}
