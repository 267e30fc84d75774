// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_hierarchy --heading-base-level=0

//! Understory Hierarchy: lazy ancestor-chain traversal for any single-parent tree.
//!
//! ## Overview
//!
//! UI toolkits keep several parallel "parent" relations: a view's superview, a
//! controller's parent controller, a responder's next responder.
//! This crate walks any of them with one abstraction.
//! Describe the relation with a [`ParentLookup`](crate::types::ParentLookup) and
//! build an [`Ancestors`](crate::ancestors::Ancestors) sequence from a starting node.
//!
//! The crate never owns or builds the hierarchy. It only reads it, one parent
//! lookup per step, so the hierarchy may change while a walk is in progress.
//!
//! ## Modes
//!
//! - Inclusive: `node, parent(node), …` up to the root.
//! - Exclusive: `parent(node), …`, empty when `node` is a root.
//! - [`EnumerationStrategy`](crate::types::EnumerationStrategy) picks one at runtime.
//!
//! ## Minimal usage
//!
//! ```
//! use understory_hierarchy::ancestors::Ancestors;
//! use understory_hierarchy::types::ParentLookup;
//!
//! struct Parents;
//! impl ParentLookup<u32> for Parents {
//!     fn parent_of(&self, node: &u32) -> Option<u32> {
//!         match node {
//!             3 => Some(2),
//!             2 => Some(1),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let seq = Ancestors::inclusive(Parents, 3);
//! assert_eq!(seq.iter().collect::<Vec<_>>(), vec![3, 2, 1]);
//! // Sequences restart from the original node.
//! assert_eq!(seq.iter().count(), 3);
//!
//! let parents_only = Ancestors::exclusive(Parents, &3);
//! assert_eq!(parents_only.iter().collect::<Vec<_>>(), vec![2, 1]);
//! ```
//!
//! ## Push-style enumeration
//!
//! [`Ancestors::enumerate`](crate::ancestors::Ancestors::enumerate) hands each node to a
//! callback together with a stop flag, for callers that prefer that shape.
//!
//! ## Realization
//!
//! [`realize_subtree`](crate::realize::realize_subtree) forces a lazily materialized
//! subtree into existence with an explicit work stack.
//! See [`Realize`](crate::types::Realize).
//!
//! ## Cycles
//!
//! The parent relation must be acyclic. Cycles are not detected and make a
//! sequence infinite.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod ancestors;
pub mod realize;
pub mod types;
