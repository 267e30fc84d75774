// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ancestor sequences over a plain parent table.
//!
//! Walks a small directory-like tree inclusively and exclusively, stops a
//! push-style enumeration early, and re-parents a node in the middle of a walk.
//!
//! Run:
//! - `cargo run -p understory_demos --example ancestors_basics`

use std::cell::RefCell;
use std::collections::HashMap;

use understory_hierarchy::ancestors::{Ancestors, enumerate_ancestors};
use understory_hierarchy::types::{EnumerationStrategy, ParentLookup};

#[derive(Default)]
struct Tree(RefCell<HashMap<&'static str, &'static str>>);

impl Tree {
    fn link(&self, child: &'static str, parent: &'static str) {
        self.0.borrow_mut().insert(child, parent);
    }
}

impl ParentLookup<&'static str> for Tree {
    fn parent_of(&self, node: &&'static str) -> Option<&'static str> {
        self.0.borrow().get(node).copied()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let tree = Tree::default();
    tree.link("src", "/");
    tree.link("lib.rs", "src");
    tree.link("docs", "/");

    println!("== Inclusive from lib.rs ==");
    let seq = Ancestors::inclusive(&tree, "lib.rs");
    println!("{:?}", seq.iter().collect::<Vec<_>>());

    println!("== Exclusive from lib.rs ==");
    let parents = Ancestors::exclusive(&tree, &"lib.rs");
    println!("{:?}", parents.iter().collect::<Vec<_>>());
    println!("exclusive from root is empty: {}", Ancestors::exclusive(&tree, &"/").is_empty());

    println!("== Stop at the first directory named src ==");
    let stopped = enumerate_ancestors(&tree, "lib.rs", EnumerationStrategy::Inclusive, |n, stop| {
        println!("  visit {n}");
        *stop = *n == "src";
    });
    println!("stopped early: {stopped}");

    println!("== Re-parent while walking ==");
    let mut it = seq.iter();
    println!("  {:?}", it.next());
    // The parent of lib.rs is read on the next step, so the move is observed.
    tree.link("lib.rs", "docs");
    for n in it {
        println!("  {n:?}");
    }
}
