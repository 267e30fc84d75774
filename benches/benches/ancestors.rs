// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_hierarchy::ancestors::Ancestors;
use understory_hierarchy::realize::realize_subtree;
use understory_hierarchy::types::{ParentLookup, Realize, parent_fn};

/// Parent table: `parents[i]` is the parent of node `i`.
struct Table(Vec<Option<u32>>);

impl ParentLookup<u32> for Table {
    fn parent_of(&self, node: &u32) -> Option<u32> {
        self.0.get(*node as usize).copied().flatten()
    }
}

fn chain(depth: usize) -> Table {
    Table(
        (0..depth)
            .map(|i| if i == 0 { None } else { Some(i as u32 - 1) })
            .collect(),
    )
}

/// Complete tree with `fanout` children per node, stored breadth-first.
struct Wide {
    fanout: u32,
    len: u32,
}

impl Realize<u32> for Wide {
    fn realize(&self, node: &u32) {
        black_box(node);
    }

    fn children_of(&self, node: &u32) -> Vec<u32> {
        let first = node * self.fanout + 1;
        (first..first + self.fanout).filter(|c| *c < self.len).collect()
    }
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("ancestors_walk");
    for &depth in &[16usize, 256, 4096] {
        let table = chain(depth);
        let leaf = depth as u32 - 1;
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_function(format!("iter_inclusive_d{}", depth), |b| {
            b.iter(|| {
                let seq = Ancestors::inclusive(&table, black_box(leaf));
                black_box(seq.iter().count())
            })
        });
        group.bench_function(format!("enumerate_d{}", depth), |b| {
            b.iter(|| {
                let seq = Ancestors::exclusive(&table, &black_box(leaf));
                let mut n = 0_usize;
                seq.enumerate(|_, _| n += 1);
                black_box(n)
            })
        });
        group.bench_function(format!("first_where_midpoint_d{}", depth), |b| {
            let mid = leaf / 2;
            b.iter(|| {
                let seq = Ancestors::inclusive(&table, black_box(leaf));
                black_box(seq.first_where(|n| *n == mid))
            })
        });
    }
    group.finish();
}

fn bench_closure_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("ancestors_closure");
    // Implicit binary-heap parents: no table at all.
    let lookup = parent_fn(|n: &u64| if *n <= 1 { None } else { Some(n / 2) });
    for &start in &[1_u64 << 10, 1 << 40, u64::MAX] {
        group.bench_function(format!("heap_parents_from_{:#x}", start), |b| {
            b.iter(|| black_box(Ancestors::inclusive(&lookup, black_box(start)).iter().count()))
        });
    }
    group.finish();
}

fn bench_realize(c: &mut Criterion) {
    let mut group = c.benchmark_group("realize_subtree");
    for &(fanout, len) in &[(2_u32, 1_u32 << 12), (8, 1 << 12), (64, 1 << 16)] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(format!("fanout{}_n{}", fanout, len), |b| {
            let tree = Wide { fanout, len };
            b.iter(|| black_box(realize_subtree(&tree, 0)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_walk, bench_closure_lookup, bench_realize);
criterion_main!(benches);
