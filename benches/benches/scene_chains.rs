// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Rect, Vec2};
use understory_hierarchy::types::EnumerationStrategy;
use understory_scene::controller::{ControllerExt, PlainController, load_views_recursively};
use understory_scene::responder::{Responder, nearest_controller};
use understory_scene::types::{ControllerRef, ViewRef};
use understory_scene::view::View;

/// A chain of `depth` views, each offset from its superview. Returns (root, leaf).
fn view_chain(depth: usize) -> (ViewRef, ViewRef) {
    let root = View::with_bounds("root", Rect::new(0.0, 0.0, 1000.0, 1000.0));
    let mut leaf = root.clone();
    for i in 0..depth {
        let v = View::with_bounds(format!("v{i}"), Rect::new(0.0, 0.0, 10.0, 10.0));
        v.set_local_transform(Affine::translate(Vec2::new(1.0, 0.5)));
        leaf.add_subview(&v);
        leaf = v;
    }
    (root, leaf)
}

/// Nested controllers, each embedding the next and installing its view.
fn controller_chain(depth: usize) -> (ControllerRef, ViewRef) {
    let root: ControllerRef = PlainController::new("c0");
    let mut parent = root.clone();
    for i in 1..depth {
        let child: ControllerRef = PlainController::new(format!("c{i}"));
        parent.add_child(child.clone());
        parent.view().add_subview(&child.view());
        parent = child;
    }
    let leaf = View::new("leaf");
    parent.view().add_subview(&leaf);
    (root, leaf)
}

fn bench_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("superviews");
    for &depth in &[8usize, 64, 512] {
        let (root, leaf) = view_chain(depth);
        group.bench_function(format!("world_transform_d{}", depth), |b| {
            b.iter(|| black_box(leaf.world_transform()))
        });
        group.bench_function(format!("convert_point_d{}", depth), |b| {
            b.iter(|| black_box(leaf.convert_point(Point::new(1.0, 1.0), &root)))
        });
        group.bench_function(format!("is_descendant_of_d{}", depth), |b| {
            b.iter(|| black_box(leaf.is_descendant_of(&root)))
        });
    }
    group.finish();
}

fn bench_responders(c: &mut Criterion) {
    let mut group = c.benchmark_group("responder_chain");
    for &depth in &[4usize, 32, 128] {
        let (root, leaf) = controller_chain(depth);
        group.bench_function(format!("full_chain_d{}", depth), |b| {
            b.iter(|| {
                black_box(
                    Responder::from(leaf.clone())
                        .chain(EnumerationStrategy::Inclusive)
                        .iter()
                        .count(),
                )
            })
        });
        group.bench_function(format!("nearest_controller_d{}", depth), |b| {
            b.iter(|| black_box(nearest_controller(&leaf)))
        });
        group.bench_function(format!("load_views_recursively_d{}", depth), |b| {
            b.iter(|| black_box(load_views_recursively(&root)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_views, bench_responders);
criterion_main!(benches);
