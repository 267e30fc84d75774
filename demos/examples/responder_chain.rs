// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Superview, parent-controller, and responder chains in a small scene.
//!
//! Builds a window hosting a navigation stack whose top screen embeds a card,
//! then prints each chain from a button inside the card.
//!
//! Run:
//! - `cargo run -p understory_demos --example responder_chain`
//! - `RUST_LOG=debug cargo run -p understory_demos --example responder_chain` to see view loading.

use kurbo::{Affine, Point, Rect, Vec2};
use understory_hierarchy::types::EnumerationStrategy;
use understory_scene::controller::{ControllerExt, PlainController};
use understory_scene::navigation::NavigationController;
use understory_scene::responder::{Responder, nearest_controller};
use understory_scene::types::ControllerRef;
use understory_scene::view::View;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let window = View::with_bounds("window", Rect::new(0.0, 0.0, 800.0, 600.0));

    let inbox: ControllerRef = PlainController::new("inbox");
    let nav = NavigationController::with_root("mail", inbox.clone());
    window.add_subview(&nav.view());
    nav.view().add_subview(&inbox.view());

    let card: ControllerRef = PlainController::new("card");
    inbox.add_child(card.clone());
    let card_view = card.view();
    card_view.set_local_transform(Affine::translate(Vec2::new(40.0, 120.0)));
    inbox.view().add_subview(&card_view);

    let button = View::with_bounds("button", Rect::new(0.0, 0.0, 80.0, 24.0));
    button.set_local_transform(Affine::translate(Vec2::new(10.0, 10.0)));
    card_view.add_subview(&button);

    println!("== Superviews of button ==");
    for v in &button.inclusive_superviews() {
        println!("  {}", v.name());
    }

    println!("== Parent controllers of card ==");
    for c in &card.parent_controllers(EnumerationStrategy::Exclusive) {
        println!("  {} ({})", c.title(), c.type_name());
    }
    if let Some(nav) = card.navigation_controller() {
        println!("card is inside navigation controller {:?}", nav.title());
    }

    println!("== Responder chain from button ==");
    for r in &Responder::from(button.clone()).chain(EnumerationStrategy::Inclusive) {
        let kind = match r {
            Responder::View(_) => "view",
            Responder::Controller(_) => "controller",
        };
        println!("  {kind:<10} {}", r.name());
    }
    if let Some(c) = nearest_controller(&button) {
        println!("nearest controller: {}", c.title());
    }

    println!("== Geometry ==");
    println!("button world bounds: {:?}", button.world_bounds());
    println!(
        "button origin in window: {:?}",
        button.convert_point(Point::ZERO, &window)
    );
}
