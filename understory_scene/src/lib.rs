// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scene --heading-base-level=0

//! Understory Scene: a small retained view / view-controller object model.
//!
//! ## Overview
//!
//! This crate gives the three classic UI parent relations concrete types so
//! they can be walked with [`understory_hierarchy`]:
//!
//! - [`View`](crate::view::View): superview chain, via [`Superviews`](crate::view::Superviews).
//! - [`ViewController`](crate::controller::ViewController): parent-controller chain, via
//!   [`ParentControllers`](crate::controller::ParentControllers).
//! - [`Responder`](crate::responder::Responder): responder chain interleaving both, via
//!   [`ResponderChain`](crate::responder::ResponderChain).
//!
//! It does no layout, drawing, or event dispatch. Geometry is limited to local
//! bounds and transforms (Kurbo types) so ancestor walks have something to
//! compose: [`View::world_transform`](crate::view::View::world_transform) is a fold
//! over the superview chain.
//!
//! ## Ownership
//!
//! Handles are `Rc`. Parents own children; child → parent links are weak.
//! Controllers load their root view lazily on first access to
//! [`ControllerExt::view`](crate::controller::ControllerExt::view), and containers
//! may create children at that point.
//! [`load_views_recursively`](crate::controller::load_views_recursively) forces a whole
//! controller subtree to load.
//!
//! ## Configuration targets and semantic containers
//!
//! [`ControllerExt::effective_configuration_target`](crate::controller::ControllerExt::effective_configuration_target)
//! and [`ControllerExt::effective_semantic_container`](crate::controller::ControllerExt::effective_semantic_container)
//! resolve the indirections used when configuring screen transitions.
//!
//! ## Threading
//!
//! Everything here is `!Send`; a hierarchy lives on the thread that built it.
//!
//! This crate is `no_std` and uses `alloc`. The default `std` feature (or
//! `libm`) selects Kurbo's float backend.

#![no_std]

extern crate alloc;

pub mod controller;
pub mod navigation;
pub mod responder;
pub mod types;
pub mod view;
