// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_segue --heading-base-level=0

//! Understory Segue: type-checked configuration of screen transitions.
//!
//! ## Overview
//!
//! A [`Segue`](crate::segue::Segue) connects a source controller to a
//! destination controller. Before the transition runs, the source usually hands
//! data to the destination. The destination is only known as a
//! [`ControllerRef`](understory_scene::types::ControllerRef), so the hand-off needs
//! a downcast, and often an unwrapping step first:
//!
//! - the destination may be a navigation controller wrapping the real screen;
//! - the destination may nominate another controller as its
//!   [configuration target](understory_scene::controller::ControllerExt::effective_configuration_target);
//! - the source may be embedded in a container that coordinates it.
//!
//! The accessors on [`Segue`](crate::segue::Segue) perform these steps and report
//! any failure as a [`SegueError`](crate::error::SegueError) that names the segue,
//! the expected and actual types, and the calling location.
//!
//! ## One-shot specifications
//!
//! [`SegueSpecification`](crate::specification::SegueSpecification) pairs an identifier
//! with a configuration closure that may run once.
//! [`prepare`](crate::specification::prepare) dispatches a segue to the matching
//! specification in a list.
//!
//! ## Failing fast
//!
//! Errors are returned, never raised. Callers that want a typing mistake to stop
//! the program call [`OrAbort::or_abort`](crate::error::OrAbort::or_abort) on the result.
//!
//! ```
//! use understory_scene::controller::{ControllerExt, PlainController};
//! use understory_segue::error::SegueError;
//! use understory_segue::segue::Segue;
//!
//! let segue = Segue::new("show", PlainController::new("list"), PlainController::new("detail"));
//! let plain = segue.configure_destination(|d: std::rc::Rc<PlainController>| d.title().to_owned());
//! assert_eq!(plain.unwrap(), "detail");
//!
//! let wrapped = segue.configure_wrapped_destination(|_: std::rc::Rc<PlainController>, _| ());
//! assert!(matches!(wrapped, Err(SegueError::TypeMismatch { .. })));
//! ```
//!
//! Everything here is `!Send`, like the controllers it configures.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod segue;
pub mod specification;
