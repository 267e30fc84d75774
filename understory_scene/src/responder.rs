// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The responder chain: views and controllers interleaved in event-handling order.
//!
//! ## Next responder
//!
//! - A controller's root view → that controller.
//! - Any other view → its superview.
//! - A controller → its root view's superview, else its parent controller,
//!   else the controller presenting it.
//!
//! ```
//! use understory_hierarchy::types::EnumerationStrategy;
//! use understory_scene::controller::{ControllerExt, PlainController};
//! use understory_scene::responder::Responder;
//! use understory_scene::types::ControllerRef;
//! use understory_scene::view::View;
//!
//! let screen: ControllerRef = PlainController::new("screen");
//! let button = View::new("button");
//! screen.view().add_subview(&button);
//!
//! let chain: Vec<String> = Responder::from(button)
//!     .chain(EnumerationStrategy::Inclusive)
//!     .iter()
//!     .map(|r| r.name().into())
//!     .collect();
//! assert_eq!(chain, ["button", "screen", "screen"]);
//! ```

use alloc::rc::Rc;

use understory_hierarchy::ancestors::Ancestors;
use understory_hierarchy::types::{EnumerationStrategy, ParentLookup};

use crate::controller::ControllerExt;
use crate::types::{ControllerRef, ViewRef};

/// A link in the responder chain.
#[derive(Clone, Debug)]
pub enum Responder {
    /// A view.
    View(ViewRef),
    /// A view controller.
    Controller(ControllerRef),
}

impl PartialEq for Responder {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::View(a), Self::View(b)) => Rc::ptr_eq(a, b),
            (Self::Controller(a), Self::Controller(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Responder {}

impl From<ViewRef> for Responder {
    fn from(view: ViewRef) -> Self {
        Self::View(view)
    }
}

impl From<ControllerRef> for Responder {
    fn from(controller: ControllerRef) -> Self {
        Self::Controller(controller)
    }
}

impl Responder {
    /// View name or controller title.
    pub fn name(&self) -> &str {
        match self {
            Self::View(v) => v.name(),
            Self::Controller(c) => c.title(),
        }
    }

    /// The view, if this link is one.
    pub fn as_view(&self) -> Option<&ViewRef> {
        match self {
            Self::View(v) => Some(v),
            Self::Controller(_) => None,
        }
    }

    /// The controller, if this link is one.
    pub fn as_controller(&self) -> Option<&ControllerRef> {
        match self {
            Self::Controller(c) => Some(c),
            Self::View(_) => None,
        }
    }

    /// The next responder.
    pub fn next_responder(&self) -> Option<Self> {
        ResponderChain.parent_of(self)
    }

    /// The responder chain from this link.
    pub fn chain(self, strategy: EnumerationStrategy) -> Ancestors<Self, ResponderChain> {
        Ancestors::with_strategy(ResponderChain, self, strategy)
    }
}

/// [`ParentLookup`] for the next-responder relation.
#[derive(Copy, Clone, Debug, Default)]
pub struct ResponderChain;

impl ParentLookup<Responder> for ResponderChain {
    fn parent_of(&self, node: &Responder) -> Option<Responder> {
        match node {
            Responder::View(view) => {
                if let Some(owner) = view.owner() {
                    return Some(Responder::Controller(owner));
                }
                view.superview().map(Responder::View)
            }
            Responder::Controller(controller) => controller
                .view_if_loaded()
                .and_then(|v| v.superview())
                .map(Responder::View)
                .or_else(|| controller.parent().map(Responder::Controller))
                .or_else(|| controller.presenting().map(Responder::Controller)),
        }
    }
}

/// The nearest controller on `view`'s responder chain.
pub fn nearest_controller(view: &ViewRef) -> Option<ControllerRef> {
    Responder::View(view.clone())
        .chain(EnumerationStrategy::Inclusive)
        .into_iter()
        .find_map(|r| match r {
            Responder::Controller(c) => Some(c),
            Responder::View(_) => None,
        })
}
