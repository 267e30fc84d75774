// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack-based navigation container.

use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::controller::{ControllerCore, ControllerExt, ViewController};
use crate::types::ControllerRef;

/// A container managing a stack of controllers; the first is the root.
///
/// Stacked controllers are also its children. Custom navigation types can
/// embed one via [`NavigationController::with_core`] and return it from
/// [`ViewController::as_navigation`].
#[derive(Debug)]
pub struct NavigationController {
    core: ControllerCore,
    stack: RefCell<Vec<ControllerRef>>,
}

impl NavigationController {
    /// Create an empty navigation controller.
    pub fn new(title: impl Into<String>) -> Rc<Self> {
        let title = title.into();
        Rc::new_cyclic(|this: &Weak<Self>| Self::with_core(ControllerCore::new(this, title)))
    }

    /// Create a navigation controller with `root` at the bottom of the stack.
    pub fn with_root(title: impl Into<String>, root: ControllerRef) -> Rc<Self> {
        let nav = Self::new(title);
        nav.push(root);
        nav
    }

    /// Build the navigation state around an existing core.
    pub fn with_core(core: ControllerCore) -> Self {
        Self {
            core,
            stack: RefCell::new(Vec::new()),
        }
    }

    /// Push `controller` on top of the stack and adopt it as a child.
    ///
    /// Returns `false` and changes nothing when `controller` is already on
    /// this stack or adopting it would close a cycle.
    pub fn push(&self, controller: ControllerRef) -> bool {
        let stacked = self
            .stack
            .borrow()
            .iter()
            .any(|c| Rc::ptr_eq(c, &controller));
        if stacked || !self.add_child(controller.clone()) {
            return false;
        }
        self.stack.borrow_mut().push(controller);
        true
    }

    /// Drop `controller` from the stack after it left this container.
    pub(crate) fn unstack<T: ?Sized>(&self, controller: *const T) {
        self.stack
            .borrow_mut()
            .retain(|c| !core::ptr::addr_eq(Rc::as_ptr(c), controller));
    }

    /// Pop the top controller. The root is never popped.
    pub fn pop(&self) -> Option<ControllerRef> {
        let mut stack = self.stack.borrow_mut();
        if stack.len() <= 1 {
            return None;
        }
        let top = stack.pop()?;
        drop(stack);
        top.remove_from_parent();
        Some(top)
    }

    /// Snapshot of the stack, root first.
    pub fn view_controllers(&self) -> Vec<ControllerRef> {
        self.stack.borrow().clone()
    }

    /// The bottom of the stack.
    pub fn root(&self) -> Option<ControllerRef> {
        self.stack.borrow().first().cloned()
    }

    /// The top of the stack.
    pub fn top(&self) -> Option<ControllerRef> {
        self.stack.borrow().last().cloned()
    }
}

impl ViewController for NavigationController {
    fn core(&self) -> &ControllerCore {
        &self.core
    }

    fn as_navigation(&self) -> Option<&Self> {
        Some(self)
    }
}
