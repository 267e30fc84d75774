// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View controllers: owners of a lazily loaded root view, arranged in a
//! parent/child containment tree with an optional presentation link.
//!
//! ## Defining a controller
//!
//! Embed a [`ControllerCore`] and implement [`ViewController`]. Construct with
//! [`Rc::new_cyclic`] so the core can refer back to its owner:
//!
//! ```
//! use std::rc::{Rc, Weak};
//! use understory_scene::controller::{ControllerCore, ControllerExt, ViewController};
//!
//! #[derive(Debug)]
//! struct Detail {
//!     core: ControllerCore,
//! }
//!
//! impl ViewController for Detail {
//!     fn core(&self) -> &ControllerCore {
//!         &self.core
//!     }
//! }
//!
//! let detail = Rc::new_cyclic(|this: &Weak<Detail>| Detail {
//!     core: ControllerCore::new(this, "detail"),
//! });
//! assert!(!detail.is_view_loaded());
//! assert_eq!(detail.view().name(), "detail");
//! assert!(detail.is_view_loaded());
//! ```

use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;
use core::cell::RefCell;

use understory_hierarchy::ancestors::Ancestors;
use understory_hierarchy::realize::realize_subtree;
use understory_hierarchy::types::{EnumerationStrategy, ParentLookup, Realize};

use crate::navigation::NavigationController;
use crate::types::{ControllerRef, ViewRef};
use crate::view::View;

/// A screen-level controller.
///
/// Only [`core`](ViewController::core) is required. The remaining methods are
/// hooks with conservative defaults.
pub trait ViewController: Any + core::fmt::Debug {
    /// Shared containment and view state.
    fn core(&self) -> &ControllerCore;

    /// Create the root view. Called at most once, on first access.
    fn load_view(&self) -> ViewRef {
        View::new(self.core().title())
    }

    /// Runs right after the root view is installed.
    ///
    /// Containers typically add their embedded children here, so those
    /// children do not exist until the view is loaded.
    fn view_did_load(&self) {}

    /// Explicit configuration target override.
    ///
    /// See [`ControllerExt::effective_configuration_target`].
    fn configuration_target(&self) -> Option<ControllerRef> {
        None
    }

    /// Explicit semantic container override.
    ///
    /// See [`ControllerExt::effective_semantic_container`].
    fn semantic_container(&self) -> Option<ControllerRef> {
        None
    }

    /// The navigation stack, for controllers that manage one.
    fn as_navigation(&self) -> Option<&NavigationController> {
        None
    }

    /// Concrete type name, for diagnostics.
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// State every [`ViewController`] carries.
pub struct ControllerCore {
    this: Weak<dyn ViewController>,
    title: String,
    view: RefCell<Option<ViewRef>>,
    parent: RefCell<Option<Weak<dyn ViewController>>>,
    children: RefCell<Vec<ControllerRef>>,
    presented: RefCell<Option<ControllerRef>>,
    presenting: RefCell<Option<Weak<dyn ViewController>>>,
}

impl core::fmt::Debug for ControllerCore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ControllerCore")
            .field("title", &self.title)
            .field("view_loaded", &self.view.borrow().is_some())
            .field("children", &self.children.borrow().len())
            .field("presented", &self.presented.borrow().is_some())
            .finish_non_exhaustive()
    }
}

impl ControllerCore {
    /// Create the core for the controller `this` points to.
    pub fn new<T: ViewController>(this: &Weak<T>, title: impl Into<String>) -> Self {
        let this: Weak<dyn ViewController> = this.clone();
        Self {
            this,
            title: title.into(),
            view: RefCell::new(None),
            parent: RefCell::new(None),
            children: RefCell::new(Vec::new()),
            presented: RefCell::new(None),
            presenting: RefCell::new(None),
        }
    }

    /// Debug title; also names the default root view.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// A strong handle to the owning controller, if it is still alive.
    pub fn this(&self) -> Option<ControllerRef> {
        self.this.upgrade()
    }
}

/// Containment, loading, and traversal operations for every [`ViewController`].
pub trait ControllerExt: ViewController {
    /// Debug title.
    fn title(&self) -> &str {
        self.core().title()
    }

    /// Returns `true` once the root view exists.
    fn is_view_loaded(&self) -> bool {
        self.core().view.borrow().is_some()
    }

    /// The root view if it has been loaded.
    fn view_if_loaded(&self) -> Option<ViewRef> {
        self.core().view.borrow().clone()
    }

    /// The root view, loading it first if needed.
    ///
    /// Loading calls [`ViewController::load_view`], records this controller as
    /// the view's owner, then calls [`ViewController::view_did_load`].
    fn view(&self) -> ViewRef {
        if let Some(view) = self.view_if_loaded() {
            return view;
        }
        let view = self.load_view();
        view.set_owner(self.core().this.clone());
        *self.core().view.borrow_mut() = Some(view.clone());
        tracing::debug!(controller = self.core().title(), "view loaded");
        self.view_did_load();
        view
    }

    /// The containing controller, if any.
    fn parent(&self) -> Option<ControllerRef> {
        self.core().parent.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// Snapshot of the child controllers in insertion order.
    fn children(&self) -> Vec<ControllerRef> {
        self.core().children.borrow().clone()
    }

    /// Append `child`, detaching it from any previous parent.
    ///
    /// Views are not touched; install the child's view wherever it belongs.
    /// Returns `false` and changes nothing when `child` is this controller or
    /// is reached from it through parent or presenting links, which would
    /// close a cycle.
    fn add_child(&self, child: ControllerRef) -> bool {
        if self.is_descendant_of(&child) {
            tracing::debug!(
                parent = self.core().title(),
                child = child.core().title(),
                "refusing child that would close a cycle"
            );
            return false;
        }
        child.remove_from_parent();
        *child.core().parent.borrow_mut() = Some(self.core().this.clone());
        tracing::trace!(
            parent = self.core().title(),
            child = child.core().title(),
            "child added"
        );
        self.core().children.borrow_mut().push(child);
        true
    }

    /// Detach from the parent controller. No-op when already detached.
    ///
    /// A navigation parent also drops this controller from its stack.
    fn remove_from_parent(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        let me: *const Self = self;
        parent
            .core()
            .children
            .borrow_mut()
            .retain(|c| !core::ptr::addr_eq(Rc::as_ptr(c), me));
        if let Some(nav) = parent.as_navigation() {
            nav.unstack(me);
        }
        *self.core().parent.borrow_mut() = None;
    }

    /// Present `other` modally over this controller, replacing any current presentation.
    ///
    /// `other` is first dismissed from any controller presenting it. Returns
    /// `false` and changes nothing when `other` is this controller or is
    /// reached from it through parent or presenting links.
    fn present(&self, other: ControllerRef) -> bool {
        if self.is_descendant_of(&other) {
            return false;
        }
        if let Some(previous) = other.presenting() {
            previous.dismiss();
        }
        self.dismiss();
        *other.core().presenting.borrow_mut() = Some(self.core().this.clone());
        *self.core().presented.borrow_mut() = Some(other);
        true
    }

    /// Dismiss the presented controller, returning it.
    fn dismiss(&self) -> Option<ControllerRef> {
        let presented = self.core().presented.borrow_mut().take()?;
        *presented.core().presenting.borrow_mut() = None;
        Some(presented)
    }

    /// The controller presented over this one.
    fn presented(&self) -> Option<ControllerRef> {
        self.core().presented.borrow().clone()
    }

    /// The controller this one is presented over.
    fn presenting(&self) -> Option<ControllerRef> {
        self.core().presenting.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// The parent-controller chain, starting at this controller or its parent.
    fn parent_controllers(
        &self,
        strategy: EnumerationStrategy,
    ) -> Ancestors<ControllerRef, ParentControllers> {
        let first = match strategy {
            EnumerationStrategy::Inclusive => self.core().this(),
            EnumerationStrategy::Exclusive => self.parent(),
        };
        Ancestors::starting_at(ParentControllers, first)
    }

    /// Returns `true` if `other` is this controller or is reached from it by
    /// following parent links, falling back to presenting links where a
    /// controller has no parent.
    fn is_descendant_of(&self, other: &ControllerRef) -> bool {
        Ancestors::starting_at(Containers, self.core().this())
            .iter()
            .any(|c| core::ptr::addr_eq(Rc::as_ptr(&c), Rc::as_ptr(other)))
    }

    /// The nearest enclosing controller that manages a navigation stack.
    ///
    /// This controller itself is not considered.
    fn navigation_controller(&self) -> Option<ControllerRef> {
        self.parent_controllers(EnumerationStrategy::Exclusive)
            .first_where(|c| c.as_navigation().is_some())
    }

    /// The controller that should receive configuration for a transition to this one.
    ///
    /// Resolution order:
    /// 1. an explicit [`ViewController::configuration_target`];
    /// 2. for navigation controllers, the root of the stack (this controller when empty);
    /// 3. this controller.
    ///
    /// The override is checked first so custom navigation controllers can redirect.
    fn effective_configuration_target(&self) -> Option<ControllerRef> {
        if let Some(target) = self.configuration_target() {
            return Some(target);
        }
        if let Some(nav) = self.as_navigation()
            && let Some(root) = nav.root()
        {
            return Some(root);
        }
        self.core().this()
    }

    /// The logical coordinator of this controller.
    ///
    /// An explicit [`ViewController::semantic_container`], otherwise this controller.
    fn effective_semantic_container(&self) -> Option<ControllerRef> {
        self.semantic_container().or_else(|| self.core().this())
    }
}

impl<T: ViewController + ?Sized> ControllerExt for T {}

/// Downcast a controller handle to its concrete type.
pub fn downcast_controller<T: ViewController>(controller: &ControllerRef) -> Option<Rc<T>> {
    let any: Rc<dyn Any> = controller.clone();
    any.downcast::<T>().ok()
}

/// [`ParentLookup`] for the parent-controller relation.
#[derive(Copy, Clone, Debug, Default)]
pub struct ParentControllers;

impl ParentLookup<ControllerRef> for ParentControllers {
    #[inline]
    fn parent_of(&self, node: &ControllerRef) -> Option<ControllerRef> {
        node.parent()
    }
}

/// Parent controller, else presenting controller.
#[derive(Copy, Clone, Debug, Default)]
struct Containers;

impl ParentLookup<ControllerRef> for Containers {
    fn parent_of(&self, node: &ControllerRef) -> Option<ControllerRef> {
        node.parent().or_else(|| node.presenting())
    }
}

/// [`Realize`] for controllers: realizing loads the root view; children are
/// the child controllers followed by the presented controller.
#[derive(Copy, Clone, Debug, Default)]
pub struct ControllerLoader;

impl Realize<ControllerRef> for ControllerLoader {
    fn realize(&self, node: &ControllerRef) {
        let _ = node.view();
    }

    fn children_of(&self, node: &ControllerRef) -> Vec<ControllerRef> {
        let mut out = node.children();
        out.extend(node.presented());
        out
    }
}

/// Load the views of `controller`, its children, their children, and any
/// presented controllers, including children created while loading.
///
/// Returns the number of controllers visited.
pub fn load_views_recursively(controller: &ControllerRef) -> usize {
    realize_subtree(ControllerLoader, controller.clone())
}

/// A controller with no behavior beyond its [`ControllerCore`].
#[derive(Debug)]
pub struct PlainController {
    core: ControllerCore,
}

impl PlainController {
    /// Create a plain controller.
    pub fn new(title: impl Into<String>) -> Rc<Self> {
        let title = title.into();
        Rc::new_cyclic(|this| Self {
            core: ControllerCore::new(this, title),
        })
    }
}

impl ViewController for PlainController {
    fn core(&self) -> &ControllerCore {
        &self.core
    }
}
