// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Views: a retained tree of rectangular regions linked by superview pointers.

use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use kurbo::{Affine, Point, Rect};
use understory_hierarchy::ancestors::Ancestors;
use understory_hierarchy::types::{EnumerationStrategy, ParentLookup};

use crate::controller::ViewController;
use crate::types::{ControllerRef, ViewFlags, ViewRef};

/// A node in the view tree.
///
/// Views are always handed out as [`ViewRef`]. A view holds its subviews
/// strongly and its superview weakly, so dropping the root drops the tree.
pub struct View {
    this: Weak<Self>,
    name: String,
    bounds: Cell<Rect>,
    transform: Cell<Affine>,
    flags: Cell<ViewFlags>,
    superview: RefCell<Weak<Self>>,
    subviews: RefCell<Vec<ViewRef>>,
    // Set for controller root views only.
    owner: RefCell<Option<Weak<dyn ViewController>>>,
}

impl core::fmt::Debug for View {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("View")
            .field("name", &self.name)
            .field("bounds", &self.bounds.get())
            .field("flags", &self.flags.get())
            .field("subviews", &self.subviews.borrow().len())
            .finish_non_exhaustive()
    }
}

impl View {
    /// Create a detached view with empty bounds.
    pub fn new(name: impl Into<String>) -> ViewRef {
        Self::with_bounds(name, Rect::ZERO)
    }

    /// Create a detached view with the given local bounds.
    pub fn with_bounds(name: impl Into<String>, bounds: Rect) -> ViewRef {
        let name = name.into();
        Rc::new_cyclic(|this| Self {
            this: this.clone(),
            name,
            bounds: Cell::new(bounds),
            transform: Cell::new(Affine::IDENTITY),
            flags: Cell::new(ViewFlags::default()),
            superview: RefCell::new(Weak::new()),
            subviews: RefCell::new(Vec::new()),
            owner: RefCell::new(None),
        })
    }

    /// Debug name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Local (untransformed) bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    /// Replace the local bounds.
    pub fn set_bounds(&self, bounds: Rect) {
        self.bounds.set(bounds);
    }

    /// Transform from this view's space into its superview's space.
    pub fn local_transform(&self) -> Affine {
        self.transform.get()
    }

    /// Replace the local transform.
    pub fn set_local_transform(&self, transform: Affine) {
        self.transform.set(transform);
    }

    /// Current flags.
    pub fn flags(&self) -> ViewFlags {
        self.flags.get()
    }

    /// Replace the flags.
    pub fn set_flags(&self, flags: ViewFlags) {
        self.flags.set(flags);
    }

    /// Set or clear [`ViewFlags::HIDDEN`].
    pub fn set_hidden(&self, hidden: bool) {
        let mut flags = self.flags.get();
        flags.set(ViewFlags::HIDDEN, hidden);
        self.flags.set(flags);
    }

    /// The view's own hidden flag; see [`View::is_hidden_in_hierarchy`].
    pub fn is_hidden(&self) -> bool {
        self.flags.get().contains(ViewFlags::HIDDEN)
    }

    /// A strong handle to this view, if it is still alive.
    pub fn this(&self) -> Option<ViewRef> {
        self.this.upgrade()
    }

    /// The superview, if attached.
    pub fn superview(&self) -> Option<ViewRef> {
        self.superview.borrow().upgrade()
    }

    /// Snapshot of the subviews, back to front.
    pub fn subviews(&self) -> Vec<ViewRef> {
        self.subviews.borrow().clone()
    }

    /// The controller whose root view this is.
    pub fn owner(&self) -> Option<ControllerRef> {
        self.owner.borrow().as_ref().and_then(Weak::upgrade)
    }

    pub(crate) fn set_owner(&self, owner: Weak<dyn ViewController>) {
        *self.owner.borrow_mut() = Some(owner);
    }

    /// Append `child` as the front-most subview, detaching it from any previous superview.
    ///
    /// Returns `false` and changes nothing when `child` is this view or one of
    /// its ancestors, which would close a cycle.
    pub fn add_subview(&self, child: &ViewRef) -> bool {
        if self.is_descendant_of(child) {
            return false;
        }
        child.remove_from_superview();
        *child.superview.borrow_mut() = self.this.clone();
        self.subviews.borrow_mut().push(child.clone());
        true
    }

    /// Detach this view from its superview. No-op when already detached.
    pub fn remove_from_superview(&self) {
        let Some(superview) = self.superview() else {
            return;
        };
        superview
            .subviews
            .borrow_mut()
            .retain(|v| !core::ptr::eq(Rc::as_ptr(v), self));
        *self.superview.borrow_mut() = Weak::new();
    }

    /// The superview chain, starting at this view or at its superview.
    pub fn superviews(&self, strategy: EnumerationStrategy) -> Ancestors<ViewRef, Superviews> {
        match strategy {
            EnumerationStrategy::Inclusive => Ancestors::starting_at(Superviews, self.this()),
            EnumerationStrategy::Exclusive => Ancestors::starting_at(Superviews, self.superview()),
        }
    }

    /// `self, superview, superview.superview, …`
    pub fn inclusive_superviews(&self) -> Ancestors<ViewRef, Superviews> {
        self.superviews(EnumerationStrategy::Inclusive)
    }

    /// `superview, superview.superview, …`
    pub fn exclusive_superviews(&self) -> Ancestors<ViewRef, Superviews> {
        self.superviews(EnumerationStrategy::Exclusive)
    }

    /// Returns `true` if `other` is this view or one of its ancestors.
    pub fn is_descendant_of(&self, other: &Self) -> bool {
        self.inclusive_superviews()
            .iter()
            .any(|v| core::ptr::eq(Rc::as_ptr(&v), other))
    }

    /// Transform from this view's space to the space of its outermost ancestor.
    pub fn world_transform(&self) -> Affine {
        self.inclusive_superviews()
            .iter()
            .fold(Affine::IDENTITY, |acc, v| v.local_transform() * acc)
    }

    /// Axis-aligned bounds in the outermost ancestor's space.
    ///
    /// Conservative under rotation and shear.
    pub fn world_bounds(&self) -> Rect {
        self.world_transform().transform_rect_bbox(self.bounds())
    }

    /// Convert `pt` from this view's space into `other`'s space.
    ///
    /// Both views are mapped through their outermost ancestors, so the result
    /// is only meaningful when they share one.
    pub fn convert_point(&self, pt: Point, other: &Self) -> Point {
        other.world_transform().inverse() * (self.world_transform() * pt)
    }

    /// Returns `true` if this view or any ancestor is hidden.
    pub fn is_hidden_in_hierarchy(&self) -> bool {
        self.inclusive_superviews().iter().any(|v| v.is_hidden())
    }
}

/// [`ParentLookup`] for the superview relation.
#[derive(Copy, Clone, Debug, Default)]
pub struct Superviews;

impl ParentLookup<ViewRef> for Superviews {
    #[inline]
    fn parent_of(&self, node: &ViewRef) -> Option<ViewRef> {
        node.superview()
    }
}
