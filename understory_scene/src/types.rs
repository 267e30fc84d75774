// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared handle types and view flags.

use alloc::rc::Rc;

use crate::controller::ViewController;
use crate::view::View;

/// Shared handle to a [`View`].
pub type ViewRef = Rc<View>;

/// Shared handle to any [`ViewController`].
pub type ControllerRef = Rc<dyn ViewController>;

bitflags::bitflags! {
    /// Per-view state flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ViewFlags: u8 {
        /// The view is hidden. Hiding also hides every subview.
        const HIDDEN      = 0b0000_0001;
        /// The view accepts user interaction.
        const INTERACTIVE = 0b0000_0010;
    }
}

impl Default for ViewFlags {
    fn default() -> Self {
        Self::INTERACTIVE
    }
}
