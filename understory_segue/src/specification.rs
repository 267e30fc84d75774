// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot segue specifications.
//!
//! A [`SegueSpecification`] bundles a segue identifier, a short explanation
//! for whoever reads the code later, and a configuration closure that must run
//! exactly once against the segue's destination.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::{Rc, Weak};
//! use understory_scene::controller::{ControllerCore, PlainController, ViewController};
//! use understory_segue::segue::Segue;
//! use understory_segue::specification::{ConfigureSegue, SegueSpecification};
//!
//! #[derive(Debug)]
//! struct Detail {
//!     core: ControllerCore,
//!     item: Cell<u32>,
//! }
//! impl ViewController for Detail {
//!     fn core(&self) -> &ControllerCore {
//!         &self.core
//!     }
//! }
//!
//! let detail = Rc::new_cyclic(|this: &Weak<Detail>| Detail {
//!     core: ControllerCore::new(this, "detail"),
//!     item: Cell::new(0),
//! });
//! let segue = Segue::new("showDetail", PlainController::new("list"), detail.clone());
//!
//! let spec = SegueSpecification::new(
//!     "showDetail",
//!     "pass the selected row",
//!     |_raw, detail: Rc<Detail>| detail.item.set(4),
//! );
//! spec.configure_destination(&segue).unwrap();
//! assert_eq!(detail.item.get(), 4);
//! // A second attempt is refused.
//! assert!(spec.configure_destination(&segue).is_err());
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::Cell;
use core::panic::Location;

use understory_scene::controller::ViewController;
use understory_scene::types::ControllerRef;

use crate::error::{Role, SegueError};
use crate::segue::Segue;

/// Object-safe view of a segue specification.
///
/// Lets heterogeneous specifications live in one collection; see [`prepare`].
pub trait ConfigureSegue {
    /// Identifier of the segue this specification configures.
    fn segue_identifier(&self) -> &str;

    /// Human-readable purpose of the transition.
    fn developer_explanation(&self) -> &str;

    /// Configure `segue`'s destination.
    fn configure_destination(&self, segue: &Segue) -> Result<(), SegueError>;
}

type Configuration<D> = Box<dyn FnOnce(&ControllerRef, Rc<D>)>;

/// A segue identifier paired with a configuration closure that runs once.
///
/// The closure receives the raw destination and the destination downcast to
/// `D`. Specifications are `!Send`, like the controllers they configure.
pub struct SegueSpecification<D: ViewController> {
    identifier: String,
    explanation: String,
    origin: &'static Location<'static>,
    configuration: Cell<Option<Configuration<D>>>,
    configuration_count: Cell<usize>,
}

impl<D: ViewController> core::fmt::Debug for SegueSpecification<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SegueSpecification")
            .field("identifier", &self.identifier)
            .field("explanation", &self.explanation)
            .field("destination", &core::any::type_name::<D>())
            .field("origin", &self.origin)
            .field("configuration_count", &self.configuration_count.get())
            .finish_non_exhaustive()
    }
}

impl<D: ViewController> SegueSpecification<D> {
    /// Create a specification; the caller's location is recorded as its origin.
    #[track_caller]
    pub fn new(
        identifier: impl Into<String>,
        explanation: impl Into<String>,
        configuration: impl FnOnce(&ControllerRef, Rc<D>) + 'static,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            explanation: explanation.into(),
            origin: Location::caller(),
            configuration: Cell::new(Some(Box::new(configuration))),
            configuration_count: Cell::new(0),
        }
    }

    /// Where this specification was created.
    pub fn origin(&self) -> &'static Location<'static> {
        self.origin
    }

    /// How many times the configuration has run (0 or 1).
    pub fn configuration_count(&self) -> usize {
        self.configuration_count.get()
    }
}

impl<D: ViewController> ConfigureSegue for SegueSpecification<D> {
    fn segue_identifier(&self) -> &str {
        &self.identifier
    }

    fn developer_explanation(&self) -> &str {
        &self.explanation
    }

    /// Checks the identifier, downcasts the destination, then runs the
    /// configuration. Type mismatches are reported at the specification's origin
    /// and leave it unconfigured.
    fn configure_destination(&self, segue: &Segue) -> Result<(), SegueError> {
        if segue.identifier() != self.identifier {
            return Err(SegueError::IdentifierMismatch {
                expected: self.identifier.clone(),
                actual: segue.identifier().into(),
            });
        }
        let already = || SegueError::AlreadyConfigured {
            identifier: self.identifier.clone(),
        };
        if self.configuration_count.get() > 0 {
            return Err(already());
        }
        let destination = segue.cast::<D>(segue.destination(), Role::Destination, self.origin)?;
        let configuration = self.configuration.take().ok_or_else(already)?;
        configuration(segue.destination(), destination);
        self.configuration_count.set(self.configuration_count.get() + 1);
        tracing::debug!(
            segue = %self.identifier,
            explanation = %self.explanation,
            "segue destination configured"
        );
        Ok(())
    }
}

impl<D: ViewController> Drop for SegueSpecification<D> {
    fn drop(&mut self) {
        if self.configuration_count.get() == 0 {
            tracing::warn!(
                segue = %self.identifier,
                origin = %self.origin,
                "segue specification dropped without configuring its destination"
            );
        }
    }
}

/// Run the specification matching `segue`'s identifier.
///
/// Returns `Ok(false)` when none matches; not every segue needs configuration.
pub fn prepare(specs: &[Box<dyn ConfigureSegue>], segue: &Segue) -> Result<bool, SegueError> {
    let Some(spec) = specs
        .iter()
        .find(|s| s.segue_identifier() == segue.identifier())
    else {
        return Ok(false);
    };
    spec.configure_destination(segue)?;
    Ok(true)
}
