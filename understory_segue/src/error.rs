// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segue errors and the opt-in abort helper.

use alloc::string::String;
use core::panic::Location;

/// Which controller of a segue an error refers to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Role {
    /// The controller the segue starts from.
    Source,
    /// The controller the segue leads to, or the root of a wrapping navigation stack.
    Destination,
    /// The navigation controller wrapping the destination or enclosing the source.
    Navigation,
    /// The semantic container of the source.
    SemanticContainer,
    /// The effective configuration target of the destination.
    ConfigurationTarget,
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Source => "source",
            Self::Destination => "destination",
            Self::Navigation => "navigation controller",
            Self::SemanticContainer => "semantic container",
            Self::ConfigurationTarget => "configuration target",
        })
    }
}

/// Errors raised while configuring or examining a segue.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SegueError {
    /// A controller is not of the statically expected type.
    #[error("segue `{segue}`: expected {expected} for {role}, encountered {actual} (at {location})")]
    TypeMismatch {
        /// Segue identifier.
        segue: String,
        /// Which controller was checked.
        role: Role,
        /// Expected concrete type.
        expected: &'static str,
        /// Concrete type actually found.
        actual: &'static str,
        /// Call site that asked for the typed access.
        location: &'static Location<'static>,
    },
    /// A controller the access needs does not exist.
    #[error("segue `{segue}`: no {role} (at {location})")]
    Missing {
        /// Segue identifier.
        segue: String,
        /// Which controller was missing.
        role: Role,
        /// Call site that asked for the typed access.
        location: &'static Location<'static>,
    },
    /// A one-shot specification was asked to configure a second time.
    #[error("segue specification `{identifier}` has already configured its destination")]
    AlreadyConfigured {
        /// Specification identifier.
        identifier: String,
    },
    /// A specification was applied to a segue with a different identifier.
    #[error("segue specification `{expected}` cannot configure segue `{actual}`")]
    IdentifierMismatch {
        /// Specification identifier.
        expected: String,
        /// Identifier of the segue it was applied to.
        actual: String,
    },
}

/// Unwrap a segue result or abort with its diagnostic.
///
/// Restores fail-fast behavior at the top of a call chain without baking it
/// into the typed accessors.
pub trait OrAbort<T> {
    /// Returns the value, or panics with the error message at the caller's location.
    #[track_caller]
    fn or_abort(self) -> T;
}

impl<T> OrAbort<T> for Result<T, SegueError> {
    #[track_caller]
    fn or_abort(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(%err, "aborting on segue error");
                panic!("{err}")
            }
        }
    }
}
