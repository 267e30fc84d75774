// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segues and their typed accessors.
//!
//! ## Overview
//!
//! A [`Segue`] names a transition from a source controller to a destination
//! controller. The accessors downcast the controllers involved to the types the
//! caller expects and hand them to a closure. A controller of the wrong type is
//! reported as [`SegueError::TypeMismatch`] carrying the caller's location.
//!
//! | accessor | closure receives |
//! |---|---|
//! | [`configure_destination`](Segue::configure_destination) | destination |
//! | [`configure_wrapped_destination`](Segue::configure_wrapped_destination) | root of the destination's navigation stack, that stack |
//! | [`access_source`](Segue::access_source) | source |
//! | [`access_wrapped_source`](Segue::access_wrapped_source) | source, its enclosing navigation stack |
//! | [`access_embedded_source`](Segue::access_embedded_source) | source, its semantic container |
//! | [`access_wrapped_embedded_source`](Segue::access_wrapped_embedded_source) | source, its semantic container, its enclosing navigation stack |
//!
//! Navigation controllers are recognized by
//! [`as_navigation`](ViewController::as_navigation), so custom navigation types
//! work with every accessor. The `_in` variants additionally downcast the
//! navigation controller to a concrete type given as an extra parameter.

use alloc::rc::Rc;
use alloc::string::String;
use core::panic::Location;

use understory_scene::controller::{
    ControllerExt, ViewController, downcast_controller, load_views_recursively,
};
use understory_scene::navigation::NavigationController;
use understory_scene::types::ControllerRef;

use crate::error::{Role, SegueError};

/// A transition between two controllers.
#[derive(Clone, Debug)]
pub struct Segue {
    identifier: String,
    source: ControllerRef,
    destination: ControllerRef,
}

impl Segue {
    /// Describe a transition from `source` to `destination`.
    pub fn new(
        identifier: impl Into<String>,
        source: ControllerRef,
        destination: ControllerRef,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            source,
            destination,
        }
    }

    /// Segue identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The originating controller.
    pub fn source(&self) -> &ControllerRef {
        &self.source
    }

    /// The controller being transitioned to.
    pub fn destination(&self) -> &ControllerRef {
        &self.destination
    }

    /// Load the destination's views, its children's views, and so on.
    ///
    /// Containers often create their embedded children only when their view
    /// loads; call this before configuring such a destination.
    /// Returns the number of controllers visited.
    pub fn realize_destination(&self) -> usize {
        load_views_recursively(&self.destination)
    }

    /// Run `configure` with the destination as `D`.
    #[track_caller]
    pub fn configure_destination<D: ViewController, R>(
        &self,
        configure: impl FnOnce(Rc<D>) -> R,
    ) -> Result<R, SegueError> {
        let location = Location::caller();
        let destination = self.cast::<D>(&self.destination, Role::Destination, location)?;
        Ok(configure(destination))
    }

    /// Run `configure` with the destination's effective configuration target as `T`.
    ///
    /// See [`ControllerExt::effective_configuration_target`].
    #[track_caller]
    pub fn configure_target<T: ViewController, R>(
        &self,
        configure: impl FnOnce(Rc<T>) -> R,
    ) -> Result<R, SegueError> {
        let location = Location::caller();
        let target = self
            .destination
            .effective_configuration_target()
            .ok_or_else(|| self.missing(Role::ConfigurationTarget, location))?;
        let target = self.cast::<T>(&target, Role::ConfigurationTarget, location)?;
        Ok(configure(target))
    }

    /// Run `configure` with the root of the destination's navigation stack as
    /// `D` and the destination's [`NavigationController`] state.
    ///
    /// Any destination exposing a stack through [`ViewController::as_navigation`]
    /// qualifies, custom navigation types included.
    #[track_caller]
    pub fn configure_wrapped_destination<D: ViewController, R>(
        &self,
        configure: impl FnOnce(Rc<D>, &NavigationController) -> R,
    ) -> Result<R, SegueError> {
        let location = Location::caller();
        let navigation = self.stack_of(&self.destination, location)?;
        let destination = self.stack_root::<D>(navigation, location)?;
        Ok(configure(destination, navigation))
    }

    /// Like [`configure_wrapped_destination`](Self::configure_wrapped_destination)
    /// with the destination downcast to the navigation type `N`.
    ///
    /// `N` must expose its stack through [`ViewController::as_navigation`].
    #[track_caller]
    pub fn configure_wrapped_destination_in<D: ViewController, N: ViewController, R>(
        &self,
        configure: impl FnOnce(Rc<D>, Rc<N>) -> R,
    ) -> Result<R, SegueError> {
        let location = Location::caller();
        let navigation = self.cast::<N>(&self.destination, Role::Navigation, location)?;
        let stack = navigation
            .as_navigation()
            .ok_or_else(|| self.missing(Role::Navigation, location))?;
        let destination = self.stack_root::<D>(stack, location)?;
        Ok(configure(destination, navigation))
    }

    /// Run `access` with the source as `S`.
    ///
    /// Typically used when unwinding: the destination reads results from the
    /// controller that initiated the unwind.
    #[track_caller]
    pub fn access_source<S: ViewController, R>(
        &self,
        access: impl FnOnce(Rc<S>) -> R,
    ) -> Result<R, SegueError> {
        let location = Location::caller();
        let source = self.cast::<S>(&self.source, Role::Source, location)?;
        Ok(access(source))
    }

    /// Run `access` with the source as `S` and the stack of its nearest
    /// enclosing navigation controller.
    #[track_caller]
    pub fn access_wrapped_source<S: ViewController, R>(
        &self,
        access: impl FnOnce(Rc<S>, &NavigationController) -> R,
    ) -> Result<R, SegueError> {
        let location = Location::caller();
        let source = self.cast::<S>(&self.source, Role::Source, location)?;
        let navigation = self.enclosing_navigation(location)?;
        Ok(access(source, self.stack_of(&navigation, location)?))
    }

    /// Like [`access_wrapped_source`](Self::access_wrapped_source) with the
    /// navigation controller downcast to `N`.
    #[track_caller]
    pub fn access_wrapped_source_in<S: ViewController, N: ViewController, R>(
        &self,
        access: impl FnOnce(Rc<S>, Rc<N>) -> R,
    ) -> Result<R, SegueError> {
        let location = Location::caller();
        let source = self.cast::<S>(&self.source, Role::Source, location)?;
        let navigation = self.source_navigation::<N>(location)?;
        Ok(access(source, navigation))
    }

    /// Run `access` with the source as `S` and its effective semantic container as `C`.
    ///
    /// See [`ControllerExt::effective_semantic_container`].
    #[track_caller]
    pub fn access_embedded_source<S: ViewController, C: ViewController, R>(
        &self,
        access: impl FnOnce(Rc<S>, Rc<C>) -> R,
    ) -> Result<R, SegueError> {
        let location = Location::caller();
        let source = self.cast::<S>(&self.source, Role::Source, location)?;
        let container = self.source_container::<C>(location)?;
        Ok(access(source, container))
    }

    /// Run `access` with the source as `S`, its semantic container as `C`, and
    /// the stack of its nearest enclosing navigation controller.
    #[track_caller]
    pub fn access_wrapped_embedded_source<S: ViewController, C: ViewController, R>(
        &self,
        access: impl FnOnce(Rc<S>, Rc<C>, &NavigationController) -> R,
    ) -> Result<R, SegueError> {
        let location = Location::caller();
        let source = self.cast::<S>(&self.source, Role::Source, location)?;
        let container = self.source_container::<C>(location)?;
        let navigation = self.enclosing_navigation(location)?;
        Ok(access(source, container, self.stack_of(&navigation, location)?))
    }

    /// Like [`access_wrapped_embedded_source`](Self::access_wrapped_embedded_source)
    /// with the navigation controller downcast to `N`.
    #[track_caller]
    pub fn access_wrapped_embedded_source_in<
        S: ViewController,
        C: ViewController,
        N: ViewController,
        R,
    >(
        &self,
        access: impl FnOnce(Rc<S>, Rc<C>, Rc<N>) -> R,
    ) -> Result<R, SegueError> {
        let location = Location::caller();
        let source = self.cast::<S>(&self.source, Role::Source, location)?;
        let container = self.source_container::<C>(location)?;
        let navigation = self.source_navigation::<N>(location)?;
        Ok(access(source, container, navigation))
    }

    fn enclosing_navigation(
        &self,
        location: &'static Location<'static>,
    ) -> Result<ControllerRef, SegueError> {
        self.source
            .navigation_controller()
            .ok_or_else(|| self.missing(Role::Navigation, location))
    }

    fn source_navigation<N: ViewController>(
        &self,
        location: &'static Location<'static>,
    ) -> Result<Rc<N>, SegueError> {
        let navigation = self.enclosing_navigation(location)?;
        self.cast::<N>(&navigation, Role::Navigation, location)
    }

    /// The navigation stack `controller` manages.
    fn stack_of<'c>(
        &self,
        controller: &'c ControllerRef,
        location: &'static Location<'static>,
    ) -> Result<&'c NavigationController, SegueError> {
        controller
            .as_navigation()
            .ok_or_else(|| SegueError::TypeMismatch {
                segue: self.identifier.clone(),
                role: Role::Navigation,
                expected: core::any::type_name::<NavigationController>(),
                actual: controller.type_name(),
                location,
            })
    }

    fn stack_root<D: ViewController>(
        &self,
        stack: &NavigationController,
        location: &'static Location<'static>,
    ) -> Result<Rc<D>, SegueError> {
        let root = stack
            .root()
            .ok_or_else(|| self.missing(Role::Destination, location))?;
        self.cast::<D>(&root, Role::Destination, location)
    }

    fn source_container<C: ViewController>(
        &self,
        location: &'static Location<'static>,
    ) -> Result<Rc<C>, SegueError> {
        let container = self
            .source
            .effective_semantic_container()
            .ok_or_else(|| self.missing(Role::SemanticContainer, location))?;
        self.cast::<C>(&container, Role::SemanticContainer, location)
    }

    pub(crate) fn cast<T: ViewController>(
        &self,
        controller: &ControllerRef,
        role: Role,
        location: &'static Location<'static>,
    ) -> Result<Rc<T>, SegueError> {
        downcast_controller::<T>(controller).ok_or_else(|| {
            let err = SegueError::TypeMismatch {
                segue: self.identifier.clone(),
                role,
                expected: core::any::type_name::<T>(),
                actual: controller.type_name(),
                location,
            };
            tracing::debug!(%err, "segue type mismatch");
            err
        })
    }

    fn missing(&self, role: Role, location: &'static Location<'static>) -> SegueError {
        SegueError::Missing {
            segue: self.identifier.clone(),
            role,
            location,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::Cell;
    use understory_scene::controller::{ControllerCore, PlainController};

    /// Detail screen with a configurable item.
    #[derive(Debug)]
    pub(crate) struct Detail {
        core: ControllerCore,
        pub(crate) item: Cell<u32>,
    }

    impl Detail {
        pub(crate) fn new() -> Rc<Self> {
            Rc::new_cyclic(|this| Self {
                core: ControllerCore::new(this, "detail"),
                item: Cell::new(0),
            })
        }
    }

    impl ViewController for Detail {
        fn core(&self) -> &ControllerCore {
            &self.core
        }
    }

    /// Embedded component reporting a coordinating container.
    #[derive(Debug)]
    struct Part {
        core: ControllerCore,
        deck: ControllerRef,
    }

    impl ViewController for Part {
        fn core(&self) -> &ControllerCore {
            &self.core
        }

        fn semantic_container(&self) -> Option<ControllerRef> {
            Some(self.deck.clone())
        }
    }

    /// Custom navigation type wrapping the stock stack.
    #[derive(Debug)]
    struct ThemedNavigation {
        nav: NavigationController,
    }

    impl ThemedNavigation {
        fn with_root(root: ControllerRef) -> Rc<Self> {
            let themed = Rc::new_cyclic(|this| Self {
                nav: NavigationController::with_core(ControllerCore::new(this, "themed")),
            });
            themed.nav.push(root);
            themed
        }
    }

    impl ViewController for ThemedNavigation {
        fn core(&self) -> &ControllerCore {
            self.nav.core()
        }

        fn as_navigation(&self) -> Option<&NavigationController> {
            Some(&self.nav)
        }
    }

    fn segue(source: ControllerRef, destination: ControllerRef) -> Segue {
        Segue::new("show", source, destination)
    }

    fn role_of(err: &SegueError) -> Option<Role> {
        match err {
            SegueError::TypeMismatch { role, .. } | SegueError::Missing { role, .. } => Some(*role),
            _ => None,
        }
    }

    #[test]
    fn configure_destination_passes_typed_controller() {
        let detail = Detail::new();
        let s = segue(PlainController::new("list"), detail.clone());
        let out = s.configure_destination(|d: Rc<Detail>| {
            d.item.set(7);
            "configured"
        });
        assert_eq!(out, Ok("configured"));
        assert_eq!(detail.item.get(), 7);
    }

    #[test]
    fn configure_destination_reports_mismatch_at_call_site() {
        let s = segue(PlainController::new("list"), PlainController::new("other"));
        let line = line!() + 1;
        let err = s.configure_destination(|_: Rc<Detail>| ()).unwrap_err();
        match err {
            SegueError::TypeMismatch {
                role,
                expected,
                actual,
                location,
                ..
            } => {
                assert_eq!(role, Role::Destination);
                assert!(expected.ends_with("Detail"));
                assert!(actual.ends_with("PlainController"));
                assert_eq!(location.file(), file!());
                assert_eq!(location.line(), line);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn wrapped_destination_reaches_stack_root() {
        let detail = Detail::new();
        let nav = NavigationController::with_root("nav", detail.clone());
        let s = segue(PlainController::new("list"), nav.clone());
        s.configure_wrapped_destination(|d: Rc<Detail>, n: &NavigationController| {
            assert!(core::ptr::eq(n, &*nav));
            d.item.set(11);
        })
        .unwrap();
        assert_eq!(detail.item.get(), 11);
    }

    #[test]
    fn wrapped_destination_with_custom_navigation() {
        let detail = Detail::new();
        let themed = ThemedNavigation::with_root(detail.clone());
        let s = segue(PlainController::new("list"), themed);
        let title = s
            .configure_wrapped_destination_in(|d: Rc<Detail>, n: Rc<ThemedNavigation>| {
                d.item.set(5);
                String::from(n.title())
            })
            .unwrap();
        assert_eq!(title, "themed");
        assert_eq!(detail.item.get(), 5);

        // The default accessor goes through the embedded stack.
        let title = s
            .configure_wrapped_destination(|d: Rc<Detail>, n: &NavigationController| {
                d.item.set(6);
                String::from(n.title())
            })
            .unwrap();
        assert_eq!(title, "themed");
        assert_eq!(detail.item.get(), 6);

        // Exact typing still tells the two apart.
        let err = s
            .configure_wrapped_destination_in(|_: Rc<Detail>, _: Rc<NavigationController>| ())
            .unwrap_err();
        assert_eq!(role_of(&err), Some(Role::Navigation));
    }

    #[test]
    fn wrapped_destination_failures() {
        // Destination is not a navigation controller at all.
        let s = segue(PlainController::new("list"), Detail::new());
        let err = s.configure_wrapped_destination(|_: Rc<Detail>, _| ()).unwrap_err();
        assert_eq!(role_of(&err), Some(Role::Navigation));

        // Empty stack.
        let s = segue(PlainController::new("list"), NavigationController::new("nav"));
        let err = s.configure_wrapped_destination(|_: Rc<Detail>, _| ()).unwrap_err();
        assert!(matches!(err, SegueError::Missing { role: Role::Destination, .. }));

        // Root of the wrong type.
        let nav = NavigationController::with_root("nav", PlainController::new("root"));
        let s = segue(PlainController::new("list"), nav);
        let err = s.configure_wrapped_destination(|_: Rc<Detail>, _| ()).unwrap_err();
        assert!(matches!(err, SegueError::TypeMismatch { role: Role::Destination, .. }));
    }

    #[test]
    fn configure_target_follows_navigation_root() {
        let detail = Detail::new();
        let s = segue(
            PlainController::new("list"),
            NavigationController::with_root("nav", detail.clone()),
        );
        s.configure_target(|d: Rc<Detail>| d.item.set(2)).unwrap();
        assert_eq!(detail.item.get(), 2);

        let direct = Detail::new();
        let s = segue(PlainController::new("list"), direct.clone());
        s.configure_target(|d: Rc<Detail>| d.item.set(3)).unwrap();
        assert_eq!(direct.item.get(), 3);
    }

    #[test]
    fn access_source_and_navigation() {
        let detail = Detail::new();
        detail.item.set(42);
        let nav = NavigationController::with_root("nav", detail.clone());
        let s = segue(detail.clone(), PlainController::new("unwind-target"));

        let item = s.access_source(|d: Rc<Detail>| d.item.get()).unwrap();
        assert_eq!(item, 42);

        let titles = s
            .access_wrapped_source(|d: Rc<Detail>, n: &NavigationController| {
                (String::from(d.title()), String::from(n.title()))
            })
            .unwrap();
        assert_eq!(titles, (String::from("detail"), String::from("nav")));
        drop(nav);

        // With the navigation controller gone, the source has none.
        let err = s.access_wrapped_source(|_: Rc<Detail>, _| ()).unwrap_err();
        assert!(matches!(err, SegueError::Missing { role: Role::Navigation, .. }));

        let err = s.access_source(|_: Rc<NavigationController>| ()).unwrap_err();
        assert_eq!(role_of(&err), Some(Role::Source));
    }

    #[test]
    fn embedded_source_resolves_semantic_container() {
        let deck = Detail::new();
        let part: ControllerRef = Rc::new_cyclic(|this: &alloc::rc::Weak<Part>| Part {
            core: ControllerCore::new(this, "part"),
            deck: deck.clone(),
        });
        let s = segue(part.clone(), PlainController::new("unwind-target"));
        s.access_embedded_source(|p: Rc<Part>, d: Rc<Detail>| {
            assert!(Rc::ptr_eq(&p.deck, &(d.clone() as ControllerRef)));
            d.item.set(9);
        })
        .unwrap();
        assert_eq!(deck.item.get(), 9);

        // Without an override the container is the source itself.
        let lone = Detail::new();
        let s = segue(lone.clone(), PlainController::new("unwind-target"));
        let same = s
            .access_embedded_source(|a: Rc<Detail>, b: Rc<Detail>| Rc::ptr_eq(&a, &b))
            .unwrap();
        assert!(same);

        let err = s
            .access_embedded_source(|_: Rc<Detail>, _: Rc<Part>| ())
            .unwrap_err();
        assert_eq!(role_of(&err), Some(Role::SemanticContainer));
    }

    #[test]
    fn wrapped_embedded_source_checks_all_three() {
        let deck = Detail::new();
        let part: ControllerRef = Rc::new_cyclic(|this: &alloc::rc::Weak<Part>| Part {
            core: ControllerCore::new(this, "part"),
            deck: deck.clone(),
        });
        let nav = NavigationController::with_root("nav", part.clone());
        let s = segue(part, PlainController::new("unwind-target"));

        let seen: Vec<&'static str> = s
            .access_wrapped_embedded_source(
                |p: Rc<Part>, d: Rc<Detail>, n: &NavigationController| {
                    assert_eq!(p.title(), "part");
                    assert_eq!(d.title(), "detail");
                    assert_eq!(n.title(), "nav");
                    alloc::vec!["part", "detail", "nav"]
                },
            )
            .unwrap();
        assert_eq!(seen.len(), 3);

        let err = s
            .access_wrapped_embedded_source_in(
                |_: Rc<Part>, _: Rc<Detail>, _: Rc<ThemedNavigation>| (),
            )
            .unwrap_err();
        assert_eq!(role_of(&err), Some(Role::Navigation));
        drop(nav);
    }

    #[test]
    fn wrapped_source_inside_custom_navigation() {
        let deck = Detail::new();
        let part: ControllerRef = Rc::new_cyclic(|this: &alloc::rc::Weak<Part>| Part {
            core: ControllerCore::new(this, "part"),
            deck: deck.clone(),
        });
        let themed = ThemedNavigation::with_root(part.clone());
        let s = segue(part, PlainController::new("unwind-target"));

        let title = s
            .access_wrapped_source(|_: Rc<Part>, n: &NavigationController| {
                assert_eq!(n.view_controllers().len(), 1);
                String::from(n.title())
            })
            .unwrap();
        assert_eq!(title, "themed");

        let stacked = s
            .access_wrapped_embedded_source(
                |p: Rc<Part>, _: Rc<Detail>, n: &NavigationController| {
                    Rc::ptr_eq(&n.root().unwrap(), &(p as ControllerRef))
                },
            )
            .unwrap();
        assert!(stacked);

        let typed = s
            .access_wrapped_source_in(|_: Rc<Part>, n: Rc<ThemedNavigation>| n.title().len())
            .unwrap();
        assert_eq!(typed, "themed".len());
        let err = s
            .access_wrapped_source_in(|_: Rc<Part>, _: Rc<NavigationController>| ())
            .unwrap_err();
        assert!(matches!(err, SegueError::TypeMismatch { role: Role::Navigation, .. }));
        drop(themed);
    }

    #[test]
    fn realize_destination_loads_subtree() {
        let detail = Detail::new();
        let nav = NavigationController::with_root("nav", detail.clone());
        let s = segue(PlainController::new("list"), nav.clone());
        assert_eq!(s.realize_destination(), 2);
        assert!(nav.is_view_loaded());
        assert!(detail.is_view_loaded());
    }
}
