// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuring segue destinations.
//!
//! An inbox shows a message through a navigation-wrapped detail screen, hands
//! a draft to a compose container that redirects configuration to its editor,
//! and reports a mistyped destination.
//!
//! Run:
//! - `cargo run -p understory_demos --example segue_configuration`
//! - `RUST_LOG=debug cargo run -p understory_demos --example segue_configuration`

use std::cell::RefCell;
use std::rc::Rc;

use understory_scene::controller::{ControllerCore, ControllerExt, PlainController, ViewController};
use understory_scene::navigation::NavigationController;
use understory_scene::types::ControllerRef;
use understory_segue::error::OrAbort;
use understory_segue::segue::Segue;
use understory_segue::specification::{ConfigureSegue, SegueSpecification, prepare};

#[derive(Debug)]
struct MessageDetail {
    core: ControllerCore,
    subject: RefCell<String>,
}

impl MessageDetail {
    fn new() -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            core: ControllerCore::new(this, "message"),
            subject: RefCell::new(String::new()),
        })
    }
}

impl ViewController for MessageDetail {
    fn core(&self) -> &ControllerCore {
        &self.core
    }
}

#[derive(Debug)]
struct Editor {
    core: ControllerCore,
    draft: RefCell<String>,
}

impl ViewController for Editor {
    fn core(&self) -> &ControllerCore {
        &self.core
    }
}

/// Creates its editor when its view loads and forwards configuration to it.
#[derive(Debug)]
struct Compose {
    core: ControllerCore,
    editor: RefCell<Option<Rc<Editor>>>,
}

impl Compose {
    fn new() -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            core: ControllerCore::new(this, "compose"),
            editor: RefCell::new(None),
        })
    }
}

impl ViewController for Compose {
    fn core(&self) -> &ControllerCore {
        &self.core
    }

    fn view_did_load(&self) {
        let editor = Rc::new_cyclic(|this| Editor {
            core: ControllerCore::new(this, "editor"),
            draft: RefCell::new(String::new()),
        });
        self.add_child(editor.clone());
        self.view().add_subview(&editor.view());
        *self.editor.borrow_mut() = Some(editor);
    }

    fn configuration_target(&self) -> Option<ControllerRef> {
        self.editor.borrow().clone().map(|e| e as ControllerRef)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let inbox: ControllerRef = PlainController::new("inbox");

    println!("== Wrapped destination ==");
    let detail = MessageDetail::new();
    let nav = NavigationController::with_root("reader", detail.clone());
    let show = Segue::new("showMessage", inbox.clone(), nav);
    show.configure_wrapped_destination(|d: Rc<MessageDetail>, nav| {
        *d.subject.borrow_mut() = "Quarterly numbers".into();
        println!("  configured {} inside {}", d.title(), nav.title());
    })
    .or_abort();
    println!("  subject: {}", detail.subject.borrow());

    println!("== Configuration target after realizing ==");
    let compose = Compose::new();
    let reply = Segue::new("reply", inbox.clone(), compose.clone());
    let visited = reply.realize_destination();
    println!("  realized {visited} controllers");
    let specs: Vec<Box<dyn ConfigureSegue>> = vec![Box::new(SegueSpecification::new(
        "reply",
        "prefill the reply draft",
        |_, compose: Rc<Compose>| {
            if let Some(editor) = compose.editor.borrow().as_ref() {
                *editor.draft.borrow_mut() = "Re: Quarterly numbers".into();
            }
        },
    ))];
    let handled = prepare(&specs, &reply).or_abort();
    println!("  spec handled reply: {handled}");
    // The target accessor follows the container's redirect to its editor.
    let draft = reply
        .configure_target(|editor: Rc<Editor>| editor.draft.borrow().clone())
        .or_abort();
    println!("  draft: {draft}");

    println!("== One-shot specification ==");
    let archive = Segue::new("archive", inbox.clone(), MessageDetail::new());
    let spec = SegueSpecification::new(
        "archive",
        "show the archived copy",
        |_, d: Rc<MessageDetail>| *d.subject.borrow_mut() = "archived".into(),
    );
    println!("  first: {:?}", spec.configure_destination(&archive));
    match spec.configure_destination(&archive) {
        Ok(()) => println!("  second: configured again"),
        Err(err) => println!("  second: {err}"),
    }

    println!("== Type mismatch ==");
    let wrong = Segue::new("showMessage", inbox, PlainController::new("placeholder"));
    if let Err(err) = wrong.configure_destination(|_: Rc<MessageDetail>| ()) {
        println!("  {err}");
    }
}
