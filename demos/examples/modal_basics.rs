// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modal basics.
//!
//! Two presenters, one per dialog type. A tab dialog is preempted by an app
//! dialog, comes back once the app dialog is answered, and is finally dismissed
//! by a tap outside its content.
//!
//! Run:
//! - `cargo run -p understory_demos --example modal_basics`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use understory_modal::presenter::{Presenter, PresenterSlot};
use understory_modal::request::{Controller, DialogBody, DialogRequest};
use understory_modal::scheduler::{ModalScheduler, WeakModalScheduler};
use understory_modal::types::{ButtonKind, DialogFlags, DismissalCause, ModalDialogType};

/// Prints what a real surface would draw.
struct Console {
    name: &'static str,
    slot: PresenterSlot,
}

impl Console {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: PresenterSlot::new(),
        }
    }
}

impl Presenter for Console {
    fn slot(&self) -> &PresenterSlot {
        &self.slot
    }

    fn attach(&self, request: &DialogRequest) {
        let params = request.params();
        let body = match &params.body {
            DialogBody::Message(text) => text.as_str(),
            _ => "",
        };
        println!(
            "[{}] show  {:?}: {}",
            self.name,
            params.title.as_deref().unwrap_or("untitled"),
            body
        );
    }

    fn detach(&self, request: &DialogRequest) {
        println!(
            "[{}] hide  {:?}",
            self.name,
            request.params().title.as_deref().unwrap_or("untitled")
        );
    }
}

/// Turns button presses into dismissals and remembers the outcome.
struct Answer {
    scheduler: WeakModalScheduler<ModalDialogType>,
    outcome: Rc<RefCell<Vec<(String, DismissalCause)>>>,
}

impl Controller for Answer {
    fn on_click(&mut self, request: &DialogRequest, button: ButtonKind) {
        let cause = match button {
            ButtonKind::Positive => DismissalCause::PositiveButton,
            ButtonKind::Negative => DismissalCause::NegativeButton,
        };
        if let Some(scheduler) = self.scheduler.upgrade() {
            let _ = scheduler.dismiss_dialog(request, cause);
        }
    }

    fn on_cancel(&mut self, request: &DialogRequest) {
        println!("  cancelled {:?}", request.params().title);
    }

    fn on_dismiss(&mut self, request: &DialogRequest, cause: DismissalCause) {
        let title = request.params().title.clone().unwrap_or_default();
        println!("  dismissed {title:?} ({cause:?})");
        self.outcome.borrow_mut().push((title, cause));
    }
}

fn main() {
    let app = Rc::new(Console::new("app"));
    let tab = Rc::new(Console::new("tab"));
    let scheduler = ModalScheduler::new(app.clone(), ModalDialogType::App);
    scheduler.register_presenter(tab.clone(), ModalDialogType::Tab);

    let outcome = Rc::new(RefCell::new(Vec::new()));
    let answer = || Answer {
        scheduler: scheduler.downgrade(),
        outcome: outcome.clone(),
    };

    let permission = DialogRequest::builder(answer())
        .title("Allow notifications?")
        .message("example.com wants to send notifications.")
        .positive_button("Allow")
        .negative_button("Block")
        .flags(DialogFlags::CANCELABLE | DialogFlags::CANCEL_ON_TOUCH_OUTSIDE)
        .build();
    let update = DialogRequest::builder(answer())
        .title("Restart to update?")
        .positive_button("Restart")
        .negative_button("Later")
        .build();

    println!("== Tab dialog ==");
    scheduler.show_dialog(permission, ModalDialogType::Tab);

    println!("== App dialog preempts ==");
    scheduler.show_dialog(update, ModalDialogType::App);
    assert_eq!(scheduler.current_type(), Some(ModalDialogType::App));

    println!("== Answer the app dialog ==");
    if let Some(current) = app.current_dialog() {
        current.click(ButtonKind::Negative);
    }
    assert_eq!(scheduler.current_type(), Some(ModalDialogType::Tab));

    println!("== Tap outside the tab dialog ==");
    let content = Rect::new(100.0, 100.0, 400.0, 300.0);
    let inside = tab.slot().handle_pointer_down(Point::new(150.0, 150.0), content);
    let outside = tab.slot().handle_pointer_down(Point::new(10.0, 10.0), content);
    assert!(!inside && outside);
    assert!(!scheduler.is_showing());

    assert_eq!(
        *outcome.borrow(),
        vec![
            ("Restart to update?".to_string(), DismissalCause::NegativeButton),
            ("Allow notifications?".to_string(), DismissalCause::TouchOutside),
        ]
    );
}
