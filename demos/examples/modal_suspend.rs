// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-tab dialogs with suspension.
//!
//! Each tab gets its own dialog type; only the foreground tab's type is
//! resumed. Switching tabs suspends the old type (its dialog is put back in its
//! queue) and resumes the new one. Every tab shares the default presenter.
//!
//! Run:
//! - `cargo run -p understory_demos --example modal_suspend`

use std::cell::Cell;
use std::rc::Rc;

use understory_modal::presenter::{Presenter, PresenterSlot};
use understory_modal::request::{Controller, DialogRequest};
use understory_modal::scheduler::{ModalObserver, ModalScheduler};
use understory_modal::types::{ButtonKind, DismissalCause};

/// Declaration order is priority: app-wide dialogs beat every tab.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Layer {
    App,
    Tab(u8),
}

#[derive(Default)]
struct Window(PresenterSlot);

impl Presenter for Window {
    fn slot(&self) -> &PresenterSlot {
        &self.0
    }
    fn attach(&self, request: &DialogRequest) {
        println!("  show {:?}", request.params().title.as_deref().unwrap_or(""));
    }
    fn detach(&self, request: &DialogRequest) {
        println!("  hide {:?}", request.params().title.as_deref().unwrap_or(""));
    }
}

struct Quiet;

impl Controller for Quiet {
    fn on_click(&mut self, _request: &DialogRequest, _button: ButtonKind) {}
    fn on_cancel(&mut self, _request: &DialogRequest) {}
    fn on_dismiss(&mut self, request: &DialogRequest, cause: DismissalCause) {
        println!("  {:?} retired ({cause:?})", request.params().title);
    }
}

#[derive(Default)]
struct IdleCounter(Cell<u32>);

impl ModalObserver<Layer> for IdleCounter {
    fn on_idle(&self) {
        self.0.set(self.0.get() + 1);
        println!("  (idle)");
    }
}

fn dialog(title: &str) -> DialogRequest {
    DialogRequest::builder(Quiet).title(title).build()
}

fn main() {
    let window = Rc::new(Window::default());
    let scheduler = ModalScheduler::new(window.clone(), Layer::App);
    let idle = Rc::new(IdleCounter::default());
    scheduler.add_observer(idle.clone());

    // Tab 1 starts in the background.
    scheduler.suspend_type(Layer::Tab(1));

    println!("== Both tabs ask for a dialog ==");
    let first = dialog("tab 0: leave page?");
    let second = dialog("tab 1: save password?");
    scheduler.show_dialog(first.clone(), Layer::Tab(0));
    scheduler.show_dialog(second.clone(), Layer::Tab(1));
    assert_eq!(scheduler.current_dialog(), Some(first.clone()));

    println!("== Switch to tab 1 ==");
    scheduler.suspend_type(Layer::Tab(0));
    scheduler.resume_type(Layer::Tab(1));
    assert_eq!(scheduler.current_dialog(), Some(second.clone()));
    assert_eq!(scheduler.pending_dialogs(Layer::Tab(0)), vec![first.clone()]);

    println!("== Close tab 0 ==");
    scheduler.cancel_all_dialogs_of(Layer::Tab(0));
    assert_eq!(scheduler.pending_count(), 0);

    println!("== Answer tab 1 ==");
    let _ = scheduler.dismiss_dialog(&second, DismissalCause::PositiveButton);
    assert!(!scheduler.is_showing());
    assert_eq!(idle.0.get(), 1);
}
