// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Modal: a deterministic, `no_std` scheduler for modal dialogs.
//!
//! ## Overview
//!
//! This crate decides which modal dialog is visible when several parts of an application want to
//! show one at the same time. It does not draw anything.
//! Instead, register a [`Presenter`](crate::presenter::Presenter) per dialog type, submit
//! [`DialogRequest`](crate::request::DialogRequest) values to a
//! [`ModalScheduler`](crate::scheduler::ModalScheduler), and the scheduler attaches and detaches
//! them so that at most one dialog is showing at any moment.
//!
//! ## Priority
//!
//! Dialog types are ordered: the smaller value has the higher priority.
//! The stock [`ModalDialogType`](crate::types::ModalDialogType) has `App` above `Tab`, but any
//! `Copy + Ord + Debug` type works.
//!
//! - A request of strictly higher priority than the showing one preempts it. The preempted request
//!   is detached without any controller callback and waits at the head of its own queue.
//! - Otherwise the request waits in its type's FIFO queue.
//!   [`show_dialog_as_next`](crate::scheduler::ModalScheduler::show_dialog_as_next) puts it at the
//!   head instead.
//! - When the showing request retires, the head of the highest-priority non-suspended queue shows.
//!
//! ## Suspension
//!
//! [`suspend_type`](crate::scheduler::ModalScheduler::suspend_type) bars a type from showing, for
//! example while its tab is in the background. Requests of that type keep queueing; a showing one
//! is put back in its queue. [`resume_type`](crate::scheduler::ModalScheduler::resume_type) lifts
//! the bar.
//!
//! ## Callbacks
//!
//! Each request owns a [`Controller`](crate::request::Controller).
//!
//! - `on_dismiss` fires exactly once, when the request leaves the scheduler.
//! - `on_cancel` fires before `on_dismiss` when the request is cancelled rather than dismissed
//!   (back navigation, a tap outside, a bulk sweep).
//! - `on_click` fires when a presenter reports a button press.
//!
//! Callbacks may call back into the scheduler. Callbacks for the same request never nest: a
//! notification raised while one is running is delivered after it returns.
//!
//! ## Workflow
//!
//! 1) Create the scheduler with the presenter for the default type, and register the rest.
//! 2) Show requests; the scheduler calls `attach`/`detach` on presenters.
//! 3) Presenters forward user gestures with
//!    [`handle_back`](crate::presenter::PresenterSlot::handle_back),
//!    [`handle_pointer_down`](crate::presenter::PresenterSlot::handle_pointer_down), or
//!    [`DialogRequest::click`](crate::request::DialogRequest::click).
//! 4) Controllers dismiss their requests; the next one shows.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use understory_modal::presenter::{Presenter, PresenterSlot};
//! use understory_modal::request::{Controller, DialogRequest};
//! use understory_modal::scheduler::{ModalScheduler, WeakModalScheduler};
//! use understory_modal::types::{ButtonKind, DismissalCause, ModalDialogType};
//!
//! #[derive(Default)]
//! struct Overlay(PresenterSlot);
//! impl Presenter for Overlay {
//!     fn slot(&self) -> &PresenterSlot { &self.0 }
//!     fn attach(&self, _request: &DialogRequest) {}
//!     fn detach(&self, _request: &DialogRequest) {}
//! }
//!
//! /// Dismisses its own request on any button press.
//! struct Confirm {
//!     scheduler: WeakModalScheduler<ModalDialogType>,
//!     outcome: Rc<RefCell<Option<DismissalCause>>>,
//! }
//! impl Controller for Confirm {
//!     fn on_click(&mut self, request: &DialogRequest, button: ButtonKind) {
//!         let cause = match button {
//!             ButtonKind::Positive => DismissalCause::PositiveButton,
//!             ButtonKind::Negative => DismissalCause::NegativeButton,
//!         };
//!         if let Some(scheduler) = self.scheduler.upgrade() {
//!             let _ = scheduler.dismiss_dialog(request, cause);
//!         }
//!     }
//!     fn on_cancel(&mut self, _request: &DialogRequest) {}
//!     fn on_dismiss(&mut self, _request: &DialogRequest, cause: DismissalCause) {
//!         *self.outcome.borrow_mut() = Some(cause);
//!     }
//! }
//!
//! let overlay = Rc::new(Overlay::default());
//! let scheduler = ModalScheduler::new(overlay.clone(), ModalDialogType::App);
//!
//! let outcome = Rc::new(RefCell::new(None));
//! let request = DialogRequest::builder(Confirm {
//!     scheduler: scheduler.downgrade(),
//!     outcome: outcome.clone(),
//! })
//! .title("Discard changes?")
//! .positive_button("Discard")
//! .negative_button("Cancel")
//! .build();
//!
//! scheduler.show_dialog(request, ModalDialogType::App);
//! let shown = overlay.current_dialog().unwrap();
//! shown.click(ButtonKind::Positive);
//!
//! assert_eq!(*outcome.borrow(), Some(DismissalCause::PositiveButton));
//! assert!(!scheduler.is_showing());
//! ```
//!
//! With the `tracing` feature, scheduler transitions are logged at `debug` level under the
//! `understory_modal` target.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod registry;
mod trace;

pub mod presenter;
pub mod request;
pub mod scheduler;
pub mod types;
