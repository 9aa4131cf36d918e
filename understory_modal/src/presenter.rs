// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presenter contract: the rendering surface the scheduler drives.
//!
//! ## Overview
//!
//! A presenter is bound to one dialog type and renders whatever request the
//! scheduler installs into it. The scheduler owns every show/hide decision; a
//! presenter only reacts to [`Presenter::attach`] and [`Presenter::detach`] and
//! reports cancel gestures upward through [`PresenterSlot::trigger_cancel`].
//!
//! Presenter methods take `&self`. The scheduler may call `detach` while the
//! presenter is still inside its own gesture handler (a tap outside cancels the
//! request, which hides it), so presenters keep their state behind interior
//! mutability, the same way [`PresenterSlot`] does.
//!
//! ## Minimal presenter
//!
//! ```
//! use core::cell::Cell;
//! use understory_modal::presenter::{Presenter, PresenterSlot};
//! use understory_modal::request::DialogRequest;
//!
//! #[derive(Default)]
//! struct CountingPresenter {
//!     slot: PresenterSlot,
//!     shown: Cell<u32>,
//! }
//!
//! impl Presenter for CountingPresenter {
//!     fn slot(&self) -> &PresenterSlot {
//!         &self.slot
//!     }
//!     fn attach(&self, _request: &DialogRequest) {
//!         self.shown.set(self.shown.get() + 1);
//!     }
//!     fn detach(&self, _request: &DialogRequest) {}
//! }
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use kurbo::{Point, Rect};

use crate::request::DialogRequest;
use crate::types::{DialogFlags, DismissalCause};

/// A rendering surface driven by the scheduler.
///
/// Register one per dialog type with
/// [`ModalScheduler::register_presenter`](crate::scheduler::ModalScheduler::register_presenter).
pub trait Presenter {
    /// Bookkeeping shared by all presenters: current request and cancel token.
    fn slot(&self) -> &PresenterSlot;

    /// A request was installed; start displaying it.
    ///
    /// Called exactly once per show. [`Presenter::current_dialog`] already
    /// returns `request` when this runs.
    fn attach(&self, request: &DialogRequest);

    /// The request was removed; stop displaying it.
    ///
    /// Called exactly once per hide, after the slot has been cleared. No
    /// controller callback is implied: the request may have been dismissed, or
    /// only suspended and requeued.
    fn detach(&self, request: &DialogRequest);

    /// The request currently attached, if any.
    fn current_dialog(&self) -> Option<DialogRequest> {
        self.slot().current_dialog()
    }

    /// Report a cancel gesture for the attached request.
    ///
    /// Returns `true` if a cancellation was delivered.
    fn trigger_cancel(&self, cause: DismissalCause) -> bool {
        self.slot().trigger_cancel(cause)
    }
}

/// At-most-once cancel handle handed to a presenter when a request is attached.
///
/// Firing runs the scheduler's cancellation for that request. The fired state
/// is tracked on the token itself, so holding on to a stale token is harmless.
pub struct CancelToken {
    fired: Cell<bool>,
    action: Box<dyn Fn(DismissalCause)>,
}

impl core::fmt::Debug for CancelToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CancelToken")
            .field("fired", &self.fired.get())
            .finish_non_exhaustive()
    }
}

impl CancelToken {
    /// Wrap a cancellation action.
    pub fn new(action: impl Fn(DismissalCause) + 'static) -> Self {
        Self {
            fired: Cell::new(false),
            action: Box::new(action),
        }
    }

    /// Run the action unless it already ran. Returns `true` if it ran now.
    pub fn fire(&self, cause: DismissalCause) -> bool {
        if self.fired.replace(true) {
            return false;
        }
        (self.action)(cause);
        true
    }

    /// Whether the token has been fired.
    pub fn is_fired(&self) -> bool {
        self.fired.get()
    }
}

/// Base helper embedded in every presenter.
///
/// Holds the attached request and its [`CancelToken`]. The scheduler fills and
/// clears it; presenters read it and forward gestures through it.
#[derive(Debug, Default)]
pub struct PresenterSlot {
    current: RefCell<Option<DialogRequest>>,
    cancel: RefCell<Option<Rc<CancelToken>>>,
}

impl PresenterSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The request currently attached, if any.
    pub fn current_dialog(&self) -> Option<DialogRequest> {
        self.current.borrow().clone()
    }

    /// Whether nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.current.borrow().is_none()
    }

    /// Fire the cancel token of the attached request.
    ///
    /// Returns `false` when nothing is attached or the token already fired.
    pub fn trigger_cancel(&self, cause: DismissalCause) -> bool {
        // Release the borrow first: firing re-enters the scheduler, which clears
        // this slot.
        let token = self.cancel.borrow().clone();
        token.is_some_and(|token| token.fire(cause))
    }

    /// Back navigation: cancel if the attached request is [`DialogFlags::CANCELABLE`].
    pub fn handle_back(&self) -> bool {
        if !self.current_has(DialogFlags::CANCELABLE) {
            return false;
        }
        self.trigger_cancel(DismissalCause::NavigateBack)
    }

    /// Pointer press at `point`: cancel if it lies outside `content_bounds` and the
    /// attached request is [`DialogFlags::CANCEL_ON_TOUCH_OUTSIDE`].
    ///
    /// Both arguments are in the presenter's own coordinate space.
    pub fn handle_pointer_down(&self, point: Point, content_bounds: Rect) -> bool {
        if content_bounds.contains(point) {
            return false;
        }
        if !self.current_has(DialogFlags::CANCEL_ON_TOUCH_OUTSIDE) {
            return false;
        }
        self.trigger_cancel(DismissalCause::TouchOutside)
    }

    pub(crate) fn install(&self, request: DialogRequest, token: CancelToken) {
        *self.current.borrow_mut() = Some(request);
        *self.cancel.borrow_mut() = Some(Rc::new(token));
    }

    /// Clear the slot if it holds `request`. Returns whether it did.
    pub(crate) fn clear_if(&self, request: &DialogRequest) -> bool {
        let mut current = self.current.borrow_mut();
        if current.as_ref() != Some(request) {
            return false;
        }
        *current = None;
        *self.cancel.borrow_mut() = None;
        true
    }

    fn current_has(&self, flags: DialogFlags) -> bool {
        self.current
            .borrow()
            .as_ref()
            .is_some_and(|request| request.params().flags.contains(flags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Controller;
    use crate::types::ButtonKind;

    struct Noop;
    impl Controller for Noop {
        fn on_click(&mut self, _request: &DialogRequest, _button: ButtonKind) {}
        fn on_cancel(&mut self, _request: &DialogRequest) {}
        fn on_dismiss(&mut self, _request: &DialogRequest, _cause: DismissalCause) {}
    }

    fn recording_token() -> (CancelToken, Rc<RefCell<Option<DismissalCause>>>) {
        let seen: Rc<RefCell<Option<DismissalCause>>> = Rc::default();
        let sink = seen.clone();
        let token = CancelToken::new(move |cause| *sink.borrow_mut() = Some(cause));
        (token, seen)
    }

    #[test]
    fn token_fires_once() {
        let (token, seen) = recording_token();
        assert!(token.fire(DismissalCause::Cancelled));
        assert!(token.is_fired());
        assert!(!token.fire(DismissalCause::TouchOutside));
        assert_eq!(*seen.borrow(), Some(DismissalCause::Cancelled));
    }

    #[test]
    fn empty_slot_does_not_cancel() {
        let slot = PresenterSlot::new();
        assert!(slot.is_empty());
        assert!(!slot.trigger_cancel(DismissalCause::Cancelled));
        assert!(!slot.handle_back());
    }

    #[test]
    fn clear_if_only_matches_installed_request() {
        let slot = PresenterSlot::new();
        let a = DialogRequest::new(Noop);
        let b = DialogRequest::new(Noop);
        let (token, _) = recording_token();
        slot.install(a.clone(), token);
        assert!(!slot.clear_if(&b));
        assert_eq!(slot.current_dialog(), Some(a.clone()));
        assert!(slot.clear_if(&a));
        assert!(slot.is_empty());
        assert!(!slot.trigger_cancel(DismissalCause::Cancelled));
    }

    #[test]
    fn touch_outside_requires_flag_and_miss() {
        let slot = PresenterSlot::new();
        let bounds = Rect::new(10.0, 10.0, 50.0, 50.0);

        let plain = DialogRequest::new(Noop);
        let (token, seen) = recording_token();
        slot.install(plain.clone(), token);
        assert!(!slot.handle_pointer_down(Point::new(0.0, 0.0), bounds));
        assert_eq!(*seen.borrow(), None);
        assert!(slot.clear_if(&plain));

        let outside = DialogRequest::builder(Noop)
            .flags(DialogFlags::CANCEL_ON_TOUCH_OUTSIDE)
            .build();
        let (token, seen) = recording_token();
        slot.install(outside, token);
        assert!(!slot.handle_pointer_down(Point::new(20.0, 20.0), bounds));
        assert!(slot.handle_pointer_down(Point::new(0.0, 0.0), bounds));
        assert_eq!(*seen.borrow(), Some(DismissalCause::TouchOutside));
        // The token is spent.
        assert!(!slot.handle_pointer_down(Point::new(0.0, 0.0), bounds));
    }

    #[test]
    fn back_respects_cancelable() {
        let slot = PresenterSlot::new();
        let pinned = DialogRequest::builder(Noop)
            .flags(DialogFlags::empty())
            .build();
        let (token, seen) = recording_token();
        slot.install(pinned.clone(), token);
        assert!(!slot.handle_back());
        assert!(slot.clear_if(&pinned));

        let (token, _) = recording_token();
        slot.install(DialogRequest::new(Noop), token);
        assert!(slot.handle_back());
        assert_eq!(*seen.borrow(), None);
    }
}
