// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scheduler implementation.
//!
//! ## Overview
//!
//! Owns the single showing slot, one pending queue per dialog type, the
//! suspension set, and the presenters. Decides which request, if any, is shown.
//!
//! ## Arbitration
//!
//! - A new request is queued when its type is suspended or when the showing
//!   request has equal or higher priority (equal types never preempt each other).
//! - Otherwise it preempts: the showing request is detached without callbacks and
//!   put back at the head of its own queue, then the new request is shown.
//! - Showing a request happens in three steps: the previous request is detached,
//!   the controller's `before_show` hook runs, and only then does the request
//!   take the showing slot and get attached. While the first two steps run the
//!   request is *staged*: nothing is showing, but it still blocks requests of
//!   equal or lower priority.
//! - When the slot frees up, the head of the highest-priority queue whose type is
//!   not suspended is shown next.
//!
//! ## Re-entrancy
//!
//! All operations run synchronously on one thread. No internal borrow is held
//! while a controller, presenter, or observer runs, so any of them may call back
//! into the scheduler. While the showing request is being dismissed, new
//! requests are queued and suspension does not displace it; repeated dismissals
//! of the same request are rejected with [`DialogError::AlreadyDismissed`].
//!
//! ## See Also
//!
//! [`presenter`](crate::presenter) for the rendering contract and
//! [`request`](crate::request) for controller delivery rules.

use alloc::collections::BTreeMap;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt::Debug;

use crate::presenter::{CancelToken, Presenter};
use crate::registry::{PendingQueues, Suspensions};
use crate::request::DialogRequest;
use crate::trace::{modal_debug, modal_trace};
use crate::types::{BulkCancelOrder, DialogError, DismissalCause, RequestStatus};

/// Host hooks for scheduler activity.
///
/// All methods default to no-ops. Register with [`ModalScheduler::add_observer`].
pub trait ModalObserver<T> {
    /// `request` was attached to its presenter.
    fn on_dialog_shown(&self, request: &DialogRequest, ty: T) {
        let _ = (request, ty);
    }

    /// `request` received `on_dismiss` and left the scheduler.
    fn on_dialog_dismissed(&self, request: &DialogRequest, ty: T) {
        let _ = (request, ty);
    }

    /// A request retired and nothing is showing or pending anymore.
    fn on_idle(&self) {}
}

struct Showing<T> {
    request: DialogRequest,
    ty: T,
    presenter: Rc<dyn Presenter>,
}

struct Staged<T> {
    request: DialogRequest,
    ty: T,
}

enum Lookup<T> {
    Current,
    Staged(T),
    Pending(T),
    Retired,
    Missing,
}

struct State<T> {
    presenters: BTreeMap<T, Rc<dyn Presenter>>,
    // Services types without a registered presenter.
    default_presenter: Rc<dyn Presenter>,
    pending: PendingQueues<T>,
    suspended: Suspensions<T>,
    current: Option<Showing<T>>,
    // Chosen to show next; its predecessor is detaching or its pre-show hook runs.
    staged: Option<Staged<T>>,
    // Set while the showing request's `on_dismiss` runs.
    dismissing_current: bool,
    bulk_cancel_order: BulkCancelOrder,
    observers: Vec<Rc<dyn ModalObserver<T>>>,
    destroyed: bool,
}

impl<T: Copy + Ord> State<T> {
    fn tracks(&self, request: &DialogRequest) -> bool {
        let showing = self
            .current
            .as_ref()
            .is_some_and(|c| c.request == *request && !self.dismissing_current);
        showing || self.is_staged(request) || self.pending.contains(request)
    }

    fn is_staged(&self, request: &DialogRequest) -> bool {
        self.staged.as_ref().is_some_and(|s| s.request == *request)
    }

    /// Type holding the showing slot, counting a staged request.
    fn occupant(&self) -> Option<T> {
        self.current
            .as_ref()
            .map(|c| c.ty)
            .or_else(|| self.staged.as_ref().map(|s| s.ty))
    }

    fn slot_free(&self) -> bool {
        self.current.is_none() && self.staged.is_none() && !self.dismissing_current
    }
}

/// Modal dialog arbitration scheduler.
///
/// ## Usage
///
/// - Construct once with [`ModalScheduler::new`], passing the presenter for the
///   default type. That presenter also services any type without its own.
/// - Register further presenters with [`ModalScheduler::register_presenter`].
/// - Submit requests with [`ModalScheduler::show_dialog`] (or
///   [`ModalScheduler::show_dialog_as_next`] to cut ahead of same-type siblings).
/// - Retire them with [`ModalScheduler::dismiss_dialog`] or
///   [`ModalScheduler::cancel_dialog`]; presenters cancel through their
///   [`CancelToken`].
/// - Gate whole types with [`ModalScheduler::suspend_type`] /
///   [`ModalScheduler::resume_type`].
///
/// This is a cheap-clone handle to shared single-threaded state. Controllers and
/// presenters that keep a handle should hold a [`WeakModalScheduler`] so that a
/// pending request does not keep the scheduler alive.
///
/// ```
/// use std::rc::Rc;
/// use understory_modal::presenter::{Presenter, PresenterSlot};
/// use understory_modal::request::{Controller, DialogRequest};
/// use understory_modal::scheduler::ModalScheduler;
/// use understory_modal::types::{ButtonKind, DismissalCause, ModalDialogType};
///
/// #[derive(Default)]
/// struct Surface(PresenterSlot);
/// impl Presenter for Surface {
///     fn slot(&self) -> &PresenterSlot { &self.0 }
///     fn attach(&self, _request: &DialogRequest) {}
///     fn detach(&self, _request: &DialogRequest) {}
/// }
///
/// struct Quiet;
/// impl Controller for Quiet {
///     fn on_click(&mut self, _r: &DialogRequest, _b: ButtonKind) {}
///     fn on_cancel(&mut self, _r: &DialogRequest) {}
///     fn on_dismiss(&mut self, _r: &DialogRequest, _c: DismissalCause) {}
/// }
///
/// let scheduler = ModalScheduler::new(Rc::new(Surface::default()), ModalDialogType::App);
/// scheduler.register_presenter(Rc::new(Surface::default()), ModalDialogType::Tab);
///
/// let tab = DialogRequest::new(Quiet);
/// let app = DialogRequest::new(Quiet);
/// scheduler.show_dialog(tab.clone(), ModalDialogType::Tab);
/// scheduler.show_dialog(app.clone(), ModalDialogType::App);
///
/// // The app dialog preempted the tab dialog, which waits at the head of its queue.
/// assert_eq!(scheduler.current_dialog(), Some(app.clone()));
/// assert_eq!(scheduler.pending_dialogs(ModalDialogType::Tab), vec![tab.clone()]);
///
/// scheduler.dismiss_dialog(&app, DismissalCause::PositiveButton).unwrap();
/// assert_eq!(scheduler.current_dialog(), Some(tab));
/// ```
pub struct ModalScheduler<T> {
    state: Rc<RefCell<State<T>>>,
}

impl<T> Clone for ModalScheduler<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T: Debug> Debug for ModalScheduler<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Ok(state) = self.state.try_borrow() else {
            return f.debug_struct("ModalScheduler").finish_non_exhaustive();
        };
        f.debug_struct("ModalScheduler")
            .field("current_type", &state.current.as_ref().map(|c| &c.ty))
            .field("current", &state.current.as_ref().map(|c| &c.request))
            .field("pending", &state.pending)
            .field("suspended", &state.suspended)
            .field("presenters", &state.presenters.len())
            .field("bulk_cancel_order", &state.bulk_cancel_order)
            .field("destroyed", &state.destroyed)
            .finish_non_exhaustive()
    }
}

/// Non-owning handle to a [`ModalScheduler`].
pub struct WeakModalScheduler<T> {
    state: Weak<RefCell<State<T>>>,
}

impl<T> Clone for WeakModalScheduler<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T> Debug for WeakModalScheduler<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WeakModalScheduler")
            .field("alive", &(self.state.strong_count() > 0))
            .finish()
    }
}

impl<T> WeakModalScheduler<T> {
    /// Get a strong handle if the scheduler is still alive.
    pub fn upgrade(&self) -> Option<ModalScheduler<T>> {
        self.state.upgrade().map(|state| ModalScheduler { state })
    }
}

impl<T: Copy + Ord + Debug + 'static> ModalScheduler<T> {
    /// Create a scheduler with `default_presenter` registered for `default_type`.
    ///
    /// `default_presenter` is also the fallback for types that never get a
    /// presenter of their own.
    pub fn new(default_presenter: Rc<dyn Presenter>, default_type: T) -> Self {
        let mut presenters = BTreeMap::new();
        presenters.insert(default_type, default_presenter.clone());
        Self {
            state: Rc::new(RefCell::new(State {
                presenters,
                default_presenter,
                pending: PendingQueues::default(),
                suspended: Suspensions::default(),
                current: None,
                staged: None,
                dismissing_current: false,
                bulk_cancel_order: BulkCancelOrder::default(),
                observers: Vec::new(),
                destroyed: false,
            })),
        }
    }

    /// Non-owning handle for controllers and presenters.
    pub fn downgrade(&self) -> WeakModalScheduler<T> {
        WeakModalScheduler {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Bind `presenter` to `ty`.
    ///
    /// # Panics
    ///
    /// If a presenter is already registered for `ty`.
    pub fn register_presenter(&self, presenter: Rc<dyn Presenter>, ty: T) {
        if self.try_register_presenter(presenter, ty).is_err() {
            panic!("a presenter is already registered for {ty:?}");
        }
    }

    /// Bind `presenter` to `ty`, or report that one is already bound.
    pub fn try_register_presenter(
        &self,
        presenter: Rc<dyn Presenter>,
        ty: T,
    ) -> Result<(), DialogError> {
        let mut state = self.state.borrow_mut();
        if state.presenters.contains_key(&ty) {
            return Err(DialogError::PresenterAlreadyRegistered);
        }
        state.presenters.insert(ty, presenter);
        Ok(())
    }

    /// The presenter that services `ty`: its own, or the default one.
    pub fn presenter_for(&self, ty: T) -> Rc<dyn Presenter> {
        let state = self.state.borrow();
        state
            .presenters
            .get(&ty)
            .cloned()
            .unwrap_or_else(|| state.default_presenter.clone())
    }

    /// Choose the callback order for pending requests swept by
    /// [`ModalScheduler::cancel_all_dialogs`].
    pub fn set_bulk_cancel_order(&self, order: BulkCancelOrder) {
        self.state.borrow_mut().bulk_cancel_order = order;
    }

    /// Current bulk cancel order.
    pub fn bulk_cancel_order(&self) -> BulkCancelOrder {
        self.state.borrow().bulk_cancel_order
    }

    /// Register an observer.
    pub fn add_observer(&self, observer: Rc<dyn ModalObserver<T>>) {
        self.state.borrow_mut().observers.push(observer);
    }

    /// Unregister an observer previously passed to [`ModalScheduler::add_observer`].
    pub fn remove_observer(&self, observer: &Rc<dyn ModalObserver<T>>) {
        self.state
            .borrow_mut()
            .observers
            .retain(|o| !Rc::ptr_eq(o, observer));
    }

    // --- Request lifecycle ---

    /// Submit `request` under `ty`, queued behind same-type siblings if it cannot
    /// show right away.
    ///
    /// # Panics
    ///
    /// If `request` was submitted before, or the scheduler was destroyed.
    pub fn show_dialog(&self, request: DialogRequest, ty: T) {
        self.submit(request, ty, false);
    }

    /// Like [`ModalScheduler::show_dialog`], but queued ahead of same-type
    /// siblings. Priority against other types is unchanged.
    pub fn show_dialog_as_next(&self, request: DialogRequest, ty: T) {
        self.submit(request, ty, true);
    }

    /// Retire `request`, firing its `on_dismiss(cause)`.
    ///
    /// A pending request is simply removed. The showing request is detached and
    /// the next eligible request is shown.
    ///
    /// Returns [`DialogError::NotTracked`] for a request this scheduler never saw
    /// and [`DialogError::AlreadyDismissed`] for one that already retired or is
    /// retiring; neither fires a callback.
    pub fn dismiss_dialog(
        &self,
        request: &DialogRequest,
        cause: DismissalCause,
    ) -> Result<(), DialogError> {
        let lookup = {
            let mut state = self.state.borrow_mut();
            if state.current.as_ref().is_some_and(|c| c.request == *request) {
                if state.dismissing_current {
                    Lookup::Retired
                } else {
                    state.dismissing_current = true;
                    request.set_status(RequestStatus::Retired);
                    Lookup::Current
                }
            } else if state.is_staged(request) {
                request.set_status(RequestStatus::Retired);
                state.staged.take().map_or(Lookup::Missing, |s| Lookup::Staged(s.ty))
            } else if let Some(ty) = state.pending.remove(request) {
                request.set_status(RequestStatus::Retired);
                Lookup::Pending(ty)
            } else if request.status() == RequestStatus::Retired {
                Lookup::Retired
            } else {
                Lookup::Missing
            }
        };

        match lookup {
            Lookup::Current => {
                self.finish_current_dismissal(request, cause);
                Ok(())
            }
            Lookup::Staged(ty) => {
                // Never attached, so there is nothing to detach.
                request.notify_dismiss(cause);
                modal_debug!(?ty, ?cause, "staged dialog dismissed");
                self.notify_dismissed(request, ty);
                self.show_next_dialog();
                self.notify_if_idle();
                Ok(())
            }
            Lookup::Pending(ty) => {
                request.notify_dismiss(cause);
                modal_debug!(?ty, ?cause, "pending dialog dismissed");
                self.notify_dismissed(request, ty);
                self.notify_if_idle();
                Ok(())
            }
            Lookup::Retired => Err(DialogError::AlreadyDismissed),
            Lookup::Missing => Err(DialogError::NotTracked),
        }
    }

    /// Fire `on_cancel`, then dismiss `request` with `cause`.
    ///
    /// Untracked requests get no callback and the same errors as
    /// [`ModalScheduler::dismiss_dialog`].
    pub fn cancel_dialog(
        &self,
        request: &DialogRequest,
        cause: DismissalCause,
    ) -> Result<(), DialogError> {
        if !self.state.borrow().tracks(request) {
            return Err(if request.status() == RequestStatus::Retired {
                DialogError::AlreadyDismissed
            } else {
                DialogError::NotTracked
            });
        }
        request.notify_cancel();
        match self.dismiss_dialog(request, cause) {
            // `on_cancel` may already have dismissed the request itself.
            Ok(()) | Err(DialogError::AlreadyDismissed) => Ok(()),
            Err(err) => Err(err),
        }
    }

    /// Cancel every pending and showing request.
    ///
    /// Pending requests are drained in priority order and notified according to
    /// [`ModalScheduler::bulk_cancel_order`]; the showing request goes through
    /// [`ModalScheduler::cancel_dialog`]. The cause is [`DismissalCause::CancelAll`].
    pub fn cancel_all_dialogs(&self) {
        self.cancel_all(None, DismissalCause::CancelAll);
    }

    /// Cancel the pending and showing requests of `ty` only.
    pub fn cancel_all_dialogs_of(&self, ty: T) {
        self.cancel_all(Some(ty), DismissalCause::CancelAll);
    }

    /// Cancel everything with [`DismissalCause::Destroyed`], drop presenters and
    /// observers, and refuse further submissions.
    pub fn destroy(&self) {
        self.state.borrow_mut().destroyed = true;
        self.cancel_all(None, DismissalCause::Destroyed);
        let mut state = self.state.borrow_mut();
        state.presenters.clear();
        state.observers.clear();
        state.suspended.clear();
        modal_debug!("scheduler destroyed");
    }

    // --- Suspension ---

    /// Bar `ty` from showing. A showing request of that type is put back at the
    /// head of its queue without callbacks, and the next eligible request shows.
    pub fn suspend_type(&self, ty: T) {
        let (displaced, unstaged) = {
            let mut state = self.state.borrow_mut();
            if state.suspended.suspend(ty) {
                modal_debug!(?ty, "dialog type suspended");
            }
            let displaced = if state.dismissing_current {
                None
            } else {
                state.current.take_if(|c| c.ty == ty)
            };
            if let Some(showing) = &displaced {
                showing.request.set_status(RequestStatus::Pending);
                state.pending.push(showing.ty, showing.request.clone(), true);
            }
            let unstaged = state.staged.take_if(|s| s.ty == ty);
            if let Some(staged) = &unstaged {
                state.pending.push(staged.ty, staged.request.clone(), true);
            }
            (displaced, unstaged.is_some())
        };
        if let Some(showing) = &displaced {
            self.detach(showing);
        }
        if displaced.is_some() || unstaged {
            self.show_next_dialog();
        }
    }

    /// Allow `ty` to show again. If nothing is showing, the next eligible request
    /// shows.
    pub fn resume_type(&self, ty: T) {
        let slot_free = {
            let mut state = self.state.borrow_mut();
            if state.suspended.resume(ty) {
                modal_debug!(?ty, "dialog type resumed");
            }
            state.slot_free()
        };
        if slot_free {
            self.show_next_dialog();
        }
    }

    /// Whether `ty` is suspended.
    pub fn is_suspended(&self, ty: T) -> bool {
        self.state.borrow().suspended.contains(ty)
    }

    // --- State Queries ---

    /// Whether a request occupies the showing slot.
    pub fn is_showing(&self) -> bool {
        self.state.borrow().current.is_some()
    }

    /// The showing request, if any.
    pub fn current_dialog(&self) -> Option<DialogRequest> {
        self.state
            .borrow()
            .current
            .as_ref()
            .map(|c| c.request.clone())
    }

    /// Type of the showing request, if any.
    pub fn current_type(&self) -> Option<T> {
        self.state.borrow().current.as_ref().map(|c| c.ty)
    }

    /// Requests waiting under `ty`, head first.
    pub fn pending_dialogs(&self, ty: T) -> Vec<DialogRequest> {
        self.state.borrow().pending.snapshot(ty)
    }

    /// Number of requests waiting across all types.
    pub fn pending_count(&self) -> usize {
        self.state.borrow().pending.len()
    }

    // --- Internals ---

    fn submit(&self, request: DialogRequest, ty: T, at_head: bool) {
        assert!(
            request.status() == RequestStatus::New,
            "dialog request was already submitted (status {:?})",
            request.status()
        );
        assert!(
            !self.state.borrow().destroyed,
            "cannot show dialogs on a destroyed scheduler"
        );
        self.arbitrate(request, ty, at_head);
    }

    fn arbitrate(&self, request: DialogRequest, ty: T, at_head: bool) {
        let displaced = {
            let mut state = self.state.borrow_mut();
            let blocked = state.suspended.contains(ty)
                || state.dismissing_current
                || state.occupant().is_some_and(|occupant| occupant <= ty);
            request.set_status(RequestStatus::Pending);
            if blocked {
                state.pending.push(ty, request, at_head);
                modal_debug!(?ty, at_head, "dialog queued");
                return;
            }

            // A lower-priority request that was about to show goes back to its queue.
            if let Some(previous) = state.staged.take() {
                state.pending.push(previous.ty, previous.request, true);
            }
            // Suspend the showing request in place.
            let displaced = state.current.take();
            if let Some(showing) = &displaced {
                showing.request.set_status(RequestStatus::Pending);
                state.pending.push(showing.ty, showing.request.clone(), true);
            }
            state.staged = Some(Staged {
                request: request.clone(),
                ty,
            });
            displaced
        };

        if let Some(showing) = displaced {
            modal_debug!(from = ?showing.ty, to = ?ty, "dialog preempted");
            self.detach(&showing);
        }
        // Detaching runs host code, which may have dismissed or displaced the request.
        if !self.is_staged(&request) {
            return;
        }

        request.notify_before_show();
        let presenter = {
            let mut state = self.state.borrow_mut();
            if !state.is_staged(&request) {
                return;
            }
            state.staged = None;
            let presenter = state
                .presenters
                .get(&ty)
                .cloned()
                .unwrap_or_else(|| state.default_presenter.clone());
            request.set_status(RequestStatus::Showing);
            state.current = Some(Showing {
                request: request.clone(),
                ty,
                presenter: presenter.clone(),
            });
            presenter
        };

        presenter
            .slot()
            .install(request.clone(), self.cancel_token(&request));
        presenter.attach(&request);
        modal_debug!(?ty, "dialog shown");

        if self.is_current(&request) {
            for observer in self.observers() {
                observer.on_dialog_shown(&request, ty);
            }
        }
    }

    fn finish_current_dismissal(&self, request: &DialogRequest, cause: DismissalCause) {
        request.notify_dismiss(cause);

        let showing = {
            let mut state = self.state.borrow_mut();
            state.dismissing_current = false;
            // Nothing can replace the current request while `dismissing_current` is set.
            state.current.take_if(|c| c.request == *request)
        };
        if let Some(showing) = showing {
            self.detach(&showing);
            modal_debug!(ty = ?showing.ty, ?cause, "dialog dismissed");
            self.notify_dismissed(&showing.request, showing.ty);
        }

        self.show_next_dialog();
        self.notify_if_idle();
    }

    fn cancel_all(&self, scope: Option<T>, cause: DismissalCause) {
        let (drained, order, current) = {
            let mut state = self.state.borrow_mut();
            let drained: Vec<(T, DialogRequest)> = match scope {
                Some(ty) => state
                    .pending
                    .drain(ty)
                    .into_iter()
                    .map(|r| (ty, r))
                    .collect(),
                None => state.pending.drain_all(),
            };
            for (_, request) in &drained {
                request.set_status(RequestStatus::Retired);
            }
            let dismissing = state.dismissing_current;
            let in_scope = |ty: T| scope.is_none_or(|scope| scope == ty);
            let current = state
                .current
                .as_ref()
                .filter(|c| !dismissing && in_scope(c.ty))
                .map(|c| c.request.clone())
                .or_else(|| {
                    state
                        .staged
                        .as_ref()
                        .filter(|s| in_scope(s.ty))
                        .map(|s| s.request.clone())
                });
            (drained, state.bulk_cancel_order, current)
        };
        modal_debug!(?scope, drained = drained.len(), ?order, "cancelling dialogs");

        let swept_any = !drained.is_empty();
        for (ty, request) in drained {
            match order {
                BulkCancelOrder::DismissFirst => {
                    request.notify_dismiss(cause);
                    request.notify_cancel();
                }
                BulkCancelOrder::CancelFirst => {
                    request.notify_cancel();
                    request.notify_dismiss(cause);
                }
            }
            self.notify_dismissed(&request, ty);
        }

        if let Some(current) = current {
            // A drained controller may already have dismissed it.
            let _ = self.cancel_dialog(&current, cause);
        } else if swept_any {
            self.notify_if_idle();
        }
    }

    /// Show the head of the highest-priority eligible queue. Returns whether a
    /// request was taken off a queue.
    fn show_next_dialog(&self) -> bool {
        let next = {
            let mut guard = self.state.borrow_mut();
            let state = &mut *guard;
            if !state.slot_free() {
                return false;
            }
            state.pending.pop_next(&state.suspended)
        };
        match next {
            Some((ty, request)) => {
                modal_trace!(?ty, "showing next dialog");
                self.arbitrate(request, ty, false);
                true
            }
            None => {
                modal_trace!("no eligible pending dialog");
                false
            }
        }
    }

    fn detach(&self, showing: &Showing<T>) {
        if showing.presenter.slot().clear_if(&showing.request) {
            showing.presenter.detach(&showing.request);
        }
    }

    fn cancel_token(&self, request: &DialogRequest) -> CancelToken {
        let scheduler = self.downgrade();
        let request = request.clone();
        CancelToken::new(move |cause| {
            if let Some(scheduler) = scheduler.upgrade() {
                let _ = scheduler.cancel_dialog(&request, cause);
            }
        })
    }

    fn is_staged(&self, request: &DialogRequest) -> bool {
        self.state.borrow().is_staged(request)
    }

    fn is_current(&self, request: &DialogRequest) -> bool {
        self.state
            .borrow()
            .current
            .as_ref()
            .is_some_and(|c| c.request == *request)
    }

    fn observers(&self) -> Vec<Rc<dyn ModalObserver<T>>> {
        self.state.borrow().observers.clone()
    }

    fn notify_dismissed(&self, request: &DialogRequest, ty: T) {
        for observer in self.observers() {
            observer.on_dialog_dismissed(request, ty);
        }
    }

    fn notify_if_idle(&self) {
        let idle = {
            let state = self.state.borrow();
            state.slot_free() && state.pending.is_empty()
        };
        if idle {
            modal_debug!("scheduler idle");
            for observer in self.observers() {
                observer.on_idle();
            }
        }
    }
}
