// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the scheduler: dialog classes, buttons, dismissal causes, flags, and errors.
//!
//! ## Overview
//!
//! These types describe the arbitration protocol and its inputs/outputs.
//! They are referenced by the [`scheduler`](crate::scheduler), carried by
//! [`DialogRequest`](crate::request::DialogRequest), and used by downstream toolkits.

/// The stock two-class priority model.
///
/// Any `Copy + Ord + Debug` type can be used as a dialog type with
/// [`ModalScheduler`](crate::scheduler::ModalScheduler); ordering *is* priority and the
/// smaller value wins. For a fieldless enum with derived `Ord` that means the
/// first declared variant has the highest priority.
///
/// This enum covers the common case of an application-wide class that outranks
/// dialogs scoped to a single context (a tab, a document, a pane).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ModalDialogType {
    /// Application-wide dialogs. Highest priority.
    App,
    /// Dialogs scoped to one context, such as a tab.
    Tab,
}

/// Buttons a presenter can report through [`DialogRequest::click`](crate::request::DialogRequest::click).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ButtonKind {
    /// The affirmative action.
    Positive,
    /// The dismissive action.
    Negative,
}

/// Why a request left the scheduler.
///
/// Passed to [`Controller::on_dismiss`](crate::request::Controller::on_dismiss).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DismissalCause {
    /// The host dismissed the dialog after the positive button.
    PositiveButton,
    /// The host dismissed the dialog after the negative button.
    NegativeButton,
    /// Cancelled with no more specific reason.
    Cancelled,
    /// Cancelled by back navigation, reported by a presenter.
    NavigateBack,
    /// Cancelled by a tap outside the dialog content, reported by a presenter.
    TouchOutside,
    /// Swept by [`cancel_all_dialogs`](crate::scheduler::ModalScheduler::cancel_all_dialogs).
    CancelAll,
    /// The scheduler was torn down with [`destroy`](crate::scheduler::ModalScheduler::destroy).
    Destroyed,
}

bitflags::bitflags! {
    /// Presentation flags carried by a request.
    ///
    /// The scheduler never reads these; they are consumed by presenters and by the
    /// gesture helpers on [`PresenterSlot`](crate::presenter::PresenterSlot).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DialogFlags: u8 {
        /// Back navigation cancels the dialog.
        const CANCELABLE              = 0b0000_0001;
        /// A pointer press outside the content bounds cancels the dialog.
        const CANCEL_ON_TOUCH_OUTSIDE = 0b0000_0010;
        /// Presenters should drop input while the window is obscured.
        const FILTER_TOUCH_FOR_SECURITY = 0b0000_0100;
    }
}

impl Default for DialogFlags {
    fn default() -> Self {
        Self::CANCELABLE
    }
}

/// Callback order used when [`cancel_all_dialogs`](crate::scheduler::ModalScheduler::cancel_all_dialogs)
/// drains *pending* requests.
///
/// The showing request is always cancelled through
/// [`cancel_dialog`](crate::scheduler::ModalScheduler::cancel_dialog), which fires
/// `on_cancel` then `on_dismiss`. By default drained pending requests get the
/// opposite order; [`BulkCancelOrder::CancelFirst`] makes both paths agree.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum BulkCancelOrder {
    /// `on_dismiss` then `on_cancel` for drained pending requests.
    #[default]
    DismissFirst,
    /// `on_cancel` then `on_dismiss` for drained pending requests.
    CancelFirst,
}

/// Where a request currently sits.
///
/// See [`DialogRequest::status`](crate::request::DialogRequest::status).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RequestStatus {
    /// Built but never submitted.
    New,
    /// Waiting in a pending queue, or chosen to show but not yet attached.
    Pending,
    /// Installed in a presenter.
    Showing,
    /// Received `on_dismiss`; no longer tracked.
    Retired,
}

/// Benign failures reported by the scheduler.
///
/// Wiring mistakes (registering two presenters for one type, submitting a request
/// twice) are programmer errors and panic instead.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DialogError {
    /// The request was never submitted to this scheduler.
    #[error("dialog request is not tracked by this scheduler")]
    NotTracked,
    /// The request already received `on_dismiss`, or its dismissal is in flight.
    #[error("dialog request has already been dismissed")]
    AlreadyDismissed,
    /// A presenter is already registered for the dialog type.
    #[error("a presenter is already registered for this dialog type")]
    PresenterAlreadyRegistered,
}
