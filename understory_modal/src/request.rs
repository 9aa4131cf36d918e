// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dialog requests and the controller callback contract.
//!
//! ## Identity
//!
//! A [`DialogRequest`] is a cheap-clone handle. Two handles are equal only when
//! they refer to the same request; there is no generated id. The scheduler
//! finds requests in its queues by this identity.
//!
//! ## Delivery
//!
//! Controller callbacks for one request never nest. When a callback causes
//! another notification for the *same* request (for example `on_click` calling
//! [`cancel_dialog`](crate::scheduler::ModalScheduler::cancel_dialog) on its own
//! request), the nested notification is parked on the request and delivered, in
//! order, as soon as the running callback returns.
//!
//! ```
//! use understory_modal::request::{Controller, DialogRequest};
//! use understory_modal::types::{ButtonKind, DismissalCause};
//!
//! struct Confirm;
//! impl Controller for Confirm {
//!     fn on_click(&mut self, _request: &DialogRequest, _button: ButtonKind) {}
//!     fn on_cancel(&mut self, _request: &DialogRequest) {}
//!     fn on_dismiss(&mut self, _request: &DialogRequest, _cause: DismissalCause) {}
//! }
//!
//! let request = DialogRequest::builder(Confirm)
//!     .title("Delete bookmark?")
//!     .message("This cannot be undone.")
//!     .positive_button("Delete")
//!     .negative_button("Keep")
//!     .build();
//! assert_eq!(request.params().title.as_deref(), Some("Delete bookmark?"));
//! assert_eq!(request.clone(), request);
//! ```

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::{Cell, RefCell};

use crate::types::{ButtonKind, DialogFlags, DismissalCause, RequestStatus};

/// Callbacks a dialog request reports to its owner.
///
/// Every callback receives the request it belongs to, so a controller can hand
/// it back to the scheduler (for example to dismiss itself from `on_click`).
pub trait Controller {
    /// A request-defined button was pressed.
    ///
    /// Delivered when a presenter calls [`DialogRequest::click`]; the scheduler
    /// never calls this itself.
    fn on_click(&mut self, request: &DialogRequest, button: ButtonKind);

    /// The request was dismissed without an explicit action on the dialog itself:
    /// back navigation, a tap outside, or a host-driven sweep.
    fn on_cancel(&mut self, request: &DialogRequest);

    /// The request left the scheduler. Delivered exactly once.
    fn on_dismiss(&mut self, request: &DialogRequest, cause: DismissalCause);

    /// The request is about to be installed into a presenter.
    ///
    /// Runs every time the request is shown, including when it comes back after
    /// being preempted or suspended. Any request it displaces has already been
    /// detached, and the scheduler reports nothing showing until this returns.
    fn before_show(&mut self, request: &DialogRequest) {
        let _ = request;
    }
}

/// Main content of a dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DialogBody {
    /// No body; title and buttons only.
    #[default]
    Empty,
    /// A plain text message.
    Message(String),
    /// A host-defined content view, identified by a key the presenter understands.
    Custom(u64),
}

/// Presentation parameters carried by a request.
///
/// Opaque to the scheduler; presenters read them when a request is attached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogParams {
    /// Optional title line.
    pub title: Option<String>,
    /// Message or custom content.
    pub body: DialogBody,
    /// Label of the positive button, if shown.
    pub positive_button: Option<String>,
    /// Label of the negative button, if shown.
    pub negative_button: Option<String>,
    /// Gesture and input flags.
    pub flags: DialogFlags,
}

#[derive(Copy, Clone, Debug)]
enum Notice {
    BeforeShow,
    Click(ButtonKind),
    Cancel,
    Dismiss(DismissalCause),
}

struct Inner {
    controller: RefCell<Box<dyn Controller>>,
    // Notifications raised while a callback for this request is running.
    mailbox: RefCell<VecDeque<Notice>>,
    params: DialogParams,
    status: Cell<RequestStatus>,
}

/// One modal interaction request.
///
/// Build with [`DialogRequest::new`] or [`DialogRequest::builder`], then submit
/// to a [`ModalScheduler`](crate::scheduler::ModalScheduler). A request can be
/// submitted once; after `on_dismiss` it is [`RequestStatus::Retired`].
#[derive(Clone)]
pub struct DialogRequest {
    inner: Rc<Inner>,
}

impl PartialEq for DialogRequest {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for DialogRequest {}

impl core::fmt::Debug for DialogRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DialogRequest")
            .field("addr", &Rc::as_ptr(&self.inner))
            .field("status", &self.inner.status.get())
            .field("title", &self.inner.params.title)
            .finish_non_exhaustive()
    }
}

impl DialogRequest {
    /// Create a request with default parameters.
    pub fn new(controller: impl Controller + 'static) -> Self {
        Self::with_params(Box::new(controller), DialogParams::default())
    }

    /// Start building a request with presentation parameters.
    pub fn builder(controller: impl Controller + 'static) -> DialogRequestBuilder {
        DialogRequestBuilder {
            controller: Box::new(controller),
            params: DialogParams::default(),
        }
    }

    fn with_params(controller: Box<dyn Controller>, params: DialogParams) -> Self {
        Self {
            inner: Rc::new(Inner {
                controller: RefCell::new(controller),
                mailbox: RefCell::new(VecDeque::new()),
                params,
                status: Cell::new(RequestStatus::New),
            }),
        }
    }

    /// Presentation parameters.
    pub fn params(&self) -> &DialogParams {
        &self.inner.params
    }

    /// Where the request currently sits.
    pub fn status(&self) -> RequestStatus {
        self.inner.status.get()
    }

    /// Report a button press to the controller.
    ///
    /// Called by presenters. The controller decides what happens next, usually by
    /// dismissing the request through the scheduler.
    pub fn click(&self, button: ButtonKind) {
        self.deliver(Notice::Click(button));
    }

    pub(crate) fn set_status(&self, status: RequestStatus) {
        self.inner.status.set(status);
    }

    pub(crate) fn notify_before_show(&self) {
        self.deliver(Notice::BeforeShow);
    }

    pub(crate) fn notify_cancel(&self) {
        self.deliver(Notice::Cancel);
    }

    pub(crate) fn notify_dismiss(&self, cause: DismissalCause) {
        self.deliver(Notice::Dismiss(cause));
    }

    fn deliver(&self, notice: Notice) {
        self.inner.mailbox.borrow_mut().push_back(notice);
        // A callback for this request is running further up the stack; it drains
        // the mailbox when it returns.
        let Ok(mut controller) = self.inner.controller.try_borrow_mut() else {
            return;
        };
        loop {
            let next = self.inner.mailbox.borrow_mut().pop_front();
            let Some(notice) = next else {
                break;
            };
            match notice {
                Notice::BeforeShow => controller.before_show(self),
                Notice::Click(button) => controller.on_click(self, button),
                Notice::Cancel => controller.on_cancel(self),
                Notice::Dismiss(cause) => controller.on_dismiss(self, cause),
            }
        }
    }
}

/// Builder for [`DialogRequest`].
///
/// A request carries either a message or a custom body. Setting both is a wiring
/// bug and panics.
pub struct DialogRequestBuilder {
    controller: Box<dyn Controller>,
    params: DialogParams,
}

impl core::fmt::Debug for DialogRequestBuilder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DialogRequestBuilder")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl DialogRequestBuilder {
    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.params.title = Some(title.into());
        self
    }

    /// Set a plain text body.
    ///
    /// # Panics
    ///
    /// If a body was already set.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        assert!(
            self.params.body == DialogBody::Empty,
            "a dialog carries either a message or a custom body, not both"
        );
        self.params.body = DialogBody::Message(message.into());
        self
    }

    /// Set a custom body, identified by a presenter-defined key.
    ///
    /// # Panics
    ///
    /// If a body was already set.
    pub fn custom_body(mut self, key: u64) -> Self {
        assert!(
            self.params.body == DialogBody::Empty,
            "a dialog carries either a message or a custom body, not both"
        );
        self.params.body = DialogBody::Custom(key);
        self
    }

    /// Show a positive button with this label.
    pub fn positive_button(mut self, label: impl Into<String>) -> Self {
        self.params.positive_button = Some(label.into());
        self
    }

    /// Show a negative button with this label.
    pub fn negative_button(mut self, label: impl Into<String>) -> Self {
        self.params.negative_button = Some(label.into());
        self
    }

    /// Replace the gesture flags.
    pub fn flags(mut self, flags: DialogFlags) -> Self {
        self.params.flags = flags;
        self
    }

    /// Finish the request.
    pub fn build(self) -> DialogRequest {
        DialogRequest::with_params(self.controller, self.params)
    }
}
