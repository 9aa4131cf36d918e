// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording controller and presenter shared by the integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::cell::RefCell;
use std::rc::Rc;

use understory_modal::presenter::{Presenter, PresenterSlot};
use understory_modal::request::{Controller, DialogRequest};
use understory_modal::scheduler::ModalScheduler;
use understory_modal::types::{ButtonKind, DialogFlags, DismissalCause, ModalDialogType};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    BeforeShow(String),
    Click(String, ButtonKind),
    Cancel(String),
    Dismiss(String, DismissalCause),
    Attach(&'static str, String),
    Detach(&'static str, String),
}

pub(crate) type Log = Rc<RefCell<Vec<Event>>>;

pub(crate) type Hook = Box<dyn FnMut(&DialogRequest)>;

pub(crate) fn label(request: &DialogRequest) -> String {
    request.params().title.clone().unwrap_or_default()
}

/// Optional behavior run after a callback is recorded.
#[derive(Default)]
pub(crate) struct Hooks {
    pub(crate) before_show: Option<Hook>,
    pub(crate) on_click: Option<Box<dyn FnMut(&DialogRequest, ButtonKind)>>,
    pub(crate) on_cancel: Option<Hook>,
    pub(crate) on_dismiss: Option<Hook>,
}

pub(crate) struct Recording {
    log: Log,
    hooks: Hooks,
}

impl Controller for Recording {
    fn on_click(&mut self, request: &DialogRequest, button: ButtonKind) {
        self.log
            .borrow_mut()
            .push(Event::Click(label(request), button));
        if let Some(hook) = &mut self.hooks.on_click {
            hook(request, button);
        }
    }

    fn on_cancel(&mut self, request: &DialogRequest) {
        self.log.borrow_mut().push(Event::Cancel(label(request)));
        if let Some(hook) = &mut self.hooks.on_cancel {
            hook(request);
        }
    }

    fn on_dismiss(&mut self, request: &DialogRequest, cause: DismissalCause) {
        self.log
            .borrow_mut()
            .push(Event::Dismiss(label(request), cause));
        if let Some(hook) = &mut self.hooks.on_dismiss {
            hook(request);
        }
    }

    fn before_show(&mut self, request: &DialogRequest) {
        self.log.borrow_mut().push(Event::BeforeShow(label(request)));
        if let Some(hook) = &mut self.hooks.before_show {
            hook(request);
        }
    }
}

pub(crate) struct RecordingPresenter {
    pub(crate) name: &'static str,
    slot: PresenterSlot,
    log: Log,
    on_detach: RefCell<Option<Hook>>,
}

impl RecordingPresenter {
    pub(crate) fn new(name: &'static str, log: Log) -> Self {
        Self {
            name,
            slot: PresenterSlot::new(),
            log,
            on_detach: RefCell::new(None),
        }
    }

    /// Run `hook` after the next detach is recorded.
    pub(crate) fn on_next_detach(&self, hook: impl FnMut(&DialogRequest) + 'static) {
        *self.on_detach.borrow_mut() = Some(Box::new(hook));
    }
}

impl Presenter for RecordingPresenter {
    fn slot(&self) -> &PresenterSlot {
        &self.slot
    }

    fn attach(&self, request: &DialogRequest) {
        assert_eq!(
            self.slot.current_dialog().as_ref(),
            Some(request),
            "slot is filled before attach"
        );
        self.log
            .borrow_mut()
            .push(Event::Attach(self.name, label(request)));
    }

    fn detach(&self, request: &DialogRequest) {
        assert!(self.slot.is_empty(), "slot is cleared before detach");
        self.log
            .borrow_mut()
            .push(Event::Detach(self.name, label(request)));
        let hook = self.on_detach.borrow_mut().take();
        if let Some(mut hook) = hook {
            hook(request);
        }
    }
}

/// A scheduler with recording presenters for both stock dialog types.
pub(crate) struct Harness {
    pub(crate) scheduler: ModalScheduler<ModalDialogType>,
    pub(crate) app: Rc<RecordingPresenter>,
    pub(crate) tab: Rc<RecordingPresenter>,
    pub(crate) log: Log,
}

impl Harness {
    pub(crate) fn new() -> Self {
        let log: Log = Rc::default();
        let app = Rc::new(RecordingPresenter::new("app", log.clone()));
        let tab = Rc::new(RecordingPresenter::new("tab", log.clone()));
        let scheduler = ModalScheduler::new(app.clone(), ModalDialogType::App);
        scheduler.register_presenter(tab.clone(), ModalDialogType::Tab);
        Self {
            scheduler,
            app,
            tab,
            log,
        }
    }

    pub(crate) fn request(&self, name: &str) -> DialogRequest {
        self.request_with(name, Hooks::default())
    }

    pub(crate) fn request_with(&self, name: &str, hooks: Hooks) -> DialogRequest {
        self.request_flags(name, DialogFlags::default(), hooks)
    }

    pub(crate) fn request_flags(&self, name: &str, flags: DialogFlags, hooks: Hooks) -> DialogRequest {
        DialogRequest::builder(Recording {
            log: self.log.clone(),
            hooks,
        })
        .title(name)
        .flags(flags)
        .build()
    }

    /// Take and clear the log.
    pub(crate) fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    /// Number of presenters with a request attached.
    pub(crate) fn attached_count(&self) -> usize {
        [&self.app, &self.tab]
            .iter()
            .filter(|p| p.current_dialog().is_some())
            .count()
    }
}

pub(crate) fn attach(presenter: &'static str, name: &str) -> Event {
    Event::Attach(presenter, name.into())
}

pub(crate) fn detach(presenter: &'static str, name: &str) -> Event {
    Event::Detach(presenter, name.into())
}

pub(crate) fn before_show(name: &str) -> Event {
    Event::BeforeShow(name.into())
}

pub(crate) fn cancel(name: &str) -> Event {
    Event::Cancel(name.into())
}

pub(crate) fn dismiss(name: &str, cause: DismissalCause) -> Event {
    Event::Dismiss(name.into(), cause)
}
