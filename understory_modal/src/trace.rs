// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scheduler event logging.
//!
//! With the `tracing` feature the macros forward to `tracing` under the
//! `understory_modal` target; without it they compile to nothing and their
//! arguments are not evaluated.

/// Log a scheduler transition (shown, queued, preempted, dismissed, ...).
macro_rules! modal_debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "understory_modal", $($arg)+);
    };
}

/// Log a low-level step such as a show-next scan.
macro_rules! modal_trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "understory_modal", $($arg)+);
    };
}

pub(crate) use modal_debug;
pub(crate) use modal_trace;
