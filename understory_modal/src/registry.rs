// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pending queues and the suspension set.
//!
//! Both are keyed by dialog type and iterate in priority order (ascending `Ord`).

use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::vec::Vec;

use crate::request::DialogRequest;

/// One FIFO of waiting requests per dialog type.
#[derive(Debug)]
pub(crate) struct PendingQueues<T> {
    queues: BTreeMap<T, VecDeque<DialogRequest>>,
}

impl<T> Default for PendingQueues<T> {
    fn default() -> Self {
        Self {
            queues: BTreeMap::new(),
        }
    }
}

impl<T: Copy + Ord> PendingQueues<T> {
    /// Enqueue at the tail, or at the head to cut ahead of same-type siblings.
    pub(crate) fn push(&mut self, ty: T, request: DialogRequest, at_head: bool) {
        let queue = self.queues.entry(ty).or_default();
        if at_head {
            queue.push_front(request);
        } else {
            queue.push_back(request);
        }
    }

    /// Remove `request` from whichever queue holds it, returning that queue's type.
    pub(crate) fn remove(&mut self, request: &DialogRequest) -> Option<T> {
        for (ty, queue) in &mut self.queues {
            if let Some(pos) = queue.iter().position(|r| r == request) {
                queue.remove(pos);
                return Some(*ty);
            }
        }
        None
    }

    pub(crate) fn contains(&self, request: &DialogRequest) -> bool {
        self.queues.values().any(|queue| queue.contains(request))
    }

    /// Pop the head of the highest-priority queue that is non-empty and not suspended.
    pub(crate) fn pop_next(&mut self, suspended: &Suspensions<T>) -> Option<(T, DialogRequest)> {
        self.queues
            .iter_mut()
            .filter(|(ty, _)| !suspended.contains(**ty))
            .find_map(|(ty, queue)| queue.pop_front().map(|r| (*ty, r)))
    }

    /// Take every request queued under `ty`, in queue order.
    pub(crate) fn drain(&mut self, ty: T) -> Vec<DialogRequest> {
        self.queues
            .get_mut(&ty)
            .map(|queue| queue.drain(..).collect())
            .unwrap_or_default()
    }

    /// Take every queued request, highest priority type first.
    pub(crate) fn drain_all(&mut self) -> Vec<(T, DialogRequest)> {
        let mut out = Vec::with_capacity(self.len());
        for (ty, queue) in &mut self.queues {
            out.extend(queue.drain(..).map(|r| (*ty, r)));
        }
        out
    }

    /// Snapshot of the queue for `ty`.
    pub(crate) fn snapshot(&self, ty: T) -> Vec<DialogRequest> {
        self.queues
            .get(&ty)
            .map(|queue| queue.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub(crate) fn len(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.queues.values().all(VecDeque::is_empty)
    }
}

/// Dialog types currently barred from showing.
#[derive(Debug)]
pub(crate) struct Suspensions<T> {
    types: BTreeSet<T>,
}

impl<T> Default for Suspensions<T> {
    fn default() -> Self {
        Self {
            types: BTreeSet::new(),
        }
    }
}

impl<T: Copy + Ord> Suspensions<T> {
    /// Returns `true` if `ty` was not suspended before.
    pub(crate) fn suspend(&mut self, ty: T) -> bool {
        self.types.insert(ty)
    }

    /// Returns `true` if `ty` was suspended before.
    pub(crate) fn resume(&mut self, ty: T) -> bool {
        self.types.remove(&ty)
    }

    pub(crate) fn contains(&self, ty: T) -> bool {
        self.types.contains(&ty)
    }

    pub(crate) fn clear(&mut self) {
        self.types.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Controller;
    use crate::types::{ButtonKind, DismissalCause, ModalDialogType};
    use alloc::vec;

    struct Noop;
    impl Controller for Noop {
        fn on_click(&mut self, _request: &DialogRequest, _button: ButtonKind) {}
        fn on_cancel(&mut self, _request: &DialogRequest) {}
        fn on_dismiss(&mut self, _request: &DialogRequest, _cause: DismissalCause) {}
    }

    fn req() -> DialogRequest {
        DialogRequest::new(Noop)
    }

    #[test]
    fn fifo_with_head_insert() {
        let mut q = PendingQueues::default();
        let (a, b, c) = (req(), req(), req());
        q.push(ModalDialogType::Tab, a.clone(), false);
        q.push(ModalDialogType::Tab, b.clone(), false);
        q.push(ModalDialogType::Tab, c.clone(), true);
        assert_eq!(q.snapshot(ModalDialogType::Tab), vec![c, a, b]);
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn remove_by_identity() {
        let mut q = PendingQueues::default();
        let (a, b) = (req(), req());
        q.push(ModalDialogType::App, a.clone(), false);
        q.push(ModalDialogType::Tab, b.clone(), false);
        assert_eq!(q.remove(&b), Some(ModalDialogType::Tab));
        assert_eq!(q.remove(&b), None);
        assert_eq!(q.snapshot(ModalDialogType::App), vec![a]);
    }

    #[test]
    fn pop_next_prefers_priority_and_skips_suspended() {
        let mut q = PendingQueues::default();
        let mut s = Suspensions::default();
        let (app, tab) = (req(), req());
        q.push(ModalDialogType::Tab, tab.clone(), false);
        q.push(ModalDialogType::App, app.clone(), false);

        assert!(s.suspend(ModalDialogType::App));
        assert!(!s.suspend(ModalDialogType::App));
        assert_eq!(q.pop_next(&s), Some((ModalDialogType::Tab, tab)));
        assert_eq!(q.pop_next(&s), None);

        assert!(s.resume(ModalDialogType::App));
        assert_eq!(q.pop_next(&s), Some((ModalDialogType::App, app)));
        assert!(q.is_empty());
    }

    #[test]
    fn drain_all_in_priority_order() {
        let mut q = PendingQueues::default();
        let (a, b, c) = (req(), req(), req());
        q.push(ModalDialogType::Tab, b.clone(), false);
        q.push(ModalDialogType::Tab, c.clone(), false);
        q.push(ModalDialogType::App, a.clone(), false);
        assert_eq!(
            q.drain_all(),
            vec![
                (ModalDialogType::App, a),
                (ModalDialogType::Tab, b),
                (ModalDialogType::Tab, c),
            ]
        );
        assert!(q.drain(ModalDialogType::Tab).is_empty());
    }
}
