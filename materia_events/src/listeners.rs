// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener table: attach handlers to nodes and run them over a dispatch sequence.
//!
//! ## Usage
//!
//! 1) Register handlers with [`Listeners::add`], choosing whether they listen during capture
//!    or bubble via [`ListenPhase`]. Both kinds run when their node is the target.
//! 2) Build a sequence with [`Router::route`](crate::router::Router::route) and pass it to
//!    [`Listeners::dispatch`], or use [`Listeners::fire`] to do both.
//! 3) Inspect the [`DispatchResult`]; `default_prevented` tells the caller to skip the event's
//!    default action.
//!
//! ## Minimal example
//!
//! ```
//! use materia_events::listeners::{ListenPhase, Listeners};
//! use materia_events::router::Router;
//! use materia_events::types::{Event, EventFlags, Outcome};
//!
//! let mut listeners: Listeners<u32, &str> = Listeners::new();
//! listeners.add(7, "upgrading", ListenPhase::Bubble, Box::new(|_, _| Outcome::StopAndConsume));
//!
//! let router: Router<u32> = Router::new();
//! let event = Event::new("upgrading", EventFlags::BUBBLES | EventFlags::CANCELABLE);
//! let result = listeners.fire(&router, 7, &event);
//! assert!(result.default_prevented);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::router::Router;
use crate::types::{Dispatch, Event, Outcome, ParentLookup, Phase};

/// Handler invoked for every matching dispatch step.
pub type Handler<K, T> = Box<dyn FnMut(&Dispatch<K>, &Event<T>) -> Outcome>;

/// Identifier of a registered listener, used for removal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ListenerId(u64);

/// Which non-target phase a listener observes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ListenPhase {
    /// Runs while the event travels down through ancestors.
    Capture,
    /// Runs while the event travels back up through ancestors.
    #[default]
    Bubble,
}

impl ListenPhase {
    fn accepts(self, phase: Phase) -> bool {
        matches!(
            (self, phase),
            (_, Phase::Target) | (Self::Capture, Phase::Capture) | (Self::Bubble, Phase::Bubble)
        )
    }
}

/// Summary of one dispatch.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct DispatchResult {
    /// A handler consumed a cancelable event.
    pub default_prevented: bool,
    /// A handler returned [`Outcome::StopAndConsume`].
    pub consumed: bool,
    /// Number of handler invocations.
    pub delivered: usize,
}

struct Entry<K, T> {
    id: ListenerId,
    node: K,
    kind: T,
    phase: ListenPhase,
    handler: Handler<K, T>,
}

/// Handlers keyed by node and event kind.
pub struct Listeners<K, T> {
    entries: Vec<Entry<K, T>>,
    next_id: u64,
}

impl<K, T> core::fmt::Debug for Listeners<K, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl<K, T> Default for Listeners<K, T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<K: Copy + Eq, T: PartialEq> Listeners<K, T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `handler` to `node` for events of `kind`.
    pub fn add(&mut self, node: K, kind: T, phase: ListenPhase, handler: Handler<K, T>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            node,
            kind,
            phase,
            handler,
        });
        id
    }

    /// Detach a listener; returns false if it was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        before != self.entries.len()
    }

    /// Detach every listener of `node`, returning how many were removed.
    pub fn remove_node(&mut self, node: K) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.node != node);
        before - self.entries.len()
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run listeners over a dispatch sequence.
    ///
    /// Listeners of one node run in registration order. [`Outcome::Stop`] lets the remaining
    /// listeners of the current step run, then ends propagation; [`Outcome::StopAndConsume`]
    /// ends it at once.
    pub fn dispatch(&mut self, seq: &[Dispatch<K>], event: &Event<T>) -> DispatchResult {
        let mut result = DispatchResult::default();
        for d in seq {
            let mut stop = false;
            for entry in self
                .entries
                .iter_mut()
                .filter(|e| e.node == d.node && e.kind == event.kind && e.phase.accepts(d.phase))
            {
                result.delivered += 1;
                match (entry.handler)(d, event) {
                    Outcome::Continue => {}
                    Outcome::Stop => stop = true,
                    Outcome::StopAndConsume => {
                        result.consumed = true;
                        result.default_prevented = event.cancelable();
                        return result;
                    }
                }
            }
            if stop {
                break;
            }
        }
        result
    }

    /// Route `event` to `target` with `router`, then [`dispatch`](Self::dispatch) it.
    pub fn fire<P: ParentLookup<K>>(
        &mut self,
        router: &Router<K, P>,
        target: K,
        event: &Event<T>,
    ) -> DispatchResult {
        let seq = router.route(target, event.flags);
        self.dispatch(&seq, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventFlags;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    struct Parents;
    impl ParentLookup<u32> for Parents {
        fn parent_of(&self, node: &u32) -> Option<u32> {
            match node {
                3 => Some(2),
                2 => Some(1),
                _ => None,
            }
        }
    }

    type Log = Rc<RefCell<Vec<(Phase, u32, &'static str)>>>;

    fn recorder(log: &Log, tag: &'static str, outcome: Outcome) -> Handler<u32, &'static str> {
        let log = log.clone();
        Box::new(move |d, _| {
            log.borrow_mut().push((d.phase, d.node, tag));
            outcome
        })
    }

    const BUBBLING: EventFlags = EventFlags::BUBBLES.union(EventFlags::CANCELABLE);

    #[test]
    fn capture_and_bubble_listeners_run_in_order() {
        let log: Log = Rc::default();
        let mut l = Listeners::new();
        l.add(1, "e", ListenPhase::Bubble, recorder(&log, "1b", Outcome::Continue));
        l.add(1, "e", ListenPhase::Capture, recorder(&log, "1c", Outcome::Continue));
        l.add(3, "e", ListenPhase::Capture, recorder(&log, "3c", Outcome::Continue));
        l.add(3, "e", ListenPhase::Bubble, recorder(&log, "3b", Outcome::Continue));
        l.add(2, "other", ListenPhase::Bubble, recorder(&log, "x", Outcome::Continue));

        let router = Router::with_parent(Parents);
        let result = l.fire(&router, 3, &Event::new("e", BUBBLING));
        assert_eq!(
            *log.borrow(),
            vec![
                (Phase::Capture, 1, "1c"),
                (Phase::Target, 3, "3c"),
                (Phase::Target, 3, "3b"),
                (Phase::Bubble, 1, "1b"),
            ]
        );
        assert_eq!(result.delivered, 4);
        assert!(!result.default_prevented);
    }

    #[test]
    fn stop_finishes_current_node_then_halts() {
        let log: Log = Rc::default();
        let mut l = Listeners::new();
        l.add(3, "e", ListenPhase::Bubble, recorder(&log, "a", Outcome::Stop));
        l.add(3, "e", ListenPhase::Bubble, recorder(&log, "b", Outcome::Continue));
        l.add(2, "e", ListenPhase::Bubble, recorder(&log, "parent", Outcome::Continue));

        let router = Router::with_parent(Parents);
        let result = l.fire(&router, 3, &Event::new("e", BUBBLING));
        let tags: Vec<_> = log.borrow().iter().map(|e| e.2).collect();
        assert_eq!(tags, vec!["a", "b"]);
        assert!(!result.consumed);
    }

    #[test]
    fn consume_prevents_default_only_when_cancelable() {
        let log: Log = Rc::default();
        let mut l = Listeners::new();
        l.add(2, "e", ListenPhase::Bubble, recorder(&log, "p", Outcome::StopAndConsume));
        l.add(1, "e", ListenPhase::Bubble, recorder(&log, "root", Outcome::Continue));
        let router = Router::with_parent(Parents);

        let result = l.fire(&router, 3, &Event::new("e", BUBBLING));
        assert!(result.consumed);
        assert!(result.default_prevented);

        let result = l.fire(&router, 3, &Event::new("e", EventFlags::BUBBLES));
        assert!(result.consumed);
        assert!(!result.default_prevented);
        assert!(log.borrow().iter().all(|e| e.2 == "p"));
    }

    #[test]
    fn non_bubbling_event_skips_bubble_listeners_on_ancestors() {
        let log: Log = Rc::default();
        let mut l = Listeners::new();
        l.add(1, "e", ListenPhase::Bubble, recorder(&log, "root", Outcome::Continue));
        let router = Router::with_parent(Parents);
        let result = l.fire(&router, 3, &Event::new("e", EventFlags::CANCELABLE));
        assert_eq!(result.delivered, 0);
    }

    #[test]
    fn remove_detaches_listeners() {
        let log: Log = Rc::default();
        let mut l = Listeners::new();
        let a = l.add(3, "e", ListenPhase::Bubble, recorder(&log, "a", Outcome::Continue));
        l.add(3, "e", ListenPhase::Capture, recorder(&log, "b", Outcome::Continue));
        l.add(2, "e", ListenPhase::Capture, recorder(&log, "c", Outcome::Continue));
        assert!(l.remove(a));
        assert!(!l.remove(a));
        assert_eq!(l.remove_node(3), 1);
        assert_eq!(l.len(), 1);

        let router = Router::with_parent(Parents);
        let _ = l.fire(&router, 3, &Event::new("e", BUBBLING));
        let tags: Vec<_> = log.borrow().iter().map(|e| e.2).collect();
        assert_eq!(tags, vec!["c"]);
    }
}
