// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for event propagation: phases, outcomes, flags, lookups, and dispatch.
//!
//! ## Overview
//!
//! These types describe the propagation protocol and its inputs/outputs.
//! They are referenced by the [`router`](crate::router) and the [`listeners`](crate::listeners) table.

/// Phases of event propagation.
///
/// Appears on each [`Dispatch`] item produced by
/// [`Router::route`](crate::router::Router::route).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Root-to-parent traversal over the target's ancestors.
    Capture,
    /// Target node.
    Target,
    /// Parent-to-root traversal over the target's ancestors.
    Bubble,
}

/// Handler outcome controlling propagation.
///
/// Returned by every listener invoked through
/// [`Listeners::dispatch`](crate::listeners::Listeners::dispatch).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Continue propagation.
    Continue,
    /// Finish the listeners of the current node, then stop propagation.
    Stop,
    /// Stop immediately and consume the event (prevents the default action of cancelable events).
    StopAndConsume,
}

bitflags::bitflags! {
    /// Propagation flags carried by an [`Event`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EventFlags: u8 {
        /// The event runs a bubble phase after the target.
        const BUBBLES    = 0b0000_0001;
        /// Consuming the event prevents its default action.
        const CANCELABLE = 0b0000_0010;
    }
}

impl Default for EventFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// An event of kind `T` with its propagation flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event<T> {
    /// Event kind; listeners match on it.
    pub kind: T,
    /// Propagation flags.
    pub flags: EventFlags,
}

impl<T> Event<T> {
    /// Create an event with explicit flags.
    pub const fn new(kind: T, flags: EventFlags) -> Self {
        Self { kind, flags }
    }

    /// Returns true if the event has a bubble phase.
    pub fn bubbles(&self) -> bool {
        self.flags.contains(EventFlags::BUBBLES)
    }

    /// Returns true if consuming the event prevents its default action.
    pub fn cancelable(&self) -> bool {
        self.flags.contains(EventFlags::CANCELABLE)
    }
}

/// Look up the parent of a node to reconstruct a root→target path for propagation.
///
/// The [router](crate::router::Router) consults this for every routed target.
pub trait ParentLookup<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

impl<K, P: ParentLookup<K> + ?Sized> ParentLookup<K> for &P {
    #[inline]
    fn parent_of(&self, node: &K) -> Option<K> {
        (**self).parent_of(node)
    }
}

/// A no‑op parent provider; every node is treated as a root.
///
/// Used by [`Router::new`](crate::router::Router::new). All calls to
/// [`ParentLookup::parent_of`] return `None`.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoParent;

impl<K> ParentLookup<K> for NoParent {
    #[inline]
    fn parent_of(&self, _node: &K) -> Option<K> {
        None
    }
}

/// A single dispatch item.
///
/// Produced by [`Router::route`](crate::router::Router::route), and fed
/// into [`Listeners::dispatch`](crate::listeners::Listeners::dispatch), which invokes handlers in
/// [`Capture`](Phase::Capture), then [`Target`](Phase::Target), then [`Bubble`](Phase::Bubble) order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispatch<K> {
    /// Propagation phase for this step (capture, target, or bubble).
    pub phase: Phase,
    /// Node associated with this dispatch step.
    pub node: K,
    /// The node the event was fired on.
    pub target: K,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_flag_queries() {
        let e = Event::new("x", EventFlags::BUBBLES | EventFlags::CANCELABLE);
        assert!(e.bubbles());
        assert!(e.cancelable());
        let e = Event::new("y", EventFlags::empty());
        assert!(!e.bubbles());
        assert!(!e.cancelable());
        assert_eq!(EventFlags::default(), EventFlags::empty());
    }

    #[test]
    fn parent_lookup_through_reference() {
        struct Parents;
        impl ParentLookup<u32> for Parents {
            fn parent_of(&self, node: &u32) -> Option<u32> {
                (*node > 1).then(|| node - 1)
            }
        }
        let p = &Parents;
        assert_eq!(ParentLookup::parent_of(&p, &3_u32), Some(2));
        assert_eq!(NoParent.parent_of(&3_u32), None);
    }
}
