// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Router implementation.
//!
//! ## Overview
//!
//! Reconstructs the root→target path of an event target and emits dispatch steps.
//! Produces a capture → target → bubble sequence for that path.
//!
//! ## Sequence shape
//!
//! - Capture visits the target's ancestors from the root down to the parent.
//! - Target visits the target once.
//! - Bubble visits the ancestors from the parent up to the root, and only for bubbling events.
//!
//! ## See Also
//!
//! [`listeners`](crate::listeners) for running handlers over the sequence.

use alloc::vec::Vec;

use crate::types::{Dispatch, EventFlags, NoParent, ParentLookup, Phase};

/// Deterministic propagation path builder.
///
/// ## Usage
///
/// - Construct with [`Router::new`] when every node is a root (flat targets), or with
///   [`Router::with_parent`] to enable path reconstruction via a [`ParentLookup`].
/// - Call [`Router::route`] per event to produce the dispatch sequence.
pub struct Router<K, P: ParentLookup<K> = NoParent> {
    pub(crate) parent: P,
    pub(crate) _phantom: core::marker::PhantomData<fn() -> K>,
}

impl<K, P: ParentLookup<K>> core::fmt::Debug for Router<K, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Router").finish_non_exhaustive()
    }
}

impl<K: Copy + Eq, P: ParentLookup<K> + Default> Router<K, P> {
    /// Create a router with a default parent lookup.
    pub fn new() -> Self {
        Self {
            parent: P::default(),
            _phantom: core::marker::PhantomData,
        }
    }
}

impl<K: Copy + Eq, P: ParentLookup<K> + Default> Default for Router<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq, P: ParentLookup<K>> Router<K, P> {
    /// Create a router with an explicit parent lookup provider.
    pub fn with_parent(parent: P) -> Self {
        Self {
            parent,
            _phantom: core::marker::PhantomData,
        }
    }

    /// Root→target path of `target`, inclusive on both ends.
    pub fn path(&self, target: K) -> Vec<K> {
        let mut out = Vec::new();
        let mut cur = target;
        // Collect to root; caller ensures acyclic ancestry.
        loop {
            out.push(cur);
            match self.parent.parent_of(&cur) {
                Some(p) => cur = p,
                None => break,
            }
        }
        out.reverse();
        out
    }

    /// Produce the propagation sequence for an event fired on `target`.
    pub fn route(&self, target: K, flags: EventFlags) -> Vec<Dispatch<K>> {
        let path = self.path(target);
        let ancestors = &path[..path.len() - 1];
        let mut out = Vec::with_capacity(path.len() * 2);
        // Capture: root→parent
        for &n in ancestors {
            out.push(Self::make_dispatch(Phase::Capture, n, target));
        }
        out.push(Self::make_dispatch(Phase::Target, target, target));
        // Bubble: parent→root
        if flags.contains(EventFlags::BUBBLES) {
            for &n in ancestors.iter().rev() {
                out.push(Self::make_dispatch(Phase::Bubble, n, target));
            }
        }
        out
    }

    fn make_dispatch(phase: Phase, node: K, target: K) -> Dispatch<K> {
        Dispatch {
            phase,
            node,
            target,
        }
    }
}
