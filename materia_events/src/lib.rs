// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=materia_events --heading-base-level=0

//! Materia Events: deterministic, `no_std` event propagation for element trees.
//!
//! ## Overview
//!
//! This crate builds the propagation sequence (capture → target → bubble) for an event fired on
//! a node, and runs registered listeners over it.
//! It does not own a tree; a [`ParentLookup`](crate::types::ParentLookup) supplies parent links
//! (the `dom_adapter` feature implements it for [`materia_dom::Document`]).
//!
//! ## Events
//!
//! An [`Event`](crate::types::Event) is a kind plus [`EventFlags`](crate::types::EventFlags).
//! Non-bubbling events end at the target. Cancelable events can have their default action
//! prevented by a handler returning [`Outcome::StopAndConsume`](crate::types::Outcome::StopAndConsume).
//!
//! ## Workflow
//!
//! 1) Route: [`Router::route`](crate::router::Router::route) reconstructs the root→target path
//!    and emits one [`Dispatch`](crate::types::Dispatch) step per visited node.
//! 2) Dispatch: [`Listeners::dispatch`](crate::listeners::Listeners::dispatch) invokes matching
//!    handlers in sequence order and honors stop/consume outcomes.
//! 3) Act: the caller inspects [`DispatchResult::default_prevented`](crate::listeners::DispatchResult::default_prevented)
//!    and skips the default action when it is set.
//!
//! ## Example
//!
//! ```
//! use materia_events::listeners::{ListenPhase, Listeners};
//! use materia_events::router::Router;
//! use materia_events::types::{Event, EventFlags, Outcome, ParentLookup};
//!
//! struct Parents;
//! impl ParentLookup<u32> for Parents {
//!     fn parent_of(&self, node: &u32) -> Option<u32> {
//!         (*node > 1).then(|| node - 1)
//!     }
//! }
//!
//! let mut listeners: Listeners<u32, &str> = Listeners::new();
//! listeners.add(1, "upgraded", ListenPhase::Bubble, Box::new(|d, _| {
//!     assert_eq!(d.target, 3);
//!     Outcome::Continue
//! }));
//!
//! let router = Router::with_parent(Parents);
//! let result = listeners.fire(&router, 3, &Event::new("upgraded", EventFlags::BUBBLES));
//! assert_eq!(result.delivered, 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod listeners;
pub mod router;
pub mod types;
