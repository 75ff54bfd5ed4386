// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Materia DOM: a small, generational element tree.
//!
//! Materia DOM is the document model the component registry upgrades.
//!
//! - Represents a forest of elements, each with a tag, an ordered class list, attributes, and layout bounds.
//! - Hands out generational [`NodeId`]s; stale ids never alias a live node.
//! - Provides class queries in document order, which is what selector-driven upgrades need.
//!
//! ## Not a browser DOM
//!
//! There is no parsing, styling, or layout here.
//! The host computes element bounds with whatever layout system it uses and writes them with
//! [`Document::set_bounds`]; components read them back (for example to size a ripple).
//! Selectors are single CSS classes.
//!
//! ## API overview
//!
//! - [`Document`]: container owning every node.
//! - [`Element`]: per-node data (tag, classes, attributes, bounds).
//! - [`NodeId`]: generational handle of a node.
//!
//! Key operations:
//! - [`Document::insert`] / [`Document::insert_before`] → [`NodeId`]
//! - [`Document::remove`] removes a whole subtree.
//! - [`Document::query_class`] and [`Document::descendants`] walk in document order.
//!
//! ## Example
//!
//! ```
//! use materia_dom::{Document, Element};
//! use kurbo::Rect;
//!
//! let mut doc = Document::new();
//! let form = doc.insert(None, Element::new("form"));
//! let label = doc.insert(
//!     Some(form),
//!     Element::new("label")
//!         .with_class("mdl-checkbox")
//!         .with_class("mdl-js-checkbox")
//!         .with_bounds(Rect::new(0.0, 0.0, 24.0, 24.0)),
//! );
//! let _input = doc.insert(
//!     Some(label),
//!     Element::new("input").with_class("mdl-checkbox__input").with_attribute("type", "checkbox"),
//! );
//!
//! assert_eq!(doc.query_class("mdl-js-checkbox"), vec![label]);
//!
//! doc.remove(label);
//! assert!(!doc.is_alive(label));
//! assert!(doc.query_class("mdl-js-checkbox").is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod document;
mod types;

pub use document::{Descendants, Document};
pub use types::{Element, NodeId};
