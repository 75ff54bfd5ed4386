// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=materia_registry --heading-base-level=0

//! Materia Registry: upgrade marked elements into component controllers, exactly once.
//!
//! ## Overview
//!
//! Components are described by a [`ComponentDescriptor`]: a unique marker name, the CSS class that
//! selects candidate elements, and a factory that builds a [`Controller`] for one element.
//! A [`Registry`] holds the descriptors and walks a [`materia_dom::Document`] to attach
//! controllers to the elements that carry their classes.
//!
//! Every applied marker is recorded on the element itself, in the attribute named by
//! [`RegistryConfig::upgraded_attribute`] (by default [`UPGRADED_ATTRIBUTE`]). Upgrading is
//! idempotent: a marker already listed there is never applied again, whether it was recorded by
//! this registry, another one, or the markup itself.
//!
//! ## Lifecycle
//!
//! - [`Registry::register`] validates and stores a descriptor.
//!   Duplicate markers, duplicate CSS classes, and controller types bound twice are rejected.
//! - [`Registry::upgrade_element`] (and the bulk forms [`Registry::upgrade_dom`],
//!   [`Registry::upgrade_elements`], [`Registry::upgrade_all_registered`]) fires a cancelable
//!   [`ComponentEvent::Upgrading`], records the marker, constructs the controller, runs
//!   upgraded callbacks, and fires [`ComponentEvent::Upgraded`].
//! - [`Registry::downgrade_elements`] runs each controller's teardown, forgets the instance,
//!   removes its marker from the element, and fires [`ComponentEvent::Downgraded`].
//!   Controllers without a teardown hook stay attached.
//!
//! Lifecycle events propagate through the document with [`materia_events`]; attach listeners
//! with [`Registry::listeners_mut`].
//!
//! ## Example
//!
//! ```
//! use materia_dom::{Document, Element, NodeId};
//! use materia_registry::{ComponentDescriptor, Controller, Registry, Teardown};
//!
//! struct Toggle {
//!     knob: NodeId,
//! }
//!
//! impl Controller for Toggle {
//!     fn downgrade(&mut self, doc: &mut Document) -> Teardown {
//!         doc.remove(self.knob);
//!         Teardown::Done
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! registry
//!     .register(ComponentDescriptor::new("MaterialToggle", "mdl-js-toggle", |doc: &mut Document, node| {
//!         let knob = doc.insert(Some(node), Element::new("span").with_class("mdl-toggle__knob"));
//!         Toggle { knob }
//!     }))
//!     .unwrap();
//!
//! let mut doc = Document::new();
//! let el = doc.insert(None, Element::new("label").with_class("mdl-js-toggle"));
//!
//! assert_eq!(registry.upgrade_all_registered(&mut doc).unwrap(), 1);
//! assert_eq!(doc.attribute(el, "data-upgraded"), Some("MaterialToggle"));
//! // Running it again finds nothing new.
//! assert_eq!(registry.upgrade_all_registered(&mut doc).unwrap(), 0);
//! assert!(registry.widget::<Toggle>(el).is_some());
//!
//! assert_eq!(registry.downgrade_elements(&mut doc, &[el]), 1);
//! assert_eq!(doc.attribute(el, "data-upgraded"), None);
//! assert!(doc.children(el).is_empty());
//! ```
//!
//! ## Logging
//!
//! Registration and prevented upgrades are reported with `tracing` at `debug`; per-instance
//! creation and teardown at `trace`. No subscriber is installed by this crate.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod descriptor;
mod downgrade;
mod error;
mod instance;
mod registry;
mod upgrade;
mod upgraded;

pub use config::{ComponentEvent, RegistryConfig, UPGRADED_ATTRIBUTE};
pub use descriptor::{ComponentDescriptor, Controller, Teardown, UpgradedCallback};
pub use error::RegistryError;
pub use instance::{Instance, InstanceId};
pub use registry::Registry;
pub use upgraded::UpgradedList;
