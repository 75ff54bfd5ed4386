// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component descriptors and the controller capability trait.

use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId, type_name};

use materia_dom::{Document, NodeId};

/// Result of asking a controller to tear itself down.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Teardown {
    /// The controller removed its listeners and everything it added to the tree.
    Done,
    /// The controller has no teardown hook; it stays attached.
    Unsupported,
}

/// A per-element controller created by an upgrade.
///
/// A controller exclusively owns every node it inserts into the document and is expected to
/// remove them in [`Controller::downgrade`]. Controllers without a teardown hook keep the default
/// implementation, which makes downgrade skip them.
pub trait Controller: Any {
    /// Tear the controller down.
    fn downgrade(&mut self, _doc: &mut Document) -> Teardown {
        Teardown::Unsupported
    }
}

pub(crate) type Factory = Box<dyn Fn(&mut Document, NodeId) -> Box<dyn Controller>>;

/// Callback invoked with every element a descriptor upgrades.
pub type UpgradedCallback = Box<dyn FnMut(&mut Document, NodeId)>;

#[derive(Copy, Clone, Debug)]
pub(crate) struct ControllerType {
    pub(crate) id: TypeId,
    pub(crate) name: &'static str,
}

/// Everything the registry needs to upgrade one kind of component.
///
/// ```
/// use materia_dom::{Document, NodeId};
/// use materia_registry::{ComponentDescriptor, Controller};
///
/// struct Button {
///     node: NodeId,
/// }
/// impl Controller for Button {}
///
/// let descriptor = ComponentDescriptor::new("MaterialButton", "mdl-js-button", |_doc: &mut Document, node| {
///     Button { node }
/// });
/// assert_eq!(descriptor.marker(), "MaterialButton");
/// assert!(descriptor.is_widget());
/// ```
pub struct ComponentDescriptor {
    pub(crate) marker: String,
    pub(crate) css_class: String,
    pub(crate) factory: Factory,
    pub(crate) controller: ControllerType,
    pub(crate) widget: bool,
}

impl core::fmt::Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ComponentDescriptor")
            .field("marker", &self.marker)
            .field("css_class", &self.css_class)
            .field("controller", &self.controller.name)
            .field("widget", &self.widget)
            .finish_non_exhaustive()
    }
}

impl ComponentDescriptor {
    /// Describe a component: its unique `marker` name, the `css_class` that selects candidate
    /// elements, and the factory that builds its controller.
    ///
    /// Descriptors are widgets by default.
    pub fn new<C, F>(marker: impl Into<String>, css_class: impl Into<String>, factory: F) -> Self
    where
        C: Controller,
        F: Fn(&mut Document, NodeId) -> C + 'static,
    {
        Self {
            marker: marker.into(),
            css_class: css_class.into(),
            factory: Box::new(move |doc: &mut Document, node: NodeId| -> Box<dyn Controller> {
                Box::new(factory(doc, node))
            }),
            controller: ControllerType {
                id: TypeId::of::<C>(),
                name: type_name::<C>(),
            },
            widget: true,
        }
    }

    /// Set whether upgraded instances are reachable as widget handles from their element.
    #[must_use]
    pub fn widget(mut self, widget: bool) -> Self {
        self.widget = widget;
        self
    }

    /// Marker name.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// CSS class selecting candidate elements.
    pub fn css_class(&self) -> &str {
        &self.css_class
    }

    /// Returns true if instances are exposed as widget handles.
    pub fn is_widget(&self) -> bool {
        self.widget
    }
}
