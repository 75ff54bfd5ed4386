// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The registry value: descriptor table, instance list, and widget side table.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use materia_dom::{Document, NodeId};
use materia_events::adapters::dom::router_for;
use materia_events::listeners::{DispatchResult, Listeners};
use materia_events::types::Event;
use tracing::debug;

use crate::config::{ComponentEvent, RegistryConfig};
use crate::descriptor::{ComponentDescriptor, Controller, ControllerType, Factory, UpgradedCallback};
use crate::error::RegistryError;
use crate::instance::{Instance, InstanceId};
use crate::upgraded::UpgradedList;

pub(crate) struct Binding {
    pub(crate) css_class: String,
    pub(crate) factory: Factory,
    pub(crate) controller: ControllerType,
    pub(crate) widget: bool,
}

/// A marker slot: either a registered descriptor or a reservation placeholder.
pub(crate) struct Entry {
    pub(crate) marker: String,
    pub(crate) callbacks: Vec<UpgradedCallback>,
    pub(crate) binding: Option<Binding>,
}

/// Component registry, upgrader, and instance tracker.
///
/// ## Usage
///
/// - Construct with [`Registry::new`] or [`Registry::with_config`].
/// - Register descriptors with [`Registry::register`]; optionally hook
///   [`Registry::register_upgraded_callback`] and lifecycle listeners via
///   [`Registry::listeners_mut`].
/// - Upgrade with [`Registry::upgrade_all_registered`], [`Registry::upgrade_dom`],
///   [`Registry::upgrade_elements`], or [`Registry::upgrade_element`].
/// - Tear down with [`Registry::downgrade_elements`].
pub struct Registry {
    pub(crate) config: RegistryConfig,
    pub(crate) entries: Vec<Entry>,
    pub(crate) instances: Vec<Instance>,
    pub(crate) widgets: BTreeMap<NodeId, Vec<InstanceId>>,
    pub(crate) listeners: Listeners<NodeId, ComponentEvent>,
    pub(crate) next_instance: u64,
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let registered = self.entries.iter().filter(|e| e.binding.is_some()).count();
        f.debug_struct("Registry")
            .field("config", &self.config)
            .field("registered", &registered)
            .field("reserved", &(self.entries.len() - registered))
            .field("instances", &self.instances.len())
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with an explicit configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
            instances: Vec::new(),
            widgets: BTreeMap::new(),
            listeners: Listeners::new(),
            next_instance: 0,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register a component.
    ///
    /// Fails if the CSS class or marker name is already registered, or if the controller type is
    /// already bound to another descriptor. A reservation for the same marker is replaced and
    /// keeps its callbacks.
    pub fn register(&mut self, descriptor: ComponentDescriptor) -> Result<(), RegistryError> {
        let bound = || {
            self.entries
                .iter()
                .filter_map(|e| e.binding.as_ref().map(|b| (e, b)))
        };
        if let Some((owner, _)) = bound().find(|(_, b)| b.css_class == descriptor.css_class) {
            return Err(RegistryError::DuplicateCssClass {
                css_class: descriptor.css_class,
                owner: owner.marker.clone(),
            });
        }
        if bound().any(|(e, _)| e.marker == descriptor.marker) {
            return Err(RegistryError::DuplicateMarker {
                marker: descriptor.marker,
            });
        }
        if let Some((owner, _)) = bound().find(|(_, b)| b.controller.id == descriptor.controller.id) {
            return Err(RegistryError::ControllerAlreadyRegistered {
                type_name: descriptor.controller.name,
                owner: owner.marker.clone(),
            });
        }

        debug!(
            marker = %descriptor.marker,
            css_class = %descriptor.css_class,
            controller = descriptor.controller.name,
            widget = descriptor.widget,
            "registered component"
        );
        let binding = Binding {
            css_class: descriptor.css_class,
            factory: descriptor.factory,
            controller: descriptor.controller,
            widget: descriptor.widget,
        };
        match self.entries.iter_mut().find(|e| e.marker == descriptor.marker) {
            Some(reserved) => reserved.binding = Some(binding),
            None => self.entries.push(Entry {
                marker: descriptor.marker,
                callbacks: Vec::new(),
                binding: Some(binding),
            }),
        }
        Ok(())
    }

    /// Reserve a marker name ahead of its registration.
    ///
    /// Callbacks can be attached to a reservation; upgrades against it fail with
    /// [`RegistryError::Unregistered`] until [`register`](Self::register) fills it.
    /// Returns false if the marker is already reserved or registered.
    pub fn reserve(&mut self, marker: impl Into<String>) -> bool {
        let marker = marker.into();
        if self.entry_index(&marker).is_some() {
            return false;
        }
        debug!(marker = %marker, "reserved component marker");
        self.entries.push(Entry {
            marker,
            callbacks: Vec::new(),
            binding: None,
        });
        true
    }

    /// Invoke `callback` with every element upgraded for `marker` from now on.
    ///
    /// Works for registered and reserved markers; unknown markers are an error.
    pub fn register_upgraded_callback(
        &mut self,
        marker: &str,
        callback: UpgradedCallback,
    ) -> Result<(), RegistryError> {
        let idx = self
            .entry_index(marker)
            .ok_or_else(|| RegistryError::Unregistered {
                marker: String::from(marker),
            })?;
        self.entries[idx].callbacks.push(callback);
        Ok(())
    }

    /// Returns true if a descriptor (not just a reservation) exists for `marker`.
    pub fn is_registered(&self, marker: &str) -> bool {
        self.bound_index(marker).is_ok()
    }

    /// Registered marker names in registration order.
    pub fn registered_markers(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(|e| e.binding.is_some())
            .map(|e| e.marker.as_str())
    }

    /// CSS class of a registered marker.
    pub fn css_class_of(&self, marker: &str) -> Option<&str> {
        let idx = self.bound_index(marker).ok()?;
        self.entries[idx]
            .binding
            .as_ref()
            .map(|b| b.css_class.as_str())
    }

    /// Registered markers whose CSS class `node` carries, in registration order.
    pub fn markers_matching(&self, doc: &Document, node: NodeId) -> Vec<&str> {
        self.matching_indices(doc, node)
            .map(|i| self.entries[i].marker.as_str())
            .collect()
    }

    /// Lifecycle event listeners.
    pub fn listeners(&self) -> &Listeners<NodeId, ComponentEvent> {
        &self.listeners
    }

    /// Mutable lifecycle event listeners.
    pub fn listeners_mut(&mut self) -> &mut Listeners<NodeId, ComponentEvent> {
        &mut self.listeners
    }

    /// All tracked instances in creation order.
    pub fn instances(&self) -> impl Iterator<Item = &Instance> + '_ {
        self.instances.iter()
    }

    /// Number of tracked instances.
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Ids of the instances attached to `node`, in creation order.
    pub fn instances_of(&self, node: NodeId) -> Vec<InstanceId> {
        self.instances
            .iter()
            .filter(|i| i.node == node)
            .map(|i| i.id)
            .collect()
    }

    /// Look up an instance by id.
    pub fn instance(&self, id: InstanceId) -> Option<&Instance> {
        self.instances.iter().find(|i| i.id == id)
    }

    /// Look up an instance mutably by id.
    pub fn instance_mut(&mut self, id: InstanceId) -> Option<&mut Instance> {
        self.instances.iter_mut().find(|i| i.id == id)
    }

    /// The widget handle of type `C` exposed on `node`.
    ///
    /// Only instances of widget descriptors are reachable this way.
    pub fn widget<C: Controller>(&self, node: NodeId) -> Option<&C> {
        let ids = self.widgets.get(&node)?;
        ids.iter()
            .filter_map(|id| self.instance(*id))
            .find_map(|i| i.downcast_ref::<C>())
    }

    /// The mutable widget handle of type `C` exposed on `node`.
    pub fn widget_mut<C: Controller>(&mut self, node: NodeId) -> Option<&mut C> {
        let ids = self.widgets.get(&node)?;
        self.instances
            .iter_mut()
            .filter(|i| ids.contains(&i.id))
            .find_map(|i| i.downcast_mut::<C>())
    }

    /// Markers applied to `node`, read from its upgraded attribute.
    pub fn upgraded_markers(&self, doc: &Document, node: NodeId) -> UpgradedList {
        UpgradedList::parse(doc.attribute(node, &self.config.upgraded_attribute))
    }

    /// Returns true if `node` is recorded as upgraded for `marker`.
    pub fn is_upgraded(&self, doc: &Document, node: NodeId, marker: &str) -> bool {
        self.upgraded_markers(doc, node).contains(marker)
    }

    // --- internals ---

    pub(crate) fn entry_index(&self, marker: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.marker == marker)
    }

    pub(crate) fn bound_index(&self, marker: &str) -> Result<usize, RegistryError> {
        self.entry_index(marker)
            .filter(|&i| self.entries[i].binding.is_some())
            .ok_or_else(|| RegistryError::Unregistered {
                marker: String::from(marker),
            })
    }

    pub(crate) fn matching_indices<'a>(
        &'a self,
        doc: &'a Document,
        node: NodeId,
    ) -> impl Iterator<Item = usize> + 'a {
        self.entries
            .iter()
            .enumerate()
            .filter_map(move |(i, e)| match &e.binding {
                Some(b) if doc.has_class(node, &b.css_class) => Some(i),
                _ => None,
            })
    }

    pub(crate) fn write_upgraded(&self, doc: &mut Document, node: NodeId, list: &UpgradedList) {
        if list.is_empty() {
            doc.remove_attribute(node, &self.config.upgraded_attribute);
        } else {
            doc.set_attribute(
                node,
                self.config.upgraded_attribute.clone(),
                list.to_attribute(),
            );
        }
    }

    pub(crate) fn emit(&mut self, doc: &Document, node: NodeId, kind: ComponentEvent) -> DispatchResult {
        let event = Event::new(kind, self.config.event_flags);
        self.listeners.fire(&router_for(doc), node, &event)
    }
}
