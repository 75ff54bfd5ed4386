// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Upgrade operations.
//!
//! Idempotency rests on the upgraded attribute: a marker already recorded on an element is never
//! instantiated again for it.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use materia_dom::{Document, NodeId};
use tracing::{debug, trace};

use crate::config::ComponentEvent;
use crate::error::RegistryError;
use crate::instance::{Instance, InstanceId};
use crate::registry::Registry;

impl Registry {
    /// Upgrade every element matching every registered descriptor.
    ///
    /// Returns the number of instances created.
    pub fn upgrade_all_registered(&mut self, doc: &mut Document) -> Result<usize, RegistryError> {
        let markers: Vec<String> = self.registered_markers().map(String::from).collect();
        let mut created = 0;
        for marker in &markers {
            created += self.upgrade_dom(doc, Some(marker), None)?;
        }
        Ok(created)
    }

    /// Upgrade every element carrying `css_class` for `marker`.
    ///
    /// Without a marker this is [`upgrade_all_registered`](Self::upgrade_all_registered); without a
    /// class the descriptor's own class is used.
    pub fn upgrade_dom(
        &mut self,
        doc: &mut Document,
        marker: Option<&str>,
        css_class: Option<&str>,
    ) -> Result<usize, RegistryError> {
        let Some(marker) = marker else {
            return self.upgrade_all_registered(doc);
        };
        let css_class = match css_class {
            Some(class) => String::from(class),
            None => self
                .css_class_of(marker)
                .map(String::from)
                .ok_or_else(|| RegistryError::Unregistered {
                    marker: String::from(marker),
                })?,
        };
        let mut created = 0;
        for node in doc.query_class(&css_class) {
            // Earlier constructors may have removed later candidates.
            if doc.is_alive(node) {
                created += self.upgrade_element(doc, node, Some(marker))?.len();
            }
        }
        Ok(created)
    }

    /// Upgrade each node's subtree, children before the node itself, for every matching
    /// descriptor.
    ///
    /// Every id is checked before any work starts, so a stale id leaves the document and the
    /// registry untouched.
    ///
    /// Returns the number of instances created.
    pub fn upgrade_elements(
        &mut self,
        doc: &mut Document,
        nodes: &[NodeId],
    ) -> Result<usize, RegistryError> {
        if let Some(&node) = nodes.iter().find(|n| !doc.is_alive(**n)) {
            return Err(RegistryError::StaleNode { node });
        }
        let mut created = Vec::new();
        for &node in nodes {
            // Earlier constructors may have removed later nodes.
            if doc.is_alive(node) {
                self.upgrade_subtree(doc, node, &mut created);
            }
        }
        Ok(created.len())
    }

    fn upgrade_subtree(
        &mut self,
        doc: &mut Document,
        node: NodeId,
        created: &mut Vec<InstanceId>,
    ) {
        let children = doc.children(node).to_vec();
        for child in children {
            if doc.is_alive(child) {
                self.upgrade_subtree(doc, child, created);
            }
        }
        if doc.is_alive(node) {
            created.extend(self.upgrade_pending(doc, node, None));
        }
    }

    /// Upgrade a single element.
    ///
    /// With a marker, only that descriptor is applied (the element need not carry its class);
    /// without one, every registered descriptor whose class the element carries is applied.
    /// Markers already recorded on the element are skipped.
    ///
    /// Elements that the new controllers insert below `node` are upgraded too, children first,
    /// for every matching descriptor.
    ///
    /// Returns the ids of the created instances, nested ones included.
    pub fn upgrade_element(
        &mut self,
        doc: &mut Document,
        node: NodeId,
        marker: Option<&str>,
    ) -> Result<Vec<InstanceId>, RegistryError> {
        if !doc.is_alive(node) {
            return Err(RegistryError::StaleNode { node });
        }
        if let Some(marker) = marker {
            self.bound_index(marker)?;
        }
        Ok(self.upgrade_pending(doc, node, marker))
    }

    /// [`upgrade_element`](Self::upgrade_element) for a live node and a registered marker.
    fn upgrade_pending(
        &mut self,
        doc: &mut Document,
        node: NodeId,
        marker: Option<&str>,
    ) -> Vec<InstanceId> {
        let mut applied = self.upgraded_markers(doc, node);
        let pending: Vec<usize> = match marker {
            Some(marker) => self
                .bound_index(marker)
                .ok()
                .filter(|_| !applied.contains(marker))
                .into_iter()
                .collect(),
            None => self
                .matching_indices(doc, node)
                .filter(|&i| !applied.contains(&self.entries[i].marker))
                .collect(),
        };
        if pending.is_empty() {
            return Vec::new();
        }

        if self.config.emit_upgrading
            && self
                .emit(doc, node, ComponentEvent::Upgrading)
                .default_prevented
        {
            debug!(?node, "upgrade prevented by listener");
            return Vec::new();
        }

        let existing: BTreeSet<NodeId> = doc.descendants(node).collect();
        let mut created = Vec::with_capacity(pending.len());
        for idx in pending {
            applied.push(&self.entries[idx].marker);
            self.write_upgraded(doc, node, &applied);
            if let Some(id) = self.instantiate(doc, node, idx) {
                created.push(id);
                self.emit(doc, node, ComponentEvent::Upgraded);
            }
        }

        // Upgrade the topmost nodes the constructors inserted; their subtrees follow.
        let inserted: Vec<NodeId> = doc
            .descendants(node)
            .filter(|n| !existing.contains(n))
            .filter(|n| doc.parent(*n).is_none_or(|p| existing.contains(&p)))
            .collect();
        for child in inserted {
            if doc.is_alive(child) {
                trace!(?node, ?child, "upgrading inserted element");
                self.upgrade_subtree(doc, child, &mut created);
            }
        }
        created
    }

    fn instantiate(&mut self, doc: &mut Document, node: NodeId, idx: usize) -> Option<InstanceId> {
        let entry = &self.entries[idx];
        let binding = entry.binding.as_ref()?;
        let controller = (binding.factory)(&mut *doc, node);
        let widget = binding.widget;
        let marker = entry.marker.clone();

        let id = InstanceId(self.next_instance);
        self.next_instance += 1;
        trace!(?node, ?id, marker = %marker, "created instance");
        self.instances.push(Instance {
            id,
            node,
            marker,
            widget,
            controller,
        });
        if widget {
            self.widgets.entry(node).or_default().push(id);
        }
        for callback in &mut self.entries[idx].callbacks {
            callback(&mut *doc, node);
        }
        Some(id)
    }
}
