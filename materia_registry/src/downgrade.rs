// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Downgrade operations: tolerant teardown of tracked instances.

use materia_dom::{Document, NodeId};
use tracing::trace;

use crate::config::ComponentEvent;
use crate::descriptor::Teardown;
use crate::instance::InstanceId;
use crate::registry::Registry;

impl Registry {
    /// Tear down the controllers attached to each node.
    ///
    /// For every instance on a node, the controller's teardown hook runs; on success the instance
    /// is dropped, its marker is removed from the node's upgraded attribute, and a downgraded event
    /// is emitted. Stale nodes, nodes without instances, and controllers without a teardown hook
    /// are skipped silently. Children are not visited.
    ///
    /// Returns the number of instances torn down.
    pub fn downgrade_elements(&mut self, doc: &mut Document, nodes: &[NodeId]) -> usize {
        nodes
            .iter()
            .map(|&node| self.downgrade_node(doc, node))
            .sum()
    }

    fn downgrade_node(&mut self, doc: &mut Document, node: NodeId) -> usize {
        if !doc.is_alive(node) {
            trace!(?node, "skipping downgrade of stale node");
            return 0;
        }
        let mut removed = 0;
        for id in self.instances_of(node) {
            let Some(pos) = self.instances.iter().position(|i| i.id == id) else {
                continue;
            };
            if self.instances[pos].controller.downgrade(doc) == Teardown::Unsupported {
                trace!(?node, ?id, "controller has no teardown hook");
                continue;
            }
            let instance = self.instances.remove(pos);
            self.unlink_widget(node, id);
            trace!(?node, ?id, marker = %instance.marker, "removed instance");

            let mut applied = self.upgraded_markers(doc, node);
            applied.remove(&instance.marker);
            self.write_upgraded(doc, node, &applied);
            self.emit(doc, node, ComponentEvent::Downgraded);
            removed += 1;
        }
        removed
    }

    /// Drop instances whose element is no longer in the document, without running teardown.
    ///
    /// Returns the number of instances dropped.
    pub fn prune_detached(&mut self, doc: &Document) -> usize {
        let before = self.instances.len();
        self.instances.retain(|i| doc.is_alive(i.node));
        self.widgets.retain(|node, _| doc.is_alive(*node));
        let pruned = before - self.instances.len();
        if pruned > 0 {
            trace!(pruned, "pruned detached instances");
        }
        pruned
    }

    fn unlink_widget(&mut self, node: NodeId, id: InstanceId) {
        if let Some(ids) = self.widgets.get_mut(&node) {
            ids.retain(|i| *i != id);
            if ids.is_empty() {
                self.widgets.remove(&node);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ComponentEvent;
    use crate::descriptor::{ComponentDescriptor, Controller, Teardown};
    use crate::registry::Registry;
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use materia_dom::{Document, Element, NodeId};
    use materia_events::listeners::ListenPhase;
    use materia_events::types::Outcome;

    struct Foo {
        helper: NodeId,
    }
    impl Controller for Foo {
        fn downgrade(&mut self, doc: &mut Document) -> Teardown {
            doc.remove(self.helper);
            Teardown::Done
        }
    }

    struct Sticky;
    impl Controller for Sticky {}

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .register(ComponentDescriptor::new("Foo", "js-foo", |doc: &mut Document, node| {
                let helper = doc.insert(Some(node), Element::new("span").with_class("foo__helper"));
                Foo { helper }
            }))
            .unwrap();
        registry
            .register(ComponentDescriptor::new("Sticky", "js-sticky", |_: &mut Document, _| Sticky))
            .unwrap();
        registry
    }

    #[test]
    fn downgrade_then_reupgrade_creates_a_new_instance() {
        let mut registry = registry();
        let mut doc = Document::new();
        let n = doc.insert(None, Element::new("div"));
        let first = registry.upgrade_element(&mut doc, n, Some("Foo")).unwrap();
        assert_eq!(doc.children(n).len(), 1);

        assert_eq!(registry.downgrade_elements(&mut doc, &[n]), 1);
        assert!(doc.children(n).is_empty(), "teardown removes created nodes");
        assert_eq!(doc.attribute(n, "data-upgraded"), None);
        assert!(registry.widget::<Foo>(n).is_none());
        assert_eq!(registry.instance_count(), 0);

        let second = registry.upgrade_element(&mut doc, n, Some("Foo")).unwrap();
        assert_eq!(second.len(), 1);
        assert_ne!(first, second);
        assert_eq!(doc.attribute(n, "data-upgraded"), Some("Foo"));
    }

    #[test]
    fn controllers_without_teardown_are_skipped() {
        let mut registry = registry();
        let mut doc = Document::new();
        let n = doc.insert(
            None,
            Element::new("div")
                .with_class("js-sticky")
                .with_class("js-foo"),
        );
        assert_eq!(registry.upgrade_all_registered(&mut doc).unwrap(), 2);
        assert_eq!(doc.attribute(n, "data-upgraded"), Some("Foo,Sticky"));

        assert_eq!(registry.downgrade_elements(&mut doc, &[n]), 1);
        assert_eq!(doc.attribute(n, "data-upgraded"), Some("Sticky"));
        assert!(registry.widget::<Sticky>(n).is_some());
        assert_eq!(registry.instance_count(), 1);

        // Nothing left that can be torn down.
        assert_eq!(registry.downgrade_elements(&mut doc, &[n]), 0);
    }

    #[test]
    fn unknown_and_stale_nodes_are_ignored() {
        let mut registry = registry();
        let mut doc = Document::new();
        let plain = doc.insert(None, Element::new("div"));
        let gone = doc.insert(None, Element::new("div").with_class("js-foo"));
        registry.upgrade_all_registered(&mut doc).unwrap();
        doc.remove(gone);
        assert_eq!(registry.downgrade_elements(&mut doc, &[plain, gone]), 0);
        assert_eq!(registry.instance_count(), 1);

        assert_eq!(registry.prune_detached(&doc), 1);
        assert_eq!(registry.instance_count(), 0);
        assert_eq!(registry.prune_detached(&doc), 0);
    }

    #[test]
    fn downgraded_event_bubbles_to_ancestors() {
        let mut registry = registry();
        let mut doc = Document::new();
        let root = doc.insert(None, Element::new("body"));
        let n = doc.insert(Some(root), Element::new("div").with_class("js-foo"));
        registry.upgrade_all_registered(&mut doc).unwrap();

        let seen = Rc::new(Cell::new(0));
        let s = seen.clone();
        registry.listeners_mut().add(
            root,
            ComponentEvent::Downgraded,
            ListenPhase::Bubble,
            Box::new(move |d, _| {
                assert_eq!(d.target, n);
                s.set(s.get() + 1);
                Outcome::Continue
            }),
        );
        registry.downgrade_elements(&mut doc, &[n]);
        assert_eq!(seen.get(), 1);
    }
}
