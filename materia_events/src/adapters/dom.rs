// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Materia DOM.
//!
//! ## Feature
//!
//! Enable with `dom_adapter`.
//!
//! ## Notes
//!
//! A [`Document`] already knows every node's parent, so it serves directly as the
//! [`ParentLookup`] of a [`Router`]. Stale ids resolve to a singleton path.

use materia_dom::{Document, NodeId};

use crate::router::Router;
use crate::types::ParentLookup;

impl ParentLookup<NodeId> for Document {
    #[inline]
    fn parent_of(&self, node: &NodeId) -> Option<NodeId> {
        self.parent(*node)
    }
}

/// Build a router that walks `doc`'s parent links.
pub fn router_for(doc: &Document) -> Router<NodeId, &Document> {
    Router::with_parent(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EventFlags, Phase};
    use alloc::vec::Vec;
    use materia_dom::Element;

    #[test]
    fn routes_along_document_parents() {
        let mut doc = Document::new();
        let root = doc.insert(None, Element::new("body"));
        let form = doc.insert(Some(root), Element::new("form"));
        let label = doc.insert(Some(form), Element::new("label"));

        let out = router_for(&doc).route(label, EventFlags::BUBBLES);
        let nodes: Vec<(Phase, NodeId)> = out.iter().map(|d| (d.phase, d.node)).collect();
        assert_eq!(
            nodes,
            [
                (Phase::Capture, root),
                (Phase::Capture, form),
                (Phase::Target, label),
                (Phase::Bubble, form),
                (Phase::Bubble, root),
            ]
        );

        doc.remove(label);
        assert_eq!(router_for(&doc).path(label), [label]);
    }
}
