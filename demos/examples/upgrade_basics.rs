// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Upgrade basics.
//!
//! Registers one component, upgrades a small document twice to show idempotency, then
//! downgrades an element and upgrades it again.
//!
//! Run:
//! - `cargo run -p materia_demos --example upgrade_basics`
//! - `RUST_LOG=trace cargo run -p materia_demos --example upgrade_basics` to see registry logs.

use materia_dom::{Document, Element, NodeId};
use materia_registry::{ComponentDescriptor, Controller, Registry, Teardown};
use tracing_subscriber::EnvFilter;

/// Appends a badge span and removes it on teardown.
struct Badge {
    badge: NodeId,
}

impl Controller for Badge {
    fn downgrade(&mut self, doc: &mut Document) -> Teardown {
        doc.remove(self.badge);
        Teardown::Done
    }
}

fn print_tree(doc: &Document, node: NodeId, depth: usize) {
    let Some(el) = doc.element(node) else {
        return;
    };
    let upgraded = doc.attribute(node, "data-upgraded").unwrap_or("-");
    println!(
        "{:indent$}<{}> .{}  upgraded={}",
        "",
        el.tag,
        el.classes.join("."),
        upgraded,
        indent = depth * 2
    );
    for &child in doc.children(node) {
        print_tree(doc, child, depth + 1);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut registry = Registry::new();
    registry
        .register(ComponentDescriptor::new(
            "DemoBadge",
            "js-badge",
            |doc: &mut Document, node| {
                let badge = doc.insert(Some(node), Element::new("span").with_class("badge"));
                Badge { badge }
            },
        ))
        .expect("fresh registry");

    let mut doc = Document::new();
    let body = doc.insert(None, Element::new("body"));
    let a = doc.insert(Some(body), Element::new("div").with_class("js-badge"));
    let b = doc.insert(
        Some(body),
        Element::new("div")
            .with_class("js-badge")
            .with_attribute("data-upgraded", "DemoBadge"),
    );
    doc.insert(Some(body), Element::new("div"));

    let created = registry.upgrade_all_registered(&mut doc).expect("registered");
    println!("== First pass: {created} created (pre-marked element skipped) ==");
    print_tree(&doc, body, 0);

    let created = registry.upgrade_all_registered(&mut doc).expect("registered");
    println!("== Second pass: {created} created ==");

    let removed = registry.downgrade_elements(&mut doc, &[a, b]);
    println!("== Downgraded {removed} instance(s) ==");
    print_tree(&doc, body, 0);

    let ids = registry
        .upgrade_element(&mut doc, a, Some("DemoBadge"))
        .expect("live node");
    println!("== Re-upgraded: {ids:?} ==");
    print_tree(&doc, body, 0);
}
