// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Components tour.
//!
//! Upgrades a form with a rippled checkbox and a slider using the default components, drives
//! them through their widget handles, and downgrades everything again.
//!
//! Run:
//! - `cargo run -p materia_demos --example components_tour`

use kurbo::{Point, Rect};
use materia_components::{Checkbox, Ripple, Slider, register_defaults};
use materia_dom::{Document, Element, NodeId};
use materia_registry::Registry;
use tracing_subscriber::EnvFilter;

fn print_tree(doc: &Document, node: NodeId, depth: usize) {
    let Some(el) = doc.element(node) else {
        return;
    };
    let attrs: Vec<String> = el
        .attributes
        .iter()
        .map(|(k, v)| format!("{k}=\"{v}\""))
        .collect();
    println!(
        "{:indent$}<{} class=\"{}\" {}>",
        "",
        el.tag,
        el.classes.join(" "),
        attrs.join(" "),
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
    register_defaults(&mut registry).expect("fresh registry");

    let mut doc = Document::new();
    let form = doc.insert(None, Element::new("form"));
    let label = doc.insert(
        Some(form),
        Element::new("label")
            .with_class("mdl-checkbox")
            .with_class("mdl-js-checkbox")
            .with_class("mdl-js-ripple-effect")
            .with_bounds(Rect::new(16.0, 16.0, 40.0, 40.0)),
    );
    doc.insert(
        Some(label),
        Element::new("input")
            .with_class("mdl-checkbox__input")
            .with_attribute("type", "checkbox"),
    );
    let range = doc.insert(
        Some(form),
        Element::new("input")
            .with_class("mdl-slider")
            .with_class("mdl-js-slider")
            .with_attribute("type", "range")
            .with_attribute("min", "0")
            .with_attribute("max", "10"),
    );

    let created = registry.upgrade_all_registered(&mut doc).expect("registered");
    println!("== Upgraded: {created} instance(s) ==");
    print_tree(&doc, form, 0);

    let checkbox = registry.widget::<Checkbox>(label).expect("checkbox widget");
    checkbox.toggle(&mut doc);
    let container = checkbox.ripple_container().expect("ripple container");
    if let Some(ripple) = registry.widget_mut::<Ripple>(container) {
        ripple.start(&mut doc, Point::new(20.0, 30.0));
        ripple.expand(&mut doc);
        println!("ripple size={}", ripple.size());
    }
    if let Some(slider) = registry.widget::<Slider>(range) {
        slider.set_value(&mut doc, 2.5);
        println!("slider value={} fraction={}", slider.value(&doc), slider.fraction(&doc));
    }
    println!("== After interaction ==");
    print_tree(&doc, form, 0);

    let removed = registry.downgrade_elements(&mut doc, &[label, range]);
    let pruned = registry.prune_detached(&doc);
    println!(
        "== Downgraded {removed}, pruned {pruned}, {} still attached ==",
        registry.instance_count()
    );
    print_tree(&doc, form, 0);
}
