// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle events.
//!
//! Listens for upgrading/upgraded/downgraded events at the document root, and vetoes the
//! upgrade of one element by consuming its cancelable upgrading event.
//!
//! Run:
//! - `cargo run -p materia_demos --example lifecycle_events`

use materia_dom::{Document, Element};
use materia_events::listeners::ListenPhase;
use materia_events::types::Outcome;
use materia_registry::{ComponentDescriptor, ComponentEvent, Controller, Registry, Teardown};
use tracing_subscriber::EnvFilter;

struct Chip;

impl Controller for Chip {
    fn downgrade(&mut self, _doc: &mut Document) -> Teardown {
        Teardown::Done
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut registry = Registry::new();
    registry
        .register(ComponentDescriptor::new("DemoChip", "js-chip", |_: &mut Document, _| Chip))
        .expect("fresh registry");

    let mut doc = Document::new();
    let body = doc.insert(None, Element::new("body"));
    let ok = doc.insert(Some(body), Element::new("span").with_class("js-chip"));
    let vetoed = doc.insert(Some(body), Element::new("span").with_class("js-chip"));

    for kind in [
        ComponentEvent::Upgrading,
        ComponentEvent::Upgraded,
        ComponentEvent::Downgraded,
    ] {
        registry.listeners_mut().add(
            body,
            kind,
            ListenPhase::Bubble,
            Box::new(|d, e| {
                println!("  {:<24} phase={:?} target={:?}", e.kind.name(), d.phase, d.target);
                Outcome::Continue
            }),
        );
    }
    // Capture listeners on the root run before the target; consuming cancels the upgrade.
    registry.listeners_mut().add(
        body,
        ComponentEvent::Upgrading,
        ListenPhase::Capture,
        Box::new(move |d, _| {
            if d.target == vetoed {
                println!("  veto upgrade of {:?}", d.target);
                Outcome::StopAndConsume
            } else {
                Outcome::Continue
            }
        }),
    );

    println!("== Upgrade ==");
    let created = registry.upgrade_all_registered(&mut doc).expect("registered");
    println!(
        "created={created} ok={:?} vetoed={:?}",
        doc.attribute(ok, "data-upgraded"),
        doc.attribute(vetoed, "data-upgraded")
    );

    println!("== Downgrade ==");
    registry.downgrade_elements(&mut doc, &[ok, vetoed]);
}
