// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use materia_components::register_defaults;
use materia_dom::{Document, Element, NodeId};
use materia_registry::Registry;

/// `n` forms, each with a rippled checkbox, a slider, and some plain markup.
fn gen_forms(n: usize) -> (Document, Vec<NodeId>) {
    let mut doc = Document::new();
    let body = doc.insert(None, Element::new("body"));
    let mut labels = Vec::with_capacity(n);
    for i in 0..n {
        let y = i as f64 * 48.0;
        let form = doc.insert(Some(body), Element::new("form"));
        let label = doc.insert(
            Some(form),
            Element::new("label")
                .with_class("mdl-checkbox")
                .with_class("mdl-js-checkbox")
                .with_class("mdl-js-ripple-effect")
                .with_bounds(Rect::new(0.0, y, 24.0, y + 24.0)),
        );
        doc.insert(
            Some(label),
            Element::new("input")
                .with_class("mdl-checkbox__input")
                .with_attribute("type", "checkbox"),
        );
        doc.insert(
            Some(form),
            Element::new("input")
                .with_class("mdl-slider")
                .with_class("mdl-js-slider")
                .with_attribute("type", "range"),
        );
        for _ in 0..4 {
            let p = doc.insert(Some(form), Element::new("p"));
            doc.insert(Some(p), Element::new("span"));
        }
        labels.push(label);
    }
    (doc, labels)
}

fn registry() -> Registry {
    let mut registry = Registry::new();
    register_defaults(&mut registry).expect("fresh registry");
    registry
}

fn bench_upgrade(c: &mut Criterion) {
    let mut group = c.benchmark_group("upgrade");
    for &n in &[64_usize, 256, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("upgrade_all_n{n}"), |b| {
            b.iter_batched(
                || (registry(), gen_forms(n).0),
                |(mut registry, mut doc)| {
                    let created = registry.upgrade_all_registered(&mut doc).unwrap();
                    black_box(created);
                },
                BatchSize::SmallInput,
            );
        });

        let mut upgraded = registry();
        let (mut doc, _) = gen_forms(n);
        upgraded.upgrade_all_registered(&mut doc).unwrap();
        group.bench_function(format!("rescan_upgraded_n{n}"), |b| {
            b.iter(|| {
                let created = upgraded.upgrade_all_registered(&mut doc).unwrap();
                black_box(created);
            });
        });
    }
    group.finish();
}

fn bench_downgrade(c: &mut Criterion) {
    let mut group = c.benchmark_group("downgrade");
    for &n in &[64_usize, 256, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("downgrade_prune_n{n}"), |b| {
            b.iter_batched(
                || {
                    let mut registry = registry();
                    let (mut doc, labels) = gen_forms(n);
                    registry.upgrade_all_registered(&mut doc).unwrap();
                    (registry, doc, labels)
                },
                |(mut registry, mut doc, labels)| {
                    let removed = registry.downgrade_elements(&mut doc, &labels);
                    let pruned = registry.prune_detached(&doc);
                    black_box((removed, pruned));
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_upgrade, bench_downgrade);
criterion_main!(benches);
