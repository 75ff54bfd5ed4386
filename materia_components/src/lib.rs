// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=materia_components --heading-base-level=0

//! Materia Components: concrete controllers for the Materia component registry.
//!
//! - [`Ripple`] (`MaterialRipple`, `mdl-js-ripple-effect`): ink ripple sized from the element
//!   bounds and positioned with a [`kurbo::Affine`].
//! - [`Checkbox`] (`MaterialCheckbox`, `mdl-js-checkbox`): outline and tick decoration with
//!   checked/disabled state mirrored into classes.
//! - [`Slider`] (`MaterialSlider`, `mdl-js-slider`): range track with lower/upper fractions.
//!
//! Each controller owns the nodes it inserts. Ripples and checkboxes remove them when downgraded;
//! sliders have no teardown hook and stay attached.
//!
//! ## Example
//!
//! ```
//! use materia_components::{Checkbox, register_defaults};
//! use materia_dom::{Document, Element};
//! use materia_registry::Registry;
//!
//! let mut registry = Registry::new();
//! register_defaults(&mut registry).unwrap();
//!
//! let mut doc = Document::new();
//! let label = doc.insert(None, Element::new("label").with_class("mdl-js-checkbox"));
//! let input = doc.insert(
//!     Some(label),
//!     Element::new("input").with_class("mdl-checkbox__input").with_attribute("type", "checkbox"),
//! );
//! registry.upgrade_all_registered(&mut doc).unwrap();
//!
//! let checkbox = registry.widget::<Checkbox>(label).unwrap();
//! checkbox.check(&mut doc);
//! assert!(doc.has_class(label, "is-checked"));
//! assert_eq!(doc.attribute(input, "checked"), Some(""));
//! ```
//!
//! The `std` or `libm` feature must be enabled for ripple sizing.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod checkbox;
mod ripple;
mod slider;

pub use checkbox::Checkbox;
pub use ripple::Ripple;
pub use slider::Slider;

use materia_registry::{Registry, RegistryError};

/// Register [`Checkbox`], [`Slider`], and [`Ripple`], in that order.
///
/// Ripple comes last so that ripple containers created by other components are upgraded in the
/// same pass.
pub fn register_defaults(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(Checkbox::descriptor())?;
    registry.register(Slider::descriptor())?;
    registry.register(Ripple::descriptor())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Rect};
    use materia_dom::{Document, Element, NodeId};

    fn form(doc: &mut Document) -> (NodeId, NodeId, NodeId) {
        let form = doc.insert(None, Element::new("form"));
        let label = doc.insert(
            Some(form),
            Element::new("label")
                .with_class("mdl-checkbox")
                .with_class("mdl-js-checkbox")
                .with_class("mdl-js-ripple-effect")
                .with_bounds(Rect::new(0.0, 0.0, 24.0, 24.0)),
        );
        doc.insert(
            Some(label),
            Element::new("input").with_class("mdl-checkbox__input"),
        );
        let slider = doc.insert(
            Some(form),
            Element::new("input")
                .with_class("mdl-slider")
                .with_class("mdl-js-slider")
                .with_attribute("value", "25"),
        );
        (form, label, slider)
    }

    #[test]
    fn defaults_upgrade_nested_ripples_in_one_pass() {
        let mut registry = Registry::new();
        register_defaults(&mut registry).unwrap();
        let mut doc = Document::new();
        let (_, label, slider) = form(&mut doc);

        // Checkbox, its inert label ripple, its ripple container, and the slider.
        assert_eq!(registry.upgrade_all_registered(&mut doc).unwrap(), 4);
        assert_eq!(
            doc.attribute(label, "data-upgraded"),
            Some("MaterialCheckbox,MaterialRipple")
        );
        assert_eq!(doc.attribute(slider, "data-upgraded"), Some("MaterialSlider"));

        let container = registry
            .widget::<Checkbox>(label)
            .and_then(Checkbox::ripple_container)
            .unwrap();
        let inner = registry.widget_mut::<Ripple>(container).unwrap();
        assert!(inner.is_recentering());
        inner.start(&mut doc, Point::ZERO);
        assert!(inner.is_visible(&doc));
        assert!(registry.widget::<Ripple>(label).unwrap().ripple_node().is_none());

        assert_eq!(registry.upgrade_all_registered(&mut doc).unwrap(), 0);
    }

    #[test]
    fn subtree_upgrade_reaches_the_ripple_container() {
        let mut registry = Registry::new();
        register_defaults(&mut registry).unwrap();
        let mut doc = Document::new();
        let (form, label, _) = form(&mut doc);

        assert_eq!(registry.upgrade_elements(&mut doc, &[form]).unwrap(), 4);
        let container = registry
            .widget::<Checkbox>(label)
            .and_then(Checkbox::ripple_container)
            .unwrap();
        assert_eq!(doc.attribute(container, "data-upgraded"), Some("MaterialRipple"));
        assert!(registry.widget::<Ripple>(container).unwrap().is_recentering());
    }

    #[test]
    fn explicit_checkbox_upgrade_reaches_the_ripple_container() {
        let mut registry = Registry::new();
        register_defaults(&mut registry).unwrap();
        let mut doc = Document::new();
        let (_, label, _) = form(&mut doc);

        let ids = registry
            .upgrade_element(&mut doc, label, Some(Checkbox::MARKER))
            .unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(doc.attribute(label, "data-upgraded"), Some("MaterialCheckbox"));
        let container = registry
            .widget::<Checkbox>(label)
            .and_then(Checkbox::ripple_container)
            .unwrap();
        assert_eq!(registry.instances_of(container).len(), 1);
        let ripple = registry.widget_mut::<Ripple>(container).unwrap();
        ripple.start(&mut doc, Point::ZERO);
        assert!(ripple.is_visible(&doc));
    }

    #[test]
    fn class_scoped_checkbox_upgrade_reaches_the_ripple_container() {
        let mut registry = Registry::new();
        register_defaults(&mut registry).unwrap();
        let mut doc = Document::new();
        let (_, label, slider) = form(&mut doc);

        assert_eq!(
            registry
                .upgrade_dom(&mut doc, Some(Checkbox::MARKER), None)
                .unwrap(),
            2
        );
        let container = registry
            .widget::<Checkbox>(label)
            .and_then(Checkbox::ripple_container)
            .unwrap();
        assert_eq!(doc.attribute(container, "data-upgraded"), Some("MaterialRipple"));
        assert_eq!(doc.attribute(slider, "data-upgraded"), None);
    }

    #[test]
    fn downgrade_checkbox_then_prune_its_ripple() {
        let mut registry = Registry::new();
        register_defaults(&mut registry).unwrap();
        let mut doc = Document::new();
        let (_, label, slider) = form(&mut doc);
        registry.upgrade_all_registered(&mut doc).unwrap();

        // Checkbox and the inert label ripple both tear down.
        assert_eq!(registry.downgrade_elements(&mut doc, &[label, slider]), 2);
        assert_eq!(doc.attribute(label, "data-upgraded"), None);
        assert_eq!(doc.children(label).len(), 1);
        // The slider has no teardown hook.
        assert_eq!(doc.attribute(slider, "data-upgraded"), Some("MaterialSlider"));

        // The container's ripple went away with the checkbox's nodes.
        assert_eq!(registry.prune_detached(&doc), 1);
        assert_eq!(registry.instance_count(), 1);

        assert_eq!(registry.upgrade_all_registered(&mut doc).unwrap(), 3);
    }

    #[test]
    fn register_defaults_twice_fails() {
        let mut registry = Registry::new();
        register_defaults(&mut registry).unwrap();
        assert!(matches!(
            register_defaults(&mut registry),
            Err(RegistryError::DuplicateCssClass { .. })
        ));
    }
}
