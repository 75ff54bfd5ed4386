// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checkbox controller.

use materia_dom::{Document, Element, NodeId};
use materia_registry::{ComponentDescriptor, Controller, Teardown};
use tracing::debug;

use crate::ripple::{IGNORE_EVENTS, RIPPLE, RIPPLE_CENTER, RIPPLE_EFFECT};

const INPUT: &str = "mdl-checkbox__input";
const BOX_OUTLINE: &str = "mdl-checkbox__box-outline";
const FOCUS_HELPER: &str = "mdl-checkbox__focus-helper";
const TICK_OUTLINE: &str = "mdl-checkbox__tick-outline";
const RIPPLE_CONTAINER: &str = "mdl-checkbox__ripple-container";

const IS_FOCUSED: &str = "is-focused";
const IS_DISABLED: &str = "is-disabled";
const IS_CHECKED: &str = "is-checked";
const IS_UPGRADED: &str = "is-upgraded";

/// Checkbox controller for `label.mdl-js-checkbox` elements.
///
/// The checked and disabled state lives on the nested `input.mdl-checkbox__input` as `checked`
/// and `disabled` attributes; the controller mirrors it into `is-checked` and `is-disabled`
/// classes on the label. A label without an input is decorated but always reads as unchecked
/// and enabled.
///
/// When the label also asks for `mdl-js-ripple-effect`, the label's own ripple is switched to
/// ignore events and a centered ripple container is appended for the ripple controller to pick up.
#[derive(Debug)]
pub struct Checkbox {
    element: NodeId,
    input: Option<NodeId>,
    focus_helper: NodeId,
    box_outline: NodeId,
    ripple_container: Option<NodeId>,
    added_ignore_events: bool,
}

impl Checkbox {
    /// Marker name.
    pub const MARKER: &'static str = "MaterialCheckbox";
    /// Class selecting candidate elements.
    pub const CSS_CLASS: &'static str = "mdl-js-checkbox";

    /// Descriptor registering this controller.
    pub fn descriptor() -> ComponentDescriptor {
        ComponentDescriptor::new(Self::MARKER, Self::CSS_CLASS, Self::new)
    }

    /// Decorate `element` and sync its state classes.
    pub fn new(doc: &mut Document, element: NodeId) -> Self {
        let input = doc.find_class_below(element, INPUT);
        if input.is_none() {
            debug!(?element, "checkbox has no input; state stays unchecked");
        }

        let focus_helper = doc.insert(Some(element), Element::new("span").with_class(FOCUS_HELPER));
        let box_outline = doc.insert(Some(element), Element::new("span").with_class(BOX_OUTLINE));
        doc.insert(Some(box_outline), Element::new("span").with_class(TICK_OUTLINE));

        let mut added_ignore_events = false;
        let mut ripple_container = None;
        if doc.has_class(element, RIPPLE_EFFECT) {
            added_ignore_events = doc.add_class(element, IGNORE_EVENTS);
            let container = doc.insert(
                Some(element),
                Element::new("span")
                    .with_class(RIPPLE_CONTAINER)
                    .with_class(RIPPLE_EFFECT)
                    .with_class(RIPPLE_CENTER),
            );
            doc.insert(Some(container), Element::new("span").with_class(RIPPLE));
            ripple_container = Some(container);
        }

        let checkbox = Self {
            element,
            input,
            focus_helper,
            box_outline,
            ripple_container,
            added_ignore_events,
        };
        checkbox.update_classes(doc);
        doc.add_class(element, IS_UPGRADED);
        checkbox
    }

    /// The label element.
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// The nested input, if the markup has one.
    pub fn input(&self) -> Option<NodeId> {
        self.input
    }

    /// The ripple container appended for `mdl-js-ripple-effect` labels.
    pub fn ripple_container(&self) -> Option<NodeId> {
        self.ripple_container
    }

    /// Returns true if the input is checked.
    pub fn is_checked(&self, doc: &Document) -> bool {
        self.input
            .is_some_and(|i| doc.attribute(i, "checked").is_some())
    }

    /// Returns true if the input is disabled.
    pub fn is_disabled(&self, doc: &Document) -> bool {
        self.input
            .is_some_and(|i| doc.attribute(i, "disabled").is_some())
    }

    /// Check the checkbox.
    pub fn check(&self, doc: &mut Document) {
        self.set_input_flag(doc, "checked", true);
    }

    /// Uncheck the checkbox.
    pub fn uncheck(&self, doc: &mut Document) {
        self.set_input_flag(doc, "checked", false);
    }

    /// Flip the checked state, as a click on an enabled checkbox does.
    ///
    /// Disabled checkboxes ignore toggles.
    pub fn toggle(&self, doc: &mut Document) {
        if self.is_disabled(doc) {
            return;
        }
        let checked = self.is_checked(doc);
        self.set_input_flag(doc, "checked", !checked);
    }

    /// Disable the checkbox.
    pub fn disable(&self, doc: &mut Document) {
        self.set_input_flag(doc, "disabled", true);
    }

    /// Enable the checkbox.
    pub fn enable(&self, doc: &mut Document) {
        self.set_input_flag(doc, "disabled", false);
    }

    /// Mark the label focused.
    pub fn focus(&self, doc: &mut Document) {
        doc.add_class(self.element, IS_FOCUSED);
    }

    /// Clear the focused mark.
    pub fn blur(&self, doc: &mut Document) {
        doc.remove_class(self.element, IS_FOCUSED);
    }

    /// Re-read the input state into the label's classes.
    ///
    /// Call this after changing the input's attributes directly.
    pub fn update_classes(&self, doc: &mut Document) {
        let disabled = self.is_disabled(doc);
        let checked = self.is_checked(doc);
        doc.toggle_class(self.element, IS_DISABLED, disabled);
        doc.toggle_class(self.element, IS_CHECKED, checked);
    }

    fn set_input_flag(&self, doc: &mut Document, name: &str, on: bool) {
        if let Some(input) = self.input {
            if on {
                doc.set_attribute(input, name, "");
            } else {
                doc.remove_attribute(input, name);
            }
        }
        self.update_classes(doc);
    }
}

impl Controller for Checkbox {
    fn downgrade(&mut self, doc: &mut Document) -> Teardown {
        doc.remove(self.focus_helper);
        doc.remove(self.box_outline);
        if let Some(container) = self.ripple_container.take() {
            doc.remove(container);
        }
        if self.added_ignore_events {
            doc.remove_class(self.element, IGNORE_EVENTS);
        }
        for class in [IS_UPGRADED, IS_CHECKED, IS_DISABLED, IS_FOCUSED] {
            doc.remove_class(self.element, class);
        }
        Teardown::Done
    }
}
