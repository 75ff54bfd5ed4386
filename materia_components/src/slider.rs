// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range slider controller.

use alloc::format;
use alloc::string::ToString;

use materia_dom::{Document, Element, NodeId};
use materia_registry::{ComponentDescriptor, Controller};
use tracing::trace;

const CONTAINER: &str = "mdl-slider__container";
const BACKGROUND_FLEX: &str = "mdl-slider__background-flex";
const BACKGROUND_LOWER: &str = "mdl-slider__background-lower";
const BACKGROUND_UPPER: &str = "mdl-slider__background-upper";

const IS_LOWEST_VALUE: &str = "is-lowest-value";
const IS_UPGRADED: &str = "is-upgraded";

const DEFAULT_MIN: f64 = 0.0;
const DEFAULT_MAX: f64 = 100.0;

/// Slider controller for `input.mdl-js-slider` range inputs.
///
/// The input is moved into a new `div.mdl-slider__container` that takes its place, followed by a
/// background track whose lower and upper parts are sized with `flex` fractions of the value.
///
/// `min`, `max`, and `value` are read from the input's attributes, defaulting to `0`, `100`, and
/// the midpoint. Sliders have no teardown hook: downgrading leaves them attached.
#[derive(Debug)]
pub struct Slider {
    element: NodeId,
    container: NodeId,
    lower: NodeId,
    upper: NodeId,
}

impl Slider {
    /// Marker name.
    pub const MARKER: &'static str = "MaterialSlider";
    /// Class selecting candidate elements.
    pub const CSS_CLASS: &'static str = "mdl-js-slider";

    /// Descriptor registering this controller.
    pub fn descriptor() -> ComponentDescriptor {
        ComponentDescriptor::new(Self::MARKER, Self::CSS_CLASS, Self::new)
    }

    /// Wrap `element` in a slider container and draw its track.
    pub fn new(doc: &mut Document, element: NodeId) -> Self {
        let container_el = Element::new("div").with_class(CONTAINER);
        let container = match doc.insert_before(element, container_el.clone()) {
            Some(container) => container,
            None => doc.insert(None, container_el),
        };
        doc.reparent(element, Some(container));

        let flex = doc.insert(Some(container), Element::new("div").with_class(BACKGROUND_FLEX));
        let lower = doc.insert(Some(flex), Element::new("div").with_class(BACKGROUND_LOWER));
        let upper = doc.insert(Some(flex), Element::new("div").with_class(BACKGROUND_UPPER));

        let slider = Self {
            element,
            container,
            lower,
            upper,
        };
        slider.update_value_styles(doc);
        doc.add_class(element, IS_UPGRADED);
        slider
    }

    /// The input element.
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// The container wrapping the input and its track.
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Lower bound of the range.
    pub fn min(&self, doc: &Document) -> f64 {
        number(doc, self.element, "min").unwrap_or(DEFAULT_MIN)
    }

    /// Upper bound of the range; never below [`min`](Self::min).
    pub fn max(&self, doc: &Document) -> f64 {
        let min = self.min(doc);
        number(doc, self.element, "max")
            .unwrap_or(DEFAULT_MAX)
            .max(min)
    }

    /// Current value, clamped to the range.
    pub fn value(&self, doc: &Document) -> f64 {
        let (min, max) = (self.min(doc), self.max(doc));
        number(doc, self.element, "value")
            .unwrap_or(min / 2.0 + max / 2.0)
            .clamp(min, max)
    }

    /// Position of the value within the range, from `0.0` to `1.0`.
    ///
    /// An empty range, or one too wide to measure in `f64`, reads as `0.0`.
    pub fn fraction(&self, doc: &Document) -> f64 {
        let (min, max) = (self.min(doc), self.max(doc));
        let span = max - min;
        if max <= min || !span.is_finite() {
            return 0.0;
        }
        let fraction = (self.value(doc) - min) / span;
        if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Set the value, clamped to the range, and redraw the track.
    pub fn set_value(&self, doc: &mut Document, value: f64) {
        let (min, max) = (self.min(doc), self.max(doc));
        let clamped = if value.is_nan() { min } else { value.clamp(min, max) };
        if clamped != value {
            trace!(value, clamped, "slider value clamped");
        }
        doc.set_attribute(self.element, "value", clamped.to_string());
        self.update_value_styles(doc);
    }

    /// Returns true if the input is disabled.
    pub fn is_disabled(&self, doc: &Document) -> bool {
        doc.attribute(self.element, "disabled").is_some()
    }

    /// Disable the slider.
    pub fn disable(&self, doc: &mut Document) {
        doc.set_attribute(self.element, "disabled", "");
        self.update_value_styles(doc);
    }

    /// Enable the slider.
    pub fn enable(&self, doc: &mut Document) {
        doc.remove_attribute(self.element, "disabled");
        self.update_value_styles(doc);
    }

    /// Redraw the track from the input's current attributes.
    ///
    /// Call this after changing the input's attributes directly.
    pub fn update_value_styles(&self, doc: &mut Document) {
        let fraction = self.fraction(doc);
        doc.toggle_class(self.element, IS_LOWEST_VALUE, fraction == 0.0);
        doc.set_attribute(self.lower, "style", format!("flex: {fraction}"));
        doc.set_attribute(self.upper, "style", format!("flex: {}", 1.0 - fraction));
    }
}

// Sliders keep the default `downgrade`, so they are never torn down.
impl Controller for Slider {}

fn number(doc: &Document, node: NodeId, name: &str) -> Option<f64> {
    doc.attribute(node, name)?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use materia_registry::Teardown;

    fn range(doc: &mut Document, attrs: &[(&str, &str)]) -> (NodeId, NodeId) {
        let form = doc.insert(None, Element::new("form"));
        doc.insert(Some(form), Element::new("p"));
        let mut el = Element::new("input")
            .with_class("mdl-slider")
            .with_class(Slider::CSS_CLASS)
            .with_attribute("type", "range");
        for (name, value) in attrs {
            el = el.with_attribute(*name, *value);
        }
        let input = doc.insert(Some(form), el);
        doc.insert(Some(form), Element::new("p"));
        (form, input)
    }

    #[test]
    fn wraps_input_in_place() {
        let mut doc = Document::new();
        let (form, input) = range(&mut doc, &[]);
        let slider = Slider::new(&mut doc, input);
        let container = slider.container();

        assert_eq!(doc.children(form)[1], container);
        assert_eq!(doc.children(form).len(), 3);
        assert_eq!(doc.parent(input), Some(container));
        assert_eq!(doc.children(container)[0], input);
        let flex = doc.children(container)[1];
        assert!(doc.has_class(flex, BACKGROUND_FLEX));
        assert_eq!(doc.children(flex), [slider.lower, slider.upper]);
        assert!(doc.has_class(input, IS_UPGRADED));
    }

    #[test]
    fn default_range_starts_at_midpoint() {
        let mut doc = Document::new();
        let (_, input) = range(&mut doc, &[]);
        let slider = Slider::new(&mut doc, input);
        assert_eq!(slider.value(&doc), 50.0);
        assert_eq!(doc.attribute(slider.lower, "style"), Some("flex: 0.5"));
        assert_eq!(doc.attribute(slider.upper, "style"), Some("flex: 0.5"));
        assert!(!doc.has_class(input, IS_LOWEST_VALUE));
    }

    #[test]
    fn set_value_clamps_and_flags_lowest() {
        let mut doc = Document::new();
        let (_, input) = range(&mut doc, &[("min", "10"), ("max", "20"), ("value", "15")]);
        let slider = Slider::new(&mut doc, input);

        slider.set_value(&mut doc, 12.5);
        assert_eq!(doc.attribute(input, "value"), Some("12.5"));
        assert_eq!(doc.attribute(slider.lower, "style"), Some("flex: 0.25"));
        assert_eq!(doc.attribute(slider.upper, "style"), Some("flex: 0.75"));

        slider.set_value(&mut doc, -3.0);
        assert_eq!(slider.value(&doc), 10.0);
        assert!(doc.has_class(input, IS_LOWEST_VALUE));

        slider.set_value(&mut doc, 99.0);
        assert_eq!(slider.value(&doc), 20.0);
        assert_eq!(slider.fraction(&doc), 1.0);
        assert!(!doc.has_class(input, IS_LOWEST_VALUE));

        slider.set_value(&mut doc, f64::NAN);
        assert_eq!(slider.value(&doc), 10.0);
    }

    #[test]
    fn empty_range_reads_as_lowest() {
        let mut doc = Document::new();
        let (_, input) = range(&mut doc, &[("min", "5"), ("max", "5")]);
        let slider = Slider::new(&mut doc, input);
        assert_eq!(slider.fraction(&doc), 0.0);
        assert!(doc.has_class(input, IS_LOWEST_VALUE));
    }

    #[test]
    fn overflowing_range_reads_as_lowest() {
        let mut doc = Document::new();
        let (_, input) = range(&mut doc, &[("min", "-1e308"), ("max", "1e308")]);
        let slider = Slider::new(&mut doc, input);
        assert_eq!(slider.value(&doc), 0.0);
        assert_eq!(slider.fraction(&doc), 0.0);
        assert_eq!(doc.attribute(slider.lower, "style"), Some("flex: 0"));
        assert_eq!(doc.attribute(slider.upper, "style"), Some("flex: 1"));

        slider.set_value(&mut doc, 1e308);
        assert_eq!(slider.fraction(&doc), 0.0);
        assert_eq!(doc.attribute(slider.lower, "style"), Some("flex: 0"));
    }

    #[test]
    fn disable_and_enable() {
        let mut doc = Document::new();
        let (_, input) = range(&mut doc, &[]);
        let slider = Slider::new(&mut doc, input);
        slider.disable(&mut doc);
        assert!(slider.is_disabled(&doc));
        slider.enable(&mut doc);
        assert!(!slider.is_disabled(&doc));
    }

    #[test]
    fn root_input_gets_a_root_container() {
        let mut doc = Document::new();
        let input = doc.insert(None, Element::new("input").with_class(Slider::CSS_CLASS));
        let slider = Slider::new(&mut doc, input);
        assert_eq!(doc.roots(), [slider.container()]);
        assert_eq!(doc.parent(input), Some(slider.container()));
    }

    #[test]
    fn has_no_teardown() {
        let mut doc = Document::new();
        let (_, input) = range(&mut doc, &[]);
        let mut slider = Slider::new(&mut doc, input);
        assert_eq!(slider.downgrade(&mut doc), Teardown::Unsupported);
        assert!(doc.is_alive(slider.container()));
    }
}
