// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ink ripple effect.

use alloc::format;

use kurbo::{Affine, Point, Vec2};
use materia_dom::{Document, Element, NodeId};
use materia_registry::{ComponentDescriptor, Controller, Teardown};

pub(crate) const RIPPLE: &str = "mdl-ripple";
pub(crate) const RIPPLE_EFFECT: &str = "mdl-js-ripple-effect";
pub(crate) const IGNORE_EVENTS: &str = "mdl-js-ripple-effect--ignore-events";
pub(crate) const RIPPLE_CENTER: &str = "mdl-ripple--center";
const IS_VISIBLE: &str = "is-visible";
const IS_ANIMATING: &str = "is-animating";

/// Scale of a ripple that has just started.
const INITIAL_SCALE: f64 = 0.0001;

/// Ripple controller for elements marked `mdl-js-ripple-effect`.
///
/// The ripple is drawn by a `span.mdl-ripple` inside the element: an existing one is reused,
/// otherwise one is appended. Elements marked `mdl-js-ripple-effect--ignore-events` get an inert
/// controller; their owner drives a ripple elsewhere.
///
/// A press calls [`start`](Self::start) (or [`start_centered`](Self::start_centered)), the next
/// frame calls [`expand`](Self::expand), and the release calls [`end`](Self::end).
#[derive(Debug)]
pub struct Ripple {
    element: NodeId,
    ripple: Option<NodeId>,
    created: bool,
    recentering: bool,
    size: f64,
    center: Point,
}

impl Ripple {
    /// Marker name.
    pub const MARKER: &'static str = "MaterialRipple";
    /// Class selecting candidate elements.
    pub const CSS_CLASS: &'static str = RIPPLE_EFFECT;

    /// Descriptor registering this controller.
    pub fn descriptor() -> ComponentDescriptor {
        ComponentDescriptor::new(Self::MARKER, Self::CSS_CLASS, Self::new)
    }

    /// Attach a ripple to `element`.
    pub fn new(doc: &mut Document, element: NodeId) -> Self {
        let mut ripple = Self {
            element,
            ripple: None,
            created: false,
            recentering: doc.has_class(element, RIPPLE_CENTER),
            size: 0.0,
            center: Point::ZERO,
        };
        if doc.has_class(element, IGNORE_EVENTS) {
            return ripple;
        }
        ripple.ripple = match doc.find_class_below(element, RIPPLE) {
            Some(existing) => Some(existing),
            None => {
                ripple.created = true;
                Some(doc.insert(Some(element), Element::new("span").with_class(RIPPLE)))
            }
        };
        ripple
    }

    /// The element the ripple is attached to.
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// The `span.mdl-ripple` node, or `None` for an inert ripple.
    pub fn ripple_node(&self) -> Option<NodeId> {
        self.ripple
    }

    /// Returns true if presses always start from the center of the element.
    pub fn is_recentering(&self) -> bool {
        self.recentering
    }

    /// Diameter of the current ripple, from the last [`start`](Self::start).
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Start a ripple for a press at `pointer`, in the same space as the element bounds.
    ///
    /// Recentering ripples, and elements without a size (keyboard activation), start from the
    /// center instead.
    pub fn start(&mut self, doc: &mut Document, pointer: Point) {
        let Some(ripple) = self.ripple else {
            return;
        };
        let bounds = doc.bounds(self.element).unwrap_or_default();
        self.size = Vec2::new(bounds.width(), bounds.height()).hypot() * 2.0 + 2.0;
        self.center = if self.recentering || (bounds.width() == 0.0 && bounds.height() == 0.0) {
            Point::new(bounds.width() / 2.0, bounds.height() / 2.0)
        } else {
            Point::new(pointer.x - bounds.x0, pointer.y - bounds.y0)
        };
        doc.remove_class(ripple, IS_ANIMATING);
        doc.add_class(ripple, IS_VISIBLE);
        self.write_style(doc, ripple, INITIAL_SCALE);
    }

    /// Start a ripple from the center of the element.
    pub fn start_centered(&mut self, doc: &mut Document) {
        let center = doc.bounds(self.element).unwrap_or_default().center();
        let recentering = core::mem::replace(&mut self.recentering, true);
        self.start(doc, center);
        self.recentering = recentering;
    }

    /// Grow a started ripple to full size.
    pub fn expand(&mut self, doc: &mut Document) {
        let Some(ripple) = self.ripple else {
            return;
        };
        if !doc.has_class(ripple, IS_VISIBLE) {
            return;
        }
        doc.add_class(ripple, IS_ANIMATING);
        self.write_style(doc, ripple, 1.0);
    }

    /// Fade the ripple out.
    pub fn end(&mut self, doc: &mut Document) {
        if let Some(ripple) = self.ripple {
            doc.remove_class(ripple, IS_VISIBLE);
        }
    }

    /// Returns true while a ripple is showing.
    pub fn is_visible(&self, doc: &Document) -> bool {
        self.ripple.is_some_and(|r| doc.has_class(r, IS_VISIBLE))
    }

    /// Transform from ripple-local coordinates to element coordinates at `scale`.
    ///
    /// The ripple square is centered on the press point.
    pub fn transform(&self, scale: f64) -> Affine {
        let half = self.size / 2.0;
        Affine::translate(self.center.to_vec2())
            * Affine::scale(scale)
            * Affine::translate(Vec2::new(-half, -half))
    }

    fn write_style(&self, doc: &mut Document, ripple: NodeId, scale: f64) {
        let [a, b, c, d, e, f] = self.transform(scale).as_coeffs();
        let size = self.size;
        doc.set_attribute(
            ripple,
            "style",
            format!(
                "width: {size}px; height: {size}px; transform-origin: 0 0; \
                 transform: matrix({a}, {b}, {c}, {d}, {e}, {f})"
            ),
        );
    }
}

impl Controller for Ripple {
    fn downgrade(&mut self, doc: &mut Document) -> Teardown {
        if let Some(ripple) = self.ripple.take() {
            if self.created {
                doc.remove(ripple);
            } else {
                doc.remove_class(ripple, IS_VISIBLE);
                doc.remove_class(ripple, IS_ANIMATING);
                doc.remove_attribute(ripple, "style");
            }
        }
        Teardown::Done
    }
}
