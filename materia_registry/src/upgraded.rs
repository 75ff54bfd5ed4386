// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The applied-markers list persisted on each upgraded element.

use alloc::string::String;
use alloc::vec::Vec;

/// Markers applied to one element, in order of first application.
///
/// Serialized as a comma-separated attribute value. Parsing skips empty segments and repeated
/// names, so `",A,B,A"` reads as `["A", "B"]` and writes back as `"A,B"`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpgradedList {
    markers: Vec<String>,
}

impl UpgradedList {
    /// Parse an attribute value; `None` is the empty list.
    pub fn parse(attribute: Option<&str>) -> Self {
        let mut list = Self::default();
        for marker in attribute.unwrap_or_default().split(',') {
            if !marker.is_empty() {
                list.push(marker);
            }
        }
        list
    }

    /// Returns true if `marker` has been applied.
    pub fn contains(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }

    /// Append `marker`; returns false if it was already present.
    pub fn push(&mut self, marker: &str) -> bool {
        if self.contains(marker) {
            return false;
        }
        self.markers.push(String::from(marker));
        true
    }

    /// Remove `marker`; returns false if it was not present.
    pub fn remove(&mut self, marker: &str) -> bool {
        let before = self.markers.len();
        self.markers.retain(|m| m != marker);
        before != self.markers.len()
    }

    /// Applied markers in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.markers.iter().map(String::as_str)
    }

    /// Number of applied markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Returns true if nothing has been applied.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Attribute value for this list.
    pub fn to_attribute(&self) -> String {
        self.markers.join(",")
    }
}
