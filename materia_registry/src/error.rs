// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry errors.

use alloc::string::String;
use materia_dom::NodeId;

/// Fatal registry errors.
///
/// All of these signal a programming or configuration mistake; the registry is left
/// unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A descriptor with the same marker name is already registered.
    #[error("the provided marker has already been registered: {marker}")]
    DuplicateMarker {
        /// Marker name of the rejected descriptor.
        marker: String,
    },
    /// A descriptor with the same CSS class is already registered.
    #[error("the provided css class has already been registered: {css_class} (owned by {owner})")]
    DuplicateCssClass {
        /// The contested CSS class.
        css_class: String,
        /// Marker name of the descriptor that owns the class.
        owner: String,
    },
    /// The controller type is already bound to another descriptor.
    #[error("controller type `{type_name}` is already bound to marker {owner}")]
    ControllerAlreadyRegistered {
        /// Rust type name of the controller.
        type_name: &'static str,
        /// Marker name the controller is bound to.
        owner: String,
    },
    /// No component is registered under the marker (reservations do not count).
    #[error("unable to find a registered component for marker {marker}")]
    Unregistered {
        /// The unknown marker name.
        marker: String,
    },
    /// The node id does not refer to a live node.
    #[error("node {node:?} is not alive")]
    StaleNode {
        /// The stale id.
        node: NodeId,
    },
}
