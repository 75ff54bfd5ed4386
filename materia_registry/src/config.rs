// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry configuration and the lifecycle events it emits.

use alloc::string::String;
use materia_events::types::EventFlags;

/// Attribute holding the comma-separated list of applied markers.
pub const UPGRADED_ATTRIBUTE: &str = "data-upgraded";

/// Lifecycle events emitted on upgraded and downgraded elements.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ComponentEvent {
    /// Fired before an element is upgraded; preventing its default skips the upgrade.
    Upgrading,
    /// Fired after each controller is attached.
    Upgraded,
    /// Fired after each controller is torn down.
    Downgraded,
}

impl ComponentEvent {
    /// Conventional DOM event name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Upgrading => "mdl-componentupgrading",
            Self::Upgraded => "mdl-componentupgraded",
            Self::Downgraded => "mdl-componentdowngraded",
        }
    }
}

impl core::fmt::Display for ComponentEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Tunables for a [`Registry`](crate::Registry).
///
/// The defaults match the conventional markup: the `data-upgraded` attribute, and lifecycle
/// events that bubble and are cancelable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Attribute used to persist applied markers on each element.
    pub upgraded_attribute: String,
    /// Flags of every emitted [`ComponentEvent`].
    pub event_flags: EventFlags,
    /// Fire [`ComponentEvent::Upgrading`] before upgrading an element.
    pub emit_upgrading: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            upgraded_attribute: String::from(UPGRADED_ATTRIBUTE),
            event_flags: EventFlags::BUBBLES | EventFlags::CANCELABLE,
            emit_upgrading: true,
        }
    }
}
