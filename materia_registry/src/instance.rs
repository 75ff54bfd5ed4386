// Copyright 2025 the Materia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracked controller instances.

use alloc::boxed::Box;
use alloc::string::String;
use core::any::Any;

use materia_dom::NodeId;

use crate::descriptor::Controller;

/// Identifier of a created controller instance.
///
/// Ids are never reused within one registry, so an instance created after a downgrade is always
/// distinct from the one it replaces.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct InstanceId(pub(crate) u64);

/// A controller attached to an element.
pub struct Instance {
    pub(crate) id: InstanceId,
    pub(crate) node: NodeId,
    pub(crate) marker: String,
    pub(crate) widget: bool,
    pub(crate) controller: Box<dyn Controller>,
}

impl core::fmt::Debug for Instance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Instance")
            .field("id", &self.id)
            .field("node", &self.node)
            .field("marker", &self.marker)
            .field("widget", &self.widget)
            .finish_non_exhaustive()
    }
}

impl Instance {
    /// Instance id.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Element the controller is attached to.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Marker name of the descriptor that created this instance.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Returns true if the instance is reachable as a widget handle.
    pub fn is_widget(&self) -> bool {
        self.widget
    }

    /// The controller, type-erased.
    pub fn controller(&self) -> &dyn Controller {
        self.controller.as_ref()
    }

    /// The controller as `C`, if it is one.
    pub fn downcast_ref<C: Controller>(&self) -> Option<&C> {
        let any: &dyn Any = self.controller.as_ref();
        any.downcast_ref::<C>()
    }

    /// The controller as a mutable `C`, if it is one.
    pub fn downcast_mut<C: Controller>(&mut self) -> Option<&mut C> {
        let any: &mut dyn Any = self.controller.as_mut();
        any.downcast_mut::<C>()
    }
}
