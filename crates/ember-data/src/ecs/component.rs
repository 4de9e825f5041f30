// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

use super::components::{Light, Material, Model, Transform};

/// Identifies one kind of component an entity can hold.
///
/// The discriminant is the index of the kind's slot in an [`Entity`](super::Entity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    /// Position, rotation and scale.
    Transform = 0,
    /// Surface shading parameters.
    Material = 1,
    /// Reference to a mesh resource.
    Model = 2,
    /// Point light source.
    Light = 3,
}

impl ComponentKind {
    /// The number of component kinds. Sizes every entity's slot array.
    ///
    /// `Light` must stay the last variant.
    pub const COUNT: usize = ComponentKind::Light as usize + 1;

    /// Every kind, in ordinal order.
    pub const ALL: [ComponentKind; Self::COUNT] = [
        ComponentKind::Transform,
        ComponentKind::Material,
        ComponentKind::Model,
        ComponentKind::Light,
    ];

    /// The ordinal of this kind, i.e. the index of its entity slot.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The fixed, human-readable name used as the document key for this kind.
    pub const fn name(self) -> &'static str {
        match self {
            ComponentKind::Transform => "Transform",
            ComponentKind::Material => "Material",
            ComponentKind::Model => "Model",
            ComponentKind::Light => "Light",
        }
    }

    /// Looks up a kind by its document key. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<ComponentKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

// Slot lookups index by ordinal, so `ALL` must hold every kind at its own index.
const _: () = {
    let mut i = 0;
    while i < ComponentKind::COUNT {
        assert!(
            ComponentKind::ALL[i].index() == i,
            "ComponentKind::ALL is out of ordinal order"
        );
        i += 1;
    }
};

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A component value, tagged with its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// A [`Transform`] component.
    Transform(Transform),
    /// A [`Material`] component.
    Material(Material),
    /// A [`Model`] component.
    Model(Model),
    /// A [`Light`] component.
    Light(Light),
}

impl Component {
    /// Returns the kind tag of this component.
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Component::Transform(_) => ComponentKind::Transform,
            Component::Material(_) => ComponentKind::Material,
            Component::Model(_) => ComponentKind::Model,
            Component::Light(_) => ComponentKind::Light,
        }
    }
}

impl From<Transform> for Component {
    fn from(value: Transform) -> Self {
        Component::Transform(value)
    }
}

impl From<Material> for Component {
    fn from(value: Material) -> Self {
        Component::Material(value)
    }
}

impl From<Model> for Component {
    fn from(value: Model) -> Self {
        Component::Model(value)
    }
}

impl From<Light> for Component {
    fn from(value: Light) -> Self {
        Component::Light(value)
    }
}
