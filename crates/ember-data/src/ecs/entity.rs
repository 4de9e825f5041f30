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

use super::component::{Component, ComponentKind};
use super::components::{Light, Material, Model, Transform};

/// A named holder of at most one component per [`ComponentKind`].
///
/// Components live in a fixed array with one slot per kind. The only way to
/// fill a slot is [`Entity::insert`], which derives the slot from the
/// component's own tag, so a slot never holds a component of another kind.
/// An empty slot means the entity lacks that capability.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entity {
    name: String,
    slots: [Option<Component>; ComponentKind::COUNT],
}

impl Entity {
    /// Creates an entity with the given display name and no components.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: Default::default(),
        }
    }

    /// Builder-style variant of [`Entity::insert`].
    pub fn with(mut self, component: impl Into<Component>) -> Self {
        self.insert(component);
        self
    }

    /// The entity's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the entity.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Stores `component` in the slot of its kind.
    ///
    /// Returns the component previously held in that slot, if any.
    pub fn insert(&mut self, component: impl Into<Component>) -> Option<Component> {
        let component = component.into();
        let kind = component.kind();
        let previous = self.slots[kind.index()].replace(component);
        if previous.is_some() {
            log::trace!("Entity '{}': replaced existing {} component", self.name, kind);
        }
        previous
    }

    /// Empties the slot of `kind`, returning its component.
    pub fn remove(&mut self, kind: ComponentKind) -> Option<Component> {
        self.slots[kind.index()].take()
    }

    /// Returns the component of `kind`, if the entity has one.
    pub fn get(&self, kind: ComponentKind) -> Option<&Component> {
        self.slots[kind.index()].as_ref()
    }

    /// Returns `true` if the slot of `kind` is occupied.
    pub fn has(&self, kind: ComponentKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    /// Iterates over the occupied slots in kind ordinal order.
    pub fn components(&self) -> impl Iterator<Item = &Component> + '_ {
        self.slots.iter().flatten()
    }

    /// Number of occupied slots.
    pub fn component_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// The entity's transform, if any.
    pub fn transform(&self) -> Option<&Transform> {
        match self.get(ComponentKind::Transform) {
            Some(Component::Transform(t)) => Some(t),
            _ => None,
        }
    }

    /// Mutable access to the entity's transform, if any.
    pub fn transform_mut(&mut self) -> Option<&mut Transform> {
        match self.slots[ComponentKind::Transform.index()].as_mut() {
            Some(Component::Transform(t)) => Some(t),
            _ => None,
        }
    }

    /// The entity's material, if any.
    pub fn material(&self) -> Option<&Material> {
        match self.get(ComponentKind::Material) {
            Some(Component::Material(m)) => Some(m),
            _ => None,
        }
    }

    /// Mutable access to the entity's material, if any.
    pub fn material_mut(&mut self) -> Option<&mut Material> {
        match self.slots[ComponentKind::Material.index()].as_mut() {
            Some(Component::Material(m)) => Some(m),
            _ => None,
        }
    }

    /// The entity's model, if any.
    pub fn model(&self) -> Option<&Model> {
        match self.get(ComponentKind::Model) {
            Some(Component::Model(m)) => Some(m),
            _ => None,
        }
    }

    /// Mutable access to the entity's model, if any.
    pub fn model_mut(&mut self) -> Option<&mut Model> {
        match self.slots[ComponentKind::Model.index()].as_mut() {
            Some(Component::Model(m)) => Some(m),
            _ => None,
        }
    }

    /// The entity's light, if any.
    pub fn light(&self) -> Option<&Light> {
        match self.get(ComponentKind::Light) {
            Some(Component::Light(l)) => Some(l),
            _ => None,
        }
    }

    /// Mutable access to the entity's light, if any.
    pub fn light_mut(&mut self) -> Option<&mut Light> {
        match self.slots[ComponentKind::Light.index()].as_mut() {
            Some(Component::Light(l)) => Some(l),
            _ => None,
        }
    }
}
