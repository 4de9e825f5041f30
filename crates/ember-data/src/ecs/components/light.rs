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

//! Defines the Light component.
//!
//! A light is a point source with its own world-space position; it does not
//! read the entity's `Transform`.

use ember_core::math::Vec3;

/// A component that adds a point light source to an entity.
///
/// # Examples
///
/// ```
/// use ember_core::math::Vec3;
/// use ember_data::ecs::Light;
///
/// let sun = Light::new(Vec3::new(0.0, 10.0, 0.0), Vec3::ONE);
/// assert_eq!(sun.color, Vec3::ONE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// World-space position of the light.
    pub position: Vec3,
    /// Linear RGB color of the emitted light.
    pub color: Vec3,
}

impl Light {
    /// Creates a new light at `position` emitting `color`.
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }

    /// Creates a white light at `position`.
    pub fn white(position: Vec3) -> Self {
        Self::new(position, Vec3::ONE)
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::white(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_default() {
        let light = Light::default();
        assert_eq!(light.position, Vec3::ZERO);
        assert_eq!(light.color, Vec3::ONE);
    }

    #[test]
    fn test_light_white() {
        let light = Light::white(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(light.color, Vec3::ONE);
        assert_eq!(light.position, Vec3::new(1.0, 2.0, 3.0));
    }
}
