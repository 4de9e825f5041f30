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

//! Defines the Phong material component.

use ember_core::math::Vec3;

/// Phong shading parameters for an entity's surface.
///
/// The three colors are linear RGB stored in a [`Vec3`] (`x` = red,
/// `y` = green, `z` = blue).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Color reflected from ambient light.
    pub ambient: Vec3,
    /// Color reflected diffusely from direct light.
    pub diffuse: Vec3,
    /// Color of specular highlights.
    pub specular: Vec3,
    /// Specular exponent. Higher values give smaller, sharper highlights.
    pub shininess: f32,
}

impl Material {
    /// Creates a new material from its four shading parameters.
    pub fn new(ambient: Vec3, diffuse: Vec3, specular: Vec3, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }
}

impl Default for Material {
    /// A neutral grey plastic.
    fn default() -> Self {
        Self {
            ambient: Vec3::splat(0.1),
            diffuse: Vec3::splat(0.7),
            specular: Vec3::splat(0.5),
            shininess: 32.0,
        }
    }
}
