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

//! `Vec3`, used for positions, Euler rotations, scales and RGB colors.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Index, Mul, Sub};

/// Three `f32` lanes laid out as `x, y, z`.
///
/// Colors store red, green and blue in `x`, `y` and `z`. The layout is
/// `#[repr(C)]` and `Pod` so a renderer can upload slices of it directly.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
)]
#[repr(C)]
pub struct Vec3 {
    /// First lane (red for colors).
    pub x: f32,
    /// Second lane (green for colors).
    pub y: f32,
    /// Third lane (blue for colors).
    pub z: f32,
}

impl Vec3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::splat(0.0);
    /// `(1, 1, 1)`, also plain white.
    pub const ONE: Self = Self::splat(1.0);
    /// Positive X axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Positive Y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Positive Z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Builds a vector from its lanes.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Same value in every lane.
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Inverse of [`Vec3::to_array`].
    #[inline]
    pub const fn from_array(lanes: [f32; 3]) -> Self {
        Self::new(lanes[0], lanes[1], lanes[2])
    }

    /// Lanes in document order: `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(lanes: [f32; 3]) -> Self {
        Self::from_array(lanes)
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    fn index(&self, lane: usize) -> &f32 {
        match lane {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 has no lane {lane}"),
        }
    }
}
