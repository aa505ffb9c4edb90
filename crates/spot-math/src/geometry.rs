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

//! Provides axis-aligned shape primitives and their containment and intersection tests.

use std::ops::{Mul, MulAssign};

use super::{Vec2, Vec3};

// --- Rect ---

/// An axis-aligned rectangle defined by its minimum and maximum corners.
///
/// [`Rect::new`] orders the components, so `a` is always the bottom-left corner and
/// `b` the top-right one. A rectangle built through the public fields directly is
/// expected to keep `a <= b` on both axes.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The corner with the smallest coordinates.
    pub a: Vec2,
    /// The corner with the largest coordinates.
    pub b: Vec2,
}

impl Rect {
    /// The unit square, from `(0, 0)` to `(1, 1)`.
    pub const UNIT: Self = Self {
        a: Vec2::ZERO,
        b: Vec2::ONE,
    };

    /// Creates a rectangle from two opposite corners, in any order.
    #[inline]
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            a: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            b: Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates a rectangle from its bottom-left corner and its size.
    #[inline]
    pub fn from_offset_extent(offset: Vec2, extent: Vec2) -> Self {
        Self::new(offset, offset + extent)
    }

    /// Returns the bottom-left corner.
    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.a
    }

    /// Returns the width and height.
    #[inline]
    pub fn extent(&self) -> Vec2 {
        self.b - self.a
    }

    /// Tests whether `(x, y)` lies inside the rectangle or on its border.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.a.x <= x && x <= self.b.x && self.a.y <= y && y <= self.b.y
    }

    /// Tests whether `p` lies inside the rectangle or on its border.
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.contains(p.x, p.y)
    }

    /// Tests whether the two rectangles overlap. Rectangles that only share an
    /// edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.a.x < other.b.x && other.a.x < self.b.x && self.a.y < other.b.y && other.a.y < self.b.y
    }

    /// Returns the horizontal gap between the two rectangles, or 0 when their
    /// X ranges overlap.
    #[inline]
    pub fn distance_x(&self, other: &Rect) -> f32 {
        (self.a.x.max(other.a.x) - self.b.x.min(other.b.x)).max(0.0)
    }

    /// Returns the vertical gap between the two rectangles, or 0 when their
    /// Y ranges overlap.
    #[inline]
    pub fn distance_y(&self, other: &Rect) -> f32 {
        (self.a.y.max(other.a.y) - self.b.y.min(other.b.y)).max(0.0)
    }

    /// Returns the gap on both axes. See [`Rect::distance_x`].
    #[inline]
    pub fn distance(&self, other: &Rect) -> Vec2 {
        Vec2::new(self.distance_x(other), self.distance_y(other))
    }
}

impl Mul<f32> for Rect {
    type Output = Self;
    /// Scales both corners about the origin.
    #[inline]
    fn mul(self, c: f32) -> Self::Output {
        Self::new(self.a * c, self.b * c)
    }
}

impl MulAssign<f32> for Rect {
    #[inline]
    fn mul_assign(&mut self, c: f32) {
        *self = *self * c;
    }
}

// --- Aabb ---

/// An axis-aligned box defined by its minimum and maximum corners.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    /// The corner with the smallest coordinates on all axes.
    pub a: Vec3,
    /// The corner with the largest coordinates on all axes.
    pub b: Vec3,
}

impl Aabb {
    /// Creates a new `Aabb` from two corner points.
    ///
    /// The components are ordered, so the corners can be passed in any order.
    #[inline]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            a: Vec3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            b: Vec3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Calculates the center point of the `Aabb`.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.a + self.b) * 0.5
    }

    /// Calculates the full size (width, height, depth) of the `Aabb`.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.b - self.a
    }

    /// Checks if a point is contained within or on the boundary of the `Aabb`.
    #[inline]
    pub fn contains_point(&self, p: Vec3) -> bool {
        (self.a.x <= p.x && p.x <= self.b.x)
            && (self.a.y <= p.y && p.y <= self.b.y)
            && (self.a.z <= p.z && p.z <= self.b.z)
    }

    /// Checks if this `Aabb` overlaps another one on all three axes.
    ///
    /// Boxes that only touch at the boundary do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        (self.a.x < other.b.x && other.a.x < self.b.x)
            && (self.a.y < other.b.y && other.a.y < self.b.y)
            && (self.a.z < other.b.z && other.a.z < self.b.z)
    }
}

// --- Sphere ---

/// A sphere defined by its center and radius.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    /// The center of the sphere.
    pub origin: Vec3,
    /// The radius of the sphere.
    pub radius: f32,
}

impl Sphere {
    /// Creates a sphere.
    #[inline]
    pub const fn new(origin: Vec3, radius: f32) -> Self {
        Self { origin, radius }
    }

    /// Checks if a point lies inside the sphere or on its surface.
    #[inline]
    pub fn contains_point(&self, p: Vec3) -> bool {
        (p - self.origin).length_squared() <= self.radius * self.radius
    }

    /// Checks if two spheres overlap. Touching spheres intersect.
    #[inline]
    pub fn intersects(&self, other: &Sphere) -> bool {
        let reach = self.radius + other.radius;
        (other.origin - self.origin).length_squared() <= reach * reach
    }
}
