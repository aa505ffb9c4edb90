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

//! Provides an integer size type for pixel dimensions.
//!
//! `Size` describes the dimensions of textures, windows or regions within them. It
//! uses unsigned integer components, so scaling by a float truncates.

use std::fmt;
use std::ops::{Div, DivAssign, Mul, MulAssign};

/// A two-dimensional size, typically representing width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width component of the size.
    pub width: u32,
    /// The height component of the size.
    pub height: u32,
}

impl Size {
    /// An empty size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

// --- Operator Overloads ---

impl MulAssign<u32> for Size {
    #[inline]
    fn mul_assign(&mut self, f: u32) {
        self.width *= f;
        self.height *= f;
    }
}

impl Mul<u32> for Size {
    type Output = Self;
    #[inline]
    fn mul(mut self, f: u32) -> Self::Output {
        self *= f;
        self
    }
}

impl MulAssign<f32> for Size {
    /// Scales both dimensions, truncating toward zero. Negative results saturate to 0.
    #[inline]
    fn mul_assign(&mut self, f: f32) {
        self.width = (self.width as f32 * f) as u32;
        self.height = (self.height as f32 * f) as u32;
    }
}

impl Mul<f32> for Size {
    type Output = Self;
    #[inline]
    fn mul(mut self, f: f32) -> Self::Output {
        self *= f;
        self
    }
}

impl DivAssign<u32> for Size {
    /// Integer division of both dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `i` is zero.
    #[inline]
    fn div_assign(&mut self, i: u32) {
        self.width /= i;
        self.height /= i;
    }
}

impl Div<u32> for Size {
    type Output = Self;
    #[inline]
    fn div(mut self, i: u32) -> Self::Output {
        self /= i;
        self
    }
}

impl fmt::Display for Size {
    /// Formats the size as `[width, height]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.width, self.height)
    }
}
