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

//! # Spot Math
//!
//! Small-vector and small-matrix algebra for real-time graphics and geometry code.
//!
//! The crate provides 2D/3D vectors, a column-major 4x4 affine/projective matrix,
//! a rotation quaternion and a handful of axis-aligned shape primitives. Every type
//! is a plain `Copy` value with no heap ownership, and every shared constant
//! (`Mat4::IDENTITY`, `Vec3::ZERO`, ...) is a `const`, so concurrent readers need no
//! synchronisation.
//!
//! All angular functions operate in **radians** unless explicitly specified
//! otherwise (see [`radians`] and [`degrees`]).
//!
//! ## Conventions
//!
//! * Right-handed coordinates and column vectors: `M * v`.
//! * `A * B` applied to a vector applies `B` first, then `A`.
//! * `==` is exact component-wise comparison. Use the [`approx`] traits or the
//!   `approx_eq` helpers when comparing results of trigonometric computations.

#![warn(missing_docs)]

pub mod dimension;
pub mod error;
pub mod geometry;
pub mod matrix;
pub mod quaternion;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::dimension::Size;
pub use self::error::{MathError, Result};
pub use self::geometry::{Aabb, Rect, Sphere};
pub use self::matrix::Mat4;
pub use self::quaternion::{slerp, Quaternion, SLERP_LINEAR_THRESHOLD};
pub use self::vector::{Vec2, Vec3};

// --- Fundamental Constants ---

/// Single-precision π.
pub const PI: f32 = std::f32::consts::PI;

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

// --- Utility Functions ---

/// Converts an angle from degrees to radians.
///
/// The conversion divides by 180 before multiplying by π so that the common
/// multiples of 90° map exactly onto multiples of [`PI`].
///
/// # Examples
///
/// ```
/// use spot_math::{radians, PI};
/// assert_eq!(radians(90.0), PI / 2.0);
/// assert_eq!(radians(180.0), PI);
/// ```
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees / 180.0 * PI
}

/// Converts an angle from radians to degrees.
///
/// # Examples
///
/// ```
/// use spot_math::{degrees, PI};
/// assert_eq!(degrees(PI), 180.0);
/// ```
#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians / PI * 180.0
}

/// Performs an approximate equality comparison between two floats with a custom tolerance.
///
/// # Examples
///
/// ```
/// use spot_math::approx_eq_eps;
/// assert!(approx_eq_eps(0.001, 0.002, 1e-2));
/// assert!(!approx_eq_eps(0.001, 0.002, 1e-4));
/// ```
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// Performs an approximate equality comparison using the crate's default [`EPSILON`].
///
/// # Examples
///
/// ```
/// use spot_math::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}
