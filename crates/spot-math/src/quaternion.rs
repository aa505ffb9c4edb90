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

//! Provides a Quaternion type for representing 3D rotations.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub};

use super::{Mat4, Vec3};
use crate::error::{MathError, Result};

/// Above this cosine, [`Quaternion::slerp`] falls back to normalized linear
/// interpolation: the two rotations are close enough that `sin(θ)` would be a
/// near-zero divisor.
pub const SLERP_LINEAR_THRESHOLD: f32 = 0.984375;

/// Represents a quaternion `w + xi + yj + zk` for 3D rotations.
///
/// Quaternions compose rotations without gimbal lock. The rotation operations
/// (conversion to and from [`Mat4`], composition, [`slerp`]) expect a unit
/// quaternion, `w² + x² + y² + z² ≈ 1`. The type does not enforce it: raw
/// construction through [`Quaternion::new`] stores the components as given, while
/// [`Quaternion::from_axis_angle`], [`Quaternion::from_mat4`] and composition
/// normalize on exit.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quaternion {
    /// The scalar (real) part.
    pub w: f32,
    /// The i component of the vector part.
    pub x: f32,
    /// The j component of the vector part.
    pub y: f32,
    /// The k component of the vector part.
    pub z: f32,
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Creates a new quaternion from its raw components.
    ///
    /// Note: This does not guarantee a unit quaternion. For creating rotations,
    /// prefer [`Quaternion::from_axis_angle`] or [`Quaternion::from_mat4`].
    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Creates a quaternion representing a rotation of `angle_radians` around `axis`.
    ///
    /// The axis is expected to be normalized already; it must not be zero. The
    /// result is normalized before it is returned.
    pub fn from_axis_angle(axis: Vec3, angle_radians: f32) -> Self {
        let half_angle = angle_radians / 2.0;
        let factor = half_angle.sin();
        let mut q = Self::new(
            half_angle.cos(),
            axis.x * factor,
            axis.y * factor,
            axis.z * factor,
        );
        q.normalize();
        q
    }

    /// Checked variant of [`Quaternion::from_axis_angle`].
    ///
    /// The axis is normalized first, so any non-zero finite axis is accepted.
    /// Returns [`MathError::ZeroAxis`] for a zero or non-finite axis.
    pub fn try_from_axis_angle(axis: Vec3, angle_radians: f32) -> Result<Self> {
        let length = axis.length();
        if length > 0.0 && length.is_finite() {
            Ok(Self::from_axis_angle(axis / length, angle_radians))
        } else {
            log::debug!("Rejecting rotation around degenerate axis {}", axis);
            Err(MathError::ZeroAxis)
        }
    }

    /// Extracts the rotation of a pure-rotation matrix.
    ///
    /// Only the upper 3x3 block is read. When the trace is positive the `w`-major
    /// formula is used; otherwise the branch is chosen by the largest diagonal
    /// element, with ties falling through to the `m(2, 2)` branch.
    pub fn from_mat4(m: &Mat4) -> Self {
        let (m00, m01, m02) = (m[(0, 0)], m[(0, 1)], m[(0, 2)]);
        let (m10, m11, m12) = (m[(1, 0)], m[(1, 1)], m[(1, 2)]);
        let (m20, m21, m22) = (m[(2, 0)], m[(2, 1)], m[(2, 2)]);

        let trace = m00 + m11 + m22;
        let mut q = if trace > 0.0 {
            let s = 0.5 / (trace + 1.0).sqrt();
            Self::new(0.25 / s, (m21 - m12) * s, (m02 - m20) * s, (m10 - m01) * s)
        } else if m00 > m11 && m00 > m22 {
            let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
            Self::new((m21 - m12) / s, 0.25 * s, (m01 + m10) / s, (m02 + m20) / s)
        } else if m11 > m22 {
            let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
            Self::new((m02 - m20) / s, (m01 + m10) / s, 0.25 * s, (m12 + m21) / s)
        } else {
            let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
            Self::new((m10 - m01) / s, (m02 + m20) / s, (m12 + m21) / s, 0.25 * s)
        };

        q.normalize();
        q
    }

    /// Computes the four-dimensional dot product, `w` included.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Calculates the squared length (magnitude) of the quaternion.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Calculates the length (magnitude) of the quaternion.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Scales this quaternion in place to unit length.
    ///
    /// A zero quaternion yields NaN components.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        self.w /= len;
        self.x /= len;
        self.y /= len;
        self.z /= len;
        self
    }

    /// Returns a unit-length copy of this quaternion.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut ret = self;
        ret.normalize();
        ret
    }

    /// Computes the conjugate of the quaternion, which negates the vector part.
    /// For a unit quaternion this is the inverse rotation.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Rotates a 3D vector by this (unit) quaternion.
    pub fn rotate_vec3(self, v: Vec3) -> Vec3 {
        let u = Vec3::new(self.x, self.y, self.z);
        let s = self.w;
        2.0 * u.dot(v) * u + (s * s - u.dot(u)) * v + 2.0 * s * u.cross(v)
    }

    /// Performs a Spherical Linear Interpolation (Slerp) between two rotations.
    ///
    /// Both inputs are normalized first, and `b` is negated when needed so the
    /// interpolation follows the shorter arc. Nearly parallel inputs (cosine above
    /// [`SLERP_LINEAR_THRESHOLD`]) use normalized linear interpolation instead.
    /// `t` is not clamped.
    pub fn slerp(mut a: Self, mut b: Self, t: f32) -> Self {
        a.normalize();
        b.normalize();

        let mut d = a.dot(b);
        if d < 0.0 {
            b = -b;
            d = -d;
        }

        if d > SLERP_LINEAR_THRESHOLD {
            let mut r = a + t * (b - a);
            r.normalize();
            return r;
        }

        let theta_ab = d.acos();
        let theta_t = theta_ab * t;
        let sin_theta_ab = theta_ab.sin();
        let sin_theta_t = theta_t.sin();

        let s0 = theta_t.cos() - d * sin_theta_t / sin_theta_ab;
        let s1 = sin_theta_t / sin_theta_ab;

        let mut r = s0 * a + s1 * b;
        r.normalize();
        r
    }
}

/// Spherically interpolates between two rotations. See [`Quaternion::slerp`].
#[inline]
pub fn slerp(a: Quaternion, b: Quaternion, t: f32) -> Quaternion {
    Quaternion::slerp(a, b, t)
}

// --- Operator Overloads ---

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl MulAssign<Quaternion> for Quaternion {
    /// Composes this rotation with `rhs` (Hamilton product) and re-normalizes.
    ///
    /// `a *= b` yields the rotation that applies `b` in `a`'s local frame; acting on
    /// a vector, `b` is applied first. The product is not commutative.
    #[inline]
    fn mul_assign(&mut self, q: Self) {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);
        self.w = w * q.w - x * q.x - y * q.y - z * q.z;
        self.x = w * q.x + x * q.w + y * q.z - z * q.y;
        self.y = w * q.y - x * q.z + y * q.w + z * q.x;
        self.z = w * q.z + x * q.y - y * q.x + z * q.w;
        self.normalize();
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// Value-returning form of `*=`: Hamilton product followed by normalization.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let mut ret = self;
        ret *= rhs;
        ret
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;
    /// Rotates a `Vec3` by this quaternion.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.rotate_vec3(rhs)
    }
}

impl Add for Quaternion {
    type Output = Self;
    /// Adds two quaternions component-wise.
    /// Note: This is not a rotation operation.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut ret = self;
        ret += rhs;
        ret
    }
}

impl AddAssign for Quaternion {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.w += rhs.w;
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Quaternion {
    type Output = Self;
    /// Subtracts two quaternions component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.w - rhs.w,
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
        )
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;
    /// Scales all components of the quaternion by a scalar.
    #[inline]
    fn mul(self, scalar: f32) -> Self::Output {
        Self::new(
            self.w * scalar,
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
        )
    }
}

impl Mul<Quaternion> for f32 {
    type Output = Quaternion;
    #[inline]
    fn mul(self, q: Quaternion) -> Self::Output {
        q * self
    }
}

impl Neg for Quaternion {
    type Output = Self;
    /// Negates all components. `-q` encodes the same rotation as `q`.
    #[inline]
    fn neg(self) -> Self::Output {
        -1.0 * self
    }
}

impl From<&Mat4> for Quaternion {
    #[inline]
    fn from(m: &Mat4) -> Self {
        Self::from_mat4(m)
    }
}

impl From<Mat4> for Quaternion {
    #[inline]
    fn from(m: Mat4) -> Self {
        Self::from_mat4(&m)
    }
}

impl fmt::Display for Quaternion {
    /// Formats the quaternion as `[w, x, y, z]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.w, self.x, self.y, self.z)
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon)
            && self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.w.relative_eq(&other.w, epsilon, max_relative)
            && self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Quaternion {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.w.ulps_eq(&other.w, epsilon, max_ulps)
            && self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{radians, EPSILON};
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    // q and -q encode the same rotation.
    fn same_rotation(q1: Quaternion, q2: Quaternion) -> bool {
        approx::relative_eq!(q1.dot(q2).abs(), 1.0, epsilon = EPSILON * 10.0)
    }

    #[test]
    fn test_identity_and_default() {
        let q = Quaternion::IDENTITY;
        assert_eq!(q, Quaternion::default());
        assert_eq!(q.w, 1.0);
        assert_eq!(q.x, 0.0);
        assert_eq!(q.y, 0.0);
        assert_eq!(q.z, 0.0);
        assert_eq!(q.length(), 1.0);
    }

    #[test]
    fn test_raw_construction_is_not_normalized() {
        let q = Quaternion::new(2.0, 0.0, 0.0, 0.0);
        assert_eq!(q.w, 2.0);
        assert_eq!(q.length(), 2.0);
    }

    #[test]
    fn test_from_identity_matrix_is_exact() {
        assert_eq!(Quaternion::from_mat4(&Mat4::IDENTITY), Quaternion::IDENTITY);
        assert_eq!(Quaternion::from(Mat4::IDENTITY), Quaternion::IDENTITY);
    }

    #[test]
    fn test_from_axis_angle() {
        let q = Quaternion::from_axis_angle(Vec3::Y, FRAC_PI_2);
        let (s, c) = (FRAC_PI_4).sin_cos();

        assert_relative_eq!(q.w, c, epsilon = EPSILON);
        assert_relative_eq!(q.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(q.y, s, epsilon = EPSILON);
        assert_relative_eq!(q.z, 0.0, epsilon = EPSILON);
        assert_relative_eq!(q.length(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_from_axis_angle_normalizes_result() {
        // A non-unit axis still yields a unit quaternion; the direction is what survives.
        let q = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 3.0), FRAC_PI_2);
        assert_relative_eq!(q.length(), 1.0, epsilon = EPSILON);
        assert_eq!(q.x, 0.0);
        assert_eq!(q.y, 0.0);
        assert!(q.z > 0.0 && q.w > 0.0);
    }

    #[test]
    fn test_try_from_axis_angle() {
        let q = Quaternion::try_from_axis_angle(Vec3::new(0.0, 5.0, 0.0), FRAC_PI_2);
        assert_relative_eq!(
            q.unwrap(),
            Quaternion::from_axis_angle(Vec3::Y, FRAC_PI_2),
            epsilon = EPSILON
        );
        assert_eq!(
            Quaternion::try_from_axis_angle(Vec3::ZERO, 1.0),
            Err(MathError::ZeroAxis)
        );
    }

    #[test]
    fn test_from_mat4_simple_rotations() {
        let angle = FRAC_PI_4;
        let cases = [
            (Mat4::from_rotation_x(angle), Vec3::X),
            (Mat4::from_rotation_y(angle), Vec3::Y),
            (Mat4::from_rotation_z(angle), Vec3::Z),
        ];
        for (m, axis) in cases {
            let expected = Quaternion::from_axis_angle(axis, angle);
            assert_relative_eq!(Quaternion::from_mat4(&m), expected, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_from_mat4_half_turns_take_each_branch() {
        // Half turns have trace -1, so the largest diagonal element picks the branch.
        for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
            let expected = Quaternion::from_axis_angle(axis, PI);
            let q = Quaternion::from_mat4(&Mat4::from_quat(expected));
            assert!(same_rotation(q, expected), "axis {axis}: got {q}");
            assert_relative_eq!(q.length(), 1.0, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_from_mat4_diagonal_tie_uses_last_branch() {
        // Half turn around (1, 0, 1)/sqrt(2): diagonal is (0, -1, 0), m00 ties m22.
        let axis = Vec3::new(1.0, 0.0, 1.0).normalized();
        let expected = Quaternion::from_axis_angle(axis, PI);
        let m = Mat4::from_quat(expected);
        assert_relative_eq!(m[(0, 0)], m[(2, 2)], epsilon = EPSILON);

        let q = Quaternion::from_mat4(&m);
        assert!(same_rotation(q, expected));
        // The m22 branch sets z = s / 4 > 0.
        assert!(q.z > 0.0);
    }

    #[test]
    fn test_matrix_round_trip() {
        let axis = Vec3::new(-1.0, 2.5, 0.7).normalized();
        let q = Quaternion::from_axis_angle(axis, 1.85);
        let back = Quaternion::from_mat4(&Mat4::from_quat(q));
        assert!(same_rotation(q, back));

        let v = Vec3::new(1.0, 1.0, 1.0);
        assert_relative_eq!(q * v, back * v, epsilon = EPSILON);
    }

    #[test]
    fn test_composition_with_identity() {
        let q = Quaternion::from_axis_angle(Vec3::Y, FRAC_PI_2);
        assert_relative_eq!(q * Quaternion::IDENTITY, q, epsilon = EPSILON);
        assert_relative_eq!(Quaternion::IDENTITY * q, q, epsilon = EPSILON);

        let mut in_place = Quaternion::IDENTITY;
        in_place *= q;
        assert_relative_eq!(in_place, q, epsilon = EPSILON);
    }

    #[test]
    fn test_composition_matches_matrix_product() {
        let a = Quaternion::from_axis_angle(Vec3::X, 0.4);
        let b = Quaternion::from_axis_angle(Vec3::new(1.0, 2.0, -1.0).normalized(), 1.1);

        let composed = Mat4::from_quat(a * b);
        let product = Mat4::from_quat(a) * Mat4::from_quat(b);
        assert!(composed.approx_eq(&product, EPSILON));
    }

    #[test]
    fn test_composition_order() {
        let rot_y = Quaternion::from_axis_angle(Vec3::Y, FRAC_PI_2);
        let rot_x = Quaternion::from_axis_angle(Vec3::X, FRAC_PI_2);

        // Z --(Y 90)--> X --(X 90)--> X
        assert_relative_eq!((rot_x * rot_y) * Vec3::Z, Vec3::X, epsilon = EPSILON);
        // Z --(X 90)--> -Y --(Y 90)--> -Y
        assert_relative_eq!((rot_y * rot_x) * Vec3::Z, -Vec3::Y, epsilon = EPSILON);
        assert!(!same_rotation(rot_x * rot_y, rot_y * rot_x));
    }

    #[test]
    fn test_composition_renormalizes() {
        let mut q = Quaternion::new(2.0, 0.0, 0.0, 0.0);
        q *= Quaternion::new(0.0, 0.0, 3.0, 0.0);
        assert_relative_eq!(q.length(), 1.0, epsilon = EPSILON);
        assert_relative_eq!(q, Quaternion::new(0.0, 0.0, 1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_conjugate_undoes_rotation() {
        let q = Quaternion::from_axis_angle(Vec3::new(1.0, 2.0, 3.0).normalized(), 0.75);
        assert_relative_eq!(q * q.conjugate(), Quaternion::IDENTITY, epsilon = EPSILON);

        let v = Vec3::new(0.3, -1.0, 2.0);
        assert_relative_eq!(q.conjugate() * (q * v), v, epsilon = EPSILON);
    }

    #[test]
    fn test_rotate_vec3() {
        let q = Quaternion::from_axis_angle(Vec3::Y, FRAC_PI_2);
        assert_relative_eq!(q * Vec3::X, Vec3::new(0.0, 0.0, -1.0), epsilon = EPSILON);

        let q = Quaternion::from_axis_angle(Vec3::X, radians(90.0));
        assert_relative_eq!(q * Vec3::Y, Vec3::Z, epsilon = EPSILON);
    }

    #[test]
    fn test_component_wise_arithmetic() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(0.5, -1.0, 1.0, 2.0);
        assert_eq!(a + b, Quaternion::new(1.5, 1.0, 4.0, 6.0));
        assert_eq!(a - b, Quaternion::new(0.5, 3.0, 2.0, 2.0));
        assert_eq!(-a, Quaternion::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(2.0 * a, a * 2.0);

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }

    #[test]
    fn test_dot_includes_w() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a.dot(a), 30.0);
        assert_eq!(Quaternion::dot(Quaternion::IDENTITY, a), 1.0);
        assert_relative_eq!(a.length(), 30.0f32.sqrt());
    }

    #[test]
    fn test_normalize_zero_quaternion_is_nan() {
        let q = Quaternion::new(0.0, 0.0, 0.0, 0.0).normalized();
        assert!(q.w.is_nan());
    }

    #[test]
    fn test_slerp_endpoints() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::from_axis_angle(Vec3::Z, FRAC_PI_2);

        assert_relative_eq!(slerp(a, b, 0.0), a, epsilon = EPSILON);
        assert_relative_eq!(slerp(a, b, 1.0), b, epsilon = EPSILON);
    }

    #[test]
    fn test_slerp_midpoint() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::from_axis_angle(Vec3::Z, FRAC_PI_2);
        let half = Quaternion::slerp(a, b, 0.5);

        assert_relative_eq!(
            half,
            Quaternion::from_axis_angle(Vec3::Z, FRAC_PI_4),
            epsilon = EPSILON
        );
        assert_relative_eq!(half.length(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_slerp_takes_shorter_arc() {
        let a = Quaternion::from_axis_angle(Vec3::Y, radians(-30.0));
        let b = Quaternion::from_axis_angle(Vec3::Y, radians(170.0));
        assert!(a.dot(b) < 0.0);

        let mid = slerp(a, b, 0.5);
        let expected = Quaternion::from_axis_angle(Vec3::Y, radians(-110.0));
        assert!(same_rotation(mid, expected));
        assert_relative_eq!(mid * Vec3::X, expected * Vec3::X, epsilon = EPSILON);
    }

    #[test]
    fn test_slerp_same_input_short_circuits() {
        let a = Quaternion::from_axis_angle(Vec3::new(1.0, 1.0, 0.0).normalized(), 0.8);
        for t in [0.0, 0.25, 0.5, 1.0] {
            assert_relative_eq!(slerp(a, a, t), a, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_slerp_nearly_parallel_uses_linear_branch() {
        let a = Quaternion::from_axis_angle(Vec3::Y, 0.1);
        let b = Quaternion::from_axis_angle(Vec3::Y, 0.2);
        assert!(a.dot(b) > SLERP_LINEAR_THRESHOLD);

        let mid = slerp(a, b, 0.5);
        assert_relative_eq!(mid.length(), 1.0, epsilon = EPSILON);
        assert_relative_eq!(
            mid,
            Quaternion::from_axis_angle(Vec3::Y, 0.15),
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_slerp_normalizes_inputs() {
        let a = Quaternion::IDENTITY * 3.0;
        let b = Quaternion::from_axis_angle(Vec3::X, FRAC_PI_2) * 0.5;
        assert_relative_eq!(slerp(a, b, 0.0), Quaternion::IDENTITY, epsilon = EPSILON);
        assert_relative_eq!(
            slerp(a, b, 1.0),
            Quaternion::from_axis_angle(Vec3::X, FRAC_PI_2),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Quaternion::IDENTITY.to_string(), "[1, 0, 0, 0]");
    }
}
