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

//! Provides a column-major 4x4 matrix for affine and projective transforms.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign};

use super::{Quaternion, Rect, Vec2, Vec3};
use crate::error::{MathError, Result};

/// A 4x4 column-major matrix, used for 3D affine and projective transformations.
///
/// The element at `(row, col)` lives at linear index `row + 4 * col`, which is also
/// its offset in memory, so the matrix can be handed to graphics APIs as-is (see
/// [`Mat4::as_slice`]).
///
/// Transforms compose right to left: in `a * b`, `b` is applied first when the
/// product acts on a column vector.
///
/// # Mutators
///
/// Every mutator exists in two forms: an in-place one taking `&mut self` and
/// returning `&mut Self` for chaining (`translate`, `scale`, `rotate_x`, ...), and
/// a value-returning one that mutates a copy (`translated`, `scaled`,
/// `rotated_x`, ...).
///
/// **`translate` and `scale` do not follow the same policy.** `translate` *adds*
/// to the translation column, so repeated calls accumulate. `scale` *overwrites*
/// the three diagonal entries, so repeated calls keep only the last value and
/// any rotation stored on the diagonal is lost. Use `Mat4::from_scale(s) * m` to
/// compose a scale instead.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [[f32; 4]; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// A 4x4 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        cols: [[0.0; 4]; 4],
    };

    /// Creates a new matrix from four columns.
    #[inline]
    pub const fn from_cols(c0: [f32; 4], c1: [f32; 4], c2: [f32; 4], c3: [f32; 4]) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Creates a matrix from 16 values in column-major order.
    #[inline]
    pub fn from_cols_array(values: [f32; 16]) -> Self {
        Self {
            cols: bytemuck::cast(values),
        }
    }

    /// Creates a matrix from up to 16 values in column-major order.
    ///
    /// Values past the sixteenth are ignored; missing values are zero.
    pub fn from_slice(values: &[f32]) -> Self {
        let mut ret = Self::ZERO;
        for (dst, src) in ret.as_mut_slice().iter_mut().zip(values) {
            *dst = *src;
        }
        ret
    }

    /// Returns the 16 elements in column-major order.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        bytemuck::cast(self.cols)
    }

    /// Views the matrix as a flat column-major slice, ready for GPU upload.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        bytemuck::cast_slice(&self.cols)
    }

    /// Mutable counterpart of [`Mat4::as_slice`].
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        bytemuck::cast_slice_mut(&mut self.cols)
    }

    /// Returns the element at linear (column-major) `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 16`.
    #[inline]
    pub fn get(&self, index: usize) -> f32 {
        assert!(index < 16, "Index out of bounds for Mat4: {index}");
        self.cols[index / 4][index % 4]
    }

    /// Returns a mutable reference to the element at linear (column-major) `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 16`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> &mut f32 {
        assert!(index < 16, "Index out of bounds for Mat4: {index}");
        &mut self.cols[index / 4][index % 4]
    }

    /// Returns a column of the matrix.
    #[inline]
    pub fn col(&self, index: usize) -> [f32; 4] {
        self[index]
    }

    /// Returns a row of the matrix.
    #[inline]
    pub fn row(&self, index: usize) -> [f32; 4] {
        [
            self[(index, 0)],
            self[(index, 1)],
            self[(index, 2)],
            self[(index, 3)],
        ]
    }

    /// Creates a translation matrix.
    #[inline]
    pub fn from_translation(v: Vec3) -> Self {
        Self::from_cols(
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [v.x, v.y, v.z, 1.0],
        )
    }

    /// Creates a non-uniform scaling matrix.
    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self::from_cols(
            [scale.x, 0.0, 0.0, 0.0],
            [0.0, scale.y, 0.0, 0.0],
            [0.0, 0.0, scale.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Creates a matrix for a right-handed rotation around the X-axis.
    ///
    /// # Arguments
    ///
    /// * `angle`: The angle of rotation in radians.
    #[inline]
    pub fn from_rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols(
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Creates a matrix for a right-handed rotation around the Y-axis.
    ///
    /// # Arguments
    ///
    /// * `angle`: The angle of rotation in radians.
    #[inline]
    pub fn from_rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols(
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Creates a matrix for a right-handed rotation around the Z-axis.
    ///
    /// # Arguments
    ///
    /// * `angle`: The angle of rotation in radians.
    #[inline]
    pub fn from_rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols(
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Creates a rotation matrix from a quaternion.
    ///
    /// The quaternion does not need to be normalized: the sandwich product is
    /// scaled by `2 / |q|²`, so `q` and `k * q` give the same matrix.
    pub fn from_quat(q: Quaternion) -> Self {
        let s = 2.0 / q.length_squared();

        let xs = s * q.x;
        let ys = s * q.y;
        let zs = s * q.z;

        let wx = q.w * xs;
        let wy = q.w * ys;
        let wz = q.w * zs;

        let xx = q.x * xs;
        let xy = q.x * ys;
        let xz = q.x * zs;

        let yy = q.y * ys;
        let yz = q.y * zs;
        let zz = q.z * zs;

        Self::from_cols(
            [1.0 - (yy + zz), xy + wz, xz - wy, 0.0],
            [xy - wz, 1.0 - (xx + zz), yz + wx, 0.0],
            [xz + wy, yz - wx, 1.0 - (xx + yy), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Returns the translation part of the matrix.
    #[inline]
    pub fn translation(&self) -> Vec3 {
        let [x, y, z, _] = self.cols[3];
        Vec3::new(x, y, z)
    }

    // --- In-place mutators ---

    /// Adds `v` to the translation column. Repeated calls accumulate.
    #[inline]
    pub fn translate(&mut self, v: Vec3) -> &mut Self {
        self.cols[3][0] += v.x;
        self.cols[3][1] += v.y;
        self.cols[3][2] += v.z;
        self
    }

    /// Adds `amount` to the X translation.
    #[inline]
    pub fn translate_x(&mut self, amount: f32) -> &mut Self {
        self.cols[3][0] += amount;
        self
    }

    /// Adds `amount` to the Y translation.
    #[inline]
    pub fn translate_y(&mut self, amount: f32) -> &mut Self {
        self.cols[3][1] += amount;
        self
    }

    /// Adds `amount` to the Z translation.
    #[inline]
    pub fn translate_z(&mut self, amount: f32) -> &mut Self {
        self.cols[3][2] += amount;
        self
    }

    /// Overwrites the three diagonal scale entries with `scale`.
    ///
    /// Unlike [`Mat4::translate`], this does not compose with the current value.
    #[inline]
    pub fn scale(&mut self, scale: Vec3) -> &mut Self {
        self.cols[0][0] = scale.x;
        self.cols[1][1] = scale.y;
        self.cols[2][2] = scale.z;
        self
    }

    /// Overwrites the X scale entry.
    #[inline]
    pub fn scale_x(&mut self, scale: f32) -> &mut Self {
        self.cols[0][0] = scale;
        self
    }

    /// Overwrites the Y scale entry.
    #[inline]
    pub fn scale_y(&mut self, scale: f32) -> &mut Self {
        self.cols[1][1] = scale;
        self
    }

    /// Overwrites the Z scale entry.
    #[inline]
    pub fn scale_z(&mut self, scale: f32) -> &mut Self {
        self.cols[2][2] = scale;
        self
    }

    /// Applies the rotation `q` after the current transform: `*self = R(q) * *self`.
    #[inline]
    pub fn rotate(&mut self, q: Quaternion) -> &mut Self {
        *self = Self::from_quat(q) * *self;
        self
    }

    /// Applies a rotation around the X-axis after the current transform.
    #[inline]
    pub fn rotate_x(&mut self, angle: f32) -> &mut Self {
        *self = Self::from_rotation_x(angle) * *self;
        self
    }

    /// Applies a rotation around the Y-axis after the current transform.
    #[inline]
    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        *self = Self::from_rotation_y(angle) * *self;
        self
    }

    /// Applies a rotation around the Z-axis after the current transform.
    #[inline]
    pub fn rotate_z(&mut self, angle: f32) -> &mut Self {
        *self = Self::from_rotation_z(angle) * *self;
        self
    }

    // --- Value-returning forms ---

    /// Returns a copy with `v` added to the translation column.
    #[inline]
    pub fn translated(&self, v: Vec3) -> Self {
        let mut ret = *self;
        ret.translate(v);
        ret
    }

    /// Returns a copy with `amount` added to the X translation.
    #[inline]
    pub fn translated_x(&self, amount: f32) -> Self {
        let mut ret = *self;
        ret.translate_x(amount);
        ret
    }

    /// Returns a copy with `amount` added to the Y translation.
    #[inline]
    pub fn translated_y(&self, amount: f32) -> Self {
        let mut ret = *self;
        ret.translate_y(amount);
        ret
    }

    /// Returns a copy with `amount` added to the Z translation.
    #[inline]
    pub fn translated_z(&self, amount: f32) -> Self {
        let mut ret = *self;
        ret.translate_z(amount);
        ret
    }

    /// Returns a copy whose diagonal scale entries are replaced by `scale`.
    #[inline]
    pub fn scaled(&self, scale: Vec3) -> Self {
        let mut ret = *self;
        ret.scale(scale);
        ret
    }

    /// Returns a copy whose X scale entry is replaced by `scale`.
    #[inline]
    pub fn scaled_x(&self, scale: f32) -> Self {
        let mut ret = *self;
        ret.scale_x(scale);
        ret
    }

    /// Returns a copy whose Y scale entry is replaced by `scale`.
    #[inline]
    pub fn scaled_y(&self, scale: f32) -> Self {
        let mut ret = *self;
        ret.scale_y(scale);
        ret
    }

    /// Returns a copy whose Z scale entry is replaced by `scale`.
    #[inline]
    pub fn scaled_z(&self, scale: f32) -> Self {
        let mut ret = *self;
        ret.scale_z(scale);
        ret
    }

    /// Returns `R(q) * self`.
    #[inline]
    pub fn rotated(&self, q: Quaternion) -> Self {
        let mut ret = *self;
        ret.rotate(q);
        ret
    }

    /// Returns `Rx(angle) * self`.
    #[inline]
    pub fn rotated_x(&self, angle: f32) -> Self {
        let mut ret = *self;
        ret.rotate_x(angle);
        ret
    }

    /// Returns `Ry(angle) * self`.
    #[inline]
    pub fn rotated_y(&self, angle: f32) -> Self {
        let mut ret = *self;
        ret.rotate_y(angle);
        ret
    }

    /// Returns `Rz(angle) * self`.
    #[inline]
    pub fn rotated_z(&self, angle: f32) -> Self {
        let mut ret = *self;
        ret.rotate_z(angle);
        ret
    }

    // --- Transforms ---

    #[inline]
    fn transform_homogeneous(&self, v: Vec3, w: f32) -> [f32; 4] {
        let c = &self.cols;
        [
            c[0][0] * v.x + c[1][0] * v.y + c[2][0] * v.z + c[3][0] * w,
            c[0][1] * v.x + c[1][1] * v.y + c[2][1] * v.z + c[3][1] * w,
            c[0][2] * v.x + c[1][2] * v.y + c[2][2] * v.z + c[3][2] * w,
            c[0][3] * v.x + c[1][3] * v.y + c[2][3] * v.z + c[3][3] * w,
        ]
    }

    /// Transforms a point: `p` is extended to `(x, y, z, 1)` and the result is
    /// divided by its `w` component.
    ///
    /// The resulting `w` must not be zero; if it is, the components are
    /// infinite or NaN. See [`Mat4::try_transform_point`] for the checked form.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let [x, y, z, w] = self.transform_homogeneous(p, 1.0);
        Vec3::new(x / w, y / w, z / w)
    }

    /// Checked variant of [`Mat4::transform_point`].
    ///
    /// Returns [`MathError::DegenerateHomogeneous`] when the resulting `w` is zero
    /// or not finite.
    pub fn try_transform_point(&self, p: Vec3) -> Result<Vec3> {
        let [x, y, z, w] = self.transform_homogeneous(p, 1.0);
        if w == 0.0 || !w.is_finite() {
            log::debug!("Cannot project point {} (w = {})", p, w);
            return Err(MathError::DegenerateHomogeneous { w });
        }
        Ok(Vec3::new(x / w, y / w, z / w))
    }

    /// Transforms a direction: `v` is extended to `(x, y, z, 0)`, so translation
    /// does not apply and no divide happens.
    #[inline]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        let [x, y, z, _] = self.transform_homogeneous(v, 0.0);
        Vec3::new(x, y, z)
    }

    /// Compares every element with an absolute tolerance of `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| crate::approx_eq_eps(*a, *b, epsilon))
    }
}

// --- Operator Overloads ---

impl Default for Mat4 {
    /// Returns the 4x4 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<usize> for Mat4 {
    type Output = [f32; 4];
    /// Returns the column at `index`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match self.cols.get(index) {
            Some(col) => col,
            None => panic!("Index out of bounds for Mat4 column: {index}"),
        }
    }
}

impl IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.cols.get_mut(index) {
            Some(col) => col,
            None => panic!("Index out of bounds for Mat4 column: {index}"),
        }
    }
}

impl Index<(usize, usize)> for Mat4 {
    type Output = f32;
    /// Returns the element at `(row, col)`.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < 4 && col < 4, "Row or column out of bounds for Mat4: ({row}, {col})");
        &self.cols[col][row]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(row < 4 && col < 4, "Row or column out of bounds for Mat4: ({row}, {col})");
        &mut self.cols[col][row]
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat4`. Note that matrix multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut cols = [[0.0; 4]; 4];
        for (j, col) in cols.iter_mut().enumerate() {
            for (i, value) in col.iter_mut().enumerate() {
                *value = (0..4).map(|k| self.cols[k][i] * rhs.cols[j][k]).sum();
            }
        }
        Self { cols }
    }
}

impl MulAssign<Mat4> for Mat4 {
    /// `self = self * rhs`.
    #[inline]
    fn mul_assign(&mut self, rhs: Mat4) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Mat4 {
    type Output = Vec3;
    /// Transforms a point, with perspective divide. See [`Mat4::transform_point`].
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.transform_point(rhs)
    }
}

impl Mul<Vec2> for Mat4 {
    type Output = Vec2;
    /// Transforms a 2D point lying in the `z = 0` plane and drops the resulting z.
    #[inline]
    fn mul(self, rhs: Vec2) -> Self::Output {
        let p = self.transform_point(Vec3::from(rhs));
        Vec2::new(p.x, p.y)
    }
}

impl Mul<Rect> for Mat4 {
    type Output = Rect;
    /// Transforms both corners of the rectangle and re-orders them into min/max
    /// corners. Under rotation this is the box spanned by the two moved corners,
    /// not a bound of the rotated rectangle.
    #[inline]
    fn mul(self, rhs: Rect) -> Self::Output {
        Rect::new(self * rhs.a, self * rhs.b)
    }
}

impl Add for Mat4 {
    type Output = Self;
    /// Adds two matrices element-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut ret = self;
        ret += rhs;
        ret
    }
}

impl AddAssign for Mat4 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a += *b;
        }
    }
}

impl From<Quaternion> for Mat4 {
    #[inline]
    fn from(q: Quaternion) -> Self {
        Self::from_quat(q)
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Mat4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl UlpsEq for Mat4 {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

// --- Tests ---
