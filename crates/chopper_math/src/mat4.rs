//! 4x4 homogeneous transform matrices
//!
//! Storage is column-major: the element at row `r`, column `c` lives at index
//! `c * 4 + r`, which is also the layout a shader expects for a `mat4x4<f32>`
//! uniform.
//!
//! ## Multiplication order
//!
//! Matrices act on column vectors: [`transform_vector`] computes `M * v`.
//! [`multiply`]`(a, b)` returns the product `a * b`, so when the result is
//! applied to a point, `b` acts first and `a` second. The helpers
//! [`translate`], [`x_rotate`], [`y_rotate`], [`z_rotate`] and [`scale`]
//! append their elementary transform on the right, which means it is applied
//! to points *before* everything already in `m`.
//!
//! Reading the same 16 numbers as row-major matrices acting on row vectors,
//! `multiply(a, b)` is `b * a`. Swapping the operands never fails, it just
//! silently builds a different transform, so the order is pinned by tests.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::{MathError, Vec4};

/// Determinants at or below this magnitude are treated as singular
pub const SINGULAR_EPSILON: f32 = 1e-10;

/// 4x4 matrix (column-major)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat4 {
    /// Raw column-major elements
    pub m: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Mat4::IDENTITY
    }
}

impl Mat4 {
    /// Identity matrix
    pub const IDENTITY: Mat4 = Mat4 {
        m: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Build from 16 column-major elements
    #[inline]
    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// Build from rows as written on paper
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let mut m = [0.0f32; 16];
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                m[c * 4 + r] = *value;
            }
        }
        Self { m }
    }

    /// Element at `row`, `col`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[col * 4 + row]
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Mat4;
    #[inline]
    fn mul(self, rhs: Mat4) -> Mat4 {
        multiply(self, rhs)
    }
}

impl std::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;
    #[inline]
    fn mul(self, v: Vec4) -> Vec4 {
        transform_vector(self, v)
    }
}

/// The identity matrix
#[inline]
pub fn identity() -> Mat4 {
    Mat4::IDENTITY
}

/// Translation by `(tx, ty, tz)`
pub fn translation(tx: f32, ty: f32, tz: f32) -> Mat4 {
    Mat4::from_cols_array([
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        tx, ty, tz, 1.0,
    ])
}

/// Rotation about the X axis; +Y turns toward +Z for positive angles
pub fn x_rotation(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();

    Mat4::from_cols_array([
        1.0, 0.0, 0.0, 0.0,
        0.0, c, s, 0.0,
        0.0, -s, c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Rotation about the Y axis; +Z turns toward +X for positive angles
pub fn y_rotation(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();

    Mat4::from_cols_array([
        c, 0.0, -s, 0.0,
        0.0, 1.0, 0.0, 0.0,
        s, 0.0, c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Rotation about the Z axis; +X turns toward +Y for positive angles
pub fn z_rotation(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();

    Mat4::from_cols_array([
        c, s, 0.0, 0.0,
        -s, c, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Non-uniform scale
pub fn scaling(sx: f32, sy: f32, sz: f32) -> Mat4 {
    Mat4::from_cols_array([
        sx, 0.0, 0.0, 0.0,
        0.0, sy, 0.0, 0.0,
        0.0, 0.0, sz, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Multiply two 4x4 matrices: result = a * b
///
/// Applied to a column vector, `b` acts first, then `a`.
#[allow(clippy::needless_range_loop)]
pub fn multiply(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [0.0f32; 16];

    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a.m[k * 4 + row] * b.m[col * 4 + k];
            }
            result[col * 4 + row] = sum;
        }
    }

    Mat4::from_cols_array(result)
}

/// `m * translation(tx, ty, tz)`
pub fn translate(m: Mat4, tx: f32, ty: f32, tz: f32) -> Mat4 {
    multiply(m, translation(tx, ty, tz))
}

/// `m * x_rotation(angle)`
pub fn x_rotate(m: Mat4, angle: f32) -> Mat4 {
    multiply(m, x_rotation(angle))
}

/// `m * y_rotation(angle)`
pub fn y_rotate(m: Mat4, angle: f32) -> Mat4 {
    multiply(m, y_rotation(angle))
}

/// `m * z_rotation(angle)`
pub fn z_rotate(m: Mat4, angle: f32) -> Mat4 {
    multiply(m, z_rotation(angle))
}

/// `m * scaling(sx, sy, sz)`
pub fn scale(m: Mat4, sx: f32, sy: f32, sz: f32) -> Mat4 {
    multiply(m, scaling(sx, sy, sz))
}

/// Transpose a matrix
pub fn transpose(m: Mat4) -> Mat4 {
    let mut result = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            result[row * 4 + col] = m.m[col * 4 + row];
        }
    }
    Mat4::from_cols_array(result)
}

/// Transform a Vec4 by a 4x4 matrix
///
/// result = M * v
pub fn transform_vector(m: Mat4, v: Vec4) -> Vec4 {
    let v = v.to_array();
    let mut dst = [0.0f32; 4];
    for (i, out) in dst.iter_mut().enumerate() {
        for (j, component) in v.iter().enumerate() {
            *out += component * m.m[j * 4 + i];
        }
    }
    Vec4::from(dst)
}

/// Determinant via cofactor expansion along the first column
pub fn determinant(m: Mat4) -> f32 {
    adjugate(m).1
}

/// General inverse via full 4x4 cofactor expansion
///
/// Works for any invertible matrix, including ones carrying a perspective
/// row. Returns [`MathError::SingularMatrix`] when the determinant is within
/// [`SINGULAR_EPSILON`] of zero or not finite.
pub fn inverse(m: Mat4) -> Result<Mat4, MathError> {
    let (adj, det) = adjugate(m);

    if !det.is_finite() || det.abs() <= SINGULAR_EPSILON {
        return Err(MathError::SingularMatrix { determinant: det });
    }

    let d = 1.0 / det;
    let mut out = adj;
    for value in out.iter_mut() {
        *value *= d;
    }
    Ok(Mat4::from_cols_array(out))
}

/// Adjugate (transposed cofactor matrix, column-major) and determinant
///
/// `mCR` below is column C, row R. The 24 paired products are 2x2 minors
/// of the lower (tmp 0..11) and upper (tmp 12..23) halves.
fn adjugate(m: Mat4) -> ([f32; 16], f32) {
    let m = &m.m;
    let m00 = m[0];
    let m01 = m[1];
    let m02 = m[2];
    let m03 = m[3];
    let m10 = m[4];
    let m11 = m[5];
    let m12 = m[6];
    let m13 = m[7];
    let m20 = m[8];
    let m21 = m[9];
    let m22 = m[10];
    let m23 = m[11];
    let m30 = m[12];
    let m31 = m[13];
    let m32 = m[14];
    let m33 = m[15];

    let tmp_0 = m22 * m33;
    let tmp_1 = m32 * m23;
    let tmp_2 = m12 * m33;
    let tmp_3 = m32 * m13;
    let tmp_4 = m12 * m23;
    let tmp_5 = m22 * m13;
    let tmp_6 = m02 * m33;
    let tmp_7 = m32 * m03;
    let tmp_8 = m02 * m23;
    let tmp_9 = m22 * m03;
    let tmp_10 = m02 * m13;
    let tmp_11 = m12 * m03;
    let tmp_12 = m20 * m31;
    let tmp_13 = m30 * m21;
    let tmp_14 = m10 * m31;
    let tmp_15 = m30 * m11;
    let tmp_16 = m10 * m21;
    let tmp_17 = m20 * m11;
    let tmp_18 = m00 * m31;
    let tmp_19 = m30 * m01;
    let tmp_20 = m00 * m21;
    let tmp_21 = m20 * m01;
    let tmp_22 = m00 * m11;
    let tmp_23 = m10 * m01;

    let t0 = (tmp_0 * m11 + tmp_3 * m21 + tmp_4 * m31)
        - (tmp_1 * m11 + tmp_2 * m21 + tmp_5 * m31);
    let t1 = (tmp_1 * m01 + tmp_6 * m21 + tmp_9 * m31)
        - (tmp_0 * m01 + tmp_7 * m21 + tmp_8 * m31);
    let t2 = (tmp_2 * m01 + tmp_7 * m11 + tmp_10 * m31)
        - (tmp_3 * m01 + tmp_6 * m11 + tmp_11 * m31);
    let t3 = (tmp_5 * m01 + tmp_8 * m11 + tmp_11 * m21)
        - (tmp_4 * m01 + tmp_9 * m11 + tmp_10 * m21);

    let det = m00 * t0 + m10 * t1 + m20 * t2 + m30 * t3;

    let adj = [
        t0,
        t1,
        t2,
        t3,
        (tmp_1 * m10 + tmp_2 * m20 + tmp_5 * m30)
            - (tmp_0 * m10 + tmp_3 * m20 + tmp_4 * m30),
        (tmp_0 * m00 + tmp_7 * m20 + tmp_8 * m30)
            - (tmp_1 * m00 + tmp_6 * m20 + tmp_9 * m30),
        (tmp_3 * m00 + tmp_6 * m10 + tmp_11 * m30)
            - (tmp_2 * m00 + tmp_7 * m10 + tmp_10 * m30),
        (tmp_4 * m00 + tmp_9 * m10 + tmp_10 * m20)
            - (tmp_5 * m00 + tmp_8 * m10 + tmp_11 * m20),
        (tmp_12 * m13 + tmp_15 * m23 + tmp_16 * m33)
            - (tmp_13 * m13 + tmp_14 * m23 + tmp_17 * m33),
        (tmp_13 * m03 + tmp_18 * m23 + tmp_21 * m33)
            - (tmp_12 * m03 + tmp_19 * m23 + tmp_20 * m33),
        (tmp_14 * m03 + tmp_19 * m13 + tmp_22 * m33)
            - (tmp_15 * m03 + tmp_18 * m13 + tmp_23 * m33),
        (tmp_17 * m03 + tmp_20 * m13 + tmp_23 * m23)
            - (tmp_16 * m03 + tmp_21 * m13 + tmp_22 * m23),
        (tmp_14 * m22 + tmp_17 * m32 + tmp_13 * m12)
            - (tmp_16 * m32 + tmp_12 * m12 + tmp_15 * m22),
        (tmp_20 * m32 + tmp_12 * m02 + tmp_19 * m22)
            - (tmp_18 * m22 + tmp_21 * m32 + tmp_13 * m02),
        (tmp_18 * m12 + tmp_23 * m32 + tmp_15 * m02)
            - (tmp_22 * m32 + tmp_14 * m02 + tmp_19 * m12),
        (tmp_22 * m22 + tmp_16 * m02 + tmp_21 * m12)
            - (tmp_20 * m12 + tmp_23 * m22 + tmp_17 * m02),
    ];

    (adj, det)
}
