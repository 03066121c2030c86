//! Projection matrices
//!
//! All projections map into GL-style clip space (depth in `[-w, w]`) and
//! validate their parameters up front, so a degenerate camera setup comes
//! back as [`MathError::Domain`] instead of a matrix full of NaN.

use std::f32::consts::PI;

use crate::{Mat4, MathError};

fn ensure_finite(values: &[(&str, f32)]) -> Result<(), MathError> {
    for (name, value) in values {
        if !value.is_finite() {
            return Err(MathError::domain(format!("{} must be finite, got {}", name, value)));
        }
    }
    Ok(())
}

fn ensure_distinct(low_name: &str, low: f32, high_name: &str, high: f32) -> Result<(), MathError> {
    if low == high {
        return Err(MathError::domain(format!(
            "{} and {} are both {}, the projection would divide by zero",
            low_name, high_name, low
        )));
    }
    Ok(())
}

/// Standard perspective projection
///
/// # Arguments
/// * `fov` - Vertical field of view in radians, within `(0, π)`
/// * `aspect` - Viewport width divided by height, positive
/// * `near`, `far` - Clip distances with `0 < near < far`
///
/// # Example
/// ```
/// use chopper_math::projection::perspective;
/// let proj = perspective(60f32.to_radians(), 16.0 / 9.0, 1.0, 2000.0).unwrap();
/// assert_eq!(proj.get(3, 2), -1.0);
/// ```
pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Result<Mat4, MathError> {
    ensure_finite(&[("fov", fov), ("aspect", aspect), ("near", near), ("far", far)])?;

    if fov <= 0.0 || fov >= PI {
        return Err(MathError::domain(format!("fov must be in (0, π) radians, got {}", fov)));
    }
    if aspect <= 0.0 {
        return Err(MathError::domain(format!("aspect must be positive, got {}", aspect)));
    }
    if near <= 0.0 {
        return Err(MathError::domain(format!("near must be positive, got {}", near)));
    }
    ensure_distinct("near", near, "far", far)?;
    if far < near {
        return Err(MathError::domain(format!(
            "far ({}) must be greater than near ({})",
            far, near
        )));
    }

    let f = (PI * 0.5 - 0.5 * fov).tan();
    let range_inv = 1.0 / (near - far);

    Ok(Mat4::from_cols_array([
        f / aspect, 0.0, 0.0, 0.0,
        0.0, f, 0.0, 0.0,
        0.0, 0.0, (near + far) * range_inv, -1.0,
        0.0, 0.0, near * far * range_inv * 2.0, 0.0,
    ]))
}

/// Orthographic projection of the box `[left, right] x [bottom, top] x [near, far]`
///
/// `near` may be greater than `far`; only equal pairs are rejected.
pub fn orthographic(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Result<Mat4, MathError> {
    ensure_finite(&[
        ("left", left),
        ("right", right),
        ("bottom", bottom),
        ("top", top),
        ("near", near),
        ("far", far),
    ])?;
    ensure_distinct("left", left, "right", right)?;
    ensure_distinct("bottom", bottom, "top", top)?;
    ensure_distinct("near", near, "far", far)?;

    Ok(Mat4::from_cols_array([
        2.0 / (right - left), 0.0, 0.0, 0.0,
        0.0, 2.0 / (top - bottom), 0.0, 0.0,
        0.0, 0.0, 2.0 / (near - far), 0.0,
        (left + right) / (left - right),
        (bottom + top) / (bottom - top),
        (near + far) / (near - far),
        1.0,
    ]))
}

/// Pixel-space projection: `(0, 0)` is the top-left corner, Y grows downward
pub fn projection(width: f32, height: f32, depth: f32) -> Result<Mat4, MathError> {
    ensure_finite(&[("width", width), ("height", height), ("depth", depth)])?;
    for (name, value) in [("width", width), ("height", height), ("depth", depth)] {
        if value == 0.0 {
            return Err(MathError::domain(format!("{} must be non-zero", name)));
        }
    }

    Ok(Mat4::from_cols_array([
        2.0 / width, 0.0, 0.0, 0.0,
        0.0, -2.0 / height, 0.0, 0.0,
        0.0, 0.0, 2.0 / depth, 0.0,
        -1.0, 1.0, 0.0, 1.0,
    ]))
}
