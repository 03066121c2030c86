//! Homogeneous 4-component vector

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::Vec3;

/// Homogeneous vector with x, y, z, w components
///
/// Points carry `w = 1`, directions carry `w = 0`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };

    /// Create a new Vec4
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// A position in space (`w = 1`)
    #[inline]
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, w: 1.0 }
    }

    /// A direction (`w = 0`), unaffected by translation
    #[inline]
    pub const fn direction(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, w: 0.0 }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Extract the xyz components as an array (for vertex buffers)
    #[inline]
    pub fn xyz(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Divide through by `w`, returning `None` for points at infinity
    #[inline]
    pub fn perspective_divide(self) -> Option<Vec3> {
        if self.w == 0.0 {
            return None;
        }
        let inv = 1.0 / self.w;
        Some(Vec3::new(self.x * inv, self.y * inv, self.z * inv))
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_and_direction() {
        assert_eq!(Vec4::point(1.0, 2.0, 3.0).w, 1.0);
        assert_eq!(Vec4::direction(1.0, 2.0, 3.0).w, 0.0);
    }

    #[test]
    fn test_dot() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        // 1*5 + 2*6 + 3*7 + 4*8 = 5 + 12 + 21 + 32 = 70
        assert_eq!(a.dot(b), 70.0);
    }

    #[test]
    fn test_perspective_divide() {
        let v = Vec4::new(2.0, 4.0, -6.0, 2.0);
        assert_eq!(v.perspective_divide(), Some(Vec3::new(1.0, 2.0, -3.0)));
    }

    #[test]
    fn test_perspective_divide_at_infinity() {
        assert_eq!(Vec4::direction(1.0, 0.0, 0.0).perspective_divide(), None);
    }

    #[test]
    fn test_xyz() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.xyz(), [1.0, 2.0, 3.0]);
    }
}
