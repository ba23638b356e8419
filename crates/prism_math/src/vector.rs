//! Vector helpers on top of glam's `DVec3`.
//!
//! Arithmetic (negate, add, subtract, scale, component-wise multiply,
//! length, normalize) comes from glam's operators and always returns a new
//! value. The operations that can fail or that glam does not offer live on
//! [`VectorExt`].

use crate::{MathError, MathResult};

/// Three-component vector used for points, directions and colors.
pub type Vec3 = glam::DVec3;

/// Linear RGB color, channels nominally in [0, 1].
pub type Color = Vec3;

/// Magnitude below which every component counts as zero.
pub const NEAR_ZERO_EPSILON: f64 = 1e-8;

/// Extra vector operations used by the renderer.
pub trait VectorExt: Sized {
    /// Divide every component by `divisor`, rejecting a zero divisor.
    fn checked_div(self, divisor: f64) -> MathResult<Self>;

    /// Component by index: 0 = x, 1 = y, 2 = z.
    fn component(self, index: usize) -> MathResult<f64>;

    /// Divide by the Euclidean length. Fails for the zero vector.
    fn unit(self) -> MathResult<Self>;

    /// True when every component is below [`NEAR_ZERO_EPSILON`] in magnitude.
    fn near_zero(self) -> bool;

    /// Mirror about `normal`: `v - 2 * dot(v, n) * n`.
    fn reflect_about(self, normal: Self) -> Self;
}

impl VectorExt for Vec3 {
    #[inline]
    fn checked_div(self, divisor: f64) -> MathResult<Self> {
        if divisor == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(self / divisor)
    }

    fn component(self, index: usize) -> MathResult<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(MathError::IndexOutOfRange { index }),
        }
    }

    #[inline]
    fn unit(self) -> MathResult<Self> {
        self.checked_div(self.length())
    }

    #[inline]
    fn near_zero(self) -> bool {
        self.abs().max_element() < NEAR_ZERO_EPSILON
    }

    #[inline]
    fn reflect_about(self, normal: Self) -> Self {
        self - 2.0 * self.dot(normal) * normal
    }
}

/// Dot product.
#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a.dot(b)
}

/// Cross product.
#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// Interpolate between `start` and `end`; `t` must lie inside `[start, end]`.
pub fn lerp(t: f64, start: f64, end: f64) -> MathResult<f64> {
    if t < start || t > end {
        return Err(MathError::LerpOutOfRange { t, start, end });
    }
    Ok((1.0 - t) * start + t * end)
}

/// Blend two vectors: `start` at t = 0, `end` at t = 1. `t` is not range checked.
#[inline]
pub fn lerp_vec3(t: f64, start: Vec3, end: Vec3) -> Vec3 {
    start * (1.0 - t) + end * t
}
