//! Camera for ray generation.
//!
//! A fixed pinhole at the origin looking down -Z. The viewport is two world
//! units tall, one unit in front of the eye, and as wide as the image aspect
//! ratio requires.

use crate::{RenderError, RenderResult};
use prism_math::{Ray, Vec3};

/// Default image width in pixels.
pub const DEFAULT_IMAGE_WIDTH: u32 = 640;
/// Default image height in pixels.
pub const DEFAULT_IMAGE_HEIGHT: u32 = 480;

const VIEWPORT_HEIGHT: f64 = 2.0;
const FOCAL_LENGTH: f64 = 1.0;

/// Camera for generating rays into the scene.
///
/// Everything is derived from the image size at construction; there is no
/// mutable state, so a clone is the same as building from width and height.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    // Image settings
    image_width: u32,
    image_height: u32,

    // Derived viewport
    aspect_ratio: f64,
    viewport_width: f64,
    viewport_height: f64,
    focal_length: f64,

    origin: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    lower_left_corner: Vec3,
}

impl Camera {
    /// Create a camera for an image of the given size.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        let aspect_ratio = image_width as f64 / image_height as f64;
        let viewport_height = VIEWPORT_HEIGHT;
        let viewport_width = aspect_ratio * viewport_height;

        let origin = Vec3::ZERO;
        let horizontal = Vec3::new(viewport_width, 0.0, 0.0);
        let vertical = Vec3::new(0.0, viewport_height, 0.0);
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - Vec3::new(0.0, 0.0, FOCAL_LENGTH);

        Self {
            image_width,
            image_height,
            aspect_ratio,
            viewport_width,
            viewport_height,
            focal_length: FOCAL_LENGTH,
            origin,
            horizontal,
            vertical,
            lower_left_corner,
        }
    }

    /// Generate the ray through pixel coordinate (x, y).
    ///
    /// Coordinates may be fractional but must lie in `[0, width) x [0, height)`;
    /// they are never clamped. y grows upward.
    pub fn get_ray(&self, x: f64, y: f64) -> RenderResult<Ray> {
        check_coord("x", x, self.image_width)?;
        check_coord("y", y, self.image_height)?;

        let u = x / (self.image_width as f64 - 1.0);
        let v = y / (self.image_height as f64 - 1.0);
        let direction =
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin;

        Ok(Ray::new(self.origin, direction))
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn focal_length(&self) -> f64 {
        self.focal_length
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn lower_left_corner(&self) -> Vec3 {
        self.lower_left_corner
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_WIDTH, DEFAULT_IMAGE_HEIGHT)
    }
}

fn check_coord(axis: &'static str, coord: f64, extent: u32) -> RenderResult<()> {
    if coord < 0.0 || coord >= extent as f64 {
        return Err(RenderError::PixelOutOfRange {
            axis,
            coord,
            extent,
        });
    }
    Ok(())
}
