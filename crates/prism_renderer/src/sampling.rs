//! Random sampling for antialiasing and scattering.
//!
//! A [`Sampler`] owns the random source for one render pass, so a seeded
//! sampler reproduces a frame exactly.

use prism_core::SphereSampling;
use prism_math::{Vec3, VectorExt};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source threaded through camera jitter and material scattering.
pub struct Sampler {
    rng: StdRng,
    sphere_sampling: SphereSampling,
}

impl Sampler {
    /// Create a sampler. Without a seed the generator is seeded from OS entropy.
    pub fn new(seed: Option<u64>, sphere_sampling: SphereSampling) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            sphere_sampling,
        }
    }

    /// Seeded sampler using the default unit-vector strategy.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed), SphereSampling::default())
    }

    /// Uniform f64 in [min, max).
    #[inline]
    pub fn gen_range(&mut self, min: f64, max: f64) -> f64 {
        self.rng.gen_range(min..max)
    }

    /// Vector with each component uniform in [min, max).
    pub fn gen_vec3(&mut self, min: f64, max: f64) -> Vec3 {
        Vec3::new(
            self.gen_range(min, max),
            self.gen_range(min, max),
            self.gen_range(min, max),
        )
    }

    /// Random unit vector, rejection sampled from the [-1, 1) cube.
    ///
    /// `Legacy` keeps candidates outside the unit ball, which biases
    /// directions toward the cube corners. `Uniform` keeps candidates inside
    /// the ball and is uniform on the sphere.
    pub fn unit_vector(&mut self) -> Vec3 {
        loop {
            let p = self.gen_vec3(-1.0, 1.0);
            let len_sq = p.length_squared();
            let accept = match self.sphere_sampling {
                SphereSampling::Legacy => len_sq > 1.0,
                SphereSampling::Uniform => len_sq > 1e-6 && len_sq <= 1.0,
            };
            if accept {
                if let Ok(unit) = p.unit() {
                    return unit;
                }
            }
        }
    }
}
