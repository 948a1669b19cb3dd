//! Heightfield terrain: N×N grid of elevations centered on the origin.
//!
//! Grid vertex `(i, j)` sits at world `x = (i / (N-1) * 2 - 1) * extent` and
//! likewise for `z`. Queries outside `[-extent, extent]²` return `None`, which
//! is how an unloaded region looks to the controller.

use crate::TerrainQuery;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

const BASE_FREQUENCY: f32 = 1.0 / 50.0;

#[derive(Debug, Error, PartialEq)]
pub enum TerrainError {
    #[error("heightfield needs at least 2x2 samples (got size {0})")]
    EmptyGrid(usize),
    #[error("heightfield has mismatched heights ({got} != {expected})")]
    SizeMismatch { expected: usize, got: usize },
    #[error("heightfield extent must be positive (got {0})")]
    NonPositiveExtent(f32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    size: usize,
    extent: f32,
    heights: Vec<f32>,
}

impl HeightField {
    /// Build from row-major heights (`heights[j * size + i]`).
    pub fn new(size: usize, extent: f32, heights: Vec<f32>) -> Result<Self, TerrainError> {
        if size < 2 {
            return Err(TerrainError::EmptyGrid(size));
        }
        let expected = size.checked_mul(size);
        if expected != Some(heights.len()) {
            return Err(TerrainError::SizeMismatch {
                expected: expected.unwrap_or(usize::MAX),
                got: heights.len(),
            });
        }
        if extent <= 0.0 || extent.is_nan() {
            return Err(TerrainError::NonPositiveExtent(extent));
        }
        Ok(Self {
            size,
            extent,
            heights,
        })
    }

    /// Deterministic rolling hills: three octaves of seeded value noise.
    /// Heights stay within `[-amplitude, amplitude]`.
    pub fn generate(
        size: usize,
        extent: f32,
        seed: u32,
        amplitude: f32,
    ) -> Result<Self, TerrainError> {
        if size < 2 {
            return Err(TerrainError::EmptyGrid(size));
        }
        let len = size.checked_mul(size).ok_or(TerrainError::SizeMismatch {
            expected: usize::MAX,
            got: 0,
        })?;
        let mut rng = ChaCha8Rng::seed_from_u64(u64::from(seed));
        // (frequency multiplier, weight, lattice salt, domain offset)
        let octaves: [(f32, f32, u32, f32); 3] = [
            (1.0, 1.0, 0, rng.random::<f32>() * 1000.0),
            (2.0, 0.5, 0x9E37, rng.random::<f32>() * 1000.0),
            (4.0, 0.25, 0xA2B3, rng.random::<f32>() * 1000.0),
        ];
        let total_weight: f32 = octaves.iter().map(|o| o.1).sum();
        let mut heights = Vec::with_capacity(len);
        for j in 0..size {
            let z = grid_to_world(j, size, extent);
            for i in 0..size {
                let x = grid_to_world(i, size, extent);
                let h: f32 = octaves
                    .iter()
                    .map(|&(mul, weight, salt, offset)| {
                        let f = BASE_FREQUENCY * mul;
                        weight * value_noise((x + offset) * f, (z + offset) * f, seed ^ salt)
                    })
                    .sum();
                heights.push(amplitude * h / total_weight);
            }
        }
        Self::new(size, extent, heights)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn extent(&self) -> f32 {
        self.extent
    }

    #[must_use]
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Bilinear sample; `None` outside the covered square.
    #[must_use]
    pub fn sample(&self, x: f32, z: f32) -> Option<f32> {
        if !(x.abs() <= self.extent && z.abs() <= self.extent) {
            return None;
        }
        let last = (self.size - 1) as f32;
        let gx = ((x / self.extent) * 0.5 + 0.5) * last;
        let gz = ((z / self.extent) * 0.5 + 0.5) * last;
        let x0 = (gx.floor() as usize).min(self.size - 1);
        let z0 = (gz.floor() as usize).min(self.size - 1);
        let x1 = (x0 + 1).min(self.size - 1);
        let z1 = (z0 + 1).min(self.size - 1);
        let tx = (gx - x0 as f32).clamp(0.0, 1.0);
        let tz = (gz - z0 as f32).clamp(0.0, 1.0);
        let h = |i: usize, j: usize| self.heights[j * self.size + i];
        let h0 = h(x0, z0) * (1.0 - tx) + h(x1, z0) * tx;
        let h1 = h(x0, z1) * (1.0 - tx) + h(x1, z1) * tx;
        Some(h0 * (1.0 - tz) + h1 * tz)
    }
}

impl TerrainQuery for HeightField {
    fn elevation_at(&self, x: f32, z: f32) -> Option<f32> {
        self.sample(x, z)
    }
}

fn grid_to_world(i: usize, size: usize, extent: f32) -> f32 {
    (i as f32 / (size as f32 - 1.0) * 2.0 - 1.0) * extent
}

/// Lattice value in `[0, 1)` for integer corner `(i, j)`.
fn lattice(i: i32, j: i32, seed: u32) -> f32 {
    let key = ((u64::from(i as u32) << 32) | u64::from(j as u32))
        ^ u64::from(seed).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let mut x = key;
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^= x >> 31;
    (x >> 40) as f32 / (1u64 << 24) as f32
}

fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Smoothed value noise in `[-1, 1]`.
fn value_noise(x: f32, z: f32, seed: u32) -> f32 {
    let (xf, zf) = (x.floor(), z.floor());
    let (i, j) = (xf as i32, zf as i32);
    let (sx, sz) = (fade(x - xf), fade(z - zf));
    let top = lattice(i, j, seed) + (lattice(i + 1, j, seed) - lattice(i, j, seed)) * sx;
    let bottom =
        lattice(i, j + 1, seed) + (lattice(i + 1, j + 1, seed) - lattice(i, j + 1, seed)) * sx;
    (top + (bottom - top) * sz) * 2.0 - 1.0
}
