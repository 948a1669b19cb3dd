//! collision_terrain: ground elevation queries and capsule footprint sampling.
//!
//! The character controller and the orbit camera never own terrain data; they
//! ask a `TerrainQuery` for the elevation under an (x, z) position and treat
//! `None` as "no terrain loaded here" rather than a failure.
//!
//! Implementations
//! - `HeightField`: N×N bilinear heightmap centered on the origin.
//! - `FlatGround`: constant elevation everywhere (tests, tools).
//! - `NoTerrain`: never returns data.
//! - `FnTerrain`: wraps any `Fn(f32, f32) -> Option<f32>` (step/ramp profiles).

mod heightfield;

pub use heightfield::{HeightField, TerrainError};

use glam::Vec2;

/// Diagonal scale applied to the capsule radius for the footprint corners.
pub const FOOTPRINT_DIAGONAL: f32 = 0.707;

/// Synchronous, read-only ground elevation lookup.
pub trait TerrainQuery {
    /// Ground elevation at world (x, z), or `None` when no terrain covers it.
    fn elevation_at(&self, x: f32, z: f32) -> Option<f32>;
}

impl<T: TerrainQuery + ?Sized> TerrainQuery for &T {
    fn elevation_at(&self, x: f32, z: f32) -> Option<f32> {
        (**self).elevation_at(x, z)
    }
}

impl<T: TerrainQuery + ?Sized> TerrainQuery for Box<T> {
    fn elevation_at(&self, x: f32, z: f32) -> Option<f32> {
        (**self).elevation_at(x, z)
    }
}

/// Adapter turning a closure into a terrain (step/ramp profiles in tests and tools).
#[derive(Clone, Copy)]
pub struct FnTerrain<F>(pub F);

impl<F> TerrainQuery for FnTerrain<F>
where
    F: Fn(f32, f32) -> Option<f32>,
{
    fn elevation_at(&self, x: f32, z: f32) -> Option<f32> {
        (self.0)(x, z)
    }
}

/// Infinite plane at a fixed height.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlatGround {
    pub height: f32,
}

impl FlatGround {
    #[must_use]
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl TerrainQuery for FlatGround {
    fn elevation_at(&self, _x: f32, _z: f32) -> Option<f32> {
        Some(self.height)
    }
}

/// Terrain that has nothing loaded anywhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTerrain;

impl TerrainQuery for NoTerrain {
    fn elevation_at(&self, _x: f32, _z: f32) -> Option<f32> {
        None
    }
}

/// Nine XZ sample points approximating a capsule footprint of radius `r`:
/// center, four cardinals at `r`, four diagonals at `r * 0.707`.
#[must_use]
pub fn footprint_points(x: f32, z: f32, r: f32) -> [Vec2; 9] {
    let d = r * FOOTPRINT_DIAGONAL;
    [
        Vec2::new(x, z),
        Vec2::new(x + r, z),
        Vec2::new(x - r, z),
        Vec2::new(x, z + r),
        Vec2::new(x, z - r),
        Vec2::new(x + d, z + d),
        Vec2::new(x - d, z + d),
        Vec2::new(x + d, z - d),
        Vec2::new(x - d, z - d),
    ]
}

/// Highest valid elevation under the footprint, or `None` if no point has data.
pub fn max_footprint_elevation<T: TerrainQuery + ?Sized>(
    terrain: &T,
    x: f32,
    z: f32,
    r: f32,
) -> Option<f32> {
    footprint_points(x, z, r)
        .iter()
        .filter_map(|p| terrain.elevation_at(p.x, p.y))
        .reduce(f32::max)
}
