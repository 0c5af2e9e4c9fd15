//! Weighted random obstacle factory

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::obstacle::{Obstacle, ObstacleKind};
use super::scene::Scene;

/// Seeded obstacle generator; the same seed yields the same track
#[derive(Debug, Clone)]
pub struct ObstacleGenerator {
    rng: Pcg32,
}

impl ObstacleGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// One uniform draw in `[0, 1)`
    pub fn roll(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Spawn a random obstacle into `slot` at `position`
    pub fn generate_random_obstacle(&mut self, slot: usize, position: Vec3, scene: &mut impl Scene) -> Obstacle {
        let kind = ObstacleKind::from_roll(self.roll());
        Obstacle::spawn(slot, position, kind, scene)
    }

    /// Random yaw for decorative props
    pub fn random_angle(&mut self) -> f32 {
        self.rng.random::<f32>() * std::f32::consts::TAU
    }
}
