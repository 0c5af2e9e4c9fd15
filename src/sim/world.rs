//! World: player, obstacle slots and the scrolling backdrop

use glam::Vec3;

use super::generator::ObstacleGenerator;
use super::obstacle::Obstacle;
use super::player::Player;
use super::scene::{MeshHandle, Scene};
use crate::consts::*;
use crate::resources::{Model, Resources};
use crate::tuning::PlayerTuning;

/// Tree layout along the track; the second half repeats the first 400 units further on
const TREE_POSITIONS: [[f32; 3]; 22] = [
    [0.0, -3.5, 20.0],
    [-6.0, -3.5, 30.0],
    [-9.0, -3.5, 35.0],
    [-1.0, -1.0, 50.0],
    [-20.0, -1.0, 55.0],
    [-40.0, -1.0, 100.0],
    [-50.0, -5.0, 100.0],
    [-80.0, -1.0, 72.0],
    [-120.0, -3.0, 65.0],
    [-140.0, 2.0, 70.0],
    [-200.0, -7.0, 50.0],
    [-400.0, -3.5, 20.0],
    [-406.0, -3.5, 30.0],
    [-409.0, -3.5, 35.0],
    [-401.0, -1.0, 50.0],
    [-420.0, -1.0, 55.0],
    [-440.0, -1.0, 100.0],
    [-450.0, -5.0, 100.0],
    [-480.0, -1.0, 72.0],
    [-520.0, -3.0, 65.0],
    [-540.0, 2.0, 70.0],
    [-600.0, -7.0, 50.0],
];

/// Skybox sits this far above the ground
const SKY_HEIGHT: f32 = 35.0;

/// A decorative tree
#[derive(Debug, Clone, Copy)]
pub struct Prop {
    pub position: Vec3,
    pub yaw: f32,
    pub mesh: MeshHandle,
}

/// Cosmetic scrolling layers; nothing here collides
#[derive(Debug, Clone)]
pub struct Backdrop {
    pub wall_x: f32,
    pub ground_x: f32,
    pub sky_yaw: f32,
    pub trees: Vec<Prop>,
    pub meshes: [MeshHandle; 3],
}

impl Backdrop {
    fn new(generator: &mut ObstacleGenerator, scene: &mut impl Scene) -> Self {
        let sky = Vec3::Y * SKY_HEIGHT;
        let meshes = [
            scene.add(Model::Sky, sky),
            scene.add(Model::Wall, Vec3::ZERO),
            scene.add(Model::Ground, Vec3::ZERO),
        ];
        let trees = TREE_POSITIONS
            .iter()
            .map(|&p| {
                let position = Vec3::from_array(p);
                Prop {
                    position,
                    yaw: generator.random_angle(),
                    mesh: scene.add(Model::Tree, position),
                }
            })
            .collect();
        Self {
            wall_x: 0.0,
            ground_x: 0.0,
            sky_yaw: 0.0,
            trees,
            meshes,
        }
    }

    fn scroll(&mut self, dt: f32) {
        let step = SCROLL_SPEED * dt;

        self.wall_x += step;
        if self.wall_x >= WALL_WRAP {
            self.wall_x -= WALL_WRAP;
        }
        self.ground_x += step;
        if self.ground_x >= GROUND_WRAP {
            self.ground_x -= GROUND_WRAP;
        }

        // The whole row jumps back together so the spacing never changes
        for i in 0..self.trees.len() {
            self.trees[i].position.x += step;
            if self.trees[i].position.x >= GROUND_WRAP {
                for tree in &mut self.trees {
                    tree.position.x -= GROUND_WRAP;
                }
            }
        }

        self.sky_yaw = (self.sky_yaw + dt * SKY_SPIN) % std::f32::consts::TAU;
    }
}

/// Everything that lives in the 3D scene
#[derive(Debug, Clone)]
pub struct World {
    pub player: Player,
    /// Indexed by slot
    pub obstacles: [Obstacle; OBSTACLE_SLOTS],
    pub backdrop: Backdrop,
    pub generator: ObstacleGenerator,
    pub resources: Resources,
    player_tuning: PlayerTuning,
}

impl World {
    /// Build the scene: backdrop, player and a full set of obstacles
    pub fn new(seed: u64, player_tuning: PlayerTuning, resources: Resources, scene: &mut impl Scene) -> Self {
        let mut generator = ObstacleGenerator::new(seed);
        let backdrop = Backdrop::new(&mut generator, scene);
        let player = Player::new(player_tuning, scene);
        let obstacles = Self::initial_obstacles(&mut generator, scene);
        log::debug!("World set up with seed {seed}");
        Self {
            player,
            obstacles,
            backdrop,
            generator,
            resources,
            player_tuning,
        }
    }

    fn initial_obstacles(generator: &mut ObstacleGenerator, scene: &mut impl Scene) -> [Obstacle; OBSTACLE_SLOTS] {
        std::array::from_fn(|slot| {
            let position = Vec3::new(-OBSTACLE_SPACING * (slot as f32 + 1.0), 0.0, 0.0);
            generator.generate_random_obstacle(slot, position, scene)
        })
    }

    /// Fresh player and obstacles; the backdrop keeps scrolling where it was
    pub fn reset(&mut self, scene: &mut impl Scene) {
        scene.remove(self.player.mesh);
        self.player = Player::new(self.player_tuning, scene);

        for obstacle in &self.obstacles {
            obstacle.remove(scene);
        }
        self.obstacles = Self::initial_obstacles(&mut self.generator, scene);
    }

    /// Respawn `slot` far ahead. The caller has already removed the old obstacle.
    pub fn add_obstacle(&mut self, slot: usize, scene: &mut impl Scene) {
        let position = Vec3::new(RESPAWN_X, 0.0, 0.0);
        let obstacle = self.generator.generate_random_obstacle(slot, position, scene);
        log::debug!("Slot {slot} respawned as {}", obstacle.kind.name());
        self.obstacles[slot] = obstacle;
    }

    pub fn scroll_background(&mut self, dt: f32) {
        self.backdrop.scroll(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::scene::SceneGraph;

    fn world(scene: &mut SceneGraph) -> World {
        World::new(9, PlayerTuning::default(), Resources::new(), scene)
    }

    #[test]
    fn test_setup_fills_every_slot() {
        let mut scene = SceneGraph::new();
        let w = world(&mut scene);
        for (i, o) in w.obstacles.iter().enumerate() {
            assert_eq!(o.slot, i);
            assert_eq!(o.position.x, -10.0 * (i as f32 + 1.0));
            assert!(o.enabled);
        }
        assert_eq!(scene.count_of(Model::Ninja), 1);
        assert_eq!(scene.count_of(Model::Tree), TREE_POSITIONS.len());
    }

    #[test]
    fn test_add_obstacle_respawns_far_ahead() {
        let mut scene = SceneGraph::new();
        let mut w = world(&mut scene);
        w.obstacles[3].remove(&mut scene);
        w.add_obstacle(3, &mut scene);
        assert_eq!(w.obstacles[3].slot, 3);
        assert_eq!(w.obstacles[3].position.x, RESPAWN_X);
        // Bamboo owns two meshes
        let obstacle_meshes: usize = [Model::Spikes, Model::BambooLower, Model::BambooUpper, Model::Bat]
            .into_iter()
            .map(|m| scene.count_of(m))
            .sum();
        let expected: usize = w
            .obstacles
            .iter()
            .map(|o| if o.destructible { 2 } else { 1 })
            .sum();
        assert_eq!(obstacle_meshes, expected);
        assert_eq!(scene.live_count(), 3 + TREE_POSITIONS.len() + 1 + expected);
        assert_eq!(scene.stale_removals(), 0);
    }

    #[test]
    fn test_reset_replaces_player_and_obstacles() {
        let mut scene = SceneGraph::new();
        let mut w = world(&mut scene);
        let old_player = w.player.mesh;
        w.player.position.y = 3.0;
        w.obstacles[0].position.x = 5.0;
        w.obstacles[0].hit();
        w.backdrop.wall_x = 4.0;

        w.reset(&mut scene);

        assert!(!scene.contains(old_player));
        assert!(scene.contains(w.player.mesh));
        assert_eq!(scene.count_of(Model::Ninja), 1);
        assert_eq!(w.player.position.y, 0.0);
        assert_eq!(w.obstacles[0].position.x, -10.0);
        assert!(w.obstacles.iter().all(|o| o.enabled));
        assert_eq!(w.backdrop.wall_x, 4.0);
        assert_eq!(scene.stale_removals(), 0);
    }

    #[test]
    fn test_wall_and_ground_wrap() {
        let mut scene = SceneGraph::new();
        let mut w = world(&mut scene);
        w.scroll_background(19.0);
        assert!((w.backdrop.wall_x - 9.5).abs() < 1e-5);
        w.scroll_background(2.0);
        assert!((w.backdrop.wall_x - 0.5).abs() < 1e-5);

        w.backdrop.ground_x = 399.0;
        w.scroll_background(4.0);
        assert!((w.backdrop.ground_x - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_tree_row_wraps_together() {
        let mut scene = SceneGraph::new();
        let mut w = world(&mut scene);
        let spacing: Vec<f32> = w.backdrop.trees.windows(2).map(|p| p[1].position.x - p[0].position.x).collect();

        // The lead tree starts at x = 0 and reaches 400 after 800 time units
        for _ in 0..801 {
            w.scroll_background(1.0);
        }
        assert!(w.backdrop.trees.iter().all(|t| t.position.x < GROUND_WRAP));
        let after: Vec<f32> = w.backdrop.trees.windows(2).map(|p| p[1].position.x - p[0].position.x).collect();
        for (a, b) in spacing.iter().zip(&after) {
            assert!((a - b).abs() < 1e-2);
        }
        assert!(w.backdrop.sky_yaw > 0.0);
    }
}
