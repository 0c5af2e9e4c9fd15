//! Obstacles: spikes, breakable bamboo and bats
//!
//! Variants are a closed enum; per-variant behavior is dispatched by `match`
//! inside `update`, `hit` and `remove`.

use glam::Vec3;

use super::collider::Aabb;
use super::scene::{MeshHandle, Scene};
use crate::consts::*;
use crate::resources::{Model, Resources};

/// One half of a breaking bamboo stalk, relative to the obstacle position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BambooPiece {
    pub mesh: Option<MeshHandle>,
    /// Vertical drift since the hit
    pub offset_y: f32,
    /// Roll around z since the hit (radians)
    pub roll: f32,
}

/// Variant-specific state
#[derive(Debug, Clone, PartialEq)]
pub enum ObstacleKind {
    /// Static spike block; `position.y` is its height
    Spikes { height: f32 },
    /// Two-piece stalk that can be cut
    Bamboo {
        is_hit: bool,
        lower: BambooPiece,
        upper: BambooPiece,
    },
    /// Flapping bat at head height
    Bat { flap_time: f32 },
}

impl ObstacleKind {
    pub fn bamboo() -> Self {
        ObstacleKind::Bamboo {
            is_hit: false,
            lower: BambooPiece::default(),
            upper: BambooPiece::default(),
        }
    }

    /// Map a uniform draw in `[0, 1)` onto the spawn table
    ///
    /// First match wins and every comparison is strict.
    pub fn from_roll(roll: f32) -> Self {
        if roll > 0.9 {
            return ObstacleKind::Spikes { height: 0.5 };
        }
        if roll > 0.8 {
            return Self::bamboo();
        }
        if roll > 0.7 {
            return ObstacleKind::Spikes { height: 1.0 };
        }
        if roll > 0.6 {
            return Self::bamboo();
        }
        if roll > 0.5 {
            return ObstacleKind::Spikes { height: 1.5 };
        }
        if roll > 0.4 {
            return ObstacleKind::Spikes { height: 2.0 };
        }
        if roll > 0.3 {
            return Self::bamboo();
        }
        if roll > 0.2 {
            return ObstacleKind::Bat { flap_time: 0.0 };
        }
        if roll > 0.1 {
            return ObstacleKind::Spikes { height: 2.5 };
        }
        ObstacleKind::Bat { flap_time: 0.0 }
    }

    pub fn is_destructible(&self) -> bool {
        matches!(self, ObstacleKind::Bamboo { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            ObstacleKind::Spikes { .. } => "spikes",
            ObstacleKind::Bamboo { .. } => "bamboo",
            ObstacleKind::Bat { .. } => "bat",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Pool slot, stable across respawns
    pub slot: usize,
    pub position: Vec3,
    /// Cleared once hit; disabled obstacles no longer end the run
    pub enabled: bool,
    pub destructible: bool,
    pub collider: Aabb,
    pub kind: ObstacleKind,
    /// Primary mesh (the lower stalk for bamboo)
    pub mesh: MeshHandle,
}

impl Obstacle {
    /// Build an obstacle of `kind` at `spawn` and attach its meshes
    pub fn spawn(slot: usize, spawn: Vec3, mut kind: ObstacleKind, scene: &mut impl Scene) -> Self {
        let mut position = spawn;
        let mesh = match &mut kind {
            ObstacleKind::Spikes { height } => {
                position.y = *height;
                scene.add(Model::Spikes, position)
            }
            ObstacleKind::Bamboo { lower, upper, .. } => {
                let lower_mesh = scene.add(Model::BambooLower, position);
                lower.mesh = Some(lower_mesh);
                upper.mesh = Some(scene.add(Model::BambooUpper, position));
                lower_mesh
            }
            ObstacleKind::Bat { .. } => scene.add(Model::Bat, position + Vec3::Y * BAT_FLIGHT_HEIGHT),
        };
        Self {
            slot,
            position,
            enabled: true,
            destructible: kind.is_destructible(),
            collider: Aabb::EMPTY,
            kind,
            mesh,
        }
    }

    /// Scroll toward the player and rebuild the collider
    pub fn update(&mut self, dt: f32, resources: &Resources) {
        self.position.x += SCROLL_SPEED * dt;

        self.collider = match &mut self.kind {
            ObstacleKind::Spikes { .. } => resources.bounds(Model::Spikes).translated(self.position),
            ObstacleKind::Bamboo { is_hit, lower, upper } => {
                if *is_hit {
                    upper.offset_y += 2.0 * dt;
                    upper.roll += -0.5 * dt;
                    lower.offset_y -= dt;
                    lower.roll += 0.5 * dt;
                }
                let [w, h, d] = BAMBOO_COLLIDER_SIZE;
                Aabb::from_center_and_size(self.position + Vec3::Y * BAMBOO_COLLIDER_LIFT, Vec3::new(w, h, d))
            }
            ObstacleKind::Bat { flap_time } => {
                // Pose first, then bounds from the posed wings
                *flap_time += dt * BAT_FLAP_RATE;
                let stroke = (*flap_time * std::f32::consts::TAU).sin().abs();
                resources
                    .bounds(Model::Bat)
                    .stretched_y(stroke * BAT_FLAP_REACH)
                    .translated(self.position + Vec3::Y * BAT_FLIGHT_HEIGHT)
            }
        };
    }

    /// Disable player damage; bamboo also starts breaking apart
    pub fn hit(&mut self) {
        self.enabled = false;
        if let ObstacleKind::Bamboo { is_hit, .. } = &mut self.kind {
            *is_hit = true;
        }
    }

    /// Detach every mesh this obstacle owns
    pub fn remove(&self, scene: &mut impl Scene) {
        match &self.kind {
            ObstacleKind::Bamboo { lower, upper, .. } => {
                for mesh in [lower.mesh, upper.mesh].into_iter().flatten() {
                    scene.remove(mesh);
                }
            }
            ObstacleKind::Spikes { .. } | ObstacleKind::Bat { .. } => scene.remove(self.mesh),
        }
    }

    /// Past the player and due for recycling
    pub fn is_scrolled_out(&self) -> bool {
        self.position.x >= RECYCLE_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::scene::SceneGraph;

    fn spawn(kind: ObstacleKind, scene: &mut SceneGraph) -> Obstacle {
        Obstacle::spawn(2, Vec3::new(-10.0, 0.0, 0.0), kind, scene)
    }

    #[test]
    fn test_roll_ladder() {
        assert_eq!(ObstacleKind::from_roll(0.95), ObstacleKind::Spikes { height: 0.5 });
        assert_eq!(ObstacleKind::from_roll(0.85), ObstacleKind::bamboo());
        assert_eq!(ObstacleKind::from_roll(0.75), ObstacleKind::Spikes { height: 1.0 });
        assert_eq!(ObstacleKind::from_roll(0.65), ObstacleKind::bamboo());
        assert_eq!(ObstacleKind::from_roll(0.55), ObstacleKind::Spikes { height: 1.5 });
        assert_eq!(ObstacleKind::from_roll(0.45), ObstacleKind::Spikes { height: 2.0 });
        assert_eq!(ObstacleKind::from_roll(0.35), ObstacleKind::bamboo());
        assert_eq!(ObstacleKind::from_roll(0.25), ObstacleKind::Bat { flap_time: 0.0 });
        assert_eq!(ObstacleKind::from_roll(0.15), ObstacleKind::Spikes { height: 2.5 });
        assert_eq!(ObstacleKind::from_roll(0.05), ObstacleKind::Bat { flap_time: 0.0 });
    }

    #[test]
    fn test_roll_boundaries_fall_through() {
        // Exactly on a threshold belongs to the next rung down
        assert_eq!(ObstacleKind::from_roll(0.9), ObstacleKind::bamboo());
        assert_eq!(ObstacleKind::from_roll(0.8), ObstacleKind::Spikes { height: 1.0 });
        assert_eq!(ObstacleKind::from_roll(0.5), ObstacleKind::Spikes { height: 2.0 });
        assert_eq!(ObstacleKind::from_roll(0.2), ObstacleKind::Spikes { height: 2.5 });
        assert_eq!(ObstacleKind::from_roll(0.1), ObstacleKind::Bat { flap_time: 0.0 });
        assert_eq!(ObstacleKind::from_roll(0.0), ObstacleKind::Bat { flap_time: 0.0 });
    }

    #[test]
    fn test_spikes_sit_at_their_height() {
        let mut scene = SceneGraph::new();
        let mut o = spawn(ObstacleKind::Spikes { height: 2.5 }, &mut scene);
        assert_eq!(o.position.y, 2.5);
        assert!(!o.destructible);
        o.update(0.0, &Resources::new());
        assert_eq!(o.collider.min.y, 2.5);
        assert_eq!(scene.count_of(Model::Spikes), 1);
    }

    #[test]
    fn test_all_obstacles_scroll_at_the_same_rate() {
        let mut scene = SceneGraph::new();
        let resources = Resources::new();
        for kind in [
            ObstacleKind::Spikes { height: 1.0 },
            ObstacleKind::bamboo(),
            ObstacleKind::Bat { flap_time: 0.0 },
        ] {
            let mut o = spawn(kind, &mut scene);
            o.update(4.0, &resources);
            assert_eq!(o.position.x, -8.0);
        }
    }

    #[test]
    fn test_bamboo_collider_ignores_mesh_bounds() {
        let mut scene = SceneGraph::new();
        let mut resources = Resources::new();
        let mut o = spawn(ObstacleKind::bamboo(), &mut scene);
        o.update(0.0, &resources);
        let before = o.collider;
        assert!((before.center() - Vec3::new(-10.0, 1.5, 0.0)).length() < 1e-6);
        assert!((before.size() - Vec3::new(0.4, 10.0, 3.0)).length() < 1e-5);

        resources.mark_loaded(Model::BambooLower, Aabb::new(Vec3::splat(-5.0), Vec3::splat(5.0)));
        o.update(0.0, &resources);
        assert_eq!(o.collider, before);
    }

    #[test]
    fn test_bamboo_hit_breaks_apart() {
        let mut scene = SceneGraph::new();
        let resources = Resources::new();
        let mut o = spawn(ObstacleKind::bamboo(), &mut scene);
        assert!(o.destructible);
        o.hit();
        assert!(!o.enabled);
        o.update(1.0, &resources);
        match &o.kind {
            ObstacleKind::Bamboo { is_hit, lower, upper } => {
                assert!(*is_hit);
                assert_eq!(upper.offset_y, 2.0);
                assert_eq!(upper.roll, -0.5);
                assert_eq!(lower.offset_y, -1.0);
                assert_eq!(lower.roll, 0.5);
            }
            other => panic!("expected bamboo, got {other:?}"),
        }
    }

    #[test]
    fn test_bat_collider_follows_pose() {
        let mut scene = SceneGraph::new();
        let resources = Resources::new();
        let mut o = spawn(ObstacleKind::Bat { flap_time: 0.0 }, &mut scene);
        let base = resources.bounds(Model::Bat);

        // Quarter flap: wings at full stroke
        o.update(1.25, &resources);
        let center = o.collider.center();
        assert!((center.y - BAT_FLIGHT_HEIGHT).abs() < 1e-5);
        let stretched = o.collider.size().y - base.size().y;
        assert!((stretched - 2.0 * BAT_FLAP_REACH).abs() < 1e-4);
        assert!(o.collider.min.y > 2.0, "bat should fly over a running player");
    }

    #[test]
    fn test_remove_detaches_all_meshes() {
        let mut scene = SceneGraph::new();
        let bamboo = spawn(ObstacleKind::bamboo(), &mut scene);
        let bat = spawn(ObstacleKind::Bat { flap_time: 0.0 }, &mut scene);
        assert_eq!(scene.live_count(), 3);
        bamboo.remove(&mut scene);
        assert_eq!(scene.live_count(), 1);
        bat.remove(&mut scene);
        assert_eq!(scene.live_count(), 0);
        assert_eq!(scene.stale_removals(), 0);
    }

    #[test]
    fn test_scrolled_out_at_threshold() {
        let mut scene = SceneGraph::new();
        let mut o = spawn(ObstacleKind::Spikes { height: 0.5 }, &mut scene);
        o.position.x = 9.99;
        assert!(!o.is_scrolled_out());
        o.position.x = 10.0;
        assert!(o.is_scrolled_out());
    }
}
