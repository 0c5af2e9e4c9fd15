//! Model table
//!
//! Built once at startup and handed to whatever spawns meshes or builds
//! colliders. Until the host reports a model as loaded its bounds are a
//! placeholder box, so physics and collision run before assets arrive.

use glam::Vec3;

use crate::sim::Aabb;

/// Every model the game places in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    Ninja,
    Spikes,
    BambooLower,
    BambooUpper,
    Bat,
    Wall,
    Ground,
    Tree,
    Sky,
}

impl Model {
    pub const ALL: [Model; 9] = [
        Model::Ninja,
        Model::Spikes,
        Model::BambooLower,
        Model::BambooUpper,
        Model::Bat,
        Model::Wall,
        Model::Ground,
        Model::Tree,
        Model::Sky,
    ];

    fn index(self) -> usize {
        match self {
            Model::Ninja => 0,
            Model::Spikes => 1,
            Model::BambooLower => 2,
            Model::BambooUpper => 3,
            Model::Bat => 4,
            Model::Wall => 5,
            Model::Ground => 6,
            Model::Tree => 7,
            Model::Sky => 8,
        }
    }
}

/// Asset description for one model
#[derive(Debug, Clone)]
pub struct ModelAsset {
    /// glTF path relative to the asset root
    pub path: &'static str,
    /// Material name the loader should apply
    pub material: &'static str,
    /// Bounds in model space (placeholder until loaded)
    pub bounds: Aabb,
    /// Whether the host has reported real geometry
    pub loaded: bool,
}

/// Model table keyed by `Model`
#[derive(Debug, Clone)]
pub struct Resources {
    assets: [ModelAsset; 9],
}

impl Default for Resources {
    fn default() -> Self {
        Self::new()
    }
}

impl Resources {
    pub fn new() -> Self {
        let asset = |path, material, min: Vec3, max: Vec3| ModelAsset {
            path,
            material,
            bounds: Aabb::new(min, max),
            loaded: false,
        };
        Self {
            assets: [
                asset(
                    "res/ninja/ninja.glb",
                    "player",
                    Vec3::new(-0.3, 0.0, -0.3),
                    Vec3::new(0.3, 1.9, 0.3),
                ),
                asset(
                    "res/obstacles/spikes/spikes.glb",
                    "spikes",
                    Vec3::new(-0.5, 0.0, -1.0),
                    Vec3::new(0.5, 1.0, 1.0),
                ),
                asset(
                    "res/obstacles/bamboo/bamboo.glb",
                    "bamboo",
                    Vec3::new(-0.2, 0.0, -0.2),
                    Vec3::new(0.2, 1.5, 0.2),
                ),
                asset(
                    "res/obstacles/bamboo/bamboo_u.glb",
                    "bamboo",
                    Vec3::new(-0.2, 1.5, -0.2),
                    Vec3::new(0.2, 6.5, 0.2),
                ),
                asset(
                    "res/obstacles/bat/bat.glb",
                    "bat",
                    Vec3::new(-0.4, -0.3, -0.6),
                    Vec3::new(0.4, 0.3, 0.6),
                ),
                asset("res/wall/wall.glb", "wall", Vec3::new(-200.0, 0.0, 2.0), Vec3::new(200.0, 6.0, 3.0)),
                asset(
                    "res/ground/ground.glb",
                    "ground",
                    Vec3::new(-400.0, -0.5, -50.0),
                    Vec3::new(400.0, 0.0, 50.0),
                ),
                asset("res/tree/tree.glb", "tree", Vec3::new(-3.0, 0.0, -3.0), Vec3::new(3.0, 12.0, 3.0)),
                asset("res/sky.glb", "skyBox", Vec3::splat(-500.0), Vec3::splat(500.0)),
            ],
        }
    }

    pub fn asset(&self, model: Model) -> &ModelAsset {
        &self.assets[model.index()]
    }

    /// Model-space bounds used for colliders
    pub fn bounds(&self, model: Model) -> Aabb {
        self.asset(model).bounds
    }

    pub fn is_loaded(&self, model: Model) -> bool {
        self.asset(model).loaded
    }

    /// Record real geometry bounds once the host finishes loading a model
    pub fn mark_loaded(&mut self, model: Model, bounds: Aabb) {
        let asset = &mut self.assets[model.index()];
        asset.bounds = bounds;
        asset.loaded = true;
        log::debug!("Model {:?} loaded from {}", model, asset.path);
    }

    /// Models still waiting on the loader
    pub fn pending(&self) -> impl Iterator<Item = Model> + '_ {
        Model::ALL.into_iter().filter(|m| !self.is_loaded(*m))
    }
}
