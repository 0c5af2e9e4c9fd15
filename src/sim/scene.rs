//! Scene graph interface
//!
//! The simulation only attaches and detaches mesh handles; drawing them is the host's job.

use glam::Vec3;

use crate::resources::Model;

/// Opaque handle to a mesh placed in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle {
    pub id: u64,
    pub model: Model,
}

/// Scene graph the simulation spawns meshes into
pub trait Scene {
    /// Place a new instance of `model` at `position`
    fn add(&mut self, model: Model, position: Vec3) -> MeshHandle;
    /// Detach a previously added mesh
    fn remove(&mut self, handle: MeshHandle);
}

/// In-memory scene graph that tracks live handles
#[derive(Debug, Default)]
pub struct SceneGraph {
    next_id: u64,
    live: Vec<(MeshHandle, Vec3)>,
    /// Removals of handles that were not live
    stale_removals: u32,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn count_of(&self, model: Model) -> usize {
        self.live.iter().filter(|(h, _)| h.model == model).count()
    }

    pub fn contains(&self, handle: MeshHandle) -> bool {
        self.live.iter().any(|(h, _)| *h == handle)
    }

    pub fn stale_removals(&self) -> u32 {
        self.stale_removals
    }
}

impl Scene for SceneGraph {
    fn add(&mut self, model: Model, position: Vec3) -> MeshHandle {
        self.next_id += 1;
        let handle = MeshHandle { id: self.next_id, model };
        self.live.push((handle, position));
        handle
    }

    fn remove(&mut self, handle: MeshHandle) {
        match self.live.iter().position(|(h, _)| *h == handle) {
            Some(i) => {
                self.live.swap_remove(i);
            }
            None => {
                log::warn!("Removing mesh {} ({:?}) that is not in the scene", handle.id, handle.model);
                self.stale_removals += 1;
            }
        }
    }
}
