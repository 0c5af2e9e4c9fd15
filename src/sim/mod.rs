//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time comes in from the host, nothing reads a wall clock
//! - Seeded RNG only
//! - Stable iteration order (by obstacle slot)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collider;
pub mod game;
pub mod generator;
pub mod obstacle;
pub mod player;
pub mod scene;
pub mod world;

pub use autopilot::{Autopilot, Buttons};
pub use clock::Clock;
pub use collider::Aabb;
pub use game::{Game, Key, SessionPhase};
pub use generator::ObstacleGenerator;
pub use obstacle::{BambooPiece, Obstacle, ObstacleKind};
pub use player::{Player, PlayerAnimation};
pub use scene::{MeshHandle, Scene, SceneGraph};
pub use world::{Backdrop, Prop, World};
