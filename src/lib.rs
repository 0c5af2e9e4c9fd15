//! Bamboo Dash - A side-scrolling ninja endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, obstacles, collisions, scoring)
//! - `tuning`: Data-driven feel and pacing parameters
//! - `hud`: HUD collaborator interface and a recording implementation
//! - `resources`: Model table shared by everything that builds colliders

pub mod hud;
pub mod resources;
pub mod sim;
pub mod tuning;

pub use hud::{Hud, HudState, Overlay};
pub use resources::{Model, ModelAsset, Resources};
pub use tuning::{AttackTuning, PacingTuning, PlayerTuning, Tuning, TuningError};

/// World geometry constants
///
/// These shape the track layout rather than the feel, so they are not part of `Tuning`.
pub mod consts {
    /// Number of obstacle slots kept alive at all times
    pub const OBSTACLE_SLOTS: usize = 6;
    /// Distance between obstacles at setup
    pub const OBSTACLE_SPACING: f32 = 10.0;
    /// Obstacles at or past this x are recycled
    pub const RECYCLE_THRESHOLD: f32 = 10.0;
    /// x where recycled obstacles respawn
    pub const RESPAWN_X: f32 = -50.0;

    /// World units per time unit for everything that scrolls
    pub const SCROLL_SPEED: f32 = 0.5;
    /// Near wall repeats every this many units
    pub const WALL_WRAP: f32 = 10.0;
    /// Ground and trees repeat every this many units
    pub const GROUND_WRAP: f32 = 400.0;
    /// Skybox yaw rate (radians per time unit)
    pub const SKY_SPIN: f32 = 0.005;

    /// Bats fly this far above their spawn point
    pub const BAT_FLIGHT_HEIGHT: f32 = 3.3;
    /// Bat wing flap clock rate relative to dT
    pub const BAT_FLAP_RATE: f32 = 0.2;
    /// Extra half-height the wings add at full stroke
    pub const BAT_FLAP_REACH: f32 = 0.15;

    /// Bamboo hit box size, independent of the loaded mesh
    pub const BAMBOO_COLLIDER_SIZE: [f32; 3] = [0.4, 10.0, 3.0];
    /// Bamboo hit box center height above its spawn point
    pub const BAMBOO_COLLIDER_LIFT: f32 = 1.5;
}
