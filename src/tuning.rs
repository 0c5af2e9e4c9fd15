//! Data-driven game balance
//!
//! Every field defaults to the shipped feel. A tuning file only needs the
//! fields it overrides.

use std::fmt;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Jump, gravity and attack feel for the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Upward velocity applied on takeoff
    pub jump_velocity: f32,
    /// Base gravity (per time unit squared)
    pub gravity: f32,
    /// Extra gravity multiplier while falling
    pub fall_factor: f32,
    /// Extra gravity multiplier while rising with jump released
    pub release_factor: f32,
    /// Highest y the player can reach
    pub max_height: f32,
    /// Time units an attack blocks further input
    pub attack_cooldown: f32,
    /// Full size of the body collider
    pub collider_size: Vec3,
    /// Body collider center height above the feet
    pub collider_lift: f32,
    /// Offset from the feet to the attack center
    pub attack_offset: Vec3,
    /// Animation clock rate relative to dT
    pub animation_rate: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            jump_velocity: 0.9,
            gravity: 0.1,
            fall_factor: -1.0,
            release_factor: -5.0,
            max_height: 4.0,
            attack_cooldown: 7.0,
            collider_size: Vec3::new(0.5, 1.8, 0.5),
            collider_lift: 1.0,
            attack_offset: Vec3::new(-1.0, 0.5, 0.0),
            animation_rate: 0.1,
        }
    }
}

/// Speed and score progression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingTuning {
    /// Speed multiplier at the start of a run
    pub base_speed: f32,
    /// Speed stops growing once it reaches this
    pub max_speed: f32,
    /// Score per unscaled time unit
    pub score_rate: f32,
    /// Score needed for +1 speed
    pub speed_score_divisor: f32,
}

impl Default for PacingTuning {
    fn default() -> Self {
        Self {
            base_speed: 10.0,
            max_speed: 40.0,
            score_rate: 5.0,
            speed_score_divisor: 40.0,
        }
    }
}

/// Attack hit volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackTuning {
    /// Full size of the hit box placed at the player's attack center
    pub size: Vec3,
}

impl Default for AttackTuning {
    fn default() -> Self {
        Self {
            size: Vec3::new(1.5, 1.0, 1.0),
        }
    }
}

/// All tunable parameters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub pacing: PacingTuning,
    pub attack: AttackTuning,
}

/// Why a tuning file was rejected
#[derive(Debug)]
pub enum TuningError {
    /// File could not be read
    Io(std::io::Error),
    /// File is not valid tuning JSON
    Parse(serde_json::Error),
    /// A value is out of range
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Io(e) => write!(f, "failed to read tuning file: {e}"),
            TuningError::Parse(e) => write!(f, "failed to parse tuning: {e}"),
            TuningError::Invalid { field, reason } => write!(f, "invalid tuning `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Io(e) => Some(e),
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for writing a starter tuning file)
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would break the simulation invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        let p = &self.player;
        let scalars = [
            ("player.jump_velocity", p.jump_velocity),
            ("player.gravity", p.gravity),
            ("player.fall_factor", p.fall_factor),
            ("player.release_factor", p.release_factor),
            ("player.max_height", p.max_height),
            ("player.attack_cooldown", p.attack_cooldown),
            ("player.collider_lift", p.collider_lift),
            ("player.animation_rate", p.animation_rate),
            ("pacing.base_speed", self.pacing.base_speed),
            ("pacing.max_speed", self.pacing.max_speed),
            ("pacing.score_rate", self.pacing.score_rate),
            ("pacing.speed_score_divisor", self.pacing.speed_score_divisor),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(TuningError::Invalid { field, reason: "must be finite" });
            }
        }
        let vectors = [
            ("player.collider_size", p.collider_size),
            ("player.attack_offset", p.attack_offset),
            ("attack.size", self.attack.size),
        ];
        for (field, value) in vectors {
            if !value.is_finite() {
                return Err(TuningError::Invalid { field, reason: "must be finite" });
            }
        }

        if p.gravity < 0.0 {
            return Err(TuningError::Invalid { field: "player.gravity", reason: "must not be negative" });
        }
        if p.max_height <= 0.0 {
            return Err(TuningError::Invalid { field: "player.max_height", reason: "must be positive" });
        }
        if p.collider_size.min_element() < 0.0 || self.attack.size.min_element() < 0.0 {
            return Err(TuningError::Invalid { field: "collider size", reason: "must not be negative" });
        }
        if self.pacing.base_speed <= 0.0 {
            return Err(TuningError::Invalid { field: "pacing.base_speed", reason: "must be positive" });
        }
        if self.pacing.max_speed < self.pacing.base_speed {
            return Err(TuningError::Invalid { field: "pacing.max_speed", reason: "must be at least base_speed" });
        }
        if self.pacing.speed_score_divisor <= 0.0 {
            return Err(TuningError::Invalid {
                field: "pacing.speed_score_divisor",
                reason: "must be positive",
            });
        }
        if self.pacing.score_rate < 0.0 {
            return Err(TuningError::Invalid { field: "pacing.score_rate", reason: "must not be negative" });
        }
        Ok(())
    }
}
