//! The ninja: jump physics and the attack/jump state machine

use glam::Vec3;

use super::collider::Aabb;
use super::scene::{MeshHandle, Scene};
use crate::resources::Model;
use crate::tuning::PlayerTuning;

/// Animation clip the renderer should be playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAnimation {
    Run,
    Jump,
    Attack,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec3,
    /// Vertical velocity
    pub velocity: f32,
    /// Jump button currently held
    pub is_jumping: bool,
    /// Re-armed by releasing jump
    pub can_jump: bool,
    pub can_attack: bool,
    pub is_attacking: bool,
    /// Time units left before the attack ends
    pub attack_cooldown: f32,
    /// Grounded state at the start of the previous update
    pub was_grounded: bool,
    pub collider: Aabb,
    pub animation: PlayerAnimation,
    /// Playback time of the current clip
    pub animation_time: f32,
    pub mesh: MeshHandle,
    tuning: PlayerTuning,
}

impl Player {
    /// Spawn a player at the origin and attach its mesh
    pub fn new(tuning: PlayerTuning, scene: &mut impl Scene) -> Self {
        let position = Vec3::ZERO;
        let mesh = scene.add(Model::Ninja, position);
        let mut player = Self {
            position,
            velocity: 0.0,
            is_jumping: false,
            can_jump: true,
            can_attack: true,
            is_attacking: false,
            attack_cooldown: 0.0,
            was_grounded: false,
            collider: Aabb::EMPTY,
            animation: PlayerAnimation::Run,
            animation_time: 0.0,
            mesh,
            tuning,
        };
        player.update_collider();
        player
    }

    /// Record jump button state; releasing re-arms the jump
    pub fn set_jump(&mut self, pressed: bool) {
        self.is_jumping = pressed;
        if !pressed {
            self.can_jump = true;
        }
    }

    /// Start an attack. Ignored while a previous attack is still running.
    pub fn attack(&mut self) {
        if !self.can_attack {
            return;
        }
        self.can_attack = false;
        self.is_attacking = true;
        self.attack_cooldown = self.tuning.attack_cooldown;
        self.play(PlayerAnimation::Attack);
    }

    /// Advance by `dt` (already scaled by game speed)
    pub fn update(&mut self, dt: f32) {
        self.update_animation_edges();

        // The attack outlives its cooldown by one update
        if self.attack_cooldown > 0.0 {
            self.attack_cooldown -= dt;
        } else if self.is_attacking {
            self.is_attacking = false;
            self.can_attack = true;
            self.play(PlayerAnimation::Run);
        }

        if !self.is_attacking && self.can_jump && self.is_jumping && self.is_grounded() {
            self.velocity = self.tuning.jump_velocity;
            self.can_jump = false;
        }

        // Asymmetric gravity: heavier fall, snappy apex when jump is released early
        let gravity = self.tuning.gravity;
        if !self.is_grounded() {
            self.velocity -= gravity * dt;

            if self.velocity < 0.0 {
                self.velocity += gravity * self.tuning.fall_factor * dt;
            } else if self.velocity > 0.0 && !self.is_jumping {
                self.velocity += gravity * self.tuning.release_factor * dt;
            }
        }

        let new_y = self.position.y + self.velocity * dt;
        self.position.y = new_y.clamp(0.0, self.tuning.max_height);

        self.update_collider();
        self.animation_time += dt * self.tuning.animation_rate;
    }

    pub fn is_grounded(&self) -> bool {
        self.position.y <= 0.0
    }

    /// Attack center, in front of the character
    pub fn center(&self) -> Vec3 {
        self.position + self.tuning.attack_offset
    }

    fn update_animation_edges(&mut self) {
        let grounded = self.is_grounded();
        if !self.is_attacking {
            if !self.was_grounded && grounded {
                self.play(PlayerAnimation::Run);
            }
            if self.was_grounded && !grounded {
                self.play(PlayerAnimation::Jump);
            }
        }
        self.was_grounded = grounded;
    }

    fn play(&mut self, animation: PlayerAnimation) {
        self.animation = animation;
        self.animation_time = 0.0;
    }

    fn update_collider(&mut self) {
        let center = self.position + Vec3::Y * self.tuning.collider_lift;
        self.collider = Aabb::from_center_and_size(center, self.tuning.collider_size);
    }
}
