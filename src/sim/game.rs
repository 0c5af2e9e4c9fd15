//! Top-level game driver
//!
//! Owns the world and session state and runs the per-frame update in a fixed order:
//! input, player, attack, obstacles (hit, collide, recycle), backdrop, score.

use super::clock::Clock;
use super::collider::Aabb;
use super::scene::Scene;
use super::world::World;
use crate::consts::OBSTACLE_SLOTS;
use crate::hud::Hud;
use crate::resources::Resources;
use crate::tuning::Tuning;

/// Logical input buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Jump,
    Attack,
    /// Any other key; only starts or restarts the session
    Other,
}

/// Session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Title screen, waiting for the first key
    Idle,
    /// Run in progress
    Running,
    /// Player hit an obstacle; the next key starts a new run
    GameOver,
}

/// Button latches, set by key events and read once per frame
#[derive(Debug, Clone, Default)]
struct InputLatch {
    any_key: bool,
    jump: bool,
    attack: bool,
    attack_was_pressed: bool,
}

pub struct Game {
    pub world: World,
    pub score: f32,
    /// Multiplier applied to every frame's elapsed time
    pub speed: f32,
    phase: SessionPhase,
    input: InputLatch,
    clock: Clock,
    tuning: Tuning,
    /// Attack volume from the most recent attack, for debug drawing
    pub last_attack: Option<Aabb>,
}

impl Game {
    /// Set up the world and show the title screen
    pub fn new(seed: u64, tuning: Tuning, resources: Resources, scene: &mut impl Scene, hud: &mut impl Hud) -> Self {
        let world = World::new(seed, tuning.player, resources, scene);
        let mut clock = Clock::new();
        clock.start();
        hud.enable_logos(false);
        Self {
            world,
            score: 0.0,
            speed: tuning.pacing.base_speed,
            phase: SessionPhase::Idle,
            input: InputLatch::default(),
            clock,
            tuning,
            last_attack: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn key_down(&mut self, key: Key, scene: &mut impl Scene, hud: &mut impl Hud) {
        match key {
            Key::Jump => self.input.jump = true,
            Key::Attack => self.input.attack = true,
            Key::Other => {}
        }

        // Held keys repeat; only a fresh press may start a run
        if self.phase != SessionPhase::Running && !self.input.any_key {
            self.start(scene, hud);
        }
        self.input.any_key = true;
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Jump => self.input.jump = false,
            Key::Attack => self.input.attack = false,
            Key::Other => {}
        }
        self.input.any_key = false;
    }

    fn start(&mut self, scene: &mut impl Scene, hud: &mut impl Hud) {
        match self.phase {
            SessionPhase::Idle => {
                hud.disable_logos(false);
                log::info!("Run started");
            }
            SessionPhase::GameOver => {
                hud.disable_logos(true);
                self.reset(scene);
                log::info!("Run restarted");
            }
            SessionPhase::Running => return,
        }
        self.phase = SessionPhase::Running;
    }

    fn reset(&mut self, scene: &mut impl Scene) {
        self.score = 0.0;
        self.speed = self.tuning.pacing.base_speed;
        self.world.reset(scene);
        self.last_attack = None;
        self.clock.reset();
        self.clock.start();
    }

    fn game_over(&mut self, hud: &mut impl Hud) {
        if self.phase != SessionPhase::Running {
            return;
        }
        hud.enable_logos(true);
        self.phase = SessionPhase::GameOver;
        log::info!("Game over with score {}", self.score.floor());
    }

    /// Host frame callback: reads the clock and steps
    pub fn frame(&mut self, now: f64, focused: bool, scene: &mut impl Scene, hud: &mut impl Hud) {
        let raw_dt = self.clock.delta(now);
        self.step(raw_dt, focused, scene, hud);
    }

    /// Advance one frame by `raw_dt` seconds of wall time
    ///
    /// Unfocused windows advance nothing. Outside a run the update still
    /// happens but with zero elapsed time.
    pub fn step(&mut self, raw_dt: f32, focused: bool, scene: &mut impl Scene, hud: &mut impl Hud) {
        self.world.player.set_jump(self.input.jump);

        if !focused {
            return;
        }
        let dt = if self.phase == SessionPhase::Running {
            raw_dt.max(0.0) * self.speed
        } else {
            0.0
        };
        self.update_game(dt, scene, hud);
    }

    fn update_game(&mut self, dt: f32, scene: &mut impl Scene, hud: &mut impl Hud) {
        self.world.player.update(dt);

        let attacked_this_frame = self.input.attack && !self.input.attack_was_pressed;
        self.input.attack_was_pressed = self.input.attack;

        let player = &mut self.world.player;
        let attack = if player.is_grounded() && player.can_attack && attacked_this_frame {
            let volume = Aabb::from_center_and_size(player.center(), self.tuning.attack.size);
            player.attack();
            self.last_attack = Some(volume);
            Some(volume)
        } else {
            None
        };

        self.update_obstacles(dt, attack, scene, hud);
        self.world.scroll_background(dt);
        self.update_score_and_speed(dt);
        hud.set_score(self.score);
    }

    fn update_obstacles(&mut self, dt: f32, attack: Option<Aabb>, scene: &mut impl Scene, hud: &mut impl Hud) {
        for slot in 0..OBSTACLE_SLOTS {
            let obstacle = &mut self.world.obstacles[slot];
            obstacle.update(dt, &self.world.resources);

            if obstacle.destructible && attack.is_some_and(|volume| volume.intersects(&obstacle.collider)) {
                obstacle.hit();
                log::debug!("Slot {slot} {} cut down", obstacle.kind.name());
            }

            let collided = obstacle.enabled && self.world.player.collider.intersects(&obstacle.collider);
            let scrolled_out = obstacle.is_scrolled_out();

            if collided {
                self.game_over(hud);
            }
            if scrolled_out {
                self.world.obstacles[slot].remove(scene);
                self.world.add_obstacle(slot, scene);
            }
        }
    }

    /// Score accrues in real time; speed grows with score until it reaches the cap, then freezes
    fn update_score_and_speed(&mut self, dt: f32) {
        let pacing = &self.tuning.pacing;
        self.score += dt / self.speed * pacing.score_rate;
        if self.speed < pacing.max_speed {
            let target = pacing.base_speed + self.score / pacing.speed_score_divisor;
            self.speed = target.max(self.speed).min(pacing.max_speed);
        }
    }
}
