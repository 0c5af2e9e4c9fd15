//! Idle/demo mode - a simple bot that plays the game
//!
//! Reads the world and decides which buttons to hold this frame. The host
//! turns changes in those buttons into key events.

use super::obstacle::ObstacleKind;
use super::world::World;

/// Buttons the bot wants held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Buttons {
    pub jump: bool,
    pub attack: bool,
}

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Start a jump when a low obstacle is this close
    pub jump_lead: f32,
    /// Swing when bamboo is inside this x range
    pub attack_window: (f32, f32),
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            jump_lead: 3.5,
            attack_window: (-1.8, -0.6),
        }
    }
}

impl Autopilot {
    pub fn decide(&self, world: &World) -> Buttons {
        let player = &world.player;
        let body_top = player.collider.max.y;
        let mut buttons = Buttons::default();

        for obstacle in world.obstacles.iter().filter(|o| o.enabled) {
            let x = obstacle.position.x;
            match obstacle.kind {
                ObstacleKind::Bamboo { .. } => {
                    let (from, to) = self.attack_window;
                    if x >= from && x <= to && player.can_attack && player.is_grounded() {
                        buttons.attack = true;
                    }
                }
                ObstacleKind::Spikes { height } => {
                    // Spikes above head height are safe to run under
                    if height < body_top && x >= -self.jump_lead && x < 0.5 {
                        buttons.jump = true;
                    }
                }
                ObstacleKind::Bat { .. } => {}
            }
        }

        // Never jump into a bat
        let bat_close = world.obstacles.iter().any(|o| {
            o.enabled && matches!(o.kind, ObstacleKind::Bat { .. }) && o.position.x >= -self.jump_lead * 1.5 && o.position.x < 1.0
        });
        if bat_close && player.is_grounded() {
            buttons.jump = false;
        }

        buttons
    }
}
