//! HUD interface
//!
//! The simulation pushes score and overlay changes; it never reads anything back.

/// Full-screen overlay currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    /// No overlay, in-game HUD visible
    #[default]
    None,
    /// Title screen before the first run
    StartLogo,
    /// Shown after a collision
    GameOver,
}

/// HUD collaborator driven by the game
pub trait Hud {
    fn set_score(&mut self, score: f32);
    /// Show the title (`game_over == false`) or game-over overlay
    fn enable_logos(&mut self, game_over: bool);
    /// Hide the title (`reset == false`) or game-over overlay
    fn disable_logos(&mut self, reset: bool);
}

/// HUD model that records what a sprite renderer would display
#[derive(Debug, Clone, Default)]
pub struct HudState {
    pub overlay: Overlay,
    /// In-game HUD (key hints and score) visible
    pub in_game: bool,
    /// Whole-number score text
    pub score_text: String,
}

impl HudState {
    pub fn new() -> Self {
        Self {
            overlay: Overlay::None,
            in_game: false,
            score_text: "0".to_string(),
        }
    }

    /// Digits the renderer should draw, left to right
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.score_text.bytes().map(|b| b - b'0')
    }
}

impl Hud for HudState {
    fn set_score(&mut self, score: f32) {
        self.score_text = (score.max(0.0).floor() as u64).to_string();
    }

    fn enable_logos(&mut self, game_over: bool) {
        self.in_game = false;
        self.overlay = if game_over { Overlay::GameOver } else { Overlay::StartLogo };
    }

    fn disable_logos(&mut self, reset: bool) {
        self.in_game = true;
        if reset || self.overlay == Overlay::StartLogo {
            self.overlay = Overlay::None;
        }
    }
}
