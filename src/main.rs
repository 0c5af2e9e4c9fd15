//! Bamboo Dash headless runner
//!
//! Drives the simulation at a fixed 60 Hz with the autopilot at the keys and
//! prints a JSON summary of the run. Useful for balancing tuning files.
//!
//! Usage: `bamboo-dash [--seed N] [--frames N] [--tuning FILE] [--dump-tuning]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use bamboo_dash::sim::{Autopilot, Buttons, Game, Key, SceneGraph, SessionPhase};
    use bamboo_dash::{HudState, Resources, Tuning};
    use serde::Serialize;

    /// Host frame length in seconds
    const FRAME_DT: f32 = 1.0 / 60.0;

    struct Options {
        seed: u64,
        frames: u32,
        tuning: Option<String>,
        dump_tuning: bool,
    }

    impl Default for Options {
        fn default() -> Self {
            Self {
                seed: 0x5eed,
                frames: 60 * 120,
                tuning: None,
                dump_tuning: false,
            }
        }
    }

    fn parse_args() -> Options {
        let mut options = Options::default();
        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => match args.next().and_then(|v| v.parse().ok()) {
                    Some(seed) => options.seed = seed,
                    None => log::warn!("--seed needs a number, keeping {}", options.seed),
                },
                "--frames" => match args.next().and_then(|v| v.parse().ok()) {
                    Some(frames) => options.frames = frames,
                    None => log::warn!("--frames needs a number, keeping {}", options.frames),
                },
                "--tuning" => options.tuning = args.next(),
                "--dump-tuning" => options.dump_tuning = true,
                other => log::warn!("Ignoring unknown argument {other}"),
            }
        }
        options
    }

    fn load_tuning(path: Option<&str>) -> Tuning {
        let Some(path) = path else {
            return Tuning::default();
        };
        match Tuning::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Tuning::default()
            }
        }
    }

    #[derive(Debug, Serialize)]
    struct RunSummary {
        seed: u64,
        frames: u32,
        runs: u32,
        best_score: u64,
        final_score: u64,
        final_speed: f32,
        scene_meshes: usize,
    }

    /// Send key events for buttons that changed since last frame
    fn apply_buttons(game: &mut Game, held: &mut Buttons, want: Buttons, scene: &mut SceneGraph, hud: &mut HudState) {
        for (key, was, now) in [(Key::Jump, held.jump, want.jump), (Key::Attack, held.attack, want.attack)] {
            if now && !was {
                game.key_down(key, scene, hud);
            } else if was && !now {
                game.key_up(key);
            }
        }
        *held = want;
    }

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        log::info!("Bamboo Dash (headless) starting...");

        let options = parse_args();
        let tuning = load_tuning(options.tuning.as_deref());

        if options.dump_tuning {
            match tuning.to_json() {
                Ok(json) => println!("{json}"),
                Err(e) => log::error!("{e}"),
            }
            return;
        }

        let mut scene = SceneGraph::new();
        let mut hud = HudState::new();
        let resources = Resources::new();
        // No loader here, so every model keeps its placeholder bounds
        for model in resources.pending() {
            let asset = resources.asset(model);
            log::debug!("{model:?}: {} [{}] using placeholder bounds", asset.path, asset.material);
        }
        let mut game = Game::new(options.seed, tuning, resources, &mut scene, &mut hud);
        let autopilot = Autopilot::default();
        let mut held = Buttons::default();

        let mut runs = 0;
        let mut best_score: u64 = 0;

        for _ in 0..options.frames {
            match game.phase() {
                SessionPhase::Idle | SessionPhase::GameOver => {
                    best_score = best_score.max(game.score as u64);
                    // Let go of everything, then tap a key to (re)start
                    game.key_up(Key::Jump);
                    game.key_up(Key::Attack);
                    game.key_down(Key::Other, &mut scene, &mut hud);
                    game.key_up(Key::Other);
                    held = Buttons::default();
                    runs += 1;
                }
                SessionPhase::Running => {
                    let want = autopilot.decide(&game.world);
                    apply_buttons(&mut game, &mut held, want, &mut scene, &mut hud);
                }
            }
            game.step(FRAME_DT, true, &mut scene, &mut hud);
        }
        best_score = best_score.max(game.score as u64);

        let summary = RunSummary {
            seed: options.seed,
            frames: options.frames,
            runs,
            best_score,
            final_score: game.score as u64,
            final_speed: game.speed,
            scene_meshes: scene.live_count(),
        };
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize summary: {e}"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host embeds the library directly
}
