//! Dino Runner entry point
//!
//! Native headless driver: loads settings and high scores, lets the
//! autopilot (or nobody) play one run, and records the result.
//!
//! Usage: `dino-runner [settings.json]`

use std::thread;
use std::time::Duration;

use dino_runner::consts::SIM_DT;
use dino_runner::platform::{Clock, ManualClock, SystemClock};
use dino_runner::settings::DEFAULT_SETTINGS_FILE;
use dino_runner::sim::GameEvent;
use dino_runner::{HighScores, Runner, Settings};

fn main() {
    env_logger::init();
    log::info!("Dino Runner (native) starting...");

    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SETTINGS_FILE.to_string());
    let settings = Settings::load(&settings_path);
    let mut high_scores = HighScores::load(&settings.score_file);

    let best = high_scores.high_score(settings.character);
    log::info!(
        "Playing as {} (best so far: {})",
        settings.character.as_str(),
        best
    );

    if settings.realtime {
        let runner = Runner::from_settings(&settings, SystemClock::new());
        play(runner, &settings, &mut high_scores);
    } else {
        let runner = Runner::from_settings(&settings, ManualClock::new(SIM_DT));
        play(runner, &settings, &mut high_scores);
    }

    for (variant, score) in high_scores.leaderboard() {
        log::info!("  {:<10} {}", variant.as_str(), score);
    }
}

/// Run frames until the run ends or the time limit is hit
fn play<C: Clock>(mut runner: Runner<C>, settings: &Settings, high_scores: &mut HighScores) {
    let frame_budget = Duration::from_secs_f32(SIM_DT);
    let limit = f64::from(settings.max_run_seconds);

    loop {
        let events = runner.frame(high_scores);

        for event in &events {
            match event {
                GameEvent::Milestone { score } => log::info!("Score {}", score),
                GameEvent::GameOver { score, .. } => {
                    log::info!("Final score: {} (seed {})", score, runner.seed());
                }
                _ => {}
            }
        }

        let run = &runner.state().run;
        if run.game_over {
            break;
        }
        if limit > 0.0 && run.elapsed >= limit {
            log::info!(
                "Time limit reached with score {} ({} cacti and {} birds cleared)",
                run.score,
                run.obstacles_cleared,
                run.birds_cleared
            );
            high_scores.save_score(settings.character, run.score);
            break;
        }
        if settings.realtime {
            thread::sleep(frame_budget);
        }
    }
}
