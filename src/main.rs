//! Cosmic Jumper entry point
//!
//! Headless run: no window, the seeded autopilot holds the keys and the
//! session is advanced in fixed 60 Hz frames until it ends or the time limit
//! runs out. Usage: `cosmic-jumper [settings.json]`.

use cosmic_jumper::autopilot::Autopilot;
use cosmic_jumper::consts::SIM_DT;
use cosmic_jumper::{HudSnapshot, Runner, Settings};

/// Give up after five minutes of game time
const MAX_FRAMES: u32 = 5 * 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Cosmic Jumper (headless) starting...");

    let json = std::env::args().nth(1).and_then(|path| {
        std::fs::read_to_string(&path)
            .map_err(|e| log::warn!("Could not read {}: {}", path, e))
            .ok()
    });
    let settings = Settings::load_or_default(json.as_deref());

    let mut autopilot = Autopilot::new(settings.demo_seed);
    let mut runner = Runner::new(settings);
    runner.start_game();

    let mut frames = 0;
    while runner.is_running() && frames < MAX_FRAMES {
        runner.input = autopilot.next_input();
        runner.advance(SIM_DT);
        frames += 1;

        if frames % 600 == 0 {
            let hud = HudSnapshot::from_state(&runner.state);
            log::info!(
                "t={}s level={} health={} score={} coins={}",
                frames / 60,
                hud.level_label,
                hud.health,
                hud.score,
                hud.coins
            );
        }
    }

    let hud = HudSnapshot::from_state(&runner.state);
    match hud.banner {
        Some(banner) => println!("{:?}", banner),
        None => println!("Time limit reached on {} (score {})", hud.level_label, hud.score),
    }
    println!(
        "Health {}/{}  Coins {}  Score {}",
        hud.health, hud.max_health, hud.coins, hud.score
    );
    if let (Some(rank), Some(best)) = (runner.last_rank, runner.high_scores.top_score()) {
        println!("High score board: #{} (best {})", rank, best);
    }
}
