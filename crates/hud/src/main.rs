//! payload_hud: drives the escort overlay from a simulated or scripted round
//! and prints the HUD to the console.
//!
//! Usage: `payload_hud [script.ron] [seed]`

use anyhow::{Context, Result};
use engine_core::{GameClock, ScreenRect};
use std::path::PathBuf;

use hud::console::ConsoleHud;
use hud::script::{EventScript, EventSource, ScriptPlayback};
use hud::simulation::RoundSimulation;
use hud::{DisplayContext, EscortOverlay, HudConfig, Team, TrackObjectives};

/// Seconds between console redraws.
const PRINT_INTERVAL: f32 = 2.0;
/// Hard stop for rounds that never finish.
const MAX_ROUND_SECONDS: f32 = 900.0;
const DEFAULT_SEED: u64 = 7;
const CONSOLE_COLUMNS: usize = 60;

/// Fixed 1280x720 screen with the track bar along the top.
struct DemoDisplay {
    bar: ScreenRect,
}

impl DisplayContext for DemoDisplay {
    fn is_in_suppressed_display_mode(&self) -> bool {
        false
    }

    fn track_bounds(&self) -> Option<ScreenRect> {
        Some(self.bar)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = HudConfig::load();
    let mut args = std::env::args().skip(1);
    let script_path = args.next().map(PathBuf::from);
    let seed = match args.next() {
        Some(s) => s.parse::<u64>().with_context(|| format!("invalid seed {:?}", s))?,
        None => DEFAULT_SEED,
    };

    let mut source: Box<dyn EventSource> = match &script_path {
        Some(path) => {
            let script = EventScript::load(path)
                .with_context(|| format!("loading event script {}", path.display()))?;
            let playback = ScriptPlayback::new(script);
            log::info!("Replaying {:.1}s event script {}", playback.duration(), path.display());
            Box::new(playback)
        }
        None => {
            let defenders = if config.tracked_team == Team::Red { Team::Blue } else { Team::Red };
            log::info!("Simulating payload round (seed {})", seed);
            Box::new(RoundSimulation::new(
                TrackObjectives::evenly_spaced(4, defenders),
                config.tracked_team,
                seed,
            ))
        }
    };

    let display = DemoDisplay {
        bar: ScreenRect::new(340.0, 24.0, 600.0, 12.0),
    };
    let console = ConsoleHud::new(config.clone(), CONSOLE_COLUMNS);
    let mut clock = GameClock::new();
    clock.set_fixed_rate(config.tick_rate);
    let mut overlay = EscortOverlay::new(config);

    log::info!(
        "Escort HUD tracking {} (layout condition: {})",
        overlay.team().name(),
        overlay.layout_condition().map_or("none", |c| c.key())
    );

    let mut next_print = 0.0;
    let mut last_frame = None;
    while !source.finished() && clock.curtime() < MAX_ROUND_SECONDS {
        clock.advance(clock.fixed_timestep());
        while clock.should_fixed_update() {
            let now = clock.curtime();
            for event in source.poll(now, clock.fixed_timestep_seconds()) {
                overlay.handle_event(&event, source.objectives(), &display);
            }
            last_frame = overlay.sample(now, &display);
        }

        if clock.curtime() >= next_print {
            next_print += PRINT_INTERVAL;
            if let Some(frame) = &last_frame {
                log::debug!("Applying {} layout commands", frame.commands().len());
                print!("{}", console.render(frame, &display.bar, clock.curtime()));
            }
        }
    }

    if let Some(frame) = &last_frame {
        print!("{}", console.render(frame, &display.bar, clock.curtime()));
    }
    log::info!(
        "Round over after {:.1}s ({} ticks)",
        clock.curtime(),
        clock.frame_count()
    );
    Ok(())
}
