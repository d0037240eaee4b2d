use clap::Parser;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const MAX_FISH: usize = 64;

#[derive(Parser, Debug, Clone)]
#[command(name = "aquarium")]
#[command(about = "Animated ASCII aquarium: fish, bubbles, and a bordered tank", long_about = None)]
pub(crate) struct Args {
    /// Milliseconds between frames
    #[arg(long, default_value_t = 20)]
    interval_ms: u64,

    /// Number of fish in the tank
    #[arg(long, default_value_t = 6)]
    fish: usize,

    /// Chance per frame that a new bubble appears (0..1)
    #[arg(long, default_value_t = 0.5)]
    bubble_chance: f64,

    /// Quiet period before a terminal resize is applied (0 = immediate)
    #[arg(long, default_value_t = 300)]
    debounce_ms: u64,

    /// RNG seed (defaults to a time-derived value)
    #[arg(long)]
    seed: Option<u64>,

    /// Redraw only the cells that changed since the last frame
    #[arg(long, default_value_t = false)]
    diff: bool,

    /// Scatter the fish over random free cells at startup
    #[arg(long, default_value_t = false)]
    scatter: bool,
}

#[derive(Clone, Debug)]
pub(crate) struct Settings {
    pub(crate) interval: Duration,
    pub(crate) fish_count: usize,
    pub(crate) bubble_chance: f64,
    pub(crate) resize_quiet: Duration,
    pub(crate) seed: u64,
    pub(crate) diff_redraw: bool,
    pub(crate) scatter: bool,
}

const SEED_SALT: u64 = 0xA11CE;

impl Args {
    pub(crate) fn into_settings(self) -> Settings {
        let seed = self.seed.unwrap_or_else(time_seed);
        let bubble_chance = if self.bubble_chance.is_nan() {
            0.0
        } else {
            self.bubble_chance.clamp(0.0, 1.0)
        };
        Settings {
            interval: Duration::from_millis(self.interval_ms.max(1)),
            fish_count: self.fish.min(MAX_FISH),
            bubble_chance,
            resize_quiet: Duration::from_millis(self.debounce_ms),
            seed,
            diff_redraw: self.diff,
            scatter: self.scatter,
        }
    }
}

fn time_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    nanos ^ SEED_SALT
}

/// Flag defaults with a fixed seed, for building tanks in tests.
#[cfg(test)]
impl Default for Settings {
    fn default() -> Self {
        Args::parse_from(["aquarium", "--seed", "0"]).into_settings()
    }
}
