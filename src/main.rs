mod app;
mod bubbles;
mod config;
mod fish;
mod grid;
mod render;
mod sprite;
mod tank;
mod viewport;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let settings = config::Args::parse().into_settings();
    app::run(settings)
}
