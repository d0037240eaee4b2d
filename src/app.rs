use crate::config::Settings;
use crate::render::{RedrawMode, Renderer, TerminalSession};
use crate::tank::Tank;
use crate::viewport::{ResizeDebouncer, Viewport};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType},
};
use std::io;
use std::time::{Duration, Instant};

pub(crate) fn run(settings: Settings) -> Result<()> {
    log::info!(
        "starting: {} fish, {:?} interval, bubble chance {}, seed {:#x}",
        settings.fish_count,
        settings.interval,
        settings.bubble_chance,
        settings.seed
    );

    let (cols, rows) = terminal::size().context("querying terminal size")?;
    let _session = TerminalSession::begin()?;
    let mut out = io::stdout();

    let mut tank = Tank::new(&settings, Viewport::from_terminal(cols, rows));
    let mut debouncer = ResizeDebouncer::new(settings.resize_quiet);
    let mut renderer = Renderer::new(if settings.diff_redraw {
        RedrawMode::Diff
    } else {
        RedrawMode::Full
    });
    let mut clock = FrameClock::new(settings.interval, Instant::now());
    let mut frames: u64 = 0;

    loop {
        if drain_events(&mut debouncer)? {
            break;
        }

        if let Some(vp) = debouncer.poll(Instant::now()) {
            if vp != tank.viewport {
                log::debug!(
                    "viewport {}x{} -> {}x{}",
                    tank.viewport.width,
                    tank.viewport.height,
                    vp.width,
                    vp.height
                );
                tank.resize(vp);
                renderer.invalidate();
                execute!(out, Clear(ClearType::All))?;
            }
        }

        let grid = tank.compose();
        renderer.present(&mut out, &grid).context("writing frame")?;
        tank.advance_fish();
        frames += 1;

        std::thread::sleep(clock.next_delay(Instant::now()));
    }

    log::info!(
        "stopped after {frames} frames with {} bubbles afloat",
        tank.bubbles.items().len()
    );
    Ok(())
}

/// Reads whatever is queued without blocking. Returns true when a quit key
/// was pressed.
fn drain_events(debouncer: &mut ResizeDebouncer) -> Result<bool> {
    while event::poll(Duration::ZERO)? {
        match event::read()? {
            Event::Resize(cols, rows) => debouncer.note(cols, rows, Instant::now()),
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) if is_quit(code, modifiers) => return Ok(true),
            _ => {}
        }
    }
    Ok(false)
}

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Fixed-interval deadlines. A late frame rebases the schedule instead of
/// firing a burst to catch up.
struct FrameClock {
    interval: Duration,
    next: Instant,
}

impl FrameClock {
    fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            next: start + interval,
        }
    }

    fn next_delay(&mut self, now: Instant) -> Duration {
        let delay = self.next.saturating_duration_since(now);
        if delay.is_zero() {
            self.next = now + self.interval;
        } else {
            self.next += self.interval;
        }
        delay
    }
}
