use crate::grid::{Cell, Grid};
use anyhow::Context;
use crossterm::{
    cursor, execute, queue,
    style::{Print, ResetColor, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, DisableLineWrap, EnableLineWrap, EndSynchronizedUpdate,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RedrawMode {
    /// Cursor home, then every row.
    Full,
    /// Only the cells that differ from the last presented frame.
    Diff,
}

pub(crate) struct Renderer {
    mode: RedrawMode,
    front: Option<Grid>,
}

impl Renderer {
    pub(crate) fn new(mode: RedrawMode) -> Self {
        Self { mode, front: None }
    }

    /// Forces the next frame to be written in full.
    pub(crate) fn invalidate(&mut self) {
        self.front = None;
    }

    pub(crate) fn present<W: Write>(&mut self, out: &mut W, grid: &Grid) -> io::Result<()> {
        queue!(out, BeginSynchronizedUpdate)?;

        let front = match self.mode {
            RedrawMode::Full => None,
            RedrawMode::Diff => self
                .front
                .take()
                .filter(|f| f.width() == grid.width() && f.height() == grid.height()),
        };

        match front {
            Some(front) => write_changes(out, &front, grid)?,
            None => write_full(out, grid)?,
        }

        queue!(out, EndSynchronizedUpdate)?;
        out.flush()?;

        if self.mode == RedrawMode::Diff {
            self.front = Some(grid.clone());
        }
        Ok(())
    }
}

fn write_full<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    queue!(out, cursor::MoveTo(0, 0))?;
    for (y, row) in grid.rows().enumerate() {
        if y > 0 {
            // Raw mode: a bare LF does not return the carriage.
            queue!(out, Print("\r\n"))?;
        }
        for &cell in row {
            write_cell(out, cell)?;
        }
    }
    Ok(())
}

fn write_changes<W: Write>(out: &mut W, front: &Grid, back: &Grid) -> io::Result<()> {
    let w = back.width() as usize;
    for (i, (&b, &f)) in back.cells().iter().zip(front.cells()).enumerate() {
        if b == f {
            continue;
        }
        let x = (i % w) as u16;
        let y = (i / w) as u16;
        queue!(out, cursor::MoveTo(x, y))?;
        write_cell(out, b)?;
    }
    Ok(())
}

fn write_cell<W: Write>(out: &mut W, cell: Cell) -> io::Result<()> {
    match cell.fg {
        Some(fg) => queue!(out, SetForegroundColor(fg), Print(cell.ch), ResetColor),
        None => queue!(out, Print(cell.ch)),
    }
}

/// Alternate screen + raw mode for the lifetime of the value. Dropping it
/// puts the terminal back, also on an error path out of the frame loop.
pub(crate) struct TerminalSession;

impl TerminalSession {
    pub(crate) fn begin() -> anyhow::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode().context("enabling raw mode")?;
        // From here on Drop restores whatever got switched on.
        let session = TerminalSession;
        execute!(
            out,
            EnterAlternateScreen,
            DisableLineWrap,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )
        .context("entering the alternate screen")?;
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = execute!(
            out,
            EndSynchronizedUpdate,
            ResetColor,
            cursor::Show,
            EnableLineWrap,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
