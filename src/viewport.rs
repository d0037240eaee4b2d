use std::time::{Duration, Instant};

/// Visible tank size in cells. One terminal row is kept back for the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Viewport {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Viewport {
    pub(crate) fn from_terminal(cols: u16, rows: u16) -> Self {
        Self {
            width: cols.max(1),
            height: rows.saturating_sub(1).max(1),
        }
    }
}

/// Holds back resize notifications until the terminal has been quiet for
/// `quiet`. A zero period releases every size on the next poll.
#[derive(Debug)]
pub(crate) struct ResizeDebouncer {
    quiet: Duration,
    pending: Option<(u16, u16)>,
    last_note: Option<Instant>,
}

impl ResizeDebouncer {
    pub(crate) fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            last_note: None,
        }
    }

    pub(crate) fn note(&mut self, cols: u16, rows: u16, now: Instant) {
        self.pending = Some((cols, rows));
        self.last_note = Some(now);
    }

    pub(crate) fn poll(&mut self, now: Instant) -> Option<Viewport> {
        let last = self.last_note?;
        if now.saturating_duration_since(last) < self.quiet {
            return None;
        }
        self.last_note = None;
        self.pending
            .take()
            .map(|(cols, rows)| Viewport::from_terminal(cols, rows))
    }
}
