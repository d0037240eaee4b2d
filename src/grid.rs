use crossterm::style::Color;

pub(crate) const BORDER_H: char = '-';
pub(crate) const BORDER_V: char = '|';
pub(crate) const WATER: char = ' ';

/// One display unit. A colored cell carries its own color so that it
/// survives cell-by-cell storage and is reset right after being printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) ch: char,
    pub(crate) fg: Option<Color>,
}

impl Cell {
    pub(crate) const fn plain(ch: char) -> Self {
        Self { ch, fg: None }
    }

    pub(crate) const fn colored(ch: char, fg: Color) -> Self {
        Self { ch, fg: Some(fg) }
    }

    pub(crate) const fn blank() -> Self {
        Self::plain(WATER)
    }
}

/// Per-frame tank buffer, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Grid {
    w: u16,
    h: u16,
    cells: Vec<Cell>,
}

impl Grid {
    /// Fresh tank: border rows on top and bottom, border columns on the
    /// sides of interior rows, water elsewhere. Tiny sizes just come out
    /// as all border.
    pub(crate) fn build(w: u16, h: u16) -> Self {
        let mut cells = Vec::with_capacity(w as usize * h as usize);
        for y in 0..h {
            for x in 0..w {
                let ch = if y == 0 || y == h - 1 {
                    BORDER_H
                } else if x == 0 || x == w - 1 {
                    BORDER_V
                } else {
                    WATER
                };
                cells.push(Cell::plain(ch));
            }
        }
        Self { w, h, cells }
    }

    pub(crate) fn width(&self) -> u16 {
        self.w
    }

    pub(crate) fn height(&self) -> u16 {
        self.h
    }

    #[inline]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.w as i32 || y >= self.h as i32 {
            return None;
        }
        Some(y as usize * self.w as usize + x as usize)
    }

    pub(crate) fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Out-of-range writes are dropped.
    pub(crate) fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() panics on a zero chunk size; a zero-width grid has no cells anyway.
        self.cells.chunks(self.w.max(1) as usize)
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
