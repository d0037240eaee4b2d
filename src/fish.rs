use crate::grid::Grid;
use crate::sprite::{self, Facing, FishSprite};
use crate::viewport::Viewport;
use rand::{seq::SliceRandom, Rng};

/// Row fractions of the tank height, handed out to fish by index.
const ROW_FRACTIONS: [f32; 5] = [0.2, 0.4, 0.6, 0.8, 0.3];

/// Spacing between the starting columns of the forward-facing fish.
const START_SPACING: i32 = 15;

pub(crate) fn row_slots(height: u16) -> [i32; 5] {
    ROW_FRACTIONS.map(|f| (height as f32 * f).floor() as i32)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Lane {
    /// Follows one of the height-fraction rows, so it tracks resizes.
    Slot(usize),
    /// Row picked by a scatter.
    Pinned(i32),
    /// No free cell was left for this fish; it is never drawn or moved.
    OffGrid,
}

#[derive(Clone, Debug)]
pub(crate) struct Fish {
    pub(crate) x: i32,
    pub(crate) lane: Lane,
    pub(crate) facing: Facing,
    pub(crate) sprite: &'static FishSprite,
    pub(crate) speed: i32,
}

impl Fish {
    pub(crate) fn new(index: usize, x: i32, facing: Facing) -> Self {
        let sprite = FishSprite::for_index(index);
        Self {
            x,
            lane: Lane::Slot(index % ROW_FRACTIONS.len()),
            facing,
            sprite,
            speed: sprite.speed,
        }
    }

    /// Starting school: fish spaced out from the left edge swimming right,
    /// plus one entering from the right edge swimming left.
    pub(crate) fn school(count: usize, width: u16) -> Vec<Fish> {
        (0..count)
            .map(|i| {
                if count > 1 && i == count - 1 {
                    Fish::new(i, width as i32 - 1, Facing::Backward)
                } else {
                    Fish::new(i, START_SPACING * i as i32, Facing::Forward)
                }
            })
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.sprite.len(self.facing)
    }

    pub(crate) fn y(&self, slots: &[i32; 5]) -> i32 {
        match self.lane {
            Lane::Slot(i) => slots[i % slots.len()],
            Lane::Pinned(y) => y,
            Lane::OffGrid => -1,
        }
    }

    /// Blanks the cells the sprite is about to cover, so nothing under it
    /// shows through the glyph gaps. Cells around it are left alone.
    pub(crate) fn clear_footprint(&self, grid: &mut Grid, slots: &[i32; 5]) {
        if self.lane == Lane::OffGrid {
            return;
        }
        sprite::clear(grid, self.x, self.y(slots), self.len());
    }

    pub(crate) fn draw(&self, grid: &mut Grid, slots: &[i32; 5]) {
        if self.lane == Lane::OffGrid {
            return;
        }
        sprite::place(grid, self.x, self.y(slots), self.sprite, self.facing);
    }

    /// One tick of motion. A forward fish that has reached the right bound
    /// turns around; a backward fish that runs past column 0 turns back.
    pub(crate) fn step(&mut self, width: u16) {
        if self.lane == Lane::OffGrid {
            return;
        }
        let bound = width as i32 - self.len() as i32;
        match self.facing {
            Facing::Forward => {
                if self.x >= bound {
                    self.facing = Facing::Backward;
                    self.x = bound - 1;
                } else {
                    self.x = (self.x + self.speed).min(bound);
                }
            }
            Facing::Backward => {
                self.x -= self.speed;
                if self.x < 0 {
                    self.facing = Facing::Forward;
                    self.x = 0;
                }
            }
        }
    }
}

/// Shuffles every interior cell a forward sprite of the longest type fits
/// into and deals them out. Fish past the number of free cells go off-grid.
pub(crate) fn scatter<R: Rng>(school: &mut [Fish], vp: Viewport, rng: &mut R) -> usize {
    let max_len = FishSprite::max_forward_len() as i32;
    let mut cells: Vec<(i32, i32)> = (1..vp.height as i32 - 1)
        .flat_map(|y| (1..vp.width as i32 - max_len).map(move |x| (x, y)))
        .collect();
    cells.shuffle(rng);

    let mut placed = 0;
    for (i, f) in school.iter_mut().enumerate() {
        match cells.get(i) {
            Some(&(x, y)) => {
                f.x = x;
                f.lane = Lane::Pinned(y);
                placed += 1;
            }
            None => {
                f.x = -1;
                f.lane = Lane::OffGrid;
            }
        }
    }
    placed
}
