use crate::grid::{Cell, Grid};
use crossterm::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Facing {
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct FishSprite {
    pub(crate) name: &'static str,
    pub(crate) forward: &'static str,
    pub(crate) mirrored: &'static str,
    pub(crate) color: Color,
    /// Cells per tick.
    pub(crate) speed: i32,
}

pub(crate) const CATALOG: [FishSprite; 5] = [
    FishSprite {
        name: "classic",
        forward: "><(((o",
        mirrored: "o)))><",
        color: Color::DarkBlue,
        speed: 1,
    },
    FishSprite {
        name: "small",
        forward: "><>",
        mirrored: "<><",
        color: Color::DarkGreen,
        speed: 2,
    },
    FishSprite {
        name: "big",
        forward: "><(((º>",
        mirrored: "º)))><",
        color: Color::DarkRed,
        speed: 1,
    },
    FishSprite {
        name: "shark",
        forward: "><====>",
        mirrored: "<====><",
        color: Color::DarkMagenta,
        speed: 2,
    },
    FishSprite {
        name: "fancy",
        forward: "><(((°>",
        mirrored: "°)))><",
        color: Color::DarkCyan,
        speed: 1,
    },
];

impl FishSprite {
    /// Sprite type for the fish at `index`, cycling through the catalog.
    pub(crate) fn for_index(index: usize) -> &'static FishSprite {
        &CATALOG[index % CATALOG.len()]
    }

    pub(crate) fn glyphs(&self, facing: Facing) -> &'static str {
        match facing {
            Facing::Forward => self.forward,
            Facing::Backward => self.mirrored,
        }
    }

    /// Width in cells: one cell per char, whatever its encoded length.
    pub(crate) fn len(&self, facing: Facing) -> usize {
        self.glyphs(facing).chars().count()
    }

    pub(crate) fn max_forward_len() -> usize {
        CATALOG.iter().map(|s| s.len(Facing::Forward)).max().unwrap_or(0)
    }
}

/// Blanks `len` cells of row `y` starting at column `x`.
pub(crate) fn clear(grid: &mut Grid, x: i32, y: i32, len: usize) {
    for i in 0..len as i32 {
        grid.set(x + i, y, Cell::blank());
    }
}

pub(crate) fn place(grid: &mut Grid, x: i32, y: i32, sprite: &FishSprite, facing: Facing) {
    for (i, ch) in sprite.glyphs(facing).chars().enumerate() {
        grid.set(x + i as i32, y, Cell::colored(ch, sprite.color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::WATER;

    #[test]
    fn multibyte_glyphs_take_one_cell_each() {
        let big = &CATALOG[2];
        assert_eq!(big.len(Facing::Forward), 7);
        assert_eq!(big.len(Facing::Backward), 6);
        assert!(big.forward.len() > 7);

        let mut g = Grid::build(20, 5);
        place(&mut g, 2, 2, big, Facing::Forward);
        let row: String = (2..9).map(|x| g.get(x, 2).unwrap().ch).collect();
        assert_eq!(row, "><(((º>");
        assert_eq!(g.get(9, 2), Some(Cell::blank()));
        assert!((2..9).all(|x| g.get(x, 2).unwrap().fg == Some(Color::DarkRed)));
    }

    #[test]
    fn small_fish_dart_faster() {
        let fast: Vec<&str> = CATALOG.iter().filter(|s| s.speed > 1).map(|s| s.name).collect();
        assert_eq!(fast, vec!["small", "shark"]);
        assert!(CATALOG.iter().all(|s| s.speed >= 1));
    }

    #[test]
    fn facing_picks_the_mirrored_glyphs() {
        let mut g = Grid::build(20, 5);
        place(&mut g, 4, 1, &CATALOG[1], Facing::Backward);
        let row: String = (4..7).map(|x| g.get(x, 1).unwrap().ch).collect();
        assert_eq!(row, "<><");
    }

    #[test]
    fn place_then_clear_leaves_blank_cells() {
        for sprite in CATALOG.iter() {
            for facing in [Facing::Forward, Facing::Backward] {
                let mut g = Grid::build(30, 6);
                let len = sprite.len(facing);
                place(&mut g, 5, 3, sprite, facing);
                clear(&mut g, 5, 3, len);
                for x in 5..5 + len as i32 {
                    assert_eq!(g.get(x, 3), Some(Cell::blank()), "{}", sprite.name);
                }
            }
        }
    }

    #[test]
    fn placement_is_clipped_at_the_edges() {
        let mut g = Grid::build(8, 4);
        place(&mut g, 5, 1, &CATALOG[3], Facing::Forward);
        assert_eq!(g.get(5, 1).unwrap().ch, '>');
        assert_eq!(g.get(6, 1).unwrap().ch, '<');
        assert_eq!(g.get(7, 1).unwrap().ch, '=');
        assert_eq!(g.get(7, 1).unwrap().fg, Some(Color::DarkMagenta));

        place(&mut g, -4, 2, &CATALOG[0], Facing::Forward);
        assert_eq!(g.get(0, 2).unwrap().ch, '(');
        assert_eq!(g.get(1, 2).unwrap().ch, 'o');
        assert_eq!(g.get(2, 2).unwrap().ch, WATER);

        let before = g.clone();
        place(&mut g, 0, 9, &CATALOG[0], Facing::Forward);
        place(&mut g, 0, -1, &CATALOG[0], Facing::Forward);
        clear(&mut g, 0, 7, 6);
        assert_eq!(g, before);
    }
}
