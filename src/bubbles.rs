use crate::grid::{Cell, Grid};
use crate::viewport::Viewport;
use rand::Rng;

pub(crate) const BUBBLE: char = 'o';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Bubble {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

#[derive(Debug)]
pub(crate) struct Bubbles {
    chance: f64,
    items: Vec<Bubble>,
}

impl Bubbles {
    pub(crate) fn new(chance: f64) -> Self {
        Self {
            chance: chance.clamp(0.0, 1.0),
            items: Vec::new(),
        }
    }

    pub(crate) fn items(&self) -> &[Bubble] {
        &self.items
    }

    #[cfg(test)]
    pub(crate) fn insert(&mut self, bubble: Bubble) {
        self.items.push(bubble);
    }

    /// Maybe releases one bubble just above the bottom border.
    pub(crate) fn spawn<R: Rng>(&mut self, rng: &mut R, vp: Viewport) {
        if !rng.gen_bool(self.chance) {
            return;
        }
        let x = rng.gen_range(0..vp.width.max(1)) as i32;
        let y = vp.height as i32 - 2;
        self.items.push(Bubble { x, y });
    }

    /// Clears each bubble's old cell and moves it up one row. Bubbles that
    /// leave through the top are dropped.
    pub(crate) fn advance(&mut self, grid: &mut Grid) {
        self.items.retain_mut(|b| {
            grid.set(b.x, b.y, Cell::blank());
            b.y -= 1;
            b.y >= 0
        });
    }

    pub(crate) fn draw(&self, grid: &mut Grid) {
        for b in &self.items {
            grid.set(b.x, b.y, Cell::plain(BUBBLE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    const VP: Viewport = Viewport {
        width: 40,
        height: 10,
    };

    #[test]
    fn spawn_lands_above_bottom_border() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut b = Bubbles::new(1.0);
        for _ in 0..200 {
            b.spawn(&mut rng, VP);
        }
        assert_eq!(b.items().len(), 200);
        assert!(b.items().iter().all(|p| p.y == 8 && (0..40).contains(&p.x)));
    }

    #[test]
    fn zero_chance_never_spawns() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut b = Bubbles::new(0.0);
        for _ in 0..100 {
            b.spawn(&mut rng, VP);
        }
        assert!(b.items().is_empty());
    }

    #[test]
    fn advance_moves_up_one_or_drops_at_top() {
        let mut b = Bubbles::new(0.0);
        b.items = vec![
            Bubble { x: 3, y: 0 },
            Bubble { x: 4, y: 5 },
            Bubble { x: 5, y: 0 },
            Bubble { x: 6, y: 1 },
        ];
        let mut g = Grid::build(VP.width, VP.height);
        b.advance(&mut g);
        assert_eq!(
            b.items(),
            &[Bubble { x: 4, y: 4 }, Bubble { x: 6, y: 0 }]
        );
    }

    #[test]
    fn advance_blanks_old_cell_and_draw_marks_new_one() {
        let mut b = Bubbles::new(0.0);
        b.items = vec![Bubble { x: 7, y: 5 }];
        let mut g = Grid::build(VP.width, VP.height);
        b.draw(&mut g);
        assert_eq!(g.get(7, 5).unwrap().ch, BUBBLE);

        b.advance(&mut g);
        b.draw(&mut g);
        assert_eq!(g.get(7, 5), Some(Cell::blank()));
        assert_eq!(g.get(7, 4).unwrap().ch, BUBBLE);
    }

    #[test]
    fn bubbles_outside_a_shrunken_grid_are_harmless() {
        let mut b = Bubbles::new(0.0);
        b.items = vec![Bubble { x: 70, y: 30 }];
        let mut g = Grid::build(VP.width, VP.height);
        let before = g.clone();
        b.advance(&mut g);
        b.draw(&mut g);
        assert_eq!(g, before);
        assert_eq!(b.items(), &[Bubble { x: 70, y: 29 }]);
    }

    #[test]
    fn five_forced_ticks_rise_in_lockstep() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut b = Bubbles::new(1.0);
        let mut prev: Vec<Bubble> = Vec::new();
        for tick in 1..=5 {
            let mut g = Grid::build(VP.width, VP.height);
            b.spawn(&mut rng, VP);
            b.advance(&mut g);
            b.draw(&mut g);

            assert_eq!(b.items().len(), tick);
            for (old, new) in prev.iter().zip(b.items()) {
                assert_eq!(new.x, old.x);
                assert_eq!(new.y, old.y - 1);
            }
            assert_eq!(b.items().last().unwrap().y, 7);
            prev = b.items().to_vec();
        }
        // Oldest bubble spawned at row 8 and has risen five times.
        assert_eq!(b.items()[0].y, 3);
    }
}
