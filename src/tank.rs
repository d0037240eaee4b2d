use crate::bubbles::Bubbles;
use crate::config::Settings;
use crate::fish::{self, Fish};
use crate::grid::Grid;
use crate::viewport::Viewport;
use rand::{rngs::StdRng, SeedableRng};

/// Everything one frame reads or mutates: the viewport, bubbles, fish and
/// the RNG. Owned by the frame loop.
pub(crate) struct Tank {
    pub(crate) viewport: Viewport,
    pub(crate) bubbles: Bubbles,
    pub(crate) fish: Vec<Fish>,
    rng: StdRng,
}

impl Tank {
    pub(crate) fn new(settings: &Settings, viewport: Viewport) -> Self {
        let mut tank = Self {
            viewport,
            bubbles: Bubbles::new(settings.bubble_chance),
            fish: Fish::school(settings.fish_count, viewport.width),
            rng: StdRng::seed_from_u64(settings.seed),
        };
        if settings.scatter {
            tank.scatter_fish();
        }
        tank
    }

    pub(crate) fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub(crate) fn scatter_fish(&mut self) -> usize {
        let placed = fish::scatter(&mut self.fish, self.viewport, &mut self.rng);
        log::debug!(
            "scattered {placed} of {} fish over a {}x{} tank",
            self.fish.len(),
            self.viewport.width,
            self.viewport.height
        );
        for f in &self.fish {
            log::debug!("  {} at x={} lane={:?}", f.sprite.name, f.x, f.lane);
        }
        placed
    }

    /// Builds this frame's grid: tank, then bubbles, then fish on top.
    pub(crate) fn compose(&mut self) -> Grid {
        let vp = self.viewport;
        let mut grid = Grid::build(vp.width, vp.height);

        self.bubbles.spawn(&mut self.rng, vp);
        self.bubbles.advance(&mut grid);
        self.bubbles.draw(&mut grid);

        let slots = fish::row_slots(vp.height);
        for f in &self.fish {
            f.clear_footprint(&mut grid, &slots);
        }
        for f in &self.fish {
            f.draw(&mut grid, &slots);
        }
        grid
    }

    pub(crate) fn advance_fish(&mut self) {
        let width = self.viewport.width;
        for f in &mut self.fish {
            f.step(width);
        }
    }
}
