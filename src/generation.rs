//! Double-buffered generation helpers.
//!
//! These never decide the topology: the caller passes a wiring function that
//! maps a cell index to the indices of its neighbors. Every next health is
//! computed from the untouched slice before any cell is written.

use rayon::prelude::*;

use crate::cell::Cell;
use crate::engine::Rule;
use crate::vitality::Health;

/// What happened to a slice of cells over one committed generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Census {
    pub births: usize,
    pub deaths: usize,
    pub survivals: usize,
    pub alive: usize,
}

impl Census {
    #[inline]
    fn record(&mut self, was_alive: bool, alive: bool) {
        match (was_alive, alive) {
            (false, true) => self.births += 1,
            (true, false) => self.deaths += 1,
            (true, true) => self.survivals += 1,
            (false, false) => {}
        }
        self.alive += usize::from(alive);
    }

    /// Whether nothing was born and nothing died.
    #[inline]
    pub fn is_still(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}

/// Computes every cell's next health without writing anything.
///
/// `wiring(ix)` yields the neighbor indices of cell `ix`. Indices outside the
/// slice are skipped, the way a bounded board drops off-edge neighbors.
pub fn next_healths<H, R, F, I>(cells: &[Cell<H, R>], wiring: F) -> Vec<H>
where
    H: Health,
    R: Rule,
    F: Fn(usize) -> I,
    I: IntoIterator<Item = usize>,
{
    cells
        .iter()
        .enumerate()
        .map(|(ix, cell)| {
            let neighbors = wiring(ix).into_iter().filter_map(|n| cells.get(n));
            cell.next_health(neighbors)
        })
        .collect()
}

/// Same as [`next_healths`], with the cells evaluated on the rayon pool.
pub fn par_next_healths<H, R, F, I>(cells: &[Cell<H, R>], wiring: F) -> Vec<H>
where
    H: Health + Send + Sync,
    R: Rule + Sync,
    F: Fn(usize) -> I + Sync,
    I: IntoIterator<Item = usize>,
{
    cells
        .par_iter()
        .enumerate()
        .map(|(ix, cell)| {
            let neighbors = wiring(ix).into_iter().filter_map(|n| cells.get(n));
            cell.next_health(neighbors)
        })
        .collect()
}

/// Writes `next` into the cells in order.
///
/// `next` must hold exactly one health per cell, as returned by
/// [`next_healths`] or [`par_next_healths`] for the same slice.
///
/// # Panics
///
/// Panics before writing anything if the lengths differ, so a generation is
/// never committed partially.
pub fn commit_all<H, R>(cells: &mut [Cell<H, R>], next: Vec<H>) -> Census
where
    H: Health,
    R: Rule,
{
    assert_eq!(cells.len(), next.len(), "one next health per cell");

    let mut census = Census::default();
    for (cell, health) in cells.iter_mut().zip(next) {
        let previous = cell.commit(health);
        census.record(previous.is_alive(), health.is_alive());
    }
    log::trace!("committed {} cells: {census:?}", cells.len());
    census
}

/// Advances every cell by one generation.
pub fn step<H, R, F, I>(cells: &mut [Cell<H, R>], wiring: F) -> Census
where
    H: Health,
    R: Rule,
    F: Fn(usize) -> I,
    I: IntoIterator<Item = usize>,
{
    let next = next_healths(cells, wiring);
    commit_all(cells, next)
}

/// Advances every cell by one generation, evaluating in parallel.
pub fn par_step<H, R, F, I>(cells: &mut [Cell<H, R>], wiring: F) -> Census
where
    H: Health + Send + Sync,
    R: Rule + Sync,
    F: Fn(usize) -> I + Sync,
    I: IntoIterator<Item = usize>,
{
    let next = par_next_healths(cells, wiring);
    commit_all(cells, next)
}
