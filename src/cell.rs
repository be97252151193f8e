use std::borrow::Borrow;

use crate::engine::Rule;
use crate::rule::{Rate, RuleSet};
use crate::vitality::{Health, Living, Vitality};

/// A single cell: its current health and the rule it lives by.
///
/// The cell never holds on to its neighbors. The grid hands it a neighbor
/// collection for every evaluation, which keeps ownership of all cells with
/// the grid. Because [`Cell::advance`] takes `&mut self`, a neighbor
/// collection borrowed from the same buffer cannot be passed in, so a cell
/// can never observe a sibling's value from the generation being written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell<H = Vitality, R = RuleSet> {
    health: H,
    rule: R,
}

impl Cell {
    /// A cell following Conway's rule set.
    pub fn conway(health: Vitality) -> Self {
        Self::new(health, RuleSet::conway())
    }
}

impl<H: Health, R: Rule> Cell<H, R> {
    pub fn new(health: H, rule: R) -> Self {
        Self { health, rule }
    }

    #[inline]
    pub fn health(&self) -> H {
        self.health
    }

    #[inline]
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Computes the health this cell would have next, given its neighbors.
    ///
    /// Dead cells consult the birth rate and living cells the death rate.
    /// Nothing is written.
    #[inline]
    pub fn next_health<N>(&self, neighbors: N) -> H
    where
        N: IntoIterator,
        N::Item: Living,
    {
        self.rule.next_health(self.health, neighbors)
    }

    /// Replaces the health with `next`, returning the previous value.
    #[inline]
    pub fn commit(&mut self, next: H) -> H {
        std::mem::replace(&mut self.health, next)
    }

    /// Evaluates against `neighbors` and commits the result in one go,
    /// returning the new health.
    pub fn advance<N>(&mut self, neighbors: N) -> H
    where
        N: IntoIterator,
        N::Item: Living,
    {
        let next = self.next_health(neighbors);
        self.commit(next);
        next
    }
}

impl<H, R: Borrow<RuleSet>> Cell<H, R> {
    #[inline]
    pub fn birth_rate(&self) -> &Rate {
        Borrow::<RuleSet>::borrow(&self.rule).birth_rate()
    }

    #[inline]
    pub fn death_rate(&self) -> &Rate {
        Borrow::<RuleSet>::borrow(&self.rule).death_rate()
    }
}

impl<H: Health, R> Living for Cell<H, R> {
    type Health = H;

    #[inline]
    fn health(&self) -> H {
        self.health
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(alive: usize, total: usize) -> Vec<Cell> {
        (0..total)
            .map(|i| Cell::conway(Vitality::from(i < alive)))
            .collect()
    }

    #[test]
    fn blinker_end_underpopulation() {
        let mut cell = Cell::conway(Vitality::Alive);

        assert_eq!(cell.advance(&ring(1, 2)), Vitality::Dead);
        assert_eq!(cell.health(), Vitality::Dead);
    }

    #[test]
    fn birth_with_three() {
        let mut cell = Cell::conway(Vitality::Dead);

        assert_eq!(cell.advance(&ring(3, 8)), Vitality::Alive);
    }

    #[test]
    fn overcrowding() {
        let mut cell = Cell::conway(Vitality::Alive);

        assert_eq!(cell.advance(&ring(4, 8)), Vitality::Dead);
    }

    #[test]
    fn stable_under_repeated_evaluation() {
        for alive in [2, 3] {
            let neighbors = ring(alive, 8);
            let mut cell = Cell::conway(Vitality::Alive);
            for _ in 0..4 {
                assert_eq!(cell.advance(&neighbors), Vitality::Alive);
            }
        }
    }

    #[test]
    fn next_health_does_not_write() {
        let cell = Cell::conway(Vitality::Dead);

        assert_eq!(cell.next_health(&ring(3, 3)), Vitality::Alive);
        assert_eq!(cell.health(), Vitality::Dead);
    }

    #[test]
    fn commit_returns_previous() {
        let mut cell = Cell::conway(Vitality::Dead);

        assert_eq!(cell.commit(Vitality::Alive), Vitality::Dead);
        assert_eq!(cell.health(), Vitality::Alive);
    }

    #[test]
    fn rule_set_is_readable() {
        let rule = RuleSet::high_life();
        let shared = Cell::new(false, &rule);

        assert!(shared.birth_rate().contains(6));
        assert!(!shared.death_rate().contains(6));
        assert_eq!(*shared.rule(), &rule);
        assert_eq!(Cell::conway(Vitality::Dead).rule(), &RuleSet::conway());
    }

    #[test]
    fn boolean_cells() {
        let mut cell = Cell::new(true, RuleSet::seeds());

        assert!(!cell.advance([true, true]));
        assert!(cell.advance([true, true]));
    }
}
