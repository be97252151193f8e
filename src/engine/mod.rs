//! The transition engine: counting live neighbors and applying the birth or
//! death rule to produce a cell's next health.

mod index;

pub use self::index::{RuleTable, TableRow, conway_table};
use crate::vitality::{Health, Living};

/// A set of live-neighbor counts a rule can be tested against.
pub trait CountSet {
    fn contains_count(&self, count: usize) -> bool;
}

impl CountSet for [bool] {
    #[inline]
    fn contains_count(&self, count: usize) -> bool {
        self.get(count).copied().unwrap_or(false)
    }
}

/// Everything a single rule looks at: the current health, the neighbor
/// collection, and the rate that applies to this health.
#[derive(Debug)]
pub struct State<'r, H, N, S: ?Sized> {
    pub health: H,
    pub neighbors: N,
    pub rate: &'r S,
}

/// Counts the neighbors whose health is alive.
///
/// The count is bounded only by the size of the collection, so any
/// neighborhood shape works as long as the rates are chosen to match.
#[inline]
pub fn live_neighbors<N>(neighbors: N) -> usize
where
    N: IntoIterator,
    N::Item: Living,
{
    neighbors
        .into_iter()
        .filter(|neighbor| neighbor.health().is_alive())
        .count()
}

/// The rule for dead cells: alive iff the live count is in the birth rate.
///
/// A cell that is already alive is returned unchanged.
pub fn birth_rule<H, N, S>(state: State<'_, H, N, S>) -> H
where
    H: Health,
    N: IntoIterator,
    N::Item: Living,
    S: CountSet + ?Sized,
{
    if state.health.is_alive() {
        return state.health;
    }
    H::from_alive(state.rate.contains_count(live_neighbors(state.neighbors)))
}

/// The rule for living cells: alive iff the live count is in the death rate,
/// which lists the counts a cell survives.
pub fn death_rule<H, N, S>(state: State<'_, H, N, S>) -> H
where
    H: Health,
    N: IntoIterator,
    N::Item: Living,
    S: CountSet + ?Sized,
{
    H::from_alive(state.rate.contains_count(live_neighbors(state.neighbors)))
}

/// A birth/death rule pair.
///
/// Dead cells are only ever checked against [`Rule::birth_rate`] and living
/// cells only against [`Rule::death_rate`].
pub trait Rule {
    type Rate: CountSet + ?Sized;

    fn birth_rate(&self) -> &Self::Rate;
    fn death_rate(&self) -> &Self::Rate;

    /// Computes the next health without touching anything.
    #[inline]
    fn next_health<H, N>(&self, health: H, neighbors: N) -> H
    where
        H: Health,
        N: IntoIterator,
        N::Item: Living,
    {
        if health.is_alive() {
            death_rule(State {
                health,
                neighbors,
                rate: self.death_rate(),
            })
        } else {
            birth_rule(State {
                health,
                neighbors,
                rate: self.birth_rate(),
            })
        }
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    type Rate = R::Rate;

    #[inline]
    fn birth_rate(&self) -> &Self::Rate {
        (**self).birth_rate()
    }

    #[inline]
    fn death_rate(&self) -> &Self::Rate {
        (**self).death_rate()
    }
}

/// Free-function form of [`Rule::next_health`].
#[inline]
pub fn evaluate<H, N, R>(health: H, neighbors: N, rule: &R) -> H
where
    H: Health,
    N: IntoIterator,
    N::Item: Living,
    R: Rule + ?Sized,
{
    rule.next_health(health, neighbors)
}
