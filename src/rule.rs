use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::enc::{BirthSurvival, RuleCodec, SurvivalBirth};
use crate::engine::{CountSet, Rule};
use crate::error::{Phase, RuleError};

/// A set of live-neighbor counts.
///
/// No upper bound is imposed here. A count that the topology can never
/// produce simply never matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Rate(BTreeSet<usize>);

impl Rate {
    #[inline]
    pub fn contains(&self, count: usize) -> bool {
        self.0.contains(&count)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// The largest count in the set, if any.
    #[inline]
    pub fn max(&self) -> Option<usize> {
        self.0.last().copied()
    }
}

impl FromIterator<usize> for Rate {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl CountSet for Rate {
    #[inline]
    fn contains_count(&self, count: usize) -> bool {
        self.contains(count)
    }
}

/// The pair of neighbor-count sets that parameterize an automaton.
///
/// `birth_rate` lists the counts that bring a dead cell to life.
/// `death_rate` lists the counts under which a living cell stays alive; any
/// other count kills it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleSet {
    birth_rate: Rate,
    death_rate: Rate,
}

impl RuleSet {
    /// Creates a rule set without validating it.
    ///
    /// Empty sets and counts beyond any neighborhood size are accepted.
    pub fn new<B, D>(birth: B, death: D) -> Self
    where
        B: IntoIterator<Item = usize>,
        D: IntoIterator<Item = usize>,
    {
        Self {
            birth_rate: birth.into_iter().collect(),
            death_rate: death.into_iter().collect(),
        }
    }

    /// Creates a rule set and checks it against a neighborhood of
    /// `max_neighbors` cells.
    pub fn try_new<B, D>(birth: B, death: D, max_neighbors: usize) -> Result<Self, RuleError>
    where
        B: IntoIterator<Item = usize>,
        D: IntoIterator<Item = usize>,
    {
        let rule = Self::new(birth, death);
        rule.validate(max_neighbors)?;
        Ok(rule)
    }

    /// B3/S23
    pub fn conway() -> Self {
        Self::new([3], [2, 3])
    }

    /// B36/S23
    pub fn high_life() -> Self {
        Self::new([3, 6], [2, 3])
    }

    /// B3678/S34678
    pub fn day_and_night() -> Self {
        Self::new([3, 6, 7, 8], [3, 4, 6, 7, 8])
    }

    /// B2/S, where every living cell dies each generation.
    pub fn seeds() -> Self {
        Self::new([2], [])
    }

    #[inline]
    pub fn birth_rate(&self) -> &Rate {
        &self.birth_rate
    }

    #[inline]
    pub fn death_rate(&self) -> &Rate {
        &self.death_rate
    }

    /// Checks that no count exceeds `max_neighbors`.
    pub fn validate(&self, max_neighbors: usize) -> Result<(), RuleError> {
        let rates = [
            (Phase::Birth, &self.birth_rate),
            (Phase::Death, &self.death_rate),
        ];
        for (phase, rate) in rates {
            if let Some(count) = rate.max().filter(|&count| count > max_neighbors) {
                log::debug!("rule {self} rejected: {phase} count {count} > {max_neighbors}");
                return Err(RuleError::OutOfRange {
                    phase,
                    count,
                    max: max_neighbors,
                });
            }
        }
        Ok(())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::conway()
    }
}

impl Rule for RuleSet {
    type Rate = Rate;

    #[inline]
    fn birth_rate(&self) -> &Rate {
        &self.birth_rate
    }

    #[inline]
    fn death_rate(&self) -> &Rate {
        &self.death_rate
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&BirthSurvival.encode(self))
    }
}

impl FromStr for RuleSet {
    type Err = RuleError;

    /// Accepts both `B3/S23` and `23/3` notations, chosen by a leading `B`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim_start().starts_with(['B', 'b']) {
            BirthSurvival.decode(s)
        } else {
            SurvivalBirth.decode(s)
        }
    }
}
