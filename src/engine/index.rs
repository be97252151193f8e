use std::sync::OnceLock;

use super::{CountSet, Rule};
use crate::rule::{Rate, RuleSet};

/// Counts below this bound get a dense lookup slot; the rest are kept
/// in a sparse set next to the row.
const DENSE_LEN: usize = 64;

/// One compiled rate: a dense lookup row for small counts and the rare larger
/// counts kept as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    dense: Box<[bool]>,
    sparse: Rate,
}

impl TableRow {
    fn compile(rate: &Rate) -> Self {
        let len = rate
            .iter()
            .filter(|&count| count < DENSE_LEN)
            .max()
            .map_or(0, |max| max + 1);
        let mut dense = vec![false; len];
        let mut sparse = Vec::new();
        for count in rate.iter() {
            match dense.get_mut(count) {
                Some(slot) => *slot = true,
                None => sparse.push(count),
            }
        }
        Self {
            dense: dense.into_boxed_slice(),
            sparse: sparse.into_iter().collect(),
        }
    }

    /// The dense part of the row, indexed by live-neighbor count.
    #[inline]
    pub fn dense(&self) -> &[bool] {
        &self.dense
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dense.is_empty() && self.sparse.is_empty()
    }
}

impl CountSet for TableRow {
    #[inline]
    fn contains_count(&self, count: usize) -> bool {
        if count < DENSE_LEN {
            self.dense.contains_count(count)
        } else {
            self.sparse.contains(count)
        }
    }
}

/// A rule set compiled into lookup rows indexed by live-neighbor count.
///
/// Each dense row ends at the largest small count in its rate, so counts past
/// the end never match, exactly like a count missing from the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    birth: TableRow,
    survival: TableRow,
}

impl RuleTable {
    pub fn compile(rule: &RuleSet) -> Self {
        Self {
            birth: TableRow::compile(rule.birth_rate()),
            survival: TableRow::compile(rule.death_rate()),
        }
    }
}

impl From<&RuleSet> for RuleTable {
    #[inline]
    fn from(rule: &RuleSet) -> Self {
        Self::compile(rule)
    }
}

impl Rule for RuleTable {
    type Rate = TableRow;

    #[inline]
    fn birth_rate(&self) -> &TableRow {
        &self.birth
    }

    #[inline]
    fn death_rate(&self) -> &TableRow {
        &self.survival
    }
}

/// Returns a Singleton lookup table for Conway's rule set
///
/// Equivalent to compiling [`RuleSet::conway`] once and storing the result
pub fn conway_table() -> &'static RuleTable {
    static TABLE: OnceLock<RuleTable> = OnceLock::new();
    TABLE.get_or_init(|| RuleTable::compile(&RuleSet::conway()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vitality;

    fn neighbors(alive: usize) -> Vec<Vitality> {
        let mut neighbors = vec![Vitality::Dead; 8];
        neighbors[..alive].fill(Vitality::Alive);
        neighbors
    }

    #[test]
    fn rules_match_conway_life() {
        let table = conway_table();

        assert_eq!(table.next_health(Vitality::Alive, &neighbors(2)), Vitality::Alive);
        assert_eq!(table.next_health(Vitality::Alive, &neighbors(3)), Vitality::Alive);
        assert_eq!(table.next_health(Vitality::Dead, &neighbors(3)), Vitality::Alive);

        assert_eq!(table.next_health(Vitality::Alive, &neighbors(0)), Vitality::Dead);
        assert_eq!(table.next_health(Vitality::Alive, &neighbors(1)), Vitality::Dead);
        assert_eq!(table.next_health(Vitality::Alive, &neighbors(4)), Vitality::Dead);
        assert_eq!(table.next_health(Vitality::Dead, &neighbors(2)), Vitality::Dead);
        assert_eq!(table.next_health(Vitality::Dead, &neighbors(4)), Vitality::Dead);
    }

    #[test]
    fn rows_end_at_largest_count() {
        let table = RuleTable::from(&RuleSet::new([], [2, 5]));

        assert!(table.birth_rate().is_empty());
        assert_eq!(
            table.death_rate().dense(),
            &[false, false, true, false, false, true][..]
        );
        assert!(!table.next_health(true, [true; 6]));
    }

    #[test]
    fn huge_counts_stay_sparse() {
        let rule = RuleSet::new([3, usize::MAX], [2, 3, 1_000_000_000_000]);
        let table = RuleTable::compile(&rule);

        assert_eq!(table.birth_rate().dense().len(), 4);
        assert_eq!(table.death_rate().dense().len(), 4);
        assert!(table.birth_rate().contains_count(usize::MAX));
        assert!(table.death_rate().contains_count(1_000_000_000_000));
        assert!(!table.death_rate().contains_count(DENSE_LEN));
    }

    #[test]
    fn counts_at_the_dense_boundary() {
        let rule = RuleSet::new([DENSE_LEN - 1], [DENSE_LEN]);
        let table = RuleTable::compile(&rule);
        let crowd = vec![true; DENSE_LEN + 4];

        assert_eq!(table.birth_rate().dense().len(), DENSE_LEN);
        assert!(table.next_health(false, &crowd[..DENSE_LEN - 1]));
        assert!(table.next_health(true, &crowd[..DENSE_LEN]));
        assert!(!table.next_health(true, &crowd));
    }
}
