//! Pair aggregation
//!
//! A [`PairMap`] holds one score for every unordered pair of distinct input
//! identifiers. The canonical direction of a pair is decided by input order:
//! the identifier seen first is the outer key, the other one the inner key.
//! Scores start at 0 and are overwritten by matching [`RelatednessRow`]s.

use crate::relatedness::{Identifier, RelatednessRow, ThresholdedPair};
use std::collections::HashMap;

/// Every unordered pair of input identifiers mapped to a relatedness score
///
/// Stored as a triangular table: `scores[i]` holds the scores of
/// `ids[i]` against `ids[i + 1..]`, so the last identifier's inner map is
/// always empty.
///
/// # Examples
///
/// ```
/// use relfinder_domain::{PairMap, RelatednessRow};
///
/// let mut pairs = PairMap::new(["A", "B", "C"]);
/// assert_eq!(pairs.len(), 3);
///
/// pairs.record(&RelatednessRow::new(1, "B", "A", 5));
/// assert_eq!(pairs.get("A", "B"), Some(5));
/// assert_eq!(pairs.get("C", "A"), Some(0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairMap {
    ids: Vec<Identifier>,
    positions: HashMap<Identifier, usize>,
    scores: Vec<Vec<i64>>,
}

/// Outcome of folding a batch of rows into a [`PairMap`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbsorbStats {
    /// Rows that updated a pair
    pub matched: usize,

    /// Rows that match no pair (self pairs, unknown identifiers)
    pub unmatched: usize,
}

impl AbsorbStats {
    /// Add another batch's counts to this one
    pub fn merge(&mut self, other: AbsorbStats) {
        self.matched += other.matched;
        self.unmatched += other.unmatched;
    }
}

impl PairMap {
    /// Build the map for an identifier list
    ///
    /// Identifiers already present as outer keys are skipped, so duplicates in
    /// the input do not produce extra pairs.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Identifier>,
    {
        let mut unique: Vec<Identifier> = Vec::new();
        let mut positions = HashMap::new();
        for id in ids {
            let id = id.into();
            if positions.contains_key(&id) {
                continue;
            }
            positions.insert(id.clone(), unique.len());
            unique.push(id);
        }

        let n = unique.len();
        let scores = (0..n).map(|i| vec![0; n - i - 1]).collect();

        Self {
            ids: unique,
            positions,
            scores,
        }
    }

    /// Distinct identifiers in first-appearance order
    pub fn identifiers(&self) -> &[Identifier] {
        &self.ids
    }

    /// Number of unordered pairs, `n * (n - 1) / 2`
    pub fn len(&self) -> usize {
        let n = self.ids.len();
        n * n.saturating_sub(1) / 2
    }

    /// True when there are fewer than two identifiers
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when `id` is an outer key (it may still have an empty inner map)
    pub fn contains_outer(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Inner map of an outer key: the identifiers after it and their scores
    ///
    /// Returns `None` only when `outer` is not a key at all; the last
    /// identifier yields `Some` of an empty iterator.
    pub fn inner(&self, outer: &str) -> Option<impl Iterator<Item = (&str, i64)> + '_> {
        let i = *self.positions.get(outer)?;
        let later = self.ids[i + 1..].iter().map(String::as_str);
        Some(later.zip(self.scores[i].iter().copied()))
    }

    /// Score of a pair in either order
    pub fn get(&self, a: &str, b: &str) -> Option<i64> {
        let (i, j) = self.slot(a, b).or_else(|| self.slot(b, a))?;
        Some(self.scores[i][j])
    }

    /// Fold one row into the map
    ///
    /// `id1` is tried as the outer key first, then `id2`. Both directions
    /// are resolved with presence checks, so a row whose first identifier
    /// has an empty inner map still lands on the reversed pair.
    ///
    /// Returns false when the row matches no pair.
    pub fn record(&mut self, row: &RelatednessRow) -> bool {
        let slot = self
            .slot(&row.id1, &row.id2)
            .or_else(|| self.slot(&row.id2, &row.id1));

        match slot {
            Some((i, j)) => {
                self.scores[i][j] = row.estimated_relatedness;
                true
            }
            None => false,
        }
    }

    /// Fold a batch of rows into the map
    pub fn absorb<'a>(&mut self, rows: impl IntoIterator<Item = &'a RelatednessRow>) -> AbsorbStats {
        let mut stats = AbsorbStats::default();
        for row in rows {
            if self.record(row) {
                stats.matched += 1;
            } else {
                stats.unmatched += 1;
            }
        }
        stats
    }

    /// All pairs in canonical direction and input order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, i64)> + '_ {
        self.ids.iter().enumerate().flat_map(move |(i, outer)| {
            self.ids[i + 1..]
                .iter()
                .zip(self.scores[i].iter())
                .map(move |(inner, score)| (outer.as_str(), inner.as_str(), *score))
        })
    }

    /// Pairs with `score >= threshold`
    pub fn thresholded(&self, threshold: i64) -> impl Iterator<Item = ThresholdedPair<'_>> + '_ {
        self.iter()
            .filter_map(move |(a, b, score)| ThresholdedPair::keep(a, b, score, threshold))
    }

    /// Slot of the pair when `outer` is an outer key whose inner map holds `inner`
    fn slot(&self, outer: &str, inner: &str) -> Option<(usize, usize)> {
        let i = *self.positions.get(outer)?;
        let j = *self.positions.get(inner)?;
        (j > i).then(|| (i, j - i - 1))
    }
}
