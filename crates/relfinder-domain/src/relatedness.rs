//! Relatedness rows as stored, and the pairs that survive a threshold

use std::fmt;

/// Opaque subject identifier (a "grid")
pub type Identifier = String;

/// One stored relatedness estimate
///
/// Mirrors the physical layout `(row_id, ID1, ID2, estimated_relatedness)`.
/// `row_id` is carried along for debug output only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatednessRow {
    /// Storage row id
    pub row_id: i64,

    /// First identifier of the pair
    pub id1: Identifier,

    /// Second identifier of the pair
    pub id2: Identifier,

    /// Estimated relatedness, 0-9 in practice
    pub estimated_relatedness: i64,
}

impl RelatednessRow {
    /// Create a new row
    pub fn new(
        row_id: i64,
        id1: impl Into<Identifier>,
        id2: impl Into<Identifier>,
        estimated_relatedness: i64,
    ) -> Self {
        Self {
            row_id,
            id1: id1.into(),
            id2: id2.into(),
            estimated_relatedness,
        }
    }

    /// View this row as a report line, if it reaches `threshold`
    pub fn thresholded(&self, threshold: i64) -> Option<ThresholdedPair<'_>> {
        ThresholdedPair::keep(&self.id1, &self.id2, self.estimated_relatedness, threshold)
    }
}

/// A pair whose score is at least the report threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdedPair<'a> {
    /// First identifier
    pub id1: &'a str,

    /// Second identifier
    pub id2: &'a str,

    /// Relatedness score
    pub score: i64,
}

impl<'a> ThresholdedPair<'a> {
    /// Build a pair only when `score >= threshold`
    pub fn keep(id1: &'a str, id2: &'a str, score: i64, threshold: i64) -> Option<Self> {
        (score >= threshold).then_some(Self { id1, id2, score })
    }
}

impl fmt::Display for ThresholdedPair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.id1, self.id2, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive() {
        let row = RelatednessRow::new(1, "A", "B", 5);
        assert!(row.thresholded(5).is_some());
        assert!(row.thresholded(6).is_none());
        assert_eq!(row.thresholded(0).unwrap().score, 5);
    }

    #[test]
    fn test_display_is_tab_separated() {
        let pair = ThresholdedPair::keep("A", "B", 3, 0).unwrap();
        assert_eq!(pair.to_string(), "A\tB\t3");
    }
}
