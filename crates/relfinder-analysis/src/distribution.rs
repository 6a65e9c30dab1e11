//! Relatedness value distributions

use relfinder_domain::RelatednessRow;

/// Relatedness values of a set of rows; the pair identifiers are dropped
pub fn flatten_scores<'a>(rows: impl IntoIterator<Item = &'a RelatednessRow>) -> Vec<i64> {
    rows.into_iter().map(|row| row.estimated_relatedness).collect()
}

/// One histogram bar, `[start, end)` (the last bin is closed)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    /// Lower edge
    pub start: f64,

    /// Upper edge
    pub end: f64,

    /// Values falling in the bin
    pub count: usize,
}

/// Equal-width histogram spanning the observed values
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `nbins` equal-width bins over `[min, max]`
    ///
    /// A single distinct value gets the range `[v - 0.5, v + 0.5]`; no values
    /// give `[0, 1]` with empty bins.
    pub fn from_values(values: &[i64], nbins: usize) -> Self {
        let nbins = nbins.max(1);
        let (lo, hi) = match (values.iter().min(), values.iter().max()) {
            (Some(&min), Some(&max)) if min < max => (min as f64, max as f64),
            (Some(&v), _) => (v as f64 - 0.5, v as f64 + 0.5),
            _ => (0.0, 1.0),
        };

        let width = (hi - lo) / nbins as f64;
        let mut edges: Vec<f64> = (0..nbins).map(|i| lo + width * i as f64).collect();
        edges.push(hi);

        let mut counts = vec![0; nbins];
        for &value in values {
            let value = value as f64;
            // rightmost edge belongs to the last bin
            let idx = edges[..nbins].partition_point(|edge| *edge <= value);
            counts[idx.saturating_sub(1).min(nbins - 1)] += 1;
        }

        Self { edges, counts }
    }

    /// Bin edges, one more than the number of bins
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Count per bin
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of binned values
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest bin count
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// `(lowest edge, highest edge)`
    pub fn range(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }

    /// Bins with their edges
    pub fn bins(&self) -> impl Iterator<Item = HistogramBin> + '_ {
        self.edges
            .windows(2)
            .zip(self.counts.iter())
            .map(|(edge, &count)| HistogramBin {
                start: edge[0],
                end: edge[1],
                count,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_scores() {
        let rows = vec![
            RelatednessRow::new(1, "A", "B", 3),
            RelatednessRow::new(2, "A", "C", 0),
            RelatednessRow::new(3, "B", "C", 9),
        ];
        assert_eq!(flatten_scores(&rows), vec![3, 0, 9]);
    }

    #[test]
    fn test_histogram() {
        let values = vec![0, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 4];
        let hist = Histogram::from_values(&values, 4);

        assert_eq!(hist.edges(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
        // 3 and 4 share the closed last bin
        assert_eq!(hist.counts(), &[1, 2, 3, 9]);
        assert_eq!(hist.total(), values.len());
        assert_eq!(hist.max_count(), 9);
    }

    #[test]
    fn test_default_ten_bins_over_zero_to_nine() {
        let values: Vec<i64> = (0..10).collect();
        let hist = Histogram::from_values(&values, 10);
        assert_eq!(hist.counts(), &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1]);
        assert_eq!(hist.range(), (0.0, 9.0));
    }

    #[test]
    fn test_single_value() {
        let hist = Histogram::from_values(&[4, 4, 4], 10);
        assert_eq!(hist.range(), (3.5, 4.5));
        assert_eq!(hist.total(), 3);
        assert_eq!(hist.counts()[5], 3);
    }

    #[test]
    fn test_empty_values() {
        let hist = Histogram::from_values(&[], 10);
        assert_eq!(hist.range(), (0.0, 1.0));
        assert_eq!(hist.total(), 0);
        assert_eq!(hist.bins().count(), 10);
    }
}
