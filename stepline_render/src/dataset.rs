// Copyright 2025 the Stepline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Read-only access to x/y series.
///
/// Values are plain floats; NaN marks a missing sample. Implementations
/// should return NaN rather than panic for an out-of-range index.
pub trait XyDataset {
    /// Number of series.
    fn series_count(&self) -> usize;

    /// Number of items in `series`.
    fn item_count(&self, series: usize) -> usize;

    /// X (domain) value of an item.
    fn x(&self, series: usize, item: usize) -> f64;

    /// Y (range) value of an item.
    fn y(&self, series: usize, item: usize) -> f64;
}

/// Each element is one series of `(x, y)` pairs.
impl<S: AsRef<[(f64, f64)]>> XyDataset for [S] {
    fn series_count(&self) -> usize {
        self.len()
    }

    fn item_count(&self, series: usize) -> usize {
        self.get(series).map_or(0, |s| s.as_ref().len())
    }

    fn x(&self, series: usize, item: usize) -> f64 {
        sample(self, series, item).map_or(f64::NAN, |(x, _)| x)
    }

    fn y(&self, series: usize, item: usize) -> f64 {
        sample(self, series, item).map_or(f64::NAN, |(_, y)| y)
    }
}

fn sample<S: AsRef<[(f64, f64)]>>(data: &[S], series: usize, item: usize) -> Option<(f64, f64)> {
    data.get(series)?.as_ref().get(item).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn slice_of_series() {
        let data = [vec![(0.0, 1.0), (2.0, 3.0)], vec![]];
        let ds: &[_] = &data;
        assert_eq!(ds.series_count(), 2);
        assert_eq!(ds.item_count(0), 2);
        assert_eq!(ds.item_count(1), 0);
        assert_eq!(ds.x(0, 1), 2.0);
        assert_eq!(ds.y(0, 1), 3.0);
    }

    #[test]
    fn out_of_range_is_missing() {
        let data = [[(0.0, 1.0)]];
        let ds: &[_] = &data;
        assert_eq!(ds.item_count(5), 0);
        assert!(ds.x(0, 1).is_nan());
        assert!(ds.y(3, 0).is_nan());
    }
}
