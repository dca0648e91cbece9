// Copyright 2025 the Stepline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::sink::{ItemRecord, ItemRecorder};

/// Tracks the item closest to an anchor point, typically the pointer.
///
/// Feed it as the [`ItemRecorder`] of a draw call. Distances are measured in
/// device space; items with a non-finite device position are ignored and on
/// equal distance the first recorded item wins.
#[derive(Clone, Debug)]
pub struct CrosshairState {
    anchor: Point,
    nearest: Option<ItemRecord>,
    distance: f64,
}

impl CrosshairState {
    /// Start tracking around `anchor`.
    pub fn new(anchor: Point) -> Self {
        Self {
            anchor,
            nearest: None,
            distance: f64::INFINITY,
        }
    }

    /// The anchor point.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Move the anchor and forget the current candidate.
    pub fn reset(&mut self, anchor: Point) {
        *self = Self::new(anchor);
    }

    /// Closest item seen so far.
    pub fn nearest(&self) -> Option<&ItemRecord> {
        self.nearest.as_ref()
    }

    /// Device distance from the anchor to [`nearest`](Self::nearest), if any.
    pub fn distance(&self) -> Option<f64> {
        self.nearest.map(|_| self.distance)
    }
}

impl ItemRecorder for CrosshairState {
    fn record_item(&mut self, record: &ItemRecord) {
        if !record.device.is_finite() {
            return;
        }
        let d = self.anchor.distance(record.device);
        if d < self.distance {
            self.distance = d;
            self.nearest = Some(*record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(item: usize, x: f64, y: f64) -> ItemRecord {
        ItemRecord {
            series: 0,
            item,
            data: Point::new(item as f64, 0.0),
            device: Point::new(x, y),
            negative: false,
        }
    }

    #[test]
    fn keeps_closest_item() {
        let mut state = CrosshairState::new(Point::new(10.0, 10.0));
        assert!(state.nearest().is_none());
        state.record_item(&record(0, 0.0, 0.0));
        state.record_item(&record(1, 13.0, 14.0));
        state.record_item(&record(2, 30.0, 30.0));
        assert_eq!(state.nearest().map(|r| r.item), Some(1));
        assert_eq!(state.distance(), Some(5.0));
    }

    #[test]
    fn ties_keep_first() {
        let mut state = CrosshairState::new(Point::ZERO);
        state.record_item(&record(0, 3.0, 4.0));
        state.record_item(&record(1, -3.0, -4.0));
        assert_eq!(state.nearest().map(|r| r.item), Some(0));
    }

    #[test]
    fn ignores_undefined_positions() {
        let mut state = CrosshairState::new(Point::ZERO);
        state.record_item(&record(0, f64::NAN, 0.0));
        assert!(state.nearest().is_none());
        assert_eq!(state.distance(), None);
    }

    #[test]
    fn reset_forgets_candidate() {
        let mut state = CrosshairState::new(Point::ZERO);
        state.record_item(&record(0, 1.0, 1.0));
        state.reset(Point::new(5.0, 5.0));
        assert!(state.nearest().is_none());
        assert_eq!(state.anchor(), Point::new(5.0, 5.0));
    }
}
