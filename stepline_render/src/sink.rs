// Copyright 2025 the Stepline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outputs of a draw call: line segments and per-item records.

use alloc::vec::Vec;

use kurbo::{Line, Point};

/// Receives clipped segments ready to be stroked.
///
/// The sink owns paint and stroke selection.
pub trait LineSink {
    /// Draw one segment.
    fn draw_line(&mut self, line: Line);
}

impl LineSink for Vec<Line> {
    fn draw_line(&mut self, line: Line) {
        self.push(line);
    }
}

/// The representative point of one item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemRecord {
    /// Series index.
    pub series: usize,
    /// Item index within the series.
    pub item: usize,
    /// Untransformed data value as `(x, y)`.
    pub data: Point,
    /// Device position of the item, already oriented.
    pub device: Point,
    /// `true` when the y value is negative; label placement uses this.
    pub negative: bool,
}

/// Crosshair, entity, tooltip and label bookkeeping.
///
/// [`record_item`](Self::record_item) is called once per item during the
/// line pass, however many segments were drawn for it.
/// [`item_label`](Self::item_label) is called during the label pass when item
/// labels are enabled.
pub trait ItemRecorder {
    /// Record the representative point of an item.
    fn record_item(&mut self, record: &ItemRecord);

    /// Place a label for an item. Does nothing by default.
    fn item_label(&mut self, record: &ItemRecord) {
        let _ = record;
    }
}

/// Discards everything.
impl ItemRecorder for () {
    fn record_item(&mut self, _: &ItemRecord) {}
}

/// Collects item records; ignores labels.
impl ItemRecorder for Vec<ItemRecord> {
    fn record_item(&mut self, record: &ItemRecord) {
        self.push(*record);
    }
}
