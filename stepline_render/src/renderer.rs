// Copyright 2025 the Stepline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The step renderer: configuration, change notification and the draw passes.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::ops::AddAssign;

use hashbrown::HashMap;
use kurbo::{Point, Rect};
use stepline_geom::{Orientation, StepPoint, StepPointError, build_step};

use crate::axis::{DeviceAxis, ValueAxis};
use crate::dataset::XyDataset;
use crate::sink::{ItemRecord, ItemRecorder, LineSink};

bitflags::bitflags! {
    /// What changed in a [`StepRenderer`] configuration.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RendererChange: u8 {
        /// The step point moved.
        const STEP_POINT = 0b0000_0001;
        /// A series was shown or hidden.
        const SERIES_VISIBILITY = 0b0000_0010;
        /// Item labels were switched on or off.
        const ITEM_LABELS = 0b0000_0100;
    }
}

/// Handle of a registered change listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Which of the two draw passes is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawPass {
    /// Step segments plus item records.
    Lines,
    /// Item labels, drawn after every series' lines.
    Labels,
}

impl DrawPass {
    /// Both passes in drawing order.
    pub const ALL: [Self; 2] = [Self::Lines, Self::Labels];
}

/// Counters returned from a draw call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Segments handed to the [`LineSink`].
    pub segments_drawn: usize,
    /// Calls to [`ItemRecorder::record_item`].
    pub items_recorded: usize,
    /// Calls to [`ItemRecorder::item_label`].
    pub labels_drawn: usize,
}

impl AddAssign for DrawStats {
    fn add_assign(&mut self, rhs: Self) {
        self.segments_drawn += rhs.segments_drawn;
        self.items_recorded += rhs.items_recorded;
        self.labels_drawn += rhs.labels_drawn;
    }
}

/// Everything a single draw call reads from and writes to.
pub struct DrawContext<'a, D: ?Sized> {
    /// Source of x/y values.
    pub dataset: &'a D,
    /// Maps x values.
    pub domain_axis: &'a dyn ValueAxis,
    /// Maps y values.
    pub range_axis: &'a dyn ValueAxis,
    /// Data area in device space; also the clip rectangle.
    pub area: Rect,
    /// Orientation of the plot.
    pub orientation: Orientation,
    /// Receives visible step segments.
    pub sink: &'a mut dyn LineSink,
    /// Receives item records and labels.
    pub recorder: &'a mut dyn ItemRecorder,
}

impl<D: ?Sized> fmt::Debug for DrawContext<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawContext")
            .field("area", &self.area)
            .field("orientation", &self.orientation)
            .finish_non_exhaustive()
    }
}

impl<D: XyDataset + ?Sized> DrawContext<'_, D> {
    /// Data and device position of an item.
    fn locate(&self, series: usize, item: usize) -> (Point, Point) {
        let x = self.dataset.x(series, item);
        let y = self.dataset.y(series, item);
        let (domain_axis, range_axis) = match self.orientation {
            Orientation::Vertical => (DeviceAxis::X, DeviceAxis::Y),
            Orientation::Horizontal => (DeviceAxis::Y, DeviceAxis::X),
        };
        let d = self.domain_axis.value_to_device(x, self.area, domain_axis);
        let r = if y.is_nan() {
            f64::NAN
        } else {
            self.range_axis.value_to_device(y, self.area, range_axis)
        };
        (Point::new(x, y), self.orientation.point(d, r))
    }
}

type Listener = Box<dyn FnMut(RendererChange) + Send + Sync>;

/// Draws series as step lines.
///
/// Configuration is changed through `&mut self` and drawing only needs
/// `&self`, so the borrow checker keeps the two apart. The renderer is
/// `Send + Sync`, so independent series can be drawn from several threads
/// through a shared reference.
pub struct StepRenderer {
    step_point: StepPoint,
    series_visible: HashMap<usize, bool>,
    item_labels_visible: bool,
    revision: u64,
    next_listener: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl fmt::Debug for StepRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepRenderer")
            .field("step_point", &self.step_point)
            .field("series_visible", &self.series_visible)
            .field("item_labels_visible", &self.item_labels_visible)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Default for StepRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl StepRenderer {
    /// A renderer with the riser at the later point, every series visible and
    /// item labels off.
    pub fn new() -> Self {
        Self {
            step_point: StepPoint::default(),
            series_visible: HashMap::new(),
            item_labels_visible: false,
            revision: 0,
            next_listener: 0,
            listeners: Vec::new(),
        }
    }

    /// Current step point.
    pub fn step_point(&self) -> StepPoint {
        self.step_point
    }

    /// Set the step point from a fraction in `[0, 1]`.
    ///
    /// An out-of-range fraction is rejected and the previous value stays in
    /// effect.
    pub fn set_step_point(&mut self, fraction: f64) -> Result<(), StepPointError> {
        let step = StepPoint::new(fraction)?;
        if step != self.step_point {
            self.step_point = step;
            self.notify(RendererChange::STEP_POINT);
        }
        Ok(())
    }

    /// Whether `series` is drawn. Series are visible unless hidden.
    pub fn series_visible(&self, series: usize) -> bool {
        self.series_visible.get(&series).copied().unwrap_or(true)
    }

    /// Show or hide a series.
    pub fn set_series_visible(&mut self, series: usize, visible: bool) {
        if self.series_visible(series) != visible {
            self.series_visible.insert(series, visible);
            self.notify(RendererChange::SERIES_VISIBILITY);
        }
    }

    /// Whether item labels are drawn in the label pass.
    pub fn item_labels_visible(&self) -> bool {
        self.item_labels_visible
    }

    /// Switch item labels on or off.
    pub fn set_item_labels_visible(&mut self, visible: bool) {
        if self.item_labels_visible != visible {
            self.item_labels_visible = visible;
            self.notify(RendererChange::ITEM_LABELS);
        }
    }

    /// Number of effective configuration changes so far.
    ///
    /// Callers that prefer polling over listeners can compare this against a
    /// previously seen value.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a listener called after every effective configuration change.
    pub fn add_listener(
        &mut self,
        listener: impl FnMut(RendererChange) + Send + Sync + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns `false` if `id` was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, change: RendererChange) {
        self.revision += 1;
        log::debug!("renderer change {change:?}, revision {}", self.revision);
        for (_, listener) in &mut self.listeners {
            listener(change);
        }
    }

    /// Draw one item of a series for the given pass.
    ///
    /// In [`DrawPass::Lines`] the step from the previous item (if any) is
    /// built, clipped to the data area and sent to the sink, then one
    /// [`ItemRecord`] is recorded for the item. In [`DrawPass::Labels`] the
    /// record is passed to [`ItemRecorder::item_label`] when item labels are
    /// enabled. Hidden series draw nothing.
    pub fn draw_item<D: XyDataset + ?Sized>(
        &self,
        ctx: &mut DrawContext<'_, D>,
        series: usize,
        item: usize,
        pass: DrawPass,
    ) -> DrawStats {
        let mut stats = DrawStats::default();
        if !self.series_visible(series) {
            return stats;
        }

        let (data, device) = ctx.locate(series, item);
        let record = ItemRecord {
            series,
            item,
            data,
            device,
            negative: data.y < 0.0,
        };

        match pass {
            DrawPass::Lines => {
                if item > 0 {
                    let (_, previous) = ctx.locate(series, item - 1);
                    let shape = build_step(previous, device, ctx.orientation, self.step_point);
                    for line in shape.visible_segments(ctx.area) {
                        ctx.sink.draw_line(line);
                        stats.segments_drawn += 1;
                    }
                }
                ctx.recorder.record_item(&record);
                stats.items_recorded += 1;
            }
            DrawPass::Labels => {
                if self.item_labels_visible {
                    ctx.recorder.item_label(&record);
                    stats.labels_drawn += 1;
                }
            }
        }
        stats
    }

    /// Draw a whole series: the line pass over every item, then the label
    /// pass over every item.
    pub fn draw_series<D: XyDataset + ?Sized>(
        &self,
        ctx: &mut DrawContext<'_, D>,
        series: usize,
    ) -> DrawStats {
        let mut stats = DrawStats::default();
        if !self.series_visible(series) {
            return stats;
        }
        let count = ctx.dataset.item_count(series);
        for pass in DrawPass::ALL {
            for item in 0..count {
                stats += self.draw_item(ctx, series, item, pass);
            }
        }
        stats
    }
}
