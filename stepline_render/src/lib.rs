// Copyright 2025 the Stepline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stepline Render: a two-pass step-line renderer.
//!
//! This crate wraps the geometry in [`stepline_geom`] with the parts a chart
//! needs to draw a series as steps:
//!
//! - Map data values into device space through a [`ValueAxis`]
//!   (for example [`LinearAxis`]).
//! - Build the step between each item and its predecessor and send the
//!   visible, clipped segments to a [`LineSink`].
//! - Record one [`ItemRecord`] per item for crosshair, entity and tooltip
//!   bookkeeping via an [`ItemRecorder`], and hand item labels to the same
//!   recorder in a second pass.
//!
//! Paint, stroke, text layout and hit regions are left to the sink and the
//! recorder; datasets are read through the small [`XyDataset`] trait.
//!
//! # Example
//!
//! ```
//! use kurbo::{Line, Rect};
//! use stepline_geom::Orientation;
//! use stepline_render::{DrawContext, ItemRecord, LinearAxis, StepRenderer};
//!
//! let data = [vec![(0.0, 0.0), (1.0, 1.0)]];
//! let axis = LinearAxis::new(0.0, 1.0).unwrap();
//! let mut lines: Vec<Line> = Vec::new();
//! let mut records: Vec<ItemRecord> = Vec::new();
//!
//! let mut renderer = StepRenderer::new();
//! renderer.set_step_point(0.5).unwrap();
//!
//! let mut ctx = DrawContext {
//!     dataset: &data[..],
//!     domain_axis: &axis,
//!     range_axis: &axis,
//!     area: Rect::new(0.0, 0.0, 100.0, 100.0),
//!     orientation: Orientation::Vertical,
//!     sink: &mut lines,
//!     recorder: &mut records,
//! };
//! let stats = renderer.draw_series(&mut ctx, 0);
//! assert_eq!(stats.segments_drawn, 3);
//! assert_eq!(stats.items_recorded, 2);
//! // The riser sits halfway between the two samples.
//! assert_eq!(lines[1], Line::new((50.0, 100.0), (50.0, 0.0)));
//! ```
//!
//! # Change notification
//!
//! [`StepRenderer`] keeps a [`revision`](StepRenderer::revision) counter and
//! an explicit listener list. Every effective configuration change bumps the
//! counter and calls each listener with a [`RendererChange`] describing what
//! changed, so a surrounding chart can invalidate and repaint.

#![no_std]

extern crate alloc;

mod axis;
mod crosshair;
mod dataset;
mod renderer;
mod sink;

pub use axis::{AxisError, DeviceAxis, LinearAxis, ValueAxis};
pub use crosshair::CrosshairState;
pub use dataset::XyDataset;
pub use renderer::{DrawContext, DrawPass, DrawStats, ListenerId, RendererChange, StepRenderer};
pub use sink::{ItemRecord, ItemRecorder, LineSink};
