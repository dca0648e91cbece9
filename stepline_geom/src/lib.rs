// Copyright 2025 the Stepline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stepline Geom: step-line geometry in device space.
//!
//! This crate holds the geometric core of a step-line chart renderer, built on
//! top of [`kurbo`]. It knows nothing about datasets, axes, paint, or events:
//! callers hand it two points that are already in device coordinates and get
//! back the orthogonal polyline that connects them, clipped to a drawing area.
//!
//! # Typical usage
//!
//! - Transform two consecutive samples of a series into device space.
//! - Call [`build_step`] with the chart [`Orientation`] and a validated
//!   [`StepPoint`].
//! - Iterate [`StepShape::visible_segments`] with the data area and forward
//!   each [`Line`](kurbo::Line) to your drawing sink.
//!
//! ```
//! use kurbo::{Line, Point, Rect};
//! use stepline_geom::{Orientation, StepPoint, build_step};
//!
//! let step = StepPoint::new(0.5).unwrap();
//! let shape = build_step(
//!     Point::new(0.0, 10.0),
//!     Point::new(20.0, 30.0),
//!     Orientation::Vertical,
//!     step,
//! );
//!
//! let area = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let drawn: Vec<Line> = shape.visible_segments(area).collect();
//! assert_eq!(drawn.len(), 3);
//! assert_eq!(drawn[1], Line::new((10.0, 10.0), (10.0, 30.0)));
//! ```
//!
//! # Key types
//!
//! - [`Orientation`] – which device axis plays the domain role. The
//!   [`domain`] and [`range`] selectors let a single step construction serve
//!   both orientations.
//! - [`StepPoint`] – riser position as a fraction in `[0, 1]`, validated at
//!   construction time.
//! - [`StepShape`] – the one or three segments of a step, plus the policy
//!   that decides which of them reach a drawing sink.
//! - [`clip_line`] – Cohen–Sutherland clipping of a segment to a rectangle.
//!
//! ## Float semantics
//!
//! NaN coordinates mean "missing sample". They are never rejected with an
//! error; any step touching a NaN is simply not drawn.

#![no_std]

mod clip;
mod orientation;
mod step;
mod step_point;

pub use clip::clip_line;
pub use orientation::{Orientation, domain, range};
pub use step::{StepSegments, StepShape, VisibleSegments, build_step, is_drawable};
pub use step_point::{StepPoint, StepPointError};
