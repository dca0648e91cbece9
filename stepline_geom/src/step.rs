// Copyright 2025 the Stepline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step decomposition and the policy deciding which segments are drawn.

use core::slice;

use kurbo::{Line, Point, Rect};
use smallvec::SmallVec;

use crate::clip::clip_line;
use crate::orientation::{Orientation, domain, range};
use crate::step_point::StepPoint;

/// Segments of a single step; never more than three, so never on the heap.
pub type StepSegments = SmallVec<[Line; 3]>;

/// The orthogonal polyline joining two consecutive device points.
///
/// Built by [`build_step`]. Holds either one segment (both points share the
/// same range coordinate) or three: a run at the first point's level, the
/// riser, and a run at the second point's level.
#[derive(Clone, Debug, PartialEq)]
pub struct StepShape {
    start: Point,
    end: Point,
    segments: StepSegments,
}

/// Decompose the transition from `p0` to `p1` into a step.
///
/// Both points are in device space. The riser sits at
/// `domain(p0) + f * (domain(p1) - domain(p0))` where `f` is `step_point`;
/// under [`Orientation::Horizontal`] the domain is device y, so the same
/// construction yields the transposed shape.
///
/// This does no validation and no clipping; see
/// [`StepShape::visible_segments`] for what actually gets drawn.
pub fn build_step(
    p0: Point,
    p1: Point,
    orientation: Orientation,
    step_point: StepPoint,
) -> StepShape {
    let r0 = range(p0, orientation);
    let r1 = range(p1, orientation);

    let mut segments = StepSegments::new();
    if r0 == r1 {
        // Flat: one straight run, no zero-length riser.
        segments.push(Line::new(p0, p1));
    } else {
        let riser = step_point.riser(domain(p0, orientation), domain(p1, orientation));
        let corner0 = orientation.point(riser, r0);
        let corner1 = orientation.point(riser, r1);
        segments.push(Line::new(p0, corner0));
        segments.push(Line::new(corner0, corner1));
        segments.push(Line::new(corner1, p1));
    }

    StepShape {
        start: p0,
        end: p1,
        segments,
    }
}

/// Whether both ends of `line` are fully defined (finite coordinates only).
#[inline]
pub fn is_drawable(line: Line) -> bool {
    line.p0.is_finite() && line.p1.is_finite()
}

impl StepShape {
    /// First point of the step.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Last point of the step.
    pub fn end(&self) -> Point {
        self.end
    }

    /// All segments in drawing order, before any suppression or clipping.
    pub fn segments(&self) -> &[Line] {
        &self.segments
    }

    /// `true` when the shape has a riser, `false` for a flat run.
    pub fn is_step(&self) -> bool {
        self.segments.len() == 3
    }

    /// `true` when neither end point has a NaN coordinate.
    pub fn is_defined(&self) -> bool {
        !self.start.is_nan() && !self.end.is_nan()
    }

    /// Segments that should reach a drawing sink, clipped to `clip`.
    ///
    /// A NaN in either end point suppresses the whole step, since the riser is
    /// derived from both ends. Beyond that each segment is checked on its own:
    /// undefined segments are skipped, and the rest go through [`clip_line`],
    /// dropping those that fall entirely outside `clip`.
    pub fn visible_segments(&self, clip: Rect) -> VisibleSegments<'_> {
        let segments: &[Line] = if self.is_defined() {
            &self.segments
        } else {
            log::trace!(
                "suppressing step {:?} -> {:?}: undefined end point",
                self.start,
                self.end
            );
            &[]
        };
        VisibleSegments {
            segments: segments.iter(),
            clip,
        }
    }
}

/// Iterator returned by [`StepShape::visible_segments`].
#[derive(Clone, Debug)]
pub struct VisibleSegments<'a> {
    segments: slice::Iter<'a, Line>,
    clip: Rect,
}

impl Iterator for VisibleSegments<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        for &line in self.segments.by_ref() {
            if !is_drawable(line) {
                log::trace!("skipping undefined segment {line:?}");
                continue;
            }
            match clip_line(line, self.clip) {
                Some(clipped) => return Some(clipped),
                None => log::trace!("segment {line:?} outside {:?}", self.clip),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.segments.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect::new(-100.0, -100.0, 100.0, 100.0);

    fn transpose(p: Point) -> Point {
        Point::new(p.y, p.x)
    }

    #[test]
    fn flat_run_is_single_segment() {
        let p0 = Point::new(1.0, 5.0);
        let p1 = Point::new(9.0, 5.0);
        let shape = build_step(p0, p1, Orientation::Vertical, StepPoint::CENTER);
        assert!(!shape.is_step());
        assert_eq!(shape.segments(), &[Line::new(p0, p1)]);
    }

    #[test]
    fn flat_run_horizontal_compares_device_x() {
        // Same device x means same range value when horizontal.
        let p0 = Point::new(4.0, 0.0);
        let p1 = Point::new(4.0, 20.0);
        let shape = build_step(p0, p1, Orientation::Horizontal, StepPoint::END);
        assert_eq!(shape.segments(), &[Line::new(p0, p1)]);
    }

    #[test]
    fn step_segments_are_contiguous() {
        let p0 = Point::new(0.0, 10.0);
        let p1 = Point::new(20.0, 40.0);
        for f in [0.0, 0.3, 0.5, 1.0] {
            let step = StepPoint::new(f).unwrap();
            for o in [Orientation::Horizontal, Orientation::Vertical] {
                let shape = build_step(p0, p1, o, step);
                let segs = shape.segments();
                assert_eq!(segs.len(), 3, "expected a riser for f={f} {o:?}");
                assert_eq!(segs[0].p0, p0, "starts at p0");
                assert_eq!(segs[2].p1, p1, "ends at p1");
                assert_eq!(segs[0].p1, segs[1].p0, "first joint");
                assert_eq!(segs[1].p1, segs[2].p0, "second joint");
            }
        }
    }

    #[test]
    fn riser_position_follows_step_point() {
        let p0 = Point::new(10.0, 0.0);
        let p1 = Point::new(30.0, 50.0);
        let riser_x = |step| build_step(p0, p1, Orientation::Vertical, step).segments()[1].p0.x;
        assert_eq!(riser_x(StepPoint::START), 10.0);
        assert_eq!(riser_x(StepPoint::CENTER), 20.0);
        assert_eq!(riser_x(StepPoint::END), 30.0);
    }

    #[test]
    fn vertical_step_shape() {
        let shape = build_step(
            Point::new(0.0, 10.0),
            Point::new(20.0, 30.0),
            Orientation::Vertical,
            StepPoint::END,
        );
        assert_eq!(
            shape.segments(),
            &[
                Line::new((0.0, 10.0), (20.0, 10.0)),
                Line::new((20.0, 10.0), (20.0, 30.0)),
                Line::new((20.0, 30.0), (20.0, 30.0)),
            ]
        );
    }

    #[test]
    fn horizontal_is_transposed_vertical() {
        let p0 = Point::new(2.0, 7.0);
        let p1 = Point::new(12.0, -3.0);
        let step = StepPoint::new(0.25).unwrap();
        let vertical = build_step(p0, p1, Orientation::Vertical, step);
        let horizontal = build_step(
            transpose(p0),
            transpose(p1),
            Orientation::Horizontal,
            step,
        );
        assert_eq!(vertical.segments().len(), horizontal.segments().len());
        for (v, h) in vertical.segments().iter().zip(horizontal.segments()) {
            assert_eq!(transpose(v.p0), h.p0, "start of {v:?}");
            assert_eq!(transpose(v.p1), h.p1, "end of {v:?}");
        }
    }

    #[test]
    fn nan_range_suppresses_everything() {
        let p0 = Point::new(0.0, 10.0);
        let nan = Point::new(20.0, f64::NAN);
        for o in [Orientation::Horizontal, Orientation::Vertical] {
            let forward = build_step(p0, nan, o, StepPoint::CENTER);
            assert_eq!(forward.visible_segments(AREA).count(), 0, "{o:?}");
            let backward = build_step(nan, p0, o, StepPoint::CENTER);
            assert_eq!(backward.visible_segments(AREA).count(), 0, "{o:?}");
        }
    }

    #[test]
    fn nan_domain_suppresses_everything() {
        let shape = build_step(
            Point::new(f64::NAN, 10.0),
            Point::new(20.0, 30.0),
            Orientation::Vertical,
            StepPoint::END,
        );
        assert!(!shape.is_defined());
        assert_eq!(shape.visible_segments(AREA).count(), 0);
    }

    #[test]
    fn undefined_segment_is_not_drawable() {
        assert!(is_drawable(Line::new((0.0, 0.0), (1.0, 1.0))));
        assert!(!is_drawable(Line::new((0.0, f64::NAN), (1.0, 1.0))));
        assert!(!is_drawable(Line::new((0.0, 0.0), (f64::NAN, 1.0))));
        assert!(!is_drawable(Line::new((f64::NEG_INFINITY, 0.0), (1.0, 1.0))));
    }

    #[test]
    fn visible_segments_are_clipped() {
        let shape = build_step(
            Point::new(-50.0, 0.0),
            Point::new(50.0, 500.0),
            Orientation::Vertical,
            StepPoint::CENTER,
        );
        let drawn: StepSegments = shape.visible_segments(AREA).collect();
        assert_eq!(
            drawn.as_slice(),
            &[
                Line::new((-50.0, 0.0), (0.0, 0.0)),
                Line::new((0.0, 0.0), (0.0, 100.0)),
            ],
            "last run lies below the area and the riser is clamped"
        );
    }

    #[test]
    fn fully_outside_step_draws_nothing() {
        let shape = build_step(
            Point::new(200.0, 0.0),
            Point::new(300.0, 50.0),
            Orientation::Vertical,
            StepPoint::END,
        );
        assert_eq!(shape.visible_segments(AREA).count(), 0);
    }
}
