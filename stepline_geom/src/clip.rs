// Copyright 2025 the Stepline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Line, Point, Rect};

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const TOP: u8 = 4;
const BOTTOM: u8 = 8;

/// Clip `line` to `rect` using Cohen–Sutherland.
///
/// Returns `None` when no part of the segment lies inside the rectangle.
/// A segment that is fully inside comes back unchanged; a segment that crosses
/// the boundary comes back with its outside end(s) moved onto the boundary.
/// Boundaries are inclusive.
///
/// The rectangle is normalized first, so inverted rectangles behave like their
/// [`Rect::abs`] counterpart. Zero-area rectangles and segments with a NaN or
/// infinite coordinate are never visible.
///
/// ```
/// use kurbo::{Line, Rect};
/// use stepline_geom::clip_line;
///
/// let area = Rect::new(0.0, 0.0, 10.0, 10.0);
/// let clipped = clip_line(Line::new((-5.0, 5.0), (5.0, 5.0)), area);
/// assert_eq!(clipped, Some(Line::new((0.0, 5.0), (5.0, 5.0))));
/// assert_eq!(clip_line(Line::new((20.0, 0.0), (30.0, 10.0)), area), None);
/// ```
pub fn clip_line(line: Line, rect: Rect) -> Option<Line> {
    let rect = rect.abs();
    // Negated so NaN bounds also land here.
    if !(rect.width() > 0.0 && rect.height() > 0.0) {
        return None;
    }
    if !line.p0.is_finite() || !line.p1.is_finite() {
        return None;
    }

    let mut p0 = line.p0;
    let mut p1 = line.p1;
    let mut code0 = region_code(p0, rect);
    let mut code1 = region_code(p1, rect);

    loop {
        if code0 | code1 == INSIDE {
            return Some(Line::new(p0, p1));
        }
        if code0 & code1 != INSIDE {
            return None;
        }

        let out = if code0 != INSIDE { code0 } else { code1 };
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        // The division is safe: a set TOP/BOTTOM bit on only one end implies
        // dy != 0, and likewise LEFT/RIGHT implies dx != 0.
        let crossing = if out & TOP != 0 {
            Point::new(p0.x + dx * (rect.y0 - p0.y) / dy, rect.y0)
        } else if out & BOTTOM != 0 {
            Point::new(p0.x + dx * (rect.y1 - p0.y) / dy, rect.y1)
        } else if out & RIGHT != 0 {
            Point::new(rect.x1, p0.y + dy * (rect.x1 - p0.x) / dx)
        } else {
            Point::new(rect.x0, p0.y + dy * (rect.x0 - p0.x) / dx)
        };

        // Huge but finite spans can still overflow here.
        if !crossing.is_finite() {
            return None;
        }

        if out == code0 {
            p0 = crossing;
            code0 = region_code(p0, rect);
        } else {
            p1 = crossing;
            code1 = region_code(p1, rect);
        }
    }
}

fn region_code(p: Point, rect: Rect) -> u8 {
    let mut code = INSIDE;
    if p.x < rect.x0 {
        code |= LEFT;
    } else if p.x > rect.x1 {
        code |= RIGHT;
    }
    if p.y < rect.y0 {
        code |= TOP;
    } else if p.y > rect.y1 {
        code |= BOTTOM;
    }
    code
}
