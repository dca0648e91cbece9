// Copyright 2025 the Stepline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Chart orientation.
///
/// Decides which device axis carries the domain (independent) values. With
/// [`Orientation::Vertical`] the domain runs along device x and range values
/// rise along device y; [`Orientation::Horizontal`] swaps the two.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Domain along device y, range along device x.
    Horizontal,
    /// Domain along device x, range along device y.
    #[default]
    Vertical,
}

impl Orientation {
    /// Build a device point from a domain and a range coordinate.
    ///
    /// This is the inverse of [`domain`] and [`range`]:
    /// `o.point(domain(p, o), range(p, o)) == p`.
    #[inline]
    pub const fn point(self, domain: f64, range: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(range, domain),
            Self::Vertical => Point::new(domain, range),
        }
    }
}

/// Domain coordinate of a device point under `orientation`.
#[inline]
pub const fn domain(point: Point, orientation: Orientation) -> f64 {
    match orientation {
        Orientation::Horizontal => point.y,
        Orientation::Vertical => point.x,
    }
}

/// Range coordinate of a device point under `orientation`.
#[inline]
pub const fn range(point: Point, orientation: Orientation) -> f64 {
    match orientation {
        Orientation::Horizontal => point.x,
        Orientation::Vertical => point.y,
    }
}
