// Copyright 2025 the Stepline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Position of the riser between two consecutive domain positions.
///
/// A fraction in `[0, 1]`: `0.0` puts the riser at the first point, `1.0`
/// (the default) at the second point, and anything in between interpolates.
/// The range is checked once, when the value is created.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct StepPoint(f64);

impl StepPoint {
    /// Riser at the domain position of the earlier point.
    pub const START: Self = Self(0.0);
    /// Riser halfway between the two points.
    pub const CENTER: Self = Self(0.5);
    /// Riser at the domain position of the later point.
    pub const END: Self = Self(1.0);

    /// Validate `fraction` as a step point.
    ///
    /// Returns [`StepPointError::OutOfRange`] for values below `0.0`, above
    /// `1.0`, or NaN.
    pub fn new(fraction: f64) -> Result<Self, StepPointError> {
        if (0.0..=1.0).contains(&fraction) {
            Ok(Self(fraction))
        } else {
            log::debug!("rejected step point {fraction}");
            Err(StepPointError::OutOfRange(fraction))
        }
    }

    /// The fraction as a plain float.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Domain coordinate of the riser between `start` and `end`.
    #[inline]
    pub fn riser(self, start: f64, end: f64) -> f64 {
        start + self.0 * (end - start)
    }
}

impl Default for StepPoint {
    fn default() -> Self {
        Self::END
    }
}

impl TryFrom<f64> for StepPoint {
    type Error = StepPointError;

    fn try_from(fraction: f64) -> Result<Self, Self::Error> {
        Self::new(fraction)
    }
}

impl From<StepPoint> for f64 {
    fn from(step: StepPoint) -> Self {
        step.0
    }
}

/// Error returned when a step point is configured outside `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepPointError {
    /// The offending value.
    OutOfRange(f64),
}

impl fmt::Display for StepPointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(v) => write!(f, "step point {v} is not in [0.0, 1.0]"),
        }
    }
}

impl core::error::Error for StepPointError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds_inclusive() {
        assert_eq!(StepPoint::new(0.0), Ok(StepPoint::START));
        assert_eq!(StepPoint::new(1.0), Ok(StepPoint::END));
        assert_eq!(StepPoint::new(0.25).map(StepPoint::get), Ok(0.25));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(StepPoint::new(1.5), Err(StepPointError::OutOfRange(1.5)));
        assert_eq!(StepPoint::new(-0.1), Err(StepPointError::OutOfRange(-0.1)));
        assert!(StepPoint::new(f64::NAN).is_err(), "NaN must be rejected");
        assert!(StepPoint::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn riser_interpolates() {
        assert_eq!(StepPoint::START.riser(10.0, 30.0), 10.0);
        assert_eq!(StepPoint::CENTER.riser(10.0, 30.0), 20.0);
        assert_eq!(StepPoint::END.riser(10.0, 30.0), 30.0);
        // Works the same when the domain runs backwards.
        assert_eq!(StepPoint::CENTER.riser(30.0, 10.0), 20.0);
    }

    #[test]
    fn default_is_end() {
        assert_eq!(StepPoint::default(), StepPoint::END);
        assert_eq!(f64::from(StepPoint::default()), 1.0);
    }
}
