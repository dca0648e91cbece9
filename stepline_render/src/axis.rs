// Copyright 2025 the Stepline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data-to-device coordinate mapping.

use core::fmt;

use kurbo::Rect;

/// Device axis a value is mapped onto.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DeviceAxis {
    /// Left to right across the data area.
    X,
    /// Bottom to top across the data area; larger values are drawn higher.
    Y,
}

/// Maps data values to device coordinates within a data area.
pub trait ValueAxis {
    /// Device coordinate of `value` along `axis` of `area`.
    ///
    /// NaN values must map to NaN so that missing samples stay missing.
    fn value_to_device(&self, value: f64, area: Rect, axis: DeviceAxis) -> f64;
}

/// Linear mapping of `[lower, upper]` onto the span of the data area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearAxis {
    lower: f64,
    upper: f64,
}

impl LinearAxis {
    /// Create an axis covering `[lower, upper]`.
    ///
    /// Both bounds must be finite and `lower <= upper`. An empty interval is
    /// allowed and maps every value to the middle of the area.
    pub fn new(lower: f64, upper: f64) -> Result<Self, AxisError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(AxisError::NonFinite);
        }
        if lower > upper {
            return Err(AxisError::Inverted { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Lower bound of the value interval.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound of the value interval.
    pub fn upper(&self) -> f64 {
        self.upper
    }
}

impl ValueAxis for LinearAxis {
    fn value_to_device(&self, value: f64, area: Rect, axis: DeviceAxis) -> f64 {
        let area = area.abs();
        let (start, end) = match axis {
            DeviceAxis::X => (area.x0, area.x1),
            DeviceAxis::Y => (area.y1, area.y0),
        };
        let span = self.upper - self.lower;
        if span == 0.0 {
            // NaN * 0.0 keeps NaN values missing.
            return 0.5 * (start + end) + value * 0.0;
        }
        start + (value - self.lower) / span * (end - start)
    }
}

/// Error returned for an unusable axis interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisError {
    /// A bound was NaN or infinite.
    NonFinite,
    /// `lower` was greater than `upper`.
    Inverted {
        /// Requested lower bound.
        lower: f64,
        /// Requested upper bound.
        upper: f64,
    },
}

impl fmt::Display for AxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => f.write_str("axis bounds must be finite"),
            Self::Inverted { lower, upper } => {
                write!(f, "axis lower bound {lower} exceeds upper bound {upper}")
            }
        }
    }
}

impl core::error::Error for AxisError {}
