//! `<length-percentage>` tokens and two-axis positions
//!
//! Computed styles report `background-position` and `object-position` as
//! pairs like `"50% 50%"` or `"10px 0%"`. A percentage resolves against the
//! space left over once the image is placed; a length is taken verbatim.
//! Specified values may also use the `left`/`center`/`right` and
//! `top`/`center`/`bottom` keywords, in either order.

use crate::{Result, ZoomError};
use std::fmt;
use std::str::FromStr;

/// A single length or percentage token
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthPercentage {
    /// Percentage value, e.g. `50%` is stored as `50.0`
    Percent(f64),
    /// Absolute length in CSS pixels
    Px(f64),
}

impl LengthPercentage {
    /// `50%`, the initial value for both axes of a position
    pub const CENTER: Self = Self::Percent(50.0);

    /// Resolve against a reference extent
    ///
    /// `Percent(p)` becomes `reference * p / 100`, `Px(v)` is returned as-is.
    pub fn resolve(self, reference: f64) -> f64 {
        match self {
            Self::Percent(value) => reference * value / 100.0,
            Self::Px(value) => value,
        }
    }
}

impl Default for LengthPercentage {
    fn default() -> Self {
        Self::CENTER
    }
}

impl FromStr for LengthPercentage {
    type Err = ZoomError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        let invalid = || ZoomError::InvalidLength(token.to_string());

        if let Some(number) = token.strip_suffix('%') {
            return parse_number(number).map(Self::Percent).ok_or_else(invalid);
        }

        let number = token.strip_suffix("px").unwrap_or(token);
        parse_number(number).map(Self::Px).ok_or_else(invalid)
    }
}

impl fmt::Display for LengthPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(value) => write!(f, "{}%", value),
            Self::Px(value) => write!(f, "{}px", value),
        }
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Axis a position token may be placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
    /// `center` and numeric tokens
    Either,
}

/// One token of a position, with the axis it is pinned to
#[derive(Debug, Clone, Copy)]
struct PositionToken {
    value: LengthPercentage,
    axis: Axis,
}

impl FromStr for PositionToken {
    type Err = ZoomError;

    fn from_str(s: &str) -> Result<Self> {
        let (percent, axis) = match s.to_ascii_lowercase().as_str() {
            "left" => (0.0, Axis::Horizontal),
            "right" => (100.0, Axis::Horizontal),
            "top" => (0.0, Axis::Vertical),
            "bottom" => (100.0, Axis::Vertical),
            "center" => (50.0, Axis::Either),
            _ => {
                return Ok(Self {
                    value: s.parse()?,
                    axis: Axis::Either,
                })
            }
        };

        Ok(Self {
            value: LengthPercentage::Percent(percent),
            axis,
        })
    }
}

/// Horizontal and vertical offsets of a positioned image
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: LengthPercentage,
    pub y: LengthPercentage,
}

impl Position {
    pub fn new(x: LengthPercentage, y: LengthPercentage) -> Self {
        Self { x, y }
    }

    /// Resolve both axes against the free space on each axis
    pub fn resolve(&self, free_width: f64, free_height: f64) -> (f64, f64) {
        (self.x.resolve(free_width), self.y.resolve(free_height))
    }
}

impl FromStr for Position {
    type Err = ZoomError;

    /// Parse `"<x> <y>"`; a missing token defaults to `50%`
    ///
    /// Keywords are placed on their own axis, so `"top right"` is the same
    /// as `"right top"` and a lone `"top"` means `"center top"`. Only the
    /// first layer of a comma-separated list is used.
    fn from_str(s: &str) -> Result<Self> {
        let first_layer = s.split(',').next().unwrap_or_default();
        let tokens = first_layer
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<PositionToken>>>()?;

        let center = PositionToken {
            value: LengthPercentage::CENTER,
            axis: Axis::Either,
        };

        let (x, y) = match tokens.as_slice() {
            [] => (center, center),
            [only] if only.axis == Axis::Vertical => (center, *only),
            [only] => (*only, center),
            [first, second]
                if first.axis == Axis::Vertical || second.axis == Axis::Horizontal =>
            {
                (*second, *first)
            }
            [first, second] => (*first, *second),
            // Edge offsets like "right 10px bottom 20px" are not supported
            _ => return Err(ZoomError::InvalidLength(first_layer.trim().to_string())),
        };

        if x.axis == Axis::Vertical || y.axis == Axis::Horizontal {
            return Err(ZoomError::InvalidLength(first_layer.trim().to_string()));
        }

        Ok(Self {
            x: x.value,
            y: y.value,
        })
    }
}
