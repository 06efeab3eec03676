//! Fit modes for `object-fit` and `background-size`

use crate::position::{LengthPercentage, Position};
use crate::{Result, ZoomError};
use std::fmt;
use std::str::FromStr;

/// `object-fit` value of a replaced element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Stretch to the box, ignoring aspect ratio (CSS initial value)
    #[default]
    Fill,
    /// Largest size that shows the whole image
    Contain,
    /// Smallest size that leaves no empty space
    Cover,
    /// Natural size
    None,
    /// `None` or `Contain`, whichever is smaller
    ScaleDown,
}

impl FitMode {
    /// Resolve `ScaleDown` into `None` or `Contain` for the given sizes
    ///
    /// An image that already fits on both axes is shown at natural size.
    /// Other modes map one to one.
    pub fn resolve(self, width: f64, height: f64, box_width: f64, box_height: f64) -> ResolvedFit {
        match self {
            FitMode::Fill => ResolvedFit::Fill,
            FitMode::Contain => ResolvedFit::Contain,
            FitMode::Cover => ResolvedFit::Cover,
            FitMode::None => ResolvedFit::None,
            FitMode::ScaleDown if width <= box_width && height <= box_height => ResolvedFit::None,
            FitMode::ScaleDown => ResolvedFit::Contain,
        }
    }

    /// Uniform ratio mapping the intrinsic size onto the box
    pub fn ratio(self, width: f64, height: f64, box_width: f64, box_height: f64) -> f64 {
        self.resolve(width, height, box_width, box_height)
            .ratio(width, height, box_width, box_height)
    }
}

/// `object-fit` once `scale-down` has been decided for a concrete image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedFit {
    Fill,
    Contain,
    Cover,
    None,
}

impl ResolvedFit {
    /// Uniform ratio mapping the intrinsic size onto the box
    ///
    /// `Fill` uses the cover ratio here; its output ignores the ratio for
    /// sizing but still needs it for the outer scale.
    pub fn ratio(self, width: f64, height: f64, box_width: f64, box_height: f64) -> f64 {
        let width_ratio = box_width / width;
        let height_ratio = box_height / height;

        match self {
            ResolvedFit::Cover | ResolvedFit::Fill => width_ratio.max(height_ratio),
            ResolvedFit::Contain => width_ratio.min(height_ratio),
            ResolvedFit::None => 1.0,
        }
    }
}

impl FromStr for FitMode {
    type Err = ZoomError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fill" => Ok(FitMode::Fill),
            "contain" => Ok(FitMode::Contain),
            "cover" => Ok(FitMode::Cover),
            "none" => Ok(FitMode::None),
            "scale-down" => Ok(FitMode::ScaleDown),
            _ => Err(ZoomError::InvalidFitMode(s.to_string())),
        }
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FitMode::Fill => "fill",
            FitMode::Contain => "contain",
            FitMode::Cover => "cover",
            FitMode::None => "none",
            FitMode::ScaleDown => "scale-down",
        };
        f.write_str(name)
    }
}

/// One axis of an explicit `background-size`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeComponent {
    /// Follow the other axis, keeping the aspect ratio
    Auto,
    Length(LengthPercentage),
}

impl FromStr for SizeComponent {
    type Err = ZoomError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(SizeComponent::Auto);
        }

        // Keywords are positions, not sizes
        let token = s.trim();
        let numeric = token.starts_with(|c: char| c.is_ascii_digit() || c == '.' || c == '-');
        if numeric || token.ends_with('%') {
            return token.parse().map(SizeComponent::Length);
        }

        Err(ZoomError::InvalidBackgroundSize(token.to_string()))
    }
}

/// `background-size` value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundSize {
    Cover,
    Contain,
    Explicit {
        width: SizeComponent,
        height: SizeComponent,
    },
}

impl Default for BackgroundSize {
    fn default() -> Self {
        BackgroundSize::Explicit {
            width: SizeComponent::Auto,
            height: SizeComponent::Auto,
        }
    }
}

impl BackgroundSize {
    /// Uniform ratio mapping the intrinsic size onto the box
    ///
    /// Explicit sizes resolve against the box extents and keep the smaller
    /// of the two axis ratios. An `auto` axis follows the other one.
    pub fn ratio(&self, width: f64, height: f64, box_width: f64, box_height: f64) -> f64 {
        let width_ratio = box_width / width;
        let height_ratio = box_height / height;

        match self {
            BackgroundSize::Cover => width_ratio.max(height_ratio),
            BackgroundSize::Contain => width_ratio.min(height_ratio),
            BackgroundSize::Explicit {
                width: size_w,
                height: size_h,
            } => {
                let axis_w = axis_ratio(*size_w, box_width, width);
                let axis_h = axis_ratio(*size_h, box_height, height);

                match (axis_w, axis_h) {
                    (Some(w), Some(h)) => w.min(h),
                    (Some(ratio), None) | (None, Some(ratio)) => ratio,
                    (None, None) => 1.0,
                }
            }
        }
    }
}

fn axis_ratio(component: SizeComponent, box_extent: f64, intrinsic: f64) -> Option<f64> {
    match component {
        SizeComponent::Auto => None,
        SizeComponent::Length(length) => Some(length.resolve(box_extent) / intrinsic),
    }
}

impl FromStr for BackgroundSize {
    type Err = ZoomError;

    /// Parse `cover`, `contain` or `"<width> <height>"`
    ///
    /// Missing tokens default to `50%`, except that a lone `auto` means
    /// `auto auto`. Only the first layer of a comma-separated list is used.
    fn from_str(s: &str) -> Result<Self> {
        let first_layer = s.split(',').next().unwrap_or_default().trim();

        match first_layer.to_ascii_lowercase().as_str() {
            "cover" => return Ok(BackgroundSize::Cover),
            "contain" => return Ok(BackgroundSize::Contain),
            _ => {}
        }

        // A lone `auto` is the initial value, `auto auto`
        if first_layer.eq_ignore_ascii_case("auto") {
            return Ok(BackgroundSize::default());
        }

        let mut tokens = first_layer.split_whitespace();
        let half = SizeComponent::Length(LengthPercentage::CENTER);
        let width = tokens.next().map(str::parse).transpose()?.unwrap_or(half);
        let height = tokens.next().map(str::parse).transpose()?.unwrap_or(half);

        Ok(BackgroundSize::Explicit { width, height })
    }
}

/// Computed `background-position` and `background-size` of a container
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BackgroundLayout {
    pub position: Position,
    pub size: BackgroundSize,
}

impl BackgroundLayout {
    /// Parse the two computed style strings
    pub fn parse(position: &str, size: &str) -> Result<Self> {
        Ok(Self {
            position: position.parse()?,
            size: size.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_mode_parse() {
        assert_eq!("fill".parse::<FitMode>().unwrap(), FitMode::Fill);
        assert_eq!("contain".parse::<FitMode>().unwrap(), FitMode::Contain);
        assert_eq!("cover".parse::<FitMode>().unwrap(), FitMode::Cover);
        assert_eq!("none".parse::<FitMode>().unwrap(), FitMode::None);
        assert_eq!(" Scale-Down ".parse::<FitMode>().unwrap(), FitMode::ScaleDown);
        assert!("stretch".parse::<FitMode>().is_err());
    }

    #[test]
    fn test_fit_mode_display() {
        assert_eq!(FitMode::ScaleDown.to_string(), "scale-down");
        assert_eq!(FitMode::default().to_string(), "fill");
    }

    #[test]
    fn test_scale_down_resolves_to_none_when_smaller() {
        assert_eq!(FitMode::ScaleDown.resolve(100.0, 50.0, 200.0, 100.0), ResolvedFit::None);
        assert_eq!(FitMode::ScaleDown.resolve(200.0, 100.0, 200.0, 100.0), ResolvedFit::None);
    }

    #[test]
    fn test_scale_down_resolves_to_contain_when_larger() {
        assert_eq!(FitMode::ScaleDown.resolve(300.0, 50.0, 200.0, 100.0), ResolvedFit::Contain);
        assert_eq!(FitMode::Cover.resolve(300.0, 50.0, 200.0, 100.0), ResolvedFit::Cover);
        assert_eq!(FitMode::Fill.resolve(300.0, 50.0, 200.0, 100.0), ResolvedFit::Fill);
    }

    #[test]
    fn test_fit_mode_ratio() {
        // 800x400 image in a 200x200 box: width ratio 0.25, height ratio 0.5
        assert_eq!(FitMode::Cover.ratio(800.0, 400.0, 200.0, 200.0), 0.5);
        assert_eq!(FitMode::Fill.ratio(800.0, 400.0, 200.0, 200.0), 0.5);
        assert_eq!(FitMode::Contain.ratio(800.0, 400.0, 200.0, 200.0), 0.25);
        assert_eq!(FitMode::None.ratio(800.0, 400.0, 200.0, 200.0), 1.0);
        assert_eq!(FitMode::ScaleDown.ratio(800.0, 400.0, 200.0, 200.0), 0.25);
        assert_eq!(FitMode::ScaleDown.ratio(100.0, 100.0, 200.0, 200.0), 1.0);
    }

    #[test]
    fn test_background_size_parse() {
        assert_eq!("cover".parse::<BackgroundSize>().unwrap(), BackgroundSize::Cover);
        assert_eq!("contain".parse::<BackgroundSize>().unwrap(), BackgroundSize::Contain);
        assert_eq!(
            "100px 25%".parse::<BackgroundSize>().unwrap(),
            BackgroundSize::Explicit {
                width: SizeComponent::Length(LengthPercentage::Px(100.0)),
                height: SizeComponent::Length(LengthPercentage::Percent(25.0)),
            }
        );
        assert_eq!(
            "auto".parse::<BackgroundSize>().unwrap(),
            BackgroundSize::default()
        );
        assert_eq!(
            "auto 10%".parse::<BackgroundSize>().unwrap(),
            BackgroundSize::Explicit {
                width: SizeComponent::Auto,
                height: SizeComponent::Length(LengthPercentage::Percent(10.0)),
            }
        );
        assert_eq!(
            "20px".parse::<BackgroundSize>().unwrap(),
            BackgroundSize::Explicit {
                width: SizeComponent::Length(LengthPercentage::Px(20.0)),
                height: SizeComponent::Length(LengthPercentage::CENTER),
            }
        );
        assert!("left".parse::<BackgroundSize>().is_err());
        assert!("3em 2em".parse::<BackgroundSize>().is_err());
    }

    #[test]
    fn test_background_size_ratio() {
        // 400x200 image in a 200x200 box
        assert_eq!(BackgroundSize::Cover.ratio(400.0, 200.0, 200.0, 200.0), 1.0);
        assert_eq!(BackgroundSize::Contain.ratio(400.0, 200.0, 200.0, 200.0), 0.5);

        let size: BackgroundSize = "100% 100%".parse().unwrap();
        assert_eq!(size.ratio(400.0, 200.0, 200.0, 200.0), 0.5);

        let size: BackgroundSize = "auto auto".parse().unwrap();
        assert_eq!(size.ratio(400.0, 200.0, 200.0, 200.0), 1.0);

        let size: BackgroundSize = "auto 100px".parse().unwrap();
        assert_eq!(size.ratio(400.0, 200.0, 200.0, 200.0), 0.5);
    }

    #[test]
    fn test_background_layout_parse() {
        let layout = BackgroundLayout::parse("0% 100%", "cover").unwrap();
        assert_eq!(layout.size, BackgroundSize::Cover);
        assert_eq!(layout.position.x, LengthPercentage::Percent(0.0));
        assert_eq!(layout.position.y, LengthPercentage::Percent(100.0));

        assert!(BackgroundLayout::parse("0% 100%", "bogus").is_err());
    }
}
