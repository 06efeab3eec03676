//! Zoom Core - Geometry for image zoom overlays
//!
//! This crate provides:
//! - Window-fit scale calculation for zoomed images
//! - `object-fit` / `object-position` replication (fill, contain, cover, none, scale-down)
//! - `background-size` / `background-position` replication for background images
//! - Zoom-centering transforms and ghost placeholder boxes
//! - Small parsing helpers (durations, CSS `url(...)`, style strings)
//!
//! Everything here is a pure function of measured inputs. Reading the DOM
//! (bounding rects, computed style, viewport size) is the caller's job.
//!
//! # Example
//!
//! ```
//! use zoom_core::{
//!     compute_modal_image_style, ModalImageParams, Rect, SourceKind, TargetElement, Viewport,
//! };
//!
//! let target = TargetElement::new(SourceKind::PlainImage, Rect::new(50.0, 20.0, 200.0, 100.0));
//! let style = compute_modal_image_style(&ModalImageParams {
//!     is_zoomed: false,
//!     loaded_image: None,
//!     offset: 0.0,
//!     target: &target,
//!     should_refresh: false,
//!     img_src: None,
//!     viewport: Viewport::new(1024.0, 768.0),
//! });
//!
//! assert_eq!(style.get("top"), Some("50px"));
//! ```

mod builders;
mod config;
mod duration;
mod fit;
mod geometry;
mod modal;
mod position;
mod scale;
mod source;
mod style;

pub use builders::{background_container_style, object_fit_style, regular_image_style, StyleParams};
pub use config::{DurationSetting, WrapElement, ZoomConfig, DEFAULT_PORTAL_SELECTOR};
pub use duration::{parse_duration, Duration, DurationUnit, DEFAULT_DURATION};
pub use fit::{BackgroundLayout, BackgroundSize, FitMode, ResolvedFit, SizeComponent};
pub use geometry::{IntrinsicSize, Rect, Viewport};
pub use modal::{compute_modal_image_style, ghost_style, ModalImageParams, TargetElement};
pub use position::{LengthPercentage, Position};
pub use scale::{resolve_scale, scale_to_fit_window, scale_to_fit_window_max, ScaleParams};
pub use source::{extract_css_url, has_scalable_source, SourceKind};
pub use style::{StyleMap, ZoomTransform, REFRESH_TRANSITION_DURATION};

use thiserror::Error;

/// Errors that can occur while parsing style inputs or configuration
#[derive(Debug, Error)]
pub enum ZoomError {
    #[error("Invalid object-fit value: {0}")]
    InvalidFitMode(String),

    #[error("Invalid length or percentage: {0}")]
    InvalidLength(String),

    #[error("Invalid background-size value: {0}")]
    InvalidBackgroundSize(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for zoom operations
pub type Result<T> = std::result::Result<T, ZoomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ZoomError::InvalidFitMode("stretch".to_string());
        assert_eq!(err.to_string(), "Invalid object-fit value: stretch");

        let err = ZoomError::InvalidDuration("fast".to_string());
        assert_eq!(err.to_string(), "Invalid duration: fast");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ZoomError = json_err.into();
        assert!(matches!(err, ZoomError::JsonError(_)));
    }
}
