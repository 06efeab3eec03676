//! Scale factors for fitting an image into the viewport

use crate::geometry::Viewport;

/// Inputs shared by the scale calculators
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleParams {
    /// Intrinsic width of the image (0 when unknown)
    pub width: f64,
    /// Intrinsic height of the image (0 when unknown)
    pub height: f64,
    /// Margin kept between the zoomed image and each viewport edge
    pub offset: f64,
    /// Width of the box the image is displayed in
    pub container_width: f64,
    /// Height of the box the image is displayed in
    pub container_height: f64,
    /// SVG sources are scaled from the container box, not pixel size
    pub has_scalable_src: bool,
    pub viewport: Viewport,
}

/// Largest uniform scale that fits `width` x `height` inside the viewport
/// minus `offset` on every edge
///
/// The result is not clamped; values above 1 mean the size fits without
/// shrinking.
pub fn scale_to_fit_window(width: f64, height: f64, offset: f64, viewport: Viewport) -> f64 {
    let scale_x = (viewport.width - offset * 2.0) / width;
    let scale_y = (viewport.height - offset * 2.0) / height;
    scale_x.min(scale_y)
}

/// Window-fit scale expressed relative to the displayed container box
///
/// `ratio` is how much larger the intrinsic size is than the container.
/// When the image fits the window at natural size the ratio alone is used,
/// otherwise the window scale is applied on top of it.
pub fn scale_to_fit_window_max(params: &ScaleParams) -> f64 {
    let scale = scale_to_fit_window(params.width, params.height, params.offset, params.viewport);

    let ratio =
        (params.width / params.container_width).max(params.height / params.container_height);

    if scale > 1.0 {
        ratio
    } else {
        scale * ratio
    }
}

/// Pick the scale for the zoomed image
///
/// Returns 1 if the container has no area yet. Raster images with a known
/// intrinsic size go through [`scale_to_fit_window_max`]; scalable sources
/// and images with unknown size are fitted from the container box alone.
/// A non-finite or non-positive result also falls back to 1.
pub fn resolve_scale(params: &ScaleParams) -> f64 {
    if params.container_width == 0.0 || params.container_height == 0.0 {
        return 1.0;
    }

    let scale = if !params.has_scalable_src && params.width != 0.0 && params.height != 0.0 {
        scale_to_fit_window_max(params)
    } else {
        scale_to_fit_window(
            params.container_width,
            params.container_height,
            params.offset,
            params.viewport,
        )
    };

    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(width: f64, height: f64, container_width: f64, container_height: f64) -> ScaleParams {
        ScaleParams {
            width,
            height,
            offset: 0.0,
            container_width,
            container_height,
            has_scalable_src: false,
            viewport: Viewport::new(1024.0, 768.0),
        }
    }

    #[test]
    fn test_scale_to_fit_window() {
        let viewport = Viewport::new(1024.0, 768.0);
        assert_eq!(scale_to_fit_window(800.0, 400.0, 0.0, viewport), 1.28);
        assert_eq!(scale_to_fit_window(2048.0, 768.0, 0.0, viewport), 0.5);
    }

    #[test]
    fn test_scale_to_fit_window_with_offset() {
        let viewport = Viewport::new(1000.0, 800.0);
        // (1000 - 200) / 400 = 2, (800 - 200) / 400 = 1.5
        assert_eq!(scale_to_fit_window(400.0, 400.0, 100.0, viewport), 1.5);
    }

    #[test]
    fn test_scale_to_fit_window_allows_upscale() {
        let viewport = Viewport::new(1000.0, 1000.0);
        assert_eq!(scale_to_fit_window(100.0, 100.0, 0.0, viewport), 10.0);
    }

    #[test]
    fn test_scale_to_fit_window_max_uses_ratio_when_fitting() {
        // Window scale 1.28 > 1, ratio = max(800/200, 400/100) = 4
        assert_eq!(scale_to_fit_window_max(&params(800.0, 400.0, 200.0, 100.0)), 4.0);
    }

    #[test]
    fn test_scale_to_fit_window_max_combines_when_shrinking() {
        // Window scale = min(1024/2048, 768/1024) = 0.5, ratio = 2048/512 = 4
        assert_eq!(scale_to_fit_window_max(&params(2048.0, 1024.0, 512.0, 256.0)), 2.0);
    }

    #[test]
    fn test_resolve_scale_zero_container() {
        assert_eq!(resolve_scale(&params(800.0, 400.0, 0.0, 100.0)), 1.0);
        assert_eq!(resolve_scale(&params(800.0, 400.0, 200.0, 0.0)), 1.0);

        let mut scalable = params(0.0, 0.0, 0.0, 0.0);
        scalable.has_scalable_src = true;
        assert_eq!(resolve_scale(&scalable), 1.0);
    }

    #[test]
    fn test_resolve_scale_raster() {
        assert_eq!(resolve_scale(&params(800.0, 400.0, 200.0, 100.0)), 4.0);
    }

    #[test]
    fn test_resolve_scale_scalable_uses_container() {
        let mut p = params(800.0, 400.0, 256.0, 128.0);
        p.has_scalable_src = true;
        // min(1024/256, 768/128) = 4
        assert_eq!(resolve_scale(&p), 4.0);
    }

    #[test]
    fn test_resolve_scale_unknown_intrinsic_uses_container() {
        assert_eq!(resolve_scale(&params(0.0, 0.0, 256.0, 128.0)), 4.0);
    }

    #[test]
    fn test_resolve_scale_degenerate_offset() {
        let mut p = params(800.0, 400.0, 200.0, 100.0);
        p.offset = 1000.0;
        assert_eq!(resolve_scale(&p), 1.0);
    }
}
