//! Style builders, one per kind of zoomable source
//!
//! Each builder lays the image out at its zoomed size and shrinks it back
//! with a [`ZoomTransform::Collapsed`] transform, so the overlay initially
//! covers the original on-page image exactly.

use crate::fit::{BackgroundLayout, FitMode, ResolvedFit};
use crate::geometry::{IntrinsicSize, Rect, Viewport};
use crate::position::Position;
use crate::scale::{resolve_scale, ScaleParams};
use crate::style::{StyleMap, ZoomTransform};

/// Measured inputs common to every builder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleParams {
    /// Bounding box of the source element
    pub container: Rect,
    /// Natural size of the image, or the container size when unknown
    pub intrinsic: IntrinsicSize,
    /// Margin kept between the zoomed image and each viewport edge
    pub offset: f64,
    pub has_scalable_src: bool,
    pub viewport: Viewport,
}

impl StyleParams {
    /// Scale inputs for a displayed box of `box_width` x `box_height`
    fn scale_params(&self, box_width: f64, box_height: f64) -> ScaleParams {
        ScaleParams {
            width: self.intrinsic.width,
            height: self.intrinsic.height,
            offset: self.offset,
            container_width: box_width,
            container_height: box_height,
            has_scalable_src: self.has_scalable_src,
            viewport: self.viewport,
        }
    }
}

fn collapsed(scale: f64) -> String {
    ZoomTransform::Collapsed { scale }.to_string()
}

/// Style for a plain `<img>` without any fitting
///
/// The box stays at the container position and is enlarged by the zoom
/// scale, then shrunk back by the transform.
pub fn regular_image_style(params: &StyleParams) -> StyleMap {
    let container = params.container;
    let scale = resolve_scale(&params.scale_params(container.width, container.height));

    let mut style = StyleMap::new();
    style.insert_px("top", container.top);
    style.insert_px("left", container.left);
    style.insert_px("width", container.width * scale);
    style.insert_px("height", container.height * scale);
    style.insert("transform", collapsed(scale));
    style
}

/// Style for a `<div>`/`<span>` showing its image through `background-image`
///
/// Reproduces `background-size` and `background-position` so the zoomed
/// box starts exactly over the visible background.
pub fn background_container_style(params: &StyleParams, layout: &BackgroundLayout) -> StyleMap {
    let IntrinsicSize { width, height } = params.intrinsic;
    if !params.intrinsic.is_known() {
        return StyleMap::new();
    }

    let container = params.container;
    let ratio = layout
        .size
        .ratio(width, height, container.width, container.height);

    let (pos_x, pos_y) = layout.position.resolve(
        container.width - width * ratio,
        container.height - height * ratio,
    );

    let scale = resolve_scale(&params.scale_params(width * ratio, height * ratio));

    let mut style = StyleMap::new();
    style.insert_px("top", container.top + pos_y);
    style.insert_px("left", container.left + pos_x);
    style.insert_px("width", width * ratio * scale);
    style.insert_px("height", height * ratio * scale);
    style.insert("transform", collapsed(scale));
    style
}

/// Style for an `<img>` laid out with `object-fit` / `object-position`
///
/// `fill` only sets the size, leaving the position of the regular style in
/// place.
pub fn object_fit_style(params: &StyleParams, fit: FitMode, position: &Position) -> StyleMap {
    let IntrinsicSize { width, height } = params.intrinsic;
    if !params.intrinsic.is_known() {
        return StyleMap::new();
    }

    let container = params.container;
    let fit = fit.resolve(width, height, container.width, container.height);
    let ratio = fit.ratio(width, height, container.width, container.height);

    let scale = resolve_scale(&params.scale_params(width * ratio, height * ratio));

    let (pos_x, pos_y) = position.resolve(
        container.width - width * ratio,
        container.height - height * ratio,
    );

    let mut style = StyleMap::new();
    match fit {
        ResolvedFit::Cover | ResolvedFit::Contain => {
            style.insert_px("top", container.top + pos_y);
            style.insert_px("left", container.left + pos_x);
            style.insert_px("width", width * ratio * scale);
            style.insert_px("height", height * ratio * scale);
        }
        ResolvedFit::None => {
            style.insert_px("top", container.top + pos_y);
            style.insert_px("left", container.left + pos_x);
            style.insert_px("width", width * scale);
            style.insert_px("height", height * scale);
        }
        ResolvedFit::Fill => {
            style.insert_px("width", container.width * scale);
            style.insert_px("height", container.height * scale);
        }
    }
    style.insert("transform", collapsed(scale));
    style
}
