//! Style of the zoomed image in the modal, and of the ghost placeholder

use crate::builders::{
    background_container_style, object_fit_style, regular_image_style, StyleParams,
};
use crate::fit::{BackgroundLayout, FitMode};
use crate::geometry::{IntrinsicSize, Rect, Viewport};
use crate::position::Position;
use crate::source::{has_scalable_source, SourceKind};
use crate::style::{StyleMap, ZoomTransform, REFRESH_TRANSITION_DURATION};
use crate::Result;

/// Snapshot of the element being zoomed
///
/// The style strings are the element's computed values; the ones that do
/// not apply to its kind are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetElement {
    pub kind: SourceKind,
    /// `getBoundingClientRect()` of the element
    pub rect: Rect,
    pub background_position: String,
    pub background_size: String,
    pub object_fit: String,
    pub object_position: String,
}

impl TargetElement {
    /// Element with initial CSS values for every fit property
    pub fn new(kind: SourceKind, rect: Rect) -> Self {
        Self {
            kind,
            rect,
            background_position: "0% 0%".to_string(),
            background_size: "auto".to_string(),
            object_fit: "fill".to_string(),
            object_position: "50% 50%".to_string(),
        }
    }

    pub fn with_background(mut self, position: &str, size: &str) -> Self {
        self.background_position = position.to_string();
        self.background_size = size.to_string();
        self
    }

    pub fn with_object_fit(mut self, fit: &str, position: &str) -> Self {
        self.object_fit = fit.to_string();
        self.object_position = position.to_string();
        self
    }

    fn background_layout(&self) -> Result<BackgroundLayout> {
        BackgroundLayout::parse(&self.background_position, &self.background_size)
    }

    fn object_layout(&self) -> Result<(FitMode, Position)> {
        Ok((self.object_fit.parse()?, self.object_position.parse()?))
    }
}

/// Inputs of [`compute_modal_image_style`]
#[derive(Debug, Clone, Copy)]
pub struct ModalImageParams<'a> {
    pub is_zoomed: bool,
    /// Natural size of the fully loaded image, `None` while still loading
    pub loaded_image: Option<IntrinsicSize>,
    /// Margin kept between the zoomed image and each viewport edge
    pub offset: f64,
    pub target: &'a TargetElement,
    /// Set when restyling after a viewport resize rather than a zoom toggle
    pub should_refresh: bool,
    /// Current source of the image, used to detect SVG
    pub img_src: Option<&'a str>,
    pub viewport: Viewport,
}

/// Compute the inline style of the modal image
///
/// The regular style is always computed first. Once the image has loaded,
/// the background or object-fit style for the target's kind is laid over
/// it. When zoomed, the transform is replaced by one that centers the box
/// in the viewport at scale 1.
pub fn compute_modal_image_style(params: &ModalImageParams<'_>) -> StyleMap {
    let target = params.target;
    let rect = target.rect;

    let natural = params.loaded_image.unwrap_or_default();
    let intrinsic = IntrinsicSize::new(
        non_zero_or(natural.width, rect.width),
        non_zero_or(natural.height, rect.height),
    );

    let style_params = StyleParams {
        container: rect,
        intrinsic,
        offset: params.offset,
        has_scalable_src: has_scalable_source(params.img_src),
        viewport: params.viewport,
    };

    let mut style = regular_image_style(&style_params);

    if params.loaded_image.is_some() {
        let overlay = match target.kind {
            SourceKind::BackgroundContainer => match target.background_layout() {
                Ok(layout) => background_container_style(&style_params, &layout),
                Err(err) => {
                    tracing::warn!("Ignoring background layout: {}", err);
                    StyleMap::new()
                }
            },
            SourceKind::PlainImage => match target.object_layout() {
                Ok((fit, position)) => object_fit_style(&style_params, fit, &position),
                Err(err) => {
                    tracing::warn!("Ignoring object-fit layout: {}", err);
                    StyleMap::new()
                }
            },
        };
        style.merge(overlay);
    }

    if params.is_zoomed {
        let center_x = style.px("left").unwrap_or(0.0) + style.px("width").unwrap_or(0.0) / 2.0;
        let center_y = style.px("top").unwrap_or(0.0) + style.px("height").unwrap_or(0.0) / 2.0;

        if params.should_refresh {
            style.insert("transition-duration", REFRESH_TRANSITION_DURATION);
        }

        let transform = ZoomTransform::centered(params.viewport.center(), center_x, center_y);
        style.insert("transform", transform.to_string());
    }

    tracing::trace!(
        kind = ?target.kind,
        zoomed = params.is_zoomed,
        style = %style.to_css_string(),
        "computed modal image style"
    );

    style
}

fn non_zero_or(value: f64, fallback: f64) -> f64 {
    if value != 0.0 && !value.is_nan() {
        value
    } else {
        fallback
    }
}

/// Style of the placeholder kept in the page while the image is in the modal
///
/// `offset_box` is the original element's offset box (`offsetTop`,
/// `offsetLeft`, `offsetWidth`, `offsetHeight`).
pub fn ghost_style(offset_box: Option<&Rect>) -> StyleMap {
    let Some(rect) = offset_box else {
        return StyleMap::new();
    };

    let mut style = StyleMap::new();
    style.insert_px("height", rect.height);
    style.insert_px("width", rect.width);
    style.insert_px("top", rect.top);
    style.insert_px("left", rect.left);
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::parse_translate;
    use pretty_assertions::assert_eq;

    fn viewport() -> Viewport {
        Viewport::new(1024.0, 768.0)
    }

    fn params(target: &TargetElement) -> ModalImageParams<'_> {
        ModalImageParams {
            is_zoomed: false,
            loaded_image: None,
            offset: 0.0,
            target,
            should_refresh: false,
            img_src: None,
            viewport: viewport(),
        }
    }

    #[test]
    fn test_unloaded_image_uses_regular_style() {
        let target =
            TargetElement::new(SourceKind::PlainImage, Rect::new(50.0, 20.0, 200.0, 100.0));

        let style = compute_modal_image_style(&params(&target));

        // Intrinsic size falls back to the rect, so the box is not enlarged
        assert_eq!(style.get("width"), Some("200px"));
        assert_eq!(style.get("height"), Some("100px"));
        assert_eq!(style.get("transform"), Some("translate(0,0) scale(1)"));
        assert_eq!(
            style.keys().collect::<Vec<_>>(),
            vec!["top", "left", "width", "height", "transform"]
        );
    }

    #[test]
    fn test_loaded_image_object_fit_overlay() {
        let target = TargetElement::new(SourceKind::PlainImage, Rect::new(0.0, 0.0, 200.0, 200.0))
            .with_object_fit("contain", "50% 50%");
        let mut p = params(&target);
        p.loaded_image = Some(IntrinsicSize::new(400.0, 200.0));

        let style = compute_modal_image_style(&p);

        assert_eq!(style.get("top"), Some("50px"));
        assert_eq!(style.get("width"), Some("400px"));
        assert_eq!(style.get("transform"), Some("translate(0,0) scale(0.5)"));
    }

    #[test]
    fn test_loaded_background_overlay() {
        let target = TargetElement::new(
            SourceKind::BackgroundContainer,
            Rect::new(10.0, 10.0, 200.0, 200.0),
        )
        .with_background("50% 50%", "cover");
        let mut p = params(&target);
        p.loaded_image = Some(IntrinsicSize::new(400.0, 200.0));

        let style = compute_modal_image_style(&p);

        assert_eq!(style.get("left"), Some("-90px"));
        assert_eq!(style.get("width"), Some("400px"));
    }

    #[test]
    fn test_unparseable_fit_keeps_regular_style() {
        let target = TargetElement::new(SourceKind::PlainImage, Rect::new(50.0, 20.0, 200.0, 100.0))
            .with_object_fit("stretch", "50% 50%");
        let mut p = params(&target);
        p.loaded_image = Some(IntrinsicSize::new(800.0, 400.0));

        let style = compute_modal_image_style(&p);

        let regular = regular_image_style(&StyleParams {
            container: target.rect,
            intrinsic: IntrinsicSize::new(800.0, 400.0),
            offset: 0.0,
            has_scalable_src: false,
            viewport: viewport(),
        });

        assert_eq!(style, regular);
    }

    #[test]
    fn test_natural_size_falls_back_per_axis() {
        let target = TargetElement::new(SourceKind::PlainImage, Rect::new(0.0, 0.0, 200.0, 100.0))
            .with_object_fit("none", "0% 0%");
        let mut p = params(&target);
        p.loaded_image = Some(IntrinsicSize::new(100.0, 0.0));

        let style = compute_modal_image_style(&p);

        // Intrinsic becomes 100x100
        assert_eq!(style.get("top"), Some("0px"));
        assert_eq!(style.get("left"), Some("0px"));
        assert_eq!(style.get("width"), Some("100px"));
        assert_eq!(style.get("height"), Some("100px"));
    }

    #[test]
    fn test_zoomed_centers_box() {
        let target =
            TargetElement::new(SourceKind::PlainImage, Rect::new(50.0, 20.0, 200.0, 100.0));
        let mut p = params(&target);
        p.is_zoomed = true;
        p.loaded_image = Some(IntrinsicSize::new(800.0, 400.0));

        let style = compute_modal_image_style(&p);
        let (tx, ty) = parse_translate(style.get("transform").unwrap()).unwrap();

        // Box is 800x400 at (20, 50): center (420, 250)
        assert_eq!((tx, ty), (92.0, 134.0));
        assert!(style.get("transform").unwrap().ends_with("scale(1)"));
        assert!(!style.contains_key("transition-duration"));
    }

    #[test]
    fn test_refresh_suppresses_transition() {
        let target =
            TargetElement::new(SourceKind::PlainImage, Rect::new(50.0, 20.0, 200.0, 100.0));
        let mut p = params(&target);
        p.is_zoomed = true;
        p.should_refresh = true;

        let style = compute_modal_image_style(&p);
        assert_eq!(style.get("transition-duration"), Some("0.01ms"));
    }

    #[test]
    fn test_refresh_ignored_when_not_zoomed() {
        let target =
            TargetElement::new(SourceKind::PlainImage, Rect::new(50.0, 20.0, 200.0, 100.0));
        let mut p = params(&target);
        p.should_refresh = true;

        let style = compute_modal_image_style(&p);
        assert!(!style.contains_key("transition-duration"));
    }

    #[test]
    fn test_ghost_style() {
        let rect = Rect::new(12.0, 8.0, 300.0, 150.0);
        let style = ghost_style(Some(&rect));

        assert_eq!(
            style.iter().collect::<Vec<_>>(),
            vec![
                ("height", "150px"),
                ("width", "300px"),
                ("top", "12px"),
                ("left", "8px"),
            ]
        );
    }

    #[test]
    fn test_ghost_style_absent() {
        assert!(ghost_style(None).is_empty());
    }
}
