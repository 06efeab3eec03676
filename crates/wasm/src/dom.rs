//! Snapshots of the live DOM for the geometry functions

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, HtmlImageElement, Window};
use zoom_core::{IntrinsicSize, Rect, SourceKind, TargetElement, Viewport};

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No global window available"))
}

pub(crate) fn viewport(window: &Window) -> Result<Viewport, JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Viewport::new(width, height))
}

pub(crate) fn natural_size(img: &HtmlImageElement) -> IntrinsicSize {
    IntrinsicSize::new(img.natural_width() as f64, img.natural_height() as f64)
}

/// Offset box of an element relative to its offset parent
pub(crate) fn offset_box(el: &HtmlElement) -> Rect {
    Rect::new(
        el.offset_top() as f64,
        el.offset_left() as f64,
        el.offset_width() as f64,
        el.offset_height() as f64,
    )
}

pub(crate) fn computed_property(
    window: &Window,
    el: &Element,
    name: &str,
) -> Result<Option<String>, JsValue> {
    match window.get_computed_style(el)? {
        Some(style) => Ok(Some(style.get_property_value(name)?)),
        None => Ok(None),
    }
}

/// Measure the element being zoomed
pub(crate) fn measure_target(window: &Window, el: &Element) -> Result<TargetElement, JsValue> {
    let bounds = el.get_bounding_client_rect();
    let rect = Rect::new(bounds.top(), bounds.left(), bounds.width(), bounds.height());
    let mut target = TargetElement::new(SourceKind::from_tag_name(&el.tag_name()), rect);

    if let Some(style) = window.get_computed_style(el)? {
        target.background_position = style.get_property_value("background-position")?;
        target.background_size = style.get_property_value("background-size")?;
        target.object_fit = style.get_property_value("object-fit")?;
        target.object_position = style.get_property_value("object-position")?;
    }

    Ok(target)
}
