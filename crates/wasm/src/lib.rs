//! WASM bindings for zoom-core
//!
//! This crate provides the browser side of the image zoom:
//! - Measuring the zoomed element (bounding rect, computed style, viewport)
//! - Computing the modal image and ghost placeholder styles
//! - Finding image sources and alt text
//! - Mounting the zoom dialog into its portal container
//!
//! `init` runs on module load and forwards zoom-core warnings to the
//! browser console.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { computeModalImageStyle, ghostStyle, styleToCssString } from 'zoom-wasm';
//!
//! await init();
//!
//! const style = computeModalImageStyle(isZoomed, loadedImg, 24, targetEl, false, imgSrc);
//! modalImg.setAttribute('style', styleToCssString(style));
//!
//! const ghost = ghostStyle(targetEl);
//! ```

mod dom;
mod logging;
mod portal;

pub use portal::{dialog_container, Portal};

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, HtmlImageElement};
use zoom_core::{SourceKind, StyleMap, ZoomConfig};

// Initialize panic hook and console logging for the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::init();
}

/// Convert a style map into a plain JS object, keeping property order
fn style_to_js(style: &StyleMap) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    style.serialize(&serializer).map_err(JsValue::from)
}

/// Compute the inline style of the zoomed image
///
/// @param isZoomed - Whether the modal is open
/// @param loadedImg - The fully loaded `<img>`, or null while loading
/// @param offset - Margin in pixels kept from the viewport edges
/// @param targetEl - The element being zoomed (`img`, `div` or `span`)
/// @param shouldRefresh - True when restyling after a window resize
/// @param imgSrc - Current image source, used to detect SVG
/// @returns Object of CSS property names to values
#[wasm_bindgen(js_name = computeModalImageStyle)]
pub fn compute_modal_image_style(
    is_zoomed: bool,
    loaded_img: Option<HtmlImageElement>,
    offset: f64,
    target_el: &Element,
    should_refresh: bool,
    img_src: Option<String>,
) -> Result<JsValue, JsValue> {
    let window = dom::window()?;
    let target = dom::measure_target(&window, target_el)?;

    let style = zoom_core::compute_modal_image_style(&zoom_core::ModalImageParams {
        is_zoomed,
        loaded_image: loaded_img.as_ref().map(dom::natural_size),
        offset,
        target: &target,
        should_refresh,
        img_src: img_src.as_deref(),
        viewport: dom::viewport(&window)?,
    });

    style_to_js(&style)
}

/// Compute the style of the placeholder left behind in the page
///
/// @param el - The original element, or null
/// @returns Object with height, width, top and left (empty without element)
#[wasm_bindgen(js_name = ghostStyle)]
pub fn ghost_style(el: Option<HtmlElement>) -> Result<JsValue, JsValue> {
    let offset_box = el.as_ref().map(dom::offset_box);
    style_to_js(&zoom_core::ghost_style(offset_box.as_ref()))
}

/// Get the image source of a zoomable element
///
/// `<img>` elements report their current source; `div`/`span` elements
/// report the first `url(...)` of their computed background image.
///
/// @param el - Zoomable element, or null
/// @returns Image address, or undefined
#[wasm_bindgen(js_name = getImgSrc)]
pub fn get_img_src(el: Option<Element>) -> Option<String> {
    let el = el?;
    if let Some(img) = el.dyn_ref::<HtmlImageElement>() {
        return Some(img.current_src());
    }

    if SourceKind::from_tag_name(&el.tag_name()) != SourceKind::BackgroundContainer {
        return None;
    }

    let background = dom::computed_property(&dom::window().ok()?, &el, "background-image")
        .ok()
        .flatten()?;
    zoom_core::extract_css_url(&background).map(str::to_string)
}

/// Get the accessible description of a zoomable element
///
/// @param el - Zoomable element, or null
/// @returns `alt` of an image, otherwise `aria-label`
#[wasm_bindgen(js_name = getImgAlt)]
pub fn get_img_alt(el: Option<Element>) -> Option<String> {
    let el = el?;
    match el.dyn_ref::<HtmlImageElement>() {
        Some(img) => Some(img.alt()),
        None => el.get_attribute("aria-label"),
    }
}

/// Whether an image has finished loading with real pixel data
#[wasm_bindgen(js_name = isImgLoaded)]
pub fn is_img_loaded(img: &HtmlImageElement) -> bool {
    img.complete() && img.natural_height() != 0
}

/// Convert a style object into an inline style string
///
/// @param style - Object such as `{ top: "100px" }`
/// @returns String such as `"top: 100px;"`
#[wasm_bindgen(js_name = styleToCssString)]
pub fn style_to_css_string(style: JsValue) -> Result<String, JsValue> {
    let style: StyleMap = serde_wasm_bindgen::from_value(style)?;
    Ok(style.to_css_string())
}

/// Normalize a transition duration
///
/// @param input - Milliseconds as a number, or a string like `"1s"`
/// @returns Duration string such as `"300ms"`
#[wasm_bindgen(js_name = parseDuration)]
pub fn parse_duration(input: JsValue) -> String {
    match input.as_f64() {
        Some(millis) => duration_from_millis(millis),
        None => duration_from_text(&input.as_string().unwrap_or_default()),
    }
}

fn duration_from_millis(millis: f64) -> String {
    format!("{}ms", millis)
}

fn duration_from_text(text: &str) -> String {
    zoom_core::parse_duration(text).to_string()
}

/// Validated zoom options
#[wasm_bindgen]
pub struct ZoomOptions {
    inner: ZoomConfig,
}

#[wasm_bindgen]
impl ZoomOptions {
    /// Create options from a plain object
    ///
    /// @param options - `{ zoomMargin, transitionDuration, wrapElement, dialogClass,
    ///   portalTarget }`
    /// @returns ZoomOptions instance
    #[wasm_bindgen(js_name = fromObject)]
    pub fn from_object(options: JsValue) -> Result<ZoomOptions, JsValue> {
        let inner: ZoomConfig = if options.is_undefined() || options.is_null() {
            ZoomConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };
        inner
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(ZoomOptions { inner })
    }

    /// Create options from JSON
    ///
    /// @param json - Options JSON string
    /// @returns ZoomOptions instance
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<ZoomOptions, JsValue> {
        let inner = ZoomConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(ZoomOptions { inner })
    }

    #[wasm_bindgen(getter, js_name = zoomMargin)]
    pub fn zoom_margin(&self) -> f64 {
        self.inner.zoom_margin
    }

    #[wasm_bindgen(getter, js_name = transitionDuration)]
    pub fn transition_duration(&self) -> String {
        self.inner.transition_duration().to_string()
    }

    /// Transition duration in milliseconds, for timers waiting on the zoom
    #[wasm_bindgen(getter, js_name = transitionDurationMs)]
    pub fn transition_duration_ms(&self) -> f64 {
        self.inner.transition_duration().as_millis() as f64
    }

    #[wasm_bindgen(getter, js_name = wrapElement)]
    pub fn wrap_element(&self) -> String {
        self.inner.wrap_element.tag_name().to_string()
    }

    #[wasm_bindgen(getter, js_name = dialogClass)]
    pub fn dialog_class(&self) -> Option<String> {
        self.inner.dialog_class.clone()
    }

    /// Find or create the container the dialog is mounted into
    #[wasm_bindgen(js_name = dialogContainer)]
    pub fn dialog_container(&self) -> Result<HtmlElement, JsValue> {
        portal::find_or_create_container(self.inner.portal_selector())
    }
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            inner: ZoomConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_duration_from_millis() {
        assert_eq!(duration_from_millis(3000.0), "3000ms");
        assert_eq!(duration_from_millis(12.5), "12.5ms");
    }

    #[wasm_bindgen_test]
    fn test_duration_from_text() {
        assert_eq!(duration_from_text("1s"), "1s");
        assert_eq!(duration_from_text("250"), "250ms");
        assert_eq!(duration_from_text("later"), "300ms");
    }

    #[wasm_bindgen_test]
    fn test_duration_in_seconds_as_millis() {
        let options = ZoomOptions::from_json(r#"{"transitionDuration": "2s"}"#).unwrap();
        assert_eq!(options.transition_duration(), "2s");
        assert_eq!(options.transition_duration_ms(), 2000.0);
    }

    #[wasm_bindgen_test]
    fn test_default_options() {
        let options = ZoomOptions::default();
        assert_eq!(options.zoom_margin(), 0.0);
        assert_eq!(options.transition_duration(), "300ms");
        assert_eq!(options.transition_duration_ms(), 300.0);
        assert_eq!(options.wrap_element(), "div");
        assert_eq!(options.dialog_class(), None);
    }
}
