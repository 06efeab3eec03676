//! Mounting the zoom dialog outside the page flow

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};
use zoom_core::DEFAULT_PORTAL_SELECTOR;

use crate::dom;

fn document() -> Result<Document, JsValue> {
    dom::window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document available"))
}

/// Find the element matching `selector`, creating the default container
/// under `<body>` when it does not exist yet
pub(crate) fn find_or_create_container(selector: &str) -> Result<HtmlElement, JsValue> {
    let document = document()?;

    if let Some(el) = document.query_selector(selector)? {
        return el.dyn_into::<HtmlElement>().map_err(|_| {
            JsValue::from_str(&format!("Element matching \"{}\" is not an HTML element", selector))
        });
    }

    if selector != DEFAULT_PORTAL_SELECTOR {
        return Err(js_sys::Error::new(&format!(
            "No element found matching css selector: \"{}\"",
            selector
        ))
        .into());
    }

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("Document has no body"))?;
    let el = document.create_element("div")?;
    el.set_attribute("data-smiz-portal", "")?;
    body.append_child(&el)?;
    el.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

/// Find or create the default `[data-smiz-portal]` container
#[wasm_bindgen(js_name = dialogContainer)]
pub fn dialog_container() -> Result<HtmlElement, JsValue> {
    find_or_create_container(DEFAULT_PORTAL_SELECTOR)
}

/// Keeps an element mounted inside a target container
///
/// The target is either a CSS selector or an `HTMLElement`; it defaults to
/// `body`.
#[wasm_bindgen]
pub struct Portal {
    el: HtmlElement,
}

#[wasm_bindgen]
impl Portal {
    /// Mount `el` into `target`
    ///
    /// @param el - Element to move
    /// @param target - CSS selector or HTMLElement (defaults to "body")
    #[wasm_bindgen(constructor)]
    pub fn new(el: HtmlElement, target: JsValue) -> Result<Portal, JsValue> {
        let portal = Portal { el };
        portal.update(target)?;
        Ok(portal)
    }

    /// Move the element to a new target
    pub fn update(&self, target: JsValue) -> Result<(), JsValue> {
        let target_el = resolve_target(target)?;
        target_el.append_child(&self.el)?;
        self.el.set_hidden(false);
        Ok(())
    }

    /// Detach the element from wherever it is mounted
    pub fn destroy(&self) {
        if let Some(parent) = self.el.parent_node() {
            // Already detached by someone else is fine
            let _ = parent.remove_child(&self.el);
        }
    }
}

fn resolve_target(target: JsValue) -> Result<HtmlElement, JsValue> {
    if target.is_undefined() {
        return find_or_create_container("body");
    }

    if let Some(selector) = target.as_string() {
        return find_or_create_container(&selector);
    }

    if target.is_instance_of::<HtmlElement>() {
        return Ok(target.unchecked_into());
    }

    let kind = if target.is_null() {
        "null".to_string()
    } else {
        target.js_typeof().as_string().unwrap_or_default()
    };

    Err(js_sys::TypeError::new(&format!(
        "Unknown portal target type: {}. Allowed types: string (CSS selector) or HTMLElement.",
        kind
    ))
    .into())
}
