//! DOM helpers

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use crate::geom::Rect;

/// Create `<tag class="...">`
pub fn el(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

/// Create `<tag class="...">text</tag>`
pub fn text_el(document: &Document, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let element = el(document, tag, class)?;
    element.set_text_content(Some(text));
    Ok(element)
}

/// Bounding box in client coordinates
pub fn measure(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// Pin an absolutely positioned element at `pos` (px, parent-local)
pub fn set_position(element: &HtmlElement, pos: Vec2) {
    let style = element.style();
    let _ = style.set_property("position", "absolute");
    let _ = style.set_property("left", &format!("{}px", pos.x));
    let _ = style.set_property("top", &format!("{}px", pos.y));
    let _ = style.remove_property("transform");
}

/// High resolution timestamp (ms)
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
