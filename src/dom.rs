use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Problems found while binding handlers to the page markup.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window/document available")]
    NoDocument,
    #[error("missing element `{0}`")]
    Missing(String),
    #[error("no elements match `{0}`")]
    Empty(String),
    #[error("`{0}` is not a {1}")]
    WrongType(String, &'static str),
    #[error("query `{0}` failed: {1}")]
    Query(String, String),
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn require_document() -> Result<web::Document, DomError> {
    window_document().ok_or(DomError::NoDocument)
}

/// First element matching `selector`, or an error naming it.
pub fn require(document: &web::Document, selector: &str) -> Result<web::Element, DomError> {
    document
        .query_selector(selector)
        .map_err(|e| DomError::Query(selector.to_string(), format!("{:?}", e)))?
        .ok_or_else(|| DomError::Missing(selector.to_string()))
}

/// Like [`require`], cast to a concrete element type.
pub fn require_as<T: JsCast>(
    document: &web::Document,
    selector: &str,
    type_name: &'static str,
) -> Result<T, DomError> {
    require(document, selector)?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongType(selector.to_string(), type_name))
}

/// Every element matching `selector`, in document order. Errors when empty.
pub fn require_all(document: &web::Document, selector: &str) -> Result<Vec<web::Element>, DomError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| DomError::Query(selector.to_string(), format!("{:?}", e)))?;
    let out: Vec<web::Element> = (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect();
    if out.is_empty() {
        return Err(DomError::Empty(selector.to_string()));
    }
    Ok(out)
}

pub fn require_by_id(document: &web::Document, id: &str) -> Result<web::Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::Missing(format!("#{}", id)))
}

#[inline]
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(element: &web::Element, handler: impl FnMut(web::Event) + 'static) {
    add_listener(element.as_ref(), "click", handler);
}

#[inline]
pub fn add_window_listener(event: &str, handler: impl FnMut(web::Event) + 'static) {
    if let Some(window) = web::window() {
        add_listener(window.as_ref(), event, handler);
    }
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str) {
    _ = el.class_list().toggle(class);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Rendered text of an element (`innerText` for HTML elements).
pub fn text_of(el: &web::Element) -> String {
    match el.dyn_ref::<web::HtmlElement>() {
        Some(h) => h.inner_text(),
        None => el.text_content().unwrap_or_default(),
    }
}

pub fn set_text(el: &web::Element, text: &str) {
    match el.dyn_ref::<web::HtmlElement>() {
        Some(h) => h.set_inner_text(text),
        None => el.set_text_content(Some(text)),
    }
}

/// Window inner size in CSS pixels.
pub fn window_inner_size() -> Option<(f64, f64)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Size the canvas to the window and match its backing store to CSS size *
/// devicePixelRatio.
pub fn fit_canvas_to_window(canvas: &web::HtmlCanvasElement) {
    if let (Some(w), Some((css_w, css_h))) = (web::window(), window_inner_size()) {
        let dpr = w.device_pixel_ratio();
        let style = canvas.style();
        _ = style.set_property("width", &format!("{}px", css_w));
        _ = style.set_property("height", &format!("{}px", css_h));
        canvas.set_width(((css_w * dpr) as u32).max(1));
        canvas.set_height(((css_h * dpr) as u32).max(1));
    }
}
