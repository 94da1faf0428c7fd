use crate::constants::{HEADER_FADE_DELAY_MS, HEADER_ID, HEADER_SHOW_DELAY_MS};
use crate::core::layout::header_direction;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn apply_direction(el: &web::HtmlElement, viewport_width: f64) {
    _ = el
        .style()
        .set_property("flex-direction", header_direction(viewport_width).as_css());
}

#[inline]
pub fn show(el: &web::HtmlElement) {
    _ = el.style().set_property("display", "flex");
}

#[inline]
pub fn fade_in(el: &web::HtmlElement) {
    _ = el.style().set_property("opacity", "1");
}

fn current_width() -> f64 {
    dom::window_inner_size().map(|(w, _)| w).unwrap_or(0.0)
}

/// Reveal the header after the intro and keep its direction responsive.
pub fn bind(document: &web::Document) -> anyhow::Result<()> {
    let header: web::HtmlElement = dom::require_by_id(document, HEADER_ID)?
        .dyn_into()
        .map_err(|_| dom::DomError::WrongType(format!("#{}", HEADER_ID), "HTMLElement"))?;

    let reveal = header.clone();
    dom::set_timeout(HEADER_SHOW_DELAY_MS, move || {
        show(&reveal);
        dom::set_timeout(HEADER_FADE_DELAY_MS, move || {
            fade_in(&reveal);
            apply_direction(&reveal, current_width());
            log::info!("[header] revealed");
        });
    });

    dom::add_window_listener("resize", move |_| {
        apply_direction(&header, current_width());
    });
    Ok(())
}
