use crate::constants::{ACTIVE_CLASS, NAV_LINKS, PAGES, PAGE_ATTR};
use crate::core::nav::{one_hot, resolve, NavSelection};
use crate::dom;
use std::rc::Rc;
use web_sys as web;

/// Activate the page named by link `clicked` and its link; everything else
/// in both groups loses the marker. Unknown labels leave the page untouched.
pub fn navigate(links: &[web::Element], pages: &[web::Element], clicked: usize) -> Option<NavSelection> {
    let labels: Vec<String> = links.iter().map(dom::text_of).collect();
    let names: Vec<String> = pages
        .iter()
        .map(|p| p.get_attribute(PAGE_ATTR).unwrap_or_default())
        .collect();
    let Some(sel) = resolve(clicked, labels.as_slice(), names.as_slice()) else {
        log::warn!(
            "[nav] no page for link '{}'",
            labels.get(clicked).map(String::as_str).unwrap_or("")
        );
        return None;
    };
    for (page, on) in pages.iter().zip(one_hot(sel.page, pages.len())) {
        dom::set_class(page, ACTIVE_CLASS, on);
    }
    for (link, on) in links.iter().zip(one_hot(sel.link, links.len())) {
        dom::set_class(link, ACTIVE_CLASS, on);
    }
    if let Some(w) = web::window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
    Some(sel)
}

pub fn bind(document: &web::Document) -> anyhow::Result<()> {
    let links = Rc::new(dom::require_all(document, NAV_LINKS)?);
    let pages = Rc::new(dom::require_all(document, PAGES)?);
    for (i, link) in links.iter().enumerate() {
        let links = links.clone();
        let pages = pages.clone();
        dom::add_click_listener(link, move |_| {
            navigate(&links, &pages, i);
        });
    }
    Ok(())
}
