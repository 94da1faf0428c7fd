use crate::constants::{ACTIVE_CLASS, SIDEBAR, SIDEBAR_BTN};
use crate::dom;
use web_sys as web;

/// Toggle the sidebar's active marker on each button click.
pub fn bind(document: &web::Document) -> anyhow::Result<()> {
    let sidebar = dom::require(document, SIDEBAR)?;
    let button = dom::require(document, SIDEBAR_BTN)?;
    dom::add_click_listener(&button, move |_| {
        dom::toggle_class(&sidebar, ACTIVE_CLASS);
    });
    Ok(())
}
