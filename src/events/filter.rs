use crate::constants::{
    ACTIVE_CLASS, CATEGORY_ATTR, FILTER_BTNS, FILTER_ITEMS, SELECT, SELECT_ITEMS, SELECT_VALUE,
};
use crate::core::filter::{category_key, filter_mask, ExclusiveSelection};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Set or clear the active marker on every filterable item; returns how many
/// items remain visible.
pub fn apply_filter(items: &[web::Element], selected: &str) -> usize {
    let categories: Vec<String> = items
        .iter()
        .map(|el| el.get_attribute(CATEGORY_ATTR).unwrap_or_default())
        .collect();
    let mask = filter_mask(selected, &categories);
    for (el, &on) in items.iter().zip(mask.iter()) {
        dom::set_class(el, ACTIVE_CLASS, on);
    }
    let shown = mask.iter().filter(|&&on| on).count();
    log::debug!("[filter] '{}' shows {}/{}", selected, shown, items.len());
    shown
}

/// Dropdown variant used on small screens.
pub fn bind_dropdown(document: &web::Document) -> anyhow::Result<()> {
    let select = dom::require(document, SELECT)?;
    let options = dom::require_all(document, SELECT_ITEMS)?;
    let value = dom::require(document, SELECT_VALUE)?;
    let items = Rc::new(dom::require_all(document, FILTER_ITEMS)?);

    let select_toggle = select.clone();
    dom::add_click_listener(&select, move |_| {
        dom::toggle_class(&select_toggle, ACTIVE_CLASS);
    });

    for option in options {
        let select = select.clone();
        let value = value.clone();
        let items = items.clone();
        let this = option.clone();
        dom::add_click_listener(&option, move |_| {
            let label = dom::text_of(&this);
            dom::set_text(&value, &label);
            dom::toggle_class(&select, ACTIVE_CLASS);
            apply_filter(&items, &category_key(&label));
        });
    }
    Ok(())
}

/// Always-visible button row; the active marker follows the last click.
pub fn bind_buttons(document: &web::Document) -> anyhow::Result<()> {
    let buttons = Rc::new(dom::require_all(document, FILTER_BTNS)?);
    let value = dom::require(document, SELECT_VALUE)?;
    let items = Rc::new(dom::require_all(document, FILTER_ITEMS)?);
    let selection = Rc::new(RefCell::new(ExclusiveSelection::new(Some(0))));

    for (i, button) in buttons.iter().enumerate() {
        let buttons = buttons.clone();
        let value = value.clone();
        let items = items.clone();
        let selection = selection.clone();
        dom::add_click_listener(button, move |_| {
            let label = dom::text_of(&buttons[i]);
            dom::set_text(&value, &label);
            apply_filter(&items, &category_key(&label));

            let previous = selection.borrow_mut().select(i);
            if let Some(prev) = previous.and_then(|p| buttons.get(p)) {
                dom::set_class(prev, ACTIVE_CLASS, false);
            }
            dom::set_class(&buttons[i], ACTIVE_CLASS, true);
        });
    }
    Ok(())
}
