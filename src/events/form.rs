use crate::constants::{FORM, FORM_BTN, FORM_INPUTS};
use crate::core::form::SubmitState;
use crate::dom;
use web_sys as web;

/// Run the browser's constraint validation over the whole form.
pub fn evaluate(form: &web::HtmlFormElement) -> SubmitState {
    SubmitState::from_form_validity(form.check_validity())
}

pub fn apply_submit_state(button: &web::Element, state: SubmitState) {
    _ = match state {
        SubmitState::Enabled => button.remove_attribute("disabled"),
        SubmitState::Disabled => button.set_attribute("disabled", ""),
    };
}

/// Re-check the form on every input event and gate the submit control.
pub fn bind(document: &web::Document) -> anyhow::Result<()> {
    let form: web::HtmlFormElement = dom::require_as(document, FORM, "form")?;
    let inputs = dom::require_all(document, FORM_INPUTS)?;
    let button = dom::require(document, FORM_BTN)?;

    for input in &inputs {
        let form = form.clone();
        let button = button.clone();
        dom::add_listener(input.as_ref(), "input", move |_| {
            let state = evaluate(&form);
            log::debug!("[form] submit {:?}", state);
            apply_submit_state(&button, state);
        });
    }
    Ok(())
}
