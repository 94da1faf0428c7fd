pub mod filter;
pub mod form;
pub mod header;
pub mod nav;
pub mod sidebar;

use web_sys as web;

type BindFn = fn(&web::Document) -> anyhow::Result<()>;

/// Bind every handler unit. A unit whose markup is missing is logged and
/// skipped; the others still get wired.
pub fn wire_all(document: &web::Document) -> usize {
    let units: [(&str, BindFn); 6] = [
        ("sidebar", sidebar::bind),
        ("dropdown filter", filter::bind_dropdown),
        ("button filter", filter::bind_buttons),
        ("contact form", form::bind),
        ("navigation", nav::bind),
        ("header", header::bind),
    ];
    let mut bound = 0;
    for (name, bind) in units {
        match bind(document) {
            Ok(()) => bound += 1,
            Err(e) => log::error!("[events] {} not bound: {:#}", name, e),
        }
    }
    bound
}
