// Host-side tests for the page handlers' decision logic.

#![allow(dead_code)]
mod filter {
    include!("../src/core/filter.rs");
}
mod nav {
    include!("../src/core/nav.rs");
}
mod layout {
    include!("../src/core/layout.rs");
}
mod form {
    include!("../src/core/form.rs");
}

use filter::*;
use form::*;
use layout::*;
use nav::*;

#[test]
fn all_shows_every_item() {
    let mask = filter_mask("All", ["web design", "applications", "web development"]);
    assert_eq!(mask, vec![true, true, true]);
}

#[test]
fn category_filter_is_case_and_whitespace_insensitive() {
    let items = ["web design", "applications", "Web Design", "web development"];
    assert_eq!(
        filter_mask("  Web design ", items),
        vec![true, false, true, false]
    );
    assert_eq!(filter_mask("graphics", items), vec![false; 4]);
}

#[test]
fn filtering_twice_yields_the_same_mask() {
    let items = ["web design", "applications", "web development"];
    let once = filter_mask("applications", items);
    let twice = filter_mask("applications", items);
    assert_eq!(once, twice);
    assert_eq!(once, vec![false, true, false]);
}

#[test]
fn filter_over_no_items_is_empty() {
    assert!(filter_mask("all", Vec::<String>::new()).is_empty());
}

#[test]
fn exclusive_selection_hands_over_the_marker() {
    let mut sel = ExclusiveSelection::new(Some(0));
    assert_eq!(sel.select(2), Some(0));
    assert_eq!(sel.active(), Some(2));
    // Re-clicking the active button leaves nothing to clear
    assert_eq!(sel.select(2), None);
    assert_eq!(sel.active(), Some(2));

    let mut fresh = ExclusiveSelection::default();
    assert_eq!(fresh.select(1), None);
    assert_eq!(fresh.active(), Some(1));
}

#[test]
fn nav_activates_matching_page_and_clicked_link() {
    let links = ["About", "Resume", "Portfolio", "Blog", "Contact"];
    let pages = ["about", "resume", "portfolio", "blog", "contact"];
    assert_eq!(
        resolve(2, &links, &pages),
        Some(NavSelection { page: 2, link: 2 })
    );
}

#[test]
fn nav_page_order_may_differ_from_link_order() {
    let links = ["About", "Contact"];
    let pages = ["contact", "about"];
    assert_eq!(
        resolve(1, &links, &pages),
        Some(NavSelection { page: 0, link: 1 })
    );
}

#[test]
fn nav_without_matching_page_resolves_to_nothing() {
    let links = ["About", "Shop"];
    let pages = ["about"];
    assert_eq!(resolve(1, &links, &pages), None);
    assert_eq!(resolve(5, &links, &pages), None);
}

#[test]
fn nav_first_matching_page_wins() {
    let links = ["Blog"];
    let pages = ["about", "blog", "BLOG"];
    assert_eq!(resolve(0, &links, &pages).map(|s| s.page), Some(1));
}

#[test]
fn one_hot_marks_a_single_member() {
    assert_eq!(one_hot(1, 3), vec![false, true, false]);
    assert_eq!(one_hot(4, 3), vec![false; 3]);
    assert!(one_hot(0, 0).is_empty());
}

#[test]
fn header_stacks_below_breakpoint() {
    assert_eq!(header_direction(375.0), FlexDirection::Column);
    assert_eq!(header_direction(1249.9), FlexDirection::Column);
    assert_eq!(header_direction(1250.0), FlexDirection::Row);
    assert_eq!(header_direction(1920.0), FlexDirection::Row);
    assert_eq!(FlexDirection::Column.as_css(), "column");
    assert_eq!(FlexDirection::Row.as_css(), "row");
}

#[test]
fn submit_enabled_only_when_every_field_is_valid() {
    assert_eq!(SubmitState::from_validity([true, true, true]), SubmitState::Enabled);
    assert_eq!(SubmitState::from_validity([true, false, true]), SubmitState::Disabled);
    assert!(SubmitState::from_validity(std::iter::empty()).is_enabled());
    assert_eq!(SubmitState::from_form_validity(false), SubmitState::Disabled);
    assert!(SubmitState::from_form_validity(true).is_enabled());
}
