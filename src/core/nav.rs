/// Page section and nav link that become active after a nav click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSelection {
    pub page: usize,
    pub link: usize,
}

#[inline]
pub fn label_matches(label: &str, page_name: &str) -> bool {
    label.trim().to_lowercase() == page_name.trim().to_lowercase()
}

/// Resolve a click on link `clicked`.
///
/// The first page whose name matches the clicked label wins. `None` when the
/// index is out of range or no page matches; callers leave the DOM as is.
pub fn resolve<L, P>(clicked: usize, link_labels: &[L], page_names: &[P]) -> Option<NavSelection>
where
    L: AsRef<str>,
    P: AsRef<str>,
{
    let label = link_labels.get(clicked)?.as_ref();
    let page = page_names
        .iter()
        .position(|name| label_matches(label, name.as_ref()))?;
    Some(NavSelection {
        page,
        link: clicked,
    })
}

/// Active flag per member of a group of `len` where only `active` is set.
pub fn one_hot(active: usize, len: usize) -> Vec<bool> {
    (0..len).map(|i| i == active).collect()
}
