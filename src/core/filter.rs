/// Category key that selects every item.
pub const ALL_CATEGORIES: &str = "all";

/// Lower-cased, trimmed form of a filter label or category attribute.
#[inline]
pub fn category_key(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Whether an item tagged `item_category` is shown for `selected`.
pub fn matches_category(selected: &str, item_category: &str) -> bool {
    let selected = category_key(selected);
    selected == ALL_CATEGORIES || selected == category_key(item_category)
}

/// Active flag per item, in item order.
pub fn filter_mask<I, S>(selected: &str, item_categories: I) -> Vec<bool>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    item_categories
        .into_iter()
        .map(|c| matches_category(selected, c.as_ref()))
        .collect()
}

/// At most one member of a group carries the active marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExclusiveSelection {
    active: Option<usize>,
}

impl ExclusiveSelection {
    pub fn new(active: Option<usize>) -> Self {
        Self { active }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Mark `index` active; returns the member that must lose the marker.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        self.active.replace(index).filter(|&prev| prev != index)
    }
}
