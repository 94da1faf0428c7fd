/// Viewport width (CSS px) below which the header stacks vertically.
pub const STACK_BELOW_PX: f64 = 1250.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    Column,
}

impl FlexDirection {
    pub fn as_css(self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::Column => "column",
        }
    }
}

#[inline]
pub fn header_direction(viewport_width: f64) -> FlexDirection {
    if viewport_width < STACK_BELOW_PX {
        FlexDirection::Column
    } else {
        FlexDirection::Row
    }
}
