// Page wiring constants: element ids, data-attribute selectors, timings and
// remote icon sources. Scene geometry lives in `core::constants`.

// Canvas and header
pub const CANVAS_ID: &str = "reveal-effect";
pub const HEADER_ID: &str = "main-box";

// Header reveal timers (milliseconds after start)
pub const HEADER_SHOW_DELAY_MS: i32 = 1500;
pub const HEADER_FADE_DELAY_MS: i32 = 50;

// Sidebar
pub const SIDEBAR: &str = "[data-sidebar]";
pub const SIDEBAR_BTN: &str = "[data-sidebar-btn]";

// Project filter (the value selector keeps the page's spelling)
pub const SELECT: &str = "[data-select]";
pub const SELECT_ITEMS: &str = "[data-select-item]";
pub const SELECT_VALUE: &str = "[data-selecct-value]";
pub const FILTER_BTNS: &str = "[data-filter-btn]";
pub const FILTER_ITEMS: &str = "[data-filter-item]";
pub const CATEGORY_ATTR: &str = "data-category";

// Contact form
pub const FORM: &str = "[data-form]";
pub const FORM_INPUTS: &str = "[data-form-input]";
pub const FORM_BTN: &str = "[data-form-btn]";

// Navigation
pub const NAV_LINKS: &str = "[data-nav-link]";
pub const PAGES: &str = "[data-page]";
pub const PAGE_ATTR: &str = "data-page";

pub const ACTIVE_CLASS: &str = "active";

// Icon textures are rasterized to this square size before upload
pub const ICON_TEXTURE_PX: u32 = 256;

pub const ICON_URLS: [&str; 5] = [
    "https://upload.wikimedia.org/wikipedia/commons/a/a7/React-icon.svg",
    "https://upload.wikimedia.org/wikipedia/commons/d/d9/Node.js_logo.svg",
    "https://upload.wikimedia.org/wikipedia/commons/6/62/Ruby_On_Rails_Logo.svg",
    "https://upload.wikimedia.org/wikipedia/commons/7/73/Ruby_logo.svg",
    "https://upload.wikimedia.org/wikipedia/commons/6/6a/JavaScript-logo.png",
];

// Longest frame step fed to the timeline; longer gaps (hidden tab) are clamped
pub const MAX_FRAME_DT_SEC: f32 = 0.25;
