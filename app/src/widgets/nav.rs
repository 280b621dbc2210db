/// A header link, `(label, path)`.
pub type NavItem = (&'static str, &'static str);

pub const DESKTOP_NAV: &[NavItem] = &[
    ("Home", "/"),
    ("About", "/about"),
    ("Services", "/services"),
    ("Careers", "/careers"),
    ("Insights", "/insights"),
];

pub const MOBILE_NAV: &[NavItem] = &[
    ("Home", "/"),
    ("About", "/about"),
    ("Services", "/services"),
    ("Careers", "/careers"),
    ("Insights", "/insights"),
    ("Contact", "/contact"),
];

/// Vertical scroll, in pixels, past which the header switches to its compact style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
    scrolled: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link of the mobile menu folds it back.
    pub fn close_on_navigate(&mut self) {
        self.open = false;
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > SCROLL_THRESHOLD_PX;
    }
}
