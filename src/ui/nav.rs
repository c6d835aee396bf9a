//! Mobile navigation panel state.

use crate::ui::PageSurface;

const MOBILE_NAV: &str = "mobileNav";
const ACTIVE_CLASS: &str = "active";

/// Events the navigation panel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent<'a> {
    /// Menu (hamburger) button activated.
    OpenClicked,
    /// Close button activated.
    CloseClicked,
    /// A key was pressed anywhere on the page.
    KeyPressed(&'a str),
    /// A navigation link was activated; payload is the link target.
    LinkClicked(&'a str),
    /// A click landed on the open panel. `on_background` is true when it hit
    /// the panel backdrop rather than its content.
    PanelClicked { on_background: bool },
}

/// Open/closed toggle for the mobile navigation panel.
///
/// Opening locks page scrolling, closing restores it. The active link is
/// tracked once and shared by both navigation variants: the host paints the
/// `active` class on whichever mobile and desktop links match
/// [`active_link`](NavMenu::active_link).
#[derive(Debug)]
pub struct NavMenu {
    links: Vec<String>,
    open: bool,
    active: Option<usize>,
}

impl NavMenu {
    /// `links` are the navigation link targets, in display order.
    pub fn new(links: Vec<String>) -> Self {
        Self {
            links,
            open: false,
            active: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Target of the link currently marked active.
    pub fn active_link(&self) -> Option<&str> {
        self.active.map(|idx| self.links[idx].as_str())
    }

    /// Dispatch one event through the toggle.
    pub fn handle(&mut self, event: NavEvent<'_>, page: &mut impl PageSurface) {
        match event {
            NavEvent::OpenClicked => self.set_open(true, page),
            NavEvent::CloseClicked => self.set_open(false, page),
            NavEvent::KeyPressed(key) => {
                if key == "Escape" && self.open {
                    self.set_open(false, page);
                }
            }
            NavEvent::LinkClicked(target) => {
                self.set_open(false, page);
                if let Some(idx) = self.links.iter().position(|link| link == target) {
                    self.active = Some(idx);
                }
            }
            NavEvent::PanelClicked { on_background } => {
                if on_background && self.open {
                    self.set_open(false, page);
                }
            }
        }
    }

    fn set_open(&mut self, open: bool, page: &mut impl PageSurface) {
        self.open = open;
        page.set_class(MOBILE_NAV, if open { ACTIVE_CLASS } else { "" });
        page.set_scroll_locked(open);
    }
}
