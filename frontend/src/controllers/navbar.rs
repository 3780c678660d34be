pub const SCROLLED_AFTER_PX: f64 = 50.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER_PX
}

/// Non-empty fragment of `href`, `None` for a bare `#` or no fragment at all.
pub fn fragment(href: &str) -> Option<&str> {
    let (_, id) = href.split_once('#')?;
    (!id.is_empty()).then_some(id)
}

/// Id a clicked link should scroll to without leaving the page: a `#id`
/// link, or a link to `current_path` itself with a fragment.
pub fn same_page_target<'a>(href: &'a str, current_path: &str) -> Option<&'a str> {
    let (path, _) = href.split_once('#')?;
    if path.is_empty() || path == current_path {
        fragment(href)
    } else {
        None
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Page behind the open menu must not scroll.
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_strictly_after_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn hash_links_scroll_in_place() {
        assert_eq!(same_page_target("#brand-films", "/"), Some("brand-films"));
        assert_eq!(same_page_target("#faq", "/contact.html"), Some("faq"));
    }

    #[test]
    fn bare_hash_has_no_target() {
        assert_eq!(same_page_target("#", "/"), None);
        assert_eq!(fragment("#"), None);
        assert_eq!(fragment(""), None);
    }

    #[test]
    fn fragment_on_another_page_is_left_to_navigation() {
        assert_eq!(same_page_target("/service.html#youtube-growth", "/"), None);
        assert_eq!(same_page_target("/service.html", "/service.html"), None);
        assert_eq!(
            same_page_target("/service.html#youtube-growth", "/service.html"),
            Some("youtube-growth")
        );
        assert_eq!(fragment("/service.html#brand-films"), Some("brand-films"));
    }

    #[test]
    fn open_menu_locks_body() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert_eq!(menu.body_overflow(), "hidden");
        menu.close();
        assert!(!menu.is_open());
        assert_eq!(menu.body_overflow(), "");
    }
}
