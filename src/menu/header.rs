//! Menu page header and full-screen decisions

use serde::{Deserialize, Serialize};

/// Buttons shown in a menu page header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuHeader {
    pub show_back: bool,
    pub show_close: bool,
}

/// A menu goes full screen once it is bounded on both axes, or when the
/// container is no wider than the content.
pub fn is_full_screen(
    is_height_bounded: bool,
    is_width_bounded: bool,
    bounding_width: f64,
    content_width: f64,
) -> bool {
    (is_height_bounded && is_width_bounded) || bounding_width <= content_width
}

/// Header for the menu page at `page_index` in the menu stack
///
/// Root pages only get a header in full screen.
pub fn menu_header(page_index: usize, has_close_handler: bool, is_full_screen: bool) -> Option<MenuHeader> {
    let is_sub_menu = page_index > 0;
    if !is_sub_menu && !is_full_screen {
        return None;
    }
    Some(MenuHeader {
        show_back: is_sub_menu,
        show_close: is_full_screen && has_close_handler,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_screen_rules() {
        assert!(is_full_screen(true, true, 1000.0, 240.0));
        assert!(!is_full_screen(true, false, 1000.0, 240.0));
        assert!(is_full_screen(false, false, 240.0, 240.0));
    }

    #[test]
    fn test_root_page_without_full_screen_has_no_header() {
        assert_eq!(menu_header(0, true, false), None);
    }

    #[test]
    fn test_sub_menu_header() {
        assert_eq!(
            menu_header(2, true, false),
            Some(MenuHeader { show_back: true, show_close: false })
        );
        assert_eq!(
            menu_header(0, true, true),
            Some(MenuHeader { show_back: false, show_close: true })
        );
        assert_eq!(
            menu_header(1, false, true),
            Some(MenuHeader { show_back: true, show_close: false })
        );
    }
}
