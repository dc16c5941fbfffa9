//! Menu state handling
//!
//! Focus tracking and keyboard navigation for menu pages, modelled as a
//! pure reducer over an explicit list of item records.

pub mod navigation;
pub mod header;

pub use navigation::{
    focusable_items, is_selectable, reduce, MenuAction, MenuEntry, MenuEvent, MenuItem, MenuKey,
    MenuState,
};
pub use header::{is_full_screen, menu_header, MenuHeader};
