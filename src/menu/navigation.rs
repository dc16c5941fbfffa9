//! Menu keyboard and click navigation
//!
//! Menu content is an ordered list of entries. Enabled items receive focus
//! indices in document order (group children included); the reducer maps an
//! event on one of those indices to a new focus state and an action for the
//! host.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    pub text: Option<String>,
    pub is_disabled: bool,
    pub is_selectable: bool,
    /// Number of items in this item's submenu
    pub sub_menu_count: usize,
}

impl MenuItem {
    pub fn new(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn has_submenu(&self) -> bool {
        self.sub_menu_count > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuEntry {
    Item(MenuItem),
    Group { items: Vec<MenuItem> },
    Divider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuKey {
    Enter,
    Space,
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,
    Other,
}

impl MenuKey {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Enter" => MenuKey::Enter,
            " " | "Spacebar" => MenuKey::Space,
            "ArrowLeft" | "Left" => MenuKey::LeftArrow,
            "ArrowRight" | "Right" => MenuKey::RightArrow,
            "ArrowUp" | "Up" => MenuKey::UpArrow,
            "ArrowDown" | "Down" => MenuKey::DownArrow,
            _ => MenuKey::Other,
        }
    }

    fn activates(self) -> bool {
        matches!(self, MenuKey::Enter | MenuKey::Space)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuEvent {
    /// Key pressed on the item holding focus index `index`
    KeyDown { index: usize, key: MenuKey },
    Click { index: usize },
    /// Key pressed on the header back button
    BackKey { key: MenuKey },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "index", rename_all = "snake_case")]
pub enum MenuAction {
    None,
    /// Open the submenu of the item at this focus index
    RequestNext(usize),
    RequestBack,
    /// Item without a submenu was clicked
    Select(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuState {
    pub focus_index: Option<usize>,
}

impl MenuState {
    pub fn is_active(&self, index: usize) -> bool {
        self.focus_index == Some(index)
    }
}

/// Enabled items in focus-index order
pub fn focusable_items(entries: &[MenuEntry]) -> Vec<&MenuItem> {
    let mut items = Vec::new();
    for entry in entries {
        match entry {
            MenuEntry::Item(item) => {
                if item.text.as_deref().is_some_and(|text| !text.is_empty()) && !item.is_disabled {
                    items.push(item);
                }
            }
            MenuEntry::Group { items: children } => {
                items.extend(children.iter().filter(|child| !child.is_disabled));
            }
            MenuEntry::Divider => {}
        }
    }
    items
}

/// True when any entry opens a submenu, can be selected, or is a group
///
/// Groups are single-select toggles, so their presence alone makes the menu selectable.
pub fn is_selectable(entries: &[MenuEntry]) -> bool {
    entries.iter().any(|entry| match entry {
        MenuEntry::Item(item) => item.has_submenu() || item.is_selectable,
        MenuEntry::Group { .. } => true,
        MenuEntry::Divider => false,
    })
}

/// Apply one event to the menu state
pub fn reduce(state: MenuState, event: MenuEvent, entries: &[MenuEntry]) -> (MenuState, MenuAction) {
    let (index, key) = match event {
        MenuEvent::BackKey { key } => {
            let action = if key.activates() { MenuAction::RequestBack } else { MenuAction::None };
            return (state, action);
        }
        MenuEvent::Click { index } => (index, None),
        MenuEvent::KeyDown { index, key } => (index, Some(key)),
    };

    let items = focusable_items(entries);
    let Some(item) = items.get(index).copied() else {
        log::warn!("menu event for unknown focus index {}", index);
        return (state, MenuAction::None);
    };

    let Some(key) = key else {
        // Click
        return if item.has_submenu() {
            (MenuState { focus_index: None }, MenuAction::RequestNext(index))
        } else {
            (state, MenuAction::Select(index))
        };
    };

    match key {
        MenuKey::Enter | MenuKey::Space | MenuKey::RightArrow if item.has_submenu() => {
            (state, MenuAction::RequestNext(index))
        }
        MenuKey::LeftArrow => (state, MenuAction::RequestBack),
        MenuKey::UpArrow => (
            MenuState { focus_index: Some(index.saturating_sub(1)) },
            MenuAction::None,
        ),
        MenuKey::DownArrow => (
            MenuState { focus_index: Some((index + 1).min(items.len() - 1)) },
            MenuAction::None,
        ),
        _ => (state, MenuAction::None),
    }
}
