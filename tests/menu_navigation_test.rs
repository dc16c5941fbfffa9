// Menu keyboard/click navigation through the reducer

use overlay_wasm::menu::{
    focusable_items, is_selectable, reduce, MenuAction, MenuEntry, MenuEvent, MenuItem, MenuKey, MenuState,
};

fn item(text: &str) -> MenuItem {
    MenuItem::new(text)
}

fn submenu(text: &str) -> MenuItem {
    MenuItem {
        sub_menu_count: 3,
        ..MenuItem::new(text)
    }
}

fn disabled(text: &str) -> MenuItem {
    MenuItem {
        is_disabled: true,
        ..MenuItem::new(text)
    }
}

/// Focus indices: Copy=0, Paste=1, Share=2, Export=3
fn entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::Item(item("Copy")),
        MenuEntry::Item(disabled("Cut")),
        MenuEntry::Item(item("Paste")),
        MenuEntry::Divider,
        MenuEntry::Group {
            items: vec![submenu("Share"), disabled("Print"), item("Export")],
        },
    ]
}

fn key(index: usize, key: MenuKey) -> MenuEvent {
    MenuEvent::KeyDown { index, key }
}

#[test]
fn test_arrow_keys_walk_focus() {
    let entries = entries();
    let state = MenuState::default();
    assert_eq!(state.focus_index, None);

    let (state, action) = reduce(state, key(0, MenuKey::DownArrow), &entries);
    assert_eq!(state.focus_index, Some(1));
    assert_eq!(action, MenuAction::None);

    let (state, _) = reduce(state, key(1, MenuKey::DownArrow), &entries);
    let (state, _) = reduce(state, key(2, MenuKey::DownArrow), &entries);
    assert_eq!(state.focus_index, Some(3));
    assert!(state.is_active(3));

    let (state, _) = reduce(state, key(3, MenuKey::UpArrow), &entries);
    assert_eq!(state.focus_index, Some(2));
}

#[test]
fn test_focus_saturates_at_both_ends() {
    let entries = entries();
    let (state, _) = reduce(MenuState::default(), key(0, MenuKey::UpArrow), &entries);
    assert_eq!(state.focus_index, Some(0));

    let (state, _) = reduce(state, key(3, MenuKey::DownArrow), &entries);
    assert_eq!(state.focus_index, Some(3));
}

#[test]
fn test_activation_keys_open_submenu() {
    let entries = entries();
    for k in [MenuKey::Enter, MenuKey::Space, MenuKey::RightArrow] {
        let state = MenuState { focus_index: Some(2) };
        let (next, action) = reduce(state, key(2, k), &entries);
        assert_eq!(action, MenuAction::RequestNext(2), "{:?}", k);
        assert_eq!(next, state);
    }
}

#[test]
fn test_activation_keys_ignored_without_submenu() {
    let entries = entries();
    let (_, action) = reduce(MenuState::default(), key(0, MenuKey::Enter), &entries);
    assert_eq!(action, MenuAction::None);
    let (_, action) = reduce(MenuState::default(), key(0, MenuKey::RightArrow), &entries);
    assert_eq!(action, MenuAction::None);
}

#[test]
fn test_left_arrow_requests_back() {
    let (_, action) = reduce(MenuState::default(), key(1, MenuKey::LeftArrow), &entries());
    assert_eq!(action, MenuAction::RequestBack);
}

#[test]
fn test_click_on_submenu_item_clears_focus() {
    let state = MenuState { focus_index: Some(1) };
    let (state, action) = reduce(state, MenuEvent::Click { index: 2 }, &entries());
    assert_eq!(state.focus_index, None);
    assert_eq!(action, MenuAction::RequestNext(2));
}

#[test]
fn test_click_on_plain_item_selects() {
    let state = MenuState { focus_index: Some(1) };
    let (next, action) = reduce(state, MenuEvent::Click { index: 3 }, &entries());
    assert_eq!(next, state);
    assert_eq!(action, MenuAction::Select(3));
}

#[test]
fn test_back_button_keys() {
    let entries = entries();
    let (_, action) = reduce(MenuState::default(), MenuEvent::BackKey { key: MenuKey::Enter }, &entries);
    assert_eq!(action, MenuAction::RequestBack);
    let (_, action) = reduce(MenuState::default(), MenuEvent::BackKey { key: MenuKey::DownArrow }, &entries);
    assert_eq!(action, MenuAction::None);
}

#[test]
fn test_unknown_index_is_ignored() {
    let state = MenuState { focus_index: Some(0) };
    let (next, action) = reduce(state, key(9, MenuKey::DownArrow), &entries());
    assert_eq!(next, state);
    assert_eq!(action, MenuAction::None);

    let (next, action) = reduce(state, MenuEvent::Click { index: 0 }, &[]);
    assert_eq!(next, state);
    assert_eq!(action, MenuAction::None);
}

#[test]
fn test_entries_from_host_json() {
    let json = r#"[
        {"kind":"item","text":"Copy"},
        {"kind":"divider"},
        {"kind":"group","items":[{"text":"Share","sub_menu_count":2},{"text":"Print","is_disabled":true}]}
    ]"#;
    let entries: Vec<MenuEntry> = serde_json::from_str(json).unwrap();

    let (_, action) = reduce(MenuState::default(), key(1, MenuKey::Enter), &entries);
    assert_eq!(action, MenuAction::RequestNext(1));
}

#[test]
fn test_group_only_menu_is_selectable() {
    let entries = vec![MenuEntry::Group {
        items: vec![item("Left"), item("Right")],
    }];
    assert!(is_selectable(&entries));
    assert!(!is_selectable(&[MenuEntry::Item(item("Left")), MenuEntry::Divider]));
}

#[test]
fn test_empty_label_gets_no_focus_index() {
    let entries = vec![MenuEntry::Item(item("")), MenuEntry::Item(submenu("Share"))];
    assert_eq!(focusable_items(&entries).len(), 1);

    // Index 0 is the submenu item, not the blank one
    let (_, action) = reduce(MenuState::default(), key(0, MenuKey::Enter), &entries);
    assert_eq!(action, MenuAction::RequestNext(0));
}
