//! Keyboard shortcut routing against a live window manager.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use termfolio::apps::AppKind;
use termfolio::keybindings::{Action, KeyBindings};
use termfolio::store::WindowId;
use termfolio::window::WindowManager;

fn manager_with_stack() -> WindowManager {
    let mut manager = WindowManager::new();
    for kind in [AppKind::Finder, AppKind::Safari, AppKind::Terminal] {
        manager.store_mut().add_window(kind.window_config());
    }
    manager
}

fn dispatch(manager: &mut WindowManager, bindings: &KeyBindings, key: KeyEvent) {
    match bindings.action_for_key(&key) {
        Some(Action::CloseWindow) => manager.close_focused(),
        Some(Action::MinimizeWindow) => manager.minimize_focused(),
        Some(Action::CycleNextWindow) => manager.cycle_focus(true),
        Some(Action::CyclePrevWindow) => manager.cycle_focus(false),
        _ => {}
    }
}

#[test]
fn escape_closes_the_focused_window() {
    let mut manager = manager_with_stack();
    let bindings = KeyBindings::default();
    dispatch(
        &mut manager,
        &bindings,
        KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
    );
    assert_eq!(manager.store().len(), 2);
    assert!(!manager.store().contains(&WindowId::from("terminal")));
    assert_eq!(
        manager.store().focused_id().map(WindowId::as_str),
        Some("safari")
    );
}

#[test]
fn ctrl_w_closes_and_ctrl_m_minimizes() {
    let mut manager = manager_with_stack();
    let bindings = KeyBindings::default();
    dispatch(
        &mut manager,
        &bindings,
        KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL),
    );
    assert_eq!(manager.store().len(), 2);
    dispatch(
        &mut manager,
        &bindings,
        KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL),
    );
    let safari = manager.store().get_window(&WindowId::from("safari")).unwrap();
    assert!(safari.is_minimized);
    assert_eq!(
        manager.store().focused_id().map(WindowId::as_str),
        Some("finder")
    );
}

#[test]
fn ctrl_tab_cycles_skipping_minimized() {
    let mut manager = manager_with_stack();
    let bindings = KeyBindings::default();
    manager
        .store_mut()
        .minimize_window(&WindowId::from("safari"));
    // Focused: terminal. Cycling forward wraps past the minimized safari.
    dispatch(
        &mut manager,
        &bindings,
        KeyEvent::new(KeyCode::Tab, KeyModifiers::CONTROL),
    );
    assert_eq!(
        manager.store().focused_id().map(WindowId::as_str),
        Some("finder")
    );
    dispatch(
        &mut manager,
        &bindings,
        KeyEvent::new(KeyCode::Tab, KeyModifiers::CONTROL),
    );
    assert_eq!(
        manager.store().focused_id().map(WindowId::as_str),
        Some("terminal")
    );
}

#[test]
fn cycle_back_reverses_stacking_order() {
    let mut manager = manager_with_stack();
    let bindings = KeyBindings::default();
    dispatch(
        &mut manager,
        &bindings,
        KeyEvent::new(KeyCode::BackTab, KeyModifiers::CONTROL),
    );
    assert_eq!(
        manager.store().focused_id().map(WindowId::as_str),
        Some("safari")
    );
}

#[test]
fn shortcuts_on_an_empty_desktop_are_noops() {
    let mut manager = WindowManager::new();
    let bindings = KeyBindings::default();
    dispatch(
        &mut manager,
        &bindings,
        KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
    );
    dispatch(
        &mut manager,
        &bindings,
        KeyEvent::new(KeyCode::Tab, KeyModifiers::CONTROL),
    );
    assert!(manager.store().is_empty());
    assert_eq!(manager.store().focused_id(), None);
}
