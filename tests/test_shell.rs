//! Integration tests for the shell component tree.
//!
//! Tests cover:
//! - Mounting the shell with a disabled toggle button
//! - Routing press messages through the shell to the toggle button
//! - Press parity over repeated interactions
//! - Independence of separately mounted shells

mod common;

use common::*;
use flipswitch::toggle::{DISABLED, ENABLED};

#[test]
fn test_mounted_shell_shows_disabled() {
    let shell = mount_shell();

    assert_eq!(shell.toggle().label(), DISABLED);
    assert!(!shell.toggle().is_enabled());
}

#[test]
fn test_single_press_shows_enabled() {
    let mut shell = mount_shell();

    press_toggle(&mut shell, 1);

    assert_eq!(shell.toggle().label(), ENABLED);
    assert!(shell.toggle().is_enabled());
}

#[test]
fn test_two_presses_return_to_disabled() {
    let mut shell = mount_shell();

    press_toggle(&mut shell, 2);

    assert_eq!(shell.toggle().label(), DISABLED);
}

#[test]
fn test_five_presses_show_enabled() {
    let mut shell = mount_shell();

    press_toggle(&mut shell, 5);

    assert_eq!(shell.toggle().label(), ENABLED);
}

#[test]
fn test_shells_toggle_independently() {
    let mut first = mount_shell();
    let second = mount_shell();

    press_toggle(&mut first, 1);

    assert_eq!(first.toggle().label(), ENABLED);
    assert_eq!(second.toggle().label(), DISABLED);
}

#[test]
fn test_press_routes_through_toggle_button_directly() {
    let mut button = ToggleButton::default();

    let _ = button.update(ToggleMessage::Pressed);

    assert_eq!(button.label(), ENABLED);
}
