use flipswitch::gui::components::{
    Component,
    shell::{Shell, ShellMessage},
    toggle_button::ToggleMessage,
};

/// Mounts a fresh shell, exactly as the application does when the window
/// opens.
pub fn mount_shell() -> Shell {
    Shell::new()
}

/// Routes `count` press events through the shell's update path, one message
/// per press. The returned tasks are dropped; every update here is
/// synchronous and schedules no follow-up work.
pub fn press_toggle(shell: &mut Shell, count: usize) {
    for _ in 0..count {
        let _ = shell.update(ShellMessage::Toggle(ToggleMessage::Pressed));
    }
}
