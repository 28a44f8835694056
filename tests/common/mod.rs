mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from flipswitch for tests
pub use flipswitch::gui::components::{
    Component,
    shell::{Shell, ShellMessage},
    toggle_button::{ToggleButton, ToggleMessage},
};
