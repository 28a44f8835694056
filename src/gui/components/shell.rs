use iced::{Element, Task, widget::image::Handle};

use crate::gui::components::{
    Component,
    toggle_button::{ToggleButton, ToggleMessage},
};
use crate::gui::widgets;

/// Heading shown under the logo in the shell banner.
pub const WELCOME_HEADING: &str = "Welcome to Flipswitch";

/// Root of the component tree: a static banner plus the toggle button.
/// Holds no mutable state of its own.
#[derive(Debug, Clone)]
pub struct Shell {
    logo: Handle,
    toggle: ToggleButton,
}

#[derive(Debug, Clone)]
pub enum ShellMessage {
    Toggle(ToggleMessage),
}

impl Shell {
    pub fn new() -> Self {
        Self {
            logo: widgets::logo_handle(),
            toggle: ToggleButton::default(),
        }
    }

    pub fn toggle(&self) -> &ToggleButton {
        &self.toggle
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Shell {
    type Message = ShellMessage;

    fn view(&self) -> Element<'_, ShellMessage> {
        widgets::shell_layout(
            &self.logo,
            WELCOME_HEADING,
            self.toggle.view().map(ShellMessage::Toggle),
        )
    }

    fn update(&mut self, message: ShellMessage) -> Task<ShellMessage> {
        match message {
            ShellMessage::Toggle(msg) => self.toggle.update(msg).map(ShellMessage::Toggle),
        }
    }
}
