use iced::{Element, Task, widget::button};

use crate::gui::components::Component;
use crate::toggle::Toggle;

/// A clickable button whose text mirrors a single two-valued state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleButton {
    state: Toggle,
}

#[derive(Debug, Clone)]
pub enum ToggleMessage {
    Pressed,
}

impl ToggleButton {
    pub fn label(&self) -> &'static str {
        self.state.label()
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }
}

impl Component for ToggleButton {
    type Message = ToggleMessage;

    fn view(&self) -> Element<'_, ToggleMessage> {
        button(self.state.label())
            .on_press(ToggleMessage::Pressed)
            .into()
    }

    fn update(&mut self, message: ToggleMessage) -> Task<ToggleMessage> {
        match message {
            ToggleMessage::Pressed => {
                self.state.flip();
                Task::none()
            }
        }
    }
}
