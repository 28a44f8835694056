use iced::{Element, Task, Theme};

use super::{AppState, Message};
use crate::gui::components::{Component, shell::Shell};

/// Options collected on the command line before the window opens.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuiOptions {
    pub light_theme: bool,
}

pub struct ShellApp {
    state: AppState,
    shell: Shell,
}

impl ShellApp {
    fn new(options: GuiOptions) -> Self {
        Self {
            state: AppState::new(options),
            shell: Shell::new(),
        }
    }

    fn title(&self) -> String {
        "Flipswitch".to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Shell(msg) => self.shell.update(msg).map(Message::Shell),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.shell.view().map(Message::Shell)
    }

    fn theme(&self) -> Theme {
        self.state.theme.clone()
    }
}

pub fn run(options: GuiOptions) -> iced::Result {
    iced::application(ShellApp::title, ShellApp::update, ShellApp::view)
        .theme(ShellApp::theme)
        .window_size(iced::Size::new(480.0, 420.0))
        .run_with(move || (ShellApp::new(options), Task::none()))
}
