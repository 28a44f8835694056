use crate::gui::components::shell::ShellMessage;

#[derive(Debug, Clone)]
pub enum Message {
    Shell(ShellMessage),
}
