pub mod shell;
pub mod toggle_button;

use iced::{Element, Task};

/// A self-contained piece of the interface: a state holder paired with a
/// pure view over that state and an update handler for its own messages.
/// Parents route child messages back to the child value that rendered them
/// via `Element::map`/`Task::map`.
pub trait Component: Sized {
    type Message: std::fmt::Debug;

    fn view(&self) -> Element<'_, Self::Message>;
    fn update(&mut self, message: Self::Message) -> Task<Self::Message>;
}
