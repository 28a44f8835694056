mod app;
mod message;
mod state;
pub mod components;
mod widgets;

pub use app::{GuiOptions, ShellApp, run};
pub use message::Message;
pub use state::AppState;
