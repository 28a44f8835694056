use iced::Theme;

use super::app::GuiOptions;

/// Application-level state. The shell component itself is stateless; the
/// only thing held here is the theme picked at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub theme: Theme,
}

impl AppState {
    pub fn new(options: GuiOptions) -> Self {
        let theme = if options.light_theme {
            Theme::Light
        } else {
            Theme::Dark
        };
        Self { theme }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GuiOptions::default())
    }
}
