//! Terminal rendering for the markdown produced by the core display types.

use termimad::{crossterm::style::Color, MadSkin};

/// Renders markdown to the terminal, or passes it through untouched when
/// color is disabled (tests, pipes).
pub struct TerminalRenderer {
    color: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer.
    pub fn new(color: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { color, skin }
    }

    /// Render markdown text to the terminal.
    pub fn render(&self, markdown: &str) {
        if self.color {
            self.skin.print_text(markdown);
        } else {
            print!("{markdown}");
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
