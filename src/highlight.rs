use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// A highlighter that never emits escape sequences.
    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Bold cyan, used for builtin names.
    pub fn highlight_command(&self, name: &str) -> String {
        if self.is_plain() {
            return name.to_string();
        }

        let command_style = Style::builder()
            .foreground(Color::Cyan)
            .bold()
            .build();
        name.style(command_style).to_string()
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if self.is_plain() {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();

        hint.style(hint_style).to_string()
    }
}
