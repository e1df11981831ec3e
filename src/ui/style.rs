//! Color and weight directives for terminal output

use crossterm::style::Stylize;

/// Applies terminal styling, or nothing when disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn colored() -> Self {
        Self { enabled: true }
    }

    /// No escape sequences at all
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Section labels (`Name:`, `Methods:`)
    pub fn label(&self, text: &str) -> String {
        if self.enabled {
            text.green().underlined().to_string()
        } else {
            text.to_string()
        }
    }

    /// Inverted header bar
    pub fn banner(&self, text: &str) -> String {
        if self.enabled {
            text.black().on_white().to_string()
        } else {
            text.to_string()
        }
    }

    /// Result counts and section titles
    pub fn alert(&self, text: &str) -> String {
        if self.enabled {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn link(&self, text: &str) -> String {
        if self.enabled {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_leaves_text_alone() {
        let palette = Palette::plain();
        assert_eq!(palette.label("Name:"), "Name:");
        assert_eq!(palette.banner(" fs "), " fs ");
        assert_eq!(palette.alert("!"), "!");
        assert_eq!(palette.link("url"), "url");
    }

    #[test]
    fn test_colored_palette_wraps_text_in_escapes() {
        let palette = Palette::colored();
        let styled = palette.label("Name:");
        assert!(styled.contains("Name:"));
        assert!(styled.starts_with('\u{1b}'));
        assert_ne!(styled, "Name:");
    }
}
