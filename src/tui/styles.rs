use ratatui::style::{Color, Modifier, Style};

/// Application theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub text: Color,
    pub text_dim: Color,
    pub text_bright: Color,
    pub border: Color,
    pub error: Color,
    pub selection: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme
    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(147, 51, 234),      // Purple
            text: Color::Rgb(248, 250, 252),        // Slate-50
            text_dim: Color::Rgb(148, 163, 184),    // Slate-400
            text_bright: Color::Rgb(255, 255, 255), // White
            border: Color::Rgb(71, 85, 105),        // Slate-600
            error: Color::Rgb(239, 68, 68),         // Red-500
            selection: Color::Rgb(30, 58, 138),     // Blue-900
        }
    }

    /// Style for text content
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for table headers
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the active page number
    pub fn current_page_style(&self) -> Style {
        Style::default()
            .bg(self.selection)
            .fg(self.text_bright)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for selectable page numbers and enabled controls
    pub fn control_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for disabled controls
    pub fn disabled_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    /// Style for error text
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Style for help text
    pub fn help_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }
}
