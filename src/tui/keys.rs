use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key binding configuration
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub description: String,
}

impl KeyBinding {
    pub fn new(key: KeyCode, modifiers: KeyModifiers, description: &str) -> Self {
        Self {
            key,
            modifiers,
            description: description.to_string(),
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.code && self.modifiers == event.modifiers
    }
}

/// Application key mappings
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Quit application
    pub quit: Vec<KeyBinding>,

    /// Go to the previous page
    pub previous_page: Vec<KeyBinding>,

    /// Go to the next page
    pub next_page: Vec<KeyBinding>,

    /// Go to the first page
    pub first_page: Vec<KeyBinding>,

    /// Go to the last page
    pub last_page: Vec<KeyBinding>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            quit: vec![
                KeyBinding::new(KeyCode::Char('q'), KeyModifiers::NONE, "Quit"),
                KeyBinding::new(KeyCode::Char('c'), KeyModifiers::CONTROL, "Quit"),
                KeyBinding::new(KeyCode::Esc, KeyModifiers::NONE, "Quit"),
            ],
            previous_page: vec![
                KeyBinding::new(KeyCode::Left, KeyModifiers::NONE, "Previous page"),
                KeyBinding::new(KeyCode::Char('h'), KeyModifiers::NONE, "Previous page"),
            ],
            next_page: vec![
                KeyBinding::new(KeyCode::Right, KeyModifiers::NONE, "Next page"),
                KeyBinding::new(KeyCode::Char('l'), KeyModifiers::NONE, "Next page"),
            ],
            first_page: vec![KeyBinding::new(
                KeyCode::Home,
                KeyModifiers::NONE,
                "First page",
            )],
            last_page: vec![KeyBinding::new(
                KeyCode::End,
                KeyModifiers::NONE,
                "Last page",
            )],
        }
    }
}

impl KeyMap {
    /// Check if the event should quit the application
    pub fn should_quit(&self, event: &KeyEvent) -> bool {
        self.quit.iter().any(|b| b.matches(event))
    }

    pub fn is_previous_page(&self, event: &KeyEvent) -> bool {
        self.previous_page.iter().any(|b| b.matches(event))
    }

    pub fn is_next_page(&self, event: &KeyEvent) -> bool {
        self.next_page.iter().any(|b| b.matches(event))
    }

    pub fn is_first_page(&self, event: &KeyEvent) -> bool {
        self.first_page.iter().any(|b| b.matches(event))
    }

    pub fn is_last_page(&self, event: &KeyEvent) -> bool {
        self.last_page.iter().any(|b| b.matches(event))
    }

    /// Interpret a digit key as a position in the visible page window:
    /// `1`-`9` select the 1st-9th entry, `0` the 10th.
    pub fn window_position(event: &KeyEvent) -> Option<usize> {
        match event.code {
            KeyCode::Char('0') => Some(9),
            KeyCode::Char(c) if c.is_ascii_digit() => Some(c as usize - '1' as usize),
            _ => None,
        }
    }
}
