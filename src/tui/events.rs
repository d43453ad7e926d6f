use crate::data::Project;
use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEvent};
use std::time::Duration;
use tokio::sync::mpsc;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),

    /// Terminal resize event
    Resize(u16, u16),

    /// Periodic tick event
    Tick,

    /// The dataset fetch completed successfully
    ProjectsLoaded(Vec<Project>),

    /// The dataset fetch failed; carries the user-facing message
    LoadFailed(String),
}

/// Event handler merging terminal input with internal events.
///
/// Internal events (the loader completion) arrive over an mpsc channel
/// so the fetch never blocks the draw loop.
pub struct EventHandler {
    /// Event receiver channel
    receiver: mpsc::UnboundedReceiver<Event>,

    /// Event sender channel
    sender: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { receiver, sender }
    }

    /// Get the next event
    pub async fn next(&mut self) -> Option<Event> {
        // Internal events first, so a finished fetch is applied before
        // further input is processed.
        if let Ok(event) = self.receiver.try_recv() {
            return Some(event);
        }

        // Poll for terminal input without holding the runtime thread
        let input = tokio::task::spawn_blocking(|| -> Result<Option<CrosstermEvent>> {
            if crossterm::event::poll(Duration::from_millis(50))? {
                Ok(Some(crossterm::event::read()?))
            } else {
                Ok(None)
            }
        })
        .await;

        match input {
            Ok(Ok(Some(event))) => Some(Self::convert_crossterm_event(event)),
            _ => Some(Event::Tick),
        }
    }

    /// Convert crossterm events to application events
    fn convert_crossterm_event(event: CrosstermEvent) -> Event {
        match event {
            CrosstermEvent::Key(key_event) => Event::Key(key_event),
            CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
            _ => Event::Tick,
        }
    }

    /// Get a clone of the sender
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
