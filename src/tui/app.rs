use crate::config::Config;
use crate::data::{LoadState, ProjectFetcher};
use crate::pagination::Pager;
use crate::tui::{events::Event, keys::KeyMap, styles::Theme, table, Frame};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Main application state and controller.
///
/// Owns the load state machine (Loading -> Failed | Ready) and, once
/// ready, the pager. Construction spawns exactly one fetch; its
/// completion arrives as an event so the draw loop never blocks on it.
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,

    /// Key mappings for the application
    key_map: KeyMap,

    /// Current theme for styling
    theme: Theme,

    /// Data-fetch progress
    load_state: LoadState,

    /// Pagination over the loaded collection
    pager: Pager,

    /// Handle of the in-flight fetch task
    loader: JoinHandle<()>,
}

impl App {
    /// Create the app and start the single dataset fetch.
    pub fn new(
        config: &Config,
        fetcher: Arc<dyn ProjectFetcher>,
        sender: mpsc::UnboundedSender<Event>,
    ) -> Self {
        let loader = tokio::spawn(async move {
            let event = match fetcher.fetch().await {
                Ok(projects) => Event::ProjectsLoaded(projects),
                Err(err) => Event::LoadFailed(err.user_message()),
            };
            // The receiver may be gone if the app shut down mid-fetch
            let _ = sender.send(event);
        });

        Self {
            should_quit: false,
            key_map: KeyMap::default(),
            theme: Theme::default(),
            load_state: LoadState::Loading,
            pager: Pager::new(config.page_size, config.max_visible_pages),
            loader,
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Handle incoming events. Returns `true` when the app should exit.
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key_event) => {
                if self.key_map.should_quit(&key_event) {
                    self.should_quit = true;
                    return Ok(true);
                }

                // Page controls only exist once the data is ready
                if self.load_state.is_ready() {
                    self.handle_page_key(key_event);
                }
            }

            Event::ProjectsLoaded(projects) => {
                info!("Loaded {} projects", projects.len());
                self.pager.set_total_items(projects.len());
                self.load_state = LoadState::Ready(projects);
            }

            Event::LoadFailed(message) => {
                warn!("Dataset fetch failed: {}", message);
                self.load_state = LoadState::Failed(message);
            }

            Event::Resize(_, _) | Event::Tick => {}
        }

        Ok(false)
    }

    fn handle_page_key(&mut self, key_event: crossterm::event::KeyEvent) {
        if self.key_map.is_previous_page(&key_event) {
            self.pager.previous_page();
        } else if self.key_map.is_next_page(&key_event) {
            self.pager.next_page();
        } else if self.key_map.is_first_page(&key_event) {
            self.pager.first_page();
        } else if self.key_map.is_last_page(&key_event) {
            self.pager.last_page();
        } else if let Some(position) = KeyMap::window_position(&key_event) {
            // Digit keys address the visible window, mirroring the
            // numbered buttons: only in-range pages are offered.
            if let Some(page) = self.pager.visible_window().nth(position) {
                self.pager.goto_page(page);
            }
        } else {
            return;
        }

        debug!("Current page: {}", self.pager.current_page());
    }

    /// Render the current screen
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.size();
        match &self.load_state {
            LoadState::Loading => table::render_loading(frame, area, &self.theme),
            LoadState::Failed(message) => table::render_error(frame, area, &self.theme, message),
            LoadState::Ready(projects) => {
                table::render_projects(frame, area, &self.theme, projects, &self.pager)
            }
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Discard a late-arriving fetch after teardown
        self.loader.abort();
    }
}
