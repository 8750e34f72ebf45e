//! Application controller.
//!
//! This module orchestrates the main application loop:
//! - Terminal initialization and cleanup
//! - Background dataset loading behind a loading screen
//! - Event polling and handling
//! - Redrawing whenever the browser reports a content change

use std::cell::Cell;
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::browser::{ContentChanged, MultiTrackCoordinator};
use crate::config::Config;
use crate::dataset::{load_dataset, Dataset};
use crate::event::{apply_action, handle_event, poll_event, Action};
use crate::state::AppState;
use crate::ui::{self, calculate_visible_dimensions, cluster_panel_height, render, render_loading};

type Backend = Terminal<CrosstermBackend<Stdout>>;

/// Width used until the terminal size is known.
const INITIAL_TRACK_WIDTH: usize = 80;

/// The main application controller.
pub struct App {
    /// Terminal backend
    terminal: Backend,
    /// Application state
    state: AppState,
    /// Glyph set for arrows and chromosome ends
    glyphs: ui::glyphs::Glyphs,
    /// Event poll timeout
    tick_rate: Duration,
    /// Set by the browser when tracks must be redrawn
    redraw: Rc<Cell<bool>>,
}

fn setup_terminal() -> Result<Backend> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Backend) {
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();
}

/// Subscribes a flag that is raised on every content change.
pub fn subscribe_redraw(state: &mut AppState) -> Rc<Cell<bool>> {
    let redraw = Rc::new(Cell::new(true));
    let flag = Rc::clone(&redraw);
    state.browser.subscribe(Box::new(move |event: ContentChanged| {
        log::trace!("content changed: {:?}", event);
        flag.set(true);
    }));
    redraw
}

impl App {
    /// Creates the application on an already initialized terminal.
    fn with_terminal(terminal: Backend, mut state: AppState, config: &Config) -> Self {
        let redraw = subscribe_redraw(&mut state);
        Self {
            terminal,
            state,
            glyphs: ui::glyphs::select(config.ui.fancy_glyphs),
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
            redraw,
        }
    }

    /// Runs the main application loop.
    pub fn run(&mut self) -> Result<()> {
        // Initial viewport setup
        self.update_viewport_size()?;

        loop {
            if self.redraw.replace(false) {
                self.terminal.draw(|frame| {
                    render(frame, &self.state, &self.glyphs);
                })?;
            }

            // Handle events
            if let Some(event) = poll_event(self.tick_rate) {
                let action = handle_event(event, &self.state.mode, self.state.show_help);
                if action == Action::None {
                    continue;
                }
                log::debug!("action: {:?}", action);

                apply_action(&mut self.state, action);
                if self.state.should_quit {
                    break;
                }

                // The cluster panel may have appeared or vanished
                self.update_viewport_size()?;
                self.redraw.set(true);
            }
        }

        Ok(())
    }

    /// Updates the viewport size based on terminal dimensions.
    fn update_viewport_size(&mut self) -> Result<()> {
        let size = self.terminal.size()?;
        let content_height = size.height.saturating_sub(1);
        let cluster_height = cluster_panel_height(&self.state, content_height);
        let (visible_rows, visible_cols) = calculate_visible_dimensions(size.width, size.height, cluster_height);
        self.state.update_viewport_size(visible_rows, visible_cols);
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal
        restore_terminal(&mut self.terminal);
    }
}

/// Builds the application state for a loaded dataset.
pub fn build_state(dataset: Dataset, dataset_name: String, config: &Config, initial_cluster: Option<usize>) -> AppState {
    let settings = &config.browser;
    let browser = MultiTrackCoordinator::new(
        dataset.genomes,
        dataset.clusters,
        settings.zoom,
        settings.name_type,
        settings.max_gene_name_length,
        INITIAL_TRACK_WIDTH,
    );
    let mut state = AppState::new(browser, dataset_name, settings);
    match initial_cluster {
        Some(cluster_id) => state.select_cluster(cluster_id),
        None => {
            state.status_message = Some(format!(
                "{} genomes, {} clusters | ? for help",
                state.browser.track_count(),
                state.browser.clusters().len()
            ))
        }
    }
    state
}

/// Loads the dataset on a worker thread while showing the loading screen.
fn wait_for_dataset(terminal: &mut Backend, path: &Path, dataset_name: &str, tick_rate: Duration) -> Result<Dataset> {
    let (tx, rx) = mpsc::channel();
    let worker_path = path.to_path_buf();
    thread::spawn(move || {
        // The receiver is gone only if the UI already gave up
        let _ = tx.send(load_dataset(&worker_path));
    });

    loop {
        terminal.draw(|frame| render_loading(frame, dataset_name))?;
        match rx.recv_timeout(tick_rate) {
            Ok(result) => {
                return result.with_context(|| format!("Failed to load dataset {}", path.display()));
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => bail!("Dataset loader stopped unexpectedly"),
        }
    }
}

/// Runs the application: loads the dataset in the background, then browses it.
pub fn run_app_with_loading(dataset_path: PathBuf, config: Config, initial_cluster: Option<usize>) -> Result<()> {
    let dataset_name = dataset_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dataset_path.display().to_string());

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let dataset = match wait_for_dataset(&mut terminal, &dataset_path, &dataset_name, tick_rate) {
        Ok(dataset) => dataset,
        Err(e) => {
            restore_terminal(&mut terminal);
            return Err(e);
        }
    };
    log::info!("Browsing {}: {}", dataset_name, dataset.summary());

    let state = build_state(dataset, dataset_name, &config, initial_cluster);
    let mut app = App::with_terminal(terminal, state, &config);
    app.run()
}
