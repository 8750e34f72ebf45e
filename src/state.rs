//! Application state of the terminal browser.
//!
//! `AppState` wraps the track coordinator together with what only the
//! terminal front end needs: the focused track, the input mode, the status
//! message and the help overlay. Every method is the target of one
//! keyboard `Action`.

use crate::browser::MultiTrackCoordinator;
use crate::config::BrowserConfig;
use crate::model::Gene;

/// Application mode for handling different input states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Command input mode (after pressing ':')
    Command(String),
}

/// The complete application state.
pub struct AppState {
    /// Tracks, dataset and cluster selection
    pub browser: MultiTrackCoordinator,
    /// Name of the loaded dataset file
    pub dataset_name: String,
    /// Genome index of the focused track
    pub focused: usize,
    /// First track shown in the track panel
    pub first_track: usize,
    /// Number of track rows that fit on screen
    pub visible_rows: usize,
    /// Current application mode
    pub mode: AppMode,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Whether the help overlay is shown
    pub show_help: bool,
    /// Status message to display
    pub status_message: Option<String>,
    /// Browse all occurrences instead of the optimal ones
    pub include_suboptimal: bool,
    /// Genes shown on each side of the aligned cluster
    pub context_genes: usize,
}

impl AppState {
    /// Creates the state for a freshly built coordinator.
    pub fn new(browser: MultiTrackCoordinator, dataset_name: String, settings: &BrowserConfig) -> Self {
        Self {
            browser,
            dataset_name,
            focused: 0,
            first_track: 0,
            visible_rows: 0,
            mode: AppMode::Normal,
            should_quit: false,
            show_help: false,
            status_message: None,
            include_suboptimal: settings.include_suboptimal,
            context_genes: settings.context_genes,
        }
    }

    /// Updates the track panel size based on terminal dimensions.
    pub fn update_viewport_size(&mut self, rows: usize, cols: usize) {
        self.visible_rows = rows;
        // Resizing re-centers every track, so only do it on a real width change
        let cols = cols.max(1);
        if self.browser.scroll_width() != cols as i64 {
            self.browser.resize_all(cols);
        }
        self.ensure_focus_visible();
    }

    /// Tracks currently shown, in display order.
    pub fn visible_tracks(&self) -> Vec<usize> {
        self.browser.visible_tracks()
    }

    /// Moves the focus to a shown track and scrolls the track list to it.
    fn ensure_focus_visible(&mut self) {
        let tracks = self.visible_tracks();
        let row = match tracks.iter().position(|&t| t == self.focused) {
            Some(row) => row,
            None => {
                self.focused = tracks.first().copied().unwrap_or(0);
                0
            }
        };
        if row < self.first_track {
            self.first_track = row;
        } else if self.visible_rows > 0 && row >= self.first_track + self.visible_rows {
            self.first_track = row + 1 - self.visible_rows;
        }
        let max_first = tracks.len().saturating_sub(self.visible_rows.max(1));
        self.first_track = self.first_track.min(max_first);
    }

    fn focused_row(&self) -> Option<(usize, Vec<usize>)> {
        let tracks = self.visible_tracks();
        let row = tracks.iter().position(|&t| t == self.focused)?;
        Some((row, tracks))
    }

    /// Focuses the track above.
    pub fn focus_up(&mut self) {
        if let Some((row, tracks)) = self.focused_row() {
            if row > 0 {
                self.focused = tracks[row - 1];
            }
        }
        self.ensure_focus_visible();
    }

    /// Focuses the track below.
    pub fn focus_down(&mut self) {
        if let Some((row, tracks)) = self.focused_row() {
            if row + 1 < tracks.len() {
                self.focused = tracks[row + 1];
            }
        }
        self.ensure_focus_visible();
    }

    /// Scrolls the focused track by whole genes.
    pub fn scroll_focused(&mut self, genes: i64) {
        let delta = genes * self.browser.gene_width();
        self.browser.scroll(self.focused, delta);
    }

    /// Scrolls all tracks by whole genes.
    pub fn scroll_all(&mut self, genes: i64) {
        let delta = genes * self.browser.gene_width();
        self.browser.scroll_all(delta);
    }

    /// Scrolls the focused track by half a window.
    pub fn scroll_focused_page(&mut self, direction: i64) {
        let delta = direction * (self.browser.scroll_width() / 2).max(1);
        self.browser.scroll(self.focused, delta);
    }

    /// Brings the focused track back to the start of its genome.
    pub fn scroll_focused_to_start(&mut self) {
        self.browser.scroll_to_start(self.focused);
    }

    pub fn flip_focused(&mut self) {
        self.browser.flip(self.focused);
    }

    /// Gene under the middle column of the focused track.
    pub fn focused_gene(&self) -> Option<&Gene> {
        let (chromosome, gene) = self.browser.viewport(self.focused).center()?;
        self.browser.genomes()[self.focused].gene(chromosome, gene)
    }

    fn require_selection(&mut self) -> bool {
        if self.browser.selection().is_none() {
            self.status_message = Some("No cluster selected".to_string());
            return false;
        }
        true
    }

    pub fn next_occurrence(&mut self) {
        if self.require_selection() && self.browser.next_occurrence(self.focused).is_none() {
            self.status_message = Some("No next occurrence in this genome".to_string());
        }
    }

    pub fn previous_occurrence(&mut self) {
        if self.require_selection() && self.browser.previous_occurrence(self.focused).is_none() {
            self.status_message = Some("No previous occurrence in this genome".to_string());
        }
    }

    /// Aligns the selected cluster on the family of the focused gene.
    pub fn center_on_focused_gene(&mut self) {
        if !self.require_selection() {
            return;
        }
        let Some(family) = self.focused_gene().map(|g| g.family.clone()) else {
            self.status_message = Some("No gene in the middle of this track".to_string());
            return;
        };
        self.browser.center_on_gene_family(&family);
        let anchored = self
            .browser
            .selection()
            .and_then(|s| s.anchor.as_ref())
            .map_or(0, |a| a.positions.iter().filter(|p| p.is_some()).count());
        self.status_message = Some(format!("Aligned on family {} ({} genomes)", family, anchored));
    }

    /// Returns every track to the selected occurrences.
    pub fn center_on_cluster(&mut self) {
        if !self.require_selection() {
            return;
        }
        self.browser.center_on_cluster();
        let genome = &self.browser.genomes()[self.focused].name;
        let families = self.browser.shown_families(self.focused);
        self.status_message = Some(if families.is_empty() {
            format!("Cluster not found in {}", genome)
        } else {
            let ids: Vec<&str> = families.iter().map(|f| f.external_id()).collect();
            format!("Cluster in {}: families {}", genome, ids.join(" "))
        });
    }

    pub fn zoom_in(&mut self) {
        if self.browser.zoom_in().is_none() {
            self.status_message = Some("Maximal zoom reached".to_string());
        }
    }

    pub fn zoom_out(&mut self) {
        if self.browser.zoom_out().is_none() {
            self.status_message = Some("Minimal zoom reached".to_string());
        }
    }

    /// Switches to the next gene label mode.
    pub fn cycle_name_type(&mut self) {
        let name_type = self.browser.metrics().name_type().next();
        self.browser.set_name_type(name_type);
        self.status_message = Some(format!("Gene labels: {}", name_type));
    }

    /// Selects a cluster by id.
    pub fn select_cluster(&mut self, cluster_id: usize) {
        if self.browser.select_cluster(cluster_id, self.include_suboptimal).is_none()
            && self.browser.cluster(cluster_id).is_none()
        {
            self.status_message = Some(format!("Unknown cluster: {}", cluster_id));
            return;
        }
        let support = self
            .browser
            .cluster(cluster_id)
            .map_or(0, |c| c.support(self.include_suboptimal));
        self.status_message = Some(format!(
            "Cluster {} ({} of {} genomes)",
            cluster_id,
            support,
            self.browser.track_count()
        ));
        self.ensure_focus_visible();
    }

    /// Selects the cluster after (or before) the current one in dataset order.
    fn step_cluster(&mut self, forward: bool) {
        let count = self.browser.clusters().len();
        if count == 0 {
            self.status_message = Some("Dataset has no clusters".to_string());
            return;
        }
        let current = self
            .browser
            .selection()
            .and_then(|s| self.browser.clusters().iter().position(|c| c.id == s.cluster_id));
        let index = match (current, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        };
        let cluster_id = self.browser.clusters()[index].id;
        self.select_cluster(cluster_id);
    }

    pub fn next_cluster(&mut self) {
        self.step_cluster(true);
    }

    pub fn previous_cluster(&mut self) {
        self.step_cluster(false);
    }

    pub fn toggle_hide_non_contained(&mut self) {
        let hide = !self.browser.hide_non_contained();
        self.browser.set_hide_non_contained(hide);
        self.status_message = Some(if hide {
            "Hiding genomes without the cluster".to_string()
        } else {
            "Showing all genomes".to_string()
        });
        self.ensure_focus_visible();
    }

    pub fn toggle_suboptimal(&mut self) {
        self.include_suboptimal = !self.include_suboptimal;
        self.browser.set_include_suboptimal(self.include_suboptimal);
        self.status_message = Some(if self.include_suboptimal {
            "Browsing all occurrences".to_string()
        } else {
            "Browsing optimal occurrences".to_string()
        });
        self.ensure_focus_visible();
    }

    pub fn clear_selection(&mut self) {
        self.browser.clear_selection();
        self.status_message = None;
        self.ensure_focus_visible();
    }

    pub fn show_help(&mut self) {
        self.show_help = true;
    }

    pub fn dismiss_help(&mut self) {
        self.show_help = false;
    }

    /// Enters command mode.
    pub fn enter_command_mode(&mut self) {
        self.mode = AppMode::Command(String::new());
    }

    /// Handles a character input in command mode.
    pub fn command_input(&mut self, c: char) {
        if let AppMode::Command(ref mut cmd) = self.mode {
            cmd.push(c);
        }
    }

    /// Handles backspace in command mode.
    pub fn command_backspace(&mut self) {
        if let AppMode::Command(ref mut cmd) = self.mode {
            cmd.pop();
            if cmd.is_empty() {
                self.mode = AppMode::Normal;
            }
        }
    }

    /// Executes the current command.
    pub fn execute_command(&mut self) {
        if let AppMode::Command(cmd) = std::mem::take(&mut self.mode) {
            match cmd.trim() {
                "q" | "quit" => self.should_quit = true,
                "h" | "help" => self.show_help = true,
                "clear" => self.clear_selection(),
                "sub" => self.toggle_suboptimal(),
                other => match other.parse::<usize>() {
                    Ok(cluster_id) => self.select_cluster(cluster_id),
                    Err(_) => self.status_message = Some(format!("Unknown command: {}", other)),
                },
            }
        }
        self.mode = AppMode::Normal;
    }

    /// Cancels command mode and returns to normal mode.
    pub fn cancel_command(&mut self) {
        self.mode = AppMode::Normal;
    }
}
