//! TUI rendering module.
//!
//! This module handles all visual rendering using ratatui:
//! - Sticky genome names on the left
//! - One track row per genome, drawn from its scroll position
//! - The aligned cluster panel when a cluster is selected
//! - Status bar with the focused gene and command line
//! - Help overlay

pub mod glyphs;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::layout::Slot;
use crate::metrics::CoordinateMetrics;
use crate::model::Gene;
use crate::state::{AppMode, AppState};
use crate::viewport::{Highlight, TrackElement, ViewportController};
use glyphs::Glyphs;

/// Width reserved for genome names (including border and padding).
const NAME_PANEL_WIDTH: u16 = 20;
/// Minimum width for the track panel.
const MIN_TRACK_PANEL_WIDTH: u16 = 10;
/// Height of the status bar.
const STATUS_BAR_HEIGHT: u16 = 1;

const HELP_TEXT: &[&str] = &[
    "Tracks",
    "  j / k          focus the track below / above",
    "  h / l          scroll the focused track by one gene",
    "  H / L          scroll all tracks by one gene",
    "  PgUp / PgDn    scroll the focused track by half a window",
    "  0 / Home       back to the start of the focused genome",
    "  f              flip the focused track",
    "",
    "Clusters",
    "  ] / [          next / previous cluster",
    "  n / N          next / previous occurrence in the focused genome",
    "  c              align all genomes on the family of the gene under the center of the focused track",
    "  C              bring all tracks back to the selected occurrences",
    "  s              browse all occurrences or the optimal ones only",
    "  x              hide genomes that do not contain the cluster",
    "  Esc            clear the selection and unflip all tracks",
    "",
    "View",
    "  + / -          zoom in / out",
    "  t              cycle gene labels (id, name, locus tag)",
    "",
    "Commands",
    "  :<number>      select a cluster by id",
    "  :sub           same as s",
    "  :clear         same as Esc",
    "  :q             quit",
    "",
    "Press any key to close this help.",
];

/// One terminal column: its character and style.
type Cell = (char, Style);

fn glyph(s: &str) -> char {
    s.chars().next().unwrap_or(' ')
}

/// Groups consecutive cells of the same style into spans.
fn spans_from_cells(cells: &[Cell]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut text = String::new();
    let mut current: Option<Style> = None;
    for &(c, style) in cells {
        if current != Some(style) {
            if let Some(previous) = current {
                spans.push(Span::styled(std::mem::take(&mut text), previous));
            }
            current = Some(style);
        }
        text.push(c);
    }
    if let Some(style) = current {
        spans.push(Span::styled(text, style));
    }
    spans
}

fn blank(width: usize) -> Vec<Cell> {
    vec![(' ', Style::default()); width]
}

/// Draws a gene box: gap, padding, label with its arrow, padding, gap.
///
/// The result is exactly one gene width wide.
fn gene_cells(gene: &Gene, metrics: &CoordinateMetrics, flipped: bool, glyphs: &Glyphs, style: Style) -> Vec<Cell> {
    let label_width = metrics.max_label_length().max(1);
    let mut label: Vec<char> = gene.label(metrics.name_type()).chars().take(label_width).collect();
    label.resize(label_width, ' ');

    let mut inner = Vec::with_capacity(metrics.gene_element_width());
    let pad = metrics.zoom() as usize;
    inner.extend(std::iter::repeat(' ').take(pad));
    if gene.orientation.points_left(flipped) {
        inner.push(glyph(glyphs.arrow_left));
        inner.extend(label);
    } else if gene.orientation.points_right(flipped) {
        inner.extend(label);
        inner.push(glyph(glyphs.arrow_right));
    } else {
        inner.extend(label);
        inner.push(' ');
    }
    inner.extend(std::iter::repeat(' ').take(pad));

    let mut cells = vec![(' ', Style::default())];
    cells.extend(inner.into_iter().map(|c| (c, style)));
    cells.push((' ', Style::default()));
    cells
}

/// Draws a chromosome boundary, the symbol on the side facing the genes.
fn boundary_cells(width: usize, symbol: &str, at_right_edge: bool) -> Vec<Cell> {
    let style = Style::default().fg(Color::Cyan);
    let mut cells = blank(width);
    let index = if at_right_edge { width.saturating_sub(1) } else { 0 };
    if let Some(cell) = cells.get_mut(index) {
        *cell = (glyph(symbol), style);
    }
    cells
}

fn cluster_style(reference: bool) -> Style {
    if reference {
        Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    }
}

fn gene_style(gene: &Gene, highlight: Highlight, chromosome: usize, index: usize) -> Style {
    match highlight {
        Highlight::Understated => Style::default().fg(Color::DarkGray),
        Highlight::Cluster { reference, .. } if highlight.covers(chromosome, index) => cluster_style(reference),
        _ if gene.family.is_unknown() => Style::default().fg(Color::DarkGray),
        _ => Style::default().fg(Color::White),
    }
}

/// Draws one element of a track at full width.
fn element_cells(state: &AppState, viewport: &ViewportController, element: TrackElement, glyphs: &Glyphs) -> Vec<Cell> {
    let metrics = state.browser.metrics();
    let end_width = metrics.chromosome_end_width() as usize;
    match element {
        TrackElement::ChromosomeStart(_) => boundary_cells(end_width, glyphs.chromosome_start, true),
        TrackElement::ChromosomeEnd(_) => boundary_cells(end_width, glyphs.chromosome_end, false),
        TrackElement::Gene { chromosome, gene } => {
            match state.browser.genomes()[viewport.genome_index()].gene(chromosome, gene) {
                Some(g) => {
                    let style = gene_style(g, viewport.highlight(), chromosome, gene);
                    gene_cells(g, metrics, viewport.is_flipped(), glyphs, style)
                }
                None => blank(metrics.gene_width() as usize),
            }
        }
    }
}

/// Draws the visible window of a track, `cols` columns from its scroll position.
fn track_cells(state: &AppState, viewport: &ViewportController, glyphs: &Glyphs, cols: usize) -> Vec<Cell> {
    let metrics = state.browser.metrics();
    let mut cells = Vec::with_capacity(cols);
    let mut position = viewport.scroll_position();
    let end = position + cols as i64;

    while position < end {
        match viewport.locate(metrics, position) {
            Some((element, offset)) => {
                let drawn = element_cells(state, viewport, element, glyphs);
                let offset = offset as usize;
                let take = drawn.len().saturating_sub(offset).min((end - position) as usize).max(1);
                cells.extend(drawn.iter().skip(offset).take(take).copied());
                if drawn.len() <= offset {
                    cells.push((' ', Style::default()));
                }
                position += take as i64;
            }
            None => {
                let run = if position < viewport.border() {
                    (viewport.border() - position).min(end - position)
                } else {
                    end - position
                };
                cells.extend(blank(run as usize));
                position += run;
            }
        }
    }
    cells
}

/// Height of the cluster panel, zero without a selection.
pub fn cluster_panel_height(state: &AppState, content_height: u16) -> u16 {
    if state.browser.selection().is_none() {
        return 0;
    }
    let wanted = state.visible_tracks().len() as u16 + 2;
    wanted.min(content_height / 2)
}

fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() > max_len {
        let kept: String = name.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    } else {
        name.to_string()
    }
}

/// Renders the complete UI.
pub fn render(frame: &mut Frame, state: &AppState, glyphs: &Glyphs) {
    let area = frame.area();

    // Main layout: content area + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(area);

    let content_area = main_layout[0];
    let status_area = main_layout[1];

    let cluster_height = cluster_panel_height(state, content_area.height);
    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(cluster_height), Constraint::Min(3)])
        .split(content_area);

    if cluster_height > 0 {
        let cluster_layout = split_names(panels[0]);
        render_cluster_panel(frame, state, glyphs, cluster_layout[0], cluster_layout[1]);
    }

    let track_layout = split_names(panels[1]);
    let names_area = track_layout[0];
    let tracks_area = track_layout[1];

    // Calculate visible dimensions (accounting for borders)
    let visible_rows = tracks_area.height.saturating_sub(2) as usize;
    let visible_cols = tracks_area.width.saturating_sub(2) as usize;

    render_names_panel(frame, state, glyphs, names_area, visible_rows);
    render_tracks_panel(frame, state, glyphs, tracks_area, visible_rows, visible_cols);
    render_status_bar(frame, state, status_area);

    if state.show_help {
        render_help(frame, area);
    }
}

/// Splits an area into the names panel (left) and the drawing panel (right).
fn split_names(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(NAME_PANEL_WIDTH),
            Constraint::Min(MIN_TRACK_PANEL_WIDTH),
        ])
        .split(area)
}

fn shown_tracks(state: &AppState, rows: usize) -> Vec<usize> {
    state
        .visible_tracks()
        .into_iter()
        .skip(state.first_track)
        .take(rows)
        .collect()
}

/// Renders the genome names panel (sticky, always visible).
fn render_names_panel(frame: &mut Frame, state: &AppState, glyphs: &Glyphs, area: Rect, visible_rows: usize) {
    let max_name_len = NAME_PANEL_WIDTH.saturating_sub(5) as usize;
    let lines: Vec<Line> = shown_tracks(state, visible_rows)
        .into_iter()
        .map(|genome| {
            let direction = if state.browser.is_flipped(genome) {
                glyphs.arrow_left
            } else {
                glyphs.arrow_right
            };
            let name = truncate_name(&state.browser.genomes()[genome].name, max_name_len);
            let style = if genome == state.focused {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(format!("{} {}", direction, name), style))
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title("Genomes");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders one row per genome track.
fn render_tracks_panel(
    frame: &mut Frame,
    state: &AppState,
    glyphs: &Glyphs,
    area: Rect,
    visible_rows: usize,
    visible_cols: usize,
) {
    let lines: Vec<Line> = shown_tracks(state, visible_rows)
        .into_iter()
        .map(|genome| {
            let viewport = state.browser.viewport(genome);
            Line::from(spans_from_cells(&track_cells(state, viewport, glyphs, visible_cols)))
        })
        .collect();

    let metrics = state.browser.metrics();
    let title = format!(
        "{} [zoom {} | {} | {} tracks]",
        state.dataset_name,
        metrics.zoom(),
        metrics.name_type(),
        state.visible_tracks().len()
    );
    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the selected occurrences side by side in the shared window.
fn render_cluster_panel(frame: &mut Frame, state: &AppState, glyphs: &Glyphs, names_area: Rect, area: Rect) {
    let (Some(selection), Some(cluster), Some(calculator)) = (
        state.browser.selection(),
        state.browser.selected_cluster(),
        state.browser.calculator(),
    ) else {
        return;
    };
    let metrics = state.browser.metrics();
    let rows = names_area.height.saturating_sub(2) as usize;
    let cols = area.width.saturating_sub(2) as usize;
    let tracks = shown_tracks(state, rows);
    let table = cluster.occurrences(selection.include_suboptimal);

    let occurrence_lines: Vec<Line> = tracks
        .iter()
        .map(|&genome| {
            let text = match selection.subselection[genome] {
                Some(occurrence) => format!("{}/{}", occurrence + 1, table.occurrence_count(genome)),
                None => glyphs.h_separator.to_string(),
            };
            Line::from(Span::raw(text))
        })
        .collect();

    let gene_width = metrics.gene_width() as usize;
    let slot_lines: Vec<Line> = tracks
        .iter()
        .map(|&genome| {
            let flipped = selection.is_flipped(genome);
            let reference = genome == cluster.reference_genome;
            let mut cells = Vec::new();
            for slot in calculator.paint_slots(selection, genome, state.context_genes) {
                let drawn = match slot {
                    Slot::Gap => blank(gene_width),
                    Slot::ChromosomeStart => boundary_cells(gene_width, glyphs.chromosome_start, true),
                    Slot::ChromosomeEnd => boundary_cells(gene_width, glyphs.chromosome_end, false),
                    Slot::Gene {
                        gene,
                        part_of_cluster,
                        ..
                    } => {
                        let style = if part_of_cluster {
                            cluster_style(reference)
                        } else {
                            Style::default().fg(Color::Gray)
                        };
                        gene_cells(gene, metrics, flipped, glyphs, style)
                    }
                };
                cells.extend(drawn);
                if cells.len() >= cols {
                    break;
                }
            }
            cells.truncate(cols);
            Line::from(spans_from_cells(&cells))
        })
        .collect();

    let names_block = Block::default().borders(Borders::ALL).title("Occ.");
    frame.render_widget(Paragraph::new(occurrence_lines).block(names_block), names_area);

    let title = format!(
        "Cluster {} [{}/{} genomes{}]",
        cluster.id,
        cluster.support(selection.include_suboptimal),
        state.browser.track_count(),
        if selection.include_suboptimal { ", all occurrences" } else { "" }
    );
    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(Paragraph::new(slot_lines).block(block), area);
}

/// Renders the status bar at the bottom.
fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let (mode_str, command_str) = match &state.mode {
        AppMode::Normal => ("NORMAL", String::new()),
        AppMode::Command(cmd) => ("COMMAND", format!(":{}", cmd)),
    };

    let genome = &state.browser.genomes()[state.focused];
    let gene_info = state
        .focused_gene()
        .map(|gene| format!("{} | {}", gene.family, gene.summary()))
        .unwrap_or_else(|| "no gene".to_string());
    let position_info = format!(
        "{} {}/{} | {} ",
        genome.name,
        state.focused + 1,
        state.browser.track_count(),
        gene_info
    );

    // Show status message if present
    let message = state.status_message.as_deref().unwrap_or("");

    let left_content = if command_str.is_empty() {
        format!(" {} | {} ", mode_str, message)
    } else {
        format!(" {} | {} ", mode_str, command_str)
    };

    let left_len = left_content.chars().count();
    let status_line = Line::from(vec![
        Span::styled(left_content, Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::styled(
            " ".repeat((area.width as usize).saturating_sub(left_len + position_info.chars().count())),
            Style::default().bg(Color::Cyan),
        ),
        Span::styled(
            position_info,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(status_line), area);
}

/// Area of a popup centered in `area`.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Wraps the help text to the given width.
fn help_lines(width: usize) -> Vec<Line<'static>> {
    HELP_TEXT
        .iter()
        .flat_map(|line| {
            if line.is_empty() {
                return vec![Line::from("")];
            }
            let options = textwrap::Options::new(width.max(10)).subsequent_indent("                 ");
            textwrap::wrap(line, options)
                .into_iter()
                .map(|part| Line::from(part.into_owned()))
                .collect()
        })
        .collect()
}

fn render_help(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(area, 80.min(area.width.saturating_sub(4)), area.height.saturating_sub(2));
    let lines = help_lines(popup.width.saturating_sub(2) as usize);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Help")
        .style(Style::default().fg(Color::White).bg(Color::Black));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Renders the loading screen shown while the dataset is read.
pub fn render_loading(frame: &mut Frame, dataset_name: &str) {
    let area = frame.area();
    let text = format!("Loading {} ...", dataset_name);
    let popup = centered_rect(area, text.chars().count() as u16 + 4, 3);
    let block = Block::default().borders(Borders::ALL).title("clusterview");
    frame.render_widget(Paragraph::new(text).block(block), popup);
}

/// Calculates the visible dimensions of the track panel.
pub fn calculate_visible_dimensions(
    terminal_width: u16,
    terminal_height: u16,
    cluster_panel_height: u16,
) -> (usize, usize) {
    // Account for borders, the status bar and the cluster panel
    let visible_cols = terminal_width.saturating_sub(NAME_PANEL_WIDTH + 2) as usize;
    let visible_rows = terminal_height.saturating_sub(STATUS_BAR_HEIGHT + cluster_panel_height + 2) as usize;
    (visible_rows, visible_cols)
}
