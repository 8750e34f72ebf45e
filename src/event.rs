//! Keyboard event handling.
//!
//! This module maps keyboard input to browser actions, Vim-style:
//! - `j` / `k`: focus the track below / above
//! - `h` / `l`: scroll the focused track by one gene
//! - `H` / `L`: scroll all tracks by one gene
//! - `PageUp` / `PageDown`: scroll the focused track by half a window
//! - `0` or `Home`: back to the start of the focused genome
//! - `f`: flip the focused track
//! - `n` / `N`: next / previous occurrence in the focused genome
//! - `c`: align all tracks on the family of the focused gene
//! - `C`: bring all tracks back to the selected cluster
//! - `]` / `[`: next / previous cluster
//! - `+` / `-`: zoom in / out
//! - `t`: cycle gene labels (id, name, locus tag)
//! - `x`: hide genomes without the selected cluster
//! - `s`: browse all occurrences or the optimal ones only
//! - `Esc`: clear the selection
//! - `?`: show help
//! - `:`: enter command mode
//!   - `:q` or `:quit`: quit the application
//!   - `:h` or `:help`: show help
//!   - `:<number>`: select a cluster by id

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::state::{AppMode, AppState};

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action (key not recognized)
    None,
    /// Quit the application
    Quit,
    /// Focus the track above
    FocusUp,
    /// Focus the track below
    FocusDown,
    /// Scroll the focused track one gene left
    ScrollLeft,
    /// Scroll the focused track one gene right
    ScrollRight,
    /// Scroll all tracks one gene left
    ScrollAllLeft,
    /// Scroll all tracks one gene right
    ScrollAllRight,
    /// Scroll the focused track half a window left
    PageLeft,
    /// Scroll the focused track half a window right
    PageRight,
    /// Back to the start of the focused genome
    ScrollToStart,
    /// Reverse the focused track
    Flip,
    /// Next occurrence in the focused genome
    NextOccurrence,
    /// Previous occurrence in the focused genome
    PreviousOccurrence,
    /// Align on the family of the focused gene
    CenterOnGene,
    /// Return all tracks to the selected occurrences
    CenterOnCluster,
    ZoomIn,
    ZoomOut,
    /// Cycle gene labels
    CycleNameType,
    NextCluster,
    PreviousCluster,
    /// Toggle hiding of genomes without the cluster
    ToggleHideNonContained,
    /// Toggle browsing of sub-optimal occurrences
    ToggleSuboptimal,
    /// Drop the cluster selection
    ClearSelection,
    /// Show the help overlay
    ShowHelp,
    /// Dismiss the help overlay
    DismissHelp,
    /// Enter command mode
    EnterCommandMode,
    /// Add character to command buffer
    CommandChar(char),
    /// Execute current command
    ExecuteCommand,
    /// Cancel command mode
    CancelCommand,
    /// Backspace in command mode
    CommandBackspace,
    /// Resize event (terminal resized)
    Resize(u16, u16),
}

/// Polls for keyboard events with a timeout.
///
/// Returns `None` if no event occurred within the timeout.
pub fn poll_event(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).ok()? {
        event::read().ok()
    } else {
        None
    }
}

/// Converts a crossterm event to an Action based on current app mode.
pub fn handle_event(event: Event, mode: &AppMode, show_help: bool) -> Action {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, mode, show_help),
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

/// Handles a key event based on the current application mode.
fn handle_key_event(key: KeyEvent, mode: &AppMode, show_help: bool) -> Action {
    // If help is shown, any key dismisses it
    if show_help {
        return Action::DismissHelp;
    }

    match mode {
        AppMode::Normal => handle_normal_mode(key),
        AppMode::Command(_) => handle_command_mode(key),
    }
}

/// Handles key events in normal mode.
fn handle_normal_mode(key: KeyEvent) -> Action {
    // Handle Ctrl+C for emergency quit
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('j') => Action::FocusDown,
        KeyCode::Char('k') => Action::FocusUp,
        KeyCode::Char('h') => Action::ScrollLeft,
        KeyCode::Char('l') => Action::ScrollRight,
        KeyCode::Char('H') => Action::ScrollAllLeft,
        KeyCode::Char('L') => Action::ScrollAllRight,

        // Alternative arrow keys for convenience
        KeyCode::Up => Action::FocusUp,
        KeyCode::Down => Action::FocusDown,
        KeyCode::Left if key.modifiers.contains(KeyModifiers::SHIFT) => Action::ScrollAllLeft,
        KeyCode::Right if key.modifiers.contains(KeyModifiers::SHIFT) => Action::ScrollAllRight,
        KeyCode::Left => Action::ScrollLeft,
        KeyCode::Right => Action::ScrollRight,

        KeyCode::PageUp => Action::PageLeft,
        KeyCode::PageDown => Action::PageRight,
        KeyCode::Char('0') | KeyCode::Home => Action::ScrollToStart,

        KeyCode::Char('f') => Action::Flip,
        KeyCode::Char('n') => Action::NextOccurrence,
        KeyCode::Char('N') => Action::PreviousOccurrence,
        KeyCode::Char('c') => Action::CenterOnGene,
        KeyCode::Char('C') => Action::CenterOnCluster,
        KeyCode::Char(']') => Action::NextCluster,
        KeyCode::Char('[') => Action::PreviousCluster,

        KeyCode::Char('+') | KeyCode::Char('=') => Action::ZoomIn,
        KeyCode::Char('-') => Action::ZoomOut,
        KeyCode::Char('t') => Action::CycleNameType,

        KeyCode::Char('x') => Action::ToggleHideNonContained,
        KeyCode::Char('s') => Action::ToggleSuboptimal,
        KeyCode::Esc => Action::ClearSelection,

        KeyCode::Char('?') => Action::ShowHelp,
        KeyCode::Char(':') => Action::EnterCommandMode,

        _ => Action::None,
    }
}

/// Handles key events in command mode.
fn handle_command_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::ExecuteCommand,
        KeyCode::Esc => Action::CancelCommand,
        KeyCode::Backspace => Action::CommandBackspace,
        KeyCode::Char(c) => Action::CommandChar(c),
        _ => Action::None,
    }
}

/// Applies an action to the application state.
///
/// Returns `true` if the application should continue, `false` if it should quit.
pub fn apply_action(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::None => {}
        Action::Quit => {
            state.should_quit = true;
        }
        Action::FocusUp => state.focus_up(),
        Action::FocusDown => state.focus_down(),
        Action::ScrollLeft => state.scroll_focused(-1),
        Action::ScrollRight => state.scroll_focused(1),
        Action::ScrollAllLeft => state.scroll_all(-1),
        Action::ScrollAllRight => state.scroll_all(1),
        Action::PageLeft => state.scroll_focused_page(-1),
        Action::PageRight => state.scroll_focused_page(1),
        Action::ScrollToStart => state.scroll_focused_to_start(),
        Action::Flip => state.flip_focused(),
        Action::NextOccurrence => state.next_occurrence(),
        Action::PreviousOccurrence => state.previous_occurrence(),
        Action::CenterOnGene => state.center_on_focused_gene(),
        Action::CenterOnCluster => state.center_on_cluster(),
        Action::ZoomIn => state.zoom_in(),
        Action::ZoomOut => state.zoom_out(),
        Action::CycleNameType => state.cycle_name_type(),
        Action::NextCluster => state.next_cluster(),
        Action::PreviousCluster => state.previous_cluster(),
        Action::ToggleHideNonContained => state.toggle_hide_non_contained(),
        Action::ToggleSuboptimal => state.toggle_suboptimal(),
        Action::ClearSelection => state.clear_selection(),
        Action::ShowHelp => state.show_help(),
        Action::DismissHelp => state.dismiss_help(),
        Action::EnterCommandMode => state.enter_command_mode(),
        Action::CommandChar(c) => state.command_input(c),
        Action::ExecuteCommand => state.execute_command(),
        Action::CancelCommand => state.cancel_command(),
        Action::CommandBackspace => state.command_backspace(),
        Action::Resize(_, _) => {
            // Resize is handled in the main loop with actual terminal dimensions
        }
    }

    !state.should_quit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::MultiTrackCoordinator;
    use crate::config::BrowserConfig;
    use crate::dataset::parse_dataset_str;
    use crate::model::NameType;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_navigation() {
        let mode = AppMode::Normal;

        assert_eq!(handle_key_event(key(KeyCode::Char('h')), &mode, false), Action::ScrollLeft);
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &mode, false), Action::FocusDown);
        assert_eq!(handle_key_event(key(KeyCode::Char('k')), &mode, false), Action::FocusUp);
        assert_eq!(handle_key_event(key(KeyCode::Char('l')), &mode, false), Action::ScrollRight);
        assert_eq!(handle_key_event(key(KeyCode::Char('L')), &mode, false), Action::ScrollAllRight);

        // Arrow keys mirror hjkl, shift scrolls all tracks
        assert_eq!(handle_key_event(key(KeyCode::Down), &mode, false), Action::FocusDown);
        assert_eq!(handle_key_event(key(KeyCode::Left), &mode, false), Action::ScrollLeft);
        let shifted = KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT);
        assert_eq!(handle_key_event(shifted, &mode, false), Action::ScrollAllLeft);
    }

    #[test]
    fn test_cluster_keys() {
        let mode = AppMode::Normal;

        assert_eq!(handle_key_event(key(KeyCode::Char('n')), &mode, false), Action::NextOccurrence);
        assert_eq!(handle_key_event(key(KeyCode::Char('N')), &mode, false), Action::PreviousOccurrence);
        assert_eq!(handle_key_event(key(KeyCode::Char(']')), &mode, false), Action::NextCluster);
        assert_eq!(handle_key_event(key(KeyCode::Char('[')), &mode, false), Action::PreviousCluster);
        assert_eq!(handle_key_event(key(KeyCode::Char('c')), &mode, false), Action::CenterOnGene);
        assert_eq!(handle_key_event(key(KeyCode::Char('C')), &mode, false), Action::CenterOnCluster);
        assert_eq!(handle_key_event(key(KeyCode::Char('f')), &mode, false), Action::Flip);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &mode, false), Action::ClearSelection);
    }

    #[test]
    fn test_view_keys() {
        let mode = AppMode::Normal;

        assert_eq!(handle_key_event(key(KeyCode::Char('+')), &mode, false), Action::ZoomIn);
        assert_eq!(handle_key_event(key(KeyCode::Char('=')), &mode, false), Action::ZoomIn);
        assert_eq!(handle_key_event(key(KeyCode::Char('-')), &mode, false), Action::ZoomOut);
        assert_eq!(handle_key_event(key(KeyCode::Char('t')), &mode, false), Action::CycleNameType);
        assert_eq!(handle_key_event(key(KeyCode::Home), &mode, false), Action::ScrollToStart);
        assert_eq!(handle_key_event(key(KeyCode::PageDown), &mode, false), Action::PageRight);
        assert_eq!(handle_key_event(key(KeyCode::Char('?')), &mode, false), Action::ShowHelp);
    }

    #[test]
    fn test_enter_command_mode() {
        let mode = AppMode::Normal;
        assert_eq!(handle_key_event(key(KeyCode::Char(':')), &mode, false), Action::EnterCommandMode);
    }

    #[test]
    fn test_command_mode_input() {
        let mode = AppMode::Command(String::new());

        // Normal mode keys are plain characters here
        assert_eq!(handle_key_event(key(KeyCode::Char('n')), &mode, false), Action::CommandChar('n'));
        assert_eq!(handle_key_event(key(KeyCode::Enter), &mode, false), Action::ExecuteCommand);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &mode, false), Action::CancelCommand);
        assert_eq!(handle_key_event(key(KeyCode::Backspace), &mode, false), Action::CommandBackspace);
    }

    #[test]
    fn test_ctrl_c_quit() {
        let mode = AppMode::Normal;
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c, &mode, false), Action::Quit);
    }

    #[test]
    fn test_dismiss_help() {
        let mode = AppMode::Normal;
        // Any key when help is shown should dismiss help
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), &mode, true), Action::DismissHelp);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &mode, true), Action::DismissHelp);
    }

    #[test]
    fn test_resize_event() {
        let mode = AppMode::Normal;
        assert_eq!(handle_event(Event::Resize(120, 40), &mode, false), Action::Resize(120, 40));
    }

    #[test]
    fn test_apply_action() {
        let dataset = parse_dataset_str(include_str!("../demos/three_genomes.json")).unwrap();
        let browser = MultiTrackCoordinator::new(dataset.genomes, dataset.clusters, 0, NameType::Id, 6, 60);
        let mut state = AppState::new(browser, "demo".to_string(), &BrowserConfig::default());

        assert!(apply_action(&mut state, Action::NextCluster));
        assert_eq!(state.browser.selection().unwrap().cluster_id, 1);
        assert!(apply_action(&mut state, Action::FocusDown));
        assert!(apply_action(&mut state, Action::Flip));
        assert!(state.browser.is_flipped(1));
        let center = state.browser.viewport(1).center();
        assert!(apply_action(&mut state, Action::ScrollAllRight));
        assert!(apply_action(&mut state, Action::CenterOnCluster));
        assert_eq!(state.browser.viewport(1).center(), center);
        assert!(apply_action(&mut state, Action::ClearSelection));
        assert!(state.browser.selection().is_none());
        assert!(!apply_action(&mut state, Action::Quit));
    }
}
