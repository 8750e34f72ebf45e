//! # clusterview - Terminal Gene Cluster Browser
//!
//! Shows several genomes side by side as tracks of ordered genes and keeps
//! the occurrences of a selected gene cluster aligned across all of them.
//!
//! ## Architecture
//!
//! The coordinate engine is independent of the terminal:
//! - `model`: Genes, chromosomes, genomes and cluster occurrences
//! - `metrics`: Character widths derived from zoom and label length
//! - `selection`: The chosen occurrence per genome, flips and the alignment anchor
//! - `layout`: Shared window width, per-genome offsets and paint slots
//! - `viewport`: Per-track scroll position kept centered on a tracked gene
//! - `browser`: Fans navigation intents out to all tracks and publishes changes
//!
//! Around it sits the terminal application:
//! - `dataset` / `config`: JSON dataset and TOML settings loading
//! - `state`: Application state (focus, mode, status)
//! - `event`: Keyboard event handling (Vim-style navigation)
//! - `ui`: TUI rendering with ratatui
//! - `controller`: Orchestration of the main loop

pub mod browser;
pub mod config;
pub mod controller;
pub mod dataset;
pub mod event;
pub mod layout;
pub mod metrics;
pub mod model;
pub mod selection;
pub mod state;
pub mod ui;
pub mod viewport;
