//! Pixel (terminal column) metrics shared by all genome tracks.
//!
//! Gene boxes are as wide as the longest label under the active naming mode
//! plus room for the strand arrow and the zoom padding. Every track reads the
//! same `CoordinateMetrics`, so a zoom or naming change stays consistent
//! across all viewports. The metrics are recomputed wholesale, never patched.

use crate::model::{max_label_length, Genome, NameType};

/// Columns taken by the strand arrow of a gene box.
pub const ARROW_WIDTH: usize = 1;
/// Gap on each side of a gene box or chromosome end symbol.
pub const HGAP: usize = 1;
/// Minimal width of the chromosome end symbol.
pub const CHROMOSOME_END_WIDTH: usize = 3;
/// Smallest zoom level.
pub const MIN_ZOOM: u16 = 0;
/// Largest zoom level.
pub const MAX_ZOOM: u16 = 6;
/// Default upper bound for label lengths.
pub const DEFAULT_MAX_GENE_NAME_LENGTH: usize = 6;

/// Derived widths for the current zoom level and naming mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMetrics {
    zoom: u16,
    name_type: NameType,
    max_label_length: usize,
    gene_element_width: usize,
}

impl CoordinateMetrics {
    /// Creates metrics for a known maximal label length.
    pub fn new(zoom: u16, name_type: NameType, max_label_length: usize) -> Self {
        let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        Self {
            zoom,
            name_type,
            max_label_length,
            gene_element_width: Self::element_width(zoom, max_label_length),
        }
    }

    /// Creates metrics from the labels of the loaded genomes.
    pub fn for_genomes(genomes: &[Genome], zoom: u16, name_type: NameType, label_cap: usize) -> Self {
        Self::new(zoom, name_type, max_label_length(genomes, name_type, label_cap))
    }

    fn element_width(zoom: u16, max_label_length: usize) -> usize {
        max_label_length.max(1) + ARROW_WIDTH + 2 * zoom as usize
    }

    pub fn zoom(&self) -> u16 {
        self.zoom
    }

    pub fn name_type(&self) -> NameType {
        self.name_type
    }

    pub fn max_label_length(&self) -> usize {
        self.max_label_length
    }

    /// Width of the gene box without gaps.
    pub fn gene_element_width(&self) -> usize {
        self.gene_element_width
    }

    /// Width one gene occupies on a track, gaps included.
    pub fn gene_width(&self) -> i64 {
        (self.gene_element_width + 2 * HGAP) as i64
    }

    /// Width of one chromosome start or end symbol, gaps included.
    pub fn chromosome_end_width(&self) -> i64 {
        (self.gene_element_width.max(CHROMOSOME_END_WIDTH) + 2 * HGAP) as i64
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < MAX_ZOOM
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > MIN_ZOOM
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_data::genome;

    #[test]
    fn test_widths() {
        let m = CoordinateMetrics::new(0, NameType::Id, 4);
        assert_eq!(m.gene_element_width(), 5);
        assert_eq!(m.gene_width(), 7);
        assert_eq!(m.chromosome_end_width(), 7);

        let m = CoordinateMetrics::new(2, NameType::Id, 4);
        assert_eq!(m.gene_element_width(), 9);
        assert_eq!(m.gene_width(), 11);
    }

    #[test]
    fn test_chromosome_end_has_minimal_width() {
        let m = CoordinateMetrics::new(0, NameType::Id, 0);
        assert_eq!(m.gene_element_width(), 2);
        assert_eq!(m.chromosome_end_width(), (CHROMOSOME_END_WIDTH + 2 * HGAP) as i64);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let m = CoordinateMetrics::new(99, NameType::Id, 1);
        assert_eq!(m.zoom(), MAX_ZOOM);
        assert!(!m.can_zoom_in());
        assert!(m.can_zoom_out());
    }

    #[test]
    fn test_for_genomes_uses_capped_label() {
        let genomes = vec![genome("a", &["1", "12345678"])];
        let m = CoordinateMetrics::for_genomes(&genomes, 0, NameType::Id, DEFAULT_MAX_GENE_NAME_LENGTH);
        assert_eq!(m.max_label_length(), 6);
        let m = CoordinateMetrics::for_genomes(&genomes, 0, NameType::Name, DEFAULT_MAX_GENE_NAME_LENGTH);
        assert_eq!(m.max_label_length(), 0);
    }
}
