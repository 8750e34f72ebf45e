//! Per-track viewport: scroll position and the gene it is centered on.
//!
//! A track is a canvas laid out as
//! `border | start c0 | genes of c0 | end c0 | start c1 | ... | border`.
//! The scroll position is the canvas column at the left edge of the visible
//! window. The controller always tracks one `(chromosome, gene)` pair and a
//! window of scroll values `[min_bound, max_bound]` that still count as
//! centered on that gene. Every recompute starts from the tracked pair, never
//! from a previous pixel value.
//!
//! Flipping reverses the gene order inside each chromosome. The chromosome
//! order is kept.

use crate::browser::ContentChanged;
use crate::metrics::CoordinateMetrics;
use crate::model::Genome;

/// Empty canvas on both sides of a genome.
pub const BORDER_SPACE: i64 = 10_000;

/// What lies under a canvas column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackElement {
    ChromosomeStart(usize),
    Gene { chromosome: usize, gene: usize },
    ChromosomeEnd(usize),
}

/// How the track marks the selected cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    /// No cluster selected
    #[default]
    None,
    /// A cluster is selected but has no occurrence in this genome
    Understated,
    /// Genes `start..end` (zero-based) of a chromosome belong to the occurrence
    Cluster {
        chromosome: usize,
        start: usize,
        end: usize,
        reference: bool,
    },
}

impl Highlight {
    /// Returns true if the gene is part of the highlighted occurrence.
    pub fn covers(&self, chromosome: usize, gene: usize) -> bool {
        match *self {
            Highlight::Cluster {
                chromosome: c,
                start,
                end,
                ..
            } => c == chromosome && (start..end).contains(&gene),
            _ => false,
        }
    }
}

/// Observable state of one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportState {
    /// Tracked gene, `None` only for a genome without genes
    pub center: Option<(usize, usize)>,
    pub scroll_position: i64,
    pub min_bound: i64,
    pub max_bound: i64,
    pub flipped: bool,
}

/// Scroll controller of one genome track.
#[derive(Debug, Clone)]
pub struct ViewportController {
    genome: usize,
    gene_numbers: Vec<usize>,
    visible_width: i64,
    state: ViewportState,
    highlight: Highlight,
}

impl ViewportController {
    /// Creates the viewport of a genome, scrolled to the start of the genome.
    pub fn new(genome_index: usize, genome: &Genome, metrics: &CoordinateMetrics, visible_width: usize) -> Self {
        let mut controller = Self {
            genome: genome_index,
            gene_numbers: genome.gene_numbers(),
            visible_width: visible_width as i64,
            state: ViewportState::default(),
            highlight: Highlight::None,
        };
        controller.scroll_to_initial_position(metrics);
        controller
    }

    pub fn genome_index(&self) -> usize {
        self.genome
    }

    pub fn gene_numbers(&self) -> &[usize] {
        &self.gene_numbers
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn scroll_position(&self) -> i64 {
        self.state.scroll_position
    }

    pub fn center(&self) -> Option<(usize, usize)> {
        self.state.center
    }

    pub fn is_flipped(&self) -> bool {
        self.state.flipped
    }

    pub fn visible_width(&self) -> i64 {
        self.visible_width
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub fn set_highlight(&mut self, highlight: Highlight) {
        self.highlight = highlight;
    }

    /// Returns true if the genome has no gene to center on.
    pub fn is_empty(&self) -> bool {
        self.gene_numbers.iter().all(|&n| n == 0)
    }

    /// Width of the empty border, at least one visible window.
    pub fn border(&self) -> i64 {
        BORDER_SPACE.max(self.visible_width)
    }

    /// Total canvas width of the genome.
    pub fn canvas_width(&self, metrics: &CoordinateMetrics) -> i64 {
        let genes: usize = self.gene_numbers.iter().sum();
        2 * self.border()
            + genes as i64 * metrics.gene_width()
            + 2 * self.gene_numbers.len() as i64 * metrics.chromosome_end_width()
    }

    /// Largest scroll value.
    pub fn scroll_max(&self, metrics: &CoordinateMetrics) -> i64 {
        (self.canvas_width(metrics) - self.visible_width).max(0)
    }

    /// Canvas offset of the first column of a chromosome's start symbol, border excluded.
    fn chromosome_offset(&self, metrics: &CoordinateMetrics, chromosome: usize) -> i64 {
        self.gene_numbers[..chromosome]
            .iter()
            .map(|&n| 2 * metrics.chromosome_end_width() + n as i64 * metrics.gene_width())
            .sum()
    }

    /// Scroll value that puts the middle of a gene in the middle of the window.
    ///
    /// Panics if the gene does not exist.
    pub fn center_position(&self, metrics: &CoordinateMetrics, chromosome: usize, gene: usize) -> i64 {
        let length = self.checked_length(chromosome, gene);
        let displayed = if self.state.flipped { length - 1 - gene } else { gene };
        let gene_width = metrics.gene_width();
        self.border() - self.visible_width / 2
            + self.chromosome_offset(metrics, chromosome)
            + metrics.chromosome_end_width()
            + displayed as i64 * gene_width
            + gene_width / 2
    }

    fn checked_length(&self, chromosome: usize, gene: usize) -> usize {
        match self.gene_numbers.get(chromosome) {
            Some(&length) if gene < length => length,
            _ => panic!(
                "center gene ({}, {}) out of range for genome {} with chromosomes {:?}",
                chromosome, gene, self.genome, self.gene_numbers
            ),
        }
    }

    /// Gene drawn right of the given one, crossing into the next non-empty chromosome.
    fn visual_next(&self, chromosome: usize, gene: usize) -> Option<(usize, usize)> {
        let length = self.gene_numbers[chromosome];
        if !self.state.flipped && gene + 1 < length {
            return Some((chromosome, gene + 1));
        }
        if self.state.flipped && gene > 0 {
            return Some((chromosome, gene - 1));
        }
        let (next, &length) = self
            .gene_numbers
            .iter()
            .enumerate()
            .skip(chromosome + 1)
            .find(|&(_, &n)| n > 0)?;
        Some((next, if self.state.flipped { length - 1 } else { 0 }))
    }

    /// Gene drawn left of the given one, crossing into the previous non-empty chromosome.
    fn visual_previous(&self, chromosome: usize, gene: usize) -> Option<(usize, usize)> {
        let length = self.gene_numbers[chromosome];
        if !self.state.flipped && gene > 0 {
            return Some((chromosome, gene - 1));
        }
        if self.state.flipped && gene + 1 < length {
            return Some((chromosome, gene + 1));
        }
        let (previous, &length) = self.gene_numbers[..chromosome]
            .iter()
            .enumerate()
            .rev()
            .find(|&(_, &n)| n > 0)?;
        Some((previous, if self.state.flipped { 0 } else { length - 1 }))
    }

    /// Genes in the order they are drawn.
    fn visual_genes(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.gene_numbers.iter().enumerate().flat_map(move |(c, &n)| {
            (0..n).map(move |v| (c, if self.state.flipped { n - 1 - v } else { v }))
        })
    }

    /// Tracks a gene and derives the bounds around its center position.
    fn set_center(&mut self, metrics: &CoordinateMetrics, chromosome: usize, gene: usize) -> i64 {
        let position = self.center_position(metrics, chromosome, gene);
        self.state.center = Some((chromosome, gene));
        self.state.min_bound = match self.visual_previous(chromosome, gene) {
            Some((c, g)) => self.center_position(metrics, c, g) + metrics.gene_width(),
            None => 0,
        };
        self.state.max_bound = match self.visual_next(chromosome, gene) {
            Some((c, g)) => self.center_position(metrics, c, g),
            None => self.scroll_max(metrics),
        };
        position
    }

    /// Centers the window on a gene.
    ///
    /// Ignored for a genome without genes. Panics if the gene does not exist.
    pub fn scroll_to_position(
        &mut self,
        metrics: &CoordinateMetrics,
        chromosome: usize,
        gene: usize,
    ) -> Option<ContentChanged> {
        if self.is_empty() {
            log::warn!("genome {} has no genes, ignoring center request", self.genome);
            return None;
        }
        let position = self.set_center(metrics, chromosome, gene);
        self.state.scroll_position = position;
        log::trace!(
            "genome {} centered on ({}, {}) at {} [{}, {}]",
            self.genome,
            chromosome,
            gene,
            position,
            self.state.min_bound,
            self.state.max_bound
        );
        Some(ContentChanged::ScrollValueChanged)
    }

    /// Moves the window by `delta` columns.
    ///
    /// The tracked gene follows one step at a time until the new scroll value
    /// lies inside its bounds, so any delta converges.
    pub fn adjust_scroll_position(&mut self, metrics: &CoordinateMetrics, delta: i64) -> Option<ContentChanged> {
        let (mut chromosome, mut gene) = self.state.center?;
        let position = (self.state.scroll_position + delta).clamp(0, self.scroll_max(metrics));

        let mut steps = 0usize;
        loop {
            let neighbour = if position < self.state.min_bound {
                self.visual_previous(chromosome, gene)
            } else if position > self.state.max_bound {
                self.visual_next(chromosome, gene)
            } else {
                break;
            };
            let Some((c, g)) = neighbour else { break };
            (chromosome, gene) = (c, g);
            self.set_center(metrics, chromosome, gene);
            steps += 1;
        }
        self.state.scroll_position = position;

        if steps > 0 {
            log::trace!(
                "genome {} scrolled by {}, center moved {} genes to ({}, {})",
                self.genome,
                delta,
                steps,
                chromosome,
                gene
            );
        }
        Some(ContentChanged::ScrollValueChanged)
    }

    /// Reverses the display direction, keeping the same gene centered.
    pub fn flip(&mut self, metrics: &CoordinateMetrics) -> Option<ContentChanged> {
        self.state.flipped = !self.state.flipped;
        match self.state.center {
            Some((chromosome, gene)) => self.scroll_to_position(metrics, chromosome, gene),
            None => Some(ContentChanged::ScrollValueChanged),
        }
    }

    /// Flips the track if its direction differs from `flipped`.
    pub fn set_flipped(&mut self, metrics: &CoordinateMetrics, flipped: bool) -> Option<ContentChanged> {
        if self.state.flipped == flipped {
            return None;
        }
        self.flip(metrics)
    }

    /// Adopts a new visible width and re-centers on the tracked gene.
    pub fn resize(&mut self, metrics: &CoordinateMetrics, visible_width: usize) -> Option<ContentChanged> {
        self.visible_width = visible_width as i64;
        self.recenter(metrics).map(|_| ContentChanged::ScrollValueChanged)
    }

    /// Re-centers after the metrics changed (zoom or naming mode).
    pub fn refresh(&mut self, metrics: &CoordinateMetrics) -> Option<ContentChanged> {
        self.recenter(metrics).map(|_| ContentChanged::ZoomFactorChanged)
    }

    fn recenter(&mut self, metrics: &CoordinateMetrics) -> Option<ContentChanged> {
        let (chromosome, gene) = self.state.center?;
        self.scroll_to_position(metrics, chromosome, gene)
    }

    /// Centers the gene that puts the start of the genome at the left edge.
    pub fn scroll_to_initial_position(&mut self, metrics: &CoordinateMetrics) -> Option<ContentChanged> {
        let half = self.visible_width / 2;
        let gene_width = metrics.gene_width();
        let end_width = metrics.chromosome_end_width();

        let mut target = None;
        for (chromosome, gene) in self.visual_genes() {
            let displayed = if self.state.flipped {
                self.gene_numbers[chromosome] - 1 - gene
            } else {
                gene
            };
            let offset = self.chromosome_offset(metrics, chromosome)
                + end_width
                + displayed as i64 * gene_width
                + gene_width / 2;
            target = Some((chromosome, gene));
            if offset >= half {
                break;
            }
        }
        let Some((chromosome, gene)) = target else {
            self.state = ViewportState {
                flipped: self.state.flipped,
                ..ViewportState::default()
            };
            return None;
        };
        self.scroll_to_position(metrics, chromosome, gene)
    }

    /// Element under a canvas column and the column's offset inside it.
    pub fn locate(&self, metrics: &CoordinateMetrics, position: i64) -> Option<(TrackElement, i64)> {
        let mut x = position - self.border();
        if x < 0 {
            return None;
        }
        let gene_width = metrics.gene_width();
        let end_width = metrics.chromosome_end_width();
        for (chromosome, &length) in self.gene_numbers.iter().enumerate() {
            if x < end_width {
                return Some((TrackElement::ChromosomeStart(chromosome), x));
            }
            x -= end_width;
            let genes = length as i64 * gene_width;
            if x < genes {
                let displayed = (x / gene_width) as usize;
                let gene = if self.state.flipped { length - 1 - displayed } else { displayed };
                return Some((TrackElement::Gene { chromosome, gene }, x % gene_width));
            }
            x -= genes;
            if x < end_width {
                return Some((TrackElement::ChromosomeEnd(chromosome), x));
            }
            x -= end_width;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_data::sized_genome;
    use crate::model::NameType;

    // gene width 7, chromosome end width 7
    fn metrics() -> CoordinateMetrics {
        CoordinateMetrics::new(0, NameType::Id, 4)
    }

    fn viewport(sizes: &[usize]) -> ViewportController {
        ViewportController::new(0, &sized_genome("g", sizes), &metrics(), 80)
    }

    fn assert_in_bounds(vp: &ViewportController) {
        let s = vp.state();
        assert!(
            s.min_bound <= s.scroll_position && s.scroll_position <= s.max_bound,
            "{:?}",
            s
        );
    }

    #[test]
    fn test_center_position() {
        let m = metrics();
        let mut vp = viewport(&[3, 2]);
        assert_eq!(vp.center_position(&m, 0, 0), 10_000 - 40 + 7 + 3);
        assert_eq!(vp.center_position(&m, 1, 1), 10_000 - 40 + 35 + 7 + 7 + 3);
        vp.flip(&m);
        assert_eq!(vp.center_position(&m, 0, 0), 10_000 - 40 + 7 + 14 + 3);
        assert_eq!(vp.center_position(&m, 1, 1), 10_000 - 40 + 35 + 7 + 3);
    }

    #[test]
    fn test_canvas_and_scroll_max() {
        let m = metrics();
        let vp = viewport(&[3, 2]);
        assert_eq!(vp.canvas_width(&m), 20_000 + 35 + 28);
        assert_eq!(vp.scroll_max(&m), 20_000 + 35 + 28 - 80);
    }

    #[test]
    fn test_bounds_inside_chromosome() {
        let m = metrics();
        let mut vp = viewport(&[3, 2]);
        vp.scroll_to_position(&m, 0, 1);
        let s = *vp.state();
        assert_eq!(s.scroll_position, 9977);
        assert_eq!((s.min_bound, s.max_bound), (9977, 9984));
    }

    #[test]
    fn test_bounds_across_chromosome_boundary() {
        let m = metrics();
        let mut vp = viewport(&[3, 2]);
        vp.scroll_to_position(&m, 0, 2);
        assert_eq!(vp.state().max_bound, 9984 + 7 + 14);
        vp.scroll_to_position(&m, 1, 0);
        assert_eq!(vp.state().min_bound, 10_005 - 14);
    }

    #[test]
    fn test_bounds_at_outer_edges() {
        let m = metrics();
        let mut vp = viewport(&[3, 2]);
        vp.scroll_to_position(&m, 0, 0);
        assert_eq!(vp.state().min_bound, 0);
        vp.scroll_to_position(&m, 1, 1);
        assert_eq!(vp.state().max_bound, vp.scroll_max(&m));

        // Flipped, the outer genes are the other way round
        vp.flip(&m);
        assert_eq!(vp.state().center, Some((1, 1)));
        vp.scroll_to_position(&m, 0, 2);
        assert_eq!(vp.state().min_bound, 0);
        vp.scroll_to_position(&m, 1, 0);
        assert_eq!(vp.state().max_bound, vp.scroll_max(&m));
    }

    #[test]
    fn test_adjust_steps_one_gene() {
        let m = metrics();
        let mut vp = viewport(&[3, 2]);
        vp.scroll_to_position(&m, 0, 1);
        assert_eq!(vp.adjust_scroll_position(&m, 8), Some(ContentChanged::ScrollValueChanged));
        assert_eq!(vp.center(), Some((0, 2)));
        assert_eq!(vp.scroll_position(), 9985);
        assert_in_bounds(&vp);

        vp.scroll_to_position(&m, 0, 1);
        vp.adjust_scroll_position(&m, -8);
        assert_eq!(vp.center(), Some((0, 0)));
        assert_in_bounds(&vp);

        // Within bounds the center stays
        vp.scroll_to_position(&m, 0, 1);
        vp.adjust_scroll_position(&m, 3);
        assert_eq!(vp.center(), Some((0, 1)));
    }

    #[test]
    fn test_adjust_direction_follows_flip() {
        let m = metrics();
        let mut vp = viewport(&[3, 2]);
        vp.flip(&m);
        vp.scroll_to_position(&m, 0, 1);
        vp.adjust_scroll_position(&m, 8);
        assert_eq!(vp.center(), Some((0, 0)));
        vp.adjust_scroll_position(&m, 21);
        assert_eq!(vp.center(), Some((1, 1)));
        assert_in_bounds(&vp);
    }

    #[test]
    fn test_large_delta_converges() {
        let m = metrics();
        let mut vp = viewport(&[3, 0, 4, 2]);
        vp.scroll_to_position(&m, 0, 0);
        vp.adjust_scroll_position(&m, 1_000);
        assert_eq!(vp.center(), Some((3, 1)));
        assert_in_bounds(&vp);

        vp.adjust_scroll_position(&m, 1_000_000);
        assert_eq!(vp.scroll_position(), vp.scroll_max(&m));
        assert_in_bounds(&vp);

        vp.adjust_scroll_position(&m, -1_000_000);
        assert_eq!(vp.scroll_position(), 0);
        assert_eq!(vp.center(), Some((0, 0)));
        assert_in_bounds(&vp);
    }

    #[test]
    fn test_small_deltas_step_one_gene_per_crossing() {
        let m = metrics();
        for flipped in [false, true] {
            let mut vp = viewport(&[3, 0, 4, 2]);
            if flipped {
                vp.flip(&m);
            }
            let order: Vec<(usize, usize)> = vp.visual_genes().collect();
            let first = order[0];
            vp.scroll_to_position(&m, first.0, first.1);

            let mut index = 0;
            for _ in 0..200 {
                vp.adjust_scroll_position(&m, 1);
                assert_in_bounds(&vp);
                let now = order.iter().position(|&g| Some(g) == vp.center()).unwrap();
                assert!(now == index || now == index + 1);
                index = now;
            }
            assert!(index >= 3);
        }
    }

    #[test]
    fn test_random_walk_keeps_invariant() {
        let m = metrics();
        let mut vp = viewport(&[5, 1, 3]);
        for delta in [-50, 7, 13, -1, 100, -7, 3, 12_000, -4, -30_000, 9, 9, 9] {
            vp.adjust_scroll_position(&m, delta);
            assert_in_bounds(&vp);
        }
    }

    #[test]
    fn test_flip_is_involutive() {
        let m = metrics();
        let mut vp = viewport(&[3, 2]);
        vp.scroll_to_position(&m, 1, 0);
        let before = *vp.state();
        vp.flip(&m);
        assert!(vp.is_flipped());
        assert_eq!(vp.center(), Some((1, 0)));
        assert_ne!(vp.scroll_position(), before.scroll_position);
        vp.flip(&m);
        assert_eq!(*vp.state(), before);
    }

    #[test]
    fn test_set_flipped() {
        let m = metrics();
        let mut vp = viewport(&[3]);
        assert_eq!(vp.set_flipped(&m, false), None);
        assert!(vp.set_flipped(&m, true).is_some());
        assert!(vp.is_flipped());
    }

    #[test]
    fn test_resize_and_refresh_keep_center() {
        let mut m = metrics();
        let mut vp = viewport(&[3, 2]);
        vp.scroll_to_position(&m, 1, 0);
        assert_eq!(vp.resize(&m, 120), Some(ContentChanged::ScrollValueChanged));
        assert_eq!(vp.center(), Some((1, 0)));
        assert_eq!(vp.scroll_position(), vp.center_position(&m, 1, 0));

        m = CoordinateMetrics::new(3, NameType::Id, 4);
        assert_eq!(vp.refresh(&m), Some(ContentChanged::ZoomFactorChanged));
        assert_eq!(vp.center(), Some((1, 0)));
        assert_eq!(vp.scroll_position(), vp.center_position(&m, 1, 0));
        assert_in_bounds(&vp);
    }

    #[test]
    fn test_wide_window_keeps_positions_on_canvas() {
        let m = metrics();
        let mut vp = viewport(&[2]);
        vp.resize(&m, 30_000);
        assert!(vp.border() >= 30_000);
        for gene in 0..2 {
            vp.scroll_to_position(&m, 0, gene);
            assert!(vp.scroll_position() >= 0);
            assert!(vp.scroll_position() <= vp.scroll_max(&m));
            assert_in_bounds(&vp);
        }
    }

    #[test]
    fn test_initial_position() {
        let m = metrics();
        let vp = viewport(&[20]);
        // 7 + 7 * v + 3 >= 40
        assert_eq!(vp.center(), Some((0, 5)));
        assert!(vp.scroll_position() >= vp.border());

        let short = viewport(&[2]);
        assert_eq!(short.center(), Some((0, 1)));
        assert_in_bounds(&short);
        assert!(short.scroll_position() <= short.scroll_max(&m));
    }

    fn element_at(vp: &ViewportController, m: &CoordinateMetrics, position: i64) -> Option<TrackElement> {
        vp.locate(m, position).map(|(element, _)| element)
    }

    #[test]
    fn test_empty_genome() {
        let m = metrics();
        let mut vp = viewport(&[0, 0]);
        assert!(vp.is_empty());
        assert_eq!(vp.center(), None);
        assert_eq!(vp.state().min_bound, 0);
        assert_eq!(vp.state().max_bound, 0);
        assert_eq!(vp.scroll_to_position(&m, 0, 0), None);
        assert_eq!(vp.adjust_scroll_position(&m, 50), None);
        assert_eq!(vp.resize(&m, 100), None);
        assert_eq!(vp.scroll_position(), 0);

        let none = ViewportController::new(1, &Genome::new("none", vec![]), &m, 80);
        assert_eq!(none.center(), None);
        assert_eq!(element_at(&none, &m, none.border()), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_center_out_of_range_is_fatal() {
        let m = metrics();
        let mut vp = viewport(&[3, 2]);
        vp.scroll_to_position(&m, 1, 2);
    }

    #[test]
    fn test_locate_elements() {
        let m = metrics();
        let mut vp = viewport(&[3, 2]);
        let border = vp.border();
        assert_eq!(element_at(&vp, &m, border - 1), None);
        assert_eq!(element_at(&vp, &m, border), Some(TrackElement::ChromosomeStart(0)));
        assert_eq!(
            vp.locate(&m, border + 7 + 9),
            Some((TrackElement::Gene { chromosome: 0, gene: 1 }, 2))
        );
        assert_eq!(element_at(&vp, &m, border + 28), Some(TrackElement::ChromosomeEnd(0)));
        assert_eq!(element_at(&vp, &m, border + 35), Some(TrackElement::ChromosomeStart(1)));
        assert_eq!(element_at(&vp, &m, border + 63), None);

        vp.scroll_to_position(&m, 1, 1);
        let middle = vp.scroll_position() + vp.visible_width() / 2;
        assert_eq!(
            element_at(&vp, &m, middle),
            Some(TrackElement::Gene { chromosome: 1, gene: 1 })
        );

        vp.flip(&m);
        assert_eq!(
            element_at(&vp, &m, border + 7),
            Some(TrackElement::Gene { chromosome: 0, gene: 2 })
        );
        let middle = vp.scroll_position() + vp.visible_width() / 2;
        assert_eq!(
            element_at(&vp, &m, middle),
            Some(TrackElement::Gene { chromosome: 1, gene: 1 })
        );
    }

    #[test]
    fn test_highlight_covers() {
        let h = Highlight::Cluster {
            chromosome: 1,
            start: 2,
            end: 4,
            reference: false,
        };
        assert!(h.covers(1, 2));
        assert!(h.covers(1, 3));
        assert!(!h.covers(1, 4));
        assert!(!h.covers(0, 2));
        assert!(!Highlight::Understated.covers(0, 0));
    }
}
