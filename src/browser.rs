//! Coordination of all genome tracks.
//!
//! `MultiTrackCoordinator` owns the dataset, the shared metrics, one
//! viewport per genome and the current cluster selection. Every navigation
//! intent goes through it. An intent touches the relevant viewports and then
//! publishes exactly one aggregated `ContentChanged` to the subscribed
//! listeners.

use crate::layout::ClusterAlignmentCalculator;
use crate::metrics::CoordinateMetrics;
use crate::model::{GeneCluster, GeneFamily, Genome, NameType};
use crate::selection::ClusterOccurrenceSelection;
use crate::viewport::{Highlight, ViewportController};

/// Notification that the drawn content changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContentChanged {
    /// One or more scroll positions moved
    ScrollValueChanged,
    /// Widths changed (zoom, naming mode, resize of the whole view)
    ZoomFactorChanged,
}

impl ContentChanged {
    /// Combines two notifications; a width change outranks a scroll change.
    pub fn merge(a: Option<Self>, b: Option<Self>) -> Option<Self> {
        a.max(b)
    }
}

/// Receives content change notifications.
pub trait ContentListener {
    fn content_changed(&mut self, event: ContentChanged);
}

impl<F: FnMut(ContentChanged)> ContentListener for F {
    fn content_changed(&mut self, event: ContentChanged) {
        (*self)(event)
    }
}

/// Fans navigation intents out to the viewports of all genomes.
pub struct MultiTrackCoordinator {
    genomes: Vec<Genome>,
    clusters: Vec<GeneCluster>,
    metrics: CoordinateMetrics,
    label_cap: usize,
    viewports: Vec<ViewportController>,
    selection: Option<ClusterOccurrenceSelection>,
    hide_non_contained: bool,
    listeners: Vec<Box<dyn ContentListener>>,
}

impl MultiTrackCoordinator {
    /// Creates one viewport per genome, each showing the start of its genome.
    pub fn new(
        genomes: Vec<Genome>,
        clusters: Vec<GeneCluster>,
        zoom: u16,
        name_type: NameType,
        label_cap: usize,
        visible_width: usize,
    ) -> Self {
        let metrics = CoordinateMetrics::for_genomes(&genomes, zoom, name_type, label_cap);
        let viewports = genomes
            .iter()
            .enumerate()
            .map(|(i, genome)| ViewportController::new(i, genome, &metrics, visible_width))
            .collect();
        log::debug!(
            "browser created with {} genomes, {} clusters, gene width {}",
            genomes.len(),
            clusters.len(),
            metrics.gene_width()
        );
        Self {
            genomes,
            clusters,
            metrics,
            label_cap,
            viewports,
            selection: None,
            hide_non_contained: false,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener for content changes.
    pub fn subscribe(&mut self, listener: Box<dyn ContentListener>) {
        self.listeners.push(listener);
    }

    fn publish(&mut self, change: Option<ContentChanged>) -> Option<ContentChanged> {
        if let Some(event) = change {
            for listener in self.listeners.iter_mut() {
                listener.content_changed(event);
            }
        }
        change
    }

    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    pub fn clusters(&self) -> &[GeneCluster] {
        &self.clusters
    }

    pub fn cluster(&self, cluster_id: usize) -> Option<&GeneCluster> {
        self.clusters.iter().find(|c| c.id == cluster_id)
    }

    pub fn metrics(&self) -> &CoordinateMetrics {
        &self.metrics
    }

    pub fn track_count(&self) -> usize {
        self.viewports.len()
    }

    pub fn viewport(&self, genome: usize) -> &ViewportController {
        &self.viewports[genome]
    }

    pub fn viewports(&self) -> &[ViewportController] {
        &self.viewports
    }

    pub fn selection(&self) -> Option<&ClusterOccurrenceSelection> {
        self.selection.as_ref()
    }

    /// The cluster of the current selection.
    pub fn selected_cluster(&self) -> Option<&GeneCluster> {
        self.cluster(self.selection.as_ref()?.cluster_id)
    }

    /// Alignment calculator for the current selection.
    pub fn calculator(&self) -> Option<ClusterAlignmentCalculator<'_>> {
        let cluster = self.selected_cluster()?;
        Some(ClusterAlignmentCalculator::new(&self.genomes, cluster))
    }

    /// Scrolls, flips and highlights the given tracks to show the selection.
    fn show_selection(&mut self, tracks: &[usize]) -> Option<ContentChanged> {
        let selection = self.selection.as_ref()?;
        let cluster = self.clusters.iter().find(|c| c.id == selection.cluster_id)?;

        let mut changed = None;
        for &genome in tracks {
            let viewport = &mut self.viewports[genome];
            changed = ContentChanged::merge(
                changed,
                viewport.set_flipped(&self.metrics, selection.is_flipped(genome)),
            );

            let shown = selection
                .subsequence(cluster, genome)
                .and_then(|s| s.gene_range().map(|range| (s, range)));
            let Some((subsequence, range)) = shown else {
                viewport.set_highlight(Highlight::Understated);
                continue;
            };
            viewport.set_highlight(Highlight::Cluster {
                chromosome: subsequence.chromosome,
                start: range.start,
                end: range.end,
                reference: genome == cluster.reference_genome,
            });
            let gene = selection
                .anchor_position(genome)
                .unwrap_or_else(|| subsequence.middle_gene());
            changed = ContentChanged::merge(
                changed,
                viewport.scroll_to_position(&self.metrics, subsequence.chromosome, gene),
            );
        }
        changed
    }

    fn all_tracks(&self) -> Vec<usize> {
        (0..self.viewports.len()).collect()
    }

    /// Selects a cluster with the first occurrence in every genome.
    ///
    /// Tracks keep their current direction.
    pub fn select_cluster(&mut self, cluster_id: usize, include_suboptimal: bool) -> Option<ContentChanged> {
        let Some(cluster) = self.cluster(cluster_id) else {
            log::warn!("no cluster with id {}", cluster_id);
            return None;
        };
        let mut selection = ClusterOccurrenceSelection::default_for(cluster, include_suboptimal);
        selection.assert_genome_count(self.genomes.len());
        selection.flipped = self.viewports.iter().map(|v| v.is_flipped()).collect();
        log::debug!(
            "selected cluster {} (support {})",
            cluster_id,
            cluster.support(include_suboptimal)
        );

        self.selection = Some(selection);
        let tracks = self.all_tracks();
        let changed = self.show_selection(&tracks);
        self.publish(changed)
    }

    /// Switches between optimal and all occurrences of the selected cluster.
    pub fn set_include_suboptimal(&mut self, include_suboptimal: bool) -> Option<ContentChanged> {
        let cluster_id = self.selection.as_ref()?.cluster_id;
        self.select_cluster(cluster_id, include_suboptimal)
    }

    /// Shows another candidate occurrence in one genome.
    pub fn select_occurrence(&mut self, genome: usize, occurrence: usize) -> Option<ContentChanged> {
        let selection = self.selection.as_mut()?;
        let cluster = self.clusters.iter().find(|c| c.id == selection.cluster_id)?;
        if !selection.select_occurrence(&self.genomes, cluster, genome, occurrence) {
            log::warn!("genome {} has no occurrence {}", genome, occurrence);
            return None;
        }
        let changed = self.show_selection(&[genome]);
        self.publish(changed)
    }

    pub fn can_select_next(&self, genome: usize) -> bool {
        match (self.selection.as_ref(), self.selected_cluster()) {
            (Some(selection), Some(cluster)) => selection.can_select_next(cluster, genome),
            _ => false,
        }
    }

    pub fn can_select_previous(&self, genome: usize) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|s| s.can_select_previous(genome))
    }

    /// Shows the next candidate occurrence in one genome.
    pub fn next_occurrence(&mut self, genome: usize) -> Option<ContentChanged> {
        if !self.can_select_next(genome) {
            return None;
        }
        let current = self.selection.as_ref()?.subselection[genome]?;
        self.select_occurrence(genome, current + 1)
    }

    /// Shows the previous candidate occurrence in one genome.
    pub fn previous_occurrence(&mut self, genome: usize) -> Option<ContentChanged> {
        if !self.can_select_previous(genome) {
            return None;
        }
        let current = self.selection.as_ref()?.subselection[genome]?;
        self.select_occurrence(genome, current - 1)
    }

    /// Brings every track back to the selected occurrences.
    ///
    /// The chosen occurrences, the anchor and the flips are kept.
    pub fn center_on_cluster(&mut self) -> Option<ContentChanged> {
        let tracks = self.all_tracks();
        let changed = self.show_selection(&tracks);
        self.publish(changed)
    }

    /// Families of the occurrence shown in one genome, in gene order.
    ///
    /// Duplicates and the unknown family are left out. Empty if the genome
    /// has no selected occurrence.
    pub fn shown_families(&self, genome: usize) -> Vec<&GeneFamily> {
        let (Some(selection), Some(cluster)) = (self.selection.as_ref(), self.selected_cluster()) else {
            return Vec::new();
        };
        let Some(subsequence) = selection.subsequence(cluster, genome) else {
            return Vec::new();
        };
        let mut families: Vec<&GeneFamily> = Vec::new();
        for gene in self.genomes[genome].subsequence_genes(subsequence) {
            if !gene.family.is_unknown() && !families.contains(&&gene.family) {
                families.push(&gene.family);
            }
        }
        families
    }

    /// Aligns every track of the selection on a gene family.
    pub fn center_on_gene_family(&mut self, family: &GeneFamily) -> Option<ContentChanged> {
        let selection = self.selection.as_mut()?;
        let cluster = self.clusters.iter().find(|c| c.id == selection.cluster_id)?;
        selection.center_on(&self.genomes, cluster, family);

        let tracks = self.all_tracks();
        let changed = self.show_selection(&tracks);
        self.publish(changed)
    }

    /// Reverses the display direction of one track.
    pub fn flip(&mut self, genome: usize) -> Option<ContentChanged> {
        let changed = self.viewports[genome].flip(&self.metrics);
        let flipped = self.viewports[genome].is_flipped();
        if let Some(selection) = self.selection.as_mut() {
            selection.flipped[genome] = flipped;
        }
        log::debug!("genome {} flipped: {}", genome, flipped);
        self.publish(changed)
    }

    /// Scrolls one track.
    pub fn scroll(&mut self, genome: usize, delta: i64) -> Option<ContentChanged> {
        let changed = self.viewports[genome].adjust_scroll_position(&self.metrics, delta);
        self.publish(changed)
    }

    /// Scrolls all tracks by the same amount.
    pub fn scroll_all(&mut self, delta: i64) -> Option<ContentChanged> {
        let mut changed = None;
        for viewport in self.viewports.iter_mut() {
            changed = ContentChanged::merge(changed, viewport.adjust_scroll_position(&self.metrics, delta));
        }
        self.publish(changed)
    }

    /// Brings one track back to the start of its genome.
    pub fn scroll_to_start(&mut self, genome: usize) -> Option<ContentChanged> {
        let changed = self.viewports[genome].scroll_to_initial_position(&self.metrics);
        self.publish(changed)
    }

    pub fn resize(&mut self, genome: usize, visible_width: usize) -> Option<ContentChanged> {
        let changed = self.viewports[genome].resize(&self.metrics, visible_width);
        self.publish(changed)
    }

    /// Adopts a new visible width on every track.
    pub fn resize_all(&mut self, visible_width: usize) -> Option<ContentChanged> {
        let mut changed = None;
        for viewport in self.viewports.iter_mut() {
            changed = ContentChanged::merge(changed, viewport.resize(&self.metrics, visible_width));
        }
        self.publish(changed.map(|_| ContentChanged::ZoomFactorChanged))
    }

    fn replace_metrics(&mut self, metrics: CoordinateMetrics) -> Option<ContentChanged> {
        if metrics == self.metrics {
            return None;
        }
        log::debug!(
            "metrics changed: zoom {}, names {}, gene width {}",
            metrics.zoom(),
            metrics.name_type(),
            metrics.gene_width()
        );
        self.metrics = metrics;
        for viewport in self.viewports.iter_mut() {
            viewport.refresh(&self.metrics);
        }
        self.publish(Some(ContentChanged::ZoomFactorChanged))
    }

    pub fn set_zoom(&mut self, zoom: u16) -> Option<ContentChanged> {
        let metrics = CoordinateMetrics::new(zoom, self.metrics.name_type(), self.metrics.max_label_length());
        self.replace_metrics(metrics)
    }

    pub fn zoom_in(&mut self) -> Option<ContentChanged> {
        if !self.metrics.can_zoom_in() {
            return None;
        }
        self.set_zoom(self.metrics.zoom() + 1)
    }

    pub fn zoom_out(&mut self) -> Option<ContentChanged> {
        if !self.metrics.can_zoom_out() {
            return None;
        }
        self.set_zoom(self.metrics.zoom() - 1)
    }

    /// Switches the gene labels; box widths follow the longest new label.
    pub fn set_name_type(&mut self, name_type: NameType) -> Option<ContentChanged> {
        let metrics = CoordinateMetrics::for_genomes(&self.genomes, self.metrics.zoom(), name_type, self.label_cap);
        self.replace_metrics(metrics)
    }

    /// Drops the selection, its highlights and all flips.
    pub fn clear_selection(&mut self) -> Option<ContentChanged> {
        self.selection = None;
        let mut changed = None;
        for viewport in self.viewports.iter_mut() {
            viewport.set_highlight(Highlight::None);
            changed = ContentChanged::merge(changed, viewport.set_flipped(&self.metrics, false));
        }
        self.publish(changed.or(Some(ContentChanged::ScrollValueChanged)))
    }

    pub fn hide_non_contained(&self) -> bool {
        self.hide_non_contained
    }

    pub fn set_hide_non_contained(&mut self, hide: bool) -> Option<ContentChanged> {
        if self.hide_non_contained == hide {
            return None;
        }
        self.hide_non_contained = hide;
        self.publish(Some(ContentChanged::ZoomFactorChanged))
    }

    /// Genomes shown as tracks; without the filter or a selection all of them.
    pub fn visible_tracks(&self) -> Vec<usize> {
        match (&self.selection, self.hide_non_contained) {
            (Some(selection), true) => (0..self.viewports.len())
                .filter(|&i| selection.is_included(i))
                .collect(),
            _ => self.all_tracks(),
        }
    }

    /// Largest scroll value over all tracks.
    pub fn scroll_maximum(&self) -> i64 {
        self.viewports
            .iter()
            .map(|v| v.scroll_max(&self.metrics))
            .max()
            .unwrap_or(0)
    }

    /// Widest visible window over all tracks.
    pub fn scroll_width(&self) -> i64 {
        self.viewports.iter().map(|v| v.visible_width()).max().unwrap_or(0)
    }

    pub fn scroll_value(&self, genome: usize) -> i64 {
        self.viewports[genome].scroll_position()
    }

    pub fn is_flipped(&self, genome: usize) -> bool {
        self.viewports[genome].is_flipped()
    }

    pub fn gene_width(&self) -> i64 {
        self.metrics.gene_width()
    }

    pub fn gene_numbers(&self, genome: usize) -> &[usize] {
        self.viewports[genome].gene_numbers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_data::genome;
    use crate::model::{Chromosome, Gene, GeneClusterOccurrence, Orientation, Subsequence};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn genomes() -> Vec<Genome> {
        vec![
            genome("A", &["x", "k", "y", "k", "w"]),
            Genome::new(
                "B",
                vec![Chromosome::new(
                    "c",
                    vec![
                        Gene::new("k", Orientation::Negative),
                        Gene::new("z", Orientation::Positive),
                    ],
                )],
            ),
            genome("C", &["q", "q"]),
        ]
    }

    fn clusters() -> Vec<GeneCluster> {
        vec![
            GeneCluster::new(
                1,
                0,
                GeneClusterOccurrence::new(vec![
                    vec![Subsequence::new(0, 1, 3, 0), Subsequence::new(0, 4, 5, 1)],
                    vec![Subsequence::new(0, 1, 2, 0)],
                    vec![],
                ]),
            ),
            GeneCluster::new(
                2,
                1,
                GeneClusterOccurrence::new(vec![vec![], vec![Subsequence::new(0, 2, 2, 0)], vec![]]),
            ),
        ]
    }

    fn browser() -> (MultiTrackCoordinator, Rc<RefCell<Vec<ContentChanged>>>) {
        let mut browser = MultiTrackCoordinator::new(genomes(), clusters(), 0, NameType::Id, 6, 60);
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        browser.subscribe(Box::new(move |event: ContentChanged| sink.borrow_mut().push(event)));
        (browser, events)
    }

    #[test]
    fn test_merge_prefers_zoom() {
        use ContentChanged::*;
        assert_eq!(ContentChanged::merge(None, None), None);
        assert_eq!(ContentChanged::merge(Some(ScrollValueChanged), None), Some(ScrollValueChanged));
        assert_eq!(
            ContentChanged::merge(Some(ScrollValueChanged), Some(ZoomFactorChanged)),
            Some(ZoomFactorChanged)
        );
    }

    #[test]
    fn test_select_cluster_centers_and_highlights() {
        let (mut b, events) = browser();
        let c_center = b.viewport(2).center();
        assert_eq!(b.select_cluster(1, true), Some(ContentChanged::ScrollValueChanged));
        assert_eq!(events.borrow().len(), 1);

        assert_eq!(b.viewport(0).center(), Some((0, 1)));
        assert_eq!(b.viewport(1).center(), Some((0, 0)));
        assert_eq!(b.viewport(2).center(), c_center);
        assert_eq!(
            b.viewport(0).highlight(),
            Highlight::Cluster {
                chromosome: 0,
                start: 0,
                end: 3,
                reference: true
            }
        );
        assert!(matches!(b.viewport(1).highlight(), Highlight::Cluster { reference: false, .. }));
        assert_eq!(b.viewport(2).highlight(), Highlight::Understated);
        assert_eq!(b.calculator().unwrap().compute_paint_width(b.selection().unwrap()), 3);
    }

    #[test]
    fn test_unknown_cluster_is_ignored() {
        let (mut b, events) = browser();
        assert_eq!(b.select_cluster(42, true), None);
        assert!(b.selection().is_none());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_next_previous_occurrence() {
        let (mut b, events) = browser();
        b.select_cluster(1, true);
        assert!(b.can_select_next(0));
        assert!(!b.can_select_previous(0));
        assert!(!b.can_select_next(2));

        assert!(b.next_occurrence(0).is_some());
        assert_eq!(b.selection().unwrap().subselection[0], Some(1));
        // middle of genes 3..5
        assert_eq!(b.viewport(0).center(), Some((0, 3)));
        assert!(b.viewport(0).highlight().covers(0, 4));
        assert_eq!(b.next_occurrence(0), None);

        assert!(b.previous_occurrence(0).is_some());
        assert_eq!(b.viewport(0).center(), Some((0, 1)));
        assert_eq!(events.borrow().len(), 3);

        // Best occurrences only
        b.set_include_suboptimal(false);
        assert!(!b.can_select_next(0));
    }

    #[test]
    fn test_center_on_gene_family() {
        let (mut b, _) = browser();
        b.select_cluster(1, true);
        assert!(b.center_on_gene_family(&GeneFamily::new("k")).is_some());

        // One plus, one minus anchor: the minus strand is flipped
        assert!(!b.is_flipped(0));
        assert!(b.is_flipped(1));
        assert_eq!(b.selection().unwrap().flipped, vec![false, true, false]);
        assert_eq!(b.viewport(0).center(), Some((0, 1)));
        assert_eq!(b.viewport(1).center(), Some((0, 0)));

        // The anchor follows the occurrence
        b.next_occurrence(0);
        assert_eq!(b.viewport(0).center(), Some((0, 3)));
    }

    #[test]
    fn test_center_without_selection_is_ignored() {
        let (mut b, events) = browser();
        assert_eq!(b.center_on_gene_family(&GeneFamily::new("k")), None);
        assert_eq!(b.select_occurrence(0, 0), None);
        assert_eq!(b.center_on_cluster(), None);
        assert!(b.shown_families(0).is_empty());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_center_on_cluster_keeps_occurrences_and_anchor() {
        let (mut b, events) = browser();
        b.select_cluster(1, true);
        b.next_occurrence(0);
        b.center_on_gene_family(&GeneFamily::new("k"));
        let centers: Vec<_> = b.viewports().iter().map(|v| v.center()).collect();
        assert_eq!(centers[0], Some((0, 3)));

        b.scroll_all(1000);
        assert_ne!(b.viewport(0).center(), Some((0, 3)));

        let before = events.borrow().len();
        assert!(b.center_on_cluster().is_some());
        assert_eq!(events.borrow().len(), before + 1);
        let selection = b.selection().unwrap();
        assert_eq!(selection.subselection[0], Some(1));
        assert!(selection.anchor.is_some());
        assert_eq!(selection.flipped, vec![false, true, false]);
        // Genome C holds no occurrence and stays where it was scrolled
        assert_eq!(b.viewport(0).center(), centers[0]);
        assert_eq!(b.viewport(1).center(), centers[1]);
    }

    #[test]
    fn test_shown_families() {
        let (mut b, _) = browser();
        b.select_cluster(1, true);
        let ids = |b: &MultiTrackCoordinator, genome| -> Vec<String> {
            b.shown_families(genome).iter().map(|f| f.to_string()).collect()
        };
        assert_eq!(ids(&b, 0), vec!["x", "k", "y"]);
        assert_eq!(ids(&b, 1), vec!["k", "z"]);
        assert!(ids(&b, 2).is_empty());

        b.next_occurrence(0);
        assert_eq!(ids(&b, 0), vec!["k", "w"]);
    }

    #[test]
    fn test_flip_updates_selection() {
        let (mut b, events) = browser();
        b.flip(2);
        assert!(b.is_flipped(2));
        b.select_cluster(1, true);
        assert_eq!(b.selection().unwrap().flipped, vec![false, false, true]);
        b.flip(0);
        assert_eq!(b.selection().unwrap().flipped, vec![true, false, true]);
        assert_eq!(events.borrow().len(), 3);
    }

    #[test]
    fn test_scroll_all_publishes_once() {
        let (mut b, events) = browser();
        let before: Vec<i64> = (0..3).map(|i| b.scroll_value(i)).collect();
        assert_eq!(b.scroll_all(5), Some(ContentChanged::ScrollValueChanged));
        for (i, value) in before.iter().enumerate() {
            assert_eq!(b.scroll_value(i), value + 5);
        }
        assert_eq!(events.borrow().len(), 1);

        b.scroll(1, -5);
        assert_eq!(b.scroll_value(1), before[1]);
        assert_eq!(b.scroll_value(0), before[0] + 5);

        b.scroll(0, 40);
        assert_eq!(b.scroll_to_start(0), Some(ContentChanged::ScrollValueChanged));
        assert_eq!(b.scroll_value(0), before[0]);
    }

    #[test]
    fn test_zoom_keeps_centers() {
        let (mut b, events) = browser();
        b.select_cluster(1, true);
        let width = b.gene_width();
        assert_eq!(b.set_zoom(2), Some(ContentChanged::ZoomFactorChanged));
        assert_eq!(b.gene_width(), width + 4);
        assert_eq!(b.viewport(0).center(), Some((0, 1)));
        assert_eq!(b.set_zoom(2), None);
        assert!(b.zoom_out().is_some());
        assert_eq!(b.metrics().zoom(), 1);
        assert_eq!(*events.borrow().last().unwrap(), ContentChanged::ZoomFactorChanged);
    }

    #[test]
    fn test_name_type_changes_widths() {
        let (mut b, _) = browser();
        let width = b.gene_width();
        // No gene has a name, so the label column shrinks to the minimum
        assert_eq!(b.set_name_type(NameType::Name), Some(ContentChanged::ZoomFactorChanged));
        assert_eq!(b.metrics().name_type(), NameType::Name);
        assert!(b.gene_width() <= width);
    }

    #[test]
    fn test_clear_selection() {
        let (mut b, _) = browser();
        b.select_cluster(1, true);
        b.center_on_gene_family(&GeneFamily::new("k"));
        assert!(b.clear_selection().is_some());
        assert!(b.selection().is_none());
        assert!((0..3).all(|i| !b.is_flipped(i)));
        assert!(b.viewports().iter().all(|v| v.highlight() == Highlight::None));
    }

    #[test]
    fn test_hide_non_contained() {
        let (mut b, _) = browser();
        b.set_hide_non_contained(true);
        assert_eq!(b.visible_tracks(), vec![0, 1, 2]);
        b.select_cluster(2, true);
        assert_eq!(b.visible_tracks(), vec![1]);
        assert_eq!(b.set_hide_non_contained(true), None);
        b.set_hide_non_contained(false);
        assert_eq!(b.visible_tracks(), vec![0, 1, 2]);
    }

    #[test]
    fn test_aggregates() {
        let (mut b, _) = browser();
        assert_eq!(b.track_count(), 3);
        assert_eq!(b.gene_numbers(0), &[5]);
        assert_eq!(b.scroll_width(), 60);
        let max = b.scroll_maximum();
        assert_eq!(max, b.viewport(0).scroll_max(b.metrics()));

        b.resize_all(100);
        assert_eq!(b.scroll_width(), 100);
        b.resize(1, 120);
        assert_eq!(b.scroll_width(), 120);
    }
}
