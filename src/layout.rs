//! Cluster alignment: the shared window every track's occurrence is drawn into.
//!
//! For the selected occurrences this module computes
//! - how many gene slots wide the shared window must be,
//! - how far each genome's occurrence is shifted inside that window,
//! - the concrete slot sequence a renderer draws for each genome.
//!
//! Without an alignment anchor the occurrences are centered. With an anchor
//! the anchor genes of all anchored genomes end up in the same column.

use crate::model::{Gene, GeneCluster, Genome, Subsequence};
use crate::selection::ClusterOccurrenceSelection;

/// One drawable position of the cluster window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<'a> {
    /// Nothing to draw: outside the chromosome or not included
    Gap,
    /// Left boundary of the chromosome as displayed
    ChromosomeStart,
    /// Right boundary of the chromosome as displayed
    ChromosomeEnd,
    /// A gene, with its chromosome index and whether it belongs to the occurrence
    Gene {
        gene: &'a Gene,
        index: usize,
        part_of_cluster: bool,
    },
}

/// Widths of the shared window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct PaintWidths {
    width: usize,
    left: usize,
}

/// Computes widths, offsets and slots for a cluster selection.
#[derive(Debug, Clone, Copy)]
pub struct ClusterAlignmentCalculator<'a> {
    genomes: &'a [Genome],
    cluster: &'a GeneCluster,
}

impl<'a> ClusterAlignmentCalculator<'a> {
    pub fn new(genomes: &'a [Genome], cluster: &'a GeneCluster) -> Self {
        Self { genomes, cluster }
    }

    /// Panics if the selection or the occurrence table do not match the dataset.
    fn check(&self, selection: &ClusterOccurrenceSelection) {
        selection.assert_genome_count(self.genomes.len());
        let table = self.cluster.occurrences(selection.include_suboptimal);
        assert_eq!(
            table.genome_count(),
            self.genomes.len(),
            "cluster {} has occurrences for {} genomes, dataset has {}",
            self.cluster.id,
            table.genome_count(),
            self.genomes.len()
        );
    }

    /// The selected occurrence of a genome if it covers at least one gene.
    fn occurrence(&self, selection: &ClusterOccurrenceSelection, genome: usize) -> Option<&'a Subsequence> {
        selection
            .subsequence(self.cluster, genome)
            .filter(|s| s.is_valid())
    }

    /// Anchor index relative to the first gene of the occurrence.
    fn local_anchor(&self, selection: &ClusterOccurrenceSelection, genome: usize) -> Option<usize> {
        let subsequence = self.occurrence(selection, genome)?;
        let position = selection.anchor_position(genome)? as i64;
        subsequence
            .contains(position)
            .then(|| (position - (subsequence.start - 1)) as usize)
    }

    fn widths(&self, selection: &ClusterOccurrenceSelection) -> PaintWidths {
        self.check(selection);

        if selection.anchor.is_none() {
            let width = (0..self.genomes.len())
                .filter_map(|i| self.occurrence(selection, i))
                .map(Subsequence::len)
                .max()
                .unwrap_or(0);
            return PaintWidths { width, left: width / 2 };
        }

        let mut any_included = false;
        let mut left = 0;
        let mut right = 0;
        let mut unanchored = 0;
        for genome in 0..self.genomes.len() {
            let Some(subsequence) = self.occurrence(selection, genome) else {
                continue;
            };
            any_included = true;
            let length = subsequence.len();
            match self.local_anchor(selection, genome) {
                Some(anchor) => {
                    let (l, r) = if selection.is_flipped(genome) {
                        (length - anchor - 1, anchor)
                    } else {
                        (anchor, length - anchor - 1)
                    };
                    left = left.max(l);
                    right = right.max(r);
                }
                None => unanchored = unanchored.max(length),
            }
        }
        if !any_included {
            return PaintWidths::default();
        }

        let left = left.max(unanchored / 2);
        PaintWidths {
            width: (left + right + 1).max(unanchored),
            left,
        }
    }

    /// Number of gene slots needed to show every included occurrence.
    pub fn compute_paint_width(&self, selection: &ClusterOccurrenceSelection) -> usize {
        self.widths(selection).width
    }

    /// Number of slots the genome's occurrence is shifted right inside the window.
    pub fn compute_offset(&self, selection: &ClusterOccurrenceSelection, genome: usize) -> i64 {
        let widths = self.widths(selection);
        let Some(subsequence) = self.occurrence(selection, genome) else {
            return 0;
        };
        let length = subsequence.len() as i64;

        match self.local_anchor(selection, genome) {
            Some(anchor) => {
                let displayed = if selection.is_flipped(genome) {
                    length - 1 - anchor as i64
                } else {
                    anchor as i64
                };
                widths.left as i64 - displayed
            }
            None => {
                let width = widths.width as i64;
                if width % 2 == 0 {
                    width / 2 - (length / 2 + length % 2)
                } else {
                    width / 2 - length / 2
                }
            }
        }
    }

    /// The slots of one genome, `pad` context slots on each side of the window.
    ///
    /// The walk runs in display order. When the genome is flipped, display
    /// order is reverse gene order, so the chromosome's last gene comes first.
    pub fn paint_slots(
        &self,
        selection: &ClusterOccurrenceSelection,
        genome: usize,
        pad: usize,
    ) -> Vec<Slot<'a>> {
        let width = self.compute_paint_width(selection);
        let mut slots = vec![Slot::Gap; width + 2 * pad];

        let Some(subsequence) = self.occurrence(selection, genome) else {
            return slots;
        };
        let Some(chromosome) = self.genomes[genome].chromosomes.get(subsequence.chromosome) else {
            log::warn!(
                "occurrence of genome {} points to missing chromosome {}",
                genome,
                subsequence.chromosome
            );
            return slots;
        };

        let flipped = selection.is_flipped(genome);
        let length = chromosome.len() as i64;
        let first_displayed = if flipped {
            length - subsequence.stop
        } else {
            subsequence.start - 1
        };
        let mut display = first_displayed - self.compute_offset(selection, genome) - pad as i64;

        for slot in slots.iter_mut() {
            if display >= length {
                if display == length {
                    *slot = Slot::ChromosomeEnd;
                }
                break;
            }
            if display == -1 {
                *slot = Slot::ChromosomeStart;
            } else if display >= 0 {
                let index = if flipped { length - 1 - display } else { display };
                *slot = Slot::Gene {
                    gene: &chromosome.genes[index as usize],
                    index: index as usize,
                    part_of_cluster: subsequence.contains(index),
                };
            }
            display += 1;
        }
        slots
    }
}
