//! The user's choice of which cluster occurrence is shown.
//!
//! A selection picks, for every genome, one candidate occurrence of the
//! selected cluster (or none), records which tracks are flipped, and may carry
//! an alignment anchor: a gene family whose genes are lined up across tracks.

use serde::{Deserialize, Serialize};

use crate::model::{GeneCluster, GeneFamily, Genome, Orientation, Subsequence};

/// Gene family used to line up occurrences, with its gene index per genome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    pub family: GeneFamily,
    /// Chromosome gene index of the anchor gene, `None` if the genome's
    /// occurrence has no gene of the family.
    pub positions: Vec<Option<usize>>,
}

/// Which occurrence of a cluster is displayed in each genome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterOccurrenceSelection {
    pub cluster_id: usize,
    /// Occurrence index per genome, `None` means the genome is not included.
    pub subselection: Vec<Option<usize>>,
    pub include_suboptimal: bool,
    pub flipped: Vec<bool>,
    pub anchor: Option<Anchor>,
}

impl ClusterOccurrenceSelection {
    /// The first occurrence in every genome that has one.
    pub fn default_for(cluster: &GeneCluster, include_suboptimal: bool) -> Self {
        let occurrences = cluster.occurrences(include_suboptimal);
        let subselection: Vec<Option<usize>> = occurrences
            .subsequences
            .iter()
            .map(|occs| if occs.is_empty() { None } else { Some(0) })
            .collect();
        let genomes = subselection.len();
        Self {
            cluster_id: cluster.id,
            subselection,
            include_suboptimal,
            flipped: vec![false; genomes],
            anchor: None,
        }
    }

    /// Number of genomes covered; equals the dataset's genome count.
    pub fn genome_count(&self) -> usize {
        self.subselection.len()
    }

    pub fn is_included(&self, genome: usize) -> bool {
        matches!(self.subselection.get(genome), Some(Some(_)))
    }

    pub fn is_flipped(&self, genome: usize) -> bool {
        self.flipped.get(genome).copied().unwrap_or(false)
    }

    /// Panics if the selection does not cover exactly `genomes` genomes.
    ///
    /// A mismatch means the selection was built against another dataset.
    pub fn assert_genome_count(&self, genomes: usize) {
        assert_eq!(
            self.subselection.len(),
            genomes,
            "cluster selection covers {} genomes, dataset has {}",
            self.subselection.len(),
            genomes
        );
        assert_eq!(
            self.flipped.len(),
            genomes,
            "cluster selection has {} flip flags for {} genomes",
            self.flipped.len(),
            genomes
        );
        if let Some(anchor) = &self.anchor {
            assert_eq!(
                anchor.positions.len(),
                genomes,
                "alignment anchor covers {} genomes, dataset has {}",
                anchor.positions.len(),
                genomes
            );
        }
    }

    /// Returns the selected subsequence of a genome, `None` if not included.
    pub fn subsequence<'a>(&self, cluster: &'a GeneCluster, genome: usize) -> Option<&'a Subsequence> {
        let occurrence = (*self.subselection.get(genome)?)?;
        cluster
            .occurrences(self.include_suboptimal)
            .get(genome, occurrence)
    }

    /// Chromosome gene index of the anchor gene, `None` if unaligned or not included.
    pub fn anchor_position(&self, genome: usize) -> Option<usize> {
        if !self.is_included(genome) {
            return None;
        }
        self.anchor.as_ref()?.positions.get(genome).copied().flatten()
    }

    /// Returns true if there is a later occurrence for the genome.
    pub fn can_select_next(&self, cluster: &GeneCluster, genome: usize) -> bool {
        let count = cluster.occurrences(self.include_suboptimal).occurrence_count(genome);
        matches!(self.subselection.get(genome), Some(Some(occ)) if occ + 1 < count)
    }

    /// Returns true if there is an earlier occurrence for the genome.
    pub fn can_select_previous(&self, genome: usize) -> bool {
        matches!(self.subselection.get(genome), Some(Some(occ)) if *occ > 0)
    }

    /// Switches a genome to another candidate occurrence.
    ///
    /// Returns false if the occurrence does not exist. When an anchor is set,
    /// its position is recomputed for the new occurrence.
    pub fn select_occurrence(
        &mut self,
        genomes: &[Genome],
        cluster: &GeneCluster,
        genome: usize,
        occurrence: usize,
    ) -> bool {
        if cluster
            .occurrences(self.include_suboptimal)
            .get(genome, occurrence)
            .is_none()
        {
            return false;
        }
        self.subselection[genome] = Some(occurrence);
        if let Some(family) = self.anchor.as_ref().map(|a| a.family.clone()) {
            let positions = self.family_positions(genomes, cluster, &family);
            self.anchor = Some(Anchor { family, positions });
        }
        true
    }

    /// Aligns the selection on a gene family.
    ///
    /// Every included occurrence containing the family is anchored on the
    /// family's first gene. The anchored tracks are flipped so that the anchor
    /// genes point the same way, the majority orientation winning.
    pub fn center_on(&mut self, genomes: &[Genome], cluster: &GeneCluster, family: &GeneFamily) {
        let positions = self.family_positions(genomes, cluster, family);

        let mut plus = Vec::new();
        let mut minus = Vec::new();
        for (genome, position) in positions.iter().enumerate() {
            let Some(position) = position else { continue };
            let Some(subsequence) = self.subsequence(cluster, genome) else { continue };
            let orientation = genomes[genome]
                .gene(subsequence.chromosome, *position)
                .map(|g| g.orientation);
            if orientation == Some(Orientation::Negative) {
                minus.push(genome);
            } else {
                plus.push(genome);
            }
        }

        let mut flipped = vec![false; self.genome_count()];
        let to_flip = if minus.len() > plus.len() { plus } else { minus };
        for genome in to_flip {
            flipped[genome] = true;
        }

        log::debug!(
            "aligning cluster {} on family {} ({} anchored genomes)",
            self.cluster_id,
            family,
            positions.iter().filter(|p| p.is_some()).count()
        );
        self.flipped = flipped;
        self.anchor = Some(Anchor {
            family: family.clone(),
            positions,
        });
    }

    fn family_positions(
        &self,
        genomes: &[Genome],
        cluster: &GeneCluster,
        family: &GeneFamily,
    ) -> Vec<Option<usize>> {
        (0..self.genome_count())
            .map(|genome| {
                let subsequence = self.subsequence(cluster, genome)?;
                let range = subsequence.gene_range()?;
                let chromosome = genomes.get(genome)?.chromosomes.get(subsequence.chromosome)?;
                range
                    .into_iter()
                    .find(|&i| chromosome.genes.get(i).is_some_and(|g| &g.family == family))
            })
            .collect()
    }
}
