//! Data model for the genome browser.
//!
//! This module contains the immutable data the browser displays:
//! - Genes, gene families and orientations
//! - Chromosomes and genomes
//! - Cluster occurrences (subsequences) as produced by the detection step
//!
//! Nothing in here is mutated after the dataset is loaded. Viewports and
//! selections only reference genomes by index.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Equivalence class of genes considered "the same" across genomes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneFamily(String);

impl GeneFamily {
    /// External id used for genes that could not be assigned to a family.
    pub const UNKNOWN_ID: &'static str = "0";

    /// Creates a gene family from its external id.
    pub fn new(external_id: impl Into<String>) -> Self {
        Self(external_id.into())
    }

    /// Returns the external id of the family.
    pub fn external_id(&self) -> &str {
        &self.0
    }

    /// Returns true for the catch-all family of unassigned genes.
    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN_ID
    }
}

impl fmt::Display for GeneFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strand of a gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Positive,
    Negative,
    Unsigned,
}

impl Orientation {
    /// Returns true if the gene points to the right in the given display direction.
    pub fn points_right(self, flipped: bool) -> bool {
        match self {
            Orientation::Positive => !flipped,
            Orientation::Negative => flipped,
            Orientation::Unsigned => false,
        }
    }

    /// Returns true if the gene points to the left in the given display direction.
    pub fn points_left(self, flipped: bool) -> bool {
        match self {
            Orientation::Positive => flipped,
            Orientation::Negative => !flipped,
            Orientation::Unsigned => false,
        }
    }
}

/// Which label is written into a gene box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameType {
    /// The gene family id
    #[default]
    Id,
    /// The gene name
    Name,
    /// The locus tag
    LocusTag,
}

impl NameType {
    /// Returns the next naming mode (id → name → locus tag → id).
    pub fn next(self) -> Self {
        match self {
            NameType::Id => NameType::Name,
            NameType::Name => NameType::LocusTag,
            NameType::LocusTag => NameType::Id,
        }
    }
}

impl fmt::Display for NameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameType::Id => write!(f, "ID"),
            NameType::Name => write!(f, "Name"),
            NameType::LocusTag => write!(f, "locus_tag"),
        }
    }
}

/// A single gene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gene {
    /// The family the gene belongs to
    pub family: GeneFamily,
    /// Strand of the gene
    #[serde(default)]
    pub orientation: Orientation,
    /// Gene name, may be empty
    #[serde(default)]
    pub name: String,
    /// Locus tag, may be empty
    #[serde(default)]
    pub tag: String,
    /// Free text annotation
    #[serde(default)]
    pub annotation: Option<String>,
}

impl Gene {
    /// Creates a gene with the given family and orientation and no labels.
    pub fn new(family: impl Into<String>, orientation: Orientation) -> Self {
        Self {
            family: GeneFamily::new(family),
            orientation,
            name: String::new(),
            tag: String::new(),
            annotation: None,
        }
    }

    /// Returns the label shown for the given naming mode.
    pub fn label(&self, name_type: NameType) -> &str {
        match name_type {
            NameType::Id => self.family.external_id(),
            NameType::Name => &self.name,
            NameType::LocusTag => &self.tag,
        }
    }

    /// One line description used in the status bar.
    pub fn summary(&self) -> String {
        match (&self.annotation, self.name.is_empty(), self.tag.is_empty()) {
            (None, false, _) => self.name.clone(),
            (None, true, _) => "[no annotation available]".to_string(),
            (Some(annotation), false, _) => format!("{} - {}", self.name, annotation),
            (Some(annotation), true, false) => format!("{} - {}", self.tag, annotation),
            (Some(annotation), true, true) => format!("---- - {}", annotation),
        }
    }
}

/// An ordered run of genes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chromosome {
    pub name: String,
    pub genes: Vec<Gene>,
}

impl Chromosome {
    pub fn new(name: impl Into<String>, genes: Vec<Gene>) -> Self {
        Self {
            name: name.into(),
            genes,
        }
    }

    /// Returns the number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns true if the chromosome holds no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

/// A genome: a named list of chromosomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genome {
    pub name: String,
    pub chromosomes: Vec<Chromosome>,
}

impl Genome {
    pub fn new(name: impl Into<String>, chromosomes: Vec<Chromosome>) -> Self {
        Self {
            name: name.into(),
            chromosomes,
        }
    }

    /// Returns the total number of genes over all chromosomes.
    pub fn total_gene_count(&self) -> usize {
        self.chromosomes.iter().map(Chromosome::len).sum()
    }

    /// Returns true if the genome holds no gene at all.
    pub fn is_empty(&self) -> bool {
        self.total_gene_count() == 0
    }

    /// Gets a gene by chromosome and gene index.
    pub fn gene(&self, chromosome: usize, gene: usize) -> Option<&Gene> {
        self.chromosomes.get(chromosome)?.genes.get(gene)
    }

    /// Returns the gene counts of every chromosome.
    pub fn gene_numbers(&self) -> Vec<usize> {
        self.chromosomes.iter().map(Chromosome::len).collect()
    }

    /// Returns the genes covered by a subsequence, or an empty slice if it is invalid.
    pub fn subsequence_genes(&self, subsequence: &Subsequence) -> &[Gene] {
        let Some(chromosome) = self.chromosomes.get(subsequence.chromosome) else {
            return &[];
        };
        match subsequence.gene_range() {
            Some(range) if range.end <= chromosome.len() => &chromosome.genes[range],
            _ => &[],
        }
    }

    /// Returns the longest label for the given naming mode.
    pub fn max_label_length(&self, name_type: NameType) -> usize {
        self.chromosomes
            .iter()
            .flat_map(|c| c.genes.iter())
            .map(|g| g.label(name_type).chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// One occurrence of a cluster inside one genome.
///
/// `start` is one-based and `stop` is inclusive, so the occurrence covers the
/// gene indices `start - 1 .. stop` of its chromosome. A subsequence with
/// `start > stop` is invalid and marks an empty occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsequence {
    pub chromosome: usize,
    pub start: i64,
    pub stop: i64,
    #[serde(default)]
    pub distance: u32,
}

impl Subsequence {
    pub fn new(chromosome: usize, start: i64, stop: i64, distance: u32) -> Self {
        Self {
            chromosome,
            start,
            stop,
            distance,
        }
    }

    /// Returns true if the subsequence covers at least one gene.
    pub fn is_valid(&self) -> bool {
        self.start >= 1 && self.start <= self.stop
    }

    /// Number of genes covered, `stop - start + 1`.
    pub fn len(&self) -> usize {
        if self.is_valid() {
            (self.stop - self.start + 1) as usize
        } else {
            0
        }
    }

    /// Returns true if the subsequence covers no gene.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Zero-based gene index range inside the chromosome.
    pub fn gene_range(&self) -> Option<std::ops::Range<usize>> {
        if self.is_valid() {
            Some((self.start - 1) as usize..self.stop as usize)
        } else {
            None
        }
    }

    /// Returns true if the zero-based gene index lies within the occurrence.
    pub fn contains(&self, gene_index: i64) -> bool {
        self.is_valid() && gene_index >= self.start - 1 && gene_index < self.stop
    }

    /// Gene index in the middle of the occurrence.
    pub fn middle_gene(&self) -> usize {
        ((self.start - 1 + self.stop - 1) / 2).max(0) as usize
    }
}

/// The subsequences of one cluster, indexed `[genome][occurrence]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneClusterOccurrence {
    pub subsequences: Vec<Vec<Subsequence>>,
}

impl GeneClusterOccurrence {
    pub fn new(subsequences: Vec<Vec<Subsequence>>) -> Self {
        Self { subsequences }
    }

    /// Number of genomes the table covers.
    pub fn genome_count(&self) -> usize {
        self.subsequences.len()
    }

    /// Number of candidate occurrences in one genome.
    pub fn occurrence_count(&self, genome: usize) -> usize {
        self.subsequences.get(genome).map_or(0, Vec::len)
    }

    /// Gets one occurrence.
    pub fn get(&self, genome: usize, occurrence: usize) -> Option<&Subsequence> {
        self.subsequences.get(genome)?.get(occurrence)
    }

    /// Keeps, per genome, only the occurrences with the minimal distance.
    pub fn best_occurrences(&self) -> Self {
        let subsequences = self
            .subsequences
            .iter()
            .map(|occs| {
                let min = occs.iter().map(|s| s.distance).min();
                occs.iter()
                    .filter(|s| Some(s.distance) == min)
                    .copied()
                    .collect()
            })
            .collect();
        Self { subsequences }
    }
}

/// A detected gene cluster with its occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneCluster {
    pub id: usize,
    /// Index of the genome the cluster was detected on
    #[serde(default)]
    pub reference_genome: usize,
    /// All occurrences, including sub-optimal ones
    pub all_occurrences: GeneClusterOccurrence,
    /// Optimal occurrences only; derived from `all_occurrences` when absent
    #[serde(default)]
    pub best_occurrences: Option<GeneClusterOccurrence>,
}

impl GeneCluster {
    pub fn new(id: usize, reference_genome: usize, all_occurrences: GeneClusterOccurrence) -> Self {
        let best = all_occurrences.best_occurrences();
        Self {
            id,
            reference_genome,
            all_occurrences,
            best_occurrences: Some(best),
        }
    }

    /// Returns the occurrence table to browse.
    pub fn occurrences(&self, include_suboptimal: bool) -> &GeneClusterOccurrence {
        match (&self.best_occurrences, include_suboptimal) {
            (Some(best), false) => best,
            _ => &self.all_occurrences,
        }
    }

    /// Number of genomes that contain at least one occurrence.
    pub fn support(&self, include_suboptimal: bool) -> usize {
        self.occurrences(include_suboptimal)
            .subsequences
            .iter()
            .filter(|occs| !occs.is_empty())
            .count()
    }
}

/// Returns the longest label over all genomes, capped at `cap`.
pub fn max_label_length(genomes: &[Genome], name_type: NameType, cap: usize) -> usize {
    genomes
        .iter()
        .map(|g| g.max_label_length(name_type))
        .max()
        .unwrap_or(0)
        .min(cap)
}

#[cfg(test)]
pub(crate) mod test_data {
    use super::*;

    /// Builds a one-chromosome genome from family ids, all on the positive strand.
    pub fn genome(name: &str, families: &[&str]) -> Genome {
        let genes = families
            .iter()
            .map(|f| Gene::new(*f, Orientation::Positive))
            .collect();
        Genome::new(name, vec![Chromosome::new("chr1", genes)])
    }

    /// Builds a genome with several chromosomes of the given sizes.
    pub fn sized_genome(name: &str, sizes: &[usize]) -> Genome {
        let chromosomes = sizes
            .iter()
            .enumerate()
            .map(|(c, &n)| {
                let genes = (0..n)
                    .map(|g| Gene::new(format!("{}", c * 100 + g + 1), Orientation::Positive))
                    .collect();
                Chromosome::new(format!("chr{}", c + 1), genes)
            })
            .collect();
        Genome::new(name, chromosomes)
    }
}
