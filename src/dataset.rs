//! Dataset loading.
//!
//! A dataset is a JSON document holding the genomes and the clusters already
//! detected on them:
//!
//! ```json
//! {
//!   "genomes": [
//!     { "name": "E. coli", "chromosomes": [
//!       { "name": "chr", "genes": [
//!         { "family": "12", "orientation": "positive", "name": "dnaK", "tag": "b0014" }
//!       ] }
//!     ] }
//!   ],
//!   "clusters": [
//!     { "id": 1, "reference_genome": 0,
//!       "all_occurrences": { "subsequences": [[ { "chromosome": 0, "start": 1, "stop": 1 } ]] } }
//!   ]
//! }
//! ```
//!
//! `best_occurrences` may be given per cluster; when absent it is derived
//! from the occurrences with minimal distance.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{GeneCluster, GeneClusterOccurrence, Genome};

/// Errors that can occur while loading a dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to open dataset: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid dataset JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Dataset contains no genomes")]
    NoGenomes,

    #[error("Duplicate cluster id {0}")]
    DuplicateCluster(usize),

    #[error("Cluster {cluster}: occurrence table covers {found} genomes, dataset has {expected}")]
    GenomeCountMismatch {
        cluster: usize,
        found: usize,
        expected: usize,
    },

    #[error("Cluster {cluster}: reference genome {reference} does not exist")]
    UnknownReference { cluster: usize, reference: usize },

    #[error("Cluster {cluster}: occurrence in genome {genome} refers to missing chromosome {chromosome}")]
    MissingChromosome {
        cluster: usize,
        genome: usize,
        chromosome: usize,
    },

    #[error("Cluster {cluster}: occurrence {start}-{stop} in genome {genome} exceeds chromosome {chromosome} ({length} genes)")]
    OccurrenceOutOfRange {
        cluster: usize,
        genome: usize,
        chromosome: usize,
        start: i64,
        stop: i64,
        length: usize,
    },
}

/// Result type for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Genomes plus the clusters detected on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub genomes: Vec<Genome>,
    #[serde(default)]
    pub clusters: Vec<GeneCluster>,
}

impl Dataset {
    /// Fills in missing optimal occurrence tables and checks the structure.
    fn prepare(mut self) -> DatasetResult<Self> {
        if self.genomes.is_empty() {
            return Err(DatasetError::NoGenomes);
        }
        let mut ids = HashSet::new();
        for cluster in self.clusters.iter_mut() {
            if !ids.insert(cluster.id) {
                return Err(DatasetError::DuplicateCluster(cluster.id));
            }
            if cluster.best_occurrences.is_none() {
                cluster.best_occurrences = Some(cluster.all_occurrences.best_occurrences());
            }
        }
        for cluster in &self.clusters {
            self.check_cluster(cluster)?;
        }
        Ok(self)
    }

    fn check_cluster(&self, cluster: &GeneCluster) -> DatasetResult<()> {
        if cluster.reference_genome >= self.genomes.len() {
            return Err(DatasetError::UnknownReference {
                cluster: cluster.id,
                reference: cluster.reference_genome,
            });
        }
        self.check_table(cluster.id, &cluster.all_occurrences)?;
        if let Some(best) = &cluster.best_occurrences {
            self.check_table(cluster.id, best)?;
        }
        Ok(())
    }

    fn check_table(&self, cluster: usize, table: &GeneClusterOccurrence) -> DatasetResult<()> {
        if table.genome_count() != self.genomes.len() {
            return Err(DatasetError::GenomeCountMismatch {
                cluster,
                found: table.genome_count(),
                expected: self.genomes.len(),
            });
        }
        for (genome, occurrences) in table.subsequences.iter().enumerate() {
            // invalid subsequences mark empty occurrences and are shown as gaps
            for subsequence in occurrences.iter().filter(|s| s.is_valid()) {
                let chromosome = self.genomes[genome]
                    .chromosomes
                    .get(subsequence.chromosome)
                    .ok_or(DatasetError::MissingChromosome {
                        cluster,
                        genome,
                        chromosome: subsequence.chromosome,
                    })?;
                if subsequence.stop as usize > chromosome.len() {
                    return Err(DatasetError::OccurrenceOutOfRange {
                        cluster,
                        genome,
                        chromosome: subsequence.chromosome,
                        start: subsequence.start,
                        stop: subsequence.stop,
                        length: chromosome.len(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Short description for the status bar.
    pub fn summary(&self) -> String {
        let genes: usize = self.genomes.iter().map(Genome::total_gene_count).sum();
        format!(
            "{} genomes, {} genes, {} clusters",
            self.genomes.len(),
            genes,
            self.clusters.len()
        )
    }
}

/// Parses a dataset from a JSON string.
pub fn parse_dataset_str(content: &str) -> DatasetResult<Dataset> {
    let dataset: Dataset = serde_json::from_str(content)?;
    dataset.prepare()
}

/// Loads a dataset from a JSON file.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> DatasetResult<Dataset> {
    let path = path.as_ref();
    log::info!("Loading dataset from: {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    let dataset: Dataset = serde_json::from_reader(reader)?;
    let dataset = dataset.prepare()?;
    log::info!("Loaded {}", dataset.summary());
    Ok(dataset)
}
