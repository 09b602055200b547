//! Near-duplicate removal over dataset rows, keyed by pin-layout similarity.

mod hausdorff;

pub use hausdorff::{hausdorff_distance, similarity, PointCloud};

use std::path::Path;

use hashbrown::HashMap;
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::SimilarityError;
use crate::geometry::Size;
use crate::netlist::Netlist;

/// One dataset record: the class column, the ordered auxiliary numeric
/// columns, and the key resolving the row's net geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureRow {
    pub index: usize,
    pub class: i64,
    pub features: IndexMap<String, f64>,
    pub net: String,
}

/// Ordered collection of feature rows with dense indices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<FeatureRow>,
}

impl Dataset {
    pub fn new(rows: Vec<FeatureRow>) -> Self {
        Dataset { rows }
    }

    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn reindex(mut rows: Vec<FeatureRow>) -> Self {
        for (index, row) in rows.iter_mut().enumerate() {
            row.index = index;
        }
        Dataset { rows }
    }
}

/// Resolved geometries keyed by each row's net reference.
pub type GeometryTable = HashMap<String, PointCloud>;

/// Materializes the geometry of every distinct net reference in `dataset`,
/// so deduplication itself performs no I/O.
///
/// References that fail to read or parse are logged and left out of the
/// table; [`remove_similar_data`] later drops their rows.
pub fn load_geometries(dataset: &Dataset, base: &Path) -> GeometryTable {
    let mut table = GeometryTable::default();
    for row in dataset.rows() {
        if table.contains_key(&row.net) {
            continue;
        }
        match Netlist::from_file(&base.join(&row.net)) {
            Ok(netlist) => {
                table.insert(row.net.clone(), PointCloud::new(netlist.pooled_pins()));
            }
            Err(error) => warn!(net = %row.net, %error, "skipping unresolvable net geometry"),
        }
    }
    table
}

/// Tunable parameters for similarity deduplication.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimilarityConfig {
    /// Dataset-wide grid bounds; the diagonal normalizes Hausdorff
    /// distances.
    pub grid: Size,
}

/// Drops every row whose pin layout is a near-duplicate of an earlier kept
/// row, preserving the order of survivors and reindexing them densely.
///
/// Greedy and incremental: a candidate is compared against the rows already
/// kept, and dropped as soon as any comparison reaches `threshold`.
pub fn remove_similar_data(
    dataset: Dataset,
    geometries: &GeometryTable,
    threshold: f64,
    config: &SimilarityConfig,
) -> Result<Dataset, SimilarityError> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(SimilarityError::InvalidThreshold(threshold));
    }

    let diagonal = config.grid.diagonal();
    let total = dataset.len();
    let mut kept_geometry: Vec<&PointCloud> = Vec::new();
    let mut kept_rows = Vec::new();
    let mut skipped = 0usize;

    // Rows are processed strictly in order: every decision depends on the
    // kept set accumulated so far.
    for row in dataset.rows {
        let Some(cloud) = geometries.get(&row.net) else {
            warn!(net = %row.net, "row geometry missing from table; dropping row");
            skipped += 1;
            continue;
        };

        // `any` stops scanning at the first kept row that is similar enough.
        let duplicate = kept_geometry
            .iter()
            .any(|kept| hausdorff::similarity(cloud, kept, diagonal) >= threshold);
        if duplicate {
            continue;
        }

        kept_geometry.push(cloud);
        kept_rows.push(row);
    }

    debug!(
        total,
        kept = kept_rows.len(),
        skipped,
        threshold,
        "similarity deduplication finished"
    );

    Ok(Dataset::reindex(kept_rows))
}
