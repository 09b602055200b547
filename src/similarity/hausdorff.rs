use rayon::prelude::*;
use rstar::RTree;

use crate::geometry::Point;

/// Resolved geometry of one dataset row: the pooled pin coordinates plus an
/// R-tree answering nearest-neighbor queries.
#[derive(Clone, Debug)]
pub struct PointCloud {
    points: Vec<Point>,
    index: RTree<Point>,
}

impl PointCloud {
    pub fn new(points: Vec<Point>) -> Self {
        let index = RTree::bulk_load(points.clone());
        PointCloud { points, index }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn nearest_distance(&self, point: &Point) -> f64 {
        self.index
            .nearest_neighbor(point)
            .map(|nearest| nearest.distance(point))
            .unwrap_or(0.0)
    }

    /// Directed Hausdorff distance: how far the farthest point of `self`
    /// sits from its nearest counterpart in `other`.
    ///
    /// The reduction over the query points is the only parallel part of the
    /// deduplicator; it is a pure map-reduce with a deterministic result.
    pub fn directed_distance(&self, other: &PointCloud) -> f64 {
        if self.points.is_empty() || other.points.is_empty() {
            return 0.0;
        }
        self.points
            .par_iter()
            .map(|point| other.nearest_distance(point))
            .reduce(|| 0.0, f64::max)
    }
}

/// Bidirectional Hausdorff distance between two point clouds.
pub fn hausdorff_distance(a: &PointCloud, b: &PointCloud) -> f64 {
    a.directed_distance(b).max(b.directed_distance(a))
}

/// Similarity in [0, 1]: 1 at zero distance, falling to 0 once the distance
/// reaches the normalization diagonal.
pub fn similarity(a: &PointCloud, b: &PointCloud, diagonal: f64) -> f64 {
    let distance = hausdorff_distance(a, b);
    if distance == 0.0 {
        return 1.0;
    }
    if diagonal <= 0.0 {
        return 0.0;
    }
    (1.0 - distance / diagonal).clamp(0.0, 1.0)
}
