//! Native components of the gcell routing segmentation pipeline.
//!
//! Two independent, CPU-bound building blocks back the surrounding training
//! and dataset-curation code: [`check_connectivity`] scores whether routed
//! label grids actually connect the pins of each net, and
//! [`remove_similar_data`] filters near-duplicate dataset rows by Hausdorff
//! similarity over their pin layouts.

pub mod connectivity;
pub mod error;
pub mod geometry;
pub mod lib_tracing;
pub mod netlist;
pub mod similarity;

pub use connectivity::{
    check_connectivity, check_connectivity_detailed, ConnectivityConfig, ConnectivityScore,
    LabelGrid, SampleScore,
};
pub use error::{ConnectivityError, NetlistError, SimilarityError};
pub use geometry::{Neighborhood, Point, Size};
pub use netlist::{Net, Netlist};
pub use similarity::{
    load_geometries, remove_similar_data, Dataset, FeatureRow, GeometryTable, PointCloud,
    SimilarityConfig,
};
