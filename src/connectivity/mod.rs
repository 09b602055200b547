//! Net connectivity scoring over routed label grids.

mod components;
mod grid;
#[cfg(test)]
mod tests;

pub use grid::LabelGrid;

use rayon::prelude::*;
use tracing::debug;

use crate::error::ConnectivityError;
use crate::geometry::Neighborhood;
use crate::netlist::{Net, Netlist};

use components::ComponentMap;

/// Tunable parameters for connectivity checking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectivityConfig {
    pub neighborhood: Neighborhood,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        ConnectivityConfig {
            neighborhood: Neighborhood::Orthogonal,
        }
    }
}

/// Aggregate connectivity metrics over one batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectivityScore {
    /// Net-weighted mean of per-net indicators across the whole batch.
    pub overall: f64,
    /// Sample-weighted mean of per-sample fractions.
    pub instance: f64,
}

/// Scoring detail for a single sample.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SampleScore {
    pub connected_nets: usize,
    pub scorable_nets: usize,
}

impl SampleScore {
    /// Fraction of scorable nets that are connected; a sample with nothing
    /// scorable passes vacuously.
    pub fn fraction(&self) -> f64 {
        if self.scorable_nets == 0 {
            1.0
        } else {
            self.connected_nets as f64 / self.scorable_nets as f64
        }
    }

    pub fn is_fully_connected(&self) -> bool {
        self.connected_nets == self.scorable_nets
    }
}

/// Checks whether the routed cells of each grid connect the pins of each net
/// and aggregates the per-net indicators over the batch.
pub fn check_connectivity(
    netlists: &[Netlist],
    grids: &[LabelGrid],
    config: &ConnectivityConfig,
) -> Result<ConnectivityScore, ConnectivityError> {
    check_connectivity_detailed(netlists, grids, config).map(|(score, _)| score)
}

/// As [`check_connectivity`], additionally returning the per-sample scores so
/// callers can filter individual samples.
pub fn check_connectivity_detailed(
    netlists: &[Netlist],
    grids: &[LabelGrid],
    config: &ConnectivityConfig,
) -> Result<(ConnectivityScore, Vec<SampleScore>), ConnectivityError> {
    if netlists.len() != grids.len() {
        return Err(ConnectivityError::ShapeMismatch {
            nets: netlists.len(),
            grids: grids.len(),
        });
    }

    // Samples are independent; each writes only its own score slot.
    let samples: Vec<SampleScore> = netlists
        .par_iter()
        .zip(grids.par_iter())
        .map(|(netlist, grid)| score_sample(netlist, grid, config.neighborhood))
        .collect();

    let connected: usize = samples.iter().map(|sample| sample.connected_nets).sum();
    let scorable: usize = samples.iter().map(|sample| sample.scorable_nets).sum();

    let overall = if scorable == 0 {
        1.0
    } else {
        connected as f64 / scorable as f64
    };
    let instance = if samples.is_empty() {
        1.0
    } else {
        samples.iter().map(SampleScore::fraction).sum::<f64>() / samples.len() as f64
    };

    debug!(
        batch = samples.len(),
        scorable, connected, overall, instance, "connectivity check finished"
    );

    Ok((ConnectivityScore { overall, instance }, samples))
}

fn score_sample(netlist: &Netlist, grid: &LabelGrid, neighborhood: Neighborhood) -> SampleScore {
    let components = ComponentMap::build(grid, neighborhood);

    let mut connected_nets = 0;
    let mut scorable_nets = 0;
    for net in netlist.nets() {
        // Zero-pin nets are invalid and not scorable.
        if net.pins.is_empty() {
            continue;
        }
        scorable_nets += 1;
        if net_is_connected(net, grid, &components) {
            connected_nets += 1;
        }
    }

    SampleScore {
        connected_nets,
        scorable_nets,
    }
}

fn net_is_connected(net: &Net, grid: &LabelGrid, components: &ComponentMap) -> bool {
    // A single pin needs no routing.
    if net.pins.len() == 1 {
        return true;
    }

    let mut shared: Option<u32> = None;
    for pin in &net.pins {
        if !grid.contains(pin) {
            return false;
        }
        let Some(id) = components.component(pin.x as usize, pin.y as usize) else {
            // Pin sits on a background cell.
            return false;
        };
        match shared {
            None => shared = Some(id),
            Some(existing) if existing != id => return false,
            Some(_) => {}
        }
    }
    true
}
