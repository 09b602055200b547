use rstest::rstest;

use crate::error::ConnectivityError;
use crate::geometry::{Neighborhood, Point};
use crate::netlist::{Net, Netlist};

use super::components::ComponentMap;
use super::{check_connectivity, check_connectivity_detailed, ConnectivityConfig, LabelGrid};

fn grid_from_rows(rows: &[&[u32]]) -> LabelGrid {
    let height = rows.len();
    let width = rows[0].len();
    let labels = rows.iter().flat_map(|row| row.iter().copied()).collect();
    LabelGrid::new(width, height, labels).expect("valid grid")
}

fn net(name: &str, pins: &[(i32, i32)]) -> Net {
    Net {
        name: name.to_owned(),
        pins: pins.iter().map(|&(x, y)| Point::new(x, y)).collect(),
    }
}

fn sample(nets: &[Net]) -> Netlist {
    Netlist::new(nets.to_vec())
}

#[test]
fn background_cells_have_no_component() {
    let grid = grid_from_rows(&[&[1, 0], &[0, 2]]);
    let components = ComponentMap::build(&grid, Neighborhood::Orthogonal);
    assert!(components.component(0, 0).is_some());
    assert!(components.component(1, 0).is_none());
    assert!(components.component(0, 1).is_none());
}

#[test]
fn disjoint_regions_get_distinct_ids() {
    let grid = grid_from_rows(&[&[1, 0, 1], &[1, 0, 1]]);
    let components = ComponentMap::build(&grid, Neighborhood::Orthogonal);
    let left = components.component(0, 0);
    let right = components.component(2, 0);
    assert_eq!(left, components.component(0, 1));
    assert_eq!(right, components.component(2, 1));
    assert_ne!(left, right);
}

#[test]
fn class_labels_merge_into_one_routed_mask() {
    // Adjacent cells routed under different classes still form one region.
    let grid = grid_from_rows(&[&[1, 2, 3]]);
    let components = ComponentMap::build(&grid, Neighborhood::Orthogonal);
    assert_eq!(components.component(0, 0), components.component(2, 0));
}

#[rstest]
#[case(Neighborhood::Orthogonal, 0.0)]
#[case(Neighborhood::Moore, 1.0)]
fn diagonal_adjacency_depends_on_neighborhood(
    #[case] neighborhood: Neighborhood,
    #[case] expected: f64,
) {
    let grid = grid_from_rows(&[&[1, 0], &[0, 1]]);
    let nets = [sample(&[net("n0", &[(0, 0), (1, 1)])])];
    let config = ConnectivityConfig { neighborhood };
    let score = check_connectivity(&nets, &[grid], &config).expect("check");
    assert_eq!(score.overall, expected);
    assert_eq!(score.instance, expected);
}

#[test]
fn single_pin_net_passes_on_any_grid() {
    let grid = LabelGrid::background(4, 4).expect("grid");
    let nets = [sample(&[net("n0", &[(2, 2)])])];
    let score =
        check_connectivity(&nets, &[grid], &ConnectivityConfig::default()).expect("check");
    assert_eq!(score.overall, 1.0);
    assert_eq!(score.instance, 1.0);
}

#[test]
fn single_out_of_bounds_pin_still_passes() {
    let grid = LabelGrid::background(4, 4).expect("grid");
    let nets = [sample(&[net("n0", &[(9, 9)])])];
    let score =
        check_connectivity(&nets, &[grid], &ConnectivityConfig::default()).expect("check");
    assert_eq!(score.overall, 1.0);
}

#[test]
fn multi_pin_nets_fail_on_an_all_background_grid() {
    let grid = LabelGrid::background(4, 4).expect("grid");
    let nets = [sample(&[
        net("n0", &[(0, 0), (1, 1)]),
        net("n1", &[(2, 2), (3, 3)]),
    ])];
    let score =
        check_connectivity(&nets, &[grid], &ConnectivityConfig::default()).expect("check");
    assert_eq!(score.overall, 0.0);
    assert_eq!(score.instance, 0.0);
}

#[test]
fn out_of_bounds_pin_scores_zero_without_error() {
    let grid = grid_from_rows(&[&[1, 1], &[1, 1]]);
    let nets = [sample(&[net("n0", &[(0, 0), (5, 0)])])];
    let score =
        check_connectivity(&nets, &[grid], &ConnectivityConfig::default()).expect("check");
    assert_eq!(score.overall, 0.0);
}

#[test]
fn zero_pin_nets_are_excluded_from_scoring() {
    let grid = LabelGrid::background(2, 2).expect("grid");
    let nets = [sample(&[net("n0", &[])])];
    let (score, samples) =
        check_connectivity_detailed(&nets, &[grid], &ConnectivityConfig::default())
            .expect("check");
    assert_eq!(samples[0].scorable_nets, 0);
    // Nothing scorable: the sample passes vacuously.
    assert_eq!(score.overall, 1.0);
    assert_eq!(score.instance, 1.0);
}

#[rstest]
#[case(&[(0, 0), (1, 1)])]
#[case(&[(1, 1), (0, 0)])]
fn net_score_is_invariant_under_pin_permutation(#[case] pins: &[(i32, i32)]) {
    let grid = grid_from_rows(&[
        &[1, 0, 0, 0],
        &[1, 1, 0, 0],
        &[0, 0, 0, 0],
        &[0, 0, 0, 0],
    ]);
    let nets = [sample(&[net("n0", pins)])];
    let score =
        check_connectivity(&nets, &[grid], &ConnectivityConfig::default()).expect("check");
    assert_eq!(score.overall, 1.0);
}

#[test]
fn sample_fraction_is_invariant_under_net_permutation() {
    let grid = grid_from_rows(&[&[1, 1, 0, 1]]);
    let connected = net("a", &[(0, 0), (1, 0)]);
    let broken = net("b", &[(0, 0), (3, 0)]);

    let forward = [sample(&[connected.clone(), broken.clone()])];
    let reversed = [sample(&[broken, connected])];

    let config = ConnectivityConfig::default();
    let first = check_connectivity(&forward, &[grid.clone()], &config).expect("check");
    let second = check_connectivity(&reversed, &[grid], &config).expect("check");
    assert_eq!(first, second);
    assert_eq!(first.instance, 0.5);
}

#[test]
fn batch_length_mismatch_is_fatal() {
    let grid = LabelGrid::background(2, 2).expect("grid");
    let nets = [sample(&[]), sample(&[])];
    let error = check_connectivity(&nets, &[grid], &ConnectivityConfig::default())
        .expect_err("must fail");
    assert!(matches!(
        error,
        ConnectivityError::ShapeMismatch { nets: 2, grids: 1 }
    ));
}

#[rstest]
#[case(0, 4)]
#[case(4, 0)]
fn degenerate_grid_dimensions_are_rejected(#[case] width: usize, #[case] height: usize) {
    let error = LabelGrid::new(width, height, Vec::new()).expect_err("must fail");
    assert!(matches!(error, ConnectivityError::InvalidGrid { .. }));
}

#[test]
fn label_buffer_must_match_declared_extent() {
    let error = LabelGrid::new(2, 2, vec![0; 3]).expect_err("must fail");
    assert!(matches!(
        error,
        ConnectivityError::LabelMismatch {
            actual: 3,
            expected: 4
        }
    ));
}

#[test]
fn empty_batch_passes_vacuously() {
    let score = check_connectivity(&[], &[], &ConnectivityConfig::default()).expect("check");
    assert_eq!(score.overall, 1.0);
    assert_eq!(score.instance, 1.0);
}

#[test]
fn per_sample_detail_supports_validity_filtering() {
    let clean = grid_from_rows(&[&[1, 1]]);
    let broken = grid_from_rows(&[&[1, 0]]);
    let nets = [
        sample(&[net("a", &[(0, 0), (1, 0)])]),
        sample(&[net("a", &[(0, 0), (1, 0)])]),
    ];
    let (_, samples) =
        check_connectivity_detailed(&nets, &[clean, broken], &ConnectivityConfig::default())
            .expect("check");
    assert!(samples[0].is_fully_connected());
    assert!(!samples[1].is_fully_connected());
}
