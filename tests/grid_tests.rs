//! Grid tests - initialization, flip rule and win detection

use lights_out::core::{activate, initialize, Grid, GridError, Outcome};
use rand::{rngs::StdRng, SeedableRng};

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn lit_cells(grid: &Grid) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            if grid.is_lit(r, c) {
                out.push((r, c));
            }
        }
    }
    out
}

#[test]
fn test_zero_chance_is_all_unlit_and_won() {
    for rows in 1..=6 {
        for cols in 1..=6 {
            let grid = initialize(rows, cols, 0.0, &mut rng(1)).unwrap();
            assert_eq!(grid.rows(), rows);
            assert_eq!(grid.cols(), cols);
            assert!(grid.cells().iter().all(|&c| !c));
            assert_eq!(grid.outcome(), Outcome::Won);
            assert_eq!(grid.scan_outcome(), Outcome::Won);
        }
    }
}

#[test]
fn test_full_chance_is_all_lit() {
    for rows in 1..=6 {
        for cols in 1..=6 {
            let grid = initialize(rows, cols, 1.0, &mut rng(2)).unwrap();
            assert!(grid.cells().iter().all(|&c| c));
            assert_eq!(grid.lit_count(), rows * cols);
            assert_eq!(grid.outcome(), Outcome::InProgress);
        }
    }
}

#[test]
fn test_zero_dimension_rejected() {
    assert_eq!(
        initialize(0, 5, 0.25, &mut rng(3)),
        Err(GridError::InvalidDimension { rows: 0, cols: 5 })
    );
    assert_eq!(
        initialize(5, 0, 0.25, &mut rng(3)),
        Err(GridError::InvalidDimension { rows: 5, cols: 0 })
    );
    assert!(Grid::unlit(0, 0).is_err());
}

#[test]
fn test_probability_outside_unit_interval_rejected() {
    for p in [-0.01, 1.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = initialize(3, 3, p, &mut rng(4)).unwrap_err();
        assert!(
            matches!(err, GridError::InvalidProbability { .. }),
            "chance {} should be rejected",
            p
        );
    }
}

#[test]
fn test_same_seed_same_grid() {
    let a = initialize(8, 8, 0.4, &mut rng(12345)).unwrap();
    let b = initialize(8, 8, 0.4, &mut rng(12345)).unwrap();
    assert_eq!(a, b);

    // A different seed should differ somewhere on a board this size.
    let c = initialize(8, 8, 0.4, &mut rng(54321)).unwrap();
    assert_ne!(a, c);
}

#[test]
fn test_chance_roughly_respected() {
    let grid = initialize(20, 20, 0.25, &mut rng(7)).unwrap();
    // 400 cells at 25%: expect ~100 lit. Loose bounds keep this deterministic-safe.
    assert!(grid.lit_count() > 60 && grid.lit_count() < 140);
}

#[test]
fn test_activate_is_its_own_inverse() {
    for seed in 0..20u64 {
        let original = initialize(4, 5, 0.5, &mut rng(seed)).unwrap();
        for r in 0..4 {
            for c in 0..5 {
                let mut grid = original.clone();
                activate(&mut grid, r, c);
                activate(&mut grid, r, c);
                assert_eq!(grid, original, "seed {} at ({}, {})", seed, r, c);
            }
        }
    }
}

#[test]
fn test_corner_toggles_three_cells() {
    let mut grid = Grid::unlit(4, 4).unwrap();
    let outcome = activate(&mut grid, 0, 0);

    assert_eq!(outcome, Outcome::InProgress);
    assert_eq!(lit_cells(&grid), vec![(0, 0), (0, 1), (1, 0)]);
}

#[test]
fn test_far_corner_toggles_three_cells() {
    let mut grid = Grid::unlit(3, 5).unwrap();
    activate(&mut grid, 2, 4);
    assert_eq!(lit_cells(&grid), vec![(1, 4), (2, 3), (2, 4)]);
}

#[test]
fn test_centre_plus_then_back_to_won() {
    let mut grid = initialize(3, 3, 0.0, &mut rng(9)).unwrap();

    assert_eq!(activate(&mut grid, 1, 1), Outcome::InProgress);
    assert_eq!(
        lit_cells(&grid),
        vec![(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]
    );
    assert!(!grid.is_lit(0, 0));
    assert!(!grid.is_lit(2, 2));

    assert_eq!(activate(&mut grid, 1, 1), Outcome::Won);
    assert_eq!(grid.lit_count(), 0);
}

#[test]
fn test_order_independence() {
    let start = initialize(5, 5, 0.5, &mut rng(11)).unwrap();
    let moves = [(0, 0), (2, 3), (4, 4), (1, 1)];

    let mut reference = start.clone();
    for &(r, c) in &moves {
        reference.activate(r, c);
    }

    // Every permutation of the four moves.
    let mut idx = [0usize, 1, 2, 3];
    let mut seen = 0;
    loop {
        let mut grid = start.clone();
        for &i in &idx {
            let (r, c) = moves[i];
            grid.activate(r, c);
        }
        assert_eq!(grid, reference, "order {:?}", idx);
        seen += 1;

        if !next_permutation(&mut idx) {
            break;
        }
    }
    assert_eq!(seen, 24);
}

fn next_permutation(v: &mut [usize]) -> bool {
    let Some(i) = (1..v.len()).rev().find(|&i| v[i - 1] < v[i]) else {
        return false;
    };
    let j = (i..v.len()).rev().find(|&j| v[j] > v[i - 1]).unwrap_or(i);
    v.swap(i - 1, j);
    v[i..].reverse();
    true
}

#[test]
fn test_out_of_range_activation_only_touches_board() {
    let mut grid = Grid::unlit(3, 3).unwrap();

    // One row below the board: only the cell above is on the grid.
    assert_eq!(activate(&mut grid, 3, 0), Outcome::InProgress);
    assert_eq!(lit_cells(&grid), vec![(2, 0)]);

    // Far away: nothing happens, no panic.
    let before = grid.clone();
    assert_eq!(activate(&mut grid, 100, 100), Outcome::InProgress);
    assert_eq!(grid, before);
}

#[test]
fn test_solving_a_known_pattern() {
    // Lit plus shape around (1, 1) is solved by pressing (1, 1).
    let mut grid = Grid::from_rows(vec![
        vec![false, true, false],
        vec![true, true, true],
        vec![false, true, false],
    ])
    .unwrap();
    assert_eq!(grid.outcome(), Outcome::InProgress);
    assert_eq!(grid.activate(1, 1), Outcome::Won);
}

#[test]
fn test_outcome_matches_full_scan() {
    let mut grid = initialize(5, 5, 0.25, &mut rng(21)).unwrap();
    for step in 0..500usize {
        let outcome = grid.activate(step * 13 % 6, step * 7 % 6);
        assert_eq!(outcome, grid.scan_outcome());
        assert_eq!(grid.lit_count(), lit_cells(&grid).len());
    }
}
