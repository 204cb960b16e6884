//! Property tests for the path engine: path shape, optimality against a
//! brute-force relaxation, determinism and symmetry.

use std::cmp::Ordering;
use std::collections::HashSet;

use proptest::prelude::*;
use proptest::sample::Index;
use terrapath_core::{CellSemantics, Coord, CostGrid, Dims};
use terrapath_paths::{
    Connectivity, Cost, EngineConfig, GridPather, PathEngine, PathError, Pather, WeightedPather,
    chebyshev, path_cost,
};

const EPS: f64 = 1e-9;

fn cell_value(semantics: CellSemantics) -> BoxedStrategy<f64> {
    match semantics {
        CellSemantics::Mask => prop_oneof![3 => Just(0.0), 1 => Just(1.0)].boxed(),
        CellSemantics::Cost => prop_oneof![
            1 => Just(-1.0),
            5 => (0u8..10).prop_map(f64::from),
        ]
        .boxed(),
    }
}

fn grid_of(semantics: CellSemantics) -> impl Strategy<Value = CostGrid> {
    (1usize..8, 1usize..8).prop_flat_map(move |(rows, cols)| {
        prop::collection::vec(cell_value(semantics), rows * cols).prop_map(move |cells| {
            CostGrid::from_flat(Dims::new(rows, cols), cells, semantics).unwrap()
        })
    })
}

fn any_grid() -> impl Strategy<Value = CostGrid> {
    prop_oneof![grid_of(CellSemantics::Mask), grid_of(CellSemantics::Cost)]
}

fn connectivity() -> impl Strategy<Value = Connectivity> {
    prop_oneof![Just(Connectivity::Four), Just(Connectivity::Eight)]
}

fn pick(grid: &CostGrid, i: &Index) -> Coord {
    grid.dims().coord(i.index(grid.dims().len()))
}

/// Bellman-Ford style relaxation over `(cost, steps)` until nothing
/// changes. Returns the best pair for `target`, if reachable, with the cost
/// as a scalar.
fn reference(grid: &CostGrid, start: Coord, target: Coord, cfg: &EngineConfig) -> Option<(f64, u32)> {
    let dims = grid.dims();
    let pather = GridPather::new(grid, cfg);
    let mut best = vec![(Cost::INFINITE, u32::MAX); dims.len()];
    best[dims.index(start)?] = (Cost::ZERO, 0);
    let mut buf = Vec::new();
    loop {
        let mut changed = false;
        for u in dims.iter() {
            let (du, su) = best[dims.index(u)?];
            if du.total().is_infinite() {
                continue;
            }
            buf.clear();
            pather.neighbors(u, &mut buf);
            for &v in &buf {
                let vi = dims.index(v)?;
                let cand = (du + pather.cost(u, v), su + 1);
                let (dv, sv) = best[vi];
                let better = match cand.0.compare(&dv) {
                    Ordering::Less => true,
                    Ordering::Equal => cand.1 < sv,
                    Ordering::Greater => false,
                };
                if better {
                    best[vi] = cand;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    let (cost, steps) = best[dims.index(target)?];
    let cost = cost.total();
    cost.is_finite().then_some((cost, steps))
}

proptest! {
    #[test]
    fn returned_paths_are_well_formed(
        grid in any_grid(),
        conn in connectivity(),
        a in any::<Index>(),
        b in any::<Index>(),
    ) {
        let (start, target) = (pick(&grid, &a), pick(&grid, &b));
        let cfg = EngineConfig::default().with_connectivity(conn);
        let Ok(path) = PathEngine::new(cfg).compute_path(&grid, start, target) else {
            return Ok(());
        };
        let coords = path.coords();
        prop_assert_eq!(coords.first(), Some(&start));
        prop_assert_eq!(coords.last(), Some(&target));
        let mut seen = HashSet::new();
        for &c in coords {
            prop_assert!(grid.is_walkable(c), "{} is an obstacle", c);
            prop_assert!(seen.insert(c), "{} repeats", c);
        }
        for w in coords.windows(2) {
            prop_assert!(conn.adjacent(w[0], w[1]), "{} -> {} not adjacent", w[0], w[1]);
        }
        let recomputed = path_cost(&grid, coords, &cfg);
        prop_assert!(recomputed.is_some());
        prop_assert!((recomputed.unwrap_or(f64::NAN) - path.cost()).abs() < EPS);
        prop_assert!(path.len() as i32 > chebyshev(start, target));
    }

    #[test]
    fn paths_are_optimal(
        grid in any_grid(),
        conn in connectivity(),
        a in any::<Index>(),
        b in any::<Index>(),
    ) {
        let (start, target) = (pick(&grid, &a), pick(&grid, &b));
        prop_assume!(grid.is_walkable(start) && grid.is_walkable(target));
        let cfg = EngineConfig::default().with_connectivity(conn);
        let got = PathEngine::new(cfg).compute_path(&grid, start, target);
        match (reference(&grid, start, target, &cfg), got) {
            (Some((cost, steps)), Ok(path)) => {
                prop_assert!((path.cost() - cost).abs() < EPS, "cost {} != {}", path.cost(), cost);
                prop_assert_eq!(path.len() as u32, steps + 1);
            }
            (None, Err(PathError::NoPathFound { .. })) => {}
            (want, got) => prop_assert!(false, "reference {:?}, engine {:?}", want, got),
        }
    }

    #[test]
    fn identical_inputs_identical_paths(
        grid in any_grid(),
        conn in connectivity(),
        a in any::<Index>(),
        b in any::<Index>(),
    ) {
        let (start, target) = (pick(&grid, &a), pick(&grid, &b));
        let engine = PathEngine::new(EngineConfig::default().with_connectivity(conn));
        prop_assert_eq!(
            engine.compute_path(&grid, start, target),
            engine.compute_path(&grid, start, target)
        );
    }

    #[test]
    fn mask_costs_are_symmetric(
        grid in grid_of(CellSemantics::Mask),
        conn in connectivity(),
        a in any::<Index>(),
        b in any::<Index>(),
    ) {
        let (start, target) = (pick(&grid, &a), pick(&grid, &b));
        let engine = PathEngine::new(EngineConfig::default().with_connectivity(conn));
        match (engine.compute_path(&grid, start, target), engine.compute_path(&grid, target, start)) {
            (Ok(there), Ok(back)) => prop_assert!((there.cost() - back.cost()).abs() < EPS),
            (Err(PathError::NoPathFound { .. }), Err(PathError::NoPathFound { .. })) => {}
            (Err(PathError::InvalidEndpoint { .. }), Err(PathError::InvalidEndpoint { .. })) => {}
            (x, y) => prop_assert!(false, "asymmetric outcome {:?} / {:?}", x, y),
        }
    }
}

#[test]
fn self_path_is_single_cell() {
    let g = CostGrid::from_ascii("7#\n..", CellSemantics::Cost).unwrap();
    for c in g.dims().iter().filter(|&c| g.is_walkable(c)) {
        let p = PathEngine::default().compute_path(&g, c, c).unwrap();
        assert_eq!(p.coords(), &[c]);
        assert_eq!(p.cost(), 0.0);
    }
}
