use fnv::FnvHashMap;
use grid_astar::{a_star_search, Grid, Heuristic, SearchConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use std::time::Duration;

const SIZE: usize = 40;
const GRIDS: u64 = 64;

#[derive(Clone, Copy, Debug)]
struct Run {
    runtime: Duration,
    nodes_created: usize,
    cost: Option<usize>,
}

fn random_grid(seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows: Vec<Vec<usize>> = (0..SIZE)
        .map(|_| (0..SIZE).map(|_| rng.gen_range(0..10)).collect())
        .collect();
    rows[0][0] = 1;
    rows[SIZE - 1][SIZE - 1] = 1;
    Grid::new(rows).expect("rows have equal length")
}

fn run_all(seed: u64) -> Vec<(Heuristic, Run)> {
    let grid = random_grid(seed);
    Heuristic::all()
        .map(|heuristic| {
            let config = SearchConfig {
                heuristic,
                seed: Some(seed),
                size_hint: SIZE * SIZE,
            };
            let result = a_star_search(
                &grid,
                (0, 0),
                (SIZE - 1, SIZE - 1),
                &config,
                &mut config.noise_source(),
            );
            let run = Run {
                runtime: result.runtime,
                nodes_created: result.nodes_created,
                cost: result.cost(),
            };
            (heuristic, run)
        })
        .collect()
}

fn main() {
    let runs: Vec<Vec<(Heuristic, Run)>> = (0..GRIDS).into_par_iter().map(run_all).collect();
    println!("finished {} Grids of size {}x{}", GRIDS, SIZE, SIZE);

    // uniform-cost search always finds the cheapest Path
    let best: Vec<Option<usize>> = runs
        .iter()
        .map(|grid_runs| {
            grid_runs
                .iter()
                .find(|(h, _)| *h == Heuristic::Zero)
                .and_then(|(_, run)| run.cost)
        })
        .collect();

    let mut results: FnvHashMap<Heuristic, Vec<(usize, Run)>> = FnvHashMap::default();
    for (i, grid_runs) in runs.iter().enumerate() {
        for &(heuristic, run) in grid_runs {
            results.entry(heuristic).or_default().push((i, run));
        }
    }

    for heuristic in Heuristic::all() {
        let results = &results[&heuristic];

        let times = results.iter().map(|(_, r)| r.runtime.as_secs_f64() * 1000.0);
        let min_time = times.clone().fold(f64::INFINITY, f64::min);
        let max_time = times.clone().fold(0.0_f64, f64::max);
        let avg_time = times.sum::<f64>() / results.len() as f64;

        let avg_nodes = results
            .iter()
            .map(|(_, r)| r.nodes_created as f64)
            .sum::<f64>()
            / results.len() as f64;

        assert!(results
            .iter()
            .all(|(i, r)| r.cost.is_some() == best[*i].is_some()));

        let ratios = results
            .iter()
            .filter_map(|(i, r)| Some(best[*i]? as f64 / r.cost? as f64));
        let found = ratios.clone().count();
        let worst = ratios.clone().fold(1.0_f64, f64::min);
        let avg = if found == 0 {
            1.0
        } else {
            ratios.sum::<f64>() / found as f64
        };

        println!(
            "{} | {:.3}ms - {:.3}ms; {:.3}ms | {:.1} nodes | {} paths, quality {:.2}% worst, {:.2}% avg",
            heuristic,
            min_time,
            max_time,
            avg_time,
            avg_nodes,
            found,
            worst * 100.0,
            avg * 100.0,
        );
    }
}
