use env_logger::Env;

use criterion::{criterion_group, criterion_main, Criterion};

use grid_astar::{a_star_search, maps::MAPS, FixedOffset, Grid, Heuristic, SearchConfig};
use nanorand::{Rng, WyRand};

/// A Grid where roughly one in ten Tiles is solid and the rest cost 1 to 9
fn new_random(height: usize, width: usize) -> Grid {
    let mut rng = WyRand::new_seed(4);
    let mut rows = Vec::with_capacity(height);
    for _ in 0..height {
        let row = (0..width).map(|_| rng.generate_range(0..10usize)).collect();
        rows.push(row);
    }
    rows[0][0] = 1;
    rows[height - 1][width - 1] = 1;
    Grid::new(rows).expect("rows have equal length")
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "debug") // Change this from debug to trace to see every expansion.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_fixture_maps(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fixture Maps");

    for (i, map) in MAPS.iter().enumerate() {
        let grid = map.grid().expect("fixture maps are rectangular");

        for heuristic in Heuristic::all() {
            let config = SearchConfig::with_heuristic(heuristic);
            let id = format!("Map {} ({}), {}", i + 1, map.name, heuristic);
            group.bench_function(&id, |b| {
                b.iter(|| {
                    a_star_search(
                        &grid,
                        map.start,
                        map.goal,
                        &config,
                        &mut FixedOffset(1),
                    )
                })
            });
        }
    }
}

fn bench_random_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random Map");

    // the open list is scanned linearly, larger Grids take far too long
    group.sample_size(10);

    let (height, width) = (48, 48);
    let grid = new_random(height, width);

    for heuristic in Heuristic::all() {
        let config = SearchConfig {
            heuristic,
            seed: Some(4),
            size_hint: height * width,
        };
        let id = format!("Map Size: ({}, {}), {}", height, width, heuristic);
        group.bench_function(&id, |b| {
            b.iter(|| {
                a_star_search(
                    &grid,
                    (0, 0),
                    (height - 1, width - 1),
                    &config,
                    &mut config.noise_source(),
                )
            })
        });
    }
}

criterion_group!(benches, bench_fixture_maps, bench_random_map);
criterion_main!(benches);
