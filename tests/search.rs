use grid_astar::{
    a_star_search, maps, neighbors::manhattan_distance, search, Error, FixedOffset, Grid,
    Heuristic, Path, Point, SearchConfig,
};
use nanorand::{Rng, WyRand};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn run_fixture(number: isize, heuristic: Heuristic, offset: isize) -> grid_astar::SearchResult {
    let map = maps::get(number).unwrap();
    let grid = map.grid().unwrap();
    a_star_search(
        &grid,
        map.start,
        map.goal,
        &SearchConfig::with_heuristic(heuristic),
        &mut FixedOffset(offset),
    )
}

/// Checks that `path` walks from `start` to `goal` in single steps over open Tiles and that
/// its Cost is the sum of every entered Tile.
fn assert_valid(grid: &Grid, path: &Path<Point>, start: Point, goal: Point) {
    assert_eq!(path.start(), Some(&start));
    assert_eq!(path.goal(), Some(&goal));
    for step in path.windows(2) {
        assert_eq!(manhattan_distance(step[0], step[1]), 1, "{}", path);
        assert!(grid.is_passable(step[1]), "{}", path);
    }
    let cost: usize = path.iter().skip(1).map(|&p| grid.cost(p).unwrap()).sum();
    assert_eq!(path.cost(), cost);
}

/// The cheapest Cost from `start` to `goal`, by plain Dijkstra
fn cheapest(grid: &Grid, start: Point, goal: Point) -> Option<usize> {
    let (height, width) = grid.size();
    let mut best = vec![vec![usize::MAX; width]; height];
    let mut next = BinaryHeap::new();
    next.push(Reverse((0, start)));
    if start.0 < height && start.1 < width {
        best[start.0][start.1] = 0;
    }

    while let Some(Reverse((cost, (row, col)))) = next.pop() {
        if (row, col) == goal {
            return Some(cost);
        }
        if row < height && col < width && best[row][col] < cost {
            continue;
        }
        let candidates = [
            (row as isize, col as isize - 1),
            (row as isize, col as isize + 1),
            (row as isize - 1, col as isize),
            (row as isize + 1, col as isize),
        ];
        for (r, c) in candidates {
            if r < 0 || c < 0 {
                continue;
            }
            let other = (r as usize, c as usize);
            let step = match grid.cost(other) {
                Some(step) if step > 0 => step,
                _ => continue,
            };
            if cost + step < best[other.0][other.1] {
                best[other.0][other.1] = cost + step;
                next.push(Reverse((cost + step, other)));
            }
        }
    }
    None
}

fn random_grid(rng: &mut WyRand, height: usize, width: usize) -> Grid {
    let rows = (0..height)
        .map(|_| (0..width).map(|_| rng.generate_range(0..6usize)).collect())
        .collect();
    Grid::new(rows).unwrap()
}

#[test]
fn fixture_costs_and_nodes() {
    // (map, heuristic, cost, nodes created)
    #[rustfmt::skip]
    let expected = [
        (1, Heuristic::Zero, Some(12), 64),
        (1, Heuristic::Manhattan, Some(12), 51),
        (1, Heuristic::ScaledManhattan, Some(12), 34),
        (2, Heuristic::Zero, None, 110),
        (2, Heuristic::Manhattan, None, 112),
        (2, Heuristic::ScaledManhattan, None, 112),
        (3, Heuristic::Zero, Some(21), 203),
        (3, Heuristic::Manhattan, Some(21), 126),
        (3, Heuristic::ScaledManhattan, Some(21), 73),
        (4, Heuristic::Zero, Some(18), 103),
        (4, Heuristic::Manhattan, Some(18), 76),
        (4, Heuristic::ScaledManhattan, Some(18), 36),
        (5, Heuristic::Zero, Some(18), 85),
        (5, Heuristic::Manhattan, Some(18), 42),
        (5, Heuristic::ScaledManhattan, Some(18), 42),
    ];

    for (number, heuristic, cost, nodes) in expected {
        let result = run_fixture(number, heuristic, 0);
        assert_eq!(result.cost(), cost, "map {}, {}", number, heuristic);
        assert_eq!(result.nodes_created, nodes, "map {}, {}", number, heuristic);
    }
}

#[test]
fn fixture_paths() {
    let result = run_fixture(1, Heuristic::Manhattan, 0);
    assert_eq!(
        result.path.unwrap().path,
        vec![(1, 2), (1, 3), (2, 3), (3, 3), (4, 3)]
    );

    let result = run_fixture(3, Heuristic::Zero, 0);
    #[rustfmt::skip]
    assert_eq!(
        result.path.unwrap().path,
        vec![(1, 2), (2, 2), (2, 3), (2, 4), (3, 4), (3, 5), (3, 6), (4, 6), (5, 6), (5, 7), (6, 7), (7, 7), (8, 7), (8, 8)],
    );

    // the toll along the top row sends the search down the left side instead
    let result = run_fixture(5, Heuristic::Manhattan, 0);
    let path = result.path.unwrap();
    assert_eq!(path[1], (1, 0));
    assert_eq!(path.len(), 19);
}

#[test]
fn fixed_noise() {
    let high = run_fixture(1, Heuristic::NoisyManhattan, 3);
    assert_eq!(high.cost(), Some(12));
    assert_eq!(high.nodes_created, 51);

    let low = run_fixture(1, Heuristic::NoisyManhattan, -3);
    assert_eq!(low.cost(), Some(12));
    assert_eq!(low.nodes_created, 60);
}

#[test]
fn small_weighted_example() {
    let map = maps::get(1).unwrap();
    let grid = map.grid().unwrap();
    assert_eq!(grid.size(), (5, 7));

    let result = search(&grid, (1, 2), (4, 3), 2).unwrap();

    let path = result.path.unwrap();
    assert_eq!(path.start(), Some(&(1, 2)));
    assert_eq!(path.goal(), Some(&(4, 3)));
    assert!(path.cost() > 0);
    assert_valid(&grid, &path, (1, 2), (4, 3));
}

#[test]
fn invalid_heuristic_is_not_a_missing_path() {
    let map = maps::get(2).unwrap();
    let grid = map.grid().unwrap();

    let missing = search(&grid, map.start, map.goal, 1).unwrap();
    assert!(!missing.is_found());

    let invalid = search(&grid, map.start, map.goal, 5);
    assert_eq!(invalid, Err(Error::InvalidHeuristic(5)));
}

#[test]
fn all_fixture_paths_are_valid() {
    for map in maps::MAPS.iter() {
        let grid = map.grid().unwrap();
        for heuristic in Heuristic::all() {
            let config = SearchConfig::with_heuristic(heuristic);
            let result = a_star_search(
                &grid,
                map.start,
                map.goal,
                &config,
                &mut config.noise_source(),
            );
            if let Some(path) = result.path {
                assert_valid(&grid, &path, map.start, map.goal);
            }
        }
    }
}

#[test]
fn zero_heuristic_is_optimal() {
    let mut rng = WyRand::new_seed(1234);

    for _ in 0..200 {
        let grid = random_grid(&mut rng, 6, 7);
        let start = (rng.generate_range(0..6usize), rng.generate_range(0..7usize));
        let goal = (rng.generate_range(0..6usize), rng.generate_range(0..7usize));

        let result = a_star_search(
            &grid,
            start,
            goal,
            &SearchConfig::UNIFORM_COST,
            &mut FixedOffset(0),
        );

        assert_eq!(result.cost(), cheapest(&grid, start, goal), "\n{}", grid);
        if let Some(path) = result.path {
            assert_valid(&grid, &path, start, goal);
        }
    }
}

#[test]
fn every_heuristic_finds_a_reachable_goal() {
    let mut rng = WyRand::new_seed(99);

    for seed in 0..100 {
        let grid = random_grid(&mut rng, 5, 8);
        let (start, goal) = ((0, 0), (4, 7));
        let reachable = cheapest(&grid, start, goal).is_some();

        for heuristic in Heuristic::all() {
            let config = SearchConfig {
                heuristic,
                seed: Some(seed),
                size_hint: 40,
            };
            let result = a_star_search(&grid, start, goal, &config, &mut config.noise_source());

            assert_eq!(result.is_found(), reachable, "{}\n{}", heuristic, grid);
            if let Some(path) = result.path {
                assert_valid(&grid, &path, start, goal);
            }
        }
    }
}

#[test]
fn isolated_goal() {
    let grid = Grid::from_rows(&[
        [1, 1, 1, 1, 1],
        [1, 1, 0, 1, 1],
        [1, 0, 3, 0, 1],
        [1, 1, 0, 1, 1],
    ]);

    for heuristic in Heuristic::all() {
        let result = a_star_search(
            &grid,
            (0, 0),
            (2, 2),
            &SearchConfig::with_heuristic(heuristic),
            &mut FixedOffset(2),
        );
        assert_eq!(result.path, None);
        assert!(result.nodes_created > 0);
    }
}
