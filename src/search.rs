use crate::{
	heuristic::NoiseSource,
	neighbors::{ManhattanNeighborhood, Neighborhood},
	path::Cost,
	Error, Grid, Heuristic, Path, Point, PointSet,
};

use log::{debug, trace};
use nanorand::WyRand;
use slab::Slab;
use std::time::{Duration, Instant};

/// Options for a single search
///
/// Default options:
/// ```
/// # use grid_astar::{Heuristic, SearchConfig};
/// assert_eq!(
/// 	SearchConfig {
/// 		heuristic: Heuristic::Manhattan,
/// 		seed: None,
/// 		size_hint: 0,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
	/// The Heuristic to guide the search with (defaults to [`Heuristic::Manhattan`])
	pub heuristic: Heuristic,
	/// `Some(seed)`: the noise of [`Heuristic::NoisyManhattan`] is reproducible.
	///
	/// `None` (default): the noise is seeded from the system.
	pub seed: Option<u64>,
	/// The expected number of created Nodes. Only used to pre-allocate (defaults to `0`)
	pub size_hint: usize,
}

impl SearchConfig {
	/// a SearchConfig that turns the search into uniform-cost search, which always finds the
	/// cheapest Path
	pub const UNIFORM_COST: SearchConfig = SearchConfig {
		heuristic: Heuristic::Zero,
		seed: None,
		size_hint: 0,
	};
	/// a SearchConfig that overestimates the remaining Cost, trading Path quality for fewer
	/// created Nodes
	pub const GREEDY: SearchConfig = SearchConfig {
		heuristic: Heuristic::ScaledManhattan,
		seed: None,
		size_hint: 0,
	};

	/// The default options with a different Heuristic
	pub fn with_heuristic(heuristic: Heuristic) -> SearchConfig {
		SearchConfig {
			heuristic,
			..Default::default()
		}
	}

	/// Creates the random number generator for [`Heuristic::NoisyManhattan`], honoring `seed`
	pub fn noise_source(&self) -> WyRand {
		match self.seed {
			Some(seed) => WyRand::new_seed(seed),
			None => WyRand::new(),
		}
	}
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig {
			heuristic: Heuristic::Manhattan,
			seed: None,
			size_hint: 0,
		}
	}
}

/// The outcome of a search
///
/// An unreachable goal is a regular outcome and is signaled by `path` being `None`.
/// `nodes_created` and `runtime` are reported either way.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
	/// The Path from start to goal, or `None` if the goal could not be reached
	pub path: Option<Path<Point>>,
	/// The number of neighbor Nodes that were generated, including those that were
	/// discarded right away because they were closed or not an improvement
	pub nodes_created: usize,
	/// The wall-clock time the search took
	pub runtime: Duration,
}

impl SearchResult {
	/// The Cost of the found Path, if any
	pub fn cost(&self) -> Option<Cost> {
		self.path.as_ref().map(Path::cost)
	}

	/// `true` if a Path was found
	pub fn is_found(&self) -> bool {
		self.path.is_some()
	}

	/// `runtime` in milliseconds
	pub fn runtime_ms(&self) -> f64 {
		self.runtime.as_secs_f64() * 1000.0
	}
}

/// One partial Path ending at `position`.
///
/// Never changed after creation. A cheaper way to an already open position becomes a new Node.
#[derive(Clone, Copy, Debug)]
struct Node {
	position: Point,
	parent: Option<usize>,
	g: Cost,
	h: f64,
	f: f64,
}

/// Searches the Grid using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The search moves up, down, left and right. Entering a Tile costs its value on the Grid, Tiles
/// with a Cost of `0` can not be entered. Neither `start` nor `goal` are checked against the
/// Grid: a solid or outside goal simply can't be reached.
///
/// Nodes that have been expanded are never opened again, even if a cheaper way to them is
/// discovered later. [`Heuristic::Zero`] always yields the cheapest Path anyway, but with an
/// overestimating Heuristic the returned Path may be more expensive than necessary.
///
/// The open list is scanned linearly for the lowest `f` and the first one wins ties, so the
/// result only depends on the Grid and the sequence of noise values.
///
/// ## Examples
/// Basic usage:
/// ```
/// use grid_astar::{a_star_search, FixedOffset, Grid, SearchConfig};
///
/// let grid = Grid::from_rows(&[
///     [1, 1, 1],
///     [1, 0, 1],
///     [1, 9, 1],
/// ]);
///
/// let result = a_star_search(
///     &grid,
///     (0, 0),
///     (2, 2),
///     &SearchConfig::default(),
///     &mut FixedOffset(0), // only used by the noisy Heuristic
/// );
///
/// let path = result.path.unwrap();
/// assert_eq!(path.path, vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);
/// assert_eq!(path.cost(), 4);
/// ```
///
/// If the goal cannot be reached, there is no Path:
/// ```
/// # use grid_astar::{a_star_search, FixedOffset, Grid, SearchConfig};
/// let grid = Grid::from_rows(&[
///     [1, 0, 1],
///     [1, 0, 1],
/// ]);
///
/// let result = a_star_search(&grid, (0, 0), (1, 2), &SearchConfig::default(), &mut FixedOffset(0));
///
/// assert_eq!(result.path, None);
/// assert_eq!(result.nodes_created, 2);
/// ```
pub fn a_star_search<R: NoiseSource + ?Sized>(
	grid: &Grid,
	start: Point,
	goal: Point,
	config: &SearchConfig,
	noise: &mut R,
) -> SearchResult {
	let start_time = Instant::now();
	let heuristic = config.heuristic;
	debug!(
		"searching {:?} -> {:?} with {} on a {:?} Grid",
		start,
		goal,
		heuristic,
		grid.size()
	);

	let (height, width) = grid.size();
	let neighborhood = ManhattanNeighborhood::new(height, width);

	let mut nodes = Slab::with_capacity(config.size_hint);
	let mut open: Vec<usize> = Vec::with_capacity(config.size_hint / 2);
	let mut closed = PointSet::with_capacity(config.size_hint);
	let mut nodes_created = 0;

	open.push(nodes.insert(Node {
		position: start,
		parent: None,
		g: 0,
		h: 0.0,
		f: 0.0,
	}));

	let mut children = vec![];

	while let Some(index) = lowest_f(&nodes, &open) {
		let current_id = open.remove(index);
		let current = nodes[current_id];
		closed.insert(current.position);

		if current.position == goal {
			let path = Path::new(backtrack(&nodes, current_id), current.g);
			let runtime = start_time.elapsed();
			debug!(
				"found Path with Cost {} after creating {} Nodes in {:?}",
				path.cost(),
				nodes_created,
				runtime
			);
			return SearchResult {
				path: Some(path),
				nodes_created,
				runtime,
			};
		}

		trace!(
			"expanding {:?}: g = {}, h = {}, f = {}",
			current.position,
			current.g,
			current.h,
			current.f
		);

		children.clear();
		children.extend(
			neighborhood
				.get_all_neighbors(current.position)
				.filter_map(|point| match grid.cost(point) {
					Some(cost) if cost > 0 => Some((point, cost)),
					_ => None,
				}),
		);
		nodes_created += children.len();

		for &(position, cost) in children.iter() {
			if closed.contains(&position) {
				continue;
			}

			// a Path whose Cost doesn't fit is never cheaper than any other
			let g = match current.g.checked_add(cost) {
				Some(g) => g,
				None => continue,
			};
			let h = heuristic.estimate(position, goal, noise);
			let f = g as f64 + h;

			// only the first open Node at a position is compared against
			if let Some(&other_id) = open.iter().find(|&&id| nodes[id].position == position) {
				if nodes[other_id].g <= g {
					continue;
				}
			}

			open.push(nodes.insert(Node {
				position,
				parent: Some(current_id),
				g,
				h,
				f,
			}));
		}
	}

	let runtime = start_time.elapsed();
	debug!(
		"no Path after creating {} Nodes in {:?}",
		nodes_created, runtime
	);
	SearchResult {
		path: None,
		nodes_created,
		runtime,
	}
}

/// Runs [`a_star_search`] with the Heuristic of the given kind number (1 to 4) and system
/// seeded noise.
///
/// ## Errors
/// [`Error::InvalidHeuristic`] if `kind` is not a known Heuristic. This is different from
/// not finding a Path, which is a successful search with [`SearchResult::path`] set to `None`.
///
/// ## Examples
/// ```
/// use grid_astar::{search, Error, Grid};
///
/// let grid = Grid::from_rows(&[[1, 1, 1]]);
///
/// let result = search(&grid, (0, 0), (0, 2), 2).unwrap();
/// assert_eq!(result.cost(), Some(2));
/// assert_eq!(result.nodes_created, 3);
///
/// assert_eq!(search(&grid, (0, 0), (0, 2), 5), Err(Error::InvalidHeuristic(5)));
/// ```
pub fn search(grid: &Grid, start: Point, goal: Point, kind: isize) -> Result<SearchResult, Error> {
	let config = SearchConfig::with_heuristic(Heuristic::from_kind(kind)?);
	Ok(a_star_search(
		grid,
		start,
		goal,
		&config,
		&mut config.noise_source(),
	))
}

/// The position in `open` of the Node with the lowest `f`. The first one wins ties.
fn lowest_f(nodes: &Slab<Node>, open: &[usize]) -> Option<usize> {
	let mut best: Option<(usize, f64)> = None;
	for (index, &id) in open.iter().enumerate() {
		let f = nodes[id].f;
		match best {
			Some((_, best_f)) if best_f <= f => {}
			_ => best = Some((index, f)),
		}
	}
	best.map(|(index, _)| index)
}

/// Follows the parents of `id` back to the start and returns the Points in walking order
fn backtrack(nodes: &Slab<Node>, id: usize) -> Vec<Point> {
	let mut steps = vec![];
	let mut current = Some(id);

	while let Some(id) = current {
		let node = &nodes[id];
		steps.push(node.position);
		current = node.parent;
	}
	steps.reverse();
	steps
}
