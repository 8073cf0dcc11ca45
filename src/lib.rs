#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find Paths on small weighted Grids with A* and compare Heuristics.
//!
//! ## Introduction
//! Every Tile of the Grid has a Cost. `0` means the Tile is solid, any other value is what it
//! costs to *enter* that Tile. Paths move up, down, left and right.
//!
//! The search is a plain A* with a linear open list and a closed set that is never reopened.
//! The Heuristic is chosen per search from four [`Heuristic`]s, two of which overestimate on
//! purpose. Next to the Path and its Cost, every search reports how many Nodes it created and
//! how long it took, which makes the effect of a Heuristic directly visible.
//!
//! ## Examples
//! ```
//! use grid_astar::{a_star_search, Grid, Heuristic, SearchConfig};
//!
//! // 0 = wall
//! let grid = Grid::from_rows(&[
//!     [1, 1, 1, 1],
//!     [1, 0, 0, 1],
//!     [1, 5, 1, 1],
//! ]);
//! let (start, goal) = ((2, 0), (2, 2));
//!
//! let config = SearchConfig::with_heuristic(Heuristic::Zero);
//! let result = a_star_search(&grid, start, goal, &config, &mut config.noise_source());
//!
//! let path = result.path.unwrap();
//! assert_eq!(path.cost(), 6);
//! assert_eq!(path.path, vec![(2, 0), (2, 1), (2, 2)]);
//! ```
//!
//! ### Noisy Heuristics
//! [`Heuristic::NoisyManhattan`] draws a random error for every estimate. The randomness is
//! passed in as a [`NoiseSource`], so it can be seeded or replaced:
//! ```
//! # use grid_astar::{a_star_search, Grid, Heuristic, SearchConfig};
//! use grid_astar::FixedOffset;
//! # let grid = Grid::from_rows(&[
//! #     [1, 1, 1, 1],
//! #     [1, 0, 0, 1],
//! #     [1, 5, 1, 1],
//! # ]);
//!
//! let config = SearchConfig::with_heuristic(Heuristic::NoisyManhattan);
//!
//! let seeded = SearchConfig { seed: Some(42), ..config };
//! let result = a_star_search(&grid, (0, 0), (2, 3), &seeded, &mut seeded.noise_source());
//! assert!(result.is_found());
//!
//! let result = a_star_search(&grid, (0, 0), (2, 3), &config, &mut FixedOffset(-1));
//! assert_eq!(result.cost(), Some(5));
//! ```
//!
//! ### Heuristic Kinds
//! Heuristics can also be selected by their kind number (1 to 4). Unknown kinds are an
//! [`Error`], while an unreachable goal is a successful search without a Path:
//! ```
//! use grid_astar::{maps, search, Error};
//!
//! let map = maps::get(2).unwrap();
//! let grid = map.grid().unwrap();
//!
//! let result = search(&grid, map.start, map.goal, 1).unwrap();
//! assert_eq!(result.path, None);
//!
//! assert_eq!(
//!     search(&grid, map.start, map.goal, 7),
//!     Err(Error::InvalidHeuristic(7))
//! );
//! ```

/// A shorthand for Points on the grid: `(row, column)`
pub type Point = (usize, usize);

/// A [`HashSet`](hashbrown::HashSet) of Points
pub type PointSet = hashbrown::HashSet<Point>;

mod error;
pub use self::error::Error;

mod grid;
pub use self::grid::Grid;

pub mod heuristic;
pub use self::heuristic::{FixedOffset, Heuristic, NoiseSource};

pub mod maps;

pub mod neighbors;

mod path;
pub use self::path::{Cost, Path};

mod search;
pub use self::search::{a_star_search, search, SearchConfig, SearchResult};
