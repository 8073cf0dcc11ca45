//! How a Path may move along the Grid

use crate::Point;
use std::fmt::Debug;

/// Defines how a Path can move along the Grid.
///
/// It provides a function to query all neighboring Points of an existing Point.
///
/// Only [`ManhattanNeighborhood`] is provided, since the search only moves up, down, left or right.
pub trait Neighborhood: Clone + Debug {
	/// Provides a list of Neighbors of a Point
	///
	/// Note that it is not necessary to check weather the Tile at a Point is solid or not.
	/// That check is done later.
	fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>>;
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
///
/// Neighbors are always produced in the order left, right, up, down. The search depends on that
/// order to break ties between equally good Nodes.
#[derive(Clone, Copy, Debug)]
pub struct ManhattanNeighborhood {
	height: usize,
	width: usize,
}

impl ManhattanNeighborhood {
	/// Creates a new ManhattanNeighborhood.
	///
	/// `height` and `width` are the number of rows and columns of the Grid to move on.
	pub fn new(height: usize, width: usize) -> ManhattanNeighborhood {
		ManhattanNeighborhood { height, width }
	}
}

/// `(row, column)` offsets in the order in which neighbors are generated
const OFFSETS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

impl Neighborhood for ManhattanNeighborhood {
	fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>> {
		let (height, width) = (self.height, self.width);

		let iter = OFFSETS
			.iter()
			.map(move |(dr, dc)| (point.0 as isize + dr, point.1 as isize + dc))
			.filter(move |(r, c)| {
				*r >= 0 && *c >= 0 && (*r as usize) < height && (*c as usize) < width
			})
			.map(|(r, c)| (r as usize, c as usize));

		Box::new(iter)
	}
}

/// Sum of the absolute coordinate differences of two Points, ignoring any solid Tiles in between.
///
/// This is the length of the shortest Path through a [`ManhattanNeighborhood`] on an open Grid.
pub fn manhattan_distance(a: Point, b: Point) -> usize {
	a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

#[test]
fn test_manhattan_get_all_neighbors() {
	let neighborhood = ManhattanNeighborhood::new(5, 5);
	assert_eq!(
		neighborhood.get_all_neighbors((0, 2)).collect::<Vec<_>>(),
		vec![(0, 1), (0, 3), (1, 2)],
	);
	assert_eq!(
		neighborhood.get_all_neighbors((2, 2)).collect::<Vec<_>>(),
		vec![(2, 1), (2, 3), (1, 2), (3, 2)],
	);
	assert_eq!(
		neighborhood.get_all_neighbors((4, 4)).collect::<Vec<_>>(),
		vec![(4, 3), (3, 4)],
	);
}

#[test]
fn test_manhattan_outside_grid() {
	// a start outside of the Grid may still step back in
	let neighborhood = ManhattanNeighborhood::new(5, 7);
	assert_eq!(
		neighborhood.get_all_neighbors((5, 0)).collect::<Vec<_>>(),
		vec![(4, 0)],
	);
}

#[test]
fn test_manhattan_distance() {
	assert_eq!(manhattan_distance((3, 1), (0, 0)), 3 + 1);
	assert_eq!(manhattan_distance((1, 2), (4, 3)), 4);
	assert_eq!(manhattan_distance((2, 2), (2, 2)), 0);
}
