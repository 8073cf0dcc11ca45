//! The demo maps used by the command line tool, benchmarks and tests.
//!
//! The search never looks at these itself, they are plain input data.

use crate::{Error, Grid, Point};

/// A Grid together with the start and goal to search between
#[derive(Clone, Copy, Debug)]
pub struct MapFixture {
	/// short description of the map
	pub name: &'static str,
	/// the Costs, row by row
	pub rows: &'static [&'static [usize]],
	/// where the search starts
	pub start: Point,
	/// where the search should end
	pub goal: Point,
}

impl MapFixture {
	/// Builds the Grid of this map
	pub fn grid(&self) -> Result<Grid, Error> {
		Grid::new(self.rows.iter().map(|row| row.to_vec()).collect())
	}
}

/// Returns the map with the given 1-based number.
///
/// ## Examples
/// ```
/// use grid_astar::{maps, Error};
///
/// let map = maps::get(1).unwrap();
/// assert_eq!(map.start, (1, 2));
/// assert_eq!(map.grid().unwrap().size(), (5, 7));
///
/// assert_eq!(maps::get(0).unwrap_err(), Error::InvalidMap(0));
/// assert_eq!(maps::get(6).unwrap_err(), Error::InvalidMap(6));
/// assert_eq!(maps::get(-1).unwrap_err(), Error::InvalidMap(-1));
/// ```
pub fn get(number: isize) -> Result<&'static MapFixture, Error> {
	usize::try_from(number)
		.ok()
		.and_then(|number| number.checked_sub(1))
		.and_then(|index| MAPS.get(index))
		.ok_or(Error::InvalidMap(number))
}

/// All available maps
pub static MAPS: [MapFixture; 5] = [
	MapFixture {
		name: "small weighted",
		rows: &[
			&[2, 4, 2, 1, 4, 5, 2],
			&[0, 1, 2, 3, 5, 3, 1],
			&[2, 0, 4, 4, 1, 2, 4],
			&[2, 5, 5, 3, 2, 0, 1],
			&[4, 3, 3, 2, 1, 0, 1],
		],
		start: (1, 2),
		goal: (4, 3),
	},
	MapFixture {
		name: "solid goal",
		rows: &[
			&[1, 3, 2, 5, 1, 4, 3],
			&[2, 1, 3, 1, 3, 2, 5],
			&[3, 0, 5, 0, 1, 2, 2],
			&[5, 3, 2, 1, 5, 0, 3],
			&[2, 4, 1, 0, 0, 2, 0],
			&[4, 0, 2, 1, 5, 3, 4],
			&[1, 5, 1, 0, 2, 4, 1],
		],
		start: (3, 6),
		goal: (5, 1),
	},
	MapFixture {
		name: "weighted maze",
		rows: &[
			&[2, 0, 2, 0, 2, 0, 0, 2, 2, 0],
			&[1, 2, 3, 5, 2, 1, 2, 5, 1, 2],
			&[2, 0, 2, 2, 1, 2, 1, 2, 4, 2],
			&[2, 0, 1, 0, 1, 1, 1, 0, 0, 1],
			&[1, 1, 0, 0, 5, 0, 3, 2, 2, 2],
			&[2, 2, 2, 2, 1, 0, 1, 2, 1, 0],
			&[1, 0, 2, 1, 3, 1, 4, 3, 0, 1],
			&[2, 0, 5, 1, 5, 2, 1, 2, 4, 1],
			&[1, 2, 2, 2, 0, 2, 0, 1, 1, 0],
			&[5, 1, 2, 1, 1, 1, 2, 0, 1, 2],
		],
		start: (1, 2),
		goal: (8, 8),
	},
	MapFixture {
		name: "spiral",
		rows: &[
			&[1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
			&[1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
			&[1, 0, 1, 1, 1, 1, 1, 1, 0, 1],
			&[1, 0, 1, 0, 0, 0, 0, 1, 0, 1],
			&[1, 0, 1, 0, 1, 1, 0, 1, 0, 1],
			&[1, 0, 1, 0, 1, 0, 0, 1, 0, 1],
			&[1, 0, 1, 0, 1, 1, 1, 1, 0, 1],
			&[1, 0, 1, 0, 0, 0, 0, 0, 0, 1],
			&[1, 0, 1, 1, 1, 1, 1, 1, 0, 1],
			&[1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
		],
		start: (0, 0),
		goal: (9, 9),
	},
	MapFixture {
		name: "spiral with a toll",
		rows: &[
			&[1, 2, 3, 4, 5, 1, 1, 1, 1, 1],
			&[1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
			&[1, 0, 1, 1, 1, 1, 1, 1, 0, 1],
			&[1, 0, 1, 0, 0, 0, 0, 1, 0, 1],
			&[1, 0, 1, 0, 1, 1, 0, 1, 0, 1],
			&[1, 0, 1, 0, 1, 0, 0, 1, 0, 1],
			&[1, 0, 1, 0, 1, 1, 1, 1, 0, 1],
			&[1, 0, 1, 0, 0, 0, 0, 0, 0, 1],
			&[1, 0, 1, 1, 1, 1, 1, 1, 0, 1],
			&[1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
		],
		start: (0, 0),
		goal: (9, 9),
	},
];
