use crate::{Error, Point};

use std::fmt;
use std::str::FromStr;

/// A rectangular table of traversal Costs.
///
/// A value of `0` marks a solid Tile that can never be entered. Any other value is the Cost of
/// *entering* that Tile. Points are `(row, column)`.
///
/// ## Examples
/// ```
/// use grid_astar::Grid;
///
/// let grid = Grid::new(vec![
///     vec![1, 2, 1],
///     vec![1, 0, 1],
/// ]).unwrap();
///
/// assert_eq!(grid.size(), (2, 3));
/// assert_eq!(grid.cost((0, 1)), Some(2));
/// assert!(!grid.is_passable((1, 1)));
/// assert_eq!(grid.cost((2, 0)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
	cells: Vec<usize>,
	height: usize,
	width: usize,
}

impl Grid {
	/// Creates a Grid from its rows.
	///
	/// Fails with [`Error::RaggedGrid`] if not all rows have the same length and with
	/// [`Error::NoColumns`] if there are rows but they are empty.
	pub fn new(rows: Vec<Vec<usize>>) -> Result<Grid, Error> {
		let height = rows.len();
		let width = rows.first().map_or(0, Vec::len);
		if height > 0 && width == 0 {
			return Err(Error::NoColumns(height));
		}

		let mut cells = Vec::with_capacity(width * height);
		for (row, values) in rows.into_iter().enumerate() {
			if values.len() != width {
				return Err(Error::RaggedGrid {
					row,
					expected: width,
					found: values.len(),
				});
			}
			cells.extend(values);
		}

		Ok(Grid {
			cells,
			height,
			width,
		})
	}

	/// Creates a Grid from fixed size rows, which are always rectangular.
	///
	/// Rows of length `0` leave the Grid empty.
	pub fn from_rows<const W: usize>(rows: &[[usize; W]]) -> Grid {
		let height = if W == 0 { 0 } else { rows.len() };
		Grid {
			cells: rows.iter().flatten().copied().collect(),
			height,
			width: if height == 0 { 0 } else { W },
		}
	}

	/// `(rows, columns)`
	pub fn size(&self) -> (usize, usize) {
		(self.height, self.width)
	}

	/// number of rows
	pub fn height(&self) -> usize {
		self.height
	}

	/// number of columns
	pub fn width(&self) -> usize {
		self.width
	}

	/// The Cost of entering `point`, or `None` if it lies outside the Grid.
	pub fn cost(&self, (row, col): Point) -> Option<usize> {
		if row >= self.height || col >= self.width {
			return None;
		}
		Some(self.cells[row * self.width + col])
	}

	/// `true` if `point` is inside the Grid and not solid.
	pub fn is_passable(&self, point: Point) -> bool {
		self.cost(point).map_or(false, |cost| cost > 0)
	}

	/// Iterates over the rows of the Grid
	pub fn rows(&self) -> impl Iterator<Item = &[usize]> + '_ {
		(0..self.height).map(move |row| &self.cells[row * self.width..(row + 1) * self.width])
	}
}

impl FromStr for Grid {
	type Err = Error;

	/// Parses one row per line, values separated by whitespace. Blank lines are ignored.
	fn from_str(s: &str) -> Result<Grid, Error> {
		let rows = s
			.lines()
			.map(str::trim)
			.filter(|line| !line.is_empty())
			.map(|line| {
				line.split_whitespace()
					.map(|value| {
						value
							.parse::<usize>()
							.map_err(|e| Error::ParseGrid(format!("{:?}: {}", value, e)))
					})
					.collect::<Result<Vec<_>, _>>()
			})
			.collect::<Result<Vec<_>, _>>()?;

		Grid::new(rows)
	}
}

impl fmt::Display for Grid {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		for row in self.rows() {
			let mut first = true;
			for cost in row {
				if !first {
					write!(fmt, " ")?;
				}
				first = false;
				write!(fmt, "{}", cost)?;
			}
			writeln!(fmt)?;
		}
		Ok(())
	}
}
