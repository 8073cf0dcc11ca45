/// a Type to represent the Cost of a Path
pub type Cost = usize;

/// The Path returned by a successful search
///
/// Stores the sequence of Points in `path` and the total Cost of walking it in `cost`.
/// The first Point is the start, the last one the goal. Since the Cost is paid when *entering*
/// a Tile, `cost` is the sum of the Costs of every Point except the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
	/// the Path
	pub path: Vec<P>,
	/// the total Cost of the Path
	pub cost: Cost,
}

impl<P> Path<P> {
	/// creates a new Path with the given sequence of Points and total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use grid_astar::Path;
	/// let path = Path::new(vec![(0, 0), (0, 1)], 3);
	///
	/// assert_eq!(path.path, vec![(0, 0), (0, 1)]);
	/// assert_eq!(path.cost(), 3);
	/// ```
	pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
		Path { path, cost }
	}

	/// the total Cost of the Path
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// the first Point of the Path
	pub fn start(&self) -> Option<&P> {
		self.path.first()
	}

	/// the last Point of the Path
	pub fn goal(&self) -> Option<&P> {
		self.path.last()
	}
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
	type Output = P;
	fn index(&self, index: usize) -> &P {
		&self.path[index]
	}
}

impl<P> Deref for Path<P> {
	type Target = [P];
	fn deref(&self) -> &[P] {
		&self.path
	}
}

use std::cmp::Ordering;

impl<P: Eq> Ord for Path<P> {
	fn cmp(&self, other: &Path<P>) -> Ordering {
		self.cost.cmp(&other.cost)
	}
}

impl<P: Eq> PartialOrd for Path<P> {
	fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

use std::fmt;
impl<P: fmt::Debug> fmt::Display for Path<P> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{:?}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {:?}", p)?;
			}
			Ok(())
		}
	}
}
