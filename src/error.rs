use thiserror::Error;

/// Everything that can go wrong before or during a search.
///
/// Note that an unreachable goal is *not* an Error. See
/// [`SearchResult::path`](crate::SearchResult::path) for that.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// The heuristic kind is not one of 1, 2, 3 or 4
	#[error("invalid heuristic kind: {0}")]
	InvalidHeuristic(isize),

	/// There is no fixture map with that (1-based) number
	#[error("invalid map number: {0}")]
	InvalidMap(isize),

	/// A row of the Grid has a different length than the first row
	#[error("row {row} has {found} columns, expected {expected}")]
	RaggedGrid {
		/// index of the offending row
		row: usize,
		/// length of the first row
		expected: usize,
		/// length of the offending row
		found: usize,
	},

	/// The Grid has rows, but they are all empty
	#[error("grid has {0} rows but no columns")]
	NoColumns(usize),

	/// A Grid could not be parsed from text
	#[error("failed to parse grid: {0}")]
	ParseGrid(String),
}
