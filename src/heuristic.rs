//! The Heuristics available to the search and the randomness behind the noisy one

use crate::{neighbors::manhattan_distance, Error, Point};

use nanorand::{Rng, WyRand};
use std::fmt;

/// The offsets [`Heuristic::NoisyManhattan`] adds to the Manhattan distance
pub const NOISE_OFFSETS: [isize; 6] = [-3, -2, -1, 1, 2, 3];

/// The factor [`Heuristic::ScaledManhattan`] applies to the Manhattan distance
pub const SCALE_FACTOR: f64 = 1.5;

/// An estimate of the remaining Cost from a Point to the goal.
///
/// Only [`Zero`](Heuristic::Zero) and [`Manhattan`](Heuristic::Manhattan) are admissible for
/// Grids where every Tile costs at least 1. The other two may overestimate, which usually means
/// fewer created Nodes but no guarantee of finding the cheapest Path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
	/// kind 1: always `0`. The search degrades to uniform-cost search.
	Zero,
	/// kind 2: sum of the absolute coordinate differences
	Manhattan,
	/// kind 3: the Manhattan distance multiplied by [`SCALE_FACTOR`]
	ScaledManhattan,
	/// kind 4: the Manhattan distance plus one of [`NOISE_OFFSETS`] drawn on every call,
	/// clamped to `0`
	NoisyManhattan,
}
pub use self::Heuristic::*;

impl Heuristic {
	/// All Heuristics in order of their kind number
	pub fn all() -> std::iter::Copied<std::slice::Iter<'static, Heuristic>> {
		[Zero, Manhattan, ScaledManhattan, NoisyManhattan]
			.iter()
			.copied()
	}

	/// Looks up a Heuristic by its kind number (1 to 4).
	///
	/// ## Examples
	/// ```
	/// use grid_astar::{Error, Heuristic};
	///
	/// assert_eq!(Heuristic::from_kind(2), Ok(Heuristic::Manhattan));
	/// assert_eq!(Heuristic::from_kind(5), Err(Error::InvalidHeuristic(5)));
	/// ```
	pub fn from_kind(kind: isize) -> Result<Heuristic, Error> {
		match kind {
			1 => Ok(Zero),
			2 => Ok(Manhattan),
			3 => Ok(ScaledManhattan),
			4 => Ok(NoisyManhattan),
			_ => Err(Error::InvalidHeuristic(kind)),
		}
	}

	/// The kind number of this Heuristic
	pub fn kind(self) -> isize {
		match self {
			Zero => 1,
			Manhattan => 2,
			ScaledManhattan => 3,
			NoisyManhattan => 4,
		}
	}

	/// `true` if the Heuristic never overestimates on Grids with Costs of at least 1
	pub fn is_admissible(self) -> bool {
		matches!(self, Zero | Manhattan)
	}

	/// Estimates the Cost of reaching `goal` from `point`.
	///
	/// `noise` is only consulted by [`NoisyManhattan`](Heuristic::NoisyManhattan).
	pub fn estimate<R: NoiseSource + ?Sized>(self, point: Point, goal: Point, noise: &mut R) -> f64 {
		let distance = manhattan_distance(point, goal);
		match self {
			Zero => 0.0,
			Manhattan => distance as f64,
			ScaledManhattan => distance as f64 * SCALE_FACTOR,
			NoisyManhattan => (distance as isize + noise.offset()).max(0) as f64,
		}
	}
}

impl TryFrom<isize> for Heuristic {
	type Error = Error;
	fn try_from(kind: isize) -> Result<Heuristic, Error> {
		Heuristic::from_kind(kind)
	}
}

impl fmt::Display for Heuristic {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		let name = match self {
			Zero => "zero",
			Manhattan => "manhattan",
			ScaledManhattan => "scaled manhattan",
			NoisyManhattan => "noisy manhattan",
		};
		write!(fmt, "H{} ({})", self.kind(), name)
	}
}

/// A source of error offsets for [`Heuristic::NoisyManhattan`].
///
/// Implemented for [`WyRand`], which picks uniformly from [`NOISE_OFFSETS`], and for
/// [`FixedOffset`], which makes the noisy Heuristic deterministic.
pub trait NoiseSource {
	/// The next offset to add to the Manhattan distance
	fn offset(&mut self) -> isize;
}

impl NoiseSource for WyRand {
	fn offset(&mut self) -> isize {
		NOISE_OFFSETS[self.generate_range(0..NOISE_OFFSETS.len())]
	}
}

/// A [`NoiseSource`] that always returns the same offset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedOffset(pub isize);

impl NoiseSource for FixedOffset {
	fn offset(&mut self) -> isize {
		self.0
	}
}
