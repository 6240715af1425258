use std::collections::HashMap;

use rand::Rng;

use serde::{Deserialize, Serialize};

/// A single context in a frequency table.
///
/// A `State` counts how often each symbol was observed immediately after
/// one fixed context (the 0, 1 or 2 symbols preceding a position in the
/// training text).
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate continuation occurrences during training
/// - Draw the next symbol using weighted random sampling
///
/// ## Invariants
/// - Each recorded occurrence count is strictly positive
/// - The sum of counts equals the number of times the context was
///   immediately followed by some symbol in the training text
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct State {
	/// Continuation counts indexed by the next symbol.
	/// Example: { 'e' => 42, 'a' => 3 }
	transitions: HashMap<char, usize>,
}

impl State {
	/// Creates a new empty state.
	pub fn new() -> Self {
		Self {
			transitions: HashMap::new(),
		}
	}

	/// Records one occurrence of `next` following this context.
	///
	/// - If the continuation already exists, its occurrence count is increased.
	/// - Otherwise, a new continuation is created with an initial count of 1.
	pub fn record(&mut self, next: char) {
		*self.transitions.entry(next).or_insert(0) += 1;
	}

	/// Number of times `symbol` was observed after this context.
	pub fn count(&self, symbol: char) -> usize {
		self.transitions.get(&symbol).copied().unwrap_or(0)
	}

	/// Sum of all continuation counts.
	pub fn total(&self) -> usize {
		self.transitions.values().sum()
	}

	/// Iterates over the continuation symbols observed for this context.
	///
	/// Used to seed the context set of the next-higher order.
	pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
		self.transitions.keys().copied()
	}

	/// Draws one continuation with probability proportional to its count.
	///
	/// Simulates an unfair die with `total` sides: a uniform `f64` in
	/// [0, 1) is scaled by the integer total and truncated toward zero,
	/// giving an index in [0, total). Converting to an integer index up
	/// front avoids floats that would not add up exactly to 1 across the
	/// cumulative scan. Each symbol owns a contiguous sub-range of indices
	/// of length equal to its count, so the map's enumeration order does
	/// not affect the distribution.
	///
	/// Returns `None` if no continuation was ever observed.
	pub fn draw<R: Rng>(&self, rng: &mut R) -> Option<char> {
		let total = self.total();
		if total == 0 {
			return None;
		}

		let index = (rng.random::<f64>() * total as f64) as usize;

		let mut cumulative = 0;
		for (&symbol, &count) in &self.transitions {
			cumulative += count;
			if index < cumulative {
				return Some(symbol);
			}
		}

		// Reached only if counts and total disagree.
		None
	}
}
