use std::collections::HashMap;
use std::path::Path;

use log::debug;

use serde::{Deserialize, Serialize};

use super::state::State;
use crate::error::ModelError;
use crate::io::read_file;

/// Number of context orders tracked by the model (0, 1 and 2).
const ORDERS: usize = 3;

/// Frequency tables over character contexts of length 0, 1 and 2.
///
/// Each table maps a context (the symbols preceding a position in the
/// training text) to the counts of every symbol observed immediately
/// after it. Contexts and continuations are Unicode code points, never
/// bytes, so multi-byte characters are handled like any other.
///
/// # Responsibilities
/// - Normalize the corpus (line breaks collapse to single spaces)
/// - Pre-initialize each order's context set from the lower orders
/// - Accumulate continuation counts in one pass per order
///
/// # Invariants
/// - Order-0 holds exactly one context, the empty string
/// - Order-1 contexts are the symbols observed anywhere in the corpus
/// - Order-2 contexts are the pairs `c + d` where `d` was observed
///   following `c`
/// - The sum of counts under a context equals the number of positions
///   where that context was immediately followed by some symbol
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FrequencyModel {
	tables: [HashMap<String, State>; ORDERS],
}

impl FrequencyModel {
	/// Builds the three frequency tables from raw corpus text.
	///
	/// Line breaks in any common form (`\r\n` or bare `\n`) become single
	/// spaces before counting, so line ends act as word boundaries.
	///
	/// For each order `n`, the context set is created explicitly before
	/// counting: nested maps cannot be written through a missing entry,
	/// and seeding order `n` from the tables below it restricts contexts
	/// to combinations actually observed. The counting pass then slides a
	/// window of length `n + 1` over the symbols; the loop bound keeps
	/// every window inside the corpus.
	///
	/// Corpora shorter than three symbols leave the higher-order tables
	/// sparse or empty. That is tolerated here and handled at generation
	/// time, not an error.
	pub fn train(text: &str) -> Self {
		let normalized = normalize(text);
		let symbols: Vec<char> = normalized.chars().collect();

		let mut tables: [HashMap<String, State>; ORDERS] = Default::default();
		for order in 0..ORDERS {
			match order {
				0 => {
					tables[0].insert(String::new(), State::new());
				}
				1 => {
					for c in continuations(&tables[0], "") {
						tables[1].insert(c.to_string(), State::new());
					}
				}
				_ => {
					for c in continuations(&tables[0], "") {
						for d in continuations(&tables[1], &c.to_string()) {
							let mut key = c.to_string();
							key.push(d);
							tables[2].insert(key, State::new());
						}
					}
				}
			}

			for i in 0..symbols.len().saturating_sub(order) {
				let context: String = symbols[i..i + order].iter().collect();
				let next = symbols[i + order];
				if let Some(state) = tables[order].get_mut(&context) {
					state.record(next);
				}
			}

			debug!("order-{} table: {} contexts", order, tables[order].len());
		}

		Self { tables }
	}

	/// Reads a corpus file fully into memory and trains on it.
	///
	/// # Errors
	/// Fails if the file is missing, unreadable or not valid UTF-8. This
	/// is the fatal path: nothing is built from a corpus that cannot be
	/// read, and no partial model is returned.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
		let contents = read_file(path)?;
		Ok(Self::train(&contents))
	}

	/// Looks up the state recorded for `key` in the table of the given order.
	pub(crate) fn context(&self, order: usize, key: &str) -> Option<&State> {
		self.tables.get(order)?.get(key)
	}

	/// Number of contexts present in the table of the given order.
	pub fn context_count(&self, order: usize) -> usize {
		self.tables.get(order).map_or(0, HashMap::len)
	}

	/// Total number of symbols in the normalized corpus.
	///
	/// Every position contributes exactly one order-0 observation, so
	/// this is the order-0 context's total.
	pub fn observed_symbols(&self) -> usize {
		self.context(0, "").map_or(0, State::total)
	}
}

/// Collapses line breaks in any common form to single spaces.
fn normalize(text: &str) -> String {
	text.replace("\r\n", " ").replace('\n', " ")
}

/// Continuation symbols recorded under `key`, collected into a `Vec` so
/// the next order's table can be filled without borrowing this one.
fn continuations(table: &HashMap<String, State>, key: &str) -> Vec<char> {
	table.get(key).map_or_else(Vec::new, |state| state.symbols().collect())
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::FrequencyModel;

	#[test]
	fn order0_total_matches_symbol_count() {
		let model = FrequencyModel::train("cat cat cat");
		assert_eq!(model.observed_symbols(), 11);
	}

	#[test]
	fn context_sums_count_followed_positions() {
		// In "abab", "a" is followed twice and "b" once; the final "b"
		// ends the corpus and is followed by nothing.
		let model = FrequencyModel::train("abab");
		assert_eq!(model.context(1, "a").unwrap().total(), 2);
		assert_eq!(model.context(1, "a").unwrap().count('b'), 2);
		assert_eq!(model.context(1, "b").unwrap().total(), 1);
		assert_eq!(model.context(2, "ab").unwrap().count('a'), 1);
		assert_eq!(model.context(2, "ba").unwrap().count('b'), 1);
	}

	#[test]
	fn only_observed_transitions_are_counted() {
		let model = FrequencyModel::train("cat cat cat");
		let after_c = model.context(1, "c").unwrap();
		assert_eq!(after_c.count('a'), 3);
		assert_eq!(after_c.total(), 3);
		let after_ca = model.context(2, "ca").unwrap();
		assert_eq!(after_ca.count('t'), 3);
		assert_eq!(after_ca.total(), 3);
		assert!(model.context(2, "tc").is_none());
	}

	#[test]
	fn space_context_lists_word_initials() {
		let model = FrequencyModel::train("red green blue");
		let initials: Vec<char> = model.context(1, " ").unwrap().symbols().collect();
		assert_eq!(initials.len(), 2);
		assert!(initials.contains(&'g'));
		assert!(initials.contains(&'b'));
	}

	#[test]
	fn line_breaks_count_as_spaces() {
		let spaces = FrequencyModel::train("cat cat cat");
		for corpus in ["cat\ncat\ncat", "cat\r\ncat\r\ncat"] {
			let model = FrequencyModel::train(corpus);
			assert_eq!(model.observed_symbols(), spaces.observed_symbols());
			assert_eq!(
				model.context(1, " ").unwrap().count('c'),
				spaces.context(1, " ").unwrap().count('c')
			);
			assert_eq!(
				model.context(2, "t ").unwrap().count('c'),
				spaces.context(2, "t ").unwrap().count('c')
			);
		}
	}

	#[test]
	fn symbols_are_code_points_not_bytes() {
		let model = FrequencyModel::train("héhé");
		assert_eq!(model.observed_symbols(), 4);
		assert_eq!(model.context(1, "é").unwrap().count('h'), 1);
		assert_eq!(model.context(2, "hé").unwrap().count('h'), 1);
	}

	#[test]
	fn short_corpus_leaves_higher_orders_sparse() {
		let model = FrequencyModel::train("ab");
		assert_eq!(model.observed_symbols(), 2);
		assert_eq!(model.context(1, "a").unwrap().total(), 1);
		// A window of length 3 never fits in two symbols, so the "ab"
		// context exists but stays empty.
		assert_eq!(model.context(2, "ab").unwrap().total(), 0);

		let empty = FrequencyModel::train("");
		assert_eq!(empty.observed_symbols(), 0);
		assert_eq!(empty.context_count(1), 0);
		assert_eq!(empty.context_count(2), 0);
	}

	#[test]
	fn from_file_reads_and_trains() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "cat cat cat").unwrap();
		let model = FrequencyModel::from_file(file.path()).unwrap();
		assert_eq!(model.observed_symbols(), 11);
	}

	#[test]
	fn missing_file_is_fatal() {
		assert!(FrequencyModel::from_file("no/such/corpus.txt").is_err());
	}
}
