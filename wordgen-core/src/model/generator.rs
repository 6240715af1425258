use rand::Rng;

use super::frequency::FrequencyModel;

/// Hard cap on the generated sequence length, leading space included.
///
/// A corpus without spaces never produces the boundary symbol, so the
/// walk needs a length bound to terminate. The value is an empirical
/// tuning choice, kept as a named constant.
pub const MAX_WORD_LEN: usize = 15;

/// Symbol separating words in the corpus and terminating generation.
pub const BOUNDARY_CHAR: char = ' ';

/// Synthesizes words by walking the order-2 chain of a `FrequencyModel`.
///
/// # Responsibilities
/// - Pick a first symbol among those observed to start words
/// - Extend the sequence one weighted draw at a time
/// - Stop on the boundary symbol, an unseen context or the length cap
#[derive(Clone, Debug)]
pub struct Generator {
	model: FrequencyModel,
}

impl Generator {
	/// Wraps a trained model for generation.
	pub fn new(model: FrequencyModel) -> Self {
		Self { model }
	}

	/// Generates one word, leading boundary space included.
	///
	/// The first symbol is drawn from the order-1 table under the boundary
	/// context, which restricts starts to symbols observed right after a
	/// space. That keeps the walk a bit less non-stationary than drawing
	/// from the unconditional distribution (full stationarity would need
	/// the last symbol of the previous word). Every later symbol is drawn
	/// from the order-2 table under the last two symbols of the sequence.
	///
	/// The walk stops when a draw returns the boundary symbol, when a
	/// context has no recorded continuation (the word just ends), or when
	/// the sequence reaches `MAX_WORD_LEN` symbols.
	///
	/// Each call is an independent walk; nothing carries over between
	/// calls. Callers may trim the leading space. An empty result means
	/// no first symbol could be drawn (e.g. a corpus with no spaces at
	/// all); that is a degenerate corpus, not an error.
	pub fn generate<R: Rng>(&self, rng: &mut R) -> String {
		let boundary = BOUNDARY_CHAR.to_string();
		let first = match self
			.model
			.context(1, &boundary)
			.and_then(|state| state.draw(rng))
		{
			Some(symbol) => symbol,
			None => return String::new(),
		};

		let mut word = vec![BOUNDARY_CHAR, first];
		loop {
			let context: String = word[word.len() - 2..].iter().collect();
			let next = match self
				.model
				.context(2, &context)
				.and_then(|state| state.draw(rng))
			{
				Some(symbol) => symbol,
				None => break,
			};

			if next == BOUNDARY_CHAR {
				break;
			}
			word.push(next);
			if word.len() >= MAX_WORD_LEN {
				break;
			}
		}

		word.into_iter().collect()
	}
}
