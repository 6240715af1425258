use thiserror::Error;

/// Errors raised while loading a training corpus.
///
/// Only the fatal path lives here. Degenerate corpora (no spaces, fewer
/// than three symbols) are not errors; generation simply produces short
/// or capped output for them.
#[derive(Error, Debug)]
pub enum ModelError {
	/// Propagated I/O error (missing, unreadable or non-UTF-8 input).
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}
