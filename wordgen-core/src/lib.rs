//! Word synthesis from character-level transition statistics.
//!
//! This crate builds an order-2 Markov model over the code points of a
//! training corpus and samples new words from it:
//! - Frequency tables for contexts of length 0, 1 and 2
//! - Weighted ("unfair dice") draws over observed continuations
//! - A word generator walking the order-2 chain until a word boundary
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Errors surfaced while loading a training corpus.
pub mod error;

/// Frequency model and generation logic.
///
/// This module exposes the high-level generator interface while keeping
/// internal sampling state private.
pub mod model;

/// I/O utilities (corpus loading).
///
/// Kept internal
pub(crate) mod io;
