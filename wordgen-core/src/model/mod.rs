//! Top-level module for the word synthesis system.
//!
//! This module provides a character-level order-2 Markov word generator:
//! - Frequency tables over contexts of length 0, 1 and 2 (`FrequencyModel`)
//! - A generator walking the order-2 chain (`Generator`)
//! - Internal per-context sampling state (`State`)

/// Frequency-table construction over variable-length character contexts.
///
/// Handles corpus normalization, explicit context initialization and
/// single-pass continuation counting per order.
pub mod frequency;

/// Word generation by weighted random walk over the order-2 table.
///
/// Exposes the generation entry point and the tuning constants for the
/// length cap and the word-boundary symbol.
pub mod generator;

/// Internal representation of a single context (prefix).
///
/// Tracks continuation counts and supports weighted random draws.
/// This module is not exposed publicly.
mod state;
