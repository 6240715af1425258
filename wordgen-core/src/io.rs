use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::io;

/// Reads a text file fully into memory as a single `String`.
///
/// The corpus is loaded whole before any model building starts; even a
/// file containing an entire dictionary fits comfortably in memory.
/// Invalid UTF-8 surfaces as an `InvalidData` error.
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}
