//! The canon index: the fixed, ordered catalog of books and the flat sequence of reading units
//! derived from it.

/// Book metadata and its category/theme tags.
pub mod book;
/// The ordered book table and its flattened reading units.
pub mod index;
/// Reference canon data.
pub mod table;
