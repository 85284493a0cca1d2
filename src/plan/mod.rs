//! Reading plan generation: a deterministic partition of the canon into ordered periods.

/// Mapping calendar dates onto period indices.
pub mod calendar;
/// Stable schedule fingerprints.
pub mod fingerprint;
/// The partitioning algorithm and schedule model.
pub mod generator;
/// Display titles for periods.
pub mod title;
