//! Completion tracking over a schedule, backed by a pluggable durable store.

/// Durable storage contract and built-in stores.
pub mod store;
/// The completed-set owner and its derived views.
pub mod tracker;
