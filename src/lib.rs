//! Scriptura schedules every chapter of the Bible into a reading plan and tracks progress through
//! it.
//!
//! # Pipeline overview
//!
//! 1. **Index**: [`Canon`] holds the ordered book table and flattens it into [`ReadingUnit`]s.
//! 2. **Plan**: [`generate_plan`] partitions the flat sequence into ordered periods ([`Schedule`]).
//! 3. **Track**: [`ProgressTracker`] owns the completed set, persists it through a
//!    [`ProgressStore`], and derives per-period and aggregate completion.
//!
//! Key constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic plans**: the generator never reads the clock or a random source.
//!   Calendar lookups go through [`period_index_for_date`] with an explicit date.
//! - **Stable ids**: progress is keyed by [`UnitId`] (`"Genesis-1"`), never by plan position.
//! - **Fail-open storage**: unreadable progress starts empty; failed writes keep in-memory state.
//!
//! See [`crate::guide`] for a longer walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod canon;
mod config;
mod foundation;
mod plan;
mod progress;
mod scene;

/// Walkthrough of the data model and the guarantees each stage provides.
pub mod guide;

pub use canon::book::{Book, Category, Testament, Theme};
pub use canon::index::{Canon, ReadingUnit, UNIT_ID_SEPARATOR, UnitId, parse_unit_id};
pub use canon::table::STANDARD_BOOKS;
pub use config::{DEFAULT_PROGRESS_FILE, PlanConfig};
pub use foundation::error::{ScripturaError, ScripturaResult};
pub use plan::calendar::{period_for_date, period_index_for_date};
pub use plan::fingerprint::{ScheduleFingerprint, fingerprint_schedule};
pub use plan::generator::{
    PeriodKind, PlanOptions, Schedule, SchedulePeriod, UnitsPerPeriod, generate_plan,
};
pub use plan::title::{BookSpan, CROSS_BOOK_SEPARATOR, book_spans, detailed_title, period_title};
pub use progress::store::{
    InMemoryStore, JsonFileStore, PROGRESS_DOCUMENT_VERSION, ProgressDocument, ProgressStore,
};
pub use progress::tracker::{PeriodProgress, ProgressSummary, ProgressTracker};
pub use scene::describe::{
    FALLBACK_SUMMARY_PREFIX, SceneDescription, SceneRequest, SceneSource, describe_or_fallback,
};
