//! # Scriptura guide
//!
//! A standalone walkthrough of how a reading plan is built and tracked.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Canon`](crate::Canon): the fixed, ordered book table. Its chapter total is always summed
//!   from the table ([`Canon::total_chapters`](crate::Canon::total_chapters)), never hard-coded.
//! - [`ReadingUnit`](crate::ReadingUnit): one `(book, chapter)` pair.
//! - [`UnitId`](crate::UnitId): the stable key of a unit, `"{book}-{chapter}"`. Parsing splits on
//!   the last `-`, so `"1 Samuel-17"` round-trips.
//! - [`Schedule`](crate::Schedule): ordered [`SchedulePeriod`](crate::SchedulePeriod)s (days or
//!   months), each with its units and a display title.
//! - [`ProgressTracker`](crate::ProgressTracker): the completed set plus derived views.
//!
//! ---
//!
//! ## Generating a plan
//!
//! [`generate_plan`](crate::generate_plan) walks the flattened canon once with a single cursor.
//! With `units_per_period = auto` each period receives `ceil(total / horizon)` units; the 1,189
//! chapters of the standard canon over 365 days therefore give 4 chapters a day and 298 days.
//! Trailing periods are *absent*, not padded, and units are never reshuffled to fill the horizon.
//! A fixed count that is too small for the horizon leaves units unscheduled; the count is
//! reported in [`Schedule::unscheduled`](crate::Schedule::unscheduled).
//!
//! Periods can span books. Titles then name both ends: `"Genesis 50 – Exodus 2"`.
//! [`book_spans`](crate::book_spans) gives the per-book breakdown when a UI wants it.
//!
//! Generation is deterministic. [`Schedule::fingerprint`](crate::Schedule::fingerprint) is a
//! cheap way to compare two plans.
//!
//! ```
//! use scriptura::{Canon, PlanOptions, generate_plan};
//!
//! let canon = Canon::standard();
//! let plan = generate_plan(&canon, &PlanOptions::daily(365))?;
//! assert_eq!(plan.periods[0].title, "Genesis 1-4");
//! # Ok::<(), scriptura::ScripturaError>(())
//! ```
//!
//! ---
//!
//! ## "Today"
//!
//! [`period_index_for_date`](crate::period_index_for_date) maps a date to a period index (day of
//! year or month). Dates past the horizon have no reading, so a 30-day plan is silent in
//! December. The one exception is December 31st of a leap year, which reads day 365 of a 365-day
//! plan. The date is always a parameter; only the binary reads the clock.
//!
//! ---
//!
//! ## Tracking progress
//!
//! A [`ProgressTracker`](crate::ProgressTracker) is opened over a
//! [`ProgressStore`](crate::ProgressStore):
//!
//! - [`JsonFileStore`](crate::JsonFileStore) writes `{"version":1,"completed":[...]}` through a
//!   temp file and a rename, so readers see the old or the new document and nothing in between.
//! - [`InMemoryStore`](crate::InMemoryStore) is handy for tests and embedding.
//!
//! Opening never fails: a missing or corrupt store yields an empty set (logged at `warn`).
//! `toggle` and `set_complete` hold the set lock across the write. If the write fails the change
//! stays in memory and the caller gets a
//! [`ScripturaError::Persistence`](crate::ScripturaError::Persistence) to surface.
//!
//! Percentages intersect the completed set with the canon, so ids left over from another canon
//! (say `"Leviticus-1"` against a table without Leviticus) are ignored rather than counted.
//!
//! ```
//! use scriptura::{Canon, InMemoryStore, ProgressTracker, UnitId};
//!
//! let canon = Canon::standard();
//! let tracker = ProgressTracker::open(&canon, InMemoryStore::new());
//! tracker.toggle(&UnitId::from_raw("Genesis-1"))?;
//! assert_eq!(tracker.completed_count(), 1);
//! # Ok::<(), scriptura::ScripturaError>(())
//! ```
//!
//! ---
//!
//! ## Scene descriptions
//!
//! Renderers fetch a summary per chapter through a [`SceneSource`](crate::SceneSource).
//! [`describe_or_fallback`](crate::describe_or_fallback) turns any failure into a fixed, labelled
//! placeholder so playback never blocks on the collaborator.
