use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{
    canon::index::{Canon, UnitId},
    foundation::error::{ScripturaError, ScripturaResult},
    plan::generator::{Schedule, SchedulePeriod},
    progress::store::ProgressStore,
};

/// Completion counts for one period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PeriodProgress {
    /// Units marked complete.
    pub done: usize,
    /// Units in the period.
    pub total: usize,
}

impl PeriodProgress {
    /// Every unit is done. Vacuously `true` for an empty period.
    pub fn is_complete(self) -> bool {
        self.done == self.total
    }
}

/// Aggregate view over a schedule.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ProgressSummary {
    /// Valid completed units (stale ids excluded).
    pub completed: usize,
    /// Units in the canon.
    pub total: usize,
    /// Rounded percentage in `[0, 100]`.
    pub percentage: u8,
    /// Periods whose units are all complete.
    pub periods_complete: usize,
    /// Periods in the schedule.
    pub periods_total: usize,
    /// Index of the first period with unread units, if any.
    pub next_period: Option<u32>,
}

/// Owns the completed-unit set for one user session.
///
/// Mutations hold the set lock across the persistence write, so concurrent toggles never lose an
/// update. The in-memory set is authoritative for the session; a failed write is reported but
/// never rolled back.
pub struct ProgressTracker<S: ProgressStore> {
    store: S,
    valid: BTreeSet<UnitId>,
    completed: Mutex<BTreeSet<UnitId>>,
}

impl<S: ProgressStore> ProgressTracker<S> {
    /// Load progress from `store`.
    ///
    /// Missing or unreadable state starts an empty set; it is logged, never returned as an error.
    #[tracing::instrument(skip(canon, store))]
    pub fn open(canon: &Canon, store: S) -> Self {
        let valid = canon.unit_ids();
        let completed: BTreeSet<UnitId> = match store.load() {
            Ok(Some(ids)) => ids.into_iter().collect(),
            Ok(None) => {
                tracing::debug!("no stored progress; starting empty");
                BTreeSet::new()
            }
            Err(err) => {
                tracing::warn!(error = %err, "stored progress is unusable; starting empty");
                BTreeSet::new()
            }
        };

        let stale = completed.iter().filter(|id| !valid.contains(*id)).count();
        if stale > 0 {
            tracing::info!(stale, "stored progress references units outside the canon");
        }
        tracing::debug!(loaded = completed.len(), "opened progress tracker");

        Self {
            store,
            valid,
            completed: Mutex::new(completed),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flip `id` and persist. Returns the new membership.
    ///
    /// An unknown or malformed id is rejected without mutation. If the write fails the flip is kept
    /// in memory and a [`ScripturaError::Persistence`] is returned.
    pub fn toggle(&self, id: &UnitId) -> ScripturaResult<bool> {
        self.check(id)?;
        let mut set = self.lock();
        let now_complete = if set.remove(id) {
            false
        } else {
            set.insert(id.clone());
            true
        };
        tracing::debug!(unit = %id, now_complete, "toggled unit");
        self.persist(&set)?;
        Ok(now_complete)
    }

    /// Mark `id` complete or incomplete. Returns whether the set changed; unchanged sets are not
    /// written.
    pub fn set_complete(&self, id: &UnitId, complete: bool) -> ScripturaResult<bool> {
        self.check(id)?;
        let mut set = self.lock();
        let changed = if complete {
            set.insert(id.clone())
        } else {
            set.remove(id)
        };
        if changed {
            tracing::debug!(unit = %id, complete, "updated unit");
            self.persist(&set)?;
        }
        Ok(changed)
    }

    /// Mark every unit of `period` complete with a single write. Returns how many changed.
    pub fn complete_period(&self, period: &SchedulePeriod) -> ScripturaResult<usize> {
        let ids: Vec<UnitId> = period.unit_ids().collect();
        for id in &ids {
            self.check(id)?;
        }
        let mut set = self.lock();
        let changed = ids.into_iter().filter(|id| set.insert(id.clone())).count();
        if changed > 0 {
            tracing::debug!(period = period.index, changed, "completed period");
            self.persist(&set)?;
        }
        Ok(changed)
    }

    /// Membership test.
    pub fn is_complete(&self, id: &UnitId) -> bool {
        self.lock().contains(id)
    }

    /// Snapshot of the completed set, stale ids included.
    pub fn completed_ids(&self) -> Vec<UnitId> {
        self.lock().iter().cloned().collect()
    }

    /// Completed units that still exist in the canon.
    pub fn completed_count(&self) -> usize {
        self.lock().intersection(&self.valid).count()
    }

    /// Every unit of `period` is complete. Empty periods are vacuously complete.
    pub fn period_completion(&self, period: &SchedulePeriod) -> bool {
        self.period_progress(period).is_complete()
    }

    /// Done/total counts for `period`.
    pub fn period_progress(&self, period: &SchedulePeriod) -> PeriodProgress {
        let set = self.lock();
        let done = period.units.iter().filter(|u| set.contains(&u.id())).count();
        PeriodProgress {
            done,
            total: period.units.len(),
        }
    }

    /// `round(100 * |completed ∩ canon| / total)`, clamped to `[0, 100]`.
    pub fn aggregate_percentage(&self) -> u8 {
        percentage(self.completed_count(), self.valid.len())
    }

    /// Aggregate and per-period figures for `schedule`.
    pub fn summary(&self, schedule: &Schedule) -> ProgressSummary {
        let mut periods_complete = 0;
        let mut next_period = None;
        for period in &schedule.periods {
            if self.period_completion(period) {
                periods_complete += 1;
            } else if next_period.is_none() {
                next_period = Some(period.index);
            }
        }
        let completed = self.completed_count();
        ProgressSummary {
            completed,
            total: self.valid.len(),
            percentage: percentage(completed, self.valid.len()),
            periods_complete,
            periods_total: schedule.periods.len(),
            next_period,
        }
    }

    fn check(&self, id: &UnitId) -> ScripturaResult<()> {
        id.parse()?;
        if !self.valid.contains(id) {
            return Err(ScripturaError::validation(format!(
                "unit '{id}' is not part of the canon"
            )));
        }
        Ok(())
    }

    fn persist(&self, set: &BTreeSet<UnitId>) -> ScripturaResult<()> {
        self.store.save(set).map_err(|err| {
            tracing::warn!(error = %err, "progress write failed; keeping in-memory state");
            match err {
                err @ ScripturaError::Persistence(_) => err,
                other => ScripturaError::persistence(other.to_string()),
            }
        })
    }

    fn lock(&self) -> MutexGuard<'_, BTreeSet<UnitId>> {
        self.completed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    let rounded = (200 * completed + total) / (2 * total);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

#[cfg(test)]
#[path = "../../tests/unit/progress/tracker.rs"]
mod tests;
