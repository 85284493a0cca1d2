use chrono::{Datelike, NaiveDate};

use crate::{
    foundation::error::{ScripturaError, ScripturaResult},
    plan::generator::{PeriodKind, Schedule, SchedulePeriod},
};

/// Ordinal of December 31st in a leap year.
const LEAP_YEAR_LAST_DAY: u32 = 366;

/// Map a calendar date onto a 1-based period index.
///
/// Days use the day of the year, months the month number. A date past `horizon` has no index
/// (`Ok(None)`), with one exception: December 31st of a leap year lands on day 365 of a 365-day
/// plan. The date is always passed in; nothing here reads the clock.
pub fn period_index_for_date(
    date: NaiveDate,
    kind: PeriodKind,
    horizon: u32,
) -> ScripturaResult<Option<u32>> {
    if horizon == 0 {
        return Err(ScripturaError::validation("plan horizon must be > 0"));
    }
    let raw = match kind {
        PeriodKind::Day if date.ordinal() == LEAP_YEAR_LAST_DAY && horizon == 365 => 365,
        PeriodKind::Day => date.ordinal(),
        PeriodKind::Month => date.month(),
    };
    Ok((raw <= horizon).then_some(raw))
}

/// The period scheduled for `date`, or `None` when the date is past the horizon or the plan
/// finished before that index.
pub fn period_for_date(schedule: &Schedule, date: NaiveDate) -> Option<&SchedulePeriod> {
    let index = period_index_for_date(date, schedule.kind, schedule.horizon).ok()??;
    schedule.period(index)
}

#[cfg(test)]
#[path = "../../tests/unit/plan/calendar.rs"]
mod tests;
