use std::fmt;
use std::str::FromStr;

use crate::{
    canon::index::{Canon, ReadingUnit, UnitId},
    foundation::error::{ScripturaError, ScripturaResult},
    plan::fingerprint::{ScheduleFingerprint, fingerprint_schedule},
    plan::title::period_title,
};

/// Granularity of a schedule period.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    /// One period per day (default horizon 365).
    #[default]
    Day,
    /// One period per month (default horizon 12).
    Month,
}

impl PeriodKind {
    /// Label prefix used for period names (`"Day 12"`, `"Month 3"`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Month => "Month",
        }
    }

    /// Natural horizon for one calendar year.
    pub fn default_horizon(self) -> u32 {
        match self {
            Self::Day => 365,
            Self::Month => 12,
        }
    }
}

impl FromStr for PeriodKind {
    type Err = ScripturaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "daily" => Ok(Self::Day),
            "month" | "monthly" => Ok(Self::Month),
            other => Err(ScripturaError::validation(format!(
                "unknown period kind '{other}' (expected 'day' or 'month')"
            ))),
        }
    }
}

/// How many reading units each period receives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "UnitsPerPeriodRepr", into = "UnitsPerPeriodRepr")]
pub enum UnitsPerPeriod {
    /// `ceil(total / horizon)`.
    #[default]
    Auto,
    /// A fixed count; must be `> 0`.
    Fixed(u32),
}

impl UnitsPerPeriod {
    /// Effective per-period count for `total` units over `horizon` periods.
    ///
    /// A zero horizon or `Fixed(0)` is a validation error.
    pub fn resolve(self, total: usize, horizon: u32) -> ScripturaResult<usize> {
        if horizon == 0 {
            return Err(ScripturaError::validation("plan horizon must be > 0"));
        }
        match self {
            Self::Auto => Ok(total.div_ceil(horizon as usize).max(1)),
            Self::Fixed(0) => Err(ScripturaError::validation("units per period must be > 0")),
            Self::Fixed(n) => Ok(n as usize),
        }
    }
}

impl fmt::Display for UnitsPerPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Fixed(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for UnitsPerPeriod {
    type Err = ScripturaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        let n: u32 = s.parse().map_err(|_| {
            ScripturaError::validation(format!(
                "units per period must be 'auto' or a positive integer, got '{s}'"
            ))
        })?;
        if n == 0 {
            return Err(ScripturaError::validation("units per period must be > 0"));
        }
        Ok(Self::Fixed(n))
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum UnitsPerPeriodRepr {
    Count(u32),
    Keyword(String),
}

impl TryFrom<UnitsPerPeriodRepr> for UnitsPerPeriod {
    type Error = ScripturaError;

    fn try_from(repr: UnitsPerPeriodRepr) -> Result<Self, Self::Error> {
        match repr {
            UnitsPerPeriodRepr::Count(0) => {
                Err(ScripturaError::validation("units per period must be > 0"))
            }
            UnitsPerPeriodRepr::Count(n) => Ok(Self::Fixed(n)),
            UnitsPerPeriodRepr::Keyword(s) => s.parse(),
        }
    }
}

impl From<UnitsPerPeriod> for UnitsPerPeriodRepr {
    fn from(v: UnitsPerPeriod) -> Self {
        match v {
            UnitsPerPeriod::Auto => Self::Keyword("auto".to_string()),
            UnitsPerPeriod::Fixed(n) => Self::Count(n),
        }
    }
}

/// Inputs to [`generate_plan`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlanOptions {
    /// Period granularity.
    pub kind: PeriodKind,
    /// Maximum number of periods.
    pub horizon: u32,
    /// Target units per period.
    pub units_per_period: UnitsPerPeriod,
}

impl PlanOptions {
    /// Daily plan over `horizon` days with an automatic per-day count.
    pub fn daily(horizon: u32) -> Self {
        Self {
            kind: PeriodKind::Day,
            horizon,
            units_per_period: UnitsPerPeriod::Auto,
        }
    }

    /// Twelve-month plan with an automatic per-month count.
    pub fn monthly() -> Self {
        Self {
            kind: PeriodKind::Month,
            horizon: PeriodKind::Month.default_horizon(),
            units_per_period: UnitsPerPeriod::Auto,
        }
    }

    /// Override the per-period count.
    pub fn with_units_per_period(mut self, units_per_period: UnitsPerPeriod) -> Self {
        self.units_per_period = units_per_period;
        self
    }

    /// Reject non-positive horizons and per-period counts.
    pub fn validate(&self) -> ScripturaResult<()> {
        if self.horizon == 0 {
            return Err(ScripturaError::validation("plan horizon must be > 0"));
        }
        if self.units_per_period == UnitsPerPeriod::Fixed(0) {
            return Err(ScripturaError::validation("units per period must be > 0"));
        }
        Ok(())
    }
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self::daily(PeriodKind::Day.default_horizon())
    }
}

/// One day or month of a schedule.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SchedulePeriod {
    /// 1-based ordinal within the schedule.
    pub index: u32,
    /// Period name, e.g. `"Day 4"`.
    pub label: String,
    /// Reading summary, e.g. `"Genesis 10-12"`.
    pub title: String,
    /// Units to read, in canon order.
    pub units: Vec<ReadingUnit>,
}

impl SchedulePeriod {
    /// Progress keys of the units in this period.
    pub fn unit_ids(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.units.iter().map(ReadingUnit::id)
    }

    /// Number of units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Return `true` when the period holds no units.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// A generated plan: an ordered partition of the canon's reading units.
///
/// Immutable after generation. Periods past the point where the canon ran out are absent rather
/// than padded.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Schedule {
    /// Period granularity.
    pub kind: PeriodKind,
    /// Requested horizon; `periods.len()` may be smaller.
    pub horizon: u32,
    /// Effective per-period count after resolving [`UnitsPerPeriod::Auto`].
    pub units_per_period: u32,
    /// Units in the canon the plan was generated from.
    pub total_units: usize,
    /// Units left over once the horizon was exhausted (0 for an `Auto` plan).
    pub unscheduled: usize,
    /// Periods in order.
    pub periods: Vec<SchedulePeriod>,
}

impl Schedule {
    /// Period by 1-based index.
    pub fn period(&self, index: u32) -> Option<&SchedulePeriod> {
        let i = usize::try_from(index.checked_sub(1)?).ok()?;
        self.periods.get(i)
    }

    /// The period containing `id`, if it was scheduled.
    pub fn period_for_unit(&self, id: &UnitId) -> Option<&SchedulePeriod> {
        self.periods
            .iter()
            .find(|p| p.units.iter().any(|u| &u.id() == id))
    }

    /// Every scheduled unit in order.
    pub fn units(&self) -> impl Iterator<Item = &ReadingUnit> + '_ {
        self.periods.iter().flat_map(|p| p.units.iter())
    }

    /// Number of scheduled units.
    pub fn scheduled_units(&self) -> usize {
        self.periods.iter().map(SchedulePeriod::len).sum()
    }

    /// Stable fingerprint of the partition and titles.
    pub fn fingerprint(&self) -> ScheduleFingerprint {
        fingerprint_schedule(self)
    }
}

/// Partition the canon into consecutive periods.
///
/// A single cursor walks the flattened canon once. Period `i` receives the next
/// `units_per_period` units; generation stops when the canon is exhausted or `horizon` periods
/// exist. Periods may span book boundaries. The result depends only on the inputs.
#[tracing::instrument(skip(canon))]
pub fn generate_plan(canon: &Canon, options: &PlanOptions) -> ScripturaResult<Schedule> {
    options.validate()?;

    let total = canon.total_chapters();
    let per = options.units_per_period.resolve(total, options.horizon)?;
    let capacity = total.div_ceil(per).min(options.horizon as usize);

    let mut cursor = canon.flatten();
    let mut periods = Vec::with_capacity(capacity);
    for index in 1..=options.horizon {
        let units: Vec<ReadingUnit> = cursor.by_ref().take(per).collect();
        if units.is_empty() {
            break;
        }
        periods.push(SchedulePeriod {
            index,
            label: format!("{} {index}", options.kind.label()),
            title: period_title(&units),
            units,
        });
    }
    let unscheduled = cursor.count();

    if unscheduled > 0 {
        tracing::warn!(
            unscheduled,
            horizon = options.horizon,
            per,
            "horizon exhausted before the canon; trailing units are not scheduled"
        );
    }
    tracing::debug!(periods = periods.len(), per, total, "generated plan");

    Ok(Schedule {
        kind: options.kind,
        horizon: options.horizon,
        units_per_period: u32::try_from(per).unwrap_or(u32::MAX),
        total_units: total,
        unscheduled,
        periods,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/plan/generator.rs"]
mod tests;
