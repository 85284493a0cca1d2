use std::fmt;

use crate::plan::generator::{PeriodKind, Schedule};

/// 128-bit fingerprint of a schedule's partition and titles.
///
/// Two schedules with the same fingerprint have the same periods, units and titles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ScheduleFingerprint {
    /// High half.
    pub hi: u64,
    /// Low half.
    pub lo: u64,
}

impl fmt::Display for ScheduleFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Hash every period index, title and unit in order.
pub fn fingerprint_schedule(schedule: &Schedule) -> ScheduleFingerprint {
    let mut a = Fnv1a64::new(0xcbf29ce484222325);
    let mut b = Fnv1a64::new(0x9ae16a3b2f90404f);

    write_u8_pair(
        &mut a,
        &mut b,
        match schedule.kind {
            PeriodKind::Day => 0,
            PeriodKind::Month => 1,
        },
    );
    write_u64_pair(&mut a, &mut b, u64::from(schedule.horizon));
    write_u64_pair(&mut a, &mut b, u64::from(schedule.units_per_period));
    write_u64_pair(&mut a, &mut b, schedule.periods.len() as u64);
    for period in &schedule.periods {
        write_u64_pair(&mut a, &mut b, u64::from(period.index));
        write_str_pair(&mut a, &mut b, &period.title);
        write_u64_pair(&mut a, &mut b, period.units.len() as u64);
        for unit in &period.units {
            write_str_pair(&mut a, &mut b, &unit.book);
            write_u64_pair(&mut a, &mut b, u64::from(unit.chapter));
        }
    }

    ScheduleFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn write_u8_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_u8(v);
    b.write_u8(v);
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

fn write_str_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, s: &str) {
    write_u64_pair(a, b, s.len() as u64);
    a.write_bytes(s.as_bytes());
    b.write_bytes(s.as_bytes());
}

#[derive(Clone, Copy)]
struct Fnv1a64(u64);

impl Fnv1a64 {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        self.0 = h;
    }

    fn finish(self) -> u64 {
        self.0
    }
}
