use std::fmt;

use crate::canon::index::ReadingUnit;

/// Separator between the two ends of a period that crosses a book boundary.
pub const CROSS_BOOK_SEPARATOR: &str = " \u{2013} ";

/// Summary title for an ordered run of units.
///
/// - one unit: `"Genesis 1"`
/// - one book: `"Genesis 1-3"`
/// - several books: `"Genesis 50 – Exodus 2"`
///
/// An empty slice yields an empty title.
pub fn period_title(units: &[ReadingUnit]) -> String {
    let (Some(first), Some(last)) = (units.first(), units.last()) else {
        return String::new();
    };

    if first.book != last.book {
        return format!(
            "{} {}{CROSS_BOOK_SEPARATOR}{} {}",
            first.book, first.chapter, last.book, last.chapter
        );
    }
    if first.chapter == last.chapter {
        format!("{} {}", first.book, first.chapter)
    } else {
        format!("{} {}-{}", first.book, first.chapter, last.chapter)
    }
}

/// Contiguous chapters of a single book inside a period.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct BookSpan {
    /// Book display name.
    pub book: String,
    /// First chapter (inclusive).
    pub first: u32,
    /// Last chapter (inclusive).
    pub last: u32,
}

impl fmt::Display for BookSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first == self.last {
            write!(f, "{} {}", self.book, self.first)
        } else {
            write!(f, "{} {}-{}", self.book, self.first, self.last)
        }
    }
}

/// Split a run of units into per-book sub-ranges, e.g. `["Genesis 50", "Exodus 1-2"]`.
pub fn book_spans(units: &[ReadingUnit]) -> Vec<BookSpan> {
    let mut spans: Vec<BookSpan> = Vec::new();
    for unit in units {
        match spans.last_mut() {
            Some(span) if span.book == unit.book && span.last + 1 == unit.chapter => {
                span.last = unit.chapter;
            }
            _ => spans.push(BookSpan {
                book: unit.book.clone(),
                first: unit.chapter,
                last: unit.chapter,
            }),
        }
    }
    spans
}

/// Per-book breakdown joined with `"; "`.
pub fn detailed_title(units: &[ReadingUnit]) -> String {
    book_spans(units)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
#[path = "../../tests/unit/plan/title.rs"]
mod tests;
