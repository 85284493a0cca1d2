use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::{
    canon::book::{Book, Category, Testament},
    canon::table::STANDARD_BOOKS,
    foundation::error::{ScripturaError, ScripturaResult},
};

/// Separator between the book name and the chapter number in a [`UnitId`].
///
/// Parsing splits on the *last* occurrence, so book names may themselves contain it.
pub const UNIT_ID_SEPARATOR: char = '-';

/// One `(book, chapter)` pair: the smallest schedulable item.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct ReadingUnit {
    /// Book display name exactly as it appears in the canon table.
    pub book: String,
    /// 1-based chapter number.
    pub chapter: u32,
}

impl ReadingUnit {
    /// Stable progress key for this unit.
    pub fn id(&self) -> UnitId {
        UnitId::from_parts(&self.book, self.chapter)
    }
}

impl fmt::Display for ReadingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)
    }
}

/// Stable identifier of a [`ReadingUnit`], e.g. `"Genesis-1"` or `"1 Samuel-17"`.
///
/// Derived only from the book name and chapter, never from a position in a plan, so ids survive
/// plan regeneration with a different horizon.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct UnitId(String);

impl UnitId {
    fn from_parts(book: &str, chapter: u32) -> Self {
        Self(format!("{book}{UNIT_ID_SEPARATOR}{chapter}"))
    }

    /// Wrap a raw string without checking it. Use [`UnitId::parse`] or [`Canon::resolve`] to
    /// validate.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split the id back into `(book, chapter)` without consulting a canon.
    pub fn parse(&self) -> ScripturaResult<(&str, u32)> {
        let (book, chapter) = self.0.rsplit_once(UNIT_ID_SEPARATOR).ok_or_else(|| {
            ScripturaError::validation(format!("unit id '{}' has no separator", self.0))
        })?;
        if book.is_empty() {
            return Err(ScripturaError::validation(format!(
                "unit id '{}' has an empty book name",
                self.0
            )));
        }
        if chapter.is_empty() || !chapter.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ScripturaError::validation(format!(
                "unit id '{}' has a non-numeric chapter",
                self.0
            )));
        }
        let chapter: u32 = chapter.parse().map_err(|_| {
            ScripturaError::validation(format!("unit id '{}' chapter is out of range", self.0))
        })?;
        Ok((book, chapter))
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UnitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered, immutable catalog of books.
///
/// Insertion order is canonical order. The chapter total is always derived from the table.
#[derive(Clone, Debug)]
pub struct Canon {
    books: Vec<Book>,
    by_name: HashMap<String, usize>,
}

impl Canon {
    /// Build a canon from an ordered book table.
    ///
    /// Rejects an empty table, empty book names, zero chapter counts and duplicate names.
    pub fn new(books: Vec<Book>) -> ScripturaResult<Self> {
        if books.is_empty() {
            return Err(ScripturaError::validation("canon must contain at least one book"));
        }

        let mut by_name = HashMap::with_capacity(books.len());
        for (idx, book) in books.iter().enumerate() {
            if book.name.trim().is_empty() {
                return Err(ScripturaError::validation(format!(
                    "book #{} has an empty name",
                    idx + 1
                )));
            }
            if book.chapters == 0 {
                return Err(ScripturaError::validation(format!(
                    "book '{}' must have at least one chapter",
                    book.name
                )));
            }
            if by_name.insert(book.name.clone(), idx).is_some() {
                return Err(ScripturaError::validation(format!(
                    "duplicate book name '{}'",
                    book.name
                )));
            }
        }

        Ok(Self { books, by_name })
    }

    /// The 66-book Protestant canon.
    pub fn standard() -> Self {
        let books = STANDARD_BOOKS
            .iter()
            .map(|&(name, chapters, category, theme)| Book::new(name, chapters, category, theme))
            .collect::<Vec<_>>();
        let by_name = books
            .iter()
            .enumerate()
            .map(|(idx, b)| (b.name.clone(), idx))
            .collect();
        Self { books, by_name }
    }

    /// Books in canonical order.
    pub fn list_books(&self) -> &[Book] {
        &self.books
    }

    /// Look up a book by its exact display name.
    pub fn book(&self, name: &str) -> Option<&Book> {
        self.by_name.get(name).map(|&idx| &self.books[idx])
    }

    /// Books in a category, canonical order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Book> + '_ {
        self.books.iter().filter(move |b| b.category == category)
    }

    /// Books in a testament, canonical order.
    pub fn by_testament(&self, testament: Testament) -> impl Iterator<Item = &Book> + '_ {
        self.books.iter().filter(move |b| b.testament() == testament)
    }

    /// Sum of every book's chapter count.
    pub fn total_chapters(&self) -> usize {
        self.books.iter().map(|b| b.chapters as usize).sum()
    }

    /// Every reading unit in canonical order. Restartable: each call starts from the beginning.
    pub fn flatten(&self) -> impl Iterator<Item = ReadingUnit> + '_ {
        self.books.iter().flat_map(|book| {
            (1..=book.chapters).map(move |chapter| ReadingUnit {
                book: book.name.clone(),
                chapter,
            })
        })
    }

    /// Build a validated reading unit.
    pub fn unit(&self, book: &str, chapter: u32) -> ScripturaResult<ReadingUnit> {
        let b = self
            .book(book)
            .ok_or_else(|| ScripturaError::validation(format!("unknown book '{book}'")))?;
        if !b.has_chapter(chapter) {
            return Err(ScripturaError::validation(format!(
                "chapter {chapter} is out of range for '{book}' (1..={})",
                b.chapters
            )));
        }
        Ok(ReadingUnit {
            book: b.name.clone(),
            chapter,
        })
    }

    /// Stable identifier for a valid `(book, chapter)` pair.
    pub fn unit_id(&self, book: &str, chapter: u32) -> ScripturaResult<UnitId> {
        self.unit(book, chapter).map(|u| u.id())
    }

    /// Parse an id and check it refers to a unit of this canon.
    pub fn resolve(&self, id: &UnitId) -> ScripturaResult<ReadingUnit> {
        let (book, chapter) = id.parse()?;
        self.unit(book, chapter)
    }

    /// Return `true` when `id` names a unit of this canon.
    pub fn contains(&self, id: &UnitId) -> bool {
        self.resolve(id).is_ok()
    }

    /// Every valid unit id. Used to drop stale ids from persisted progress.
    pub fn unit_ids(&self) -> BTreeSet<UnitId> {
        self.flatten().map(|u| u.id()).collect()
    }
}

impl Default for Canon {
    fn default() -> Self {
        Self::standard()
    }
}

/// Split a raw id string into `(book, chapter)`.
pub fn parse_unit_id(raw: &str) -> ScripturaResult<(String, u32)> {
    let id = UnitId::from_raw(raw);
    let (book, chapter) = id.parse()?;
    Ok((book.to_string(), chapter))
}

#[cfg(test)]
#[path = "../../tests/unit/canon/index.rs"]
mod tests;
