/// Which half of the canon a book belongs to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Testament {
    /// Hebrew scriptures.
    Old,
    /// Christian scriptures.
    New,
}

/// Canonical grouping of a book.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Genesis through Deuteronomy.
    Pentateuch,
    /// Joshua through Esther.
    History,
    /// Job through Song of Solomon.
    Poetry,
    /// Isaiah through Daniel.
    MajorProphets,
    /// Hosea through Malachi.
    MinorProphets,
    /// Matthew through John.
    Gospels,
    /// The Acts of the Apostles.
    Acts,
    /// Romans through Philemon.
    PaulineEpistles,
    /// Hebrews through Jude.
    GeneralEpistles,
    /// Revelation.
    Apocalypse,
}

impl Category {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pentateuch => "Pentateuch",
            Self::History => "History",
            Self::Poetry => "Poetry",
            Self::MajorProphets => "Major Prophets",
            Self::MinorProphets => "Minor Prophets",
            Self::Gospels => "Gospels",
            Self::Acts => "Acts",
            Self::PaulineEpistles => "Pauline Epistles",
            Self::GeneralEpistles => "General Epistles",
            Self::Apocalypse => "Apocalypse",
        }
    }

    /// Testament the category belongs to.
    pub fn testament(self) -> Testament {
        match self {
            Self::Pentateuch
            | Self::History
            | Self::Poetry
            | Self::MajorProphets
            | Self::MinorProphets => Testament::Old,
            Self::Gospels
            | Self::Acts
            | Self::PaulineEpistles
            | Self::GeneralEpistles
            | Self::Apocalypse => Testament::New,
        }
    }
}

/// Visual/tonal tag consumed by scene renderers. It never influences scheduling.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Cosmic, first-light imagery.
    Creation,
    /// Parted waters, desert crossings.
    Exodus,
    /// Camps, law and tabernacle.
    Wilderness,
    /// Thrones, battles and cities.
    Kingdom,
    /// Poetry and song.
    Wisdom,
    /// Visions and warnings.
    Prophecy,
    /// The life of Jesus.
    Gospel,
    /// The early church.
    Church,
    /// Epistolary, parchment tones.
    Letter,
    /// Apocalyptic imagery.
    Revelation,
}

impl Theme {
    /// Default accent color (`#rrggbb`) handed to renderers.
    pub fn accent_hex(self) -> &'static str {
        match self {
            Self::Creation => "#223355",
            Self::Exodus => "#004488",
            Self::Wilderness => "#dcb159",
            Self::Kingdom => "#8a6d1d",
            Self::Wisdom => "#5b7f6a",
            Self::Prophecy => "#7a2e2e",
            Self::Gospel => "#ffddaa",
            Self::Church => "#c56b2c",
            Self::Letter => "#5c4033",
            Self::Revelation => "#44aaff",
        }
    }
}

/// One book of the canon. Immutable once the canon is built.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Book {
    /// Display name, unique within a canon (e.g. `"1 Samuel"`).
    pub name: String,
    /// Number of chapters, always `>= 1`.
    pub chapters: u32,
    /// Canonical grouping.
    pub category: Category,
    /// Renderer tag.
    pub theme: Theme,
}

impl Book {
    /// Create a book record. Validation happens when the book is added to a canon.
    pub fn new(name: impl Into<String>, chapters: u32, category: Category, theme: Theme) -> Self {
        Self {
            name: name.into(),
            chapters,
            category,
            theme,
        }
    }

    /// Testament derived from the category.
    pub fn testament(&self) -> Testament {
        self.category.testament()
    }

    /// Return `true` when `chapter` is in `1..=chapters`.
    pub fn has_chapter(&self, chapter: u32) -> bool {
        (1..=self.chapters).contains(&chapter)
    }
}
