use super::book::{
    Category::{self, *},
    Theme::{self, *},
};

/// The 66-book Protestant canon in canonical order: `(name, chapters, category, theme)`.
pub const STANDARD_BOOKS: &[(&str, u32, Category, Theme)] = &[
    ("Genesis", 50, Pentateuch, Creation),
    ("Exodus", 40, Pentateuch, Exodus),
    ("Leviticus", 27, Pentateuch, Wilderness),
    ("Numbers", 36, Pentateuch, Wilderness),
    ("Deuteronomy", 34, Pentateuch, Wilderness),
    ("Joshua", 24, History, Kingdom),
    ("Judges", 21, History, Kingdom),
    ("Ruth", 4, History, Kingdom),
    ("1 Samuel", 31, History, Kingdom),
    ("2 Samuel", 24, History, Kingdom),
    ("1 Kings", 22, History, Kingdom),
    ("2 Kings", 25, History, Kingdom),
    ("1 Chronicles", 29, History, Kingdom),
    ("2 Chronicles", 36, History, Kingdom),
    ("Ezra", 10, History, Kingdom),
    ("Nehemiah", 13, History, Kingdom),
    ("Esther", 10, History, Kingdom),
    ("Job", 42, Poetry, Wisdom),
    ("Psalms", 150, Poetry, Wisdom),
    ("Proverbs", 31, Poetry, Wisdom),
    ("Ecclesiastes", 12, Poetry, Wisdom),
    ("Song of Solomon", 8, Poetry, Wisdom),
    ("Isaiah", 66, MajorProphets, Prophecy),
    ("Jeremiah", 52, MajorProphets, Prophecy),
    ("Lamentations", 5, MajorProphets, Prophecy),
    ("Ezekiel", 48, MajorProphets, Prophecy),
    ("Daniel", 12, MajorProphets, Prophecy),
    ("Hosea", 14, MinorProphets, Prophecy),
    ("Joel", 3, MinorProphets, Prophecy),
    ("Amos", 9, MinorProphets, Prophecy),
    ("Obadiah", 1, MinorProphets, Prophecy),
    ("Jonah", 4, MinorProphets, Prophecy),
    ("Micah", 7, MinorProphets, Prophecy),
    ("Nahum", 3, MinorProphets, Prophecy),
    ("Habakkuk", 3, MinorProphets, Prophecy),
    ("Zephaniah", 3, MinorProphets, Prophecy),
    ("Haggai", 2, MinorProphets, Prophecy),
    ("Zechariah", 14, MinorProphets, Prophecy),
    ("Malachi", 4, MinorProphets, Prophecy),
    ("Matthew", 28, Gospels, Gospel),
    ("Mark", 16, Gospels, Gospel),
    ("Luke", 24, Gospels, Gospel),
    ("John", 21, Gospels, Gospel),
    ("Acts", 28, Acts, Church),
    ("Romans", 16, PaulineEpistles, Letter),
    ("1 Corinthians", 16, PaulineEpistles, Letter),
    ("2 Corinthians", 13, PaulineEpistles, Letter),
    ("Galatians", 6, PaulineEpistles, Letter),
    ("Ephesians", 6, PaulineEpistles, Letter),
    ("Philippians", 4, PaulineEpistles, Letter),
    ("Colossians", 4, PaulineEpistles, Letter),
    ("1 Thessalonians", 5, PaulineEpistles, Letter),
    ("2 Thessalonians", 3, PaulineEpistles, Letter),
    ("1 Timothy", 6, PaulineEpistles, Letter),
    ("2 Timothy", 4, PaulineEpistles, Letter),
    ("Titus", 3, PaulineEpistles, Letter),
    ("Philemon", 1, PaulineEpistles, Letter),
    ("Hebrews", 13, GeneralEpistles, Letter),
    ("James", 5, GeneralEpistles, Letter),
    ("1 Peter", 5, GeneralEpistles, Letter),
    ("2 Peter", 3, GeneralEpistles, Letter),
    ("1 John", 5, GeneralEpistles, Letter),
    ("2 John", 1, GeneralEpistles, Letter),
    ("3 John", 1, GeneralEpistles, Letter),
    ("Jude", 1, GeneralEpistles, Letter),
    ("Revelation", 22, Apocalypse, Revelation),
];
