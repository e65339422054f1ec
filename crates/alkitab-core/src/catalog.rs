//! Canonical book catalog.
//!
//! The 73-book Indonesian canon (Terjemahan Baru with deuterocanonical
//! books), each name mapped to a stable numeric identifier. The table is the
//! join key between normalized source names and the destination `book_id`
//! column, drives the paginated source's iteration order, and backs the
//! completeness audit.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// A canonical book: authoritative spelling plus stable identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CanonicalBook {
    pub name: &'static str,
    pub id: u16,
}

impl CanonicalBook {
    const fn new(name: &'static str, id: u16) -> Self {
        Self { name, id }
    }
}

/// The canonical table, in canonical order. Identifiers are never reused.
pub static CANONICAL_BOOKS: [CanonicalBook; 73] = [
    CanonicalBook::new("Kejadian", 1),
    CanonicalBook::new("Keluaran", 2),
    CanonicalBook::new("Imamat", 3),
    CanonicalBook::new("Bilangan", 4),
    CanonicalBook::new("Ulangan", 5),
    CanonicalBook::new("Yosua", 6),
    CanonicalBook::new("Hakim-hakim", 7),
    CanonicalBook::new("Rut", 8),
    CanonicalBook::new("1 Samuel", 9),
    CanonicalBook::new("2 Samuel", 10),
    CanonicalBook::new("1 Raja-raja", 11),
    CanonicalBook::new("2 Raja-raja", 12),
    CanonicalBook::new("1 Tawarikh", 13),
    CanonicalBook::new("2 Tawarikh", 14),
    CanonicalBook::new("Ezra", 15),
    CanonicalBook::new("Nehemia", 16),
    CanonicalBook::new("Tobit", 17),
    CanonicalBook::new("Yudit", 18),
    CanonicalBook::new("Ester", 19),
    CanonicalBook::new("1 Makabe", 20),
    CanonicalBook::new("2 Makabe", 21),
    CanonicalBook::new("Ayub", 22),
    CanonicalBook::new("Mazmur", 23),
    CanonicalBook::new("Amsal", 24),
    CanonicalBook::new("Pengkhotbah", 25),
    CanonicalBook::new("Kidung Agung", 26),
    CanonicalBook::new("Kebijaksanaan Salomo", 27),
    CanonicalBook::new("Sirakh", 28),
    CanonicalBook::new("Yesaya", 29),
    CanonicalBook::new("Yeremia", 30),
    CanonicalBook::new("Ratapan", 31),
    CanonicalBook::new("Barukh", 32),
    CanonicalBook::new("Yehezkiel", 33),
    CanonicalBook::new("Daniel", 34),
    CanonicalBook::new("Hosea", 35),
    CanonicalBook::new("Yoel", 36),
    CanonicalBook::new("Amos", 37),
    CanonicalBook::new("Obaja", 38),
    CanonicalBook::new("Yunus", 39),
    CanonicalBook::new("Mikha", 40),
    CanonicalBook::new("Nahum", 41),
    CanonicalBook::new("Habakuk", 42),
    CanonicalBook::new("Zefanya", 43),
    CanonicalBook::new("Hagai", 44),
    CanonicalBook::new("Zakharia", 45),
    CanonicalBook::new("Maleakhi", 46),
    CanonicalBook::new("Matius", 47),
    CanonicalBook::new("Markus", 48),
    CanonicalBook::new("Lukas", 49),
    CanonicalBook::new("Yohanes", 50),
    CanonicalBook::new("Kisah Para Rasul", 51),
    CanonicalBook::new("Roma", 52),
    CanonicalBook::new("1 Korintus", 53),
    CanonicalBook::new("2 Korintus", 54),
    CanonicalBook::new("Galatia", 55),
    CanonicalBook::new("Efesus", 56),
    CanonicalBook::new("Filipi", 57),
    CanonicalBook::new("Kolose", 58),
    CanonicalBook::new("1 Tesalonika", 59),
    CanonicalBook::new("2 Tesalonika", 60),
    CanonicalBook::new("1 Timotius", 61),
    CanonicalBook::new("2 Timotius", 62),
    CanonicalBook::new("Titus", 63),
    CanonicalBook::new("Filemon", 64),
    CanonicalBook::new("Ibrani", 65),
    CanonicalBook::new("Yakobus", 66),
    CanonicalBook::new("1 Petrus", 67),
    CanonicalBook::new("2 Petrus", 68),
    CanonicalBook::new("1 Yohanes", 69),
    CanonicalBook::new("2 Yohanes", 70),
    CanonicalBook::new("3 Yohanes", 71),
    CanonicalBook::new("Yudas", 72),
    CanonicalBook::new("Wahyu", 73),
];

/// Lookup structure over a fixed book table.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: &'static [CanonicalBook],
    by_name: HashMap<&'static str, u16>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// Build a catalog over an arbitrary static table.
    #[must_use]
    pub fn new(books: &'static [CanonicalBook]) -> Self {
        let by_name = books.iter().map(|b| (b.name, b.id)).collect();
        Self { books, by_name }
    }

    /// The standard 73-book catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(&CANONICAL_BOOKS)
    }

    /// Resolve a canonical name to its identifier. Absence is not an error.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<u16> {
        self.by_name.get(name).copied()
    }

    /// Reverse lookup by identifier.
    #[must_use]
    pub fn get(&self, id: u16) -> Option<&'static CanonicalBook> {
        self.books.iter().find(|b| b.id == id)
    }

    /// All books in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'static, CanonicalBook> {
        self.books.iter()
    }

    /// The full set of canonical names.
    #[must_use]
    pub fn all_names(&self) -> HashSet<&'static str> {
        self.books.iter().map(|b| b.name).collect()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Books whose identifier is absent from `observed`, in canonical order.
    #[must_use]
    pub fn missing(&self, observed: &HashSet<u16>) -> Vec<&'static CanonicalBook> {
        self.books
            .iter()
            .filter(|b| !observed.contains(&b.id))
            .collect()
    }
}
