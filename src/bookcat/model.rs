use std::fmt;
use std::str::FromStr;

pub type BookId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
}

impl Book {
    pub fn new(id: BookId, draft: BookDraft) -> Self {
        Self {
            id,
            title: draft.title,
            author: draft.author,
            year: draft.year,
            genre: draft.genre,
        }
    }

    /// Load-time identity: title and author compared case-insensitively, year exactly.
    /// Genre and id never take part.
    pub fn same_work(&self, other: &BookDraft) -> bool {
        self.year == other.year
            && eq_ignore_case(&self.title, &other.title)
            && eq_ignore_case(&self.author, &other.author)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {} | Title: {} | Author: {} | Year: {} | Genre: {}",
            self.id, self.title, self.author, self.year, self.genre
        )
    }
}

/// Character-by-character comparison: two chars match when their uppercase
/// forms agree or their lowercase forms start with the same char, so `İ`
/// matches `i` even though its full lowercase form is two chars.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            x == y
                || x.to_uppercase().eq(y.to_uppercase())
                || x.to_lowercase().next() == y.to_lowercase().next()
        })
}

/// A book that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
}

impl BookDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
        }
    }
}

/// Partial update for `edit`. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
}

impl BookPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.year.is_none() && self.genre.is_none()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Empty strings count as absent, the same as a missing field.
    pub fn apply(&self, book: &mut Book) {
        if let Some(title) = non_empty(&self.title) {
            book.title = title.to_string();
        }
        if let Some(author) = non_empty(&self.author) {
            book.author = author.to_string();
        }
        if let Some(year) = self.year {
            book.year = year;
        }
        if let Some(genre) = non_empty(&self.genre) {
            book.genre = genre.to_string();
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Title,
    Author,
    Genre,
    Year,
    Id,
}

impl SearchField {
    /// In the order the menu offers them.
    pub const ALL: [SearchField; 5] = [
        SearchField::Title,
        SearchField::Author,
        SearchField::Genre,
        SearchField::Year,
        SearchField::Id,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Genre => "genre",
            SearchField::Year => "year",
            SearchField::Id => "id",
        }
    }

    pub fn matches(&self, book: &Book, term: &str) -> bool {
        match self {
            SearchField::Title => contains_ignore_case(&book.title, term),
            SearchField::Author => contains_ignore_case(&book.author, term),
            SearchField::Genre => contains_ignore_case(&book.genre, term),
            SearchField::Year => book.year.to_string().contains(term),
            SearchField::Id => term
                .parse::<i64>()
                .map(|id| id == i64::from(book.id))
                .unwrap_or(false),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            "genre" => Ok(SearchField::Genre),
            "year" => Ok(SearchField::Year),
            "id" => Ok(SearchField::Id),
            other => Err(format!("Unknown search attribute: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hobbit() -> Book {
        Book::new(
            7,
            BookDraft::new("The Hobbit", "J. R. R. Tolkien", 1937, "Fantasy"),
        )
    }

    #[test]
    fn display_lists_every_field() {
        assert_eq!(
            hobbit().to_string(),
            "id: 7 | Title: The Hobbit | Author: J. R. R. Tolkien | Year: 1937 | Genre: Fantasy"
        );
    }

    #[test]
    fn same_work_ignores_case_and_genre() {
        let draft = BookDraft::new("THE HOBBIT", "j. r. r. tolkien", 1937, "Children");
        assert!(hobbit().same_work(&draft));

        let other_year = BookDraft::new("The Hobbit", "J. R. R. Tolkien", 1938, "Fantasy");
        assert!(!hobbit().same_work(&other_year));
    }

    #[test]
    fn same_work_compares_per_character() {
        let book = Book::new(1, BookDraft::new("İstanbul", "ΟΔΥΣΣΕΥΣ", 2001, "Travel"));
        assert!(book.same_work(&BookDraft::new("istanbul", "οδυσσευς", 2001, "")));
        assert!(book.same_work(&BookDraft::new("İSTANBUL", "Οδυσσευσ", 2001, "")));
        assert!(!book.same_work(&BookDraft::new("istanbu", "οδυσσευς", 2001, "")));

        let strasse = Book::new(2, BookDraft::new("Straße", "A", 1, "G"));
        assert!(!strasse.same_work(&BookDraft::new("STRASSE", "A", 1, "G")));
    }

    #[test]
    fn patch_skips_absent_and_empty_fields() {
        let mut book = hobbit();
        BookPatch::default()
            .with_title("")
            .with_year(1951)
            .apply(&mut book);
        assert_eq!(book.title, "The Hobbit");
        assert_eq!(book.year, 1951);
        assert_eq!(book.genre, "Fantasy");
    }

    #[test]
    fn year_search_is_substring_of_decimal() {
        let book = hobbit();
        assert!(SearchField::Year.matches(&book, "93"));
        assert!(SearchField::Year.matches(&book, "1937"));
        assert!(!SearchField::Year.matches(&book, "20"));
    }

    #[test]
    fn id_search_requires_exact_integer() {
        let book = hobbit();
        assert!(SearchField::Id.matches(&book, "7"));
        assert!(!SearchField::Id.matches(&book, "77"));
        assert!(!SearchField::Id.matches(&book, "seven"));
        assert!(!SearchField::Id.matches(&book, ""));
        assert!(SearchField::Id.matches(&book, "+7"));
        assert!(!SearchField::Id.matches(&book, "-7"));
    }

    #[test]
    fn parses_field_names() {
        assert_eq!("Author".parse::<SearchField>(), Ok(SearchField::Author));
        assert!("isbn".parse::<SearchField>().is_err());
    }
}
