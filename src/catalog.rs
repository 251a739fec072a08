//! Operations over the in-memory catalog. The collection is owned by the caller
//! and borrowed here; mutating operations flush the whole collection through
//! the store before returning.

use crate::error::CatalogResult;
use crate::models::Book;
use crate::store::LibraryStore;

/// Which field the user asked to search. Matching always considers both the
/// title and the author; the choice is kept so front-ends can echo it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    /// Map a menu selection ("1" title, "2" author). Anything else searches by
    /// title.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "2" => SearchField::Author,
            _ => SearchField::Title,
        }
    }
}

/// Result of a remove request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(Book),
    NotFound,
}

/// Totals for the statistics screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryStats {
    pub total: usize,
    pub read: usize,
}

impl LibraryStats {
    /// Never underflows, even for hand-built totals where `read > total`.
    pub fn unread(&self) -> usize {
        self.total.saturating_sub(self.read)
    }

    /// Share of books marked read, in percent. `None` for an empty catalog.
    pub fn read_percentage(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.read as f64 / self.total as f64 * 100.0)
    }
}

/// Append `book` and persist the catalog.
pub fn add_book(store: &LibraryStore, books: &mut Vec<Book>, book: Book) -> CatalogResult<()> {
    log::info!("Adding \"{}\" by {}", book.title, book.author);
    books.push(book);
    store.save(books)
}

/// Remove the first book whose title matches case-insensitively, then persist.
/// Duplicate titles stay in place; only one record goes per call. Nothing is
/// saved when no title matches.
pub fn remove_book(
    store: &LibraryStore,
    books: &mut Vec<Book>,
    title: &str,
) -> CatalogResult<RemoveOutcome> {
    let needle = title.to_lowercase();
    let Some(index) = books
        .iter()
        .position(|book| book.title.to_lowercase() == needle)
    else {
        log::debug!("No book titled \"{title}\"");
        return Ok(RemoveOutcome::NotFound);
    };

    let removed = books.remove(index);
    log::info!("Removed \"{}\"", removed.title);
    store.save(books)?;
    Ok(RemoveOutcome::Removed(removed))
}

/// Case-insensitive substring search over title or author, in catalog order.
pub fn search_books<'a>(books: &'a [Book], field: SearchField, term: &str) -> Vec<&'a Book> {
    let query = term.trim().to_lowercase();
    log::debug!("Searching by {field:?} for \"{query}\"");
    books
        .iter()
        .filter(|book| {
            book.title.to_lowercase().contains(&query)
                || book.author.to_lowercase().contains(&query)
        })
        .collect()
}

pub fn library_stats(books: &[Book]) -> LibraryStats {
    LibraryStats {
        total: books.len(),
        read: books.iter().filter(|book| book.read).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StorePaths;
    use tempfile::TempDir;

    fn setup_store() -> (TempDir, LibraryStore) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = LibraryStore::new(StorePaths::in_dir(temp_dir.path()));
        (temp_dir, store)
    }

    fn book(title: &str, author: &str, read: bool) -> Book {
        Book {
            title: title.to_string(),
            author: author.to_string(),
            year: 1965,
            genre: "Sci-Fi".to_string(),
            read,
        }
    }

    #[test]
    fn add_appends_and_persists() {
        let (_temp_dir, store) = setup_store();
        let mut books = vec![book("First", "A", false)];
        add_book(&store, &mut books, book("Dune", "Herbert", true)).unwrap();

        assert_eq!(books.last().unwrap().title, "Dune");
        assert_eq!(store.load(), books);
    }

    #[test]
    fn remove_matches_case_insensitively() {
        let (_temp_dir, store) = setup_store();
        let mut books = vec![book("Dune", "Herbert", true), book("Emma", "Austen", false)];

        let outcome = remove_book(&store, &mut books, "dUNE").unwrap();

        assert_eq!(outcome, RemoveOutcome::Removed(book("Dune", "Herbert", true)));
        assert_eq!(books, vec![book("Emma", "Austen", false)]);
        assert_eq!(store.load(), books);
    }

    #[test]
    fn remove_takes_only_first_duplicate() {
        let (_temp_dir, store) = setup_store();
        let mut books = vec![
            book("Dune", "First", true),
            book("Emma", "Austen", false),
            book("DUNE", "Second", false),
        ];

        remove_book(&store, &mut books, "dune").unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(books[1].author, "Second");
    }

    #[test]
    fn remove_requires_exact_title() {
        let (_temp_dir, store) = setup_store();
        let mut books = vec![book("Dune Messiah", "Herbert", true)];

        let outcome = remove_book(&store, &mut books, "Dune").unwrap();

        assert_eq!(outcome, RemoveOutcome::NotFound);
        assert_eq!(books.len(), 1);
    }

    #[test]
    fn remove_miss_does_not_save() {
        let (_temp_dir, store) = setup_store();
        let mut books = vec![book("Dune", "Herbert", true)];

        remove_book(&store, &mut books, "Missing").unwrap();

        assert!(!store.paths().primary.exists());
    }

    #[test]
    fn search_checks_title_and_author_for_either_field() {
        let books = vec![book("Dune", "Herbert", true), book("Emma", "Austen", false)];
        for field in [SearchField::Title, SearchField::Author] {
            let hits = search_books(&books, field, "herb");
            assert_eq!(hits, vec![&books[0]]);
        }
        assert_eq!(search_books(&books, SearchField::Author, "EMM"), vec![&books[1]]);
    }

    #[test]
    fn search_keeps_catalog_order() {
        let books = vec![
            book("The Hobbit", "Tolkien", true),
            book("Dune", "Herbert", true),
            book("The Road", "McCarthy", false),
        ];
        let titles: Vec<_> = search_books(&books, SearchField::Title, " the ")
            .into_iter()
            .map(|book| book.title.as_str())
            .collect();
        assert_eq!(titles, vec!["The Hobbit", "The Road"]);
    }

    #[test]
    fn search_without_hits_is_empty() {
        let books = vec![book("Dune", "Herbert", true)];
        assert!(search_books(&books, SearchField::Title, "zzz").is_empty());
    }

    #[test]
    fn search_field_from_choice() {
        assert_eq!(SearchField::from_choice("2"), SearchField::Author);
        assert_eq!(SearchField::from_choice("1"), SearchField::Title);
        assert_eq!(SearchField::from_choice("x"), SearchField::Title);
    }

    #[test]
    fn stats_on_empty_catalog_have_no_percentage() {
        let stats = library_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.read_percentage(), None);
    }

    #[test]
    fn stats_half_read() {
        let books = vec![book("A", "X", true), book("B", "Y", false)];
        let stats = library_stats(&books);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.read, 1);
        assert_eq!(stats.unread(), 1);
        assert_eq!(format!("{:.2}", stats.read_percentage().unwrap()), "50.00");
    }

    #[test]
    fn unread_saturates_when_read_exceeds_total() {
        let stats = LibraryStats { total: 1, read: 2 };
        assert_eq!(stats.unread(), 0);
    }
}
