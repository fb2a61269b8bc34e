//! In-memory book list.
//!
//! Ids are handed out from a counter owned by the repository: the first book
//! gets id 1 and an id is never reused.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Book {
    pub id: u64,
    pub author: String,
    pub language: String,
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct NewBook {
    pub author: String,
    pub language: String,
    pub title: String,
}

#[derive(Debug, Default)]
pub struct BookRepository {
    books: Vec<Book>,
    last_id: u64,
}

impl BookRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a book under the next id and return the stored record.
    pub fn insert(&mut self, book: NewBook) -> Book {
        self.last_id += 1;
        let stored = Book {
            id: self.last_id,
            author: book.author,
            language: book.language,
            title: book.title,
        };
        self.books.push(stored.clone());
        stored
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Remove a book; its id stays retired.
    pub fn remove(&mut self, id: u64) -> Option<Book> {
        let index = self.books.iter().position(|book| book.id == id)?;
        Some(self.books.remove(index))
    }

    #[must_use]
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_book(title: &str) -> NewBook {
        NewBook {
            author: "Tove Jansson".to_string(),
            language: "Swedish".to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut repo = BookRepository::new();
        assert!(repo.is_empty());

        let first = repo.insert(new_book("Comet in Moominland"));
        let second = repo.insert(new_book("Finn Family Moomintroll"));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.list().len(), 2);
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let mut repo = BookRepository::new();
        repo.insert(new_book("a"));
        let second = repo.insert(new_book("b"));

        assert_eq!(repo.remove(second.id).map(|b| b.title), Some("b".to_string()));
        assert_eq!(repo.insert(new_book("c")).id, 3);
    }

    #[test]
    fn lookup_by_id() {
        let mut repo = BookRepository::new();
        let stored = repo.insert(new_book("Moominsummer Madness"));

        assert_eq!(repo.get(stored.id), Some(&stored));
        assert_eq!(repo.get(42), None);
    }
}
