use crate::authors::domain::Author;
use crate::authors::domain::model::AuthorEntity;
use crate::authors::dto::AuthorDto;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;

pub fn find_author_by_id(authors: &[AuthorEntity], author_id: i64) -> Option<&AuthorEntity> {
    authors.iter().find(|author| author.id == Some(author_id))
}

pub fn book_count_by_author<B: Book>(books: &[B], author_id: i64) -> usize {
    books.iter().filter(|book| book.author_id() == author_id).count()
}

pub fn filter_authors(authors: &[AuthorEntity], term: &str) -> Vec<AuthorEntity> {
    authors.iter()
        .filter(|author| author.name_contains(term))
        .cloned()
        .collect()
}

// local search: books whose title or resolved author name contains the term
pub fn filter_books(books: &[BookEntity], authors: &[AuthorEntity], term: &str) -> Vec<BookEntity> {
    let needle = term.to_lowercase();
    books.iter()
        .filter(|book| {
            book.title.to_lowercase().contains(needle.as_str())
                || find_author_by_id(authors, book.author_id)
                    .map(|author| author.name_contains(term))
                    .unwrap_or(false)
        })
        .cloned()
        .collect()
}

pub fn book_cards(books: &[BookEntity], authors: &[AuthorEntity]) -> Vec<BookDto> {
    books.iter()
        .map(|book| BookDto::new(book, find_author_by_id(authors, book.author_id).map(|a| a.name.as_str())))
        .collect()
}

pub fn author_cards(authors: &[AuthorEntity], books: &[BookEntity]) -> Vec<AuthorDto> {
    authors.iter()
        .map(|author| {
            let count = author.id.map(|id| book_count_by_author(books, id)).unwrap_or(0);
            AuthorDto::new(author, count)
        })
        .collect()
}
