//! Book list backed by the in-memory repository in [`AppState`].

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Form, Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::common::AppState;
use crate::error::{AppError, AppResult};
use crate::services::books::{Book, NewBook};

/// Form fields accepted by `POST /books`; all three are required.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookForm {
    pub author: Option<String>,
    pub language: Option<String>,
    pub title: Option<String>,
}

impl TryFrom<BookForm> for NewBook {
    type Error = AppError;

    fn try_from(form: BookForm) -> Result<Self, Self::Error> {
        Ok(Self {
            author: form.author.ok_or(AppError::MissingParameter("author"))?,
            language: form.language.ok_or(AppError::MissingParameter("language"))?,
            title: form.title.ok_or(AppError::MissingParameter("title"))?,
        })
    }
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    responses(
        (status = 200, description = "Books retrieved successfully", body = Vec<Book>),
        (status = 404, description = "No books stored yet"),
    ),
    tag = "books"
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.books.read().await;
    if books.is_empty() {
        return Err(AppError::NotFound("Nothing found".to_string()));
    }
    Ok(Json(books.list().to_vec()))
}

/// Add a book
#[utoipa::path(
    post,
    path = "/books",
    request_body(content = BookForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Book stored; body is the full list", body = Vec<Book>),
        (status = 400, description = "A form field is missing"),
    ),
    tag = "books"
)]
pub async fn create_book(
    State(state): State<AppState>,
    Form(form): Form<BookForm>,
) -> AppResult<(StatusCode, Json<Vec<Book>>)> {
    let new_book = NewBook::try_from(form)?;

    let mut books = state.books.write().await;
    let stored = books.insert(new_book);
    tracing::info!(book_id = stored.id, title = %stored.title, "Book added");

    Ok((StatusCode::CREATED, Json(books.list().to_vec())))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    params(("id" = u64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book retrieved successfully", body = Book),
        (status = 404, description = "Book not found"),
    ),
    tag = "books"
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<Book>> {
    state
        .books
        .read()
        .await
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Book {id} not found")))
}

/// Delete a book by ID
#[utoipa::path(
    delete,
    path = "/books/{id}",
    params(("id" = u64, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found"),
    ),
    tag = "books"
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<StatusCode> {
    let removed = state.books.write().await.remove(id);
    match removed {
        Some(book) => {
            tracing::info!(book_id = book.id, "Book removed");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(AppError::NotFound(format!("Book {id} not found"))),
    }
}
