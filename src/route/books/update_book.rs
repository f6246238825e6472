use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    book::{Book, BookPayload},
    error::{BookError, BookRouteError},
    extractor::{book_id::BookIdPath, book_json::BookJson},
    server_error,
    state::ApiState,
    utils::text_response,
};

#[derive(Debug)]
pub struct UpdateBookResponse {
    /// Title of the book as it was before the update.
    pub title: String,
}

impl IntoResponse for UpdateBookResponse {
    fn into_response(self) -> Response {
        text_response(
            StatusCode::OK,
            format!("Book {} has been updated", self.title),
        )
    }
}

/// Replaces title and description of a book, keeping its id.
///
/// The book is read first, the body is only looked at once the book is known to exist.
/// Read and replace are separate roundtrips, concurrent updates of the same book race and the last one wins.
#[utoipa::path(
    put,
    path = "/api/book/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Object id of the book, 24 hex characters")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "`Book {Title} has been updated`", body = String),
        (status = 400, description = "`Bad Id`, `No book found` or `No message body found`", body = String),
    )
)]
#[tracing::instrument(name = "update_book", skip_all, fields(%id))]
pub async fn update_book(
    State(state): State<ApiState>,
    BookIdPath(id): BookIdPath,
    body: Result<BookJson, BookError>,
) -> Result<UpdateBookResponse, BookRouteError> {
    let existing = state
        .store()
        .find(id)
        .await
        .map_err(server_error!(state))?
        .ok_or(BookError::NoBookFound)?;

    let BookJson(payload) = body?;

    // The stored id wins over anything the client sent.
    let replacement = Book::from_payload(existing.id, payload);

    let replaced = state
        .store()
        .replace(replacement)
        .await
        .map_err(server_error!(state))?;

    if !replaced {
        tracing::warn!("Book disappeared before it could be replaced");

        return Err(BookError::NoBookFound.into());
    }

    tracing::info!(title = %existing.title, "Book updated");

    Ok(UpdateBookResponse {
        title: existing.title,
    })
}
