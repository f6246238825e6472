use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{book::Book, error::ApiError, server_error, state::ApiState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NoBooksMessage {
    pub message: &'static str,
}

#[derive(Debug)]
pub enum ListBooksResponse {
    Books(Vec<Book>),
    Empty,
}

impl IntoResponse for ListBooksResponse {
    fn into_response(self) -> Response {
        match self {
            ListBooksResponse::Books(books) => (StatusCode::OK, Json(books)).into_response(),
            ListBooksResponse::Empty => (
                StatusCode::OK,
                Json(NoBooksMessage {
                    message: "No books found",
                }),
            )
                .into_response(),
        }
    }
}

/// Lists every book.
///
/// An empty collection is answered with a message object instead of an empty array.
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    responses(
        (status = 200, description = "All books, or `{\"Message\": \"No books found\"}` if there are none", body = [Book]),
    )
)]
#[tracing::instrument(name = "list_books", skip_all)]
pub async fn list_books(State(state): State<ApiState>) -> Result<ListBooksResponse, ApiError> {
    let books = state.store().list().await.map_err(server_error!(state))?;

    tracing::debug!(count = books.len(), "Listed books");

    if books.is_empty() {
        return Ok(ListBooksResponse::Empty);
    }

    Ok(ListBooksResponse::Books(books))
}
