use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    error::{BookError, BookRouteError},
    extractor::book_id::BookIdPath,
    server_error,
    state::ApiState,
    utils::text_response,
};

#[derive(Debug)]
pub struct DeleteBookResponse {
    pub title: String,
}

impl IntoResponse for DeleteBookResponse {
    fn into_response(self) -> Response {
        text_response(
            StatusCode::OK,
            format!("{} removed from database", self.title),
        )
    }
}

#[utoipa::path(
    delete,
    path = "/api/book/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Object id of the book, 24 hex characters")),
    responses(
        (status = 200, description = "`{Title} removed from database`", body = String),
        (status = 400, description = "`Bad Id`", body = String),
        (status = 404, description = "`Book not found.`", body = String),
    )
)]
#[tracing::instrument(name = "delete_book", skip_all, fields(%id))]
pub async fn delete_book(
    State(state): State<ApiState>,
    BookIdPath(id): BookIdPath,
) -> Result<DeleteBookResponse, BookRouteError> {
    let book = state
        .store()
        .find(id)
        .await
        .map_err(server_error!(state))?
        .ok_or(BookError::NotFound)?;

    let deleted = state
        .store()
        .delete(book.id)
        .await
        .map_err(server_error!(state))?;

    if !deleted {
        tracing::warn!("Book disappeared before it could be deleted");

        return Err(BookError::NotFound.into());
    }

    tracing::info!(title = %book.title, "Book deleted");

    Ok(DeleteBookResponse { title: book.title })
}
