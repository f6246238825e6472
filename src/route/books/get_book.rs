use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    book::Book,
    error::{BookError, BookRouteError},
    extractor::book_id::BookIdPath,
    server_error,
    state::ApiState,
};

#[derive(Debug)]
pub struct GetBookResponse {
    pub book: Book,
}

impl IntoResponse for GetBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.book)).into_response()
    }
}

#[utoipa::path(
    get,
    path = "/api/book/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Object id of the book, 24 hex characters")),
    responses(
        (status = 200, description = "The book", body = Book),
        (status = 400, description = "`Bad Id`", body = String),
        (status = 404, description = "`Book not found.`", body = String),
    )
)]
#[tracing::instrument(name = "get_book", skip_all, fields(%id))]
pub async fn get_book(
    State(state): State<ApiState>,
    BookIdPath(id): BookIdPath,
) -> Result<GetBookResponse, BookRouteError> {
    let book = state
        .store()
        .find(id)
        .await
        .map_err(server_error!(state))?
        .ok_or(BookError::NotFound)?;

    Ok(GetBookResponse { book })
}
