use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{
    book::{BookId, BookPayload},
    error::BookRouteError,
    extractor::book_json::BookJson,
    server_error,
    state::ApiState,
    utils::text_response,
};

#[derive(Debug)]
pub struct PostBookResponse {
    pub id: BookId,
    pub title: String,
}

impl IntoResponse for PostBookResponse {
    fn into_response(self) -> Response {
        (
            [(header::LOCATION, format!("/api/book/{}", self.id))],
            text_response(
                StatusCode::OK,
                format!("Added book {} to the database", self.title),
            ),
        )
            .into_response()
    }
}

/// Stores a new book. The id is assigned by the storage and returned in the `Location` header.
#[utoipa::path(
    post,
    path = "/api/book",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 200, description = "`Added book {Title} to the database`", body = String,
            headers(("Location" = String, description = "Path of the created book"))),
        (status = 400, description = "`No message body found`", body = String),
    )
)]
#[tracing::instrument(name = "post_book", skip_all)]
pub async fn post_book(
    State(state): State<ApiState>,
    BookJson(payload): BookJson,
) -> Result<PostBookResponse, BookRouteError> {
    let title = payload.title.clone();

    let id = state
        .store()
        .insert(payload)
        .await
        .map_err(server_error!(state))?;

    tracing::info!(%id, %title, "Book added");

    Ok(PostBookResponse { id, title })
}
