use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::{
    book::{Book, BookPayload},
    state::ApiState,
};

use super::{books, help};

#[derive(OpenApi)]
#[openapi(
    paths(
        help::help,
        books::list_books::list_books,
        books::get_book::get_book,
        books::post_book::post_book,
        books::update_book::update_book,
        books::delete_book::delete_book,
    ),
    components(schemas(Book, BookPayload)),
    tags(
        (name = "books", description = "Book CRUD"),
        (name = "help", description = "Route catalog"),
    )
)]
pub struct ApiDoc;

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new().route("/api-docs/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
