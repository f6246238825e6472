use axum::{http::StatusCode, response::Response, routing::get, Router};

use crate::{state::ApiState, utils::text_response};

const HELP: &str = "This API is using MongoDB, as such all the Ids are ObjectIds\
\n [ENDPOINTS]: /api/book , /api/books\
\n [POST] \
\n PostBook: /api/book + body. string Title + string Description\
\n [GET] \
\n GetAllBooks: /api/books\
\n GetBook: /api/book/{id}\
\n [PUT] \
\n UpdateBook: /api/book/{id} + body. string Title + string Description\
\n [DELETE] \
\n DeleteBook: /api/book/{id}";

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new().route("/help", get(help))
}

/// Describes the available routes. Never touches the storage.
#[utoipa::path(
    get,
    path = "/api/help",
    tag = "help",
    responses((status = 200, description = "Route catalog", body = String))
)]
pub async fn help() -> Response {
    text_response(StatusCode::OK, HELP.to_string())
}
