use axum::{
    routing::{get, post},
    Router,
};

use crate::state::ApiState;

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new()
        .route("/books", get(super::list_books::list_books))
        .route("/book", post(super::post_book::post_book))
        .route(
            "/book/:id",
            get(super::get_book::get_book)
                .put(super::update_book::update_book)
                .delete(super::delete_book::delete_book),
        )
}
