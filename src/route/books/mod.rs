pub mod app;
pub mod delete_book;
pub mod get_book;
pub mod list_books;
pub mod post_book;
pub mod update_book;
