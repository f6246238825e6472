pub mod api_key;
pub mod book_id;
pub mod book_json;
