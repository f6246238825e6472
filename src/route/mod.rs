pub mod books;
pub mod help;
pub mod openapi;
