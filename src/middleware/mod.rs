pub mod method_not_allowed;
pub mod not_found;
pub mod require_api_key;
pub mod trace_response_body;
