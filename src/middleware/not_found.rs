use axum::extract::State;

use crate::{
    error::{ApiError, ErrorVerbosityProvider, NotFoundError},
    state::ApiState,
};

/// Fallback for requests no route matches.
pub async fn not_found(State(state): State<ApiState>) -> ApiError {
    ApiError::NotFound(NotFoundError::new(state.error_verbosity()))
}
