use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};

use crate::{
    error::ApiError, extractor::api_key::ValidApiKey, state::ApiState, traits::ApiKeyProvider,
};

/// Rejects requests without a valid API key.
///
/// Passes every request through if no API keys are configured.
pub async fn require_api_key(
    State(state): State<ApiState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.is_enabled() {
        return Ok(next.run(req).await);
    }

    let (mut parts, body) = req.into_parts();
    ValidApiKey::from_request_parts(&mut parts, &state).await?;

    Ok(next.run(Request::from_parts(parts, body)).await)
}
