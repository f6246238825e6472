use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiKeyError, ApiKeyErrorType, ErrorVerbosityProvider},
    traits::ApiKeyProvider,
};

#[derive(Debug, Deserialize)]
struct CodeQuery {
    code: Option<String>,
}

/// Extracts the API key from the request headers, or from the `code` query parameter.
///
/// The API key is not validated. See [`ValidApiKey`].
#[derive(Debug, Clone)]
pub struct ApiKey(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync + ApiKeyProvider + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "api_key_extractor", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let verbosity = state.error_verbosity();

        if let Some(value) = parts.headers.get(state.header_name()) {
            let used_api_key = value.to_str().map_err(|err| {
                tracing::warn!(%err, "Rejection. API key header value is not a valid string");

                ApiKeyError::new(
                    verbosity,
                    ApiKeyErrorType::InvalidChars {
                        reason: err.to_string(),
                    },
                )
            })?;

            return Ok(ApiKey(used_api_key.to_string()));
        }

        let code = Query::<CodeQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(query)| query.code);

        match code {
            Some(used_api_key) => Ok(ApiKey(used_api_key)),
            None => {
                tracing::warn!("Rejection. API key is missing");

                Err(ApiKeyError::new(verbosity, ApiKeyErrorType::Missing).into())
            }
        }
    }
}

/// Proof that the request carried a valid API key.
#[derive(Debug, Clone, Copy)]
pub struct ValidApiKey;

#[async_trait]
impl<S> FromRequestParts<S> for ValidApiKey
where
    S: Send + Sync + ApiKeyProvider + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "api_key_validator", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let verbosity = state.error_verbosity();

        let ApiKey(used_api_key) = ApiKey::from_request_parts(parts, state).await?;

        if !state.validate(&used_api_key) {
            tracing::warn!("Rejection. Invalid API key");

            return Err(ApiKeyError::new(verbosity, ApiKeyErrorType::Invalid).into());
        }

        tracing::trace!("Validated");

        Ok(ValidApiKey)
    }
}
