use axum::{
    async_trait,
    extract::{FromRequestParts, Path as AxumPath},
    http::request::Parts,
};

use crate::{book::BookId, error::BookError};

/// Extracts the `{id}` path segment as a [`BookId`].
///
/// Rejects with [`BookError::BadId`] before any storage access if the segment is not a valid object id.
#[derive(Debug)]
pub struct BookIdPath(pub BookId);

#[async_trait]
impl<S> FromRequestParts<S> for BookIdPath
where
    S: Send + Sync,
{
    type Rejection = BookError;

    #[tracing::instrument(name = "book_id_extractor", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AxumPath(raw) = AxumPath::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::warn!(?rejection, "Rejection");

                BookError::BadId
            })?;

        match raw.parse::<BookId>() {
            Ok(id) => {
                tracing::trace!(%id, "Extracted");

                Ok(BookIdPath(id))
            }
            Err(err) => {
                tracing::warn!(%raw, %err, "Rejection. Invalid id");

                Err(BookError::BadId)
            }
        }
    }
}
