use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};

use crate::{book::BookPayload, error::BookError};

/// Reads the request body as a [`BookPayload`].
///
/// Unlike [`axum::Json`] the `Content-Type` header is not checked.
/// An empty, `null` or otherwise unreadable body rejects with [`BookError::NoBody`].
#[derive(Debug)]
pub struct BookJson(pub BookPayload);

#[async_trait]
impl<S> FromRequest<S> for BookJson
where
    S: Send + Sync,
{
    type Rejection = BookError;

    #[tracing::instrument(name = "book_json_extractor", skip_all)]
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!(?rejection, "Rejection");

            BookError::NoBody
        })?;

        match serde_json::from_slice::<BookPayload>(&bytes) {
            Ok(payload) => {
                tracing::trace!(?payload, "Extracted");

                Ok(BookJson(payload))
            }
            Err(err) => {
                tracing::warn!(%err, "Rejection. Body is not a book");

                Err(BookError::NoBody)
            }
        }
    }
}
