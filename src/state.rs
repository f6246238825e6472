use std::{ops::Deref, sync::Arc};

use crate::{
    error::{ErrorVerbosity, ErrorVerbosityProvider},
    store::BookStore,
    traits::ApiKeyProvider,
};

/// Shared, immutable handle passed to every handler.
#[derive(Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    pub fn new(
        error_verbosity: ErrorVerbosity,
        api_key_header_name: String,
        api_keys: Vec<String>,
        store: Arc<dyn BookStore>,
    ) -> Self {
        Self {
            inner: Arc::new(ApiStateInner {
                error_verbosity,
                api_key_header_name,
                api_keys,
                store,
            }),
        }
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct ApiStateInner {
    error_verbosity: ErrorVerbosity,
    api_key_header_name: String,
    api_keys: Vec<String>,
    store: Arc<dyn BookStore>,
}

impl ApiStateInner {
    pub fn store(&self) -> &dyn BookStore {
        self.store.as_ref()
    }
}

impl ErrorVerbosityProvider for ApiState {
    fn error_verbosity(&self) -> ErrorVerbosity {
        self.error_verbosity
    }
}

impl ApiKeyProvider for ApiState {
    fn header_name(&self) -> &str {
        &self.api_key_header_name
    }

    fn is_enabled(&self) -> bool {
        !self.api_keys.is_empty()
    }

    fn validate(&self, key: &str) -> bool {
        self.api_keys.iter().any(|api_key| api_key == key)
    }
}
