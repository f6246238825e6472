pub trait ApiKeyProvider {
    /// Returns the API key header name.
    fn header_name(&self) -> &str;

    /// Returns `false` if no API keys are configured and requests pass unchecked.
    fn is_enabled(&self) -> bool;

    /// Validates the API key.
    fn validate(&self, key: &str) -> bool;
}
