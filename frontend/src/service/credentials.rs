use common::service::CredentialProvider;

/// Reads the bearer token from `localStorage` on every call, so a sign-in in
/// another tab is picked up without reloading the page.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalStorageCredentials {
    key: String,
}

impl LocalStorageCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl CredentialProvider for LocalStorageCredentials {
    fn bearer_token(&self) -> Option<String> {
        web_sys::window()?
            .local_storage()
            .ok()
            .flatten()?
            .get_item(&self.key)
            .ok()
            .flatten()
    }
}
