//! Token lookup methods for MirrorClient.

use super::MirrorClient;
use crate::domain::{SearchError, TokenInfo};

impl MirrorClient {
    /// Fetch one token by numeric id.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected status code;
    /// not-found is `Ok(None)`.
    pub async fn get_token(&self, id: &str) -> Result<Option<TokenInfo>, SearchError> {
        let request = self.build_request(&format!("tokens/{id}"));
        self.get_optional("token", request).await
    }
}
