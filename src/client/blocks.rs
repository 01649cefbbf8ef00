//! Block lookup methods for MirrorClient.

use super::MirrorClient;
use crate::domain::{BlockInfo, SearchError};

impl MirrorClient {
    /// Fetch one block by full hash or hash prefix, in canonical bare hex.
    ///
    /// Prefix matching happens on the service side; no length validation is
    /// applied here.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected status code;
    /// not-found is `Ok(None)`.
    pub async fn get_block(&self, hash_or_prefix: &str) -> Result<Option<BlockInfo>, SearchError> {
        let request = self.build_request(&format!("blocks/{hash_or_prefix}"));
        self.get_optional("block", request).await
    }
}
