//! Topic lookup methods for MirrorClient.

use super::MirrorClient;
use crate::domain::{SearchError, TopicInfo};

impl MirrorClient {
    /// Fetch one consensus topic by numeric id.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected status code;
    /// not-found is `Ok(None)`.
    pub async fn get_topic(&self, id: &str) -> Result<Option<TopicInfo>, SearchError> {
        let request = self.build_request(&format!("topics/{id}"));
        self.get_optional("topic", request).await
    }
}
