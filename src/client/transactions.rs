//! Transaction lookup methods for MirrorClient.

use super::MirrorClient;
use crate::domain::{SearchError, TransactionInfo, TransactionsResponse};

impl MirrorClient {
    /// Fetch the consensus records for a transaction id or ledger hash.
    ///
    /// One transaction id can map to several records (each retry of the same
    /// id reaches consensus separately); the service returns them in reverse
    /// chronological order, which is preserved.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected status code;
    /// not-found is an empty list.
    pub async fn get_transactions(&self, id_or_hash: &str) -> Result<Vec<TransactionInfo>, SearchError> {
        let request = self.build_request(&format!("transactions/{id_or_hash}"));
        let response: Option<TransactionsResponse> = self.get_optional("transaction", request).await?;
        Ok(response.map(|r| r.transactions).unwrap_or_default())
    }

    /// Fetch the transaction records at one consensus timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected status code;
    /// not-found is an empty list.
    pub async fn get_transactions_at(&self, timestamp: &str) -> Result<Vec<TransactionInfo>, SearchError> {
        let request = self
            .build_request("transactions")
            .query(&[("timestamp", timestamp)]);
        let response: Option<TransactionsResponse> =
            self.get_optional("transaction-by-timestamp", request).await?;
        Ok(response.map(|r| r.transactions).unwrap_or_default())
    }
}
