//! Account lookup methods for MirrorClient.

use super::MirrorClient;
use crate::domain::{AccountInfo, AccountsResponse, SearchError};

/// The engine only needs "none, one, or several" accounts per key.
const ACCOUNTS_BY_KEY_LIMIT: &str = "2";

impl MirrorClient {
    /// Fetch one account by numeric id, base-32 alias, or bare-hex EVM
    /// address — the service accepts all three in the same path slot.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected status code;
    /// not-found is `Ok(None)`.
    pub async fn get_account(&self, id_or_alias_or_evm: &str) -> Result<Option<AccountInfo>, SearchError> {
        let request = self.build_request(&format!("accounts/{id_or_alias_or_evm}"));
        self.get_optional("account", request).await
    }

    /// Fetch the accounts associated with a public key, bounded to two
    /// entries.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected status code;
    /// not-found is an empty list.
    pub async fn get_accounts_by_public_key(
        &self,
        key_hex: &str,
    ) -> Result<Vec<AccountInfo>, SearchError> {
        let request = self
            .build_request("accounts")
            .query(&[("account.publickey", key_hex), ("limit", ACCOUNTS_BY_KEY_LIMIT)]);
        let response: Option<AccountsResponse> = self.get_optional("accounts-by-key", request).await?;
        Ok(response.map(|r| r.accounts).unwrap_or_default())
    }
}
