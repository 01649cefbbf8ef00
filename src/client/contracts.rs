//! Contract lookup methods for MirrorClient.

use super::MirrorClient;
use crate::domain::{ContractInfo, ContractResult, SearchError};

impl MirrorClient {
    /// Fetch one contract by numeric id or bare-hex EVM address.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected status code;
    /// not-found is `Ok(None)`.
    pub async fn get_contract(&self, id_or_evm: &str) -> Result<Option<ContractInfo>, SearchError> {
        let request = self.build_request(&format!("contracts/{id_or_evm}"));
        self.get_optional("contract", request).await
    }

    /// Fetch the execution detail of a contract call by its EVM transaction
    /// hash. The returned record carries the consensus timestamp used for
    /// the dependent transaction lookup.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unexpected status code;
    /// not-found is `Ok(None)`.
    pub async fn get_contract_result(&self, hash_hex: &str) -> Result<Option<ContractResult>, SearchError> {
        let request = self.build_request(&format!("contracts/results/{hash_hex}"));
        self.get_optional("contract-result", request).await
    }
}
