//! Response schemas for the mirror node REST API.
//!
//! Only the fields the engine and the CLI actually read are modeled; every
//! field is optional so that schema drift on the service side degrades to
//! `None` instead of a parse failure.

use serde::{Deserialize, Serialize};

/// A single account resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub evm_address: Option<String>,
    #[serde(default)]
    pub key: Option<PublicKey>,
    #[serde(default)]
    pub balance: Option<AccountBalance>,
    #[serde(default)]
    pub deleted: Option<bool>,
    #[serde(default)]
    pub memo: Option<String>,
}

/// An account's admin/signing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicKey {
    #[serde(rename = "_type", default)]
    pub key_type: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
}

/// Balance snapshot embedded in an account resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    #[serde(default)]
    pub balance: Option<i64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Envelope of `GET /accounts?...`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountsResponse {
    #[serde(default)]
    pub accounts: Vec<AccountInfo>,
}

/// A smart contract resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractInfo {
    #[serde(default)]
    pub contract_id: Option<String>,
    #[serde(default)]
    pub evm_address: Option<String>,
    #[serde(default)]
    pub created_timestamp: Option<String>,
    #[serde(default)]
    pub deleted: Option<bool>,
    #[serde(default)]
    pub memo: Option<String>,
}

/// Detail record of one contract execution, looked up by EVM hash.
///
/// The engine only consumes its consensus timestamp, which seeds the
/// dependent transaction-by-timestamp lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractResult {
    #[serde(default)]
    pub contract_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
}

/// A token resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    #[serde(default)]
    pub token_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub decimals: Option<String>,
    #[serde(rename = "type", default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub total_supply: Option<String>,
}

/// A consensus topic resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicInfo {
    #[serde(default)]
    pub topic_id: Option<String>,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub created_timestamp: Option<String>,
    #[serde(default)]
    pub deleted: Option<bool>,
}

/// One consensus transaction record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionInfo {
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub transaction_hash: Option<String>,
    #[serde(default)]
    pub consensus_timestamp: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub entity_id: Option<String>,
    #[serde(default)]
    pub charged_tx_fee: Option<i64>,
}

/// Envelope of `GET /transactions...`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default)]
    pub transactions: Vec<TransactionInfo>,
}

/// A block resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockInfo {
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub previous_hash: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub timestamp: Option<TimestampRange>,
}

/// Consensus timestamp range covered by a block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimestampRange {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_tolerates_unknown_and_missing_fields() {
        let account: AccountInfo = serde_json::from_value(serde_json::json!({
            "account": "0.0.730631",
            "key": { "_type": "ED25519", "key": "aa11" },
            "staked_node_id": 3,
        }))
        .unwrap();
        assert_eq!(account.account.as_deref(), Some("0.0.730631"));
        assert_eq!(account.key.unwrap().key.as_deref(), Some("aa11"));
        assert!(account.balance.is_none());
    }

    #[test]
    fn test_transactions_envelope_defaults_to_empty() {
        let response: TransactionsResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(response.transactions.is_empty());
    }

    #[test]
    fn test_token_type_rename() {
        let token: TokenInfo = serde_json::from_value(serde_json::json!({
            "token_id": "0.0.98765",
            "type": "FUNGIBLE_COMMON",
        }))
        .unwrap();
        assert_eq!(token.token_type.as_deref(), Some("FUNGIBLE_COMMON"));
    }
}
