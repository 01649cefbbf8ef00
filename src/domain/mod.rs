//! Domain types for the mirrorscope resolution engine.
//!
//! # Module Organization
//!
//! - [`error`] - Error types for mirror node lookups
//! - [`network`] - Network configuration (mainnet, testnet, previewnet)
//! - [`encoding`] - Pure codecs for the identifier grammars
//! - [`entity_id`] - Entity id triples and their checksum
//! - [`transaction_id`] - Transaction id grammar
//! - [`entities`] - Response schemas of the mirror REST API

pub mod encoding;
pub mod entities;
pub mod entity_id;
pub mod error;
pub mod network;
pub mod transaction_id;

pub use entities::{
    AccountBalance, AccountInfo, AccountsResponse, BlockInfo, ContractInfo, ContractResult,
    PublicKey, TimestampRange, TokenInfo, TopicInfo, TransactionInfo, TransactionsResponse,
};
pub use entity_id::EntityId;
pub use error::SearchError;
pub use network::Network;
pub use transaction_id::TransactionId;
