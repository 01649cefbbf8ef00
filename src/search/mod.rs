//! Identifier resolution engine.
//!
//! [`SearchRequest`] takes one free-text query, classifies it into candidate
//! identifiers, and fans the resulting lookups out across the entity channels
//! of the mirror node concurrently. Channels that find nothing stay silent;
//! only transport-level failures are counted, never surfaced as errors.

mod classifier;


pub use classifier::{ParsedIdentifier, SearchPlan, TransactionLookup, decode_candidates};

use serde::Serialize;

use crate::client::MirrorClient;
use crate::domain::{
    AccountInfo, BlockInfo, ContractInfo, Network, SearchError, TokenInfo, TopicInfo,
    TransactionInfo,
};

// ============================================================================
// Aggregate result
// ============================================================================

/// Everything one search run found, one field per channel.
///
/// At most one entity kind per field; fields are disjoint in meaning, so a
/// query can legitimately fill several (a numeric id that is both an account
/// and a contract, say). `ethereum_address` is pure normalization of the
/// query and is set even when no channel matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Resolution {
    pub account: Option<AccountInfo>,
    pub accounts_with_key: Vec<AccountInfo>,
    pub contract: Option<ContractInfo>,
    pub token: Option<TokenInfo>,
    pub topic: Option<TopicInfo>,
    pub transactions: Vec<TransactionInfo>,
    pub block: Option<BlockInfo>,
    pub ethereum_address: Option<String>,
    /// Number of lookups that failed at the transport level (timeouts,
    /// unexpected statuses, undecodable bodies). Not-found never counts.
    pub error_count: u32,
}

impl Resolution {
    /// True when at least one channel found something.
    #[must_use]
    pub fn has_match(&self) -> bool {
        self.account.is_some()
            || !self.accounts_with_key.is_empty()
            || self.contract.is_some()
            || self.token.is_some()
            || self.topic.is_some()
            || !self.transactions.is_empty()
            || self.block.is_some()
    }
}

/// Outcome of one channel: whatever it settled on, plus how many of its
/// lookups failed in transport.
struct Settled<T> {
    value: T,
    errors: u32,
}

// ============================================================================
// Orchestrator
// ============================================================================

/// One resolvable search query.
///
/// The plan is fixed at construction; [`run`](Self::run) spends the network
/// requests. Running twice resets the result first, so a request can be
/// re-run to pick up state changes on the ledger.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    query: String,
    client: MirrorClient,
    plan: SearchPlan,
    result: Resolution,
}

impl SearchRequest {
    /// Builds a request against a network's public mirror node.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::ClientInit` if the HTTP client fails to
    /// initialize.
    pub fn new(query: impl Into<String>, network: Network) -> Result<Self, SearchError> {
        Ok(Self::with_client(query, MirrorClient::new(network)?))
    }

    /// Builds a request on an existing client. The client's network drives
    /// checksum validation during classification.
    #[must_use]
    pub fn with_client(query: impl Into<String>, client: MirrorClient) -> Self {
        let query = query.into();
        let plan = SearchPlan::build(&query, client.network());
        Self {
            query,
            client,
            plan,
            result: Resolution::default(),
        }
    }

    /// The raw query text, untrimmed.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The network the lookups target.
    #[must_use]
    pub fn network(&self) -> Network {
        self.client.network()
    }

    /// The channel plan the query classified into.
    #[must_use]
    pub fn plan(&self) -> &SearchPlan {
        &self.plan
    }

    /// The result of the most recent [`run`](Self::run).
    #[must_use]
    pub fn result(&self) -> &Resolution {
        &self.result
    }

    /// Resolve the query: issue every planned lookup, channels concurrent,
    /// parameters within a channel in order with the first hit winning.
    ///
    /// Never fails: a query that matches nothing simply leaves every field
    /// empty, and transport failures are absorbed into `error_count`.
    pub async fn run(&mut self) -> &Resolution {
        self.result = Resolution {
            ethereum_address: self.plan.ethereum_address.clone(),
            ..Resolution::default()
        };

        let (account, with_key, contract, token, topic, transactions, block) = tokio::join!(
            self.resolve_account(),
            self.resolve_accounts_with_key(),
            self.resolve_contract(),
            self.resolve_token(),
            self.resolve_topic(),
            self.resolve_transactions(),
            self.resolve_block(),
        );

        self.result.account = account.value;
        self.result.accounts_with_key = with_key.value;
        self.result.contract = contract.value;
        self.result.token = token.value;
        self.result.topic = topic.value;
        self.result.transactions = transactions.value;
        self.result.block = block.value;
        self.result.error_count = account.errors
            + with_key.errors
            + contract.errors
            + token.errors
            + topic.errors
            + transactions.errors
            + block.errors;

        &self.result
    }

    // ===== Channels =====

    async fn resolve_account(&self) -> Settled<Option<AccountInfo>> {
        let mut errors = 0;
        for param in &self.plan.account_params {
            match self.client.get_account(param).await {
                Ok(Some(account)) => return Settled { value: Some(account), errors },
                Ok(None) => {}
                Err(error) => {
                    tracing::debug!(%error, param, "account lookup failed");
                    errors += 1;
                }
            }
        }
        Settled { value: None, errors }
    }

    async fn resolve_accounts_with_key(&self) -> Settled<Vec<AccountInfo>> {
        let Some(key) = &self.plan.public_key else {
            return Settled { value: Vec::new(), errors: 0 };
        };
        match self.client.get_accounts_by_public_key(key).await {
            Ok(accounts) => Settled { value: accounts, errors: 0 },
            Err(error) => {
                tracing::debug!(%error, key, "accounts-by-key lookup failed");
                Settled { value: Vec::new(), errors: 1 }
            }
        }
    }

    async fn resolve_contract(&self) -> Settled<Option<ContractInfo>> {
        let mut errors = 0;
        for param in &self.plan.contract_params {
            match self.client.get_contract(param).await {
                Ok(Some(contract)) => return Settled { value: Some(contract), errors },
                Ok(None) => {}
                Err(error) => {
                    tracing::debug!(%error, param, "contract lookup failed");
                    errors += 1;
                }
            }
        }
        Settled { value: None, errors }
    }

    async fn resolve_token(&self) -> Settled<Option<TokenInfo>> {
        let mut errors = 0;
        for param in &self.plan.token_params {
            match self.client.get_token(param).await {
                Ok(Some(token)) => return Settled { value: Some(token), errors },
                Ok(None) => {}
                Err(error) => {
                    tracing::debug!(%error, param, "token lookup failed");
                    errors += 1;
                }
            }
        }
        Settled { value: None, errors }
    }

    async fn resolve_topic(&self) -> Settled<Option<TopicInfo>> {
        let mut errors = 0;
        for param in &self.plan.topic_params {
            match self.client.get_topic(param).await {
                Ok(Some(topic)) => return Settled { value: Some(topic), errors },
                Ok(None) => {}
                Err(error) => {
                    tracing::debug!(%error, param, "topic lookup failed");
                    errors += 1;
                }
            }
        }
        Settled { value: None, errors }
    }

    async fn resolve_transactions(&self) -> Settled<Vec<TransactionInfo>> {
        let mut errors = 0;
        for lookup in &self.plan.transaction_lookups {
            let found = match lookup {
                TransactionLookup::ById(id) | TransactionLookup::ByHash(id) => {
                    match self.client.get_transactions(id).await {
                        Ok(transactions) => transactions,
                        Err(error) => {
                            tracing::debug!(%error, id, "transaction lookup failed");
                            errors += 1;
                            Vec::new()
                        }
                    }
                }
                TransactionLookup::ByEvmHash(hash) => {
                    let chain = self.resolve_by_evm_hash(hash).await;
                    errors += chain.errors;
                    chain.value
                }
            };
            if !found.is_empty() {
                return Settled { value: found, errors };
            }
        }
        Settled { value: Vec::new(), errors }
    }

    /// Two-stage chain: the contract result carries the consensus timestamp
    /// that keys the transaction records.
    async fn resolve_by_evm_hash(&self, hash: &str) -> Settled<Vec<TransactionInfo>> {
        let result = match self.client.get_contract_result(hash).await {
            Ok(Some(result)) => result,
            Ok(None) => return Settled { value: Vec::new(), errors: 0 },
            Err(error) => {
                tracing::debug!(%error, hash, "contract-result lookup failed");
                return Settled { value: Vec::new(), errors: 1 };
            }
        };

        let Some(timestamp) = result.timestamp else {
            return Settled { value: Vec::new(), errors: 0 };
        };
        match self.client.get_transactions_at(&timestamp).await {
            Ok(transactions) => Settled { value: transactions, errors: 0 },
            Err(error) => {
                tracing::debug!(%error, timestamp, "transaction-by-timestamp lookup failed");
                Settled { value: Vec::new(), errors: 1 }
            }
        }
    }

    async fn resolve_block(&self) -> Settled<Option<BlockInfo>> {
        let mut errors = 0;
        for param in &self.plan.block_params {
            match self.client.get_block(param).await {
                Ok(Some(block)) => return Settled { value: Some(block), errors },
                Ok(None) => {}
                Err(error) => {
                    tracing::debug!(%error, param, "block lookup failed");
                    errors += 1;
                }
            }
        }
        Settled { value: None, errors }
    }
}
