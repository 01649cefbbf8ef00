//! Query classification.
//!
//! A raw search string is decoded into every identifier shape it can
//! plausibly take, and the surviving candidates are expanded into a channel
//! plan. Decoding is pure and offline; the orchestrator in the parent module
//! spends network requests only on what the plan names.

use crate::domain::encoding::{
    EVM_ADDRESS_LEN, LEDGER_HASH_LEN, decode_base32, decode_base64, decode_hex, encode_base32,
    encode_hex, zero_extend_to_evm,
};
use crate::domain::{EntityId, Network, TransactionId};

// ============================================================================
// Candidates
// ============================================================================

/// One interpretation of a query string.
///
/// Interpretations are not mutually exclusive: `730631` is both a numeric id
/// and a three-byte hex blob, and a 64-digit hex string also decodes as 48
/// bytes of base-64. Every reading that parses is kept.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedIdentifier {
    /// `shard.realm.num`, bare `num`, or a checksum-validated triple.
    NumericId(EntityId),
    /// `shard.realm.num-seconds-nanos` or the `@`-separated display form.
    TransactionId(TransactionId),
    /// Unpadded base-32 text, kept verbatim for the account lookup.
    Alias(String),
    /// Hex decoding to exactly 20 bytes.
    EvmAddress([u8; EVM_ADDRESS_LEN]),
    /// Hex of any other byte length.
    HexBlob(Vec<u8>),
    /// Base-64 decoding to a 48-byte ledger hash.
    Base64Blob(Vec<u8>),
}

/// Decode every candidate reading of `text`.
///
/// The checksum grammar binds to `network`: a five-letter suffix must match
/// that ledger's checksum or the numeric reading is discarded entirely.
#[must_use]
pub fn decode_candidates(text: &str, network: Network) -> Vec<ParsedIdentifier> {
    let mut candidates = Vec::new();

    if let Some(id) = EntityId::parse_with_checksum(text, network) {
        candidates.push(ParsedIdentifier::NumericId(id));
    }
    if let Some(tid) = TransactionId::parse(text) {
        candidates.push(ParsedIdentifier::TransactionId(tid));
    }
    if decode_base32(text).is_some() {
        candidates.push(ParsedIdentifier::Alias(text.to_owned()));
    }
    if let Some(bytes) = decode_hex(text) {
        match <[u8; EVM_ADDRESS_LEN]>::try_from(bytes.as_slice()) {
            Ok(address) => candidates.push(ParsedIdentifier::EvmAddress(address)),
            Err(_) => candidates.push(ParsedIdentifier::HexBlob(bytes)),
        }
    }
    if let Some(bytes) = decode_base64(text) {
        if bytes.len() == LEDGER_HASH_LEN {
            candidates.push(ParsedIdentifier::Base64Blob(bytes));
        }
    }

    candidates
}

// ============================================================================
// Channel plan
// ============================================================================

/// One unit of work for the transaction channel.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionLookup {
    /// Lookup by canonical transaction id.
    ById(String),
    /// Lookup by 48-byte ledger hash, bare hex.
    ByHash(String),
    /// Two-stage lookup: contract result by EVM hash, then the transactions
    /// at the result's consensus timestamp.
    ByEvmHash(String),
}

/// The full set of lookups a query expands into, one field per channel.
///
/// Parameter lists preserve candidate order; duplicate (channel, parameter)
/// pairs from overlapping decodings are recorded once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPlan {
    pub account_params: Vec<String>,
    pub public_key: Option<String>,
    pub contract_params: Vec<String>,
    pub token_params: Vec<String>,
    pub topic_params: Vec<String>,
    pub transaction_lookups: Vec<TransactionLookup>,
    pub block_params: Vec<String>,
    /// Normalized `0x`-prefixed EVM address, set whenever the query reads as
    /// one, regardless of whether any channel finds a match.
    pub ethereum_address: Option<String>,
}

impl SearchPlan {
    /// Expand `text` into a plan for `network`.
    #[must_use]
    pub fn build(text: &str, network: Network) -> Self {
        let trimmed = text.trim();
        let candidates = decode_candidates(trimmed, network);
        let mut plan = Self::default();

        for candidate in &candidates {
            match candidate {
                ParsedIdentifier::NumericId(id) => {
                    let id = id.to_string();
                    push_unique(&mut plan.account_params, id.clone());
                    push_unique(&mut plan.contract_params, id.clone());
                    push_unique(&mut plan.token_params, id.clone());
                    push_unique(&mut plan.topic_params, id);
                }
                ParsedIdentifier::TransactionId(tid) => {
                    plan.push_lookup(TransactionLookup::ById(tid.to_string()));
                }
                ParsedIdentifier::Alias(alias) => {
                    push_unique(&mut plan.account_params, alias.clone());
                }
                ParsedIdentifier::EvmAddress(address) => {
                    // The address gets the same speculative byte-string
                    // lookups as any other hex blob, plus its own.
                    let hex = encode_hex(address);
                    push_unique(&mut plan.account_params, encode_base32(address));
                    plan.push_lookup(TransactionLookup::ByEvmHash(hex.clone()));
                    push_unique(&mut plan.block_params, hex.clone());
                    plan.public_key = Some(hex.clone());
                    push_unique(&mut plan.account_params, hex.clone());
                    push_unique(&mut plan.contract_params, hex.clone());
                    if let Some(id) = EntityId::from_evm_address(address) {
                        push_unique(&mut plan.token_params, id.to_string());
                    }
                    plan.ethereum_address = Some(format!("0x{hex}"));
                }
                ParsedIdentifier::HexBlob(bytes) => {
                    let hex = encode_hex(bytes);
                    // Raw bytes double as an account alias.
                    push_unique(&mut plan.account_params, encode_base32(bytes));
                    plan.push_lookup(TransactionLookup::ByEvmHash(hex.clone()));
                    push_unique(&mut plan.block_params, hex.clone());
                    plan.public_key = Some(hex.clone());
                    if bytes.len() == LEDGER_HASH_LEN {
                        plan.push_lookup(TransactionLookup::ByHash(hex));
                    } else if bytes.len() < EVM_ADDRESS_LEN {
                        if let Some(address) = zero_extend_to_evm(bytes) {
                            let extended = encode_hex(&address);
                            push_unique(&mut plan.account_params, extended.clone());
                            push_unique(&mut plan.contract_params, extended.clone());
                            plan.ethereum_address = Some(format!("0x{extended}"));
                        }
                    }
                }
                ParsedIdentifier::Base64Blob(bytes) => {
                    let hex = encode_hex(bytes);
                    plan.push_lookup(TransactionLookup::ByHash(hex.clone()));
                    push_unique(&mut plan.block_params, hex);
                }
            }
        }

        // Catch-all: opaque undotted text still gets one speculative round of
        // the four entity channels, verbatim.
        if candidates.is_empty() && is_opaque(trimmed) {
            let verbatim = trimmed.to_owned();
            plan.account_params.push(verbatim.clone());
            plan.contract_params.push(verbatim.clone());
            plan.token_params.push(verbatim.clone());
            plan.topic_params.push(verbatim);
        }

        plan
    }

    /// True when the plan names no lookup at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.account_params.is_empty()
            && self.public_key.is_none()
            && self.contract_params.is_empty()
            && self.token_params.is_empty()
            && self.topic_params.is_empty()
            && self.transaction_lookups.is_empty()
            && self.block_params.is_empty()
    }

    fn push_lookup(&mut self, lookup: TransactionLookup) {
        if !self.transaction_lookups.contains(&lookup) {
            self.transaction_lookups.push(lookup);
        }
    }
}

fn push_unique(params: &mut Vec<String>, value: String) {
    if !params.contains(&value) {
        params.push(value);
    }
}

fn is_opaque(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_alphanumeric())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn plan(text: &str) -> SearchPlan {
        SearchPlan::build(text, Network::Mainnet)
    }

    #[test]
    fn test_numeric_triple_fans_out_to_entity_channels() {
        let plan = plan("0.0.730631");
        assert_eq!(plan.account_params, vec!["0.0.730631"]);
        assert_eq!(plan.contract_params, vec!["0.0.730631"]);
        assert_eq!(plan.token_params, vec!["0.0.730631"]);
        assert_eq!(plan.topic_params, vec!["0.0.730631"]);
        assert!(plan.transaction_lookups.is_empty());
        assert!(plan.block_params.is_empty());
        assert!(plan.public_key.is_none());
        assert!(plan.ethereum_address.is_none());
    }

    #[test]
    fn test_bare_number_is_both_id_and_hex() {
        let plan = plan("730631");
        // Numeric reading first, then the three-byte hex reading.
        assert_eq!(plan.account_params[0], "0.0.730631");
        assert!(plan.topic_params.contains(&"0.0.730631".to_owned()));
        assert_eq!(
            plan.ethereum_address.as_deref(),
            Some("0x0000000000000000000000000000000000730631")
        );
    }

    #[test]
    fn test_checksummed_triple() {
        let id = EntityId {
            shard: 0,
            realm: 0,
            num: 4,
        };
        let query = format!("0.0.4-{}", id.checksum(Network::Mainnet.ledger_id()));
        assert_eq!(plan(&query).topic_params, vec!["0.0.4"]);

        // A wrong checksum invalidates the numeric reading, and dotted text
        // never reaches the catch-all.
        assert!(plan("0.0.4-aaaaa").is_empty());
    }

    #[rstest]
    #[case::request_form("0.0.88-1640088000-456456456")]
    #[case::display_form("0.0.88@1640088000.456456456")]
    fn test_transaction_id_forms_share_a_canonical_lookup(#[case] input: &str) {
        let plan = plan(input);
        assert_eq!(
            plan.transaction_lookups,
            vec![TransactionLookup::ById("0.0.88-1640088000-456456456".to_owned())]
        );
        assert!(plan.account_params.is_empty());
    }

    #[test]
    fn test_alias_is_a_single_account_lookup() {
        let alias = encode_base32(&[0x12, 0x20, 0x55, 0xaa]);
        let built = plan(&alias);
        assert_eq!(built.account_params, vec![alias]);
        assert!(built.contract_params.is_empty());
        assert!(built.transaction_lookups.is_empty());
    }

    #[test]
    fn test_short_hex_zero_extends_without_truncation() {
        let hex: String = "12".repeat(19); // 19 bytes
        let built = plan(&hex);
        let extended = format!("00{hex}");
        assert_eq!(
            built.account_params,
            vec![encode_base32(&[0x12; 19]), extended.clone()]
        );
        assert_eq!(built.contract_params, vec![extended.clone()]);
        assert_eq!(built.ethereum_address, Some(format!("0x{extended}")));
        assert_eq!(built.public_key.as_deref(), Some(hex.as_str()));
        assert_eq!(built.block_params, vec![hex.clone()]);
        assert_eq!(built.transaction_lookups, vec![TransactionLookup::ByEvmHash(hex)]);
    }

    #[test]
    fn test_long_zero_evm_address_decodes_a_token_id() {
        let built = plan("0x00000000000000000000000000000000000b2607");
        let bare = "00000000000000000000000000000000000b2607";
        let alias = encode_base32(&crate::domain::encoding::decode_hex(bare).unwrap());
        assert_eq!(built.account_params, vec![alias, bare.to_owned()]);
        assert_eq!(built.contract_params, vec![bare]);
        assert_eq!(built.token_params, vec!["0.0.730631"]);
        assert_eq!(built.ethereum_address, Some(format!("0x{bare}")));
    }

    #[test]
    fn test_twenty_byte_hex_keeps_key_block_and_result_lookups() {
        // The full-width address reading narrows nothing away: the byte
        // string is still tried as a public key, a block hash prefix and an
        // EVM transaction hash.
        let hex = "aa".repeat(20);
        let built = plan(&hex);
        assert_eq!(built.public_key.as_deref(), Some(hex.as_str()));
        assert_eq!(built.block_params, vec![hex.clone()]);
        assert!(built.transaction_lookups.contains(&TransactionLookup::ByEvmHash(hex.clone())));
        assert!(built.account_params.contains(&hex));
        assert_eq!(built.contract_params, vec![hex.clone()]);
        assert_eq!(built.ethereum_address, Some(format!("0x{hex}")));
    }

    #[test]
    fn test_thirty_two_byte_hex_reads_as_key_and_evm_hash() {
        let hex = "aa".repeat(32);
        let built = plan(&hex);
        assert_eq!(built.public_key.as_deref(), Some(hex.as_str()));
        assert_eq!(built.block_params[0], hex);
        assert!(built.transaction_lookups.contains(&TransactionLookup::ByEvmHash(hex)));
        assert!(built.ethereum_address.is_none());
        assert!(built.token_params.is_empty());
    }

    #[test]
    fn test_forty_eight_byte_hex_adds_a_hash_lookup() {
        let hex = "ab".repeat(48);
        let built = plan(&hex);
        assert!(built.transaction_lookups.contains(&TransactionLookup::ByHash(hex.clone())));
        assert!(built.transaction_lookups.contains(&TransactionLookup::ByEvmHash(hex.clone())));
        assert_eq!(built.block_params, vec![hex]);
    }

    #[test]
    fn test_base64_hash_maps_to_transaction_and_block() {
        let text = "/".repeat(64); // 48 bytes of 0xff
        let built = plan(&text);
        let hex = "ff".repeat(48);
        assert_eq!(built.transaction_lookups, vec![TransactionLookup::ByHash(hex.clone())]);
        assert_eq!(built.block_params, vec![hex]);
        assert!(built.account_params.is_empty());
    }

    #[test]
    fn test_overlapping_decodings_are_deduplicated() {
        // 64 hex digits are simultaneously 32 bytes of hex and 48 bytes of
        // base-64; the block channel must still see each parameter once.
        let hex = "ab".repeat(32);
        let built = plan(&hex);
        assert_eq!(
            built.block_params.iter().filter(|p| *p == &hex).count(),
            1
        );
        assert_eq!(built.transaction_lookups.len(), 2);
    }

    #[rstest]
    #[case::dotted_garbage("a.b.c")]
    #[case::dotted_partial("0.730631.x")]
    #[case::empty("")]
    #[case::whitespace("   ")]
    #[case::punctuation("hello, world")]
    fn test_unresolvable_text_yields_no_lookups(#[case] input: &str) {
        assert!(plan(input).is_empty());
    }

    #[test]
    fn test_opaque_text_falls_back_to_verbatim_entity_lookups() {
        let built = plan("zzzzz");
        assert_eq!(built.account_params, vec!["zzzzz"]);
        assert_eq!(built.contract_params, vec!["zzzzz"]);
        assert_eq!(built.token_params, vec!["zzzzz"]);
        assert_eq!(built.topic_params, vec!["zzzzz"]);
        assert!(built.transaction_lookups.is_empty());
        assert!(built.ethereum_address.is_none());
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(plan("  0.0.730631  "), plan("0.0.730631"));
    }
}
