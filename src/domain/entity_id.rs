//! Entity id triples (`shard.realm.num`) and their checksum.

use super::Network;
use super::encoding::{EVM_ADDRESS_LEN, encode_hex};

/// Largest id segment the backing service represents exactly (2^53 - 1).
const MAX_SEGMENT: u64 = (1 << 53) - 1;

/// A `shard.realm.num` entity id.
///
/// The same triple grammar addresses accounts, contracts, tokens and topics;
/// only a network lookup can tell which entity kind a given triple denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId {
    pub shard: u64,
    pub realm: u64,
    pub num: u64,
}

impl EntityId {
    /// Parse a `shard.realm.num` triple, or a bare `num` shorthand for
    /// `0.0.num`. Segments above 2^53 - 1 are out of range.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let segments: Vec<&str> = text.split('.').collect();
        match segments.as_slice() {
            [num] => Some(Self {
                shard: 0,
                realm: 0,
                num: parse_segment(num)?,
            }),
            [shard, realm, num] => Some(Self {
                shard: parse_segment(shard)?,
                realm: parse_segment(realm)?,
                num: parse_segment(num)?,
            }),
            _ => None,
        }
    }

    /// Parse a triple with an optional `-ccccc` checksum suffix.
    ///
    /// A present checksum is validated against the network's ledger id; a
    /// mismatch makes the whole string unparseable rather than yielding an
    /// unchecked id.
    #[must_use]
    pub fn parse_with_checksum(text: &str, network: Network) -> Option<Self> {
        match text.split_once('-') {
            None => Self::parse(text),
            Some((id_part, given)) => {
                if given.len() != 5 || !given.bytes().all(|b| b.is_ascii_lowercase()) {
                    return None;
                }
                let id = Self::parse(id_part)?;
                (id.checksum(network.ledger_id()) == given).then_some(id)
            }
        }
    }

    /// Compute the five-letter checksum of this id for a ledger.
    ///
    /// Weighted digit sums over the `shard.realm.num` string ('.' counts as
    /// 10) are combined with a hash of the ledger id, then rendered in base
    /// 26. Deterministic and pure.
    #[must_use]
    pub fn checksum(&self, ledger_id: &[u8]) -> String {
        const P3: u64 = 26 * 26 * 26;
        const P5: u64 = P3 * 26 * 26;
        const M: u64 = 1_000_003;

        let addr = self.to_string();
        let mut sd0: u64 = 0; // digit sum at even positions, mod 11
        let mut sd1: u64 = 0; // digit sum at odd positions, mod 11
        let mut sd: u64 = 0; // weighted digit sum, mod 26^3
        for (i, ch) in addr.chars().enumerate() {
            let d = if ch == '.' {
                10
            } else {
                u64::from(ch as u8 - b'0')
            };
            sd = (sd * 31 + d) % P3;
            if i % 2 == 0 {
                sd0 = (sd0 + d) % 11;
            } else {
                sd1 = (sd1 + d) % 11;
            }
        }

        let mut sh: u64 = 0; // ledger id hash, mod M
        for byte in ledger_id.iter().copied().chain([0u8; 6]) {
            sh = (sh * 31 + u64::from(byte)) % M;
        }

        let len = addr.len() as u64;
        let mut c = ((((len % 5) * 11 + sd0) * 11 + sd1) * P3 + sd + sh) % P5;
        c = (c * M) % P5;

        let mut letters = [0u8; 5];
        for slot in letters.iter_mut().rev() {
            *slot = b'a' + (c % 26) as u8;
            c /= 26;
        }
        String::from_utf8(letters.to_vec()).unwrap_or_default()
    }

    /// Render this id as a 20-byte long-zero EVM address in bare hex, or
    /// `None` when the shard does not fit the 4-byte slot.
    #[must_use]
    pub fn to_evm_address(&self) -> Option<String> {
        let shard = u32::try_from(self.shard).ok()?;
        let mut bytes = [0u8; EVM_ADDRESS_LEN];
        bytes[0..4].copy_from_slice(&shard.to_be_bytes());
        bytes[4..12].copy_from_slice(&self.realm.to_be_bytes());
        bytes[12..20].copy_from_slice(&self.num.to_be_bytes());
        Some(encode_hex(&bytes))
    }

    /// Decode a 20-byte long-zero EVM address back into a triple, when its
    /// realm and num stay within range.
    #[must_use]
    pub fn from_evm_address(bytes: &[u8; EVM_ADDRESS_LEN]) -> Option<Self> {
        let shard = u64::from(u32::from_be_bytes(bytes[0..4].try_into().ok()?));
        let realm = u64::from_be_bytes(bytes[4..12].try_into().ok()?);
        let num = u64::from_be_bytes(bytes[12..20].try_into().ok()?);
        if realm > MAX_SEGMENT || num > MAX_SEGMENT {
            return None;
        }
        Some(Self { shard, realm, num })
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

fn parse_segment(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<u64>().ok().filter(|&v| v <= MAX_SEGMENT)
}

// ============================================================================
// Tests
// ============================================================================
