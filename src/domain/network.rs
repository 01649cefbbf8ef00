//! Network configuration for the supported mirror node networks.

use serde::{Deserialize, Serialize};

/// Target ledger network.
///
/// Each network has its own public mirror node endpoint and its own ledger
/// id, which seeds the entity-id checksum algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// The production network.
    #[default]
    Mainnet,
    /// The stable test network.
    Testnet,
    /// The preview network where upcoming releases land first.
    Previewnet,
}

impl Network {
    /// Returns the lowercase network name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Previewnet => "previewnet",
        }
    }

    /// Returns the base URL of the public mirror node for this network.
    #[must_use]
    pub const fn mirror_url(&self) -> &str {
        match self {
            Self::Mainnet => "https://mainnet-public.mirrornode.hedera.com",
            Self::Testnet => "https://testnet.mirrornode.hedera.com",
            Self::Previewnet => "https://previewnet.mirrornode.hedera.com",
        }
    }

    /// Returns the ledger id bytes used to seed entity-id checksums.
    #[must_use]
    pub const fn ledger_id(&self) -> &[u8] {
        match self {
            Self::Mainnet => &[0x00],
            Self::Testnet => &[0x01],
            Self::Previewnet => &[0x02],
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            "previewnet" => Ok(Self::Previewnet),
            other => Err(format!(
                "unknown network '{other}' (expected mainnet, testnet or previewnet)"
            )),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
