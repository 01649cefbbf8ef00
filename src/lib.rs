//! mirrorscope — identifier resolution for Hedera-style mirror nodes.
//!
//! Given an arbitrary user-typed string and a target network, the engine
//! decodes the string against every identifier grammar it knows (numeric
//! triple, checksummed triple, base-32 alias, hex, base-64, EVM address),
//! queries every plausible lookup channel of the mirror REST API
//! concurrently, and aggregates whatever the network returned into a single
//! [`search::Resolution`].
//!
//! ```ignore
//! use mirrorscope::{Network, SearchRequest};
//!
//! let mut request = SearchRequest::new("0.0.730631", Network::Mainnet)?;
//! request.run().await;
//! if let Some(account) = &request.result().account {
//!     println!("found account {:?}", account.account);
//! }
//! ```

pub mod client;
pub mod domain;
pub mod search;

pub use client::MirrorClient;
pub use domain::{Network, SearchError};
pub use search::{Resolution, SearchRequest};
