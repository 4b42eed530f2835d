//! Keys Module
//!
//! Cache key derivation for quotes and portfolio snapshots.

pub mod codec;
mod identifiers;

pub use codec::{filters_hash, portfolio_snapshot_key, quote_key};
pub use identifiers::{AssetProfileIdentifier, DataSource, Filter, FilterType};

// == Public Constants ==
/// Reserved key used only by the health probe
pub const HEALTH_CHECK_KEY: &str = "__health_check__";
