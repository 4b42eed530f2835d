//! Key Codec
//!
//! Pure derivation of canonical cache keys. The formats are shared with data
//! already sitting in the store, so they must not drift.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::keys::AssetProfileIdentifier;

const QUOTE_PREFIX: &str = "quote-";
const PORTFOLIO_SNAPSHOT_PREFIX: &str = "portfolio-snapshot-";

// == Quote Key ==
/// Returns `quote-{dataSource}:{symbol}`.
pub fn quote_key(asset: &AssetProfileIdentifier) -> String {
    format!("{}{}:{}", QUOTE_PREFIX, asset.data_source, asset.symbol)
}

// == Portfolio Snapshot Key ==
/// Returns `portfolio-snapshot-{userId}`, suffixed with `-{filtersHash}` when
/// `filters` is non-empty.
///
/// The hash covers the filters in the order given. Two slices holding the same
/// filters in a different order produce different keys.
pub fn portfolio_snapshot_key<F: Serialize>(user_id: &str, filters: &[F]) -> Result<String> {
    if filters.is_empty() {
        return Ok(format!("{}{}", PORTFOLIO_SNAPSHOT_PREFIX, user_id));
    }

    Ok(format!(
        "{}{}-{}",
        PORTFOLIO_SNAPSHOT_PREFIX,
        user_id,
        filters_hash(filters)?
    ))
}

// == Filters Hash ==
/// Lowercase hex SHA-256 of the JSON serialization of `filters`.
pub fn filters_hash<F: Serialize>(filters: &[F]) -> Result<String> {
    let serialized = serde_json::to_vec(filters)?;

    let mut hasher = Sha256::new();
    hasher.update(&serialized);

    Ok(format!("{:x}", hasher.finalize()))
}
