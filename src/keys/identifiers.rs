//! Key Inputs
//!
//! Domain values that cache keys are derived from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// == Data Source ==
/// Market data provider a quote originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataSource {
    AlphaVantage,
    Coingecko,
    EodHistoricalData,
    FinancialModelingPrep,
    Ghostfolio,
    GoogleSheets,
    Manual,
    RapidApi,
    Yahoo,
}

impl DataSource {
    pub const ALL: [DataSource; 9] = [
        DataSource::AlphaVantage,
        DataSource::Coingecko,
        DataSource::EodHistoricalData,
        DataSource::FinancialModelingPrep,
        DataSource::Ghostfolio,
        DataSource::GoogleSheets,
        DataSource::Manual,
        DataSource::RapidApi,
        DataSource::Yahoo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::AlphaVantage => "ALPHA_VANTAGE",
            DataSource::Coingecko => "COINGECKO",
            DataSource::EodHistoricalData => "EOD_HISTORICAL_DATA",
            DataSource::FinancialModelingPrep => "FINANCIAL_MODELING_PREP",
            DataSource::Ghostfolio => "GHOSTFOLIO",
            DataSource::GoogleSheets => "GOOGLE_SHEETS",
            DataSource::Manual => "MANUAL",
            DataSource::RapidApi => "RAPID_API",
            DataSource::Yahoo => "YAHOO",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ds| ds.as_str() == s)
            .ok_or_else(|| format!("unknown data source '{}'", s))
    }
}

// == Asset Profile Identifier ==
/// Identifies an asset by the provider it is quoted from and its symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetProfileIdentifier {
    pub data_source: DataSource,
    pub symbol: String,
}

impl AssetProfileIdentifier {
    pub fn new(data_source: DataSource, symbol: impl Into<String>) -> Self {
        Self {
            data_source,
            symbol: symbol.into(),
        }
    }
}

// == Filter ==
/// Dimension a portfolio view can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterType {
    Account,
    AssetClass,
    AssetSubClass,
    DataSource,
    HoldingType,
    PresetId,
    SearchQuery,
    Symbol,
    Tag,
}

/// A single portfolio filter. Serialized as `{"id":…,"type":…}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Filter {
    pub id: String,
    #[serde(rename = "type")]
    pub filter_type: FilterType,
}

impl Filter {
    pub fn new(filter_type: FilterType, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            filter_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_source_display_matches_serde() {
        for ds in DataSource::ALL {
            let json = serde_json::to_string(&ds).unwrap();
            assert_eq!(json, format!("\"{}\"", ds));
        }
    }

    #[test]
    fn test_data_source_from_str() {
        assert_eq!("YAHOO".parse::<DataSource>(), Ok(DataSource::Yahoo));
        assert_eq!(
            "EOD_HISTORICAL_DATA".parse::<DataSource>(),
            Ok(DataSource::EodHistoricalData)
        );
        assert!("yahoo".parse::<DataSource>().is_err());
    }

    #[test]
    fn test_filter_serialization_field_order() {
        let filter = Filter::new(FilterType::AssetClass, "EQUITY");
        let json = serde_json::to_string(&filter).unwrap();
        assert_eq!(json, r#"{"id":"EQUITY","type":"ASSET_CLASS"}"#);
    }
}
