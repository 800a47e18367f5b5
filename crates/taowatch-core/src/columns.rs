//! Table column identifiers and sort state.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sortable table columns, in display order.
///
/// Identifiers match the upstream field names so sort state can round-trip
/// through query strings and config unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Netuid,
    Name,
    Symbol,
    MarketCap,
    Liquidity,
    Price,
    TaoVolume24Hr,
    PriceChange1Day,
}

impl SortKey {
    /// All columns in display order.
    pub const ALL: [SortKey; 8] = [
        SortKey::Netuid,
        SortKey::Name,
        SortKey::Symbol,
        SortKey::MarketCap,
        SortKey::Liquidity,
        SortKey::Price,
        SortKey::TaoVolume24Hr,
        SortKey::PriceChange1Day,
    ];

    /// Upstream field name backing this column.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Netuid => "netuid",
            Self::Name => "name",
            Self::Symbol => "symbol",
            Self::MarketCap => "market_cap",
            Self::Liquidity => "liquidity",
            Self::Price => "price",
            Self::TaoVolume24Hr => "tao_volume_24_hr",
            Self::PriceChange1Day => "price_change_1_day",
        }
    }

    /// Human-readable column header.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Netuid => "NetUID",
            Self::Name => "Name",
            Self::Symbol => "Symbol",
            Self::MarketCap => "Market Cap",
            Self::Liquidity => "Liquidity",
            Self::Price => "Price",
            Self::TaoVolume24Hr => "24h Volume",
            Self::PriceChange1Day => "Price Change (24h)",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.field_name() == s)
            .ok_or_else(|| CoreError::UnknownColumn(s.to_string()))
    }
}

/// Sort direction for the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(key.field_name().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_unknown_column() {
        assert!(matches!(
            "volume".parse::<SortKey>(),
            Err(CoreError::UnknownColumn(_))
        ));
    }

    #[test]
    fn test_direction_flip() {
        assert_eq!(SortDirection::Ascending.flipped(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.flipped(), SortDirection::Ascending);
    }
}
