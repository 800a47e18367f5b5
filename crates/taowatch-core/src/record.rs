//! Upstream subnet record shape.

use crate::columns::SortKey;
use crate::metric::Metric;
use serde::{Deserialize, Serialize};

/// One subnet as reported by the upstream statistics API.
///
/// Every metric field is carried raw: the upstream mixes numbers, numeric
/// strings, and nulls between records, and missing fields default to null.
/// Coercion and formatting happen in the view layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubnetRecord {
    #[serde(default)]
    pub netuid: Metric,
    #[serde(default)]
    pub name: Metric,
    #[serde(default)]
    pub symbol: Metric,
    #[serde(default)]
    pub market_cap: Metric,
    #[serde(default)]
    pub liquidity: Metric,
    #[serde(default)]
    pub price: Metric,
    #[serde(default)]
    pub tao_volume_24_hr: Metric,
    #[serde(default)]
    pub price_change_1_day: Metric,
    #[serde(default)]
    pub block_number: Metric,
    /// 7-day price trend, chronologically ascending. Consumed only by the
    /// detail view's chart sink.
    #[serde(default)]
    pub seven_day_prices: Vec<PricePoint>,
}

impl SubnetRecord {
    /// Row identity within a fetched batch.
    ///
    /// `netuid` alone repeats across polling intervals, so the block number
    /// breaks ties.
    pub fn key(&self) -> RowKey {
        RowKey {
            netuid: self.netuid.as_i64().unwrap_or(0),
            block_number: self.block_number.as_i64().unwrap_or(0),
        }
    }

    /// Raw value of the field backing a table column.
    pub fn field(&self, key: SortKey) -> &Metric {
        match key {
            SortKey::Netuid => &self.netuid,
            SortKey::Name => &self.name,
            SortKey::Symbol => &self.symbol,
            SortKey::MarketCap => &self.market_cap,
            SortKey::Liquidity => &self.liquidity,
            SortKey::Price => &self.price,
            SortKey::TaoVolume24Hr => &self.tao_volume_24_hr,
            SortKey::PriceChange1Day => &self.price_change_1_day,
        }
    }
}

/// Identity of one row: `(netuid, block_number)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowKey {
    pub netuid: i64,
    pub block_number: i64,
}

/// One sample of the 7-day price trend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Sample time in epoch milliseconds.
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub price: Metric,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_record() {
        let record: SubnetRecord = serde_json::from_value(json!({
            "netuid": 3,
            "name": "Alpha",
            "symbol": "ALP",
            "market_cap": "5000000000",
            "liquidity": 1_200_000_000,
            "price": 1.2345,
            "tao_volume_24_hr": null,
            "price_change_1_day": -2.5,
            "block_number": 100,
            "seven_day_prices": [
                { "timestamp": 1706400000000_i64, "price": 1.2 },
                { "timestamp": 1706486400000_i64, "price": "1.3" }
            ],
            "github_repo": "ignored-passthrough-field"
        }))
        .unwrap();

        assert_eq!(record.key(), RowKey { netuid: 3, block_number: 100 });
        assert_eq!(record.name.text(), "Alpha");
        assert!(record.market_cap.is_numeric());
        assert!(record.tao_volume_24_hr.is_null());
        assert_eq!(record.seven_day_prices.len(), 2);
        assert_eq!(record.seven_day_prices[0].timestamp, 1706400000000);
    }

    #[test]
    fn test_missing_fields_default_to_null() {
        let record: SubnetRecord = serde_json::from_value(json!({ "netuid": 7 })).unwrap();
        assert!(record.name.is_null());
        assert!(record.price.is_null());
        assert!(record.seven_day_prices.is_empty());
        assert_eq!(record.key(), RowKey { netuid: 7, block_number: 0 });
    }

    #[test]
    fn test_field_access_matches_columns() {
        let record: SubnetRecord =
            serde_json::from_value(json!({ "price": 2.0, "symbol": "SN" })).unwrap();
        assert_eq!(record.field(SortKey::Price), &record.price);
        assert_eq!(record.field(SortKey::Symbol), &record.symbol);
    }
}
