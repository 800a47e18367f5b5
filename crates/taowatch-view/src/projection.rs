//! Renderable projections of the view state.

use serde::Serialize;
use taowatch_core::{
    format_magnitude, format_percent, format_price, Metric, PricePoint, RowKey, SubnetRecord,
};

/// Sign of the 24h price change, driving the display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeTone {
    Positive,
    Negative,
    Neutral,
}

impl ChangeTone {
    fn from_change(value: &Metric) -> Self {
        match value.as_decimal() {
            Some(d) if !d.is_zero() && d.is_sign_positive() => Self::Positive,
            Some(d) if !d.is_zero() && d.is_sign_negative() => Self::Negative,
            _ => Self::Neutral,
        }
    }
}

/// One formatted table row.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayRow {
    pub key: RowKey,
    pub netuid: String,
    pub name: String,
    pub symbol: String,
    pub market_cap: String,
    pub liquidity: String,
    pub price: String,
    pub tao_volume_24_hr: String,
    /// Signed percentage with "%" suffix, e.g. "-2.50%".
    pub price_change_1_day: String,
    pub change_tone: ChangeTone,
}

impl DisplayRow {
    pub fn from_record(record: &SubnetRecord) -> Self {
        Self {
            key: record.key(),
            netuid: record.netuid.text(),
            name: record.name.text(),
            symbol: record.symbol.text(),
            market_cap: format_magnitude(&record.market_cap),
            liquidity: format_magnitude(&record.liquidity),
            price: format_price(&record.price),
            tao_volume_24_hr: format_magnitude(&record.tao_volume_24_hr),
            price_change_1_day: format!("{}%", format_percent(&record.price_change_1_day)),
            change_tone: ChangeTone::from_change(&record.price_change_1_day),
        }
    }
}

/// Detail view of one selected record: the headline fields plus the raw
/// trend series for the chart sink.
#[derive(Debug, Clone, Serialize)]
pub struct DetailView {
    pub key: RowKey,
    pub name: String,
    pub symbol: String,
    pub netuid: String,
    pub market_cap: String,
    pub liquidity: String,
    pub price: String,
    pub tao_volume_24_hr: String,
    pub price_change_1_day: String,
    /// Passed through unmodified; the chart sink owns axis and tooltip
    /// formatting.
    pub seven_day_prices: Vec<PricePoint>,
}

impl DetailView {
    pub fn from_record(record: &SubnetRecord) -> Self {
        Self {
            key: record.key(),
            name: record.name.text(),
            symbol: record.symbol.text(),
            netuid: record.netuid.text(),
            market_cap: format_magnitude(&record.market_cap),
            liquidity: format_magnitude(&record.liquidity),
            price: format_price(&record.price),
            tao_volume_24_hr: format_magnitude(&record.tao_volume_24_hr),
            price_change_1_day: format!("{}%", format_percent(&record.price_change_1_day)),
            seven_day_prices: record.seven_day_prices.clone(),
        }
    }
}
