//! Records persisted by the ingestion pipeline.

use crate::{
    Record,
    wrapper::{DeferredDefault, Timestamp},
};
use serde::{Deserialize, Serialize};

///
/// Asset
/// A tradable instrument as reported by one source.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Record, Serialize)]
pub struct Asset {
    #[sql(column = "id SERIAL PRIMARY KEY")]
    pub id: DeferredDefault<u64>,

    #[sql(column = "ticker VARCHAR(16) NOT NULL")]
    pub ticker: String,

    #[sql(column = "source VARCHAR(16) NOT NULL")]
    pub source: String,

    #[sql(column = "decimals SMALLINT NOT NULL CHECK (decimals >= 0)")]
    pub decimals: i8,
}

impl Asset {
    /// New asset whose id is assigned by the store.
    pub fn new(ticker: impl Into<String>, source: impl Into<String>, decimals: i8) -> Self {
        Self {
            id: DeferredDefault::deferred(),
            ticker: ticker.into(),
            source: source.into(),
            decimals,
        }
    }
}

///
/// Price
/// One observed price of an asset, in the asset's integer units.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Record, Serialize)]
pub struct Price {
    #[sql(column = "id SERIAL PRIMARY KEY")]
    pub id: DeferredDefault<i64>,

    #[sql(
        column = "asset_id INTEGER NOT NULL",
        reference = "FOREIGN KEY (asset_id) REFERENCES asset(id)",
        index = "CREATE INDEX idx_price_asset_id ON Price(asset_id)"
    )]
    pub asset_id: i32,

    #[sql(column = "price BIGINT NOT NULL")]
    pub price: i64,

    #[sql(column = "timestamp TIMESTAMP DEFAULT NOW() NOT NULL")]
    pub timestamp: Timestamp,
}

impl Price {
    // field positions, for ordering and matching helpers
    pub const ID: usize = 0;
    pub const ASSET_ID: usize = 1;
    pub const PRICE: usize = 2;
    pub const TIMESTAMP: usize = 3;

    /// New price stamped by the store at insert time.
    #[must_use]
    pub fn now(asset_id: i32, price: i64) -> Self {
        Self {
            id: DeferredDefault::deferred(),
            asset_id,
            price,
            timestamp: Timestamp::now(),
        }
    }

    /// New price observed at `unix` seconds.
    #[must_use]
    pub fn at(asset_id: i32, price: i64, unix: i64) -> Self {
        Self {
            id: DeferredDefault::deferred(),
            asset_id,
            price,
            timestamp: Timestamp::from_unix(unix),
        }
    }
}
