use crate::{
    traits::ScalarColumn,
    wrapper::{DeferredDefault, Timestamp},
};
use feedsql_derive::Record;

///
/// Asset
///

#[derive(Clone, Debug, Default, PartialEq, Record)]
pub(crate) struct Asset {
    #[sql(column = "id SERIAL PRIMARY KEY")]
    pub id: DeferredDefault<u64>,

    #[sql(column = "ticker VARCHAR(16) NOT NULL")]
    pub ticker: String,

    #[sql(column = "source VARCHAR(16) NOT NULL")]
    pub source: String,

    #[sql(column = "decimals SMALLINT NOT NULL CHECK (decimals >= 0)")]
    pub decimals: i8,
}

///
/// Price
///

#[derive(Clone, Debug, Default, PartialEq, Record)]
pub(crate) struct Price {
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

///
/// Order
/// Several references and indexes, declared across fields.
///

#[derive(Clone, Debug, Default, Record)]
pub(crate) struct Order {
    #[sql(column = "order_detail_id SERIAL PRIMARY KEY")]
    pub order_detail_id: DeferredDefault<i64>,

    #[sql(
        column = "order_id INTEGER NOT NULL",
        reference = "FOREIGN KEY (order_id) REFERENCES Assets(order_id)"
    )]
    pub order_id: i32,

    #[sql(column = "product_id INTEGER NOT NULL")]
    pub product_id: i32,

    #[sql(
        column = "quantity INTEGER NOT NULL CHECK (quantity > 0)",
        reference = "FOREIGN KEY (quantity) REFERENCES Assets(asset_id)",
        index = "CREATE INDEX idx_test_quantity ON Order(quantity)"
    )]
    pub quantity: i32,

    #[sql(
        column = "unit_price DECIMAL(10, 2) NOT NULL CHECK (unit_price > 0)",
        index = "CREATE INDEX idx_test_unit_price ON Order(unit_price)"
    )]
    pub unit_price: f64,
}

///
/// Unannotated
/// Second field carries no column clause.
///

#[derive(Clone, Debug, Default, Record)]
pub(crate) struct Unannotated {
    #[sql(column = "id SERIAL PRIMARY KEY")]
    pub id: DeferredDefault<i64>,

    pub label: String,
}

///
/// Holder
/// Embeds another record as a field.
///

#[derive(Clone, Debug, Default, Record)]
pub(crate) struct Holder {
    #[sql(column = "id SERIAL PRIMARY KEY")]
    pub id: i64,

    #[sql(column = "asset JSONB NOT NULL")]
    pub asset: Asset,
}

///
/// Tagged
///

#[derive(Clone, Debug, Default, Record)]
pub(crate) struct Tagged<T: ScalarColumn> {
    #[sql(column = "id SERIAL PRIMARY KEY")]
    pub id: DeferredDefault<i64>,

    #[sql(column = "tag TEXT NOT NULL")]
    pub tag: T,
}
