use feedsql::{
    db::{ScriptedDriver, Session},
    query, schema,
    traits::Record,
    types::{Asset, Price},
    value::{Cell, Row},
    wrapper::Timestamp,
};

#[test]
fn asset_insert_statement() {
    let query = query::insert(&Asset::new("BTC", "Binance", 18)).unwrap();

    assert_eq!(
        query.sql(),
        "INSERT INTO Asset (id, ticker, source, decimals) VALUES (DEFAULT, 'BTC', 'Binance', 18)"
    );
}

#[test]
fn price_schema_references_asset() {
    let sql = schema::create_table_sql::<Price>().unwrap();

    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS Price (
\tid SERIAL PRIMARY KEY,
\tasset_id INTEGER NOT NULL,
\tprice BIGINT NOT NULL,
\ttimestamp TIMESTAMP DEFAULT NOW() NOT NULL,
\tFOREIGN KEY (asset_id) REFERENCES asset(id)
);
CREATE INDEX idx_price_asset_id ON Price(asset_id);"
    );
}

#[test]
fn price_positions_match_declaration() {
    let names = feedsql::descriptor::column_names::<Price>().unwrap();

    assert_eq!(names[Price::ID], "id");
    assert_eq!(names[Price::ASSET_ID], "asset_id");
    assert_eq!(names[Price::PRICE], "price");
    assert_eq!(names[Price::TIMESTAMP], "timestamp");
    assert_eq!(Price::TABLE, "Price");
}

#[test]
fn price_timestamps_encode_by_flag() {
    let stamped = query::insert(&Price::at(1, 696_969, 1_724_440_501)).unwrap();
    let now = query::insert(&Price::now(1, 420)).unwrap();

    assert!(stamped.sql().ends_with("VALUES (DEFAULT, 1, 696969, TO_TIMESTAMP(1724440501))"));
    assert!(now.sql().ends_with("VALUES (DEFAULT, 1, 420, NOW())"));
}

#[test]
fn records_serialize_with_wrapper_flags() {
    let price = Price::at(2, 420, 1_724_440_501);
    let json = serde_json::to_value(&price).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "id": { "default": true, "value": 0 },
            "asset_id": 2,
            "price": 420,
            "timestamp": { "now": false, "datetime": "", "unix": 1_724_440_501 },
        })
    );

    let back: Price = serde_json::from_value(json).unwrap();
    assert_eq!(back, price);
}

#[test]
fn loaded_prices_keep_store_values_only() {
    let rows = [Row::from_iter([
        Cell::from("3"),
        "1".into(),
        "1".into(),
        "2024-08-23 19:15:01".into(),
    ])];
    let mut session = Session::new(ScriptedDriver::new().rows(rows));

    let mut prices = session.load_all::<Price>().unwrap();
    let price = &mut prices[0];

    assert!(!price.id.default);
    assert_eq!(price.id.value, 3);
    assert_eq!(price.timestamp.datetime, "2024-08-23 19:15:01");

    price.timestamp.sync_unix().unwrap();
    assert_eq!(price.timestamp.unix, 1_724_440_501);
    assert_ne!(price.timestamp, Timestamp::from_unix(1_724_440_501));
}
