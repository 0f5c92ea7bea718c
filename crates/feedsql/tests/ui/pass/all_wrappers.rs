use feedsql::{
    Record,
    query,
    wrapper::{DeferredDefault, Nullable, Timestamp},
};

#[derive(Default, Record)]
pub struct Quote {
    #[sql(column = "id SERIAL PRIMARY KEY")]
    pub id: DeferredDefault<u64>,

    #[sql(column = "bid BIGINT")]
    pub bid: Nullable<i64>,

    #[sql(column = "venue TEXT")]
    pub venue: Nullable<String>,

    #[sql(column = "side CHAR(1) NOT NULL")]
    pub side: char,

    #[sql(column = "seen_at TIMESTAMP NOT NULL")]
    pub seen_at: Timestamp,
}

fn main() {
    let quote = Quote {
        id: DeferredDefault::deferred(),
        bid: Nullable::null(),
        venue: Nullable::new("NYSE".to_string()),
        side: 'b',
        seen_at: Timestamp::now(),
    };

    let sql = query::insert(&quote).unwrap().into_sql();
    assert_eq!(
        sql,
        "INSERT INTO Quote (id, bid, venue, side, seen_at) VALUES (DEFAULT, NULL, 'NYSE', 98, NOW())"
    );
}
