use feedsql::Record;
use serde::Serialize;

// attributes of other derives pass through untouched
#[derive(Default, Record, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    #[sql(column = "feed_id SERIAL PRIMARY KEY")]
    #[serde(rename = "id")]
    pub feed_id: i32,

    #[sql(column = "display_name TEXT NOT NULL")]
    pub display_name: String,
}

fn main() {
    assert_eq!(feedsql::descriptor::column_names::<Feed>().unwrap(), ["feed_id", "display_name"]);
}
