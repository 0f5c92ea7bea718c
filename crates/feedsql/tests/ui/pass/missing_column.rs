use feedsql::{Record, error::Error, schema};

// compiles; deriving the table reports the missing clause
#[derive(Default, Record)]
pub struct Draft {
    #[sql(column = "id SERIAL PRIMARY KEY")]
    pub id: i64,

    pub note: String,
}

fn main() {
    assert!(matches!(
        schema::create_table_sql::<Draft>(),
        Err(Error::Shape(_))
    ));
}
