use feedsql::{
    Record,
    traits::{Record as _, ScalarColumn},
    wrapper::DeferredDefault,
};

/// Generic parameters never reach the table name.
#[derive(Default, Record)]
pub struct Reading<T: ScalarColumn> {
    #[sql(column = "id SERIAL PRIMARY KEY")]
    pub id: DeferredDefault<i64>,

    #[sql(column = "value NUMERIC NOT NULL")]
    pub value: T,
}

fn main() {
    assert_eq!(<Reading<f64>>::TABLE, "Reading");
    assert_eq!(<Reading<i32>>::FIELDS.len(), 2);
}
