use super::Query;
use crate::{error::Error, traits::Record};

/// Existence check against the `public` schema.
///
/// Unquoted identifiers are folded to lower case by Postgres, so the catalog
/// lookup uses the lower-cased type name.
pub fn table_exists<R: Record>() -> Result<Query, Error> {
    let table = R::TABLE.to_lowercase();
    let sql = format!(
        "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_schema = 'public' AND table_name = '{table}')"
    );

    Ok(Query::new(sql)?)
}
