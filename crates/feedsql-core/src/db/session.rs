use super::Driver;
use crate::{
    decode::{decode_rows, decode_rows_selected},
    error::{DecodeError, Error, StatementError},
    query::{self, Condition, Limit, Query},
    schema,
    traits::{Record, ScalarColumn},
    validate::StatementKind,
    value::{Row, Scalar},
};

///
/// Session
///
/// Execution facade over one driver. Every statement is classified before it
/// is sent: `execute` only accepts mutating statements and `query` only
/// accepts reads. The session holds no state besides the driver.
///

#[derive(Debug)]
pub struct Session<D> {
    driver: D,
}

impl<D: Driver> Session<D> {
    pub const fn new(driver: D) -> Self {
        Self { driver }
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub const fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn into_inner(self) -> D {
        self.driver
    }

    // ------------------------------------------------------------------
    // Raw execution
    // ------------------------------------------------------------------

    /// Send a mutating statement; returns the affected-row count.
    pub fn execute(&mut self, query: &Query) -> Result<u64, Error> {
        require_kind(query, StatementKind::Mutating)?;
        tracing::debug!(kind = %query.kind(), sql = query.sql(), "execute");

        self.driver.execute(query.sql()).map_err(Error::driver)
    }

    /// Send a read statement; returns every row.
    pub fn query(&mut self, query: &Query) -> Result<Vec<Row>, Error> {
        require_kind(query, StatementKind::Read)?;
        tracing::debug!(kind = %query.kind(), sql = query.sql(), "query");

        self.driver.query(query.sql()).map_err(Error::driver)
    }

    pub fn execute_sql(&mut self, sql: &str) -> Result<u64, Error> {
        self.execute(&Query::new(sql)?)
    }

    pub fn query_sql(&mut self, sql: &str) -> Result<Vec<Row>, Error> {
        self.query(&Query::new(sql)?)
    }

    /// Execute each statement in order. A failure does not stop the batch.
    pub fn execute_all<S: AsRef<str>>(&mut self, statements: &[S]) -> Vec<Result<u64, Error>> {
        statements
            .iter()
            .map(|sql| self.execute_sql(sql.as_ref()))
            .collect()
    }

    /// Run each read in order. A failure does not stop the batch.
    pub fn query_all<S: AsRef<str>>(&mut self, statements: &[S]) -> Vec<Result<Vec<Row>, Error>> {
        statements
            .iter()
            .map(|sql| self.query_sql(sql.as_ref()))
            .collect()
    }

    // ------------------------------------------------------------------
    // Tables
    // ------------------------------------------------------------------

    /// Whether the table for `R` is present in the `public` schema.
    pub fn table_exists<R: Record>(&mut self) -> Result<bool, Error> {
        let rows = self.query(&query::table_exists::<R>()?)?;
        let row = rows.first().ok_or(DecodeError::MissingRow)?;

        Ok(bool::from_cell(row.cell(0)?)?)
    }

    /// Create the table for `R`; fails with [`Error::TableExists`] when it
    /// is already present.
    pub fn create_table<R: Record>(&mut self) -> Result<(), Error> {
        if self.table_exists::<R>()? {
            return Err(Error::TableExists {
                table: R::TABLE.to_string(),
            });
        }

        self.run_create_script::<R>()
    }

    /// Create the table for `R` unless it exists. Returns true if created.
    ///
    /// Existence check and creation are separate statements, so another
    /// creator can win in between. A failed script is tolerated when the
    /// table is present afterwards.
    pub fn ensure_table<R: Record>(&mut self) -> Result<bool, Error> {
        if self.table_exists::<R>()? {
            return Ok(false);
        }

        match self.run_create_script::<R>() {
            Ok(()) => Ok(true),
            Err(err @ Error::Driver(_)) => match self.table_exists::<R>() {
                Ok(true) => {
                    tracing::warn!(table = R::TABLE, error = %err, "table created concurrently");
                    Ok(false)
                }
                _ => Err(err),
            },
            Err(err) => Err(err),
        }
    }

    fn run_create_script<R: Record>(&mut self) -> Result<(), Error> {
        let sql = schema::create_table_sql::<R>()?;
        self.execute_sql(&sql)?;
        tracing::info!(table = R::TABLE, "created table");

        Ok(())
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Insert one record, creating its table first if needed.
    pub fn insert<R: Record>(&mut self, record: &R) -> Result<u64, Error> {
        self.ensure_table::<R>()?;

        self.execute(&query::insert(record)?)
    }

    /// Insert each record in order, one result per record. Every record goes
    /// through [`Session::insert`], so a failure keeps its own class and does
    /// not stop the batch.
    pub fn insert_many<R: Record>(&mut self, records: &[R]) -> Vec<Result<u64, Error>> {
        records.iter().map(|record| self.insert(record)).collect()
    }

    /// Delete the rows whose primary key the read `subquery` returns.
    pub fn delete_by_subquery<R: Record>(&mut self, subquery: &Query) -> Result<u64, Error> {
        self.execute(&query::delete_by_subquery::<R>(subquery)?)
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn select_all<R: Record>(&mut self) -> Result<Vec<Row>, Error> {
        self.query(&query::select_all::<R>()?)
    }

    pub fn select_columns<R: Record>(&mut self, columns: &[usize]) -> Result<Vec<Row>, Error> {
        self.query(&query::select_columns::<R>(columns)?)
    }

    pub fn select_where<R: Record>(
        &mut self,
        columns: &[usize],
        conditions: &[Condition],
    ) -> Result<Vec<Row>, Error> {
        self.query(&query::select_where::<R>(columns, conditions)?)
    }

    pub fn select_by_asset_ordered<R: Record>(
        &mut self,
        columns: &[usize],
        asset_id: i64,
        order_by: usize,
        limit: impl Into<Limit>,
        desc: bool,
    ) -> Result<Vec<Row>, Error> {
        self.query(&query::select_by_asset_ordered::<R>(
            columns, asset_id, order_by, limit, desc,
        )?)
    }

    pub fn select_matching<R: Record>(
        &mut self,
        columns: &[usize],
        match_on: &[usize],
        values: &[Scalar],
        limit: impl Into<Limit>,
    ) -> Result<Vec<Row>, Error> {
        self.query(&query::select_matching::<R>(
            columns, match_on, values, limit,
        )?)
    }

    // ------------------------------------------------------------------
    // Typed reads
    // ------------------------------------------------------------------

    pub fn load_all<R: Record + Default>(&mut self) -> Result<Vec<R>, Error> {
        let rows = self.select_all::<R>()?;

        decode_rows(&rows)
    }

    /// Rows decoded into `R`; an empty `columns` slice loads every field.
    pub fn load_where<R: Record + Default>(
        &mut self,
        columns: &[usize],
        conditions: &[Condition],
    ) -> Result<Vec<R>, Error> {
        let rows = self.select_where::<R>(columns, conditions)?;

        decode_projection(&rows, columns)
    }

    pub fn load_by_asset_ordered<R: Record + Default>(
        &mut self,
        asset_id: i64,
        order_by: usize,
        limit: impl Into<Limit>,
        desc: bool,
    ) -> Result<Vec<R>, Error> {
        let rows = self.select_by_asset_ordered::<R>(&[], asset_id, order_by, limit, desc)?;

        decode_rows(&rows)
    }

    pub fn load_matching<R: Record + Default>(
        &mut self,
        match_on: &[usize],
        values: &[Scalar],
        limit: impl Into<Limit>,
    ) -> Result<Vec<R>, Error> {
        let rows = self.select_matching::<R>(&[], match_on, values, limit)?;

        decode_rows(&rows)
    }
}

fn require_kind(query: &Query, expected: StatementKind) -> Result<(), StatementError> {
    if query.kind() == expected {
        Ok(())
    } else {
        Err(StatementError::WrongKind {
            expected,
            found: query.kind(),
        })
    }
}

fn decode_projection<R: Record + Default>(rows: &[Row], columns: &[usize]) -> Result<Vec<R>, Error> {
    if columns.is_empty() {
        decode_rows(rows)
    } else {
        decode_rows_selected(rows, columns)
    }
}
