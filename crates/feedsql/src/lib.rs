//! ## Crate layout
//! - `model`, `traits`, `value`, `wrapper`: record vocabulary used by the derive.
//! - `descriptor`, `schema`, `encode`, `query`, `decode`: pure derivation.
//! - `validate`, `db`: statement guard, driver boundary and session facade.
//! - `types`: the asset and price records of the ingestion pipeline.
//! - `config`: connection settings loaded from the environment.
//! - `postgres` (feature `postgres`): blocking driver over a Postgres client.
//!
//! Derive `Record` on a struct with named fields and annotate each field with
//! `#[sql(column = "...")]`; everything else is built from that table.

pub use feedsql_core::{
    db, decode, descriptor, encode, error, model, query, schema, traits, validate, value, wrapper,
};
pub use feedsql_derive::Record;

pub mod config;
#[cfg(feature = "postgres")]
pub mod postgres;
pub mod types;

// derive output names `::feedsql`, which must also resolve inside this crate
extern crate self as feedsql;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::Error;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Record,
        types::{Asset, Price},
    };
    pub use feedsql_core::prelude::*;
}
