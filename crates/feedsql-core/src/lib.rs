//! Core engine for feedsql: record descriptors, wrapper values, SQL literal
//! encoding, schema derivation, query assembly, row decoding and the
//! execution facade over a pluggable driver.
#![warn(unreachable_pub)]

extern crate self as feedsql;

// public exports are one module level down
pub mod db;
pub mod decode;
pub mod descriptor;
pub mod encode;
pub mod error;
pub mod model;
pub mod query;
pub mod schema;
pub mod traits;
pub mod validate;
pub mod value;
pub mod wrapper;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Record vocabulary and the facade. Builders and errors stay in their
/// modules.
///

pub mod prelude {
    pub use crate::{
        db::{Driver, Session},
        query::{Condition, Direction, Limit, Query},
        traits::{Column, Record, ScalarColumn},
        value::{Cell, Row, Scalar},
        wrapper::{DeferredDefault, Nullable, Timestamp},
    };
}
