//! Blocking Postgres driver over the simple-query protocol.
//!
//! Statements already carry their literals, so nothing is prepared or bound.
//! Every returned cell is text or NULL; typed decoding happens in the
//! scalar `from_cell` implementations.

use crate::{
    config::DatabaseConfig,
    db::{Driver, Session},
    value::{Cell, Row},
};
use ::postgres::{Client, NoTls, SimpleQueryMessage};

///
/// PostgresDriver
///

pub struct PostgresDriver {
    client: Client,
}

impl PostgresDriver {
    /// Connect without TLS. `sslmode=require` needs a TLS connector and
    /// will be refused by the client.
    pub fn connect(url: &str) -> Result<Self, ::postgres::Error> {
        let client = Client::connect(url, NoTls)?;
        tracing::info!("connected to postgres");

        Ok(Self { client })
    }

    pub fn from_config(config: &DatabaseConfig) -> Result<Self, ::postgres::Error> {
        Self::connect(&config.connection_url())
    }

    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }

    pub const fn client_mut(&mut self) -> &mut Client {
        &mut self.client
    }

    #[must_use]
    pub fn into_client(self) -> Client {
        self.client
    }
}

impl Driver for PostgresDriver {
    type Error = ::postgres::Error;

    // a script may hold several statements; their counts add up
    fn execute(&mut self, sql: &str) -> Result<u64, Self::Error> {
        let messages = self.client.simple_query(sql)?;

        Ok(messages
            .iter()
            .map(|message| match message {
                SimpleQueryMessage::CommandComplete(count) => *count,
                _ => 0,
            })
            .sum())
    }

    fn query(&mut self, sql: &str) -> Result<Vec<Row>, Self::Error> {
        let messages = self.client.simple_query(sql)?;

        Ok(messages
            .iter()
            .filter_map(|message| match message {
                SimpleQueryMessage::Row(row) => Some(
                    (0..row.len())
                        .map(|i| row.get(i).map_or(Cell::Null, Cell::from))
                        .collect::<Row>(),
                ),
                _ => None,
            })
            .collect())
    }
}

/// Open a session from `DB_*` style settings.
pub fn connect(config: &DatabaseConfig) -> Result<Session<PostgresDriver>, ::postgres::Error> {
    PostgresDriver::from_config(config).map(Session::new)
}
