use super::Driver;
use crate::value::Row;
use std::collections::VecDeque;
use thiserror::Error as ThisError;

///
/// ScriptError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ScriptError {
    #[error("scripted failure: {0}")]
    Failure(String),

    #[error("script expected a {expected} call, got {found}")]
    OutOfOrder {
        expected: &'static str,
        found: &'static str,
    },
}

#[derive(Clone, Debug)]
enum Response {
    Affected(u64),
    Rows(Vec<Row>),
    Fail(String),
}

impl Response {
    const fn call(&self) -> &'static str {
        match self {
            Self::Affected(_) => "execute",
            Self::Rows(_) => "query",
            Self::Fail(_) => "any",
        }
    }
}

///
/// ScriptedDriver
///
/// In-memory driver that records every statement and answers from a queue.
/// An empty queue answers `0` affected rows or an empty result set.
///

#[derive(Clone, Debug, Default)]
pub struct ScriptedDriver {
    statements: Vec<String>,
    responses: VecDeque<Response>,
}

impl ScriptedDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the affected-row count of the next `execute`.
    #[must_use]
    pub fn affected(mut self, count: u64) -> Self {
        self.responses.push_back(Response::Affected(count));
        self
    }

    /// Queue the rows of the next `query`.
    #[must_use]
    pub fn rows(mut self, rows: impl IntoIterator<Item = Row>) -> Self {
        self.responses
            .push_back(Response::Rows(rows.into_iter().collect()));
        self
    }

    /// Queue a failure for the next call of either kind.
    #[must_use]
    pub fn fail(mut self, message: impl Into<String>) -> Self {
        self.responses.push_back(Response::Fail(message.into()));
        self
    }

    /// Statements received so far, in order.
    #[must_use]
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    /// Responses not consumed yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.responses.len()
    }

    fn next(&mut self, sql: &str) -> Option<Response> {
        self.statements.push(sql.to_string());
        self.responses.pop_front()
    }
}

impl Driver for ScriptedDriver {
    type Error = ScriptError;

    fn execute(&mut self, sql: &str) -> Result<u64, Self::Error> {
        match self.next(sql) {
            None => Ok(0),
            Some(Response::Affected(count)) => Ok(count),
            Some(Response::Fail(message)) => Err(ScriptError::Failure(message)),
            Some(other) => Err(ScriptError::OutOfOrder {
                expected: other.call(),
                found: "execute",
            }),
        }
    }

    fn query(&mut self, sql: &str) -> Result<Vec<Row>, Self::Error> {
        match self.next(sql) {
            None => Ok(Vec::new()),
            Some(Response::Rows(rows)) => Ok(rows),
            Some(Response::Fail(message)) => Err(ScriptError::Failure(message)),
            Some(other) => Err(ScriptError::OutOfOrder {
                expected: other.call(),
                found: "query",
            }),
        }
    }
}
