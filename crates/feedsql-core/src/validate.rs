//! Leading-keyword guard applied to every statement before it reaches the
//! driver. Only the first word is inspected; nothing is parsed or escaped.

use crate::error::StatementError;
use derive_more::Display;

///
/// CONSTANTS
///

/// Keywords that open a statement sent through `execute`.
pub const MUTATING_KEYWORDS: [&str; 10] = [
    "INSERT", "UPDATE", "DELETE", "CREATE", "DROP", "ALTER", "TRUNCATE", "REPLACE", "GRANT",
    "REVOKE",
];

/// Keywords that open a statement sent through `query`.
pub const READ_KEYWORDS: [&str; 1] = ["SELECT"];

///
/// StatementKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum StatementKind {
    #[display("mutating")]
    Mutating,
    #[display("read")]
    Read,
}

/// Classify `statement` by its leading keyword.
pub fn classify(statement: &str) -> Result<StatementKind, StatementError> {
    let head = statement.trim_start();

    if MUTATING_KEYWORDS.iter().any(|kw| starts_with_keyword(head, kw)) {
        Ok(StatementKind::Mutating)
    } else if READ_KEYWORDS.iter().any(|kw| starts_with_keyword(head, kw)) {
        Ok(StatementKind::Read)
    } else {
        Err(StatementError::Unrecognized {
            statement: statement.to_string(),
        })
    }
}

/// Require `statement` to classify as `expected`.
pub fn expect_kind(statement: &str, expected: StatementKind) -> Result<(), StatementError> {
    let found = classify(statement)?;
    if found == expected {
        Ok(())
    } else {
        Err(StatementError::WrongKind { expected, found })
    }
}

// keyword must be followed by a non-identifier character or the end
fn starts_with_keyword(head: &str, keyword: &str) -> bool {
    head.strip_prefix(keyword).is_some_and(|rest| {
        rest.chars()
            .next()
            .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '_'))
    })
}
