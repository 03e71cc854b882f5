//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use.
//! - Some are external --- e.g. a parse error is returned whenever a DIMACS source does not describe a formula the simplifier could act on, and no technique should be run after one is seen.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// A top-level wrapper of the specific error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    ClauseDB(ClauseDBError),
    Parse(ParseError),
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// An empty clause reached the store.
    /// Empty clauses indicate a bug in whatever built the clause, and are never stored.
    EmptyClause,

    /// Attempt to get a unit clause by a key (the key is the literal).
    GetUnitKey,

    /// An invalid key index, or a key to a removed clause.
    Missing,

    /// No further clauses can be keyed.
    StorageExhausted,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors during a parse.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue reading a line.
    Line(usize),

    /// A `p cnf <atoms> <clauses>` preamble was required, and not found.
    MissingPreamble,

    /// The preamble could not be understood.
    ProblemSpecification,

    /// A literal whose atom is 0 or exceeds the atom count of the preamble.
    AtomOutOfRange(isize),

    /// The count of clauses parsed disagrees with the count the preamble declared.
    ///
    /// Both directions are an error, as either way the formula seen would differ from the formula described.
    ClauseCount { expected: usize, found: usize },
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
