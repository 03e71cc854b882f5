use crate::structures::literal::{CLiteral, Literal};

/// The index to a formula.
pub type FormulaIndex = u32;

/// A key to access a clause stored in the clause database.
///
/// Within the clause database clauses are stored in an indexed arena, and keys to non-unit clauses contain the index to the clause.
/// Every structure other than the database itself --- occurrence lists, candidate lists --- holds keys, never clauses.
///
/// The only exception to this is unit clauses, whose key contains the (unit) clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClauseKey {
    /// The key to a unit clause contains the (unit) clause.
    Unit(CLiteral),

    /// The key to an original clause.
    Original(FormulaIndex),
}

impl ClauseKey {
    /// Extracts the index from a key.
    pub fn index(&self) -> usize {
        match self {
            Self::Unit(literal) => literal.atom() as usize,
            Self::Original(index) => *index as usize,
        }
    }
}
