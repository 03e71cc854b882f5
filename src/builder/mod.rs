/*!
Tools for building a context.

The library has two basic methods for putting a formula in a context:
- [add_clause](crate::context::Context::add_clause), to add a clause directly.
- [read_dimacs](crate::context::Context::read_dimacs), to read a DIMACS representation of a formula.

Admission normalises a clause:
- Duplicate literals are dropped.
- A clause containing both polarities of some atom is a tautology, noted and not stored.
- Unit clauses are diverted to a side list, as no technique examines them.

The techniques assume every stored clause was admitted this way, and admitted clauses are frozen for the run.
*/

mod dimacs;
pub use dimacs::ParserInfo;

use crate::{
    context::Context,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::Literal,
    },
    types::err::{self},
};

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context.
    Added,

    /// The clause was a tautology (and so was not added to the context).
    Tautology,
}

impl Context {
    /// Adds a clause to the context, after dropping duplicate literals and checking for a tautology.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, err::ErrorKind> {
        let mut the_clause: CClause = Vec::default();

        for literal in clause.canonical() {
            if the_clause.iter().any(|l| *l == literal) {
                continue;
            }
            if the_clause.iter().any(|l| *l == literal.negate()) {
                return Ok(ClauseOk::Tautology);
            }
            the_clause.push(literal);
        }

        self.clause_db.store(the_clause)?;
        Ok(ClauseOk::Added)
    }

    /// Fixes the atom ceiling of the context to (at least) `ceiling`.
    ///
    /// Clauses may mention atoms above the ceiling, which then rises to match.
    pub fn ensure_atoms(&mut self, ceiling: Atom) {
        self.clause_db.ensure_atom_ceiling(ceiling);
    }
}
