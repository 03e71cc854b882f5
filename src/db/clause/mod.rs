/*!
A database of clause related things.

All stored clauses are owned by the database, in a single arena, and are accessed through [keys](crate::db::ClauseKey).
Unit clauses are kept in a side list, as no technique examines them.

Fields of the database are private to ensure the use of methods which may be needed to uphold invariants.
Notably, the signature of a clause is computed once, on store, and never changes.
*/

pub mod db_clause;

use db_clause::dbClause;

use crate::{
    db::{ClauseKey, FormulaIndex},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// A database of clause related things.
pub struct ClauseDB {
    /// Original clauses, indexed by their keys.
    ///
    /// A slot is `None` after the clause stored there has been removed.
    /// Keys are never reused.
    original: Vec<Option<dbClause>>,

    /// A count of stored (and not removed) original clauses.
    count: usize,

    /// Original unit clauses, in store order.
    unit: Vec<CLiteral>,

    /// The highest atom seen in any stored clause, or fixed by a preamble.
    atom_ceiling: Atom,
}

impl Default for ClauseDB {
    fn default() -> Self {
        ClauseDB {
            original: Vec::default(),
            count: 0,
            unit: Vec::default(),
            atom_ceiling: 0,
        }
    }
}

impl ClauseDB {
    /// Stores a clause, returning the key to the clause.
    ///
    /// The clause must be duplicate-free and non-tautological --- [add_clause](crate::context::Context::add_clause) ensures as much.
    /// An empty clause is an error, as it indicates a bug in whatever built the clause.
    pub fn store(&mut self, clause: CClause) -> Result<ClauseKey, err::ClauseDBError> {
        match clause.len() {
            0 => {
                log::error!(target: targets::CLAUSE_DB, "An empty clause reached the store");
                Err(err::ClauseDBError::EmptyClause)
            }

            1 => {
                // Safe, by the match.
                let literal = unsafe { *clause.first().unwrap_unchecked() };
                self.note_atoms(&clause);
                self.unit.push(literal);
                Ok(ClauseKey::Unit(literal))
            }

            _ => {
                if self.original.len() > FormulaIndex::MAX as usize {
                    return Err(err::ClauseDBError::StorageExhausted);
                }
                let key = ClauseKey::Original(self.original.len() as FormulaIndex);
                self.note_atoms(&clause);
                self.original.push(Some(dbClause::new(clause, key)));
                self.count += 1;
                Ok(key)
            }
        }
    }

    /// Removes the clause stored at `key`, releasing its storage.
    ///
    /// After removal the key is logically absent: occurrence lists built before the removal must not be used to reach the clause.
    /// No technique in this crate removes clauses --- each only records counts --- though removal is the natural extension point.
    pub fn remove(&mut self, key: ClauseKey) -> Result<dbClause, err::ClauseDBError> {
        match key {
            ClauseKey::Unit(_) => Err(err::ClauseDBError::GetUnitKey),

            ClauseKey::Original(index) => match self.original.get_mut(index as usize) {
                Some(slot) => match slot.take() {
                    Some(clause) => {
                        self.count -= 1;
                        Ok(clause)
                    }
                    None => Err(err::ClauseDBError::Missing),
                },
                None => Err(err::ClauseDBError::Missing),
            },
        }
    }

    /// The stored clause at `key`.
    pub fn get(&self, key: ClauseKey) -> Result<&dbClause, err::ClauseDBError> {
        match key {
            ClauseKey::Unit(_) => {
                log::error!(target: targets::CLAUSE_DB, "Unit clauses are not stored");
                Err(err::ClauseDBError::GetUnitKey)
            }

            ClauseKey::Original(index) => match self.original.get(index as usize) {
                Some(Some(clause)) => Ok(clause),
                _ => Err(err::ClauseDBError::Missing),
            },
        }
    }

    /// The stored clause at `key`, without checks.
    ///
    /// # Safety
    /// The key must be to a stored, unremoved, non-unit clause.
    pub unsafe fn get_unchecked(&self, key: ClauseKey) -> &dbClause {
        self.original
            .get_unchecked(key.index())
            .as_ref()
            .unwrap_unchecked()
    }

    /// An iterator over all stored (non-unit) clauses, in key order.
    pub fn all_original_clauses(&self) -> impl Iterator<Item = &dbClause> {
        self.original.iter().filter_map(|slot| slot.as_ref())
    }

    /// A count of stored (non-unit) clauses.
    pub fn clause_count(&self) -> usize {
        self.count
    }

    /// The unit clauses given to the database, in store order.
    pub fn unit_clauses(&self) -> &[CLiteral] {
        &self.unit
    }

    /// The highest atom of the formula.
    pub fn atom_ceiling(&self) -> Atom {
        self.atom_ceiling
    }

    /// Raises the atom ceiling to `ceiling`, if it is not already as high.
    pub fn ensure_atom_ceiling(&mut self, ceiling: Atom) {
        if ceiling > self.atom_ceiling {
            self.atom_ceiling = ceiling;
        }
    }

    fn note_atoms(&mut self, clause: &[CLiteral]) {
        for literal in clause {
            debug_assert!(literal.atom() != 0, "Atom 0 is reserved");
            self.ensure_atom_ceiling(literal.atom());
        }
    }
}
