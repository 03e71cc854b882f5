//! The representation of a stored clause: its literals together with a structural signature.
//!
//! The signature is a pair of 64-bit words, fixed when the clause is stored:
//!
//! - `hash` has bit *i* set iff some atom of the clause falls in bucket *i*, where the bucket of an atom is the atom mod 64.
//! - `unique` has bit *i* set iff two or more distinct atoms of the clause collide on bucket *i*.
//!
//! The signature is an over-approximation of the atom set, never an identity: distinct clauses may share a signature.
//! Still, it supports sound one-directional pre-checks --- see the [procedures](crate::procedures) for the ways each technique uses it.

use crate::{
    db::ClauseKey,
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
    },
};

/// The single-bit mask for the signature bucket of `atom`.
pub fn atom_bucket(atom: Atom) -> u64 {
    1_u64 << (atom & 63)
}

/// A stored clause, together with its key and signature.
#[allow(non_camel_case_types)]
#[derive(Debug)]
pub struct dbClause {
    /// The key of the clause.
    key: ClauseKey,

    /// The clause itself.
    clause: CClause,

    /// The atom signature of the clause.
    hash: u64,

    /// The collision bits of `hash`.
    unique: u64,
}

impl dbClause {
    /// A stored clause, with the signature computed from the given literals.
    pub fn new(clause: CClause, key: ClauseKey) -> Self {
        let (hash, unique) = signature(&clause);
        dbClause {
            key,
            clause,
            hash,
            unique,
        }
    }

    /// The key of the stored clause.
    pub fn key(&self) -> ClauseKey {
        self.key
    }

    /// The literals of the stored clause, in stored order.
    pub fn literals(&self) -> &[CLiteral] {
        &self.clause
    }

    /// The number of literals in the stored clause.
    pub fn size(&self) -> usize {
        self.clause.len()
    }

    /// An iterator over the atoms of the stored clause.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.clause.iter().map(|literal| literal.atom())
    }

    /// The atom signature of the stored clause.
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// The collision bits of the signature of the stored clause.
    pub fn unique(&self) -> u64 {
        self.unique
    }
}

/// The signature of a sequence of literals, as a (hash, unique) pair.
fn signature(clause: &[CLiteral]) -> (u64, u64) {
    let mut hash = 0_u64;
    let mut unique = 0_u64;
    for literal in clause {
        let bit = atom_bucket(literal.atom());
        if hash & bit != 0 {
            unique |= bit;
        } else {
            hash |= bit;
        }
    }
    (hash, unique)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause_of(literals: &[isize]) -> CClause {
        literals
            .iter()
            .map(|l| CLiteral::new(l.unsigned_abs() as Atom, l.is_positive()))
            .collect()
    }

    #[test]
    fn signature_bits() {
        let stored = dbClause::new(clause_of(&[1, -2, 66]), ClauseKey::Original(0));
        assert_eq!(stored.hash(), (1 << 1) | (1 << 2));
        // 66 and 2 share bucket 2.
        assert_eq!(stored.unique(), 1 << 2);
    }

    #[test]
    fn signature_ignores_polarity() {
        let positive = dbClause::new(clause_of(&[3, 5]), ClauseKey::Original(0));
        let negative = dbClause::new(clause_of(&[-3, -5]), ClauseKey::Original(1));
        assert_eq!(positive.hash(), negative.hash());
        assert_eq!(positive.unique(), negative.unique());
    }
}
