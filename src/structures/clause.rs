//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use stoat_prep::structures::clause::Clause;
//! # use stoat_prep::structures::literal::{CLiteral, Literal};
//! let clause = vec![CLiteral::new(23, true), CLiteral::new(41, false)];
//!
//! assert_eq!(clause.size(), 2);
//! assert_eq!(clause.as_dimacs(true), "23 -41 0");
//! ```
//!
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause).
//! - Stored clauses are never empty and contain at most one literal per atom, with admission handled by the [builder](crate::builder).

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over the literals in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over the atoms in the clause, in literal order.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;
}

/// The canonical implementation of a clause, as a vector of literals.
pub type CClause = Vec<CLiteral>;

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self {
            the_string.push_str(&format!("{literal} "));
        }
        if zero {
            the_string += "0";
        } else {
            the_string.pop();
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(self) -> CClause {
        self
    }
}

impl Clause for CLiteral {
    fn as_dimacs(&self, zero: bool) -> String {
        match zero {
            true => format!("{self} 0"),
            false => format!("{self}"),
        }
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        std::iter::once(self)
    }

    fn size(&self) -> usize {
        1
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        std::iter::once(self.atom())
    }

    fn canonical(self) -> CClause {
        vec![self]
    }
}
