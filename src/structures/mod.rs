//! Structures, in the abstract sense --- atoms, literals, and clauses.
//!
//! The canonical representations are lightweight: an atom is an integer, a literal pairs an atom with a polarity, and a clause is a vector of literals.
//! Stored clauses gain additional structure (notably a signature) and live in the [clause database](crate::db::clause).

pub mod atom;
pub mod clause;
pub mod literal;
