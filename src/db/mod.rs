//! Databases for holding the formula and the transient per-technique structures.
//!
//! - The [clause database](crate::db::clause) owns every stored clause, and hands out [keys](ClauseKey) to them.
//! - [Occurrence lists](crate::db::occurrence) map literals to the (keys of) clauses containing them, and are rebuilt by each technique.
//! - [Marks](crate::db::marks) are the transient ternary per-literal marks shared by every technique.

mod keys;
pub use keys::{ClauseKey, FormulaIndex};

pub mod clause;
pub mod marks;
pub mod occurrence;
