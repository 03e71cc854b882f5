//! A library for simplifying boolean formulas written in conjunctive normal form.
//!
//! stoat_prep reduces a formula before any search procedure runs, using three classical preprocessing techniques:
//! - Blocked clause elimination (Järvisalo, Biere, and Heule, "Blocked Clause Elimination", 2010).
//! - Bounded variable elimination (Eén and Biere, "Effective Preprocessing in SAT Through Variable and Clause Elimination", 2005).
//! - Forward subsumption and strengthening, via a one-watcher scheme with cardinality sorting.
//!
//! Each technique has a signature-accelerated variant: every stored clause carries a 64-bit structural signature (a bucket-per-atom hash together with collision bits) supporting sound, one-directional pre-checks which settle many verdicts without touching literals.
//!
//! The library only rewrites counts, not clauses: a pass reports how many clauses are blocked, how many atoms are eliminable, and how many clauses are subsumed or could be strengthened.
//! No decision-making, propagation under a partial assignment, conflict analysis, or clause learning takes place --- whether the formula is satisfiable is no concern of this crate.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a configuration.
//! Clauses may be added through the [DIMACS](crate::context::Context::read_dimacs) representation of a formula or [programmatically](crate::context::Context::add_clause), and a call to [simplify](crate::context::Context::simplify) applies the configured technique.
//!
//! Useful starting points:
//! - The [procedures] for the three techniques and the ways each uses the signature.
//! - The [database module](crate::db) for the clause arena, occurrence lists, and mark machinery the techniques share.
//! - The [configuration](crate::config) for the technique selection, the signature switch, and the size/occurrence caps.
//!
//! # Example
//!
//! ```rust
//! # use stoat_prep::config::{Config, Technique};
//! # use stoat_prep::context::Context;
//! # use std::io::Write;
//! let mut config = Config::default();
//! config.technique = Technique::Block;
//! config.signatures = true;
//!
//! let mut the_context = Context::from_config(config);
//!
//! let mut dimacs = vec![];
//! let _ = dimacs.write(b"
//! p cnf 2 2
//!  1  2 0
//! -1 -2 0
//! ");
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! the_context.simplify();
//! assert_eq!(the_context.counters.blocked_clauses, 4);
//! ```
//!
//! If you're in search of cnf formulas consider:
//! - The SATLIB benchmark problems at [www.cs.ubc.ca/~hoos/SATLIB/benchm.html](https://www.cs.ubc.ca/~hoos/SATLIB/benchm.html)
//! - The Global Benchmark Database at [benchmark-database.de](https://benchmark-database.de)

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod procedures;
pub mod structures;
pub mod types;
