/*!
The context --- to which formulas are added and within which simplification takes place.

A context owns the [clause database](crate::db::clause), the shared [mark array](crate::db::marks), the [configuration](crate::config), and the [counters](Counters) a pass reports through.

# Example
```rust
# use stoat_prep::config::{Config, Technique};
# use stoat_prep::context::Context;
# use stoat_prep::structures::literal::{CLiteral, Literal};
let mut config = Config::default();
config.technique = Technique::Subsume;

let mut the_context = Context::from_config(config);

let p = CLiteral::new(1, true);
let q = CLiteral::new(2, true);
let r = CLiteral::new(3, true);

assert!(the_context.add_clause(vec![p, q, r]).is_ok());
assert!(the_context.add_clause(vec![p, q]).is_ok());

the_context.simplify();
assert_eq!(the_context.counters.subsumed_clauses, 1);
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::{Config, Technique},
    db::{
        clause::ClauseDB,
        marks::Marks,
        occurrence::{BareOccurrence, SignedOccurrence},
    },
};

/// A context: a formula, a configuration, and the transient state of a pass.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the most recent pass.
    pub counters: Counters,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The shared per-literal mark array.
    /// Clear outside of any individual check.
    pub marks: Marks,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
            clause_db: ClauseDB::default(),
            marks: Marks::default(),
        }
    }

    /// Applies the configured technique to the formula, resetting and then populating the counters.
    ///
    /// Exactly one technique runs per call, to completion, over clauses in a fixed order.
    /// The clause database is not rewritten --- each technique records counts only.
    pub fn simplify(&mut self) -> &Counters {
        self.counters.reset();
        let start = std::time::Instant::now();

        match (self.config.technique, self.config.signatures) {
            (Technique::Subsume, false) => self.subsume_pass::<BareOccurrence>(),
            (Technique::Subsume, true) => self.subsume_pass::<SignedOccurrence>(),

            (Technique::Block, false) => self.block_pass::<BareOccurrence>(),
            (Technique::Block, true) => self.block_pass::<SignedOccurrence>(),

            (Technique::Elim, false) => self.elim_pass::<BareOccurrence>(),
            (Technique::Elim, true) => self.elim_pass::<SignedOccurrence>(),
        }

        self.counters.time = start.elapsed();
        &self.counters
    }
}
