/*!
Blocked clause elimination.

A clause *c* containing a literal *l* is blocked on *l* iff every resolvent of *c* on *l* is tautological --- equivalently, iff every clause containing the negation of *l* has some further literal whose negation occurs in *c*.
A blocked clause may be removed without affecting satisfiability; here a verdict only feeds a count.

The pass scans each eligible atom in ascending order and checks both polarities: the occurrence list of a literal against the occurrence list of its negation.
A literal is skipped when it is pure (the check is vacuous) or when the negated occurrence list is over the configured cap (cost control).

With signatures, a check first looks for a clause *d* in the negated list whose signature shares no bucket with *c* outside the pivot: such a *d* can share no atom with *c* other than the pivot, so the resolvent of *c* and *d* is certainly not tautological, and *c* is certainly not blocked.
The certificate only ever disproves blockedness --- confirmation always happens at the literal level.
*/

use crate::{
    context::Context,
    db::{
        clause::db_clause::atom_bucket,
        occurrence::{OccurrenceEntry, OccurrenceIndex},
    },
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
};

impl Context {
    /// Counts the blocked clauses of the formula.
    pub fn block_pass<E: OccurrenceEntry>(&mut self) {
        let index =
            OccurrenceIndex::<E>::from_clauses(&self.clause_db, self.config.block.max_clause_size);
        self.marks.ensure(self.clause_db.atom_ceiling());

        for atom in 1..=self.clause_db.atom_ceiling() {
            if !index.eligible(atom) {
                continue;
            }
            self.block_literal(&index, CLiteral::new(atom, false));
            self.block_literal(&index, CLiteral::new(atom, true));
        }

        debug_assert!(self.marks.clear_of_marks());
        log::info!(target: targets::BLOCK,
            "Blocked clauses: {}", self.counters.blocked_clauses);
    }

    /// Checks each occurrence of `literal` for blockedness on `literal`.
    fn block_literal<E: OccurrenceEntry>(
        &mut self,
        index: &OccurrenceIndex<E>,
        literal: CLiteral,
    ) {
        if index.entries(literal.negate()).len() > self.config.block.max_occurrences {
            return;
        }
        if index.entries(literal).is_empty() {
            return; // pure literal
        }

        let mut blocked = 0;
        for entry in index.entries(literal) {
            if self.block_check(index, *entry, literal) {
                blocked += 1;
            }
        }
        self.counters.blocked_clauses += blocked;
    }

    /// Whether the clause of `entry` is blocked on `literal`.
    fn block_check<E: OccurrenceEntry>(
        &mut self,
        index: &OccurrenceIndex<E>,
        entry: E,
        literal: CLiteral,
    ) -> bool {
        let pivot = literal.negate();

        // Eager signature check: a clause in the negated occurrence list sharing no
        // bucket with the checked clause outside the pivot certifies 'not blocked'.
        if E::SIGNED {
            let bucket = atom_bucket(literal.atom());
            let hash = entry.hash() & !bucket;
            let unique = entry.unique() & bucket;
            for witness in index.entries(pivot) {
                if hash & witness.hash() != 0 {
                    continue;
                }
                if unique & witness.unique() != 0 {
                    continue;
                }
                self.counters.block_signature_hits += 1;
                return false;
            }
        }

        // Safe, as the index holds only stored clauses.
        let the_clause = unsafe { self.clause_db.get_unchecked(entry.key()) };
        let guard = self.marks.guard(the_clause.literals());

        for witness in index.entries(pivot) {
            // Safe, as above.
            let witness_clause = unsafe { self.clause_db.get_unchecked(witness.key()) };

            let mut tautology = false;
            for witness_literal in witness_clause.literals() {
                if *witness_literal == pivot {
                    continue; // skip the blocker
                }
                if guard.sign(*witness_literal) < 0 {
                    tautology = true;
                    break;
                }
            }

            if !tautology {
                // A non-tautological resolvent, so not blocked.
                // The guard unmarks on drop.
                return false;
            }
        }

        true
    }
}
