/*!
Bounded variable elimination.

An atom may be eliminated by replacing every clause mentioning it with the pairwise non-tautological resolvents of its positive and negative occurrences.
The replacement only pays when the count of such resolvents is within |pos| + |neg| plus some configured slack, and the pass counts the atoms for which it would --- no resolution is performed here.

The scan is atoms ascending, skipping pure atoms and atoms with an over-cap occurrence list in either polarity.
Counting short-circuits: the moment the running count exceeds the bound the atom is settled as not eliminable.

With signatures the count runs in two passes over pos × neg:
1. Pairs whose signatures share no bucket outside the pivot are certainly non-tautological, and counted without touching literals.
2. The remaining (ambiguous) pairs fall back to the literal-level check, marking a positive-occurrence clause only when at least one ambiguous pair involves it.

Both passes together reach the accept/reject decision of the plain scan, as a signature only ever certifies what the literal check would find.
*/

use crate::{
    context::Context,
    db::{
        clause::db_clause::{atom_bucket, dbClause},
        marks::MarkGuard,
        occurrence::{OccurrenceEntry, OccurrenceIndex},
    },
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// Whether the resolvent of the marked clause and `clause` on `pivot` is non-tautological.
///
/// The marked clause contains the negation of `pivot`, and `clause` contains `pivot`, which is skipped.
/// A literal of `clause` marked negative signals the complementary pair which makes the resolvent tautological.
fn non_tautological(guard: &MarkGuard, clause: &dbClause, pivot: CLiteral) -> bool {
    for literal in clause.literals() {
        if *literal == pivot {
            continue;
        }
        if guard.sign(*literal) < 0 {
            return false;
        }
    }
    true
}

impl Context {
    /// Counts the atoms of the formula whose elimination would stay within bound.
    pub fn elim_pass<E: OccurrenceEntry>(&mut self) {
        let index =
            OccurrenceIndex::<E>::from_clauses(&self.clause_db, self.config.elim.max_clause_size);
        self.marks.ensure(self.clause_db.atom_ceiling());

        for atom in 1..=self.clause_db.atom_ceiling() {
            self.elim_atom(&index, atom);
        }

        debug_assert!(self.marks.clear_of_marks());
        log::info!(target: targets::ELIM,
            "Eliminable atoms: {} ({} resolvent checks)",
            self.counters.eliminated_atoms, self.counters.elim_resolvents);
    }

    /// Checks whether `atom` is eliminable.
    fn elim_atom<E: OccurrenceEntry>(&mut self, index: &OccurrenceIndex<E>, atom: Atom) {
        let pos = index.entries(CLiteral::new(atom, true));
        let neg = index.entries(CLiteral::new(atom, false));

        if pos.is_empty() || neg.is_empty() {
            return; // pure atom
        }
        if pos.len() > self.config.elim.max_occurrences
            || neg.len() > self.config.elim.max_occurrences
        {
            return;
        }

        if self.resolvents_bounded(index, atom) {
            self.counters.eliminated_atoms += 1;
        }
    }

    /// Whether the count of non-tautological resolvents on `atom` is within
    /// |pos| + |neg| plus the configured slack.
    fn resolvents_bounded<E: OccurrenceEntry>(
        &mut self,
        index: &OccurrenceIndex<E>,
        atom: Atom,
    ) -> bool {
        let pos = index.entries(CLiteral::new(atom, true));
        let neg = index.entries(CLiteral::new(atom, false));
        let bound = pos.len() + neg.len() + self.config.elim.bound;
        let pivot = CLiteral::new(atom, false);
        let bucket = atom_bucket(atom);

        let mut count = 0;

        if E::SIGNED {
            // First pass: pairs certified non-tautological by signature alone.
            for chu in pos {
                let hash = chu.hash() & !bucket;
                let unique = chu.unique() & bucket;
                for dhu in neg {
                    if hash & dhu.hash() != 0 {
                        continue;
                    }
                    if unique & dhu.unique() != 0 {
                        continue;
                    }
                    self.counters.elim_signature_hits += 1;
                    count += 1;
                    if count > bound {
                        return false;
                    }
                }
            }

            // Second pass: the ambiguous pairs, at the literal level.
            for chu in pos {
                let hash = chu.hash() & !bucket;
                let unique = chu.unique() & bucket;

                // Marked only if some ambiguous pair involves this clause.
                if !neg
                    .iter()
                    .any(|dhu| hash & dhu.hash() != 0 || unique & dhu.unique() != 0)
                {
                    continue;
                }

                // Safe, as the index holds only stored clauses.
                let the_clause = unsafe { self.clause_db.get_unchecked(chu.key()) };
                let guard = self.marks.guard(the_clause.literals());

                for dhu in neg {
                    if hash & dhu.hash() == 0 && unique & dhu.unique() == 0 {
                        continue; // counted during the first pass
                    }

                    // Safe, as above.
                    let witness_clause = unsafe { self.clause_db.get_unchecked(dhu.key()) };

                    self.counters.elim_resolvents += 1;
                    if non_tautological(&guard, witness_clause, pivot) {
                        count += 1;
                        if count > bound {
                            return false;
                        }
                    }
                }
            }

            return true;
        }

        for chu in pos {
            // Safe, as the index holds only stored clauses.
            let the_clause = unsafe { self.clause_db.get_unchecked(chu.key()) };
            let guard = self.marks.guard(the_clause.literals());

            for dhu in neg {
                // Safe, as above.
                let witness_clause = unsafe { self.clause_db.get_unchecked(dhu.key()) };

                self.counters.elim_resolvents += 1;
                if non_tautological(&guard, witness_clause, pivot) {
                    count += 1;
                    if count > bound {
                        return false;
                    }
                }
            }
        }

        true
    }
}
