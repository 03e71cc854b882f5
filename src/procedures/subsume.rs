/*!
Forward subsumption and strengthening.

The algorithm pairs the one-watcher occurrence scheme of Zhang ("On subsumption removal and on-the-fly CNF simplification", 2005) with cardinality sorting after Bayardo ("Fast algorithms for finding extremal sets", 2011): a clause can only be subsumed or strengthened by a clause no larger than itself, so candidates are processed smallest first, and each is checked only against clauses already processed.

Processing a candidate *c*:
1. If *c* has more than two literals, check it against the current occurrence lists --- first the literals of *c* (subsumption or strengthening), then their negations (strengthening).
2. Either way, insert *c* under the single literal of *c* whose occurrence list is currently smallest, minimising future scan cost.

A clause *d* found in a probed list relates to the marked *c* by walking the literals of *d* against the marks:
- Any unmarked literal, no relation.
- No negatively marked literal and none unmarked, *d* subsumes *c*.
- Exactly one negatively marked literal, *d* strengthens *c* by removing it.
- Two negatively marked literals, no relation.

The first *d* with a relation settles the candidate.
With signatures, any *d* whose signature sets a bucket the signature of *c* does not is skipped without a literal walk: *d* then contains an atom *c* does not, so no relation is possible.
*/

use crate::{
    context::Context,
    db::{
        clause::db_clause::dbClause,
        marks::MarkGuard,
        occurrence::{OccurrenceEntry, OccurrenceIndex},
        ClauseKey,
    },
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
};

/// How a processed clause relates to the marked candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Relation {
    /// No subsumption and no strengthening.
    Unrelated,

    /// The clause subsumes the candidate.
    Subsumes,

    /// The clause strengthens the candidate by removal of the contained literal.
    Strengthens(CLiteral),
}

/// The relation of `clause` to the clause marked by `guard`.
pub(crate) fn relation(guard: &MarkGuard, clause: &dbClause) -> Relation {
    let mut strengthen: Option<CLiteral> = None;

    for literal in clause.literals() {
        match guard.sign(*literal) {
            0 => return Relation::Unrelated,
            sign if sign > 0 => continue,
            _ => match strengthen {
                Some(_) => return Relation::Unrelated, // two negated literals
                None => strengthen = Some(*literal),
            },
        }
    }

    match strengthen {
        None => Relation::Subsumes,
        Some(literal) => Relation::Strengthens(literal),
    }
}

impl Context {
    /// Counts the clauses of the formula some smaller-or-equal clause subsumes or strengthens.
    pub fn subsume_pass<E: OccurrenceEntry>(&mut self) {
        // Schedule candidates, ascending by size.
        // The sort is stable, so ties keep store order.
        let mut candidates: Vec<(ClauseKey, usize)> = self
            .clause_db
            .all_original_clauses()
            .filter(|clause| clause.size() <= self.config.subsume.max_clause_size)
            .map(|clause| (clause.key(), clause.size()))
            .collect();
        candidates.sort_by_key(|(_, size)| *size);

        let mut index = OccurrenceIndex::<E>::empty(self.clause_db.atom_ceiling());
        self.marks.ensure(self.clause_db.atom_ceiling());

        for (key, size) in candidates {
            if size > 2 {
                self.subsume_check(&index, key);
            }

            // Watch the candidate on its literal with the smallest occurrence list.
            // Safe, as candidate keys are to stored clauses.
            let the_clause = unsafe { self.clause_db.get_unchecked(key) };
            let watch = watch_literal(&index, the_clause.literals());
            index.push(watch, E::of(the_clause));
        }

        debug_assert!(self.marks.clear_of_marks());
        log::info!(target: targets::SUBSUME,
            "Subsumed: {}, strengthened: {}",
            self.counters.subsumed_clauses, self.counters.strengthened_clauses);
    }

    /// Checks whether some already-processed clause subsumes or strengthens the clause at `key`.
    fn subsume_check<E: OccurrenceEntry>(&mut self, index: &OccurrenceIndex<E>, key: ClauseKey) {
        // Safe, as candidate keys are to stored clauses.
        let the_clause = unsafe { self.clause_db.get_unchecked(key) };
        let hash_mask = !the_clause.hash();
        let unique_mask = !the_clause.unique();

        let guard = self.marks.guard(the_clause.literals());
        let mut verdict = Relation::Unrelated;
        let mut signature_hits = 0;

        // The positive probes cover subsumption and strengthening, the negated
        // probes strengthening alone.
        'search: for negated in [false, true] {
            for literal in the_clause.literals() {
                let probe = match negated {
                    false => *literal,
                    true => literal.negate(),
                };

                for dhu in index.entries(probe) {
                    if E::SIGNED {
                        // A bucket outside the candidate rules the clause out.
                        if dhu.hash() & hash_mask != 0 {
                            signature_hits += 1;
                            continue;
                        }
                        if dhu.unique() & unique_mask != 0 {
                            signature_hits += 1;
                            continue;
                        }
                    }

                    // Safe, as the index holds only stored clauses.
                    let processed = unsafe { self.clause_db.get_unchecked(dhu.key()) };
                    match relation(&guard, processed) {
                        Relation::Unrelated => {}
                        settled => {
                            verdict = settled;
                            break 'search;
                        }
                    }
                }
            }
        }

        drop(guard);
        self.counters.subsume_signature_hits += signature_hits;
        match verdict {
            Relation::Unrelated => {}
            Relation::Subsumes => self.counters.subsumed_clauses += 1,
            Relation::Strengthens(_) => self.counters.strengthened_clauses += 1,
        }
    }
}

/// The literal of `literals` with the smallest occurrence list, earliest on ties.
fn watch_literal<E: OccurrenceEntry>(
    index: &OccurrenceIndex<E>,
    literals: &[CLiteral],
) -> CLiteral {
    let mut min_literal = literals[0];
    let mut min_size = usize::MAX;

    for literal in literals {
        let size = index.entries(*literal).len();
        if size >= min_size {
            continue;
        }
        min_literal = *literal;
        min_size = size;
    }

    min_literal
}
