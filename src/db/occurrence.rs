/*!
Occurrence lists: per-literal lists of (keys to) the clauses containing that literal.

An index is built fresh by each technique, from the clauses stored at that point, and discarded when the technique returns.
Construction applies a per-technique clause size limit: a clause longer than the limit is excluded from *every* bucket it would touch, and each of its atoms is flagged ineligible.
Otherwise, a clause with *k* literals appears in exactly *k* buckets, each keyed by the dense [index](crate::structures::literal::Literal::index) of a literal it contains.

Each technique comes in a plain and a signature-accelerated variant, differing only in whether entries carry a local copy of the clause signature for cheap pre-checks.
Rather than branch on a mode flag throughout, the index --- and each technique --- is generic over the [entry](OccurrenceEntry) kind:

- [BareOccurrence] is a key alone.
- [SignedOccurrence] duplicates the signature of the clause next to its key, so occurrence scans may prune without an indirection through the clause.

The `SIGNED` constant gates the pre-check code paths, and is resolved at compile time.
*/

use crate::{
    db::{clause::db_clause::dbClause, clause::ClauseDB, ClauseKey},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// An entry of an occurrence list: at least a key, perhaps a signature.
pub trait OccurrenceEntry: Copy {
    /// Whether the signature methods of the entry are backed by a real signature, and so whether signature pre-checks may be used.
    const SIGNED: bool;

    /// The entry for a stored clause.
    fn of(clause: &dbClause) -> Self;

    /// The key of the clause.
    fn key(&self) -> ClauseKey;

    /// The atom signature of the clause.
    fn hash(&self) -> u64;

    /// The collision bits of the signature of the clause.
    fn unique(&self) -> u64;
}

/// An occurrence of a clause, by key alone.
#[derive(Clone, Copy, Debug)]
pub struct BareOccurrence {
    key: ClauseKey,
}

impl OccurrenceEntry for BareOccurrence {
    const SIGNED: bool = false;

    fn of(clause: &dbClause) -> Self {
        BareOccurrence { key: clause.key() }
    }

    fn key(&self) -> ClauseKey {
        self.key
    }

    // Inert: with every bit set no pre-check can certify anything.
    fn hash(&self) -> u64 {
        u64::MAX
    }

    fn unique(&self) -> u64 {
        u64::MAX
    }
}

/// An occurrence of a clause, with a local copy of the signature of the clause.
#[derive(Clone, Copy, Debug)]
pub struct SignedOccurrence {
    key: ClauseKey,
    hash: u64,
    unique: u64,
}

impl OccurrenceEntry for SignedOccurrence {
    const SIGNED: bool = true;

    fn of(clause: &dbClause) -> Self {
        SignedOccurrence {
            key: clause.key(),
            hash: clause.hash(),
            unique: clause.unique(),
        }
    }

    fn key(&self) -> ClauseKey {
        self.key
    }

    fn hash(&self) -> u64 {
        self.hash
    }

    fn unique(&self) -> u64 {
        self.unique
    }
}

/// Occurrence lists for every literal up to some atom ceiling, with a per-atom eligibility flag.
pub struct OccurrenceIndex<E: OccurrenceEntry> {
    /// A bucket per literal slot.
    buckets: Vec<Vec<E>>,

    /// False for any atom with an occurrence in a clause excluded for size.
    eligible: Vec<bool>,
}

impl<E: OccurrenceEntry> OccurrenceIndex<E> {
    /// An index with empty buckets for both polarities of every atom up to `atom_ceiling`, and every atom eligible.
    pub fn empty(atom_ceiling: Atom) -> Self {
        OccurrenceIndex {
            buckets: vec![Vec::default(); 2 * (atom_ceiling as usize + 1)],
            eligible: vec![true; atom_ceiling as usize + 1],
        }
    }

    /// An index over every stored clause of `clause_db` whose size is within `size_limit`.
    ///
    /// A clause longer than the limit is kept out of every bucket, and each of its atoms is flagged ineligible.
    pub fn from_clauses(clause_db: &ClauseDB, size_limit: usize) -> Self {
        let mut index = Self::empty(clause_db.atom_ceiling());
        let mut excluded = 0;

        for clause in clause_db.all_original_clauses() {
            if clause.size() > size_limit {
                excluded += 1;
                for atom in clause.atoms() {
                    index.eligible[atom as usize] = false;
                }
            } else {
                let entry = E::of(clause);
                for literal in clause.literals() {
                    index.buckets[literal.index()].push(entry);
                }
            }
        }

        log::trace!(target: targets::OCCURRENCE,
            "Indexed {} clauses, {excluded} excluded for size",
            clause_db.clause_count() - excluded);
        index
    }

    /// The entries of the occurrence list for `literal`.
    pub fn entries(&self, literal: CLiteral) -> &[E] {
        &self.buckets[literal.index()]
    }

    /// Appends an entry to the occurrence list for `literal`.
    pub fn push(&mut self, literal: CLiteral, entry: E) {
        self.buckets[literal.index()].push(entry);
    }

    /// Whether no occurrence of `atom` was excluded for size during construction.
    pub fn eligible(&self, atom: Atom) -> bool {
        self.eligible[atom as usize]
    }
}
