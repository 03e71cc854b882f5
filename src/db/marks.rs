/*!
Transient ternary per-literal marks, shared by every technique.

A check marks the literals of one clause, probes the marks while scanning other clauses, and must leave every slot clear on every exit path --- a residual mark would corrupt whichever check runs next.
To enforce the balance structurally rather than by discipline, marks are only ever set through a [MarkGuard], which clears the slots of its literals when dropped.

The sign convention: marking a clause sets the slot of each of its literals to +1 and the slot of the negation to −1.
A probe of some other literal *l* then reads:
- +1, *l* occurs in the marked clause.
- −1, the negation of *l* occurs in the marked clause.
- 0, the atom of *l* does not occur in the marked clause.
*/

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// A ternary mark per literal slot.
pub struct Marks {
    sign: Vec<i8>,
}

impl Default for Marks {
    fn default() -> Self {
        Marks {
            sign: Vec::default(),
        }
    }
}

impl Marks {
    /// Extends the mark array to cover both polarities of every atom up to `atom_ceiling`.
    ///
    /// Existing marks are untouched, though as every check balances its marks the array is all-zero whenever this is called.
    pub fn ensure(&mut self, atom_ceiling: Atom) {
        let required = 2 * (atom_ceiling as usize + 1);
        if self.sign.len() < required {
            self.sign.resize(required, 0);
        }
    }

    /// Marks the given literals, returning a guard which clears the marks when dropped.
    ///
    /// The caller must not hold a second guard over an overlapping literal set --- checks are sequential, so this is upheld by structure.
    pub fn guard<'m, 'c>(&'m mut self, literals: &'c [CLiteral]) -> MarkGuard<'m, 'c> {
        for literal in literals {
            self.sign[literal.index()] = 1;
            self.sign[literal.negate().index()] = -1;
        }
        MarkGuard {
            marks: self,
            literals,
        }
    }

    /// Whether every slot of the mark array is clear.
    pub fn clear_of_marks(&self) -> bool {
        self.sign.iter().all(|sign| *sign == 0)
    }
}

/// Marks for the literals of one clause, held for the duration of one check.
pub struct MarkGuard<'m, 'c> {
    marks: &'m mut Marks,
    literals: &'c [CLiteral],
}

impl MarkGuard<'_, '_> {
    /// The mark of `literal`: +1 if present, −1 if the negation is present, 0 otherwise.
    pub fn sign(&self, literal: CLiteral) -> i8 {
        self.marks.sign[literal.index()]
    }
}

impl Drop for MarkGuard<'_, '_> {
    fn drop(&mut self) {
        for literal in self.literals {
            self.marks.sign[literal.index()] = 0;
            self.marks.sign[literal.negate().index()] = 0;
        }
    }
}
