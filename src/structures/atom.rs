/*!
(The internal representation of) an atom (aka. a 'variable').

Atoms are things to which assigning a (boolean) value is of interest.

Each atom is a u32 in `1..=ceiling` for some ceiling fixed by the formula (the `vars` field of a DIMACS preamble, or the highest atom mentioned in a clause).
Atom 0 is reserved, and never appears in a clause.

This representation allows atoms --- and, likewise, [literals](crate::structures::literal) --- to be used as the indices of a structure, e.g. an occurrence list or a mark array, without any translation.

# Notes
- In the SAT literature these are often called 'variables', while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a variable.
pub type Atom = u32;
