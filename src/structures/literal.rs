//! Literals are atoms paired with a (boolean) polarity.
//!
//! The 'canonical' implementation of the literal trait is the [CLiteral] structure, made of an atom and a boolean.
//!
//! An example:
//!
//! ```rust
//! # use stoat_prep::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert_eq!(literal.negate(), -literal);
//! assert_eq!(literal.as_int(), 79);
//! assert_eq!((-literal).as_int(), -79);
//! ```
//!
//! Every per-literal structure (occurrence lists, mark arrays) is indexed by the dense [index](Literal::index) of a literal: `2a + 1` for the positive literal on atom *a* and `2a` for the negative literal.
//! Both polarities of every atom thereby receive distinct, contiguous slots.

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The dense index of the literal, usable as the index to an array over literals.
    fn index(&self) -> usize;

    /// The literal in its integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;
}

/// The representation of a literal as an atom paired with a boolean.
///
/// Ordered by atom and then polarity, with 'false' (strictly) less than 'true'.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CLiteral {
    /// The atom of the literal.
    atom: Atom,

    /// The polarity of the literal.
    polarity: bool,
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        CLiteral { atom, polarity }
    }

    fn negate(&self) -> Self {
        CLiteral {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> Atom {
        self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }

    fn index(&self) -> usize {
        ((self.atom as usize) << 1) | (self.polarity as usize)
    }

    fn as_int(&self) -> isize {
        match self.polarity {
            true => self.atom as isize,
            false => -(self.atom as isize),
        }
    }
}

impl std::ops::Neg for CLiteral {
    type Output = CLiteral;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_slots() {
        let p = CLiteral::new(7, true);
        assert_eq!(p.index(), 15);
        assert_eq!(p.negate().index(), 14);
        assert_ne!(CLiteral::new(8, false).index(), p.index());
    }
}
