/*!
Configuration of a context.

All configuration for a context is contained within the context.
A configuration is read when a technique is invoked, and never mutated by the library.

The caps are cost controls: clauses longer than the relevant cap, and occurrence lists longer than theirs, are skipped rather than scanned.
*/

/// The technique a call to [simplify](crate::context::Context::simplify) applies.
///
/// Exactly one technique is applied per call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Technique {
    /// Forward subsumption and strengthening.
    Subsume,

    /// Blocked clause elimination.
    Block,

    /// Bounded variable elimination.
    Elim,
}

impl std::str::FromStr for Technique {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subsume" => Ok(Technique::Subsume),
            "block" => Ok(Technique::Block),
            "elim" => Ok(Technique::Elim),
            _ => Err(()),
        }
    }
}

/// Configuration for blocked clause elimination.
#[derive(Clone, Debug)]
pub struct BlockConfig {
    /// Clauses longer than this are excluded from the occurrence index, and their atoms from candidacy.
    pub max_clause_size: usize,

    /// Literals whose negation has more occurrences than this are skipped.
    pub max_occurrences: usize,
}

impl Default for BlockConfig {
    fn default() -> Self {
        BlockConfig {
            max_clause_size: 1_000,
            max_occurrences: 1_000,
        }
    }
}

/// Configuration for bounded variable elimination.
#[derive(Clone, Debug)]
pub struct ElimConfig {
    /// Clauses longer than this are excluded from the resolvent scan.
    pub max_clause_size: usize,

    /// Atoms with more occurrences than this, in either polarity, are skipped.
    pub max_occurrences: usize,

    /// The slack added to |pos| + |neg| when bounding the count of non-tautological resolvents.
    pub bound: usize,
}

impl Default for ElimConfig {
    fn default() -> Self {
        ElimConfig {
            max_clause_size: 10_000,
            max_occurrences: 1_000,
            bound: 16,
        }
    }
}

/// Configuration for forward subsumption.
#[derive(Clone, Debug)]
pub struct SubsumeConfig {
    /// Clauses longer than this are not candidates for subsumption or strengthening.
    pub max_clause_size: usize,
}

impl Default for SubsumeConfig {
    fn default() -> Self {
        SubsumeConfig {
            max_clause_size: 1_000,
        }
    }
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The technique applied by a call to [simplify](crate::context::Context::simplify).
    pub technique: Technique,

    /// Whether to use the signature-accelerated variant of each technique.
    ///
    /// The signature paths only ever shortcut to the verdict the plain paths would reach, so this affects cost, never counts.
    pub signatures: bool,

    /// Configuration for blocked clause elimination.
    pub block: BlockConfig,

    /// Configuration for bounded variable elimination.
    pub elim: ElimConfig,

    /// Configuration for forward subsumption.
    pub subsume: SubsumeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            technique: Technique::Subsume,
            signatures: false,
            block: BlockConfig::default(),
            elim: ElimConfig::default(),
            subsume: SubsumeConfig::default(),
        }
    }
}
