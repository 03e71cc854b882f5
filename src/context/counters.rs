use std::time::Duration;

/// Counts for various things which count, roughly.
///
/// All counts are observational: no technique rewrites the formula on the basis of a count.
/// The counters are reset at the start of each [simplify](crate::context::Context::simplify) call, so a run on fixed input and configuration always reports the same counts.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// Clauses found to be blocked.
    pub blocked_clauses: usize,

    /// Atoms whose resolvent count was within bound, and so could be eliminated.
    pub eliminated_atoms: usize,

    /// Resolvent checks made at the literal level during elimination.
    ///
    /// With signatures enabled only ambiguous pairs reach the literal level, so this count is lower on signed runs.
    pub elim_resolvents: usize,

    /// Clauses found to be subsumed by some other clause.
    pub subsumed_clauses: usize,

    /// Clauses some other clause could strengthen by removing a literal.
    pub strengthened_clauses: usize,

    /// Blocked clause checks settled by a signature certificate alone.
    pub block_signature_hits: usize,

    /// Resolvent pairs certified non-tautological by signature alone.
    pub elim_signature_hits: usize,

    /// Subsumption candidates skipped on a signature mismatch.
    pub subsume_signature_hits: usize,

    /// The time taken by the pass.
    pub time: Duration,
}

impl Counters {
    /// Clears every count.
    pub fn reset(&mut self) {
        *self = Counters::default();
    }
}
