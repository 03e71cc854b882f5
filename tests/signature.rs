//! Randomised checks that the signature paths are sound accelerations.
//!
//! On any formula, a signed run and a plain run of the same technique must
//! report the same verdict counts: a signature certificate may settle a check
//! early, never differently.

use rand::{rngs::StdRng, Rng, SeedableRng};

use stoat_prep::{
    config::{Config, Technique},
    context::Context,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

const TECHNIQUES: [Technique; 3] = [Technique::Subsume, Technique::Block, Technique::Elim];

fn random_formula(rng: &mut StdRng, atom_ceiling: Atom, clause_count: usize) -> Vec<Vec<CLiteral>> {
    let mut formula = Vec::with_capacity(clause_count);

    for _ in 0..clause_count {
        let size = rng.random_range(2..=5);
        let mut clause: Vec<CLiteral> = Vec::with_capacity(size);

        while clause.len() < size {
            let atom = rng.random_range(1..=atom_ceiling);
            if clause.iter().any(|l| l.atom() == atom) {
                continue;
            }
            clause.push(CLiteral::new(atom, rng.random_bool(0.5)));
        }
        formula.push(clause);
    }

    formula
}

/// The verdict counts of one pass: blocked, eliminated, subsumed, strengthened.
fn verdicts(
    technique: Technique,
    signatures: bool,
    formula: &[Vec<CLiteral>],
) -> (usize, usize, usize, usize) {
    let mut config = Config::default();
    config.technique = technique;
    config.signatures = signatures;
    // Small enough for random formulas to cross occasionally.
    config.elim.bound = 4;

    let mut the_context = Context::from_config(config);
    for clause in formula {
        assert!(the_context.add_clause(clause.clone()).is_ok());
    }

    the_context.simplify();
    assert!(the_context.marks.clear_of_marks());

    (
        the_context.counters.blocked_clauses,
        the_context.counters.eliminated_atoms,
        the_context.counters.subsumed_clauses,
        the_context.counters.strengthened_clauses,
    )
}

fn verdicts_agree(atom_ceiling: Atom, clause_count: usize) {
    for seed in 0..12 {
        let mut rng = StdRng::seed_from_u64(seed);
        let formula = random_formula(&mut rng, atom_ceiling, clause_count);

        for technique in TECHNIQUES {
            let plain = verdicts(technique, false, &formula);
            let signed = verdicts(technique, true, &formula);
            assert_eq!(plain, signed, "{technique:?} diverged on seed {seed}");
        }
    }
}

// A dense atom range, so subsumption and tautological resolvents are common.
#[test]
fn signed_and_plain_verdicts_agree_on_dense_formulas() {
    verdicts_agree(12, 40);
}

// Atoms beyond 64, so signature buckets collide and the collision bits carry
// the certificates.
#[test]
fn signed_and_plain_verdicts_agree_across_bucket_collisions() {
    verdicts_agree(150, 60);
}

#[test]
fn signed_runs_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    let formula = random_formula(&mut rng, 30, 50);

    for technique in TECHNIQUES {
        let first = verdicts(technique, true, &formula);
        let second = verdicts(technique, true, &formula);
        assert_eq!(first, second);
    }
}
