use stoat_prep::{
    config::{Config, Technique},
    context::Context,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

fn subsume_context(config: Config, clauses: &[&[isize]]) -> Context {
    let mut the_context = Context::from_config(config);

    for clause in clauses {
        let literals: Vec<CLiteral> = clause
            .iter()
            .map(|l| CLiteral::new(l.unsigned_abs() as Atom, l.is_positive()))
            .collect();
        assert!(the_context.add_clause(literals).is_ok());
    }

    the_context
}

fn pass_counts(signatures: bool, clauses: &[&[isize]]) -> (usize, usize) {
    let mut config = Config::default();
    config.technique = Technique::Subsume;
    config.signatures = signatures;

    let mut the_context = subsume_context(config, clauses);
    the_context.simplify();

    assert!(the_context.marks.clear_of_marks());
    (
        the_context.counters.subsumed_clauses,
        the_context.counters.strengthened_clauses,
    )
}

#[test]
fn a_subset_subsumes() {
    assert_eq!(pass_counts(false, &[&[1, 2, 3], &[1, 2]]), (1, 0));
    assert_eq!(pass_counts(true, &[&[1, 2, 3], &[1, 2]]), (1, 0));
}

// (1 2) resolves with (-1 2 3) on atom 1 to (2 3), a strict subset, so the
// larger clause could drop -1.
#[test]
fn a_near_subset_strengthens() {
    assert_eq!(pass_counts(false, &[&[1, 2], &[-1, 2, 3]]), (0, 1));
    assert_eq!(pass_counts(true, &[&[1, 2], &[-1, 2, 3]]), (0, 1));
}

#[test]
fn disjoint_clauses_are_unrelated() {
    assert_eq!(pass_counts(false, &[&[1, 2], &[3, 4, 5]]), (0, 0));
}

// Two literals would have to be dropped, which is no longer strengthening.
#[test]
fn doubly_negated_clauses_are_unrelated() {
    assert_eq!(pass_counts(false, &[&[-1, -2], &[1, 2, 3]]), (0, 0));
    assert_eq!(pass_counts(true, &[&[-1, -2], &[1, 2, 3]]), (0, 0));
}

// Candidates are scheduled smallest first, so the verdict does not depend on
// the order clauses were added.
#[test]
fn verdicts_ignore_store_order() {
    assert_eq!(pass_counts(false, &[&[1, 2], &[1, 2, 3]]), (1, 0));
    assert_eq!(pass_counts(false, &[&[1, 2, 3], &[1, 2]]), (1, 0));
}

#[test]
fn oversized_candidates_are_skipped() {
    let mut config = Config::default();
    config.technique = Technique::Subsume;
    config.subsume.max_clause_size = 3;

    let mut the_context = subsume_context(config, &[&[1, 2], &[1, 2, 3, 4]]);
    the_context.simplify();
    assert_eq!(the_context.counters.subsumed_clauses, 0);
    assert_eq!(the_context.counters.strengthened_clauses, 0);
}

// A chain: (1 2) subsumes both larger clauses, each settled once.
#[test]
fn each_candidate_is_settled_once() {
    let formula: &[&[isize]] = &[&[1, 2, 3, 4], &[1, 2], &[1, 2, 3]];
    assert_eq!(pass_counts(false, formula), (2, 0));
    assert_eq!(pass_counts(true, formula), (2, 0));
}
