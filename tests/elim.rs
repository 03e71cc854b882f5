use stoat_prep::{
    config::{Config, Technique},
    context::Context,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

fn elim_context(config: Config, clauses: &[&[isize]]) -> Context {
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

fn eliminated_count(signatures: bool, bound: usize, clauses: &[&[isize]]) -> usize {
    let mut config = Config::default();
    config.technique = Technique::Elim;
    config.signatures = signatures;
    config.elim.bound = bound;

    let mut the_context = elim_context(config, clauses);
    the_context.simplify();

    assert!(the_context.marks.clear_of_marks());
    the_context.counters.eliminated_atoms
}

// Every resolvent of the two halves is tautological, so each atom is
// eliminable with no slack at all.
#[test]
fn all_resolvents_tautological() {
    let formula: &[&[isize]] = &[&[1, 2, 3], &[1, 2, 3], &[-1, -2, -3], &[-1, -2, -3]];
    assert_eq!(eliminated_count(false, 0, formula), 3);
    assert_eq!(eliminated_count(true, 0, formula), 3);
}

// Atom 1 has 2 x 3 non-tautological resolvents against 5 occurrences, so it
// is eliminable with slack 1 and not with slack 0.
// Every other atom is pure, and pure atoms are not candidates.
#[test]
fn bound_is_exact() {
    let formula: &[&[isize]] = &[&[1, 2], &[1, 3], &[-1, 4], &[-1, 5], &[-1, 6]];
    assert_eq!(eliminated_count(false, 0, formula), 0);
    assert_eq!(eliminated_count(true, 0, formula), 0);
    assert_eq!(eliminated_count(false, 1, formula), 1);
    assert_eq!(eliminated_count(true, 1, formula), 1);
}

#[test]
fn pure_atoms_are_not_candidates() {
    assert_eq!(eliminated_count(false, 16, &[&[1, 2], &[1, 3]]), 0);
}

#[test]
fn over_cap_occurrence_lists_are_skipped() {
    let mut config = Config::default();
    config.technique = Technique::Elim;
    config.elim.max_occurrences = 1;

    // Atom 1 occurs twice positively, over the cap.
    let mut the_context = elim_context(config, &[&[1, 2], &[1, 3], &[-1, 2]]);
    the_context.simplify();
    assert_eq!(the_context.counters.eliminated_atoms, 0);
}

// With signatures the all-tautological pairs are ambiguous (the signatures
// overlap outside the pivot) and reach the literal level; the disjoint pairs
// of the second formula never do.
#[test]
fn signatures_settle_disjoint_pairs() {
    let mut config = Config::default();
    config.technique = Technique::Elim;
    config.signatures = true;

    let mut the_context = elim_context(config, &[&[1, 2], &[1, 3], &[-1, 4], &[-1, 5], &[-1, 6]]);
    the_context.simplify();
    assert_eq!(the_context.counters.elim_signature_hits, 6);
    assert_eq!(the_context.counters.elim_resolvents, 0);
}

// A mix within one positive occurrence list: (1 2) x (-1 2 4) shares atom 2
// outside the pivot and so needs a literal check, while the other three
// pairs are certified by signature alone.
#[test]
fn ambiguous_and_certified_pairs_mix() {
    let formula: &[&[isize]] = &[&[1, 2], &[1, 3], &[-1, 2, 4], &[-1, 5]];

    let mut config = Config::default();
    config.technique = Technique::Elim;
    config.signatures = true;

    let mut the_context = elim_context(config, formula);
    the_context.simplify();

    assert_eq!(the_context.counters.eliminated_atoms, 1);
    assert_eq!(the_context.counters.elim_signature_hits, 3);
    assert_eq!(the_context.counters.elim_resolvents, 1);
    assert!(the_context.marks.clear_of_marks());

    // The plain run reaches the same verdict, checking every pair.
    assert_eq!(eliminated_count(false, 16, formula), 1);
}

#[test]
fn literal_checks_are_counted() {
    let mut config = Config::default();
    config.technique = Technique::Elim;

    let mut the_context = elim_context(config, &[&[1, 2], &[1, 3], &[-1, 4], &[-1, 5], &[-1, 6]]);
    the_context.simplify();
    assert_eq!(the_context.counters.elim_resolvents, 6);
}
