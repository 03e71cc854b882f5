use stoat_prep::{
    config::{Config, Technique},
    context::Context,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

fn block_context(config: Config, clauses: &[&[isize]]) -> Context {
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

fn blocked_count(signatures: bool, clauses: &[&[isize]]) -> usize {
    let mut config = Config::default();
    config.technique = Technique::Block;
    config.signatures = signatures;

    let mut the_context = block_context(config, clauses);
    the_context.simplify();

    assert!(the_context.marks.clear_of_marks());
    the_context.counters.blocked_clauses
}

// Every resolvent on the shared atoms is tautological, so each clause is
// blocked on each of its literals.
#[test]
fn blocked_at_every_literal() {
    assert_eq!(blocked_count(false, &[&[1, 2], &[-1, -2]]), 4);
    assert_eq!(blocked_count(true, &[&[1, 2], &[-1, -2]]), 4);
}

// 3 is pure, so the two clauses containing it are vacuously blocked on it,
// and nothing else is.
#[test]
fn blocked_on_a_pure_literal() {
    let formula: &[&[isize]] = &[&[1, 2], &[1, -2, 3], &[-1, 3]];
    assert_eq!(blocked_count(false, formula), 2);
    assert_eq!(blocked_count(true, formula), 2);
}

#[test]
fn no_clause_blocked() {
    let formula: &[&[isize]] = &[&[1, 2], &[-1, 2], &[1, -2], &[-1, -2]];
    assert_eq!(blocked_count(false, formula), 0);
    assert_eq!(blocked_count(true, formula), 0);
}

// Both clauses of {(1 2 3), (-1 -2)} resolve tautologically on atoms 1 and 2,
// and (1 2 3) is blocked on the pure literal 3 as well.
#[test]
fn mixed_verdicts() {
    let formula: &[&[isize]] = &[&[1, 2, 3], &[-1, -2]];
    assert_eq!(blocked_count(false, formula), 5);
    assert_eq!(blocked_count(true, formula), 5);
}

// An oversized clause is excluded from the index and takes the candidacy of
// each of its atoms with it.
#[test]
fn oversized_clause_disqualifies_its_atoms() {
    let mut config = Config::default();
    config.technique = Technique::Block;
    config.block.max_clause_size = 2;

    let mut the_context = block_context(config, &[&[1, 2, 3], &[-1, -2]]);
    the_context.simplify();
    assert_eq!(the_context.counters.blocked_clauses, 0);
}

#[test]
fn over_cap_occurrence_lists_are_skipped() {
    let mut config = Config::default();
    config.technique = Technique::Block;
    config.block.max_occurrences = 0;

    let mut the_context = block_context(config, &[&[1, 2], &[-1, -2]]);
    the_context.simplify();
    assert_eq!(the_context.counters.blocked_clauses, 0);
}

#[test]
fn repeated_passes_agree() {
    let mut config = Config::default();
    config.technique = Technique::Block;

    let mut the_context = block_context(config, &[&[1, 2], &[1, -2, 3], &[-1, 3]]);
    let first = the_context.simplify().blocked_clauses;
    let second = the_context.simplify().blocked_clauses;
    assert_eq!(first, second);
}
