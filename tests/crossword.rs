use ailab::csp::crossword::{Crossword, Direction, Variable};
use ailab::csp::solver::{render, Solver};

const STRUCTURE: &str = "\
___
_##
_##";

#[test]
fn parse_finds_the_slots() {
    let crossword = Crossword::parse(STRUCTURE, "CAT\nCOW\nDOG").unwrap();

    let variables: Vec<Variable> = crossword.variables().iter().copied().collect();
    assert_eq!(
        variables,
        vec![
            Variable {
                i: 0,
                j: 0,
                direction: Direction::Across,
                length: 3,
            },
            Variable {
                i: 0,
                j: 0,
                direction: Direction::Down,
                length: 3,
            },
        ]
    );

    // the two slots share their first letter
    assert_eq!(variables[0].cells()[0], (0, 0));
    assert_eq!(
        crossword.overlap(variables[0], variables[1]),
        Some((0, 0))
    );
    assert_eq!(crossword.neighbors(variables[0]), vec![variables[1]]);
}

#[test]
fn solves_a_crossing_pair() {
    let crossword = Crossword::parse(STRUCTURE, "CAT\nCOW\nDOG").unwrap();
    let mut solver = Solver::new(&crossword);

    let assignment = solver.solve().expect("the puzzle is solvable");
    assert_eq!(assignment.len(), 2);

    // distinct words agreeing on the shared first letter
    let words: Vec<&String> = assignment.values().collect();
    assert_ne!(words[0], words[1]);
    for word in words {
        assert!(word.starts_with('C'));
    }

    let grid = render(&crossword, &assignment);
    assert_eq!(grid.lines().count(), 3);
    assert!(grid.starts_with('C'));
}

#[test]
fn conflicting_words_have_no_solution() {
    // both slots would need the same word, but assignments must be distinct
    let crossword = Crossword::parse(STRUCTURE, "CAT\nDOG").unwrap();
    let mut solver = Solver::new(&crossword);
    assert_eq!(solver.solve(), None);
}

#[test]
fn node_consistency_drops_misfits() {
    let crossword = Crossword::parse(STRUCTURE, "CAT\nCOW\nBIRD\nOX").unwrap();
    let mut solver = Solver::new(&crossword);
    solver.enforce_node_consistency();

    for &var in crossword.variables() {
        assert!(solver.domain(var).iter().all(|word| word.len() == 3));
    }
}

#[test]
fn ac3_prunes_unsupported_words() {
    // the across slot starts where the down slot ends, so an across word
    // survives only if some down word ends with its first letter
    let crossword = Crossword::parse("_#\n__", "AB\nBB\nCD").unwrap();
    let mut solver = Solver::new(&crossword);
    solver.enforce_node_consistency();

    assert!(solver.ac3(None));

    let across = Variable {
        i: 1,
        j: 0,
        direction: Direction::Across,
        length: 2,
    };
    let down = Variable {
        i: 0,
        j: 0,
        direction: Direction::Down,
        length: 2,
    };
    assert_eq!(
        solver.domain(across).iter().collect::<Vec<_>>(),
        vec!["BB"]
    );
    assert!(!solver.domain(down).contains("CD"));

    let assignment = solver.solve().expect("the reduced puzzle is solvable");
    assert_eq!(assignment[&across], "BB");
    assert_eq!(assignment[&down], "AB");
}
