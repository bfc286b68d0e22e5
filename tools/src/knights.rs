use ailab::logic::{model_check, Formula};
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct KnightsCommand {}

/// The knight/knave symbols for one character
fn character(name: &str) -> (Formula, Formula) {
    (
        Formula::sym(&format!("{name} is a Knight")),
        Formula::sym(&format!("{name} is a Knave")),
    )
}

/// A character is exactly one of knight and knave
fn exactly_one(knight: &Formula, knave: &Formula) -> Vec<Formula> {
    vec![
        Formula::or([knight.clone(), knave.clone()]),
        Formula::not(Formula::and([knight.clone(), knave.clone()])),
    ]
}

/// Knights tell the truth and knaves lie, so a statement pins down its
/// speaker's kind
fn says(knight: &Formula, knave: &Formula, statement: Formula) -> Vec<Formula> {
    vec![
        Formula::implies(knight.clone(), statement.clone()),
        Formula::implies(knave.clone(), Formula::not(statement)),
    ]
}

fn puzzles() -> Vec<(&'static str, Formula)> {
    let (a_knight, a_knave) = character("A");
    let (b_knight, b_knave) = character("B");
    let (c_knight, c_knave) = character("C");

    // Puzzle 0. A says "I am both a knight and a knave."
    let puzzle0 = Formula::and(
        exactly_one(&a_knight, &a_knave).into_iter().chain(says(
            &a_knight,
            &a_knave,
            Formula::and([a_knight.clone(), a_knave.clone()]),
        )),
    );

    // Puzzle 1. A says "We are both knaves." B says nothing.
    let puzzle1 = Formula::and(
        exactly_one(&a_knight, &a_knave)
            .into_iter()
            .chain(exactly_one(&b_knight, &b_knave))
            .chain(says(
                &a_knight,
                &a_knave,
                Formula::and([a_knave.clone(), b_knave.clone()]),
            )),
    );

    // Puzzle 2. A says "We are the same kind."
    //           B says "We are of different kinds."
    let same_kind = Formula::or([
        Formula::and([a_knight.clone(), b_knight.clone()]),
        Formula::and([a_knave.clone(), b_knave.clone()]),
    ]);
    let different_kind = Formula::or([
        Formula::and([a_knight.clone(), b_knave.clone()]),
        Formula::and([a_knave.clone(), b_knight.clone()]),
    ]);
    let puzzle2 = Formula::and(
        exactly_one(&a_knight, &a_knave)
            .into_iter()
            .chain(exactly_one(&b_knight, &b_knave))
            .chain(says(&a_knight, &a_knave, same_kind))
            .chain(says(&b_knight, &b_knave, different_kind)),
    );

    // Puzzle 3. A says either "I am a knight." or "I am a knave.", but you
    // don't know which. B says "A said 'I am a knave'." B says "C is a
    // knave." C says "A is a knight."
    let puzzle3 = Formula::and(
        exactly_one(&a_knight, &a_knave)
            .into_iter()
            .chain(exactly_one(&b_knight, &b_knave))
            .chain(exactly_one(&c_knight, &c_knave))
            // A made one of the two statements, we just don't know which
            .chain([Formula::or([
                Formula::and(says(&a_knight, &a_knave, a_knight.clone())),
                Formula::and(says(&a_knight, &a_knave, a_knave.clone())),
            ])])
            // B claims the statement A made was "I am a knave"
            .chain(says(
                &b_knight,
                &b_knave,
                Formula::and(says(&a_knight, &a_knave, a_knave.clone())),
            ))
            .chain(says(&b_knight, &b_knave, c_knave.clone()))
            .chain(says(&c_knight, &c_knave, a_knight.clone())),
    );

    vec![
        ("Puzzle 0", puzzle0),
        ("Puzzle 1", puzzle1),
        ("Puzzle 2", puzzle2),
        ("Puzzle 3", puzzle3),
    ]
}

pub fn run(_cmd: KnightsCommand) -> Result<()> {
    let symbols = ["A", "B", "C"]
        .iter()
        .flat_map(|name| {
            let (knight, knave) = character(name);
            [knight, knave]
        })
        .collect::<Vec<_>>();

    for (name, knowledge) in puzzles() {
        println!("{name}");
        for symbol in &symbols {
            if model_check(&knowledge, symbol) {
                let Formula::Sym(text) = symbol else {
                    unreachable!()
                };
                println!("    {text}");
            }
        }
    }

    Ok(())
}
