use ailab::logic::{model_check, Formula};

/// Knowledge for the classic puzzle where A says "I am both a knight and a
/// knave."
fn puzzle() -> Formula {
    let knight = Formula::sym("A is a Knight");
    let knave = Formula::sym("A is a Knave");

    Formula::and([
        Formula::or([knight.clone(), knave.clone()]),
        Formula::not(Formula::and([knight.clone(), knave.clone()])),
        Formula::implies(
            knight.clone(),
            Formula::and([knight.clone(), knave.clone()]),
        ),
        Formula::implies(
            knave.clone(),
            Formula::not(Formula::and([knight, knave])),
        ),
    ])
}

#[test]
fn the_braggart_is_a_knave() {
    let knowledge = puzzle();

    assert!(model_check(&knowledge, &Formula::sym("A is a Knave")));
    assert!(!model_check(&knowledge, &Formula::sym("A is a Knight")));
}

#[test]
fn unsatisfiable_knowledge_entails_anything() {
    let contradiction = Formula::and([Formula::sym("p"), Formula::not(Formula::sym("p"))]);

    assert!(model_check(&contradiction, &Formula::sym("q")));
    assert!(model_check(&contradiction, &Formula::not(Formula::sym("q"))));
}

#[test]
fn disjunction_alone_entails_neither_side() {
    let knowledge = Formula::or([Formula::sym("p"), Formula::sym("q")]);

    assert!(!model_check(&knowledge, &Formula::sym("p")));
    assert!(!model_check(&knowledge, &Formula::sym("q")));
    assert!(model_check(
        &Formula::and([knowledge, Formula::not(Formula::sym("p"))]),
        &Formula::sym("q"),
    ));
}
