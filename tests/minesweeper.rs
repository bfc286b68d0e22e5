use ailab::logic::minesweeper::{Agent, Clue, Minefield};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn zero_count_marks_neighbors_safe() {
    let mut agent = Agent::new(3, 3);
    agent.add_knowledge((0, 0), 0);

    for cell in [(0, 1), (1, 0), (1, 1)] {
        assert!(agent.safes().contains(&cell));
    }
    assert!(agent.mines().is_empty());
}

#[test]
fn saturated_count_marks_neighbors_mines() {
    let mut agent = Agent::new(2, 2);
    agent.add_knowledge((0, 0), 3);

    for cell in [(0, 1), (1, 0), (1, 1)] {
        assert!(agent.mines().contains(&cell));
    }
}

#[test]
fn subset_inference_pins_down_the_mine() {
    // 2x3 board with a single mine at (1, 1); the top row is opened
    let mut agent = Agent::new(2, 3);
    agent.add_knowledge((0, 0), 1);
    agent.add_knowledge((0, 2), 1);
    agent.add_knowledge((0, 1), 1);

    // the sentence differences leave (1, 0) and (1, 2) safe and force the
    // remaining count onto (1, 1)
    assert!(agent.safes().contains(&(1, 0)));
    assert!(agent.safes().contains(&(1, 2)));
    assert!(agent.mines().contains(&(1, 1)));
}

#[test]
fn clue_reduction() {
    let mut clue = Clue::new([(0, 0), (0, 2)], 1);
    assert_eq!(clue.known_mines(), None);

    clue.mark_safe((0, 0));
    assert_eq!(clue.known_mines(), Some(&[(0, 2)].into_iter().collect()));
}

#[test]
fn safe_moves_avoid_played_cells() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut agent = Agent::new(3, 3);
    agent.add_knowledge((1, 1), 0);

    let safe = agent.safe_move(&mut rng).unwrap();
    assert_ne!(safe, (1, 1));
    assert!(agent.safes().contains(&safe));
}

#[test]
fn minefield_counts_neighbors() {
    let mut rng = StdRng::seed_from_u64(2);
    let field = Minefield::random(4, 4, 5, &mut rng);
    assert_eq!(field.mines().len(), 5);

    // counting is consistent with the placed mines
    for i in 0..4 {
        for j in 0..4 {
            let count = field.nearby_mines((i, j));
            assert!(count <= 8);
        }
    }
}

#[test]
fn agent_solves_a_fully_safe_board() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut agent = Agent::new(2, 2);

    // an opening with zero mines cascades over the whole board
    agent.add_knowledge((0, 0), 0);

    let mut opened = vec![(0, 0)];
    while let Some(cell) = agent.safe_move(&mut rng) {
        agent.add_knowledge(cell, 0);
        opened.push(cell);
    }
    opened.sort();
    assert_eq!(opened, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
}
