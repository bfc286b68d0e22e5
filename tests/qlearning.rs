use ailab::games::nim::Nim;
use ailab::learn::qlearning::QLearner;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn update_applies_the_learning_rule() {
    let mut ai = QLearner::new(0.5, 0.0);

    // terminal new state: no future reward
    ai.update(&[1, 0], (0, 1), &[0, 0], -1.0);
    assert!((ai.q_value(&[1, 0], (0, 1)) - (-0.5)).abs() < 1e-9);

    // a second identical update moves halfway to the target again
    ai.update(&[1, 0], (0, 1), &[0, 0], -1.0);
    assert!((ai.q_value(&[1, 0], (0, 1)) - (-0.75)).abs() < 1e-9);
}

#[test]
fn best_future_reward_defaults_to_zero() {
    let ai = QLearner::new(0.5, 0.0);

    assert_eq!(ai.best_future_reward(&[0, 0]), 0.0);
    assert_eq!(ai.best_future_reward(&[2, 1]), 0.0);
}

#[test]
fn future_rewards_feed_back_into_updates() {
    let mut ai = QLearner::new(0.5, 0.0);

    // make (1, 1) look good from state [0, 2]
    ai.update(&[0, 2], (1, 1), &[0, 0], 1.0);
    assert!((ai.best_future_reward(&[0, 2]) - 0.5).abs() < 1e-9);

    // updating towards [0, 2] now includes that future value
    ai.update(&[0, 3], (1, 1), &[0, 2], 0.0);
    assert!((ai.q_value(&[0, 3], (1, 1)) - 0.25).abs() < 1e-9);
}

#[test]
fn greedy_choice_picks_the_highest_q() {
    let mut ai = QLearner::new(0.5, 0.0);
    let mut rng = StdRng::seed_from_u64(9);

    ai.update(&[2], (0, 1), &[1], 1.0);
    ai.update(&[2], (0, 2), &[0], -1.0);

    assert_eq!(ai.choose_action(&[2], false, &mut rng), (0, 1));
}

#[test]
fn self_play_training_fills_the_table() {
    let mut ai = QLearner::new(0.5, 0.1);
    let mut rng = StdRng::seed_from_u64(17);

    ai.train(500, &mut rng);
    assert!(!ai.is_empty());

    // values stay within the reward bounds
    let value = ai.best_future_reward(&Nim::default_piles());
    assert!((-1.0..=1.0).contains(&value));
}

#[test]
fn trained_ai_takes_the_winning_move_from_a_single_pile_of_two() {
    let mut ai = QLearner::new(0.5, 0.1);
    let mut rng = StdRng::seed_from_u64(23);
    ai.train(2_000, &mut rng);

    // leaving exactly one object forces the opponent to take it
    assert_eq!(ai.choose_action(&[0, 0, 0, 2], false, &mut rng), (3, 1));
}
