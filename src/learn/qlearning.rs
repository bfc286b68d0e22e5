use crate::games::nim::{Action, Nim};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Tabular Q-learning agent for Nim
pub struct QLearner {
    q: HashMap<(Vec<u32>, Action), f64>,
    alpha: f64,
    epsilon: f64,
}

impl QLearner {
    pub fn new(alpha: f64, epsilon: f64) -> Self {
        QLearner {
            q: HashMap::new(),
            alpha,
            epsilon,
        }
    }

    /// Number of state-action pairs seen so far
    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }

    /// Learned value of taking `action` in `state`, 0 when unseen
    pub fn q_value(&self, state: &[u32], action: Action) -> f64 {
        self.q
            .get(&(state.to_vec(), action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Q(s, a) <- Q(s, a) + alpha * ((reward + best_future) - Q(s, a))
    pub fn update(&mut self, old_state: &[u32], action: Action, new_state: &[u32], reward: f64) {
        let old = self.q_value(old_state, action);
        let best_future = self.best_future_reward(new_state);
        let updated = old + self.alpha * ((reward + best_future) - old);
        self.q.insert((old_state.to_vec(), action), updated);
    }

    /// Best learned value over the actions available in `state`, 0 when
    /// there are none
    pub fn best_future_reward(&self, state: &[u32]) -> f64 {
        Nim::available_actions(state)
            .into_iter()
            .map(|action| self.q_value(state, action))
            .fold(0.0, f64::max)
    }

    /// Epsilon-greedy action selection; greedy when `explore` is false
    pub fn choose_action<R: Rng>(&self, state: &[u32], explore: bool, rng: &mut R) -> Action {
        let actions = Nim::available_actions(state);
        assert!(!actions.is_empty(), "no actions available in this state");

        if explore && rng.gen::<f64>() < self.epsilon {
            return *actions.choose(rng).expect("actions is not empty");
        }

        actions
            .into_iter()
            .max_by(|&a, &b| {
                self.q_value(state, a)
                    .partial_cmp(&self.q_value(state, b))
                    .expect("q-values are never NaN")
            })
            .expect("actions is not empty")
    }

    /// Plays `games` games of Nim against itself, propagating the terminal
    /// -1/+1 rewards into the Q-table
    pub fn train<R: Rng>(&mut self, games: usize, rng: &mut R) {
        for _ in 0..games {
            let mut game = Nim::new(Nim::default_piles());

            // each player's previous move, rewarded once the game resolves
            let mut last: [Option<(Vec<u32>, Action)>; 2] = [None, None];

            loop {
                let state = game.piles().to_vec();
                let action = self.choose_action(&state, true, rng);

                last[game.player() as usize] = Some((state.clone(), action));
                game.apply(action).expect("chosen action is valid");
                let new_state = game.piles().to_vec();

                if game.winner().is_some() {
                    // the mover took the last object and lost
                    self.update(&state, action, &new_state, -1.0);
                    if let Some((winner_state, winner_action)) =
                        last[game.player() as usize].clone()
                    {
                        self.update(&winner_state, winner_action, &new_state, 1.0);
                    }
                    break;
                }

                if let Some((previous_state, previous_action)) =
                    last[game.player() as usize].clone()
                {
                    self.update(&previous_state, previous_action, &new_state, 0.0);
                }
            }
        }
    }
}
